//! The impls and functions
//!
use std::fmt;
use crate::check::{Check, CheckOutcome, CheckResult, Measurement, Range, ScalarContext, State};

impl State {
    /// The plugin exit code belonging to the state.
    pub fn code(&self) -> i32 {
        match self {
            State::Ok => 0,
            State::Warning => 1,
            State::Critical => 2,
            State::Unknown => 3,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            State::Ok => "OK",
            State::Warning => "WARNING",
            State::Critical => "CRITICAL",
            State::Unknown => "UNKNOWN",
        };
        write!(f, "{}", text)
    }
}

impl Range {
    pub fn new(start: f64, end: f64) -> Self {
        Range { start, end }
    }
    /// Everything from `start` up.
    pub fn at_least(start: f64) -> Self {
        Range::new(start, f64::INFINITY)
    }
    /// Whether the value is acceptable.
    pub fn matches(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }
    pub fn violation(&self) -> String {
        format!("outside range {}", self)
    }
}

impl fmt::Display for Range {
    /// Shortest notation: a zero start and an infinite end are left out.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.start == f64::NEG_INFINITY {
            write!(f, "~:")?;
        } else if self.start != 0.0 {
            write!(f, "{}:", self.start)?;
        }
        if self.end != f64::INFINITY {
            write!(f, "{}", self.end)?;
        } else if self.start == 0.0 {
            write!(f, "0:")?;
        }
        Ok(())
    }
}

impl Measurement {
    /// A measurement evaluated with the context of the same name.
    pub fn new(name: &str, value: f64) -> Self {
        Measurement::with_context(name, value, name)
    }
    pub fn with_context(name: &str, value: f64, context: &str) -> Self {
        Measurement { name: name.to_string(), value, context: context.to_string() }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} is {}", self.name, self.value)
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.hint {
            Some(hint) => write!(f, "{} ({})", self.measurement, hint),
            None => write!(f, "{}", self.measurement),
        }
    }
}

impl ScalarContext {
    /// A context with the same range for warning and critical.
    pub fn new(name: &str, range: Range) -> Self {
        ScalarContext::with_ranges(name, range, range)
    }
    pub fn with_ranges(name: &str, warning: Range, critical: Range) -> Self {
        ScalarContext { name: name.to_string(), warning, critical }
    }
    pub fn evaluate(&self, measurement: Measurement) -> CheckResult {
        let (state, hint) = if !self.critical.matches(measurement.value) {
            (State::Critical, Some(self.critical.violation()))
        } else if !self.warning.matches(measurement.value) {
            (State::Warning, Some(self.warning.violation()))
        } else {
            (State::Ok, None)
        };
        CheckResult { state, measurement, hint }
    }
    /// The performance data entry: `'label'=value;warning;critical`.
    pub fn performance(&self, measurement: &Measurement) -> String {
        let label = if measurement.name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            measurement.name.clone()
        } else {
            format!("'{}'", measurement.name.replace('\'', "''"))
        };
        format!("{}={};{};{}", label, measurement.value, self.warning, self.critical)
    }
}

impl Check {
    pub fn new(name: &str) -> Self {
        Check { name: name.to_uppercase(), contexts: Vec::new() }
    }
    pub fn add_context(&mut self, context: ScalarContext) {
        self.contexts.push(context);
    }
    fn find_context(&self, name: &str) -> Option<&ScalarContext> {
        self.contexts.iter().find(|r| r.name == name)
    }
    /// Evaluate all measurements, in order, into the outcome.
    pub fn evaluate<I>(
        &self,
        measurements: I,
        verbosity: u8,
    ) -> CheckOutcome
    where
        I: IntoIterator<Item = Measurement>,
    {
        let mut results = Vec::new();
        let mut perfdata = Vec::new();

        for measurement in measurements {
            match self.find_context(&measurement.context) {
                Some(context) => {
                    perfdata.push(context.performance(&measurement));
                    results.push(context.evaluate(measurement));
                }
                None => {
                    let hint = Some(format!("no context named '{}'", measurement.context));
                    results.push(CheckResult { state: State::Unknown, measurement, hint });
                }
            }
        }

        let state = results.iter().map(|r| r.state).max().unwrap_or(State::Unknown);
        let summary = match results.iter().find(|r| r.state == state) {
            Some(result) => result.to_string(),
            None => "no check results".to_string(),
        };
        let long_output = results.iter()
            .filter(|r| verbosity >= 2 || (verbosity >= 1 && r.state != State::Ok))
            .map(|r| format!("{}: {}", r.state.to_string().to_lowercase(), r))
            .collect();

        CheckOutcome { name: self.name.clone(), state, summary, results, perfdata, long_output }
    }
    /// The outcome for a run that failed before producing its measurements.
    pub fn unknown(
        &self,
        error: &anyhow::Error,
    ) -> CheckOutcome
    {
        CheckOutcome {
            name: self.name.clone(),
            state: State::Unknown,
            summary: format!("{:#}", error),
            results: Vec::new(),
            perfdata: Vec::new(),
            long_output: Vec::new(),
        }
    }
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        self.state.code()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} - {}", self.name, self.state, self.summary)?;
        if !self.perfdata.is_empty() {
            write!(f, " | {}", self.perfdata.join(" "))?;
        }
        for line in &self.long_output {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_range_bounds_are_inclusive() {
        let range = Range::new(1.0, 3.0);
        assert!(range.matches(1.0));
        assert!(range.matches(3.0));
        assert!(!range.matches(0.5));
        assert!(!range.matches(3.5));
        assert!(Range::at_least(5.0).matches(f64::INFINITY));
        assert!(!Range::at_least(5.0).matches(f64::NAN));
    }

    #[test]
    fn unit_range_display() {
        assert_eq!(Range::new(0.0, 2.0).to_string(), "2");
        assert_eq!(Range::at_least(5.0).to_string(), "5:");
        assert_eq!(Range::new(1.0, 1.0).to_string(), "1:1");
        assert_eq!(Range::new(0.0, 0.0).to_string(), "0");
        assert_eq!(Range::new(f64::NEG_INFINITY, 3.0).to_string(), "~:3");
        assert_eq!(Range::at_least(0.0).to_string(), "0:");
    }

    #[test]
    fn unit_health_range_only_passes_healthy() {
        let range = Range::new(0.0, 2.0);
        assert!(range.matches(1.0));
        assert!(!range.matches(-1.0));
    }

    #[test]
    fn unit_infinity_is_outside_bounded_range() {
        assert!(!Range::new(0.0, 0.0).matches(f64::INFINITY));
    }

    #[test]
    fn unit_evaluate_all_ok_uses_first_measurement_as_summary() {
        let mut check = Check::new("mesosmaster");
        check.add_context(ScalarContext::new("master health", Range::new(0.0, 2.0)));
        check.add_context(ScalarContext::new("active slaves", Range::at_least(1.0)));
        let outcome = check.evaluate(vec![
            Measurement::new("master health", 1.0),
            Measurement::new("active slaves", 3.0),
        ], 0);
        assert_eq!(outcome.state, State::Ok);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(outcome.summary, "master health is 1");
        assert_eq!(outcome.to_string(), "MESOSMASTER OK - master health is 1 | 'master health'=1;2;2 'active slaves'=3;1:;1:");
    }

    #[test]
    fn unit_evaluate_summary_uses_first_worst_result() {
        let mut check = Check::new("mesosmaster");
        check.add_context(ScalarContext::new("master health", Range::new(0.0, 2.0)));
        check.add_context(ScalarContext::with_ranges("active slaves", Range::at_least(5.0), Range::at_least(1.0)));
        let outcome = check.evaluate(vec![
            Measurement::new("master health", 1.0),
            Measurement::new("active slaves", 3.0),
        ], 1);
        assert_eq!(outcome.state, State::Warning);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(outcome.summary, "active slaves is 3 (outside range 5:)");
        assert_eq!(outcome.long_output, vec!["warning: active slaves is 3 (outside range 5:)".to_string()]);
    }

    #[test]
    fn unit_evaluate_unconfigured_context_is_unknown() {
        let check = Check::new("mesosmaster");
        let outcome = check.evaluate(vec![Measurement::new("master health", 1.0)], 0);
        assert_eq!(outcome.state, State::Unknown);
        assert_eq!(outcome.exit_code(), 3);
    }

    #[test]
    fn unit_evaluate_nothing_is_unknown() {
        let check = Check::new("mesosmaster");
        let outcome = check.evaluate(Vec::new(), 0);
        assert_eq!(outcome.state, State::Unknown);
        assert_eq!(outcome.summary, "no check results");
    }

    #[test]
    fn unit_unknown_outcome() {
        let check = Check::new("mesosmaster");
        let error = anyhow::anyhow!("missing field `master/elected`");
        let outcome = check.unknown(&error);
        assert_eq!(outcome.exit_code(), 3);
        assert_eq!(outcome.to_string(), "MESOSMASTER UNKNOWN - missing field `master/elected`");
    }

    #[test]
    fn unit_performance_label_quoting() {
        let context = ScalarContext::new("framework", Range::new(0.0, 0.0));
        assert_eq!(context.performance(&Measurement::new("framework", 0.0)), "framework=0;0;0");
        assert_eq!(context.performance(&Measurement::with_context("framework it's", 0.0, "framework")), "'framework it''s'=0;0;0");
    }
}

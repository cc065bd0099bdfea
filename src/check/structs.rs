//! The structs
//!
/// The state of a single result or of the check as a whole.
///
/// The ordering is by significance, so the overall state is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum State {
    Ok,
    Warning,
    Critical,
    Unknown,
}
/// A Nagios threshold range.
///
/// `start` and `end` are inclusive, infinite when unbounded.
/// Values outside the range alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}
/// A named threshold policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarContext {
    pub name: String,
    pub warning: Range,
    pub critical: Range,
}
/// A named numeric fact produced by a probe.
///
/// `context` names the [ScalarContext] it is evaluated with, this normally is the measurement
/// name itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
    pub context: String,
}
/// The evaluation of one [Measurement].
///
/// `hint` is filled out for results that are not OK.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub state: State,
    pub measurement: Measurement,
    pub hint: Option<String>,
}
/// The set of contexts, and the name used as the first word of the output.
#[derive(Debug, Clone, Default)]
pub struct Check {
    pub name: String,
    pub contexts: Vec<ScalarContext>,
}
/// Everything needed to report to the monitoring system.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: String,
    pub state: State,
    pub summary: String,
    pub results: Vec<CheckResult>,
    pub perfdata: Vec<String>,
    pub long_output: Vec<String>,
}

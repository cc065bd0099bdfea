//! The impls and functions
//!
use std::time::{Duration, Instant};
use log::*;
use anyhow::{Context, Result};
use regex::Regex;
use crate::check::{Check, Measurement, Range, ScalarContext};
use crate::frameworks::ClusterState;
use crate::health;
use crate::metrics_snapshot::ClusterSnapshot;
use crate::probe::{FrameworkStrategy, ProbeConfig, ProbeContext};
use crate::redirect::{self, LeaderDiscovery};
use crate::utility;
use crate::Opts;
use crate::{ACTIVE_FRAMEWORKS, ACTIVE_LEADER, ACTIVE_SLAVES, CHECK_NAME, DEFAULT_FRAMEWORKS, FRAMEWORK, HEALTHY, LEADER_REDIRECT, MASTER_HEALTH};

impl ProbeConfig {
    /// Resolve the options into the configuration of a run.
    pub fn from_options(
        options: &Opts,
    ) -> Result<ProbeConfig>
    {
        let host = utility::set_host(&options.host)?;
        let port = utility::set_port(&options.port)?;
        let credentials = utility::set_credentials(&options.username, &options.password);

        let framework_strategy = if options.framework.is_empty() {
            FrameworkStrategy::ActiveCount { minimum: options.frameworks.unwrap_or(DEFAULT_FRAMEWORKS) }
        } else {
            if options.frameworks.is_some() {
                anyhow::bail!("--frameworks and --framework cannot be combined");
            }
            let framework_regexes = options.framework.iter()
                .map(|framework| Regex::new(framework).with_context(|| format!("Invalid framework regex: {}", framework)))
                .collect::<Result<Vec<Regex>>>()?;
            FrameworkStrategy::RegisteredByName(framework_regexes)
        };

        Ok(ProbeConfig {
            host,
            port,
            credentials,
            min_slaves: options.slaves,
            framework_strategy,
            verbosity: options.verbose.min(3),
            timeout: Duration::from_secs(options.timeout),
        })
    }
    pub fn base_uri(&self) -> String {
        utility::resolve_base_uri(&self.host, self.port)
    }
    /// The check with the threshold policy for every measurement this configuration produces.
    pub fn check(&self) -> Check {
        let mut check = Check::new(CHECK_NAME);
        let health_range = Range::new(HEALTHY - 1.0, HEALTHY + 1.0);
        check.add_context(ScalarContext::new(LEADER_REDIRECT, health_range));
        check.add_context(ScalarContext::new(MASTER_HEALTH, health_range));
        check.add_context(ScalarContext::new(ACTIVE_SLAVES, Range::at_least(self.min_slaves as f64)));
        check.add_context(ScalarContext::new(ACTIVE_LEADER, Range::new(1.0, 1.0)));
        match &self.framework_strategy {
            FrameworkStrategy::ActiveCount { minimum } => {
                check.add_context(ScalarContext::new(ACTIVE_FRAMEWORKS, Range::at_least(*minimum as f64)));
            }
            FrameworkStrategy::RegisteredByName(_) => {
                check.add_context(ScalarContext::new(FRAMEWORK, Range::new(0.0, 0.0)));
            }
        }
        check
    }
}

impl ProbeContext {
    pub fn new(
        config: &ProbeConfig,
    ) -> Result<ProbeContext>
    {
        Ok(ProbeContext {
            client: utility::build_client(config.timeout)?,
            credentials: config.credentials.clone(),
        })
    }
}

/// Run all probe steps, and return the measurements in emission order.
///
/// An error means the run could not complete: nothing of it should be reported besides the error.
pub fn probe(
    config: &ProbeConfig,
    context: &ProbeContext,
) -> Result<std::vec::IntoIter<Measurement>>
{
    info!("begin probe of {}:{}", config.host, config.port);
    let timer = Instant::now();

    let base_uri = config.base_uri();
    let (redirect, leader_redirect) = match redirect::discover_leader(context, &base_uri) {
        LeaderDiscovery::Unreachable(measurement) => {
            info!("end probe, master unreachable: {:?}", timer.elapsed());
            return Ok(vec![measurement].into_iter());
        }
        LeaderDiscovery::Resolved { redirect, measurement } => (redirect, measurement),
    };
    let leader_uri = redirect.resolved_base_uri.as_str();

    let mut measurements = vec![health::check_health(context, leader_uri)];

    let snapshot = ClusterSnapshot::fetch(context, leader_uri)?;
    measurements.push(snapshot.active_slaves());
    measurements.push(snapshot.active_leader());
    match &config.framework_strategy {
        FrameworkStrategy::ActiveCount { .. } => measurements.push(snapshot.active_frameworks()),
        FrameworkStrategy::RegisteredByName(framework_regexes) => {
            let state = ClusterState::fetch(context, leader_uri)?;
            measurements.extend(state.measurements(framework_regexes));
        }
    }

    measurements.push(leader_redirect);

    info!("end probe: {:?}", timer.elapsed());
    Ok(measurements.into_iter())
}

//! check_mesos: a Nagios compatible health check for Mesos masters.
//!
//! The check contacts a master, finds the leader via `/master/redirect`, and measures the
//! leader's `/health` and `/metrics/snapshot` endpoints. The measurements are evaluated against
//! the configured thresholds, and reported as a single plugin output line plus exit code.
//!
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

use clap::Parser;

pub mod check;
pub mod frameworks;
pub mod health;
pub mod metrics_snapshot;
pub mod probe;
pub mod redirect;
pub mod utility;

use check::{Check, CheckOutcome};
use probe::{ProbeConfig, ProbeContext};

pub const CHECK_NAME: &str = "mesosmaster";
pub const DEFAULT_PORT: u16 = 5050;
pub const DEFAULT_SLAVES: u64 = 1;
pub const DEFAULT_FRAMEWORKS: u64 = 1;
pub const DEFAULT_TIMEOUT: u64 = 10;

pub const HEALTHY: f64 = 1.0;
pub const UNHEALTHY: f64 = -1.0;

// measurement and context names
pub const LEADER_REDIRECT: &str = "leader redirect";
pub const MASTER_HEALTH: &str = "master health";
pub const ACTIVE_SLAVES: &str = "active slaves";
pub const ACTIVE_LEADER: &str = "active leader";
pub const ACTIVE_FRAMEWORKS: &str = "active frameworks";
pub const FRAMEWORK: &str = "framework";

#[derive(Debug, Clone, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// The hostname of a Mesos master to check, optionally with scheme
    #[arg(short = 'H', long)]
    pub host: Option<String>,
    /// The Mesos master HTTP port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,
    /// Username for HTTP basic authentication
    #[arg(short, long)]
    pub username: Option<String>,
    /// Password for HTTP basic authentication
    #[arg(short, long)]
    pub password: Option<String>,
    /// The minimum number of slaves the cluster must be running
    #[arg(short = 'n', long, default_value_t = DEFAULT_SLAVES)]
    pub slaves: u64,
    /// The minimum number of frameworks the cluster must be running (default 1)
    #[arg(short = 'F', long, conflicts_with = "framework")]
    pub frameworks: Option<u64>,
    /// Check that a framework matching the regex is registered, may be specified multiple times
    #[arg(long)]
    pub framework: Vec<String>,
    /// Timeout in seconds for every HTTP request
    #[arg(long, default_value_t = DEFAULT_TIMEOUT)]
    pub timeout: u64,
    /// Increase output verbosity (use up to 3 times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Perform the check described by the options.
///
/// Every failure ends up in the outcome, as UNKNOWN if nothing could be measured.
pub fn run(
    options: &Opts,
) -> CheckOutcome
{
    let config = match ProbeConfig::from_options(options) {
        Ok(config) => config,
        Err(error) => return Check::new(CHECK_NAME).unknown(&error),
    };
    let check = config.check();
    let context = match ProbeContext::new(&config) {
        Ok(context) => context,
        Err(error) => return check.unknown(&error),
    };
    match probe::probe(&config, &context) {
        Ok(measurements) => check.evaluate(measurements, config.verbosity),
        Err(error) => check.unknown(&error),
    }
}

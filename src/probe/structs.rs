//! The structs
//!
use std::time::Duration;
use regex::Regex;
use reqwest::blocking::Client;
use crate::utility::Credentials;

/// How frameworks are measured; the two are mutually exclusive.
#[derive(Debug, Clone)]
pub enum FrameworkStrategy {
    /// `active frameworks` from the metrics snapshot, at least `minimum`.
    ActiveCount { minimum: u64 },
    /// A `framework <regex>` measurement per regex, from `/master/state.json`.
    RegisteredByName(Vec<Regex>),
}
/// The resolved, immutable configuration of one run.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub credentials: Option<Credentials>,
    pub min_slaves: u64,
    pub framework_strategy: FrameworkStrategy,
    pub verbosity: u8,
    pub timeout: Duration,
}
/// What every probe step needs: the HTTP client and the credentials.
///
/// Log output goes through the `log` macros; the backend and its level are set up once by the
/// binary.
#[derive(Debug, Clone)]
pub struct ProbeContext {
    pub client: Client,
    pub credentials: Option<Credentials>,
}

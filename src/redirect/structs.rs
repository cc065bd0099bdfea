//! The structs
//!
use crate::check::Measurement;

/// What the redirect response tells about the contacted master.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectResult {
    /// The contacted master is the leader itself.
    pub is_leader: bool,
    /// The base URI of the leader, used for all following requests.
    pub resolved_base_uri: String,
    pub status_code: u16,
}
/// The outcome of the redirect discovery.
///
/// The `leader redirect` measurement is carried, not emitted: on the resolved path it must be
/// the last measurement of the probe.
#[derive(Debug, Clone, PartialEq)]
pub enum LeaderDiscovery {
    /// No response at all: the measurement is the only one of this probe.
    Unreachable(Measurement),
    Resolved {
        redirect: RedirectResult,
        measurement: Measurement,
    },
}

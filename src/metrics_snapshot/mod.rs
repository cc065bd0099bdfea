//! Module for reading `/metrics/snapshot` on the leader.
//!
//! The `/metrics/snapshot` endpoint returns a flat JSON object of all current master metrics,
//! keyed by slash separated names. Only three of them are used:
//! - `master/slaves_active`: the number of active agents.
//! - `master/elected`: 1 if the answering master is the elected leader, 0 otherwise.
//! - `master/frameworks_active`: the number of active frameworks.
//!
//! The metrics are encoded as JSON numbers, usually with a fraction (`3.0`).
//! A missing key makes the snapshot unusable, and ends the probe with an error.
//!
mod structs;
mod functions;

pub use structs::*;

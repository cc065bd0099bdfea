//! Module for reading `/health` on the leader.
//!
//! The master answers `200 OK` or `204 No Content` when healthy.
//! Anything else, including not getting an answer, is unhealthy.
//!
mod functions;

pub use functions::*;

//! Module for reading the registered frameworks from `/master/state.json` on the leader.
//!
//! This is the alternative to counting active frameworks: every `--framework` regex is matched
//! against the framework names, and produces a `framework <regex>` measurement with the
//! `unregistered_time` of the last matching framework:
//! - no framework matched: infinity.
//! - the matching framework is inactive and was never unregistered (`unregistered_time` 0):
//!   infinity.
//!
//! A registered framework has an `unregistered_time` of 0, which is the only value accepted.
//!
mod structs;
mod functions;

pub use structs::*;

//! Module for evaluating measurements against thresholds, Nagios plugin style.
//!
//! A probe produces an ordered sequence of [Measurement]s. Every measurement names a context,
//! and the [ScalarContext] with that name holds a warning and a critical [Range]:
//! - a value outside the critical range is [State::Critical],
//! - otherwise a value outside the warning range is [State::Warning],
//! - otherwise it is [State::Ok].
//!
//! A measurement referring to a context that isn't configured is [State::Unknown].
//!
//! The [Check] turns the sequence into a [CheckOutcome]: the overall state is the worst state,
//! the summary is taken from the first measurement (or the first measurement with the worst
//! state if something is wrong), and the exit code follows the plugin convention:
//! OK 0, WARNING 1, CRITICAL 2, UNKNOWN 3.
//!
//! The first line of output looks like:
//! ```text
//! MESOSMASTER OK - master health is 1 | 'master health'=1;2;2 'active slaves'=3;1:;1:
//! ```
//!
mod structs;
mod functions;

pub use structs::*;

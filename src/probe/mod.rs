//! The probe of a Mesos master.
//!
//! One run goes through:
//! 1. [crate::redirect::discover_leader]: find the leader via the contacted master. If the
//!    contacted master doesn't answer, the probe ends here with a single `leader redirect`
//!    measurement.
//! 2. [crate::health::check_health]: `master health` on the leader.
//! 3. [crate::metrics_snapshot::ClusterSnapshot::fetch]: `active slaves`, `active leader` and,
//!    depending on the [FrameworkStrategy], `active frameworks`.
//! 4. For [FrameworkStrategy::RegisteredByName] only: [crate::frameworks::ClusterState::fetch]
//!    and a `framework <regex>` measurement per regex.
//! 5. The `leader redirect` measurement of step 1.
//!
//! `leader redirect` is determined first but emitted last: the first measurement is the
//! summary line when everything is OK, and that should be `master health`.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;

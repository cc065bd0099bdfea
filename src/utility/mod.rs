//! Utilities shared by the probe steps.
//!
//! - URI handling: scheme detection, base URI resolution, joining endpoint paths.
//! - The single HTTP request helper all endpoints go through, carrying the optional basic
//!   authentication [Credentials].
//! - Option resolution: command line option, else environment variable (set directly or via
//!   `.env`), else the built-in default.
//! - Logging setup for the binary.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;

//! Module for probing `/master/redirect` on a master.
//!
//! Every master answers `/master/redirect` with a `307 Temporary Redirect` pointing at the
//! current leader, the leader included. The `Location` header is scheme relative on current
//! versions:
//! ```text
//! HTTP/1.1 307 Temporary Redirect
//! Location: //mesos-2.local:5050/master/redirect
//! ```
//! Older versions return an absolute URI, which is taken as is.
//!
//! The request is a HEAD request, and redirects are not followed.
//! This is the only step that ends a probe early: if the master can't be reached at all,
//! there is nothing left to ask.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;

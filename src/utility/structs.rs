//! The structs
//!
/// HTTP basic authentication credentials.
///
/// These are applied uniformly to every request of a probe run.
/// A username without a password sends an empty password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

//! The structs
//!
/// The part of `/metrics/snapshot` used by the probe.
///
/// All other keys in the response are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClusterSnapshot {
    #[serde(rename = "master/slaves_active")]
    pub slaves_active: f64,
    #[serde(rename = "master/elected")]
    pub elected: f64,
    #[serde(rename = "master/frameworks_active")]
    pub frameworks_active: f64,
}

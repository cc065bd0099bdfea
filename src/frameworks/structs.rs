//! The structs
//!
/// The part of `/master/state.json` used by the probe.
///
/// ```json
/// {
///   "activated_slaves": 3,
///   "leader": "master@10.0.0.1:5050",
///   "frameworks": [
///     {
///       "id": "20150610-114301-16777343-5050-1024-0000",
///       "name": "marathon",
///       "active": true,
///       "unregistered_time": 0
///     }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ClusterState {
    #[serde(default)]
    pub frameworks: Vec<Framework>,
}
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Framework {
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub unregistered_time: f64,
}

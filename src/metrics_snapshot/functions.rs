//! The impls and functions
//!
use std::time::Instant;
use log::*;
use anyhow::{Context, Result};
use reqwest::Method;
use crate::check::Measurement;
use crate::metrics_snapshot::ClusterSnapshot;
use crate::probe::ProbeContext;
use crate::utility;
use crate::{ACTIVE_FRAMEWORKS, ACTIVE_LEADER, ACTIVE_SLAVES};

impl ClusterSnapshot {
    /// Request and parse `/metrics/snapshot` on the leader.
    pub fn fetch(
        context: &ProbeContext,
        leader_uri: &str,
    ) -> Result<ClusterSnapshot>
    {
        info!("begin metrics snapshot");
        let timer = Instant::now();

        let url = utility::join_uri(leader_uri, "metrics/snapshot");
        let response = utility::http_request(&context.client, Method::GET, &url, &context.credentials)
            .with_context(|| format!("Unable to read {}", url))?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Unexpected status from {}: {}", url, status);
        }
        // the snapshot endpoint doesn't always name a charset
        let data_from_http = response.text_with_charset("utf-8")
            .with_context(|| format!("Unable to read the response body of {}", url))?;
        let snapshot = ClusterSnapshot::parse(&data_from_http)
            .with_context(|| format!("Invalid metrics snapshot from {}", url))?;
        debug!("{:?}", snapshot);

        info!("end metrics snapshot: {:?}", timer.elapsed());
        Ok(snapshot)
    }
    // This is a separate function in order to allow the tests to use it.
    pub fn parse(
        http_data: &str,
    ) -> Result<ClusterSnapshot>
    {
        serde_json::from_str(http_data)
            .with_context(|| "Could not parse metrics snapshot json data")
    }
    pub fn active_slaves(&self) -> Measurement {
        Measurement::new(ACTIVE_SLAVES, self.slaves_active)
    }
    pub fn active_leader(&self) -> Measurement {
        Measurement::new(ACTIVE_LEADER, self.elected)
    }
    pub fn active_frameworks(&self) -> Measurement {
        Measurement::new(ACTIVE_FRAMEWORKS, self.frameworks_active)
    }
}

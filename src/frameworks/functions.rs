//! The impls and functions
//!
use std::time::Instant;
use log::*;
use anyhow::{Context, Result};
use regex::Regex;
use reqwest::Method;
use crate::check::Measurement;
use crate::frameworks::ClusterState;
use crate::probe::ProbeContext;
use crate::utility;
use crate::FRAMEWORK;

impl ClusterState {
    pub fn fetch(
        context: &ProbeContext,
        leader_uri: &str,
    ) -> Result<ClusterState>
    {
        info!("begin state read");
        let timer = Instant::now();

        let url = utility::join_uri(leader_uri, "master/state.json");
        let response = utility::http_request(&context.client, Method::GET, &url, &context.credentials)
            .with_context(|| format!("Unable to read {}", url))?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Unexpected status from {}: {}", url, status);
        }
        let data_from_http = response.text_with_charset("utf-8")
            .with_context(|| format!("Unable to read the response body of {}", url))?;
        let state = ClusterState::parse(&data_from_http)
            .with_context(|| format!("Invalid master state from {}", url))?;

        info!("end state read: {:?}", timer.elapsed());
        Ok(state)
    }
    pub fn parse(
        http_data: &str,
    ) -> Result<ClusterState>
    {
        serde_json::from_str(http_data)
            .with_context(|| "Could not parse master state json data")
    }
    /// The unregistered time of the last framework whose name matches, infinity if there is none.
    pub fn unregistered_time(
        &self,
        framework_regex: &Regex,
    ) -> f64
    {
        match self.frameworks.iter().rev().find(|r| framework_regex.is_match(&r.name)) {
            Some(framework) if !framework.active && framework.unregistered_time == 0.0 => {
                debug!("framework {} matching {} is inactive", framework.name, framework_regex);
                f64::INFINITY
            }
            Some(framework) => {
                debug!("framework {} matching {}: unregistered_time {}", framework.name, framework_regex, framework.unregistered_time);
                framework.unregistered_time
            }
            None => {
                debug!("no framework matching {}", framework_regex);
                f64::INFINITY
            }
        }
    }
    /// One `framework <regex>` measurement per regex, in the given order.
    pub fn measurements(
        &self,
        framework_regexes: &[Regex],
    ) -> Vec<Measurement>
    {
        framework_regexes.iter()
            .map(|regex| Measurement::with_context(&format!("framework {}", regex), self.unregistered_time(regex), FRAMEWORK))
            .collect()
    }
}

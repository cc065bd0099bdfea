//! The functions
//!
use std::time::Instant;
use log::*;
use reqwest::{Method, StatusCode};
use crate::check::Measurement;
use crate::probe::ProbeContext;
use crate::utility;
use crate::{HEALTHY, MASTER_HEALTH, UNHEALTHY};

pub fn classify_health(status: StatusCode) -> f64 {
    match status {
        StatusCode::OK | StatusCode::NO_CONTENT => HEALTHY,
        _ => UNHEALTHY,
    }
}

/// Request `/health` on the leader and turn the answer into the `master health` measurement.
pub fn check_health(
    context: &ProbeContext,
    leader_uri: &str,
) -> Measurement
{
    info!("begin health check");
    let timer = Instant::now();

    let url = utility::join_uri(leader_uri, "health");
    let value = match utility::http_request(&context.client, Method::GET, &url, &context.credentials) {
        Ok(response) => classify_health(response.status()),
        Err(error) => {
            warn!("Unable to reach {}: {}", url, error);
            UNHEALTHY
        }
    };

    info!("end health check: {:?}", timer.elapsed());
    Measurement::new(MASTER_HEALTH, value)
}

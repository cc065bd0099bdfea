//! The impls and functions
//!
use std::time::Instant;
use log::*;
use reqwest::{header::LOCATION, Method, StatusCode};
use crate::check::Measurement;
use crate::probe::ProbeContext;
use crate::redirect::{LeaderDiscovery, RedirectResult};
use crate::utility;
use crate::{HEALTHY, LEADER_REDIRECT, UNHEALTHY};

/// Only a temporary redirect is the expected answer.
pub fn classify_redirect(status: StatusCode) -> f64 {
    if status == StatusCode::TEMPORARY_REDIRECT {
        HEALTHY
    } else {
        UNHEALTHY
    }
}

/// Work out the leader from the contacted URI and the `Location` header.
///
/// A scheme relative location gets the scheme of the contacted URI, an absolute location is used
/// verbatim. Without a location the contacted master is used.
pub fn resolve_redirect(
    contacted_uri: &str,
    status: StatusCode,
    location: Option<&str>,
) -> RedirectResult
{
    let resolved_base_uri = match location {
        Some(location) if utility::has_scheme(location) => location.to_string(),
        Some(location) => format!("{}:{}", utility::scheme_of(contacted_uri), location),
        None => contacted_uri.to_string(),
    };
    let is_leader = location.is_none()
        || utility::authority_of(&resolved_base_uri) == utility::authority_of(contacted_uri);
    RedirectResult {
        is_leader,
        resolved_base_uri,
        status_code: status.as_u16(),
    }
}

/// Ask the contacted master where the leader is.
pub fn discover_leader(
    context: &ProbeContext,
    base_uri: &str,
) -> LeaderDiscovery
{
    info!("begin redirect discovery: base URI is {}", base_uri);
    let timer = Instant::now();

    let url = utility::join_uri(base_uri, "master/redirect");
    let response = match utility::http_request(&context.client, Method::HEAD, &url, &context.credentials) {
        Ok(response) => response,
        Err(error) => {
            warn!("Unable to reach {}: {}", url, error);
            return LeaderDiscovery::Unreachable(Measurement::new(LEADER_REDIRECT, UNHEALTHY));
        }
    };

    let status = response.status();
    if status != StatusCode::TEMPORARY_REDIRECT {
        warn!("Unexpected status from {}: {}", url, status);
    }
    let location = match response.headers().get(LOCATION) {
        Some(value) => match value.to_str() {
            Ok(location) => Some(location),
            Err(error) => {
                warn!("Ignoring unreadable Location header from {}: {}", url, error);
                None
            }
        },
        None => None,
    };
    let redirect = resolve_redirect(base_uri, status, location);
    info!("leader is {} (contacted master is leader: {})", redirect.resolved_base_uri, redirect.is_leader);

    info!("end redirect discovery: {:?}", timer.elapsed());
    LeaderDiscovery::Resolved {
        measurement: Measurement::new(LEADER_REDIRECT, classify_redirect(status)),
        redirect,
    }
}

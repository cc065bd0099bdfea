//! The functions
//!
use std::{env, time::{Duration, Instant}};
use log::*;
use anyhow::{Context, Result};
use reqwest::{blocking::{Client, Response}, Method, redirect};
use crate::utility::Credentials;
use crate::DEFAULT_PORT;

pub const ENV_HOST: &str = "CHECK_MESOS_HOST";
pub const ENV_PORT: &str = "CHECK_MESOS_PORT";
pub const ENV_USERNAME: &str = "CHECK_MESOS_USERNAME";
pub const ENV_PASSWORD: &str = "CHECK_MESOS_PASSWORD";

/// Returns true if the URI starts with a scheme followed by `://`.
///
/// A scheme relative URI such as `//master:5050` has no scheme.
pub fn has_scheme(uri: &str) -> bool
{
    match uri.split_once("://") {
        Some((scheme, _)) => {
            let mut characters = scheme.chars();
            matches!(characters.next(), Some(first) if first.is_ascii_alphabetic())
                && characters.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// The scheme of the URI, `http` if the URI doesn't carry one.
pub fn scheme_of(uri: &str) -> &str
{
    if has_scheme(uri) {
        uri.split_once("://").map(|(scheme, _)| scheme).unwrap_or("http")
    } else {
        "http"
    }
}

/// The `host:port` part of the URI, lowercased.
pub fn authority_of(uri: &str) -> String
{
    let without_scheme = if has_scheme(uri) {
        uri.split_once("://").map(|(_, rest)| rest).unwrap_or(uri)
    } else {
        uri.trim_start_matches("//")
    };
    without_scheme
        .split('/')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Turn the host into the base URI of the master: `http://` is prepended if the host has no
/// scheme, and the port is appended.
pub fn resolve_base_uri(
    host: &str,
    port: u16,
) -> String
{
    let host = host.trim_end_matches('/');
    if has_scheme(host) {
        format!("{}:{}", host, port)
    } else {
        format!("http://{}:{}", host, port)
    }
}

/// Append an endpoint path to a base URI.
pub fn join_uri(
    base_uri: &str,
    path: &str,
) -> String
{
    format!("{}/{}", base_uri.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Build the client used for all requests of one run.
///
/// Redirects are never followed: the redirect discovery must see the 307 itself.
pub fn build_client(
    timeout: Duration,
) -> Result<Client>
{
    Client::builder()
        .timeout(timeout)
        .redirect(redirect::Policy::none())
        .build()
        .with_context(|| "Unable to build the HTTP client")
}

/// Perform a single request, adding basic authentication when credentials are set.
///
/// Transport errors (timeout, connection refused, name resolution) are returned as error,
/// any HTTP status is returned as a response.
pub fn http_request(
    client: &Client,
    method: Method,
    url: &str,
    credentials: &Option<Credentials>,
) -> reqwest::Result<Response>
{
    let timer = Instant::now();
    let mut request = client.request(method.clone(), url);
    if let Some(credentials) = credentials {
        request = request.basic_auth(&credentials.username, credentials.password.as_ref());
    }
    match request.send() {
        Ok(response) => {
            debug!("Response from {} {} is {} ({:?})", method, url, response.status(), timer.elapsed());
            Ok(response)
        }
        Err(error) => {
            debug!("No response from {} {}: {} ({:?})", method, url, error, timer.elapsed());
            Err(error)
        }
    }
}

pub fn set_host(
    option: &Option<String>,
) -> Result<String>
{
    // is --host/-H set?
    if let Some(host) = option {
        info!("host argument set: using: {}", host);
        return Ok(host.to_owned());
    }
    // is the environment variable set (directly or via .env)?
    match env::var(ENV_HOST) {
        Ok(set_var) => {
            info!("host not set: set via environment: {}: {}", ENV_HOST, set_var);
            Ok(set_var)
        }
        Err(_e) => anyhow::bail!("No master host given: use --host or set {}", ENV_HOST),
    }
}

pub fn set_port(
    option: &Option<u16>,
) -> Result<u16>
{
    // is --port/-P set?
    if let Some(port) = option {
        info!("port argument set: using: {}", port);
        return Ok(*port);
    }
    match env::var(ENV_PORT) {
        Ok(set_var) => {
            info!("port not set: set via environment: {}: {}", ENV_PORT, set_var);
            set_var.parse::<u16>()
                .with_context(|| format!("Invalid port in {}: {}", ENV_PORT, set_var))
        }
        Err(_e) => {
            info!("port not set: and not set via environment: using DEFAULT_PORT: {}", DEFAULT_PORT);
            Ok(DEFAULT_PORT)
        }
    }
}

/// Credentials are only used if a username is found; a password on its own is ignored.
pub fn set_credentials(
    username: &Option<String>,
    password: &Option<String>,
) -> Option<Credentials>
{
    let username = username.clone().or_else(|| env::var(ENV_USERNAME).ok())?;
    let password = password.clone().or_else(|| env::var(ENV_PASSWORD).ok());
    info!("using basic authentication for user: {}", username);
    Some(Credentials { username, password })
}

/// Set up the `log` backend: stderr, level from the verbosity unless `RUST_LOG` is set.
///
/// Standard output is reserved for the plugin output.
pub fn init_logging(
    verbosity: u8,
)
{
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_has_scheme() {
        assert!(has_scheme("http://master:5050"));
        assert!(has_scheme("https://master"));
        assert!(has_scheme("svn+ssh://master"));
        assert!(!has_scheme("master"));
        assert!(!has_scheme("master:5050"));
        assert!(!has_scheme("//master:5050/master/redirect"));
        assert!(!has_scheme("://master"));
    }

    #[test]
    fn unit_resolve_base_uri_without_scheme() {
        assert_eq!(resolve_base_uri("mesos-1.local", 5050), "http://mesos-1.local:5050");
    }

    #[test]
    fn unit_resolve_base_uri_with_scheme() {
        assert_eq!(resolve_base_uri("https://mesos-1.local", 5443), "https://mesos-1.local:5443");
        assert_eq!(resolve_base_uri("https://mesos-1.local/", 5443), "https://mesos-1.local:5443");
    }

    #[test]
    fn unit_scheme_of() {
        assert_eq!(scheme_of("https://mesos-1.local:5050"), "https");
        assert_eq!(scheme_of("mesos-1.local"), "http");
    }

    #[test]
    fn unit_authority_of() {
        assert_eq!(authority_of("http://Mesos-1.local:5050/master/redirect"), "mesos-1.local:5050");
        assert_eq!(authority_of("//mesos-2.local:5050"), "mesos-2.local:5050");
        assert_eq!(authority_of("https://mesos-3.local:5050"), "mesos-3.local:5050");
    }

    #[test]
    fn unit_join_uri() {
        assert_eq!(join_uri("http://m:5050", "health"), "http://m:5050/health");
        assert_eq!(join_uri("http://m:5050/", "/metrics/snapshot"), "http://m:5050/metrics/snapshot");
    }

    #[test]
    fn unit_set_host_from_option() {
        let host = set_host(&Some("mesos-1.local".to_string())).unwrap();
        assert_eq!(host, "mesos-1.local");
    }

    #[test]
    fn unit_set_port_from_option() {
        assert_eq!(set_port(&Some(5051)).unwrap(), 5051);
    }

    #[test]
    fn unit_set_credentials_from_options() {
        let credentials = set_credentials(&Some("nagios".to_string()), &Some("secret".to_string()));
        assert_eq!(credentials, Some(Credentials { username: "nagios".to_string(), password: Some("secret".to_string()) }));
    }
}

//! Relay config loader (env, read once at startup).
//!
//! The config is read into an explicit [`RelayConfig`] value at process entry
//! and handed to the state builder, never consulted from ambient env again.
//! `from_lookup` takes the lookup function itself so tests can feed arbitrary
//! key/value sets without touching the process environment.

pub mod schema;

pub use schema::RelayConfig;

use naspush_core::error::{RelayError, Result};

pub const ENV_GOTIFY_URL: &str = "GOTIFY_URL";
pub const ENV_GOTIFY_TOKEN: &str = "GOTIFY_TOKEN";
pub const ENV_LISTEN_HOST: &str = "LISTEN_HOST";
pub const ENV_LISTEN_PORT: &str = "LISTEN_PORT";
pub const ENV_PROMETHEUS_METRICS: &str = "PROMETHEUS_METRICS";
pub const ENV_DEBUG_MODE: &str = "DEBUG_MODE";

const DEFAULT_LISTEN_HOST: &str = "0.0.0.0";
const DEFAULT_LISTEN_PORT: &str = "31662";

pub fn from_env() -> Result<RelayConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<RelayConfig> {
    let mut gotify_url = get(ENV_GOTIFY_URL).unwrap_or_default();
    if gotify_url.is_empty() {
        return Err(RelayError::Config(format!(
            "{ENV_GOTIFY_URL} must be set to the Gotify endpoint URL"
        )));
    }
    if !gotify_url.ends_with(schema::MESSAGE_SUFFIX) {
        gotify_url.push_str(schema::MESSAGE_SUFFIX);
    }

    let gotify_token = get(ENV_GOTIFY_TOKEN).unwrap_or_default();
    if gotify_token.is_empty() {
        return Err(RelayError::Config(format!(
            "{ENV_GOTIFY_TOKEN} must be set to a Gotify application token"
        )));
    }

    let listen_host = get(ENV_LISTEN_HOST)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LISTEN_HOST.to_string());
    let listen_port = get(ENV_LISTEN_PORT)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LISTEN_PORT.to_string())
        .parse::<u16>()
        .map_err(|e| RelayError::Config(format!("{ENV_LISTEN_PORT} must be a port number: {e}")))?;

    // "1" enables, anything else (including unset) is off
    let metrics_enabled = get(ENV_PROMETHEUS_METRICS).as_deref() == Some("1");
    let debug_mode = get(ENV_DEBUG_MODE).as_deref() == Some("1");

    Ok(RelayConfig {
        gotify_url,
        gotify_token,
        listen_host,
        listen_port,
        metrics_enabled,
        debug_mode,
    })
}

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use naspush_core::error::RelayError;
use naspush_gateway::config;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn missing_url_is_fatal() {
    let err = config::from_lookup(lookup(&[("GOTIFY_TOKEN", "tok")])).unwrap_err();
    assert!(matches!(err, RelayError::Config(_)));
}

#[test]
fn missing_token_is_fatal() {
    let err =
        config::from_lookup(lookup(&[("GOTIFY_URL", "http://gotify.test")])).unwrap_err();
    assert!(matches!(err, RelayError::Config(_)));
}

#[test]
fn empty_required_values_are_fatal() {
    let err = config::from_lookup(lookup(&[
        ("GOTIFY_URL", "http://gotify.test"),
        ("GOTIFY_TOKEN", ""),
    ]))
    .unwrap_err();
    assert!(matches!(err, RelayError::Config(_)));
}

#[test]
fn message_suffix_is_appended() {
    let cfg = config::from_lookup(lookup(&[
        ("GOTIFY_URL", "http://gotify.test"),
        ("GOTIFY_TOKEN", "tok"),
    ]))
    .unwrap();
    assert_eq!(cfg.gotify_url, "http://gotify.test/message");
}

#[test]
fn message_suffix_is_not_doubled() {
    let cfg = config::from_lookup(lookup(&[
        ("GOTIFY_URL", "http://gotify.test/message"),
        ("GOTIFY_TOKEN", "tok"),
    ]))
    .unwrap();
    assert_eq!(cfg.gotify_url, "http://gotify.test/message");
}

#[test]
fn defaults_are_applied() {
    let cfg = config::from_lookup(lookup(&[
        ("GOTIFY_URL", "http://gotify.test"),
        ("GOTIFY_TOKEN", "tok"),
    ]))
    .unwrap();
    assert_eq!(cfg.listen_host, "0.0.0.0");
    assert_eq!(cfg.listen_port, 31662);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:31662");
    assert!(!cfg.metrics_enabled);
    assert!(!cfg.debug_mode);
}

#[test]
fn empty_listen_values_fall_back_to_defaults() {
    let cfg = config::from_lookup(lookup(&[
        ("GOTIFY_URL", "http://gotify.test"),
        ("GOTIFY_TOKEN", "tok"),
        ("LISTEN_HOST", ""),
        ("LISTEN_PORT", ""),
    ]))
    .unwrap();
    assert_eq!(cfg.listen_addr(), "0.0.0.0:31662");
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = config::from_lookup(lookup(&[
        ("GOTIFY_URL", "http://gotify.test"),
        ("GOTIFY_TOKEN", "tok"),
        ("LISTEN_PORT", "http"),
    ]))
    .unwrap_err();
    assert!(matches!(err, RelayError::Config(_)));
}

#[test]
fn toggles_require_literal_one() {
    let cfg = config::from_lookup(lookup(&[
        ("GOTIFY_URL", "http://gotify.test"),
        ("GOTIFY_TOKEN", "tok"),
        ("PROMETHEUS_METRICS", "true"),
        ("DEBUG_MODE", "yes"),
    ]))
    .unwrap();
    assert!(!cfg.metrics_enabled);
    assert!(!cfg.debug_mode);

    let cfg = config::from_lookup(lookup(&[
        ("GOTIFY_URL", "http://gotify.test"),
        ("GOTIFY_TOKEN", "tok"),
        ("PROMETHEUS_METRICS", "1"),
        ("DEBUG_MODE", "1"),
    ]))
    .unwrap();
    assert!(cfg.metrics_enabled);
    assert!(cfg.debug_mode);
}

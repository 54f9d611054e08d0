//! Lightweight in-process metrics (dependency-free).
//!
//! Instruments are stored as atomics and rendered by the `/metrics` handler
//! in Prometheus text exposition format. The relay path records through the
//! [`MetricsSink`] trait so tests can assert on recorded values and the
//! disabled case costs nothing.

pub mod metrics;

pub use metrics::RelayMetrics;

use std::time::Duration;

/// Instrument operations recorded along the relay path.
pub trait MetricsSink: Send + Sync {
    /// An inbound webhook arrived (counted before any validation).
    fn request_received(&self);
    /// An inbound webhook was rejected before forwarding.
    fn request_rejected(&self);
    /// An outbound push was attempted.
    fn send_attempted(&self);
    /// An outbound push failed at the transport level.
    fn send_failed(&self);
    /// Total handling latency of one inbound request, any exit path.
    fn observe_request(&self, elapsed: Duration);
    /// Latency of one outbound push, any outcome.
    fn observe_send(&self, elapsed: Duration);
}

/// Sink used when `PROMETHEUS_METRICS` is off.
#[derive(Default)]
pub struct NoopSink;

impl MetricsSink for NoopSink {
    fn request_received(&self) {}
    fn request_rejected(&self) {}
    fn send_attempted(&self) {}
    fn send_failed(&self) {}
    fn observe_request(&self, _elapsed: Duration) {}
    fn observe_send(&self, _elapsed: Duration) {}
}

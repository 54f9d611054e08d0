//! Shared application state for the naspush gateway.
//!
//! The state is assembled once at startup from the loaded config and cloned
//! into every handler. Tests build it from explicit parts so they can inject
//! a stub notifier and assert on a private registry.

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::obs::{MetricsSink, NoopSink, RelayMetrics};
use crate::push::{GotifyClient, Notifier};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: RelayConfig,
    sink: Arc<dyn MetricsSink>,
    registry: Option<Arc<RelayMetrics>>,
    notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Build production state: real Gotify client, registry iff the metrics
    /// toggle is on. With the toggle off the handlers record into a no-op
    /// sink and no `/metrics` route exists.
    pub fn new(cfg: RelayConfig) -> Self {
        let (sink, registry): (Arc<dyn MetricsSink>, Option<Arc<RelayMetrics>>) =
            if cfg.metrics_enabled {
                let registry = Arc::new(RelayMetrics::new());
                (Arc::clone(&registry) as Arc<dyn MetricsSink>, Some(registry))
            } else {
                (Arc::new(NoopSink), None)
            };
        let notifier = Arc::new(GotifyClient::new(&cfg, Arc::clone(&sink)));
        Self::with_parts(cfg, notifier, sink, registry)
    }

    /// Assemble from explicit parts (used by tests to inject doubles).
    pub fn with_parts(
        cfg: RelayConfig,
        notifier: Arc<dyn Notifier>,
        sink: Arc<dyn MetricsSink>,
        registry: Option<Arc<RelayMetrics>>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                sink,
                registry,
                notifier,
            }),
        }
    }

    pub fn cfg(&self) -> &RelayConfig {
        &self.inner.cfg
    }

    pub fn sink(&self) -> Arc<dyn MetricsSink> {
        Arc::clone(&self.inner.sink)
    }

    pub fn registry(&self) -> Option<Arc<RelayMetrics>> {
        self.inner.registry.clone()
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::clone(&self.inner.notifier)
    }
}

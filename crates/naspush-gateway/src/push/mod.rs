//! Outbound push client (Gotify message API).
//!
//! One POST per notification, no retries. A completed HTTP exchange is never
//! an error here, whatever the status code; only transport failures are. The
//! gateway response body is never read.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;

use naspush_core::alert::Notification;
use naspush_core::error::{RelayError, Result};

use crate::config::RelayConfig;
use crate::obs::MetricsSink;

/// Header carrying the Gotify application token.
const TOKEN_HEADER: &str = "X-Gotify-Key";

/// Outbound delivery seam. The relay handler only sees this trait, so tests
/// can swap in a recording stub.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one notification. `Ok` carries the gateway's HTTP status code
    /// for any completed exchange; `Err` means the transport itself failed.
    async fn push(&self, notification: &Notification) -> Result<u16>;
}

pub struct GotifyClient {
    client: Client,
    url: String,
    token: String,
    sink: Arc<dyn MetricsSink>,
}

impl GotifyClient {
    pub fn new(cfg: &RelayConfig, sink: Arc<dyn MetricsSink>) -> Self {
        Self {
            client: Client::new(),
            url: cfg.gotify_url.clone(),
            token: cfg.gotify_token.clone(),
            sink,
        }
    }
}

#[async_trait]
impl Notifier for GotifyClient {
    async fn push(&self, notification: &Notification) -> Result<u16> {
        self.sink.send_attempted();
        let start = Instant::now();

        // .json() serializes {"title", "message"} and sets Content-Type
        let result = self
            .client
            .post(&self.url)
            .header(TOKEN_HEADER, &self.token)
            .json(notification)
            .send()
            .await;

        // send latency is observed on both outcomes
        self.sink.observe_send(start.elapsed());

        let response = result.map_err(|e| RelayError::Upstream(e.to_string()))?;
        Ok(response.status().as_u16())
    }
}

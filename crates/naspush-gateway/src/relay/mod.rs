//! The relay handler: TrueNAS webhook in, push notification out.
//!
//! One operation, mounted on `POST /` and `POST /message`:
//! - parse `{"text": ...}`, reject empty/invalid bodies with 400
//! - first line becomes the title, the rest the message, stale-alert tail
//!   stripped
//! - forward to the push gateway; transport failure answers 500, otherwise
//!   the gateway's status code is mirrored verbatim
//!
//! Total handling latency is observed on every exit path via a drop guard.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use bytes::Bytes;

use naspush_core::alert::{banner, split_alert, InboundAlert};

use crate::app_state::AppState;
use crate::obs::MetricsSink;

/// Observes total handling latency when dropped, so early returns and the
/// success path all record into the same histogram.
struct DurationGuard {
    sink: Arc<dyn MetricsSink>,
    start: Instant,
}

impl Drop for DurationGuard {
    fn drop(&mut self) {
        self.sink.observe_request(self.start.elapsed());
    }
}

pub async fn handle_alert(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> StatusCode {
    let sink = state.sink();
    let _guard = DurationGuard {
        sink: Arc::clone(&sink),
        start: Instant::now(),
    };
    sink.request_received();

    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "could not read webhook body");
            sink.request_rejected();
            return StatusCode::BAD_REQUEST;
        }
    };

    if state.cfg().debug_mode {
        tracing::debug!(payload = %String::from_utf8_lossy(&body), "received webhook payload");
    }

    let alert: InboundAlert = match serde_json::from_slice(&body) {
        Ok(alert) => alert,
        Err(e) => {
            tracing::warn!(error = %e, "webhook body is not valid alert JSON");
            sink.request_rejected();
            return StatusCode::BAD_REQUEST;
        }
    };
    if alert.text.is_empty() {
        tracing::warn!("webhook body is missing the 'text' field");
        sink.request_rejected();
        return StatusCode::BAD_REQUEST;
    }

    let notification = split_alert(&alert.text);

    // legacy console block, byte-for-byte for existing log scrapers
    print!("{}", banner(&notification));

    match state.notifier().push(&notification).await {
        Ok(status) => {
            // classification is log-only; the caller always gets the
            // gateway's own status code
            match status {
                200 => tracing::info!("forwarded successfully"),
                400 | 401 | 403 => {
                    tracing::warn!(status, "gateway refused the request, token likely incorrect")
                }
                _ => tracing::warn!(status, "unexpected status while forwarding to gotify"),
            }
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(e) => {
            tracing::error!(error = %e, "forwarding to gotify failed");
            sink.send_failed();
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

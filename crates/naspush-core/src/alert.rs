//! Inbound alert payloads and the title/body transform.
//!
//! TrueNAS posts `{"text": "<severity line>\n<body...>"}`. The first line
//! becomes the push title, the remaining lines the message. TrueNAS also
//! re-includes every uncleared alert under a "Current alerts:" marker on each
//! webhook; that tail is stripped so subscribers only see the new alert.

use serde::{Deserialize, Serialize};

/// Marker TrueNAS inserts before re-listing alerts that were already sent.
/// Case-sensitive literal match, kept as-is (not configurable).
pub const PREVIOUS_ALERTS_MARKER: &str = "Current alerts:";

/// Raw webhook body. Any fields other than `text` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundAlert {
    #[serde(default)]
    pub text: String,
}

/// Payload forwarded to the push gateway. Built only via [`split_alert`],
/// never directly from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Split alert text into a trimmed title line and a trimmed message block,
/// with the stale-alert tail removed.
pub fn split_alert(text: &str) -> Notification {
    let mut parts = text.split('\n');
    let title = parts.next().unwrap_or("").trim().to_string();
    let rest = parts.collect::<Vec<_>>().join("\n");
    let message = trim_previous_alerts(rest.trim()).to_string();
    Notification { title, message }
}

/// Drop the marker and everything after it. Content strictly before the
/// marker is preserved, minus trailing whitespace. Absent marker leaves the
/// message unchanged.
pub fn trim_previous_alerts(message: &str) -> &str {
    match message.find(PREVIOUS_ALERTS_MARKER) {
        Some(idx) => message[..idx].trim_end(),
        None => message,
    }
}

/// Legacy console block carried over from the shell-script era. Log scrapers
/// may match on it, so the format is byte-exact: `=` padding around the
/// title, the message, and a closing rule of `title.len() + 22` equals signs.
pub fn banner(notification: &Notification) -> String {
    format!(
        "========== {} ==========\n{}\n{}======================\n",
        notification.title,
        notification.message,
        "=".repeat(notification.title.len()),
    )
}

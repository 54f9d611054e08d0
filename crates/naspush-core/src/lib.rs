//! naspush core: alert payloads, the title/body transform, shared errors.
//!
//! This crate holds everything the gateway needs that does not touch HTTP:
//! the inbound/outbound payload shapes, the text transform that turns a
//! TrueNAS alert webhook into a push notification, and the shared error type.

pub mod alert;
pub mod error;

pub use alert::{banner, split_alert, trim_previous_alerts, InboundAlert, Notification};
pub use error::{RelayError, Result};

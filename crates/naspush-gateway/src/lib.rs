//! naspush gateway library entry.
//!
//! This crate wires the env config loader, shared state, routes, the relay
//! handler, the outbound push client, and the metrics registry into the
//! TrueNAS-to-Gotify relay. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod push;
pub mod relay;
pub mod router;

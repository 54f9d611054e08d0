//! Top-level facade crate for naspush.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use naspush_core::*;
}

pub mod gateway {
    pub use naspush_gateway::*;
}

//! Request guards applied in front of service handlers.
//!
//! - `trust` rejects requests that were not relayed by the gateway
//! - `identity` exposes the caller asserted by the gateway to handlers
//! - `cors` builds the shared CORS policy

pub mod cors;
pub mod identity;
pub mod trust;

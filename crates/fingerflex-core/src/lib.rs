//! Shared plumbing for FingerFlex HTTP services.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;

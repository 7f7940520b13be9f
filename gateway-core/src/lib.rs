//! gateway-core: Shared infrastructure for the ask gateway.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;


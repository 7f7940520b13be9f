//! HTTP handlers for the ask gateway.

pub mod ask;
pub mod health;

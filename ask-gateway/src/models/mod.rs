//! Wire models for the gateway's HTTP surface.

pub mod ask;

pub use ask::{AskRequest, AskResponse};

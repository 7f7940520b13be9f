pub mod gateway;
pub mod metrics;
pub mod prompt;
pub mod providers;

pub use gateway::CompletionGateway;

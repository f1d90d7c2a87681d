//! Configuration module for the Pokedex SDK
//!
//! Configuration is always passed explicitly at construction time:
//! - `root`: Main configuration and CLI overrides
//! - `client`: Upstream base URL and request deadline
//! - `cache`: Response cache budget, TTL and metrics
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod client;
pub mod errors;
pub mod logging;
pub mod root;

pub use cache::CacheConfig;
pub use client::ClientConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};

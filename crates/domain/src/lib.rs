//! Pokedex SDK Domain Layer
pub mod config;
pub mod endpoint;
pub mod errors;
pub mod models;
pub mod request;
pub mod resource;

pub use config::{
    CacheConfig, CliOverrides, ClientConfig, Config, ConfigError, LogFormat, LoggingConfig,
};
pub use endpoint::Endpoint;
pub use errors::DomainError;
pub use models::{NamedApiResource, NamedApiResourceList, Nature, Pokemon, Stat};
pub use request::{GetRequest, ListRequest};
pub use resource::{Resource, ResourceKind};

//! Pokedex SDK Infrastructure Layer
//!
//! Adapters behind the application ports: the in-process response cache,
//! the reqwest fetcher, the JSON decoder, and the `PokedexClient` facade
//! that wires them together.
pub mod cache;
pub mod client;
pub mod decoder;
pub mod transport;

pub use client::PokedexClient;

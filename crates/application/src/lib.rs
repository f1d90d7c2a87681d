//! Pokedex SDK Application Layer
//!
//! Ports to the outside world, the generic paginator, the fan-out resolver
//! and the use cases that wire them per resource kind.
pub mod pagination;
pub mod ports;
pub mod services;
pub mod use_cases;

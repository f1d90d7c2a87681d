//! Catalog payload shapes.
//!
//! Only the fields this SDK exposes are declared; unknown upstream fields are
//! ignored and optional ones default, so new catalog fields never break decoding.

pub mod common;
pub mod nature;
pub mod pokemon;
pub mod stat;

pub use common::{ApiResource, NamedApiResource, NamedApiResourceList};
pub use nature::{Nature, NatureStatChange};
pub use pokemon::{Pokemon, PokemonAbility, PokemonStat, PokemonType};
pub use stat::{MoveStatAffect, MoveStatAffectSets, NatureStatAffectSets, Stat};

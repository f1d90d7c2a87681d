use super::upstream::TestUpstream;
use pokedex_domain::{Config, ResourceKind};
use pokedex_infrastructure::PokedexClient;

/// Names served by the mock catalog, in id order (id = position + 1).
pub struct TestCatalog;

impl TestCatalog {
    pub const NATURES: [&'static str; 25] = [
        "hardy", "bold", "modest", "calm", "timid", "lonely", "docile", "mild", "gentle",
        "hasty", "adamant", "impish", "bashful", "careful", "rash", "jolly", "naughty", "lax",
        "quirky", "naive", "brave", "relaxed", "quiet", "sassy", "serious",
    ];

    pub const STATS: [&'static str; 8] = [
        "hp",
        "attack",
        "defense",
        "special-attack",
        "special-defense",
        "speed",
        "accuracy",
        "evasion",
    ];

    pub const POKEMON: [&'static str; 12] = [
        "bulbasaur",
        "ivysaur",
        "venusaur",
        "charmander",
        "charmeleon",
        "charizard",
        "squirtle",
        "wartortle",
        "blastoise",
        "caterpie",
        "metapod",
        "butterfree",
    ];

    pub fn names(kind: ResourceKind) -> &'static [&'static str] {
        match kind {
            ResourceKind::Nature => &Self::NATURES,
            ResourceKind::Pokemon => &Self::POKEMON,
            ResourceKind::Stat => &Self::STATS,
        }
    }
}

/// Defaults pointed at the mock upstream, with cache metrics on and no
/// background compaction.
pub fn config_for(upstream: &TestUpstream) -> Config {
    let mut config = Config::default();
    config.client.base_url = upstream.base_url();
    config.client.timeout_ms = 2_000;
    config.cache.metrics_enabled = true;
    config.cache.compaction_interval_secs = 0;
    config
}

pub fn client_for(upstream: &TestUpstream) -> PokedexClient {
    PokedexClient::new(&config_for(upstream)).expect("client builds against mock upstream")
}

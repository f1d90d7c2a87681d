use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

/// Named resource collections exposed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Nature,
    Pokemon,
    Stat,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Nature, Self::Pokemon, Self::Stat];

    /// Path segment under the API base URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Pokemon => "pokemon",
            Self::Stat => "stat",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nature" | "natures" => Ok(Self::Nature),
            "pokemon" | "pokemons" => Ok(Self::Pokemon),
            "stat" | "stats" => Ok(Self::Stat),
            other => Err(format!("Unknown resource kind: {other}")),
        }
    }
}

/// A decoded detail object that belongs to exactly one collection.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    const KIND: ResourceKind;
}

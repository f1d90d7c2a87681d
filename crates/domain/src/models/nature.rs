use super::common::NamedApiResource;
use crate::resource::{Resource, ResourceKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Nature {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub decreased_stat: Option<NamedApiResource>,
    #[serde(default)]
    pub increased_stat: Option<NamedApiResource>,
    #[serde(default)]
    pub hates_flavor: Option<NamedApiResource>,
    #[serde(default)]
    pub likes_flavor: Option<NamedApiResource>,
    #[serde(default)]
    pub pokeathlon_stat_changes: Vec<NatureStatChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct NatureStatChange {
    pub max_change: i32,
    pub pokeathlon_stat: NamedApiResource,
}

impl Resource for Nature {
    const KIND: ResourceKind = ResourceKind::Nature;
}

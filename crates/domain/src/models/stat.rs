use super::common::{ApiResource, NamedApiResource};
use crate::resource::{Resource, ResourceKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Stat {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub game_index: u32,
    #[serde(default)]
    pub is_battle_only: bool,
    #[serde(default)]
    pub affecting_moves: MoveStatAffectSets,
    #[serde(default)]
    pub affecting_natures: Option<NatureStatAffectSets>,
    #[serde(default)]
    pub characteristics: Vec<ApiResource>,
    #[serde(default)]
    pub move_damage_class: Option<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct MoveStatAffectSets {
    #[serde(default)]
    pub increase: Vec<MoveStatAffect>,
    #[serde(default)]
    pub decrease: Vec<MoveStatAffect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct MoveStatAffect {
    pub change: i32,
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct NatureStatAffectSets {
    #[serde(default)]
    pub increase: Vec<NamedApiResource>,
    #[serde(default)]
    pub decrease: Vec<NamedApiResource>,
}

impl Resource for Stat {
    const KIND: ResourceKind = ResourceKind::Stat;
}

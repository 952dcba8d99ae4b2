//! Pokemon DTOs
//!
//! Shape of the `/pokemon/{name}` detail response, trimmed to the fields the
//! REPL shows.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// Creature detail record (GET /pokemon/{name})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Experience gained for defeating it; drives catch difficulty.
    /// A handful of API records carry `null` here.
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// One base stat (hp, attack, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One elemental type slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Base experience, treating a missing value as zero
    pub fn base_experience(&self) -> u32 {
        self.base_experience.unwrap_or(0)
    }
}

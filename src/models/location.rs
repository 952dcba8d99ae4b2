//! Location area DTOs
//!
//! Shapes of the `/location-area` listing and detail responses.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of the location-area listing (GET /location-area)
///
/// `next` and `previous` are absolute URLs of the neighbouring pages, or
/// `None` at either end of the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u32,
    /// URL of the following page
    pub next: Option<String>,
    /// URL of the preceding page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

/// A single location area (GET /location-area/{name})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A pokemon that can be met in an area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of every pokemon that can be encountered here, in API order
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

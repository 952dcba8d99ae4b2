//! Response models for the PokeAPI
//!
//! This module defines the DTOs deserialized from API responses. The same
//! types are re-serialized into the cache, so every model derives both
//! `Serialize` and `Deserialize`.

pub mod location;
pub mod pokemon;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// A `{name, url}` reference to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

//! Pokedex CLI - An interactive PokeAPI explorer
//!
//! Pages through location areas, explores encounters and catches pokemon,
//! with API responses held in an expiring in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;

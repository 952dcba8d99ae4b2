//! REPL Session State
//!
//! Pagination cursors and the caught collection that live for one REPL run.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::PokeApiClient;
use crate::config::DEFAULT_CATCH_THRESHOLD;
use crate::models::Pokemon;

/// A pokemon held in the local collection
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Mutable state threaded through every command.
#[derive(Debug)]
pub struct Session {
    /// Client used by every command that talks to the API
    pub client: PokeApiClient,
    /// URL `map` will fetch next, `None` past the last page
    pub next: Option<String>,
    /// URL `mapb` will fetch, `None` on the first page
    pub previous: Option<String>,
    /// Caught pokemon keyed by name
    pub pokedex: BTreeMap<String, CaughtPokemon>,
    /// Highest roll that still catches
    pub catch_threshold: u32,
    rng: StdRng,
}

impl Session {
    /// Creates a session positioned before the first location-area page.
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            next: Some(client.first_page_url()),
            previous: None,
            pokedex: BTreeMap::new(),
            catch_threshold: DEFAULT_CATCH_THRESHOLD,
            rng: StdRng::from_os_rng(),
            client,
        }
    }

    /// Overrides the catch threshold.
    pub fn with_catch_threshold(mut self, threshold: u32) -> Self {
        self.catch_threshold = threshold;
        self
    }

    /// Replaces the random source, for reproducible catches.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Rolls for a catch against `base_experience`.
    ///
    /// The roll is uniform in `[0, base_experience)` and succeeds when it does
    /// not exceed the threshold. Zero base experience always succeeds.
    pub fn roll_catch(&mut self, base_experience: u32) -> bool {
        let roll = if base_experience == 0 {
            0
        } else {
            self.rng.random_range(0..base_experience)
        };
        roll <= self.catch_threshold
    }

    /// Whether `name` is already in the pokedex.
    pub fn has_caught(&self, name: &str) -> bool {
        self.pokedex.contains_key(name)
    }

    /// Adds `pokemon` to the pokedex, stamped with the current time.
    pub fn record_catch(&mut self, pokemon: Pokemon) {
        self.pokedex.insert(
            pokemon.name.clone(),
            CaughtPokemon {
                pokemon,
                caught_at: Utc::now(),
            },
        );
    }
}

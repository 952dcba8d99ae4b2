//! API Module
//!
//! Cache-first client for the public PokeAPI.
//!
//! # Endpoints used
//! - `GET /location-area` - Paginated location-area listing
//! - `GET /location-area/:name` - Pokemon encounters in an area
//! - `GET /pokemon/:name` - Pokemon detail record

pub mod client;

pub use client::PokeApiClient;

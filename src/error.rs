//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; everything here comes from the fetch layer or from REPL commands.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the fetch layer and REPL commands.
///
/// Every variant is shown to the user as a single line and the REPL keeps running.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport failure talking to the API
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("response failed with status code {0}")]
    Status(u16),

    /// Response or cached payload did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A command was invoked without its required argument
    #[error("please provide {0}")]
    MissingArgument(&'static str),

    /// `catch` on a pokemon that is already in the pokedex
    #[error("{0} is already caught")]
    AlreadyCaught(String),

    /// `inspect` on a pokemon that is not in the pokedex
    #[error("{0} has not been caught")]
    NotCaught(String),

    /// `pokedex` with nothing caught yet
    #[error("you have not caught any pokemon")]
    EmptyPokedex,

    /// `map` past the last page
    #[error("no next page available")]
    NoNextPage,

    /// `mapb` on the first page
    #[error("no previous page available")]
    NoPreviousPage,
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;

//! REPL Commands
//!
//! The static command table and the handler behind each entry.

use std::io::Write;

use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::repl::Session;

/// What the loop should do after a command returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Identifies which handler a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// An entry in the command table
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// Every command the REPL understands, in the order `help` lists them.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        description: "Displays a help message",
        kind: CommandKind::Help,
    },
    Command {
        name: "exit",
        description: "Exit the Pokedex",
        kind: CommandKind::Exit,
    },
    Command {
        name: "map",
        description: "Get the next page of locations",
        kind: CommandKind::Map,
    },
    Command {
        name: "mapb",
        description: "Get the previous page of locations",
        kind: CommandKind::MapBack,
    },
    Command {
        name: "explore",
        description: "Explore a location area by its name",
        kind: CommandKind::Explore,
    },
    Command {
        name: "catch",
        description: "Catch a Pokemon by its name",
        kind: CommandKind::Catch,
    },
    Command {
        name: "inspect",
        description: "Inspect a Pokemon you have caught",
        kind: CommandKind::Inspect,
    },
    Command {
        name: "pokedex",
        description: "List all the Pokemon you have caught",
        kind: CommandKind::Pokedex,
    },
];

/// Looks up a command by its exact name.
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

impl CommandKind {
    /// Runs the command against `session`, writing user-facing output to `out`.
    pub async fn execute<W: Write>(
        self,
        session: &mut Session,
        out: &mut W,
        args: &[String],
    ) -> Result<Flow> {
        match self {
            CommandKind::Help => help(out),
            CommandKind::Exit => exit(out),
            CommandKind::Map => map(session, out).await,
            CommandKind::MapBack => map_back(session, out).await,
            CommandKind::Explore => explore(session, out, args).await,
            CommandKind::Catch => catch(session, out, args).await,
            CommandKind::Inspect => inspect(session, out, args),
            CommandKind::Pokedex => pokedex(session, out),
        }
    }
}

fn help<W: Write>(out: &mut W) -> Result<Flow> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in COMMANDS {
        writeln!(out, "{}: {}", command.name, command.description)?;
    }
    Ok(Flow::Continue)
}

fn exit<W: Write>(out: &mut W) -> Result<Flow> {
    writeln!(out, "Closing the Pokedex... Goodbye!")?;
    Ok(Flow::Exit)
}

async fn map<W: Write>(session: &mut Session, out: &mut W) -> Result<Flow> {
    let url = session.next.clone().ok_or(PokedexError::NoNextPage)?;
    show_page(session, out, &url).await
}

async fn map_back<W: Write>(session: &mut Session, out: &mut W) -> Result<Flow> {
    let url = session.previous.clone().ok_or(PokedexError::NoPreviousPage)?;
    show_page(session, out, &url).await
}

/// Prints one listing page and moves both cursors to its neighbours.
async fn show_page<W: Write>(session: &mut Session, out: &mut W, url: &str) -> Result<Flow> {
    let page = session.client.location_areas(url).await?;

    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }

    debug!(next = ?page.next, previous = ?page.previous, "Moved location cursor");
    session.next = page.next;
    session.previous = page.previous;

    Ok(Flow::Continue)
}

async fn explore<W: Write>(session: &mut Session, out: &mut W, args: &[String]) -> Result<Flow> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("a location area name to explore"))?;

    let area = session.client.location_area(name).await?;

    writeln!(out, "Exploring {}...", name)?;
    writeln!(out, "Found Pokemon:")?;
    for pokemon in area.pokemon_names() {
        writeln!(out, " - {}", pokemon)?;
    }

    Ok(Flow::Continue)
}

async fn catch<W: Write>(session: &mut Session, out: &mut W, args: &[String]) -> Result<Flow> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("a pokemon name to catch"))?;

    if session.has_caught(name) {
        return Err(PokedexError::AlreadyCaught(name.clone()));
    }

    writeln!(out, "Throwing a Pokeball at {}...", name)?;

    let pokemon = session.client.pokemon(name).await?;

    if !session.roll_catch(pokemon.base_experience()) {
        writeln!(out, "Oh no! {} escaped the Pokeball!", name)?;
        return Ok(Flow::Continue);
    }

    writeln!(out, "Gotcha! {} was caught successfully!", name)?;
    writeln!(out, "You may now inspect it with the inspect command.")?;
    session.record_catch(pokemon);

    Ok(Flow::Continue)
}

fn inspect<W: Write>(session: &Session, out: &mut W, args: &[String]) -> Result<Flow> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("a pokemon name to inspect"))?;

    let caught = session
        .pokedex
        .get(name)
        .ok_or_else(|| PokedexError::NotCaught(name.clone()))?;
    let pokemon = &caught.pokemon;

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for slot in &pokemon.types {
        writeln!(out, "  - {}", slot.kind.name)?;
    }
    writeln!(
        out,
        "Caught: {}",
        caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    Ok(Flow::Continue)
}

fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<Flow> {
    if session.pokedex.is_empty() {
        return Err(PokedexError::EmptyPokedex);
    }

    writeln!(out, "Your Pokedex:")?;
    for name in session.pokedex.keys() {
        writeln!(out, " - {}", name)?;
    }

    Ok(Flow::Continue)
}

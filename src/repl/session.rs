//! REPL session
//!
//! Per-user state (pagination cursor, caught Pokémon, catch RNG) and the
//! command handlers that act on it.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::api::{Fetched, PokeApiClient, Source};
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::repl::commands::{self, Command, COMMANDS};
use crate::repl::pokedex::Pokedex;

/// Whether the REPL should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// State of one interactive session.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    /// `None` before the first `map`
    next: Option<String>,
    previous: Option<String>,
    paged: bool,
    pokedex: Pokedex,
    rng: StdRng,
}

impl Session {
    pub fn new(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            paged: false,
            pokedex: Pokedex::new(),
            rng,
        }
    }

    /// Creates a session whose RNG is seeded from `config.rng_seed`, or from
    /// OS entropy when no seed is configured.
    pub fn from_config(config: &Config, client: PokeApiClient) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(client, rng)
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    // == Dispatch ==
    /// Runs one line of input.
    ///
    /// Input is lowercased and split on whitespace. Command failures such as
    /// network or decoding errors are printed and the session continues; only
    /// failures to write to `out` are returned.
    pub async fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let line = line.to_lowercase();
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(spec) = commands::lookup(name) else {
            writeln!(out, "Unknown command")?;
            return Ok(Flow::Continue);
        };

        match self.run(spec.command, args, out).await {
            Ok(flow) => Ok(flow),
            Err(PokedexError::Io(err)) => Err(PokedexError::Io(err)),
            Err(err) => {
                warn!(command = spec.name, "command failed: {}", err);
                writeln!(out, "Error: {}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn run<W: Write>(&mut self, command: Command, args: &[&str], out: &mut W) -> Result<Flow> {
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map_forward(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore => match args.first() {
                Some(area) => self.explore(area, out).await?,
                None => usage(Command::Explore, out)?,
            },
            Command::Catch => match args.first() {
                Some(name) => self.catch(name, out).await?,
                None => usage(Command::Catch, out)?,
            },
            Command::Inspect => match args.first() {
                Some(name) => self.inspect(name, out)?,
                None => usage(Command::Inspect, out)?,
            },
            Command::Pokedex => self.list_pokedex(out)?,
            Command::Cache => self.cache_stats(out)?,
        }
        Ok(Flow::Continue)
    }

    // == Handlers ==
    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for spec in COMMANDS {
            writeln!(out, "{}: {}", spec.usage, spec.description)?;
        }
        Ok(())
    }

    async fn map_forward<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.paged && self.next.is_none() {
            writeln!(out, "You're on the last page.")?;
            return Ok(());
        }
        let url = self.next.clone();
        self.show_page(url.as_deref(), out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.previous.clone() else {
            writeln!(out, "You're on the first page.")?;
            return Ok(());
        };
        self.show_page(Some(url.as_str()), out).await
    }

    async fn show_page<W: Write>(&mut self, url: Option<&str>, out: &mut W) -> Result<()> {
        let fetched = self.client.location_page(url).await?;
        report_source(&fetched, out)?;

        let page = fetched.value;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }

        self.next = page.next;
        self.previous = page.previous;
        self.paged = true;
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let fetched = self.client.location_area(area).await?;
        report_source(&fetched, out)?;

        writeln!(out, "Found Pokémon:")?;
        for name in fetched.value.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let fetched = self.client.pokemon(name).await?;
        report_source(&fetched, out)?;
        let pokemon = fetched.value;

        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;
        let roll: u32 = self.rng.gen_range(0..100);
        if roll < pokemon.catch_chance() {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.insert(name, pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(caught) = self.pokedex.get(name) else {
            writeln!(out, "You have not caught that Pokémon.")?;
            return Ok(());
        };
        let pokemon = &caught.pokemon;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  - {}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        writeln!(
            out,
            "Caught: {}",
            caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty. Catch some Pokémon first!")?;
            return Ok(());
        }
        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    fn cache_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        let cache = self.client.cache();
        let stats = cache.stats();
        writeln!(
            out,
            "Cache: {} entries, ttl {}s",
            stats.total_entries,
            cache.ttl().as_secs_f64()
        )?;
        writeln!(
            out,
            "Hits: {}  Misses: {}  Hit rate: {:.1}%",
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0
        )?;
        writeln!(out, "Sweeps: {}  Reclaimed: {}", stats.sweeps, stats.reclaimed)?;
        Ok(())
    }
}

fn report_source<T, W: Write>(fetched: &Fetched<T>, out: &mut W) -> Result<()> {
    match fetched.source {
        Source::Cache => writeln!(out, "(cache hit)")?,
        Source::Network => writeln!(out, "(fetching from API)")?,
    }
    Ok(())
}

fn usage<W: Write>(command: Command, out: &mut W) -> Result<()> {
    if let Some(spec) = COMMANDS.iter().find(|spec| spec.command == command) {
        writeln!(out, "Usage: {}", spec.usage)?;
    }
    Ok(())
}

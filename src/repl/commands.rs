//! Command registry
//!
//! The table of REPL commands, in the order `help` lists them.

/// A REPL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Cache,
}

/// Name, usage line and help text of a command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub command: Command,
}

/// All commands, in help order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        usage: "help",
        description: "Displays a help message",
        command: Command::Help,
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
        command: Command::Exit,
    },
    CommandSpec {
        name: "map",
        usage: "map",
        description: "Show the next page of location areas",
        command: Command::Map,
    },
    CommandSpec {
        name: "mapb",
        usage: "mapb",
        description: "Show the previous page of location areas",
        command: Command::MapBack,
    },
    CommandSpec {
        name: "explore",
        usage: "explore <location-area>",
        description: "List the Pokémon found in a location area",
        command: Command::Explore,
    },
    CommandSpec {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Throw a Pokeball at a Pokémon",
        command: Command::Catch,
    },
    CommandSpec {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Show details of a caught Pokémon",
        command: Command::Inspect,
    },
    CommandSpec {
        name: "pokedex",
        usage: "pokedex",
        description: "List every Pokémon you have caught",
        command: Command::Pokedex,
    },
    CommandSpec {
        name: "cache",
        usage: "cache",
        description: "Show response cache statistics",
        command: Command::Cache,
    },
];

/// Finds the command registered under `name`.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known_commands() {
        assert_eq!(lookup("map").map(|s| s.command), Some(Command::Map));
        assert_eq!(lookup("mapb").map(|s| s.command), Some(Command::MapBack));
        assert_eq!(lookup("catch").map(|s| s.command), Some(Command::Catch));
    }

    #[test]
    fn test_lookup_unknown_command() {
        assert!(lookup("fly").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("MAP").is_none());
    }

    #[test]
    fn test_command_names_are_unique() {
        let names: HashSet<&str> = COMMANDS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), COMMANDS.len());
    }

    #[test]
    fn test_usage_starts_with_name() {
        for spec in COMMANDS {
            assert!(spec.usage.starts_with(spec.name), "{}", spec.name);
        }
    }
}

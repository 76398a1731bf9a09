// src/core/registry.rs

use crate::core::{
    command::Command,
    error::{CommandError, Result},
};
use clap::Parser;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

lazy_static! {
    // Command names double as REPL words, so keep them shell-friendly.
    static ref NAME_RE: Regex =
        Regex::new(r"^[a-z][a-z0-9_-]*$").expect("command name pattern is a valid regex");
}

/// Builds a command from its argument vector.
pub type Factory<T> = Box<dyn Fn(&[String]) -> Result<Box<dyn Command<T>>> + Send + Sync>;

/// Maps command names (and aliases) to the factories that build them.
///
/// A registry is filled once during startup and then only read. Names are
/// unique: `register` refuses a name that is already taken, and the only way
/// to overwrite an entry is the explicitly named [`Registry::replace`].
pub struct Registry<T> {
    factories: BTreeMap<String, Factory<T>>,
    aliases: HashMap<String, String>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            factories: BTreeMap::new(),
            aliases: HashMap::new(),
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.factories.keys().collect::<Vec<_>>())
            .field("aliases", &self.aliases)
            .finish()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new command. Fails if the name is invalid or already taken
    /// (as a command or as an alias).
    pub fn register<F>(&mut self, name: &str, factory: F) -> Result<()>
    where
        F: Fn(&[String]) -> Result<Box<dyn Command<T>>> + Send + Sync + 'static,
    {
        validate_name(name)?;
        if self.is_taken(name) {
            return Err(CommandError::DuplicateCommand(name.to_string()));
        }
        log::debug!("Registering command '{}'", name);
        self.factories.insert(name.to_string(), Box::new(factory));
        Ok(())
    }

    /// Overwrites (or adds) the factory for `name`.
    ///
    /// Returns `true` if an existing command was replaced. Replacing an alias
    /// is refused, since it would silently shadow the aliased command.
    pub fn replace<F>(&mut self, name: &str, factory: F) -> Result<bool>
    where
        F: Fn(&[String]) -> Result<Box<dyn Command<T>>> + Send + Sync + 'static,
    {
        validate_name(name)?;
        if self.aliases.contains_key(name) {
            return Err(CommandError::DuplicateCommand(name.to_string()));
        }
        let replaced = self
            .factories
            .insert(name.to_string(), Box::new(factory))
            .is_some();
        if replaced {
            log::info!("Replaced factory for command '{}'", name);
        }
        Ok(replaced)
    }

    /// Adds `alias` as another name for the registered command `name`.
    pub fn alias(&mut self, alias: &str, name: &str) -> Result<()> {
        validate_name(alias)?;
        if !self.factories.contains_key(name) {
            return Err(CommandError::UnknownCommand(name.to_string()));
        }
        if self.is_taken(alias) {
            return Err(CommandError::DuplicateCommand(alias.to_string()));
        }
        self.aliases.insert(alias.to_string(), name.to_string());
        Ok(())
    }

    /// Resolves an alias to its canonical name. Canonical names resolve to
    /// themselves; unknown names resolve to `None`.
    pub fn resolve<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.factories.contains_key(name) {
            return Some(name);
        }
        self.aliases.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Canonical command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Aliases pointing at `name`, sorted.
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, target)| target.as_str() == name)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Builds a command instance by name or alias.
    pub fn create(&self, name: &str, args: &[String]) -> Result<Box<dyn Command<T>>> {
        let canonical = self
            .resolve(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        let factory = self
            .factories
            .get(canonical)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        log::debug!("Creating '{}' with args {:?}", canonical, args);
        factory(args)
    }

    fn is_taken(&self, name: &str) -> bool {
        self.factories.contains_key(name) || self.aliases.contains_key(name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(CommandError::InvalidName(name.to_string()))
    }
}

/// Parses a factory's argument vector with a `clap` derive struct declared
/// with `no_binary_name = true`.
pub fn parse_args<A: Parser>(command: &str, args: &[String]) -> Result<A> {
    A::try_parse_from(args).map_err(|source| CommandError::InvalidArguments {
        command: command.to_string(),
        source,
    })
}

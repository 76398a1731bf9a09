//! # Editor Commands
//!
//! The built-in commands acting on a [`Buffer`], and the table that registers
//! them. Adding a command means writing its module under `commands/` and
//! adding one entry to [`BUILTIN_COMMANDS`].

pub mod commands;

use crate::{
    core::{command::Command, error::Result, registry::Registry},
    models::Buffer,
};

/// A built-in command: canonical name, aliases, one-line help and factory.
#[derive(Debug)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub factory: fn(&[String]) -> Result<Box<dyn Command<Buffer>>>,
}

/// The single source of truth for the built-in editor commands.
pub static BUILTIN_COMMANDS: &[CommandDefinition] = &[
    CommandDefinition {
        name: "append",
        aliases: &["a"],
        usage: "append <text...>",
        factory: commands::append::AppendLine::create,
    },
    CommandDefinition {
        name: "clear",
        aliases: &[],
        usage: "clear",
        factory: commands::clear::ClearBuffer::create,
    },
    CommandDefinition {
        name: "delete",
        aliases: &["del"],
        usage: "delete <line>",
        factory: commands::delete::DeleteLine::create,
    },
    CommandDefinition {
        name: "insert",
        aliases: &["ins"],
        usage: "insert <line> <text...>",
        factory: commands::insert::InsertLine::create,
    },
    CommandDefinition {
        name: "replace",
        aliases: &["rep"],
        usage: "replace <line> <text...>",
        factory: commands::replace::ReplaceLine::create,
    },
    CommandDefinition {
        name: "set",
        aliases: &[],
        usage: "set <tab-width>",
        factory: commands::set::SetTabWidth::create,
    },
    CommandDefinition {
        name: "substitute",
        aliases: &["s"],
        usage: "substitute <line> <regex> [replacement]",
        factory: commands::substitute::Substitute::create,
    },
];

/// Finds a built-in definition by name or alias.
pub fn find_definition(name: &str) -> Option<&'static CommandDefinition> {
    BUILTIN_COMMANDS
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Builds a registry holding every built-in command and alias.
pub fn builtin_registry() -> Result<Registry<Buffer>> {
    let mut registry = Registry::new();
    for definition in BUILTIN_COMMANDS {
        registry.register(definition.name, definition.factory)?;
        for alias in definition.aliases {
            registry.alias(alias, definition.name)?;
        }
    }
    log::debug!(
        "Built-in registry ready with {} commands",
        BUILTIN_COMMANDS.len()
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_definition_is_registered_with_aliases() {
        let registry = builtin_registry().unwrap();

        for definition in BUILTIN_COMMANDS {
            assert!(registry.contains(definition.name));
            for alias in definition.aliases {
                assert_eq!(registry.resolve(alias), Some(definition.name));
            }
        }
        assert_eq!(registry.names().len(), BUILTIN_COMMANDS.len());
    }

    #[test]
    fn test_find_definition_by_alias() {
        assert_eq!(find_definition("del").map(|d| d.name), Some("delete"));
        assert!(find_definition("undo").is_none());
    }

    #[test]
    fn test_definitions_are_sorted_and_unique() {
        let names: Vec<_> = BUILTIN_COMMANDS.iter().map(|d| d.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }
}

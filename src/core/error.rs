// src/core/error.rs

use thiserror::Error;

/// Every failure the command engine can report.
///
/// Registry, history and dispatcher all return this type; callers at the edge
/// (the session binary, config loading) wrap it in `anyhow` as needed.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The dispatched name is neither a registered command nor an alias.
    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),

    /// The command's action could not complete. The target was left untouched.
    #[error("Command '{command}' could not be executed: {reason}")]
    Execution {
        /// Name of the failing command.
        command: String,
        /// What went wrong.
        reason: String,
    },

    /// `undo` was invoked without a matching successful `execute`.
    #[error("Command '{command}' cannot be undone: {reason}")]
    Undo {
        /// Name of the failing command.
        command: String,
        /// What went wrong.
        reason: String,
    },

    /// The undo sequence is empty.
    #[error("Nothing to undo.")]
    NothingToUndo,

    /// The redo sequence is empty.
    #[error("Nothing to redo.")]
    NothingToRedo,

    /// A guard refused the command before it ran.
    #[error("Permission denied for '{command}': {reason}")]
    PermissionDenied {
        /// Name of the refused command.
        command: String,
        /// Why the guard refused it.
        reason: String,
    },

    /// A name or alias is already taken in the registry.
    #[error("A command named '{0}' is already registered.")]
    DuplicateCommand(String),

    /// A name does not match the allowed command name pattern.
    #[error("Invalid command name '{0}'. Use lowercase letters, digits, '-' or '_', starting with a letter.")]
    InvalidName(String),

    /// A factory could not parse the arguments it was given.
    #[error("Invalid arguments for '{command}': {source}")]
    InvalidArguments {
        /// Name of the command being constructed.
        command: String,
        /// The underlying parser error.
        #[source]
        source: clap::Error,
    },
}

impl CommandError {
    /// Shorthand for an [`CommandError::Execution`] error.
    pub fn execution(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Execution {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`CommandError::Undo`] error.
    pub fn undo(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Undo {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`CommandError::PermissionDenied`] error.
    pub fn permission_denied(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PermissionDenied {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used across the engine.
pub type Result<T, E = CommandError> = std::result::Result<T, E>;

// src/core/command.rs

use crate::core::error::{CommandError, Result};
use std::fmt;
use uuid::Uuid;

/// A reversible unit of work against a target of type `T`.
///
/// Implementations capture their parameters at construction time and whatever
/// they need to reverse themselves during `execute`. They only touch `target`.
pub trait Command<T>: fmt::Debug + Send {
    /// The registry name this command was created under.
    fn name(&self) -> &str;

    /// A one-line, human readable description including parameters.
    fn describe(&self) -> String;

    /// Whether the command changes its target. Read-only guards let
    /// non-mutating commands through.
    fn mutates(&self) -> bool {
        true
    }

    /// Performs the action. On failure the target must be left as it was.
    fn execute(&mut self, target: &mut T) -> Result<()>;

    /// Reverses exactly the effect of the last successful `execute`.
    fn undo(&mut self, target: &mut T) -> Result<()>;
}

/// Lifecycle of a single command instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState {
    /// Constructed by a factory, never run.
    Created,
    /// Last transition was a successful `execute` (or redo).
    Executed,
    /// Last transition was a successful `undo`.
    Undone,
}

/// A command instance plus its identity and lifecycle state.
///
/// This is what the history stores. It refuses out-of-order transitions so
/// an individual `Command` implementation never sees `undo` before `execute`
/// or two `execute` calls in a row.
#[derive(Debug)]
pub struct CommandEntry<T> {
    id: Uuid,
    state: CommandState,
    command: Box<dyn Command<T>>,
}

impl<T> CommandEntry<T> {
    /// Wraps a freshly created command.
    pub fn new(command: Box<dyn Command<T>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: CommandState::Created,
            command,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> CommandState {
        self.state
    }

    pub fn name(&self) -> &str {
        self.command.name()
    }

    pub fn describe(&self) -> String {
        self.command.describe()
    }

    /// The wrapped command, for guards and observers.
    pub fn command(&self) -> &dyn Command<T> {
        self.command.as_ref()
    }

    /// Runs the command. Valid from `Created` and `Undone`.
    pub fn execute(&mut self, target: &mut T) -> Result<()> {
        if self.state == CommandState::Executed {
            return Err(CommandError::execution(
                self.command.name(),
                "it has already been executed",
            ));
        }
        self.command.execute(target)?;
        self.state = CommandState::Executed;
        Ok(())
    }

    /// Reverses the command. Only valid right after a successful `execute`.
    pub fn undo(&mut self, target: &mut T) -> Result<()> {
        if self.state != CommandState::Executed {
            return Err(CommandError::undo(
                self.command.name(),
                "it has not been executed",
            ));
        }
        self.command.undo(target)?;
        self.state = CommandState::Undone;
        Ok(())
    }
}

// src/core/guard.rs

use crate::core::{
    command::Command,
    error::{CommandError, Result},
};
use std::collections::BTreeSet;

/// A permission check run by the dispatcher before a command executes.
///
/// A guard that returns an error stops the command before `execute`, so the
/// target and the history are left exactly as they were.
pub trait Guard<T>: Send + Sync {
    fn check(&self, command: &dyn Command<T>, target: &T) -> Result<()>;
}

impl<T, F> Guard<T> for F
where
    F: Fn(&dyn Command<T>, &T) -> Result<()> + Send + Sync,
{
    fn check(&self, command: &dyn Command<T>, target: &T) -> Result<()> {
        self(command, target)
    }
}

/// Targets that can be switched into a read-only mode.
pub trait ReadOnly {
    fn is_read_only(&self) -> bool;
}

/// Refuses mutating commands while the target is read-only.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadOnlyGuard;

impl<T: ReadOnly> Guard<T> for ReadOnlyGuard {
    fn check(&self, command: &dyn Command<T>, target: &T) -> Result<()> {
        if command.mutates() && target.is_read_only() {
            return Err(CommandError::permission_denied(
                command.name(),
                "the target is read-only",
            ));
        }
        Ok(())
    }
}

/// Refuses a fixed set of command names.
#[derive(Debug, Default, Clone)]
pub struct DenyList {
    names: BTreeSet<String>,
}

impl DenyList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn denies(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl<T> Guard<T> for DenyList {
    fn check(&self, command: &dyn Command<T>, _target: &T) -> Result<()> {
        if self.denies(command.name()) {
            return Err(CommandError::permission_denied(
                command.name(),
                "the command is disabled in this session",
            ));
        }
        Ok(())
    }
}

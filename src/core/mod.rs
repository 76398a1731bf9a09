//! # Command Engine
//!
//! Generic over the target type `T` the commands act on.
//!
//! - **`command`**: the `Command` trait and `CommandEntry`, which tracks one
//!   instance through `Created → Executed ↔ Undone`.
//! - **`registry`**: name → factory mapping, populated once at startup.
//! - **`history`**: the undo and redo sequences.
//! - **`guard`**: permission checks run before a command executes.
//! - **`observer`**: callbacks notified after execute / undo / redo.
//! - **`dispatcher`**: resolves, guards, executes and records.
//! - **`paths`** and **`config_loader`**: locating and reading the session config.

pub mod command;
pub mod config_loader;
pub mod dispatcher;
pub mod error;
pub mod guard;
pub mod history;
pub mod observer;
pub mod paths;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

// src/editor/commands/mod.rs

// One module per buffer command. Each exposes a `create` factory that parses
// the command's arguments.

pub(crate) mod commons;

pub mod append;
pub mod clear;
pub mod delete;
pub mod insert;
pub mod replace;
pub mod set;
pub mod substitute;

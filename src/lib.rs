//! # pynano
//!
//! A reversible command engine for a small line-oriented text editor.
//!
//! - [`core`]: the generic machinery. Commands, the name → factory registry,
//!   the undo/redo history, permission guards and the dispatcher tying them
//!   together. Nothing in here knows what a text buffer is.
//! - [`editor`]: the built-in commands that act on a [`models::Buffer`].
//! - [`state`]: the process-wide registry of built-in commands.
//! - [`session`]: one buffer plus the dispatcher that edits it.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod constants;
pub mod core;
pub mod editor;
pub mod models;
pub mod session;
pub mod state;

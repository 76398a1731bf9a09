// src/editor/commands/commons.rs

// Helpers shared by the buffer commands.

use crate::core::error::{CommandError, Result};
use crate::models::Buffer;

/// Joins trailing words back into one line of text.
pub(crate) fn join_words(words: &[String]) -> String {
    words.join(" ")
}

/// Arguments prefixed with `--`, so clap reads every user word as a value.
/// A `--` the user typed then stays part of the text.
pub(crate) fn verbatim(args: &[String]) -> Vec<String> {
    std::iter::once("--".to_string())
        .chain(args.iter().cloned())
        .collect()
}

/// Converts a 1-based line number into a 0-based index of an existing line.
pub(crate) fn existing_line(command: &str, buffer: &Buffer, line: usize) -> Result<usize> {
    let at = line.saturating_sub(1);
    if line == 0 || at >= buffer.len() {
        return Err(CommandError::execution(
            command,
            format!("line {} does not exist (buffer has {} line(s))", line, buffer.len()),
        ));
    }
    Ok(at)
}

/// Shortens long text for one-line descriptions.
pub(crate) fn preview(text: &str) -> String {
    const MAX: usize = 24;
    if text.chars().count() <= MAX {
        format!("{:?}", text)
    } else {
        let head: String = text.chars().take(MAX).collect();
        format!("{:?}...", head)
    }
}

/// The error every buffer command returns when `undo` runs without a
/// captured effect.
pub(crate) fn not_executed(command: &str) -> CommandError {
    CommandError::undo(command, "no executed effect to reverse")
}

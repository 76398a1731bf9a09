// src/models.rs

use crate::{constants::DEFAULT_TAB_WIDTH, core::guard::ReadOnly};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

// --- BUFFER ---

/// A line-oriented text buffer, the target of the built-in editor commands.
///
/// Positions passed to the mutating methods are 0-based; the editor commands
/// translate the 1-based line numbers users type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
    tab_width: usize,
    read_only: bool,
    modified: bool,
}

impl Default for Buffer {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            tab_width: DEFAULT_TAB_WIDTH,
            read_only: false,
            modified: false,
        }
    }
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding `text`, one entry per line. The result is unmodified.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at a 0-based position.
    pub fn line(&self, at: usize) -> Option<&str> {
        self.lines.get(at).map(String::as_str)
    }

    /// The whole buffer joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    // --- Primitive edits (used by the editor commands) ---

    /// Inserts before position `at`; `at == len` appends. Returns `false` if
    /// `at` is past the end.
    pub fn insert_line(&mut self, at: usize, line: String) -> bool {
        if at > self.lines.len() {
            return false;
        }
        self.lines.insert(at, line);
        self.modified = true;
        true
    }

    pub fn remove_line(&mut self, at: usize) -> Option<String> {
        if at >= self.lines.len() {
            return None;
        }
        self.modified = true;
        Some(self.lines.remove(at))
    }

    /// Overwrites the line at `at`, returning the previous text.
    pub fn replace_line(&mut self, at: usize, line: String) -> Option<String> {
        let slot = self.lines.get_mut(at)?;
        self.modified = true;
        Some(std::mem::replace(slot, line))
    }

    /// Returns the previous width.
    pub fn set_tab_width(&mut self, width: usize) -> usize {
        self.modified = true;
        std::mem::replace(&mut self.tab_width, width)
    }

    /// Captures the full contents for a later [`Buffer::restore`].
    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            lines: self.lines.clone(),
            tab_width: self.tab_width,
            modified: self.modified,
        }
    }

    /// Puts back contents captured by [`Buffer::snapshot`], including the
    /// modified flag at capture time.
    pub fn restore(&mut self, snapshot: BufferSnapshot) {
        self.lines = snapshot.lines;
        self.tab_width = snapshot.tab_width;
        self.modified = snapshot.modified;
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.modified = true;
    }
}

impl ReadOnly for Buffer {
    fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.lines.len().to_string().len();
        for (i, line) in self.lines.iter().enumerate() {
            writeln!(f, "{:>width$} | {}", i + 1, line, width = width)?;
        }
        Ok(())
    }
}

/// Opaque copy of a buffer's contents. Only [`Buffer::restore`] reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    lines: Vec<String>,
    tab_width: usize,
    modified: bool,
}

// --- CONFIGURATION ---

/// The deserialized `config.toml`. Every field is optional in the file.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Maximum number of undoable commands. Absent or `0` means unbounded.
    pub history_limit: Option<usize>,
    /// Start the session with a read-only buffer.
    pub read_only: bool,
    /// Commands refused in this session, by name or alias. Names the
    /// registry does not know are rejected when the session starts.
    pub deny: Vec<String>,
}

impl SessionConfig {
    /// The history limit as the dispatcher expects it; `0` means unbounded.
    pub fn effective_history_limit(&self) -> Option<NonZeroUsize> {
        self.history_limit.and_then(NonZeroUsize::new)
    }
}

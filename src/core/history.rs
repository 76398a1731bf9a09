// src/core/history.rs

use crate::core::{
    command::CommandEntry,
    error::{CommandError, Result},
};
use std::num::NonZeroUsize;
use uuid::Uuid;

/// A listing-friendly view of one history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl<T> From<&CommandEntry<T>> for HistoryEntry {
    fn from(entry: &CommandEntry<T>) -> Self {
        Self {
            id: entry.id(),
            name: entry.name().to_string(),
            description: entry.describe(),
        }
    }
}

/// Undo and redo sequences of executed commands.
///
/// The last element of `done` is the most recently executed command. Undone
/// commands move to `undone`; pushing a new command clears `undone`, so there
/// is no redo after a fresh action.
#[derive(Debug)]
pub struct History<T> {
    done: Vec<CommandEntry<T>>,
    undone: Vec<CommandEntry<T>>,
    limit: Option<NonZeroUsize>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            done: Vec::new(),
            undone: Vec::new(),
            limit: None,
        }
    }
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history keeping at most `limit` undoable commands. Older entries
    /// are dropped and can no longer be undone.
    pub fn with_limit(limit: NonZeroUsize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// Changes the limit, trimming immediately if the undo sequence is too long.
    pub fn set_limit(&mut self, limit: Option<NonZeroUsize>) {
        self.limit = limit;
        self.trim();
    }

    /// Records an executed command and forgets everything that could be redone.
    pub fn push(&mut self, entry: CommandEntry<T>) {
        if !self.undone.is_empty() {
            log::debug!("Discarding {} redoable command(s)", self.undone.len());
            self.undone.clear();
        }
        self.done.push(entry);
        self.trim();
    }

    /// Undoes the most recent command and moves it to the redo sequence.
    ///
    /// If the command's own `undo` fails it stays where it was.
    pub fn undo(&mut self, target: &mut T) -> Result<HistoryEntry> {
        let mut entry = self.done.pop().ok_or(CommandError::NothingToUndo)?;
        if let Err(e) = entry.undo(target) {
            self.done.push(entry);
            return Err(e);
        }
        let summary = HistoryEntry::from(&entry);
        self.undone.push(entry);
        Ok(summary)
    }

    /// Re-executes the most recently undone command and moves it back to the
    /// undo sequence.
    pub fn redo(&mut self, target: &mut T) -> Result<HistoryEntry> {
        let mut entry = self.undone.pop().ok_or(CommandError::NothingToRedo)?;
        if let Err(e) = entry.execute(target) {
            self.undone.push(entry);
            return Err(e);
        }
        let summary = HistoryEntry::from(&entry);
        self.done.push(entry);
        Ok(summary)
    }

    /// The command the next `undo` would reverse.
    pub fn next_undo(&self) -> Option<&CommandEntry<T>> {
        self.done.last()
    }

    /// The command the next `redo` would re-execute.
    pub fn next_redo(&self) -> Option<&CommandEntry<T>> {
        self.undone.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of undoable commands.
    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Number of redoable commands.
    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }

    /// Undoable commands, most recent first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.done.iter().rev().map(HistoryEntry::from).collect()
    }

    /// Redoable commands, next-to-redo first.
    pub fn redo_entries(&self) -> Vec<HistoryEntry> {
        self.undone.iter().rev().map(HistoryEntry::from).collect()
    }

    /// Forgets both sequences. The target is not touched.
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }

    fn trim(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        let excess = self.done.len().saturating_sub(limit.get());
        if excess > 0 {
            log::debug!("History limit {} reached, dropping {} oldest", limit, excess);
            self.done.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{Cell, SetValue};

    fn executed(value: i64, cell: &mut Cell) -> CommandEntry<Cell> {
        let mut entry = CommandEntry::new(Box::new(SetValue::new(value)));
        entry.execute(cell).unwrap();
        entry
    }

    #[test]
    fn test_n_undos_restore_initial_state() {
        // --- Setup ---
        let mut cell = Cell { value: -1 };
        let mut history = History::new();
        for value in [3, 1, 4, 1, 5, 9] {
            let entry = executed(value, &mut cell);
            history.push(entry);
        }
        assert_eq!(cell.value, 9);

        // --- Execute ---
        for _ in 0..6 {
            history.undo(&mut cell).unwrap();
        }

        // --- Assert ---
        assert_eq!(cell.value, -1);
        assert!(history.is_empty());
        assert_eq!(history.redo_len(), 6);
        assert!(matches!(history.undo(&mut cell), Err(CommandError::NothingToUndo)));
    }

    #[test]
    fn test_redo_restores_undone_effect() {
        let mut cell = Cell::default();
        let mut history = History::new();
        let entry = executed(5, &mut cell);
        history.push(entry);

        let undone = history.undo(&mut cell).unwrap();
        assert_eq!(cell.value, 0);
        let redone = history.redo(&mut cell).unwrap();

        assert_eq!(cell.value, 5);
        assert_eq!(undone.id, redone.id);
        assert_eq!(redone.description, "set 5");
        assert_eq!(history.len(), 1);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_clears_redo_sequence() {
        let mut cell = Cell::default();
        let mut history = History::new();
        let first = executed(5, &mut cell);
        history.push(first);
        let second = executed(10, &mut cell);
        history.push(second);

        history.undo(&mut cell).unwrap();
        assert_eq!(cell.value, 5);
        let third = executed(7, &mut cell);
        history.push(third);

        assert!(matches!(history.redo(&mut cell), Err(CommandError::NothingToRedo)));
        assert_eq!(cell.value, 7);
    }

    #[test]
    fn test_entries_are_most_recent_first() {
        let mut cell = Cell::default();
        let mut history = History::new();
        for value in [1, 2, 3] {
            let entry = executed(value, &mut cell);
            history.push(entry);
        }
        history.undo(&mut cell).unwrap();

        let descriptions: Vec<_> = history
            .entries()
            .into_iter()
            .map(|e| e.description)
            .collect();
        assert_eq!(descriptions, vec!["set 2", "set 1"]);
        assert_eq!(history.redo_entries().len(), 1);
        assert_eq!(history.next_undo().map(|e| e.describe()).as_deref(), Some("set 2"));
        assert_eq!(history.next_redo().map(|e| e.describe()).as_deref(), Some("set 3"));
    }

    #[test]
    fn test_limit_drops_oldest_entries() {
        // --- Setup ---
        let mut cell = Cell::default();
        let mut history = History::with_limit(NonZeroUsize::new(2).unwrap());

        // --- Execute ---
        for value in [1, 2, 3] {
            let entry = executed(value, &mut cell);
            history.push(entry);
        }

        // --- Assert ---
        assert_eq!(history.len(), 2);
        history.undo(&mut cell).unwrap();
        history.undo(&mut cell).unwrap();
        assert_eq!(cell.value, 1);
        assert!(matches!(history.undo(&mut cell), Err(CommandError::NothingToUndo)));
    }

    #[test]
    fn test_lowering_limit_trims_immediately() {
        let mut cell = Cell::default();
        let mut history = History::new();
        for value in [1, 2, 3, 4] {
            let entry = executed(value, &mut cell);
            history.push(entry);
        }

        history.set_limit(NonZeroUsize::new(1));

        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].description, "set 4");
    }

    #[test]
    fn test_failed_redo_keeps_entry_redoable() {
        // A command that can be undone but fails on re-execution.
        #[derive(Debug)]
        struct Flaky {
            runs: u32,
        }
        impl crate::core::command::Command<Cell> for Flaky {
            fn name(&self) -> &str {
                "flaky"
            }
            fn describe(&self) -> String {
                "flaky".to_string()
            }
            fn execute(&mut self, _target: &mut Cell) -> Result<()> {
                self.runs += 1;
                if self.runs > 1 {
                    return Err(CommandError::execution("flaky", "second run"));
                }
                Ok(())
            }
            fn undo(&mut self, _target: &mut Cell) -> Result<()> {
                Ok(())
            }
        }

        let mut cell = Cell::default();
        let mut history = History::new();
        let mut entry = CommandEntry::new(Box::new(Flaky { runs: 0 }));
        entry.execute(&mut cell).unwrap();
        history.push(entry);
        history.undo(&mut cell).unwrap();

        assert!(matches!(history.redo(&mut cell), Err(CommandError::Execution { .. })));
        assert!(history.can_redo());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_failed_undo_keeps_entry_undoable() {
        #[derive(Debug)]
        struct Stubborn;
        impl crate::core::command::Command<Cell> for Stubborn {
            fn name(&self) -> &str {
                "stubborn"
            }
            fn describe(&self) -> String {
                "stubborn".to_string()
            }
            fn execute(&mut self, _target: &mut Cell) -> Result<()> {
                Ok(())
            }
            fn undo(&mut self, _target: &mut Cell) -> Result<()> {
                Err(CommandError::undo("stubborn", "refuses"))
            }
        }

        let mut cell = Cell::default();
        let mut history = History::new();
        let mut entry = CommandEntry::new(Box::new(Stubborn));
        entry.execute(&mut cell).unwrap();
        history.push(entry);

        assert!(matches!(history.undo(&mut cell), Err(CommandError::Undo { .. })));
        assert_eq!(history.len(), 1);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut cell = Cell::default();
        let mut history = History::new();
        let entry = executed(1, &mut cell);
        history.push(entry);
        let entry = executed(2, &mut cell);
        history.push(entry);
        history.undo(&mut cell).unwrap();

        history.clear();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(cell.value, 1);
    }
}

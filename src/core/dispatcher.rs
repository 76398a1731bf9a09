// src/core/dispatcher.rs

use crate::core::{
    command::{Command, CommandEntry},
    error::Result,
    guard::Guard,
    history::{History, HistoryEntry},
    observer::{HistoryEvent, HistoryEventKind, HistoryObserver},
    registry::Registry,
};
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// The entry point of a session: resolves a name to a command, runs the
/// guards, executes it and records it.
///
/// The registry is shared (`Arc`) and only read; the history belongs to this
/// dispatcher alone, so every session gets its own undo/redo stack.
pub struct Dispatcher<T> {
    registry: Arc<Registry<T>>,
    history: History<T>,
    guards: Vec<Box<dyn Guard<T>>>,
    observers: Vec<Box<dyn HistoryObserver>>,
}

impl<T> fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("undo_depth", &self.history.len())
            .field("redo_depth", &self.history.redo_len())
            .field("guards", &self.guards.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T> Dispatcher<T> {
    pub fn new(registry: Arc<Registry<T>>) -> Self {
        Self {
            registry,
            history: History::new(),
            guards: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Bounds the undo sequence. `None` means unbounded.
    pub fn with_history_limit(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.history.set_limit(limit);
        self
    }

    /// Adds a guard. Guards run in the order they were added.
    pub fn with_guard<G: Guard<T> + 'static>(mut self, guard: G) -> Self {
        self.guards.push(Box::new(guard));
        self
    }

    pub fn add_guard<G: Guard<T> + 'static>(&mut self, guard: G) {
        self.guards.push(Box::new(guard));
    }

    /// Registers an observer notified after every successful dispatch, undo and redo.
    pub fn subscribe<O: HistoryObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn registry(&self) -> &Registry<T> {
        &self.registry
    }

    pub fn history(&self) -> &History<T> {
        &self.history
    }

    /// Resolves, guards, executes and records a command.
    ///
    /// On any failure (unknown name, bad arguments, denied permission, failed
    /// execution) the error is returned and the history is not touched.
    pub fn dispatch(&mut self, name: &str, args: &[String], target: &mut T) -> Result<HistoryEntry> {
        log::debug!("Dispatching '{}' with args {:?}", name, args);

        // 1. Resolve and build.
        let command = self.registry.create(name, args)?;

        // 2. Permission checks happen before anything runs.
        self.check_guards(command.as_ref(), target)?;

        // 3. Execute, then record.
        let mut entry = CommandEntry::new(command);
        entry.execute(target)?;
        let summary = HistoryEntry::from(&entry);
        self.history.push(entry);

        self.emit(HistoryEventKind::Executed, &summary);
        Ok(summary)
    }

    /// Reverses the most recent command.
    ///
    /// Undo changes the target as much as execute does, so the guards see the
    /// command first. A denied undo leaves both sequences as they were.
    pub fn undo(&mut self, target: &mut T) -> Result<HistoryEntry> {
        if let Some(entry) = self.history.next_undo() {
            self.check_guards(entry.command(), target)?;
        }
        let summary = self.history.undo(target)?;
        self.emit(HistoryEventKind::Undone, &summary);
        Ok(summary)
    }

    /// Re-executes the most recently undone command, after the guards allow it.
    pub fn redo(&mut self, target: &mut T) -> Result<HistoryEntry> {
        if let Some(entry) = self.history.next_redo() {
            self.check_guards(entry.command(), target)?;
        }
        let summary = self.history.redo(target)?;
        self.emit(HistoryEventKind::Redone, &summary);
        Ok(summary)
    }

    fn check_guards(&self, command: &dyn Command<T>, target: &T) -> Result<()> {
        for guard in &self.guards {
            guard.check(command, target)?;
        }
        Ok(())
    }

    fn emit(&mut self, kind: HistoryEventKind, entry: &HistoryEntry) {
        if self.observers.is_empty() {
            return;
        }
        let event = HistoryEvent {
            kind,
            entry: entry.clone(),
            undo_depth: self.history.len(),
            redo_depth: self.history.redo_len(),
        };
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

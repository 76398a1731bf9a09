// src/core/observer.rs

use crate::core::history::HistoryEntry;

/// What just happened to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEventKind {
    Executed,
    Undone,
    Redone,
}

/// Delivered to observers after each successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEvent {
    pub kind: HistoryEventKind,
    pub entry: HistoryEntry,
    /// Undo depth after the transition.
    pub undo_depth: usize,
    /// Redo depth after the transition.
    pub redo_depth: usize,
}

/// Receives history events from a dispatcher.
pub trait HistoryObserver: Send {
    fn notify(&mut self, event: &HistoryEvent);
}

impl<F> HistoryObserver for F
where
    F: FnMut(&HistoryEvent) + Send,
{
    fn notify(&mut self, event: &HistoryEvent) {
        self(event);
    }
}

/// Observer that writes every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl HistoryObserver for LogObserver {
    fn notify(&mut self, event: &HistoryEvent) {
        log::info!(
            "{:?} {} [{}] (undo: {}, redo: {})",
            event.kind,
            event.entry.description,
            event.entry.id,
            event.undo_depth,
            event.redo_depth
        );
    }
}

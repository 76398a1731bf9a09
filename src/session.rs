// src/session.rs

use crate::{
    core::{
        dispatcher::Dispatcher,
        error::{CommandError, Result},
        guard::{DenyList, ReadOnlyGuard},
        history::HistoryEntry,
        registry::Registry,
    },
    models::{Buffer, SessionConfig},
    state,
};
use std::sync::Arc;

/// One buffer and the dispatcher that edits it.
///
/// Sessions never share history. They may share a registry.
#[derive(Debug)]
pub struct Session {
    buffer: Buffer,
    dispatcher: Dispatcher<Buffer>,
}

impl Session {
    /// A session on the shared built-in registry, shaped by `config`.
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let registry = state::shared_registry()?;
        Self::with_registry(registry, Buffer::new(), config)
    }

    /// A session over an explicit registry and initial buffer.
    ///
    /// Guards always include [`ReadOnlyGuard`]; a [`DenyList`] is added when
    /// the config names commands to refuse. Denied names may be aliases and
    /// must all be registered.
    pub fn with_registry(
        registry: Arc<Registry<Buffer>>,
        mut buffer: Buffer,
        config: &SessionConfig,
    ) -> Result<Self> {
        if config.read_only {
            buffer.set_read_only(true);
        }

        let denied = canonical_names(&registry, &config.deny)?;
        let mut dispatcher = Dispatcher::new(registry)
            .with_history_limit(config.effective_history_limit())
            .with_guard(ReadOnlyGuard);
        if !denied.is_empty() {
            log::debug!("Denying commands: {:?}", denied);
            dispatcher.add_guard(DenyList::new(denied));
        }

        Ok(Self { buffer, dispatcher })
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    pub fn dispatcher(&self) -> &Dispatcher<Buffer> {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<Buffer> {
        &mut self.dispatcher
    }

    pub fn dispatch(&mut self, name: &str, args: &[String]) -> Result<HistoryEntry> {
        self.dispatcher.dispatch(name, args, &mut self.buffer)
    }

    pub fn undo(&mut self) -> Result<HistoryEntry> {
        self.dispatcher.undo(&mut self.buffer)
    }

    pub fn redo(&mut self) -> Result<HistoryEntry> {
        self.dispatcher.redo(&mut self.buffer)
    }
}

/// Maps each name to the command it runs, so guards can match on
/// `Command::name`.
fn canonical_names(registry: &Registry<Buffer>, names: &[String]) -> Result<Vec<String>> {
    names
        .iter()
        .map(|name| {
            registry
                .resolve(name)
                .map(str::to_string)
                .ok_or_else(|| CommandError::UnknownCommand(name.clone()))
        })
        .collect()
}

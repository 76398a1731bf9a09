// src/state.rs

use crate::{
    core::{error::Result, registry::Registry},
    editor,
    models::Buffer,
};
use std::sync::{Arc, OnceLock};

static SHARED_REGISTRY: OnceLock<Arc<Registry<Buffer>>> = OnceLock::new();

/// Returns the process-wide registry of built-in editor commands.
///
/// Built on first access and never mutated afterwards; every session holds a
/// clone of the same `Arc`.
pub fn shared_registry() -> Result<Arc<Registry<Buffer>>> {
    if let Some(registry) = SHARED_REGISTRY.get() {
        return Ok(Arc::clone(registry));
    }

    // Two threads racing here both build a registry; only the first is kept.
    let built = Arc::new(editor::builtin_registry()?);
    Ok(Arc::clone(SHARED_REGISTRY.get_or_init(|| built)))
}

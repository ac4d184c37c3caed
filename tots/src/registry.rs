//! Registry of structure types already emitted during one conversion.

use std::collections::HashSet;

/// Tracks which structure types have been emitted in the current run.
///
/// A registry lives for exactly one [`Converter::convert`] call and is never
/// shared between runs, so a fresh conversion never suppresses a type because
/// an earlier run emitted it.
///
/// [`Converter::convert`]: crate::Converter::convert
#[derive(Debug, Default)]
pub struct EmittedRegistry {
    emitted: HashSet<&'static str>,
}

impl EmittedRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a type as emitted.
    ///
    /// Returns `true` the first time `qualified` is marked, `false` on every
    /// later call.
    pub fn mark_emitted(&mut self, qualified: &'static str) -> bool {
        self.emitted.insert(qualified)
    }
}

use std::collections::HashMap;

use tracing::trace;

/// Variable access for one evaluation.
///
/// Reads see the session's committed variables overlaid with the assignments
/// made so far in this evaluation. Writes only go to the staged layer, so a
/// failing evaluation leaves the session untouched; the caller commits the
/// staged layer once the whole evaluation succeeded.
#[derive(Debug)]
pub struct Scope<'a> {
    committed: &'a HashMap<String, i64>,
    staged: HashMap<String, i64>,
    answer: i64,
}

impl<'a> Scope<'a> {
    pub fn new(committed: &'a HashMap<String, i64>, answer: i64) -> Self {
        Self {
            committed,
            staged: HashMap::new(),
            answer,
        }
    }

    /// The answer register as it was when the evaluation started.
    pub fn answer(&self) -> i64 {
        self.answer
    }

    /// Current value of a variable; never-assigned names read as zero.
    pub fn get(&self, name: &str) -> i64 {
        self.staged
            .get(name)
            .or_else(|| self.committed.get(name))
            .copied()
            .unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, value: i64) {
        trace!(name, value, "staged assignment");
        self.staged.insert(name.to_string(), value);
    }

    /// Consumes the scope, returning the assignments to commit.
    pub fn into_assignments(self) -> HashMap<String, i64> {
        self.staged
    }
}

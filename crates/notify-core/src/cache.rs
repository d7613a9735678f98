//! Per-run memo of hierarchy verdicts keyed by full type name.

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

/// Verdicts computed during one analysis run.
///
/// Entries are write-once: recording a name that already has a verdict keeps
/// the first value. Metadata is static for a run, so a differing second value
/// means the provider broke its contract; it is logged and ignored.
#[derive(Debug, Clone, Default)]
pub struct VerdictCache {
    entries: HashMap<String, bool>,
}

impl VerdictCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, full_name: &str) -> Option<bool> {
        self.entries.get(full_name).copied()
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.entries.contains_key(full_name)
    }

    /// Record `verdict` for `full_name`, returning the verdict now stored.
    pub fn record(&mut self, full_name: &str, verdict: bool) -> bool {
        if let Some(&existing) = self.entries.get(full_name) {
            if existing != verdict {
                warn!(
                    type_name = %full_name,
                    cached = existing,
                    rejected = verdict,
                    "conflicting verdict ignored"
                );
            }
            return existing;
        }
        self.entries.insert(full_name.to_string(), verdict);
        verdict
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. Only for starting a fresh run.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sorted copy of all entries.
    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        self.entries
            .iter()
            .map(|(name, verdict)| (name.clone(), *verdict))
            .collect()
    }
}

//! Provider fakes for testing
//!
//! `CountingProvider` wraps any provider and records every `resolve` call, so
//! tests can assert that cached verdicts never go back to the resolver.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::MetadataResult;
use crate::provider::MetadataProvider;
use crate::types::{TypeDefinition, TypeReference};

/// Provider wrapper counting resolve calls per full name.
#[derive(Debug, Default)]
pub struct CountingProvider<P> {
    inner: P,
    calls: Mutex<HashMap<String, usize>>,
}

impl<P> CountingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Total resolve calls across all names.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    /// Resolve calls made for `full_name`.
    pub fn calls_for(&self, full_name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(full_name)
            .copied()
            .unwrap_or(0)
    }

    pub fn reset_counts(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl<P: MetadataProvider> MetadataProvider for CountingProvider<P> {
    fn resolve(&self, reference: &TypeReference) -> MetadataResult<Arc<TypeDefinition>> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(reference.full_name().to_string())
            .or_insert(0) += 1;
        self.inner.resolve(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryProvider;

    #[test]
    fn test_counts_each_resolve_call() {
        let inner = InMemoryProvider::new()
            .with_type(TypeDefinition::new("Lib.Base"))
            .unwrap();
        let provider = CountingProvider::new(inner);

        provider.resolve(&TypeReference::named("Lib.Base")).unwrap();
        provider.resolve(&TypeReference::named("Lib.Base")).unwrap();
        assert!(provider.resolve(&TypeReference::named("Lib.Gone")).is_err());

        assert_eq!(provider.calls_for("Lib.Base"), 2);
        assert_eq!(provider.calls_for("Lib.Gone"), 1);
        assert_eq!(provider.total_calls(), 3);

        provider.reset_counts();
        assert_eq!(provider.total_calls(), 0);
    }
}

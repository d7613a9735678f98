//! Thread-safe front for [`HierarchyClassifier`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use notify_metadata::{MetadataProvider, TypeReference};

use crate::cache::VerdictCache;
use crate::classifier::HierarchyClassifier;
use crate::error::Result;

/// Classifier shareable across analysis threads behind `&self`.
///
/// The lock is held for the whole query, so the cache lookup, the walk and
/// every cache write happen as one step.
#[derive(Debug)]
pub struct SharedClassifier<P> {
    inner: Mutex<HierarchyClassifier<P>>,
}

impl<P: MetadataProvider> SharedClassifier<P> {
    pub fn new(provider: P) -> Self {
        Self::from_classifier(HierarchyClassifier::new(provider))
    }

    pub fn implements_notification(&self, reference: &TypeReference) -> Result<bool> {
        self.lock().implements_notification(reference)
    }
}

impl<P> SharedClassifier<P> {
    pub fn from_classifier(classifier: HierarchyClassifier<P>) -> Self {
        Self {
            inner: Mutex::new(classifier),
        }
    }

    /// Copy of the cache as it stands.
    pub fn cache_snapshot(&self) -> VerdictCache {
        self.lock().cache().clone()
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    // A panicking walk never leaves a partial entry behind, so a poisoned
    // cache is still consistent.
    fn lock(&self) -> MutexGuard<'_, HierarchyClassifier<P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify_metadata::{InMemoryProvider, MetadataResult, TypeDefinition};
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::Arc;
    use std::thread;

    /// Panics when asked for `Vendor.Panics`, delegates everything else.
    struct PanickingProvider(InMemoryProvider);

    impl MetadataProvider for PanickingProvider {
        fn resolve(&self, reference: &TypeReference) -> MetadataResult<Arc<TypeDefinition>> {
            if reference.full_name() == "Vendor.Panics" {
                panic!("metadata reader crashed on {reference}");
            }
            self.0.resolve(reference)
        }
    }

    #[test]
    fn test_threads_share_one_cache() {
        let mut provider = InMemoryProvider::new();
        provider
            .insert(TypeDefinition::new("Lib.Base").with_event(
                "PropertyChanged",
                TypeReference::named("System.ComponentModel.PropertyChangedEventHandler"),
            ))
            .unwrap();
        for i in 0..8 {
            provider
                .insert(
                    TypeDefinition::new(format!("App.Derived{i}"))
                        .with_base(TypeReference::named("Lib.Base")),
                )
                .unwrap();
        }
        let shared = Arc::new(SharedClassifier::new(provider));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    shared
                        .implements_notification(&TypeReference::named(format!("App.Derived{i}")))
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        let cache = shared.cache_snapshot();
        assert_eq!(cache.len(), 9);
        assert_eq!(cache.get("Lib.Base"), Some(true));
    }

    #[test]
    fn test_query_after_panicking_provider_recovers_lock() {
        let mut provider = InMemoryProvider::new();
        provider
            .insert(
                TypeDefinition::new("App.Broken")
                    .with_base(TypeReference::named("Vendor.Panics")),
            )
            .unwrap();
        provider.insert(TypeDefinition::new("App.Plain")).unwrap();
        let shared = SharedClassifier::new(PanickingProvider(provider));

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            shared.implements_notification(&TypeReference::named("App.Broken"))
        }));
        assert!(outcome.is_err());
        assert!(shared.inner.is_poisoned());

        // The panicked walk left nothing behind and later queries still run.
        assert!(shared.cache_snapshot().is_empty());
        assert!(!shared
            .implements_notification(&TypeReference::named("App.Plain"))
            .unwrap());
        assert_eq!(shared.cache_snapshot().get("App.Plain"), Some(false));
    }
}

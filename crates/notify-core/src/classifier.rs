//! Memoized walk up a type's inheritance chain.
//!
//! [`HierarchyClassifier::implements_notification`] answers whether a type or
//! any of its ancestors exposes a `PropertyChanged` notification contract. Each
//! level is checked for a recognized event first, then for a lowered event
//! field; when neither matches the walk moves on to the base type. The walk
//! ends at a root type, at a base type in the collections namespace, or at a
//! type whose verdict is already cached.

use std::collections::HashSet;
use std::sync::Arc;

use notify_metadata::{MetadataProvider, TypeDefinition, TypeReference};
use tracing::{debug, trace};

use crate::cache::VerdictCache;
use crate::checks::{has_property_changed_event, has_property_changed_field};
use crate::error::{FinderError, Result};
use crate::recognized::is_collections_boundary;

/// Classifies type hierarchies against the change-notification contract.
///
/// One instance covers one analysis run. Verdicts are cached by full name for
/// the life of the instance; call [`reset`](Self::reset) or build a new
/// classifier when the underlying metadata changes.
#[derive(Debug)]
pub struct HierarchyClassifier<P> {
    provider: P,
    cache: VerdictCache,
}

impl<P: MetadataProvider> HierarchyClassifier<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: VerdictCache::new(),
        }
    }

    /// Whether `reference` or one of its ancestors implements the contract.
    ///
    /// Fails with [`FinderError::Resolution`] when any type on the walk cannot
    /// be resolved and with [`FinderError::CyclicHierarchy`] when the chain
    /// loops. A failed query writes no cache entries.
    pub fn implements_notification(&mut self, reference: &TypeReference) -> Result<bool> {
        let queried = reference.full_name();
        let mut seen = HashSet::new();
        // Names awaiting a verdict, queried type first.
        let mut pending: Vec<String> = Vec::new();
        let mut current = reference.clone();

        let mut verdict = loop {
            let full_name = current.full_name();
            if let Some(verdict) = self.cache.get(full_name) {
                trace!(type_name = %full_name, verdict, "verdict cache hit");
                break verdict;
            }

            if !seen.insert(full_name.to_string()) {
                pending.push(full_name.to_string());
                return Err(FinderError::CyclicHierarchy { chain: pending });
            }
            pending.push(full_name.to_string());

            let definition = self.definition_of(&current, queried)?;

            if has_property_changed_event(&definition) {
                debug!(type_name = %full_name, "PropertyChanged event found");
                break true;
            }
            if has_property_changed_field(&definition) {
                debug!(type_name = %full_name, "PropertyChanged event field found");
                break true;
            }

            let Some(base_type) = definition.base_type.as_ref() else {
                trace!(type_name = %full_name, "hierarchy root reached");
                break false;
            };

            // Boundary verdicts are not cached.
            if is_collections_boundary(base_type.full_name()) {
                debug!(
                    type_name = %full_name,
                    base_type = %base_type.full_name(),
                    "collections base type ends walk"
                );
                pending.pop();
                break false;
            }

            current = base_type.clone();
        };

        for name in pending.iter().rev() {
            verdict = self.cache.record(name, verdict);
        }
        Ok(verdict)
    }

    fn definition_of(
        &self,
        reference: &TypeReference,
        queried: &str,
    ) -> Result<Arc<TypeDefinition>> {
        if let Some(definition) = reference.as_definition() {
            return Ok(Arc::clone(definition));
        }
        trace!(type_name = %reference.full_name(), "resolving type reference");
        self.provider
            .resolve(reference)
            .map_err(|source| FinderError::Resolution {
                queried: queried.to_string(),
                source,
            })
    }
}

impl<P> HierarchyClassifier<P> {
    /// Verdicts computed so far.
    pub fn cache(&self) -> &VerdictCache {
        &self.cache
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Forget every cached verdict, starting a new run.
    pub fn reset(&mut self) {
        debug!(entries = self.cache.len(), "resetting verdict cache");
        self.cache.clear();
    }
}

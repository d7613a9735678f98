//! Manifest-backed metadata provider.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{MetadataError, MetadataResult};
use crate::manifest::ModuleManifest;
use crate::provider::{not_found, MetadataProvider};
use crate::types::{TypeDefinition, TypeReference};

/// Metadata provider holding every definition in memory, keyed by full name.
///
/// Scope hints on unresolved references are checked when the definition
/// records its module: a reference scoped to another module is not found.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProvider {
    types: HashMap<String, Arc<TypeDefinition>>,
    /// Full names in insertion order, for stable iteration.
    order: Vec<String>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from every type in `manifest`.
    ///
    /// Fails with `DuplicateType` when two records share a full name.
    pub fn from_manifest(manifest: &ModuleManifest) -> MetadataResult<Self> {
        let mut provider = Self::new();
        for module in &manifest.modules {
            for record in &module.types {
                provider.insert(record.to_definition(&module.name))?;
            }
        }
        debug!(types = provider.len(), "built in-memory metadata provider");
        Ok(provider)
    }

    /// Add a definition. Returns the shared handle stored for it.
    pub fn insert(&mut self, definition: TypeDefinition) -> MetadataResult<Arc<TypeDefinition>> {
        if let Some(existing) = self.types.get(&definition.full_name) {
            return Err(MetadataError::DuplicateType {
                full_name: definition.full_name.clone(),
                first: module_label(existing.module.as_deref()),
                second: module_label(definition.module.as_deref()),
            });
        }
        let definition = Arc::new(definition);
        self.order.push(definition.full_name.clone());
        self.types
            .insert(definition.full_name.clone(), Arc::clone(&definition));
        Ok(definition)
    }

    /// Builder form of [`insert`](Self::insert) for tests and fixtures.
    pub fn with_type(mut self, definition: TypeDefinition) -> MetadataResult<Self> {
        self.insert(definition)?;
        Ok(self)
    }

    pub fn get(&self, full_name: &str) -> Option<&Arc<TypeDefinition>> {
        self.types.get(full_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All definitions in insertion order.
    pub fn definitions(&self) -> impl Iterator<Item = &Arc<TypeDefinition>> + '_ {
        self.order.iter().filter_map(|name| self.types.get(name))
    }

    /// Definitions declared in `module`, in insertion order.
    pub fn definitions_in<'a>(
        &'a self,
        module: &'a str,
    ) -> impl Iterator<Item = &'a Arc<TypeDefinition>> + 'a {
        self.definitions()
            .filter(move |def| def.module.as_deref() == Some(module))
    }
}

impl MetadataProvider for InMemoryProvider {
    fn resolve(&self, reference: &TypeReference) -> MetadataResult<Arc<TypeDefinition>> {
        match reference {
            TypeReference::Definition(def) => Ok(Arc::clone(def)),
            TypeReference::Unresolved { full_name, scope } => {
                let def = self.types.get(full_name).ok_or_else(|| not_found(reference))?;
                if let (Some(wanted), Some(actual)) = (scope.as_deref(), def.module.as_deref()) {
                    if wanted != actual {
                        return Err(not_found(reference));
                    }
                }
                Ok(Arc::clone(def))
            }
        }
    }
}

fn module_label(module: Option<&str>) -> String {
    module.unwrap_or("<unknown>").to_string()
}

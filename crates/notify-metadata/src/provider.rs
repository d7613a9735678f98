//! Resolver seam between the classifier and whatever loads module metadata.
//!
//! The classifier only ever calls [`MetadataProvider::resolve`]; module
//! loading, assembly search paths and the like stay behind this trait.
//! [`InMemoryProvider`](crate::InMemoryProvider) is the manifest-backed
//! implementation and [`fakes`](crate::fakes) has a call-counting wrapper for
//! tests.

use std::sync::Arc;

use crate::error::{MetadataError, MetadataResult};
use crate::types::{TypeDefinition, TypeReference};

/// Turns a symbolic [`TypeReference`] into its [`TypeDefinition`].
///
/// Guarantees:
/// - A reference that already is a definition resolves to that definition
///   without any lookup.
/// - An unknown type yields `MetadataError::NotFound`; implementations do not
///   guess.
/// - Metadata is static: the same reference always resolves to an equal
///   definition.
pub trait MetadataProvider {
    /// Resolve `reference` to its definition.
    fn resolve(&self, reference: &TypeReference) -> MetadataResult<Arc<TypeDefinition>>;
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for &P {
    fn resolve(&self, reference: &TypeReference) -> MetadataResult<Arc<TypeDefinition>> {
        (**self).resolve(reference)
    }
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for Arc<P> {
    fn resolve(&self, reference: &TypeReference) -> MetadataResult<Arc<TypeDefinition>> {
        (**self).resolve(reference)
    }
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for Box<P> {
    fn resolve(&self, reference: &TypeReference) -> MetadataResult<Arc<TypeDefinition>> {
        (**self).resolve(reference)
    }
}

/// Build the `NotFound` error for `reference`.
pub fn not_found(reference: &TypeReference) -> MetadataError {
    MetadataError::NotFound {
        full_name: reference.full_name().to_string(),
        scope: reference.scope().map(str::to_string),
    }
}

//! Notify-Metadata: type metadata model for NotifyScan
//!
//! This crate describes compiled types the way the classifier sees them:
//! full names, declared events and fields, and a base-type link. It owns the
//! resolver seam ([`MetadataProvider`]) that turns symbolic references into
//! definitions.
//!
//! ## Layer 0 - Metadata
//!
//! Focus: read-only access to resolved types.
//!
//! ## Key Components
//!
//! - `TypeReference` / `TypeDefinition`: the type model
//! - `MetadataProvider`: `resolve(reference) -> definition`
//! - `InMemoryProvider`: provider built from a JSON `ModuleManifest`

mod error;
pub mod fakes;
pub mod manifest;
mod memory;
pub mod provider;
mod types;

pub use error::{MetadataError, MetadataResult};
pub use manifest::{EventRecord, FieldRecord, ModuleManifest, ModuleRecord, TypeRecord};
pub use memory::InMemoryProvider;
pub use provider::{not_found, MetadataProvider};
pub use types::{EventDescriptor, FieldDescriptor, TypeDefinition, TypeReference};

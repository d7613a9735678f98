//! JSON module manifest: a serialized stand-in for compiled module metadata.
//!
//! Every type reference in the manifest is written as its full name. Member
//! and base types become unresolved [`TypeReference`]s when a record is
//! turned into a [`TypeDefinition`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MetadataResult;
use crate::types::{EventDescriptor, FieldDescriptor, TypeDefinition, TypeReference};

/// Top-level manifest document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleManifest {
    pub modules: Vec<ModuleRecord>,
}

/// One module and the types it defines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub event_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    pub field_type: String,
}

impl ModuleManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json_str(json: &str) -> MetadataResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> MetadataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            modules = manifest.modules.len(),
            "loaded module manifest"
        );
        Ok(manifest)
    }

    /// Total number of type records across all modules.
    pub fn type_count(&self) -> usize {
        self.modules.iter().map(|m| m.types.len()).sum()
    }
}

impl TypeRecord {
    /// Build the definition for this record, declared in `module`.
    pub fn to_definition(&self, module: &str) -> TypeDefinition {
        TypeDefinition {
            full_name: self.full_name.clone(),
            module: Some(module.to_string()),
            events: self
                .events
                .iter()
                .map(|e| EventDescriptor::new(&e.name, TypeReference::named(&e.event_type)))
                .collect(),
            fields: self
                .fields
                .iter()
                .map(|f| FieldDescriptor::new(&f.name, TypeReference::named(&f.field_type)))
                .collect(),
            base_type: self.base_type.as_deref().map(TypeReference::named),
        }
    }
}

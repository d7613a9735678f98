//! Read-only view of compiled type metadata.
//!
//! A [`TypeReference`] names a type and is either still symbolic (resolved
//! later through a [`MetadataProvider`](crate::MetadataProvider)) or already
//! carries its [`TypeDefinition`]. Definitions are shared behind `Arc` so the
//! resolver can hand out the same value to every caller.

use std::fmt;
use std::sync::Arc;

/// Reference to a type by its fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeReference {
    /// Symbolic reference that still needs resolving.
    Unresolved {
        full_name: String,
        /// Name of the module expected to declare the type, when known.
        scope: Option<String>,
    },
    /// Reference that is itself the resolved definition.
    Definition(Arc<TypeDefinition>),
}

impl TypeReference {
    /// Unresolved reference with no scope hint.
    pub fn named(full_name: impl Into<String>) -> Self {
        Self::Unresolved {
            full_name: full_name.into(),
            scope: None,
        }
    }

    /// Unresolved reference expected to live in `scope`.
    pub fn scoped(full_name: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::Unresolved {
            full_name: full_name.into(),
            scope: Some(scope.into()),
        }
    }

    /// Self-describing reference wrapping an already resolved definition.
    pub fn definition(definition: impl Into<Arc<TypeDefinition>>) -> Self {
        Self::Definition(definition.into())
    }

    pub fn full_name(&self) -> &str {
        match self {
            Self::Unresolved { full_name, .. } => full_name,
            Self::Definition(def) => &def.full_name,
        }
    }

    pub fn scope(&self) -> Option<&str> {
        match self {
            Self::Unresolved { scope, .. } => scope.as_deref(),
            Self::Definition(def) => def.module.as_deref(),
        }
    }

    pub fn is_definition(&self) -> bool {
        matches!(self, Self::Definition(_))
    }

    /// The wrapped definition, if this reference is already resolved.
    pub fn as_definition(&self) -> Option<&Arc<TypeDefinition>> {
        match self {
            Self::Definition(def) => Some(def),
            Self::Unresolved { .. } => None,
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// A declared event: its name and the delegate type of its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub name: String,
    pub event_type: TypeReference,
}

impl EventDescriptor {
    pub fn new(name: impl Into<String>, event_type: TypeReference) -> Self {
        Self {
            name: name.into(),
            event_type,
        }
    }
}

/// A declared field. Only `field_type` takes part in classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: TypeReference,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: TypeReference) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Fully resolved member surface of a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub full_name: String,
    /// Declaring module, if known.
    pub module: Option<String>,
    pub events: Vec<EventDescriptor>,
    pub fields: Vec<FieldDescriptor>,
    /// `None` for hierarchy roots.
    pub base_type: Option<TypeReference>,
}

impl TypeDefinition {
    /// Definition with no members and no base type.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            module: None,
            events: Vec::new(),
            fields: Vec::new(),
            base_type: None,
        }
    }

    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_base(mut self, base_type: TypeReference) -> Self {
        self.base_type = Some(base_type);
        self
    }

    pub fn with_event(mut self, name: impl Into<String>, event_type: TypeReference) -> Self {
        self.events.push(EventDescriptor::new(name, event_type));
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, field_type: TypeReference) -> Self {
        self.fields.push(FieldDescriptor::new(name, field_type));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_for_both_variants() {
        let unresolved = TypeReference::scoped("Lib.Base", "Lib");
        assert_eq!(unresolved.full_name(), "Lib.Base");
        assert_eq!(unresolved.scope(), Some("Lib"));
        assert!(!unresolved.is_definition());
        assert!(unresolved.as_definition().is_none());

        let resolved = TypeReference::definition(TypeDefinition::new("App.Model").in_module("App"));
        assert_eq!(resolved.full_name(), "App.Model");
        assert_eq!(resolved.scope(), Some("App"));
        assert!(resolved.is_definition());
    }

    #[test]
    fn test_builder_collects_members_in_order() {
        let def = TypeDefinition::new("App.Model")
            .with_base(TypeReference::named("System.Object"))
            .with_event("Changed", TypeReference::named("System.EventHandler"))
            .with_event("Closed", TypeReference::named("System.EventHandler"))
            .with_field("count", TypeReference::named("System.Int32"));

        let names: Vec<_> = def.events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Changed", "Closed"]);
        assert_eq!(def.fields[0].field_type.full_name(), "System.Int32");
        assert_eq!(
            def.base_type.as_ref().map(TypeReference::full_name),
            Some("System.Object")
        );
    }

    #[test]
    fn test_display_uses_full_name() {
        let r = TypeReference::named("System.Collections.ObjectModel.Collection`1<App.Item>");
        assert_eq!(
            r.to_string(),
            "System.Collections.ObjectModel.Collection`1<App.Item>"
        );
    }
}

//! Structural predicates run against a single resolved type.
//!
//! Neither check looks at base types or resolves anything: they only read the
//! members declared directly on the definition.

use notify_metadata::{EventDescriptor, TypeDefinition, TypeReference};

use crate::recognized::{
    is_property_changed_event_name, is_property_changed_field_type,
    is_property_changed_handler_type,
};

/// Declares a `PropertyChanged` event with a recognized handler type.
pub fn has_property_changed_event(definition: &TypeDefinition) -> bool {
    definition
        .events
        .iter()
        .any(|e| is_named_property_changed(e) && is_property_changed_event_handler(&e.event_type))
}

pub fn is_named_property_changed(event: &EventDescriptor) -> bool {
    is_property_changed_event_name(&event.name)
}

pub fn is_property_changed_event_handler(reference: &TypeReference) -> bool {
    is_property_changed_handler_type(reference.full_name())
}

/// Declares a field whose type is a lowered PropertyChanged event wrapper.
pub fn has_property_changed_field(definition: &TypeDefinition) -> bool {
    definition
        .fields
        .iter()
        .any(|f| is_property_changed_field_type(f.field_type.full_name()))
}

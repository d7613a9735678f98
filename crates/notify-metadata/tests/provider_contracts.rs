//! Contract tests for MetadataProvider implementations.
//!
//! Any conforming provider must pass these; they run against the
//! manifest-backed provider and the counting fake wrapped around it.

use std::sync::Arc;

use notify_metadata::fakes::CountingProvider;
use notify_metadata::{
    InMemoryProvider, MetadataError, MetadataProvider, ModuleManifest, TypeDefinition,
    TypeReference,
};

const MANIFEST: &str = r#"{
    "modules": [
        {
            "name": "Lib",
            "types": [
                { "full_name": "System.Object" },
                {
                    "full_name": "Lib.ObservableBase",
                    "base_type": "System.Object",
                    "events": [
                        { "name": "PropertyChanged", "event_type": "System.ComponentModel.PropertyChangedEventHandler" }
                    ]
                }
            ]
        },
        {
            "name": "App",
            "types": [
                {
                    "full_name": "App.Person",
                    "base_type": "Lib.ObservableBase",
                    "fields": [ { "name": "name", "field_type": "System.String" } ]
                }
            ]
        }
    ]
}"#;

fn provider() -> InMemoryProvider {
    let manifest = ModuleManifest::from_json_str(MANIFEST).unwrap();
    InMemoryProvider::from_manifest(&manifest).unwrap()
}

fn assert_contract(provider: &dyn MetadataProvider) {
    // Unresolved references resolve by full name.
    let person = provider.resolve(&TypeReference::named("App.Person")).unwrap();
    assert_eq!(person.full_name, "App.Person");
    assert_eq!(person.module.as_deref(), Some("App"));

    // Base types come back unresolved and resolve in turn.
    let base_ref = person.base_type.clone().unwrap();
    assert!(!base_ref.is_definition());
    let base = provider.resolve(&base_ref).unwrap();
    assert_eq!(base.events[0].name, "PropertyChanged");

    // Definitions are returned as-is.
    let local = Arc::new(TypeDefinition::new("Local.Type"));
    let resolved = provider
        .resolve(&TypeReference::Definition(Arc::clone(&local)))
        .unwrap();
    assert!(Arc::ptr_eq(&resolved, &local));

    // Unknown names fail hard.
    let err = provider
        .resolve(&TypeReference::named("External.Missing"))
        .unwrap_err();
    assert!(matches!(err, MetadataError::NotFound { .. }));
}

#[test]
fn in_memory_provider_satisfies_contract() {
    assert_contract(&provider());
}

#[test]
fn counting_provider_satisfies_contract() {
    let counting = CountingProvider::new(provider());
    assert_contract(&counting);
    assert_eq!(counting.calls_for("App.Person"), 1);
    assert_eq!(counting.calls_for("External.Missing"), 1);
}

#[test]
fn resolution_is_stable_across_calls() {
    let provider = provider();
    let first = provider
        .resolve(&TypeReference::named("Lib.ObservableBase"))
        .unwrap();
    let second = provider
        .resolve(&TypeReference::named("Lib.ObservableBase"))
        .unwrap();
    assert_eq!(first, second);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn shared_handles_are_providers_too() {
    let shared: Arc<InMemoryProvider> = Arc::new(provider());
    let boxed: Box<dyn MetadataProvider> = Box::new(provider());

    assert!(shared.resolve(&TypeReference::named("System.Object")).is_ok());
    assert!(boxed.resolve(&TypeReference::named("System.Object")).is_ok());
}

//! Fixed name tables for the change-notification contract.
//!
//! All comparisons against these tables are exact and case-sensitive.

/// Event names that count as a `PropertyChanged` event: the plain name, the
/// explicit interface implementation name, and the WinRT XAML name.
pub const PROPERTY_CHANGED_EVENT_NAMES: [&str; 3] = [
    "PropertyChanged",
    "System.ComponentModel.INotifyPropertyChanged.PropertyChanged",
    "Windows.UI.Xaml.Data.PropertyChanged",
];

/// Handler delegate types accepted for a `PropertyChanged` event.
pub const PROPERTY_CHANGED_HANDLER_TYPES: [&str; 3] = [
    "System.ComponentModel.PropertyChangedEventHandler",
    "Windows.UI.Xaml.Data.PropertyChangedEventHandler",
    "System.Runtime.InteropServices.WindowsRuntime.EventRegistrationTokenTable`1<Windows.UI.Xaml.Data.PropertyChangedEventHandler>",
];

/// Field types of a lowered F# `[<CLIEvent>]` PropertyChanged event.
pub const PROPERTY_CHANGED_FIELD_TYPES: [&str; 2] = [
    "Microsoft.FSharp.Control.FSharpEvent`2<System.ComponentModel.PropertyChangedEventHandler,System.ComponentModel.PropertyChangedEventArgs>",
    "Microsoft.FSharp.Control.FSharpEvent`2<Windows.UI.Xaml.Data.PropertyChangedEventHandler,Windows.UI.Xaml.Data.PropertyChangedEventArgs>",
];

/// Base types under this namespace end the hierarchy walk.
pub const COLLECTIONS_NAMESPACE_PREFIX: &str = "System.Collections";

pub fn is_property_changed_event_name(name: &str) -> bool {
    PROPERTY_CHANGED_EVENT_NAMES.contains(&name)
}

pub fn is_property_changed_handler_type(full_name: &str) -> bool {
    PROPERTY_CHANGED_HANDLER_TYPES.contains(&full_name)
}

pub fn is_property_changed_field_type(full_name: &str) -> bool {
    PROPERTY_CHANGED_FIELD_TYPES.contains(&full_name)
}

/// Whether the walk stops at a base type named `full_name`.
pub fn is_collections_boundary(full_name: &str) -> bool {
    full_name.starts_with(COLLECTIONS_NAMESPACE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_case_sensitive() {
        assert!(is_property_changed_event_name("PropertyChanged"));
        assert!(!is_property_changed_event_name("propertyChanged"));
        assert!(!is_property_changed_event_name("PropertyChangedEventHandler"));
        assert!(!is_property_changed_event_name(" PropertyChanged"));
    }

    #[test]
    fn test_handler_types_require_full_name() {
        assert!(is_property_changed_handler_type(
            "System.ComponentModel.PropertyChangedEventHandler"
        ));
        assert!(!is_property_changed_handler_type("PropertyChangedEventHandler"));
        assert!(!is_property_changed_handler_type("System.EventHandler"));
        assert!(!is_property_changed_handler_type(
            "System.Runtime.InteropServices.WindowsRuntime.EventRegistrationTokenTable`1<System.ComponentModel.PropertyChangedEventHandler>"
        ));
    }

    #[test]
    fn test_field_types_match_whole_generic_signature() {
        assert!(is_property_changed_field_type(PROPERTY_CHANGED_FIELD_TYPES[1]));
        assert!(!is_property_changed_field_type(
            "Microsoft.FSharp.Control.FSharpEvent`2<System.ComponentModel.PropertyChangedEventHandler, System.ComponentModel.PropertyChangedEventArgs>"
        ));
        assert!(!is_property_changed_field_type(
            "Microsoft.FSharp.Control.FSharpEvent`2"
        ));
    }

    #[test]
    fn test_collections_boundary_is_a_prefix_match() {
        assert!(is_collections_boundary(
            "System.Collections.ObjectModel.ObservableCollection`1<App.Item>"
        ));
        assert!(is_collections_boundary("System.Collections.Generic.List`1<T>"));
        // Plain prefix, no namespace segment check.
        assert!(is_collections_boundary("System.CollectionsExtra.Bag"));
        assert!(!is_collections_boundary("System.Object"));
        assert!(!is_collections_boundary("App.System.Collections.Bag"));
    }
}

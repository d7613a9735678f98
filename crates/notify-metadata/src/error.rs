//! Error types for notify-metadata

use thiserror::Error;

/// Errors that can occur while loading or resolving type metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The resolver has no definition for the referenced type
    #[error("type not found: {full_name}{}", scope_suffix(.scope))]
    NotFound {
        full_name: String,
        scope: Option<String>,
    },

    /// Two definitions in one manifest share a full name
    #[error("duplicate type definition: {full_name} (modules {first} and {second})")]
    DuplicateType {
        full_name: String,
        first: String,
        second: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest parsing error
    #[error("manifest parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn scope_suffix(scope: &Option<String>) -> String {
    match scope {
        Some(scope) => format!(" (scope: {scope})"),
        None => String::new(),
    }
}

/// Result type for metadata operations
pub type MetadataResult<T> = std::result::Result<T, MetadataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_scope() {
        let err = MetadataError::NotFound {
            full_name: "Lib.Base".to_string(),
            scope: Some("Lib".to_string()),
        };
        assert_eq!(err.to_string(), "type not found: Lib.Base (scope: Lib)");

        let err = MetadataError::NotFound {
            full_name: "Lib.Base".to_string(),
            scope: None,
        };
        assert_eq!(err.to_string(), "type not found: Lib.Base");
    }

    #[test]
    fn test_duplicate_type_display() {
        let err = MetadataError::DuplicateType {
            full_name: "App.Model".to_string(),
            first: "App".to_string(),
            second: "App.Extra".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("App.Model"));
        assert!(msg.contains("App.Extra"));
    }
}

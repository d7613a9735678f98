//! Error taxonomy for hierarchy classification.

use notify_metadata::MetadataError;

/// Errors that abort a classification query.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// The resolver could not produce a definition somewhere in the chain.
    #[error("cannot classify {queried}: {source}")]
    Resolution {
        /// Type the query was issued for.
        queried: String,
        #[source]
        source: MetadataError,
    },

    /// The base-type chain revisits a type.
    #[error("cyclic base-type chain: {}", .chain.join(" -> "))]
    CyclicHierarchy {
        /// Walk order, ending with the repeated name.
        chain: Vec<String>,
    },
}

impl FinderError {
    /// Full name of the reference that failed to resolve, if any.
    pub fn unresolved_name(&self) -> Option<&str> {
        match self {
            Self::Resolution {
                source: MetadataError::NotFound { full_name, .. },
                ..
            } => Some(full_name.as_str()),
            _ => None,
        }
    }
}

/// Result type for classification operations.
pub type Result<T> = std::result::Result<T, FinderError>;

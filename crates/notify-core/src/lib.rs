//! NotifyScan Core
//!
//! Decides whether a type, or any type it inherits from, exposes a
//! `PropertyChanged` change-notification contract. The answer feeds the
//! code-generation stage, which lives elsewhere.
//!
//! Entry point: [`HierarchyClassifier::implements_notification`]. Metadata is
//! reached only through [`notify_metadata::MetadataProvider`].

pub mod analysis;
pub mod cache;
pub mod checks;
pub mod classifier;
pub mod error;
pub mod obs;
pub mod recognized;
pub mod shared;
pub mod telemetry;

pub use analysis::{analyze_types, AnalysisOptions, AnalysisReport, TypeFailure, TypeVerdict};
pub use cache::VerdictCache;
pub use checks::{
    has_property_changed_event, has_property_changed_field, is_named_property_changed,
    is_property_changed_event_handler,
};
pub use classifier::HierarchyClassifier;
pub use error::{FinderError, Result};
pub use obs::{
    emit_analysis_finished, emit_analysis_started, emit_type_classified, emit_type_failed,
    AnalysisSpan,
};
pub use shared::SharedClassifier;
pub use telemetry::init_tracing;

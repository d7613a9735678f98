//! Structured observability hooks for analysis runs.
//!
//! This module provides:
//! - Module-scoped tracing spans via the `AnalysisSpan` RAII guard
//! - Emission functions for analysis lifecycle events: start, per-type verdict,
//!   per-type failure, finish
//!
//! Events are emitted at `info!` level, failures at `warn!`. Verbosity follows
//! `NOTIFYSCAN_LOG` / `RUST_LOG` (see [`init_tracing`](crate::init_tracing)).

use tracing::info;

/// RAII guard that enters an analysis-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = AnalysisSpan::enter("App");
/// // every event below is tagged with module = "App"
/// ```
pub struct AnalysisSpan {
    _span: tracing::span::EnteredSpan,
}

impl AnalysisSpan {
    /// Create and enter a span tagged with the analysed module (or scope label).
    pub fn enter(module: &str) -> Self {
        let span = tracing::info_span!("notifyscan.analysis", module = %module);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: analysis started over `type_count` types.
pub fn emit_analysis_started(type_count: usize) {
    info!(event = "analysis.started", type_count = type_count);
}

/// Emit event: one type classified.
pub fn emit_type_classified(type_name: &str, implements: bool) {
    info!(
        event = "analysis.type_classified",
        type_name = %type_name,
        implements = implements,
    );
}

/// Emit event: one type could not be classified (warning level).
pub fn emit_type_failed(type_name: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(event = "analysis.type_failed", type_name = %type_name, error = %error);
}

/// Emit event: analysis finished.
pub fn emit_analysis_finished(
    classified: usize,
    implementing: usize,
    failed: usize,
    aborted: bool,
) {
    info!(
        event = "analysis.finished",
        classified = classified,
        implementing = implementing,
        failed = failed,
        aborted = aborted,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_span_create() {
        let _span = AnalysisSpan::enter("App");
    }
}

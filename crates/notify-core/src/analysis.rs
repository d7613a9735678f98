//! One analysis pass over a set of types.
//!
//! Classifies each type in turn and collects the outcome. A type that fails to
//! classify is reported with a diagnostic and the pass moves on, unless
//! [`AnalysisOptions::fail_fast`] is set.

use notify_metadata::{MetadataProvider, TypeReference};
use serde::{Deserialize, Serialize};

use crate::classifier::HierarchyClassifier;
use crate::obs::{
    emit_analysis_finished, emit_analysis_started, emit_type_classified, emit_type_failed,
};

/// Run-time knobs for an analysis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Stop at the first type that fails to classify.
    pub fail_fast: bool,
}

impl AnalysisOptions {
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

/// Verdict for one classified type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeVerdict {
    pub type_name: String,
    pub implements_notification: bool,
}

/// Diagnostic for a type that could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFailure {
    pub type_name: String,
    /// Reference the resolver could not find, when that was the cause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unresolved: Option<String>,
    pub error: String,
}

/// Outcome of an analysis pass, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub verdicts: Vec<TypeVerdict>,
    pub failures: Vec<TypeFailure>,
    /// True when `fail_fast` stopped the pass early.
    pub aborted: bool,
}

impl AnalysisReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Names of the types whose hierarchy implements the contract.
    pub fn implementing(&self) -> impl Iterator<Item = &str> + '_ {
        self.verdicts
            .iter()
            .filter(|v| v.implements_notification)
            .map(|v| v.type_name.as_str())
    }

    pub fn verdict_for(&self, type_name: &str) -> Option<bool> {
        self.verdicts
            .iter()
            .find(|v| v.type_name == type_name)
            .map(|v| v.implements_notification)
    }
}

/// Classify every reference in `types` with `classifier`.
pub fn analyze_types<P, I>(
    classifier: &mut HierarchyClassifier<P>,
    types: I,
    options: AnalysisOptions,
) -> AnalysisReport
where
    P: MetadataProvider,
    I: IntoIterator<Item = TypeReference>,
{
    let types: Vec<TypeReference> = types.into_iter().collect();
    emit_analysis_started(types.len());

    let mut report = AnalysisReport::default();
    for reference in &types {
        let type_name = reference.full_name();
        match classifier.implements_notification(reference) {
            Ok(implements) => {
                emit_type_classified(type_name, implements);
                report.verdicts.push(TypeVerdict {
                    type_name: type_name.to_string(),
                    implements_notification: implements,
                });
            }
            Err(err) => {
                emit_type_failed(type_name, &err);
                report.failures.push(TypeFailure {
                    type_name: type_name.to_string(),
                    unresolved: err.unresolved_name().map(str::to_string),
                    error: err.to_string(),
                });
                if options.fail_fast {
                    report.aborted = true;
                    break;
                }
            }
        }
    }

    emit_analysis_finished(
        report.verdicts.len(),
        report.implementing().count(),
        report.failures.len(),
        report.aborted,
    );
    report
}

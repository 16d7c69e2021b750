//! Classifier trait seam.

use std::collections::BTreeMap;

use thiserror::Error;

use codrisk_core::FeatureRow;

/// Class label for a cancelled / high-risk COD order.
pub const GROSS_LABEL: &str = "Gross";

/// Class label for a completed / low-risk order.
pub const NET_LABEL: &str = "Net";

/// Probability mass per class label.
///
/// Keyed by label, never by position: class ordering inside an artifact is
/// not a stable contract.
pub type ClassProbabilities = BTreeMap<String, f64>;

/// Output of one classifier invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The label the model itself would predict (argmax).
    pub predicted: String,
    /// Full probability distribution over class labels.
    pub probabilities: ClassProbabilities,
}

/// Failure inside the classifier call or downstream label lookup.
///
/// Fatal for the request it occurred in; surfaced verbatim and never retried
/// (a bad row fails identically on retry).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("classifier invocation failed: {0}")]
    Invocation(String),

    #[error("class label {0:?} missing from classifier output")]
    MissingClassLabel(String),
}

/// The pre-trained risk classifier, treated as a black box.
///
/// Implementations must be safe for concurrent read-only invocation: one
/// instance is loaded at process start and shared across requests, and
/// `classify` must not mutate shared state.
pub trait Classifier: Send + Sync {
    fn classify(&self, row: &FeatureRow) -> Result<Classification, ClassifierError>;
}

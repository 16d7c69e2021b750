//! `codrisk-inference`
//!
//! **Responsibility:** the classifier boundary and everything downstream of
//! a validated order: feature-row classification, the fixed-threshold
//! decision policy, and the dashboard insight heuristics.
//!
//! The classifier itself is an external artifact; this crate defines the
//! trait seam ([`Classifier`]) plus one backend that evaluates a serialized
//! linear model. It never trains, never mutates state per call, and never
//! swallows an invocation failure.

pub mod artifact;
pub mod classifier;
pub mod decision;
pub mod insights;

pub use artifact::{ArtifactError, LinearArtifact};
pub use classifier::{
    ClassProbabilities, Classification, Classifier, ClassifierError, GROSS_LABEL, NET_LABEL,
};
pub use decision::{Prediction, RISK_THRESHOLD, Verdict, decide};
pub use insights::insights;

use codrisk_core::OrderFeatures;

/// Run the full inference chain for one validated order:
/// Assemble → Classify → Decide.
///
/// Stateless; both front-ends go through this single entrypoint so the
/// threshold and label lookup cannot diverge between them.
pub fn predict(
    classifier: &dyn Classifier,
    features: &OrderFeatures,
) -> Result<Prediction, ClassifierError> {
    let row = features.assemble();
    let classification = classifier.classify(&row)?;
    decide(&classification.probabilities)
}

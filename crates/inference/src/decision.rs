//! Fixed-threshold decision policy over classifier output.

use serde::Serialize;

use crate::classifier::{ClassProbabilities, ClassifierError, GROSS_LABEL};

/// Probability cutoff above which an order is flagged as high-risk.
///
/// The comparison is inclusive: a risk probability of exactly 0.30 is Gross.
/// This constant is the single source of truth for every front-end.
pub const RISK_THRESHOLD: f64 = 0.30;

/// Binary risk verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Cancellation risk at or above the threshold.
    Gross,
    /// Below the threshold; order considered safe.
    Net,
}

impl Verdict {
    /// Human-readable verdict label, as displayed by both front-ends.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Gross => "Gross (Cancellation Risk)",
            Verdict::Net => "Net (Safe)",
        }
    }
}

/// Outcome of the decision policy for one order.
///
/// Constructed per request, used once, discarded; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub verdict: Verdict,
    /// Model-estimated probability of the Gross outcome, in [0, 1].
    pub risk_probability: f64,
}

impl Prediction {
    pub fn is_risky(&self) -> bool {
        self.verdict == Verdict::Gross
    }

    /// Risk probability as a display percentage, e.g. `"45.00%"`.
    pub fn probability_display(&self) -> String {
        format!("{:.2}%", self.risk_probability * 100.0)
    }
}

/// Convert class probabilities into a risk verdict.
///
/// The Gross probability is looked up **by label**; if the classifier output
/// carries no `"Gross"` entry that is an invocation error, not a default.
pub fn decide(probabilities: &ClassProbabilities) -> Result<Prediction, ClassifierError> {
    let risk_probability = *probabilities
        .get(GROSS_LABEL)
        .ok_or_else(|| ClassifierError::MissingClassLabel(GROSS_LABEL.to_string()))?;

    let verdict = if risk_probability >= RISK_THRESHOLD {
        Verdict::Gross
    } else {
        Verdict::Net
    };

    Ok(Prediction {
        verdict,
        risk_probability,
    })
}

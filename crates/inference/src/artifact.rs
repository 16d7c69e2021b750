//! Serialized linear-model artifact backend.
//!
//! The artifact is a JSON export of a calibrated binary logistic model,
//! produced by an external training toolchain. This module only
//! deserializes and evaluates it; there is no training logic here and the
//! file format is owned by whoever exported the model.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use codrisk_core::FeatureRow;

use crate::classifier::{Classification, Classifier, ClassifierError};

/// Startup failure while loading the model artifact.
///
/// Fatal to the HTTP process; the dashboard surface degrades to an explicit
/// on-screen error instead.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// Calibrated binary logistic model over the five-column feature row.
///
/// Loaded once at process start and shared read-only thereafter;
/// [`Classifier::classify`] takes `&self` and touches no mutable state, so
/// concurrent invocation needs no locking.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearArtifact {
    /// Model name recorded by the exporter (informational).
    pub name: String,
    pub version: u32,
    /// Class labels known to the model. Ordering is exporter-defined and
    /// carries no meaning; lookups are always by label.
    classes: Vec<String>,
    /// The class whose probability the logistic output represents.
    positive_class: String,
    intercept: f64,
    /// Weight per numeric feature column.
    weights: NumericWeights,
    /// One-hot weight per canonical category.
    category_weights: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct NumericWeights {
    price: f64,
    qty_ordered: f64,
    #[serde(rename = "Month")]
    month: f64,
    date: f64,
}

impl LinearArtifact {
    /// Load and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let artifact = Self::from_json(&raw)?;
        tracing::info!(
            model = %artifact.name,
            version = artifact.version,
            path = %path.display(),
            "loaded classifier artifact"
        );
        Ok(artifact)
    }

    /// Parse and validate an artifact from its JSON text.
    pub fn from_json(raw: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(raw)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.len() != 2 {
            return Err(ArtifactError::Invalid(format!(
                "expected exactly 2 classes, artifact has {}",
                self.classes.len()
            )));
        }
        if !self.classes.contains(&self.positive_class) {
            return Err(ArtifactError::Invalid(format!(
                "positive class {:?} not present in class list {:?}",
                self.positive_class, self.classes
            )));
        }
        if !self.intercept.is_finite() {
            return Err(ArtifactError::Invalid("intercept is not finite".to_string()));
        }
        Ok(())
    }

    /// The label of the complement class (the one that is not positive).
    fn negative_class(&self) -> &str {
        self.classes
            .iter()
            .find(|c| **c != self.positive_class)
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn logit(&self, row: &FeatureRow) -> Result<f64, ClassifierError> {
        let category_weight = self
            .category_weights
            .get(&row.category_name_1)
            .copied()
            .ok_or_else(|| {
                ClassifierError::Invocation(format!(
                    "category {:?} unknown to model artifact",
                    row.category_name_1
                ))
            })?;

        Ok(self.intercept
            + self.weights.price * row.price
            + self.weights.qty_ordered * row.qty_ordered
            + self.weights.month * row.month
            + self.weights.date * row.date
            + category_weight)
    }
}

impl Classifier for LinearArtifact {
    fn classify(&self, row: &FeatureRow) -> Result<Classification, ClassifierError> {
        let z = self.logit(row)?;
        let p_positive = sigmoid(z);
        if !p_positive.is_finite() {
            return Err(ClassifierError::Invocation(format!(
                "model produced a non-finite probability (logit {z})"
            )));
        }

        let mut probabilities = BTreeMap::new();
        probabilities.insert(self.positive_class.clone(), p_positive);
        probabilities.insert(self.negative_class().to_string(), 1.0 - p_positive);

        let predicted = if p_positive >= 0.5 {
            self.positive_class.clone()
        } else {
            self.negative_class().to_string()
        };

        Ok(Classification {
            predicted,
            probabilities,
        })
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codrisk_core::OrderFeatures;

    fn artifact_json() -> String {
        let category_weights: BTreeMap<&str, f64> = codrisk_core::CATEGORIES
            .iter()
            .map(|c| (*c, 0.1))
            .collect();
        serde_json::json!({
            "name": "cod-risk-logit",
            "version": 1,
            "classes": ["Net", "Gross"],
            "positive_class": "Gross",
            "intercept": -1.0,
            "weights": {
                "price": 0.0000001,
                "qty_ordered": 0.05,
                "Month": 0.01,
                "date": 0.0
            },
            "category_weights": category_weights,
        })
        .to_string()
    }

    fn row() -> FeatureRow {
        OrderFeatures::new(2000, 1, "beauty & grooming", 11, 15)
            .unwrap()
            .assemble()
    }

    #[test]
    fn assembled_rows_never_hit_a_schema_error() {
        let artifact = LinearArtifact::from_json(&artifact_json()).unwrap();
        for category in codrisk_core::CATEGORIES {
            let row = OrderFeatures::new(500, 2, category, 6, 10).unwrap().assemble();
            artifact.classify(&row).expect("correctly-fit artifact rejected an assembled row");
        }
    }

    #[test]
    fn probabilities_are_labeled_and_sum_to_one() {
        let artifact = LinearArtifact::from_json(&artifact_json()).unwrap();
        let out = artifact.classify(&row()).unwrap();

        let gross = out.probabilities["Gross"];
        let net = out.probabilities["Net"];
        assert!((0.0..=1.0).contains(&gross));
        assert!((gross + net - 1.0).abs() < 1e-12);
    }

    #[test]
    fn predicted_label_is_argmax() {
        let artifact = LinearArtifact::from_json(&artifact_json()).unwrap();
        let out = artifact.classify(&row()).unwrap();
        let gross = out.probabilities["Gross"];
        let expected = if gross >= 0.5 { "Gross" } else { "Net" };
        assert_eq!(out.predicted, expected);
    }

    #[test]
    fn classification_is_read_only_and_repeatable() {
        let artifact = LinearArtifact::from_json(&artifact_json()).unwrap();
        let a = artifact.classify(&row()).unwrap();
        let b = artifact.classify(&row()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_artifact_file_is_an_io_error() {
        let err = LinearArtifact::load("model/does-not-exist.json").unwrap_err();
        assert!(matches!(err, ArtifactError::Io(_)));
    }

    #[test]
    fn artifact_without_positive_class_is_rejected() {
        let raw = artifact_json().replace("\"positive_class\":\"Gross\"", "\"positive_class\":\"Cancelled\"");
        let err = LinearArtifact::from_json(&raw).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn category_missing_from_artifact_surfaces_as_invocation_error() {
        let artifact = LinearArtifact::from_json(&artifact_json()).unwrap();
        let mut bad_row = row();
        bad_row.category_name_1 = "Groceries".to_string();
        let err = artifact.classify(&bad_row).unwrap_err();
        assert!(matches!(err, ClassifierError::Invocation(_)));
    }
}

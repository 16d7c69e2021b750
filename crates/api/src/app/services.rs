use std::sync::Arc;
use std::time::Duration;

use codrisk_core::OrderFeatures;
use codrisk_inference::{ArtifactError, Classifier, ClassifierError, LinearArtifact, Prediction};

/// Artifact path convention: `model/<artifact-name>`.
pub const DEFAULT_MODEL_PATH: &str = "model/cod_risk.json";

/// Upper bound on a single classifier call. Inference is a handful of
/// multiply-adds, so hitting this means something is genuinely wrong.
const CLASSIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Classifier availability for the running process.
///
/// `Unavailable` exists for the dashboard's degraded mode: the page stays up
/// with an explicit on-screen error while prediction is disabled.
#[derive(Clone)]
pub enum ArtifactState {
    Ready(Arc<dyn Classifier>),
    Unavailable(String),
}

/// Shared per-process services: one read-only classifier instance, loaded at
/// startup and shared across concurrent requests.
#[derive(Clone)]
pub struct AppServices {
    pub artifact: ArtifactState,
}

impl AppServices {
    /// Load the classifier artifact from disk.
    pub fn load(model_path: &str) -> Result<Self, ArtifactError> {
        let artifact = LinearArtifact::load(model_path)?;
        Ok(Self::with_classifier(Arc::new(artifact)))
    }

    /// Wire in an already-constructed classifier (tests, alternate backends).
    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            artifact: ArtifactState::Ready(classifier),
        }
    }

    /// Degraded state: prediction disabled, reason shown to callers.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            artifact: ArtifactState::Unavailable(reason.into()),
        }
    }
}

/// Run the shared Assemble → Classify → Decide chain under a bounded-time
/// guard so one stuck classifier call cannot wedge a request forever.
pub async fn predict_guarded(
    classifier: Arc<dyn Classifier>,
    features: OrderFeatures,
) -> Result<Prediction, ClassifierError> {
    let call = tokio::task::spawn_blocking(move || {
        codrisk_inference::predict(classifier.as_ref(), &features)
    });

    match tokio::time::timeout(CLASSIFY_TIMEOUT, call).await {
        Err(_) => Err(ClassifierError::Invocation(format!(
            "classifier call exceeded {}s",
            CLASSIFY_TIMEOUT.as_secs()
        ))),
        Ok(Err(join_err)) => Err(ClassifierError::Invocation(format!(
            "classifier task failed: {join_err}"
        ))),
        Ok(Ok(result)) => result,
    }
}

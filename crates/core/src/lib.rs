//! `codrisk-core` — domain foundation for COD order risk scoring.
//!
//! This crate contains **pure domain** logic (no HTTP, no model backend):
//! the category allow-list, validated order features, and the feature-row
//! assembly the classifier artifact was fit against.

pub mod category;
pub mod error;
pub mod features;

pub use category::{CATEGORIES, canonical_category};
pub use error::{DomainResult, ValidationError};
pub use features::{FEATURE_COLUMNS, FeatureRow, OrderFeatures};

//! Validated order features and the feature row the artifact expects.

use serde::{Deserialize, Serialize};

use crate::category::canonical_category;
use crate::error::{DomainResult, ValidationError};

/// Column names of the feature row, in artifact order.
///
/// The artifact was fit against this exact schema (names and dtypes), so the
/// capital-M `Month` and the `date` naming are load-bearing.
pub const FEATURE_COLUMNS: [&str; 5] = ["price", "qty_ordered", "category_name_1", "Month", "date"];

/// A fully validated cash-on-delivery order.
///
/// Only constructible through [`OrderFeatures::new`]; a value of this type is
/// the proof that validation succeeded and the category carries its canonical
/// casing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFeatures {
    price: i64,
    qty_ordered: i64,
    category: &'static str,
    month: i64,
    day_of_month: i64,
}

impl OrderFeatures {
    /// Validate raw field values into an `OrderFeatures`.
    ///
    /// Field constraints:
    /// - `price`: 1 ≤ price < 10_000_000
    /// - `qty_ordered`: 1 ≤ qty < 10
    /// - `category`: case-insensitive match against the fixed allow-list,
    ///   normalized to canonical casing
    /// - `month`: 1–12, `day_of_month`: 1–31
    pub fn new(
        price: i64,
        qty_ordered: i64,
        category: &str,
        month: i64,
        day_of_month: i64,
    ) -> DomainResult<Self> {
        if !(1..10_000_000).contains(&price) {
            return Err(ValidationError::PriceOutOfRange(price));
        }
        if !(1..10).contains(&qty_ordered) {
            return Err(ValidationError::QtyOutOfRange(qty_ordered));
        }
        let category = canonical_category(category)?;
        if !(1..=12).contains(&month) {
            return Err(ValidationError::MonthOutOfRange(month));
        }
        if !(1..=31).contains(&day_of_month) {
            return Err(ValidationError::DayOutOfRange(day_of_month));
        }

        Ok(Self {
            price,
            qty_ordered,
            category,
            month,
            day_of_month,
        })
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn qty_ordered(&self) -> i64 {
        self.qty_ordered
    }

    /// Canonical category spelling.
    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn month(&self) -> i64 {
        self.month
    }

    pub fn day_of_month(&self) -> i64 {
        self.day_of_month
    }

    /// Assemble the single-row table the artifact expects.
    ///
    /// Pure and total: integer fields are coerced to `f64`, the category is
    /// passed through in canonical casing.
    pub fn assemble(&self) -> FeatureRow {
        FeatureRow {
            price: self.price as f64,
            qty_ordered: self.qty_ordered as f64,
            category_name_1: self.category.to_string(),
            month: self.month as f64,
            date: self.day_of_month as f64,
        }
    }
}

/// Single-row input table for the classifier.
///
/// Serializes with the exact column names in [`FEATURE_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub price: f64,
    pub qty_ordered: f64,
    pub category_name_1: String,
    #[serde(rename = "Month")]
    pub month: f64,
    pub date: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::category::CATEGORIES;

    #[test]
    fn scenario_assembles_floats_and_canonical_category() {
        let features = OrderFeatures::new(2000, 1, "beauty & grooming", 11, 15).unwrap();
        assert_eq!(features.category(), "Beauty & Grooming");

        let row = features.assemble();
        assert_eq!(row.price, 2000.0);
        assert_eq!(row.qty_ordered, 1.0);
        assert_eq!(row.category_name_1, "Beauty & Grooming");
        assert_eq!(row.month, 11.0);
        assert_eq!(row.date, 15.0);
    }

    #[test]
    fn feature_row_serializes_with_exact_column_names() {
        let row = OrderFeatures::new(2000, 1, "Books", 11, 15).unwrap().assemble();
        let json = serde_json::to_value(&row).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), FEATURE_COLUMNS.len());
        for col in FEATURE_COLUMNS {
            assert!(obj.contains_key(col), "missing column {col}");
        }
        assert_eq!(json["Month"], 11.0);
        assert_eq!(json["date"], 15.0);
    }

    #[test]
    fn zero_price_is_rejected_with_price_range_error() {
        let err = OrderFeatures::new(0, 1, "Books", 11, 15).unwrap_err();
        assert_eq!(err, ValidationError::PriceOutOfRange(0));
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn price_bounds_are_half_open() {
        assert!(OrderFeatures::new(1, 1, "Books", 1, 1).is_ok());
        assert!(OrderFeatures::new(9_999_999, 1, "Books", 1, 1).is_ok());
        assert!(OrderFeatures::new(10_000_000, 1, "Books", 1, 1).is_err());
    }

    #[test]
    fn qty_bounds_are_half_open() {
        assert!(OrderFeatures::new(100, 1, "Books", 1, 1).is_ok());
        assert!(OrderFeatures::new(100, 9, "Books", 1, 1).is_ok());
        let err = OrderFeatures::new(100, 10, "Books", 1, 1).unwrap_err();
        assert_eq!(err, ValidationError::QtyOutOfRange(10));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = OrderFeatures::new(100, 1, "Unknown Category", 11, 15).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownCategory { .. }));
    }

    #[test]
    fn month_and_day_bounds_are_enforced() {
        assert!(matches!(
            OrderFeatures::new(100, 1, "Books", 0, 15).unwrap_err(),
            ValidationError::MonthOutOfRange(0)
        ));
        assert!(matches!(
            OrderFeatures::new(100, 1, "Books", 13, 15).unwrap_err(),
            ValidationError::MonthOutOfRange(13)
        ));
        assert!(matches!(
            OrderFeatures::new(100, 1, "Books", 11, 32).unwrap_err(),
            ValidationError::DayOutOfRange(32)
        ));
    }

    proptest! {
        #[test]
        fn all_in_range_inputs_validate_with_canonical_category(
            price in 1i64..10_000_000,
            qty in 1i64..10,
            cat_idx in 0usize..CATEGORIES.len(),
            month in 1i64..=12,
            day in 1i64..=31,
            uppercase in proptest::bool::ANY,
        ) {
            let canonical = CATEGORIES[cat_idx];
            let raw = if uppercase {
                canonical.to_uppercase()
            } else {
                canonical.to_lowercase()
            };

            let features = OrderFeatures::new(price, qty, &raw, month, day).unwrap();
            prop_assert_eq!(features.category(), canonical);

            let row = features.assemble();
            prop_assert_eq!(row.price, price as f64);
            prop_assert_eq!(row.qty_ordered, qty as f64);
        }

        #[test]
        fn out_of_range_price_never_validates(price in proptest::sample::select(vec![
            i64::MIN, -1, 0, 10_000_000, 10_000_001, i64::MAX,
        ])) {
            let err = OrderFeatures::new(price, 1, "Books", 1, 1).unwrap_err();
            prop_assert_eq!(err, ValidationError::PriceOutOfRange(price));
        }
    }
}

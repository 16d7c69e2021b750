//! Fixed product category allow-list.
//!
//! The classifier artifact was fit against these exact spellings, so matching
//! is case-insensitive on input but the canonical casing is what flows into
//! the feature row.

use crate::error::{DomainResult, ValidationError};

/// Canonical category names, in the order the training data used them.
pub const CATEGORIES: [&str; 15] = [
    "Beauty & Grooming",
    "Women's Fashion",
    "Soghaat",
    "Appliances",
    "Home & Living",
    "Kids & Baby",
    "Men's Fashion",
    "Mobiles & Tablets",
    "Superstore",
    "Others",
    "Health & Sports",
    "Computing",
    "Entertainment",
    "Books",
    "School & Education",
];

/// Resolve a free-text category to its canonical spelling.
///
/// The input is trimmed and compared case-insensitively against every entry
/// of [`CATEGORIES`]; on a match the canonical spelling is returned. On no
/// match the error message carries the full allowed list.
pub fn canonical_category(raw: &str) -> DomainResult<&'static str> {
    let trimmed = raw.trim();
    for cat in CATEGORIES {
        if trimmed.eq_ignore_ascii_case(cat) {
            return Ok(cat);
        }
    }
    Err(ValidationError::UnknownCategory {
        given: trimmed.to_string(),
        allowed: CATEGORIES.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_casing_is_returned_for_case_insensitive_match() {
        assert_eq!(
            canonical_category("beauty & grooming").unwrap(),
            "Beauty & Grooming"
        );
        assert_eq!(
            canonical_category("MOBILES & TABLETS").unwrap(),
            "Mobiles & Tablets"
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_matching() {
        assert_eq!(canonical_category("  soghaat  ").unwrap(), "Soghaat");
    }

    #[test]
    fn unknown_category_error_lists_every_canonical_entry() {
        let err = canonical_category("Unknown Category").unwrap_err();
        match err {
            ValidationError::UnknownCategory { given, allowed } => {
                assert_eq!(given, "Unknown Category");
                for cat in CATEGORIES {
                    assert!(allowed.contains(cat), "allowed list missing {cat}");
                }
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }
}

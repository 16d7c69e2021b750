//! Fixed heuristic insights shown alongside a prediction.
//!
//! These are supplementary display messages only; they never alter the
//! decision policy's verdict.

use codrisk_core::OrderFeatures;

const SEASONAL_MONTHS: [i64; 2] = [1, 9];
const HIGH_QTY_CUTOFF: i64 = 5;

/// Heuristic explanations applicable to an order, in display order.
pub fn insights(features: &OrderFeatures) -> Vec<&'static str> {
    let mut out = Vec::new();
    if SEASONAL_MONTHS.contains(&features.month()) {
        out.push("This month has historically high return/cancellation rates.");
    }
    if features.qty_ordered() > HIGH_QTY_CUTOFF {
        out.push("High-quantity COD orders carry a larger cancellation risk.");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(month: i64, qty: i64) -> OrderFeatures {
        OrderFeatures::new(2000, qty, "Books", month, 15).unwrap()
    }

    #[test]
    fn january_and_september_trigger_the_seasonal_insight() {
        assert_eq!(insights(&order(1, 1)).len(), 1);
        assert_eq!(insights(&order(9, 1)).len(), 1);
        assert!(insights(&order(11, 1)).is_empty());
    }

    #[test]
    fn quantity_above_five_triggers_the_high_quantity_insight() {
        assert!(insights(&order(11, 5)).is_empty());
        let msgs = insights(&order(11, 6));
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].contains("High-quantity"));
    }

    #[test]
    fn both_insights_can_apply_at_once() {
        assert_eq!(insights(&order(9, 7)).len(), 2);
    }
}

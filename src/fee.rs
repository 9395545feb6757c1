//! fee.rs
//!
//! What the case pays out of pocket once the monthly care quota is spent.
//! Only care and professional services (codes starting with `B` or `C`)
//! draw on that quota.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ImportError;
use crate::text_tools::parse_leading_int;

/// One billed service line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeItem {
    pub service_code: String,
    /// Units used. Fractions are dropped before pricing.
    pub amount: Decimal,
    /// Price per unit.
    pub cost: Decimal,
}

impl FeeItem {
    pub fn new(service_code: &str, amount: impl Into<Decimal>, cost: impl Into<Decimal>) -> Self {
        FeeItem {
            service_code: service_code.to_string(),
            amount: amount.into(),
            cost: cost.into(),
        }
    }
}

static QUOTA_CODES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(B|C)").unwrap());

/// Amount over `quota` spent on quota-bound services, never negative.
///
/// # Returns
///
/// * `Ok(fee)` with the overage, zero when the quota covers everything.
/// * `Err(ImportError::QuotaParse)` when `quota` does not start with an
///   integer.
/// * `Err(ImportError::FeeOverflow)` when the billed total does not fit a
///   `Decimal`.
///
/// # Examples
///
/// ```
/// # use case_plan_import::fee::{compute_overage_fee, FeeItem};
/// # use rust_decimal::Decimal;
/// let items = [FeeItem::new("BA01", 100, 5), FeeItem::new("BA02", 50, 2)];
/// assert_eq!(compute_overage_fee(&items, "500").unwrap(), Decimal::from(100));
/// assert!(compute_overage_fee(&items, "quota").is_err());
/// ```
pub fn compute_overage_fee(items: &[FeeItem], quota: &str) -> Result<Decimal, ImportError> {
    // Only the leading integer counts: "36180元" is a quota of 36180.
    let quota = parse_leading_int(quota)
        .map(Decimal::from)
        .ok_or_else(|| ImportError::QuotaParse(quota.to_string()))?;
    let spent = items
        .iter()
        .filter(|item| QUOTA_CODES.is_match(&item.service_code))
        .try_fold(Decimal::ZERO, |sum, item| {
            let line = item.amount.trunc().checked_mul(item.cost).ok_or_else(|| {
                ImportError::FeeOverflow(format!("{} x {} for {}", item.amount, item.cost, item.service_code))
            })?;
            sum.checked_add(line)
                .ok_or_else(|| ImportError::FeeOverflow(format!("sum exceeds range at {}", item.service_code)))
        })?;
    let fee = spent
        .checked_sub(quota)
        .ok_or_else(|| ImportError::FeeOverflow(format!("{} over quota {}", spent, quota)))?;
    Ok(fee.max(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn items() -> Vec<FeeItem> {
        vec![
            FeeItem::new("B A01", 100, 5),
            FeeItem::new("BA02", 50, 2),
            FeeItem::new("AA01", 5000, 5),
        ]
    }

    #[test]
    fn test_within_quota_is_free() {
        assert_eq!(compute_overage_fee(&items(), "10000").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_overage_counts_care_codes_only() {
        assert_eq!(compute_overage_fee(&items(), "500").unwrap(), Decimal::from(100));
        assert_eq!(compute_overage_fee(&items(), "600").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_professional_codes_count() {
        let items = [FeeItem::new("CA07", 1, 4500), FeeItem::new("DA01", 4, 190)];
        assert_eq!(compute_overage_fee(&items, "4000").unwrap(), Decimal::from(500));
    }

    #[test]
    fn test_fractional_amount_truncated() {
        let items = [FeeItem::new("BA01", Decimal::new(25, 1), Decimal::from(100))];
        assert_eq!(compute_overage_fee(&items, "0").unwrap(), Decimal::from(200));
    }

    #[test]
    fn test_quota_with_trailing_text() {
        assert_eq!(compute_overage_fee(&items(), "500元").unwrap(), Decimal::from(100));
    }

    #[test]
    fn test_non_numeric_quota() {
        let err = compute_overage_fee(&items(), "abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::QuotaParse);
        assert_eq!(err.to_string(), "Quota parse error - abc");
        assert!(compute_overage_fee(&[], "").is_err());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = compute_overage_fee(&[FeeItem::new("BA01", Decimal::MAX, 2)], "0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FeeOverflow);

        let items = [FeeItem::new("BA01", Decimal::MAX, 1), FeeItem::new("BA02", Decimal::MAX, 1)];
        let err = compute_overage_fee(&items, "0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FeeOverflow);

        // Out-of-range codes never reach the arithmetic.
        let items = [FeeItem::new("AA01", Decimal::MAX, 2)];
        assert_eq!(compute_overage_fee(&items, "0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_items() {
        assert_eq!(compute_overage_fee(&[], "100").unwrap(), Decimal::ZERO);
    }
}

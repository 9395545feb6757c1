//! date.rs
//!
//! Conversion between the Minguo (Republic of China) calendar used on the
//! assessment form and Gregorian dates.
//!
//! Form dates are printed as `YYY/MM/DD`, where `YYY` counts years since
//! 1911 (so `110/05/24` is 24 May 2021). Calendar validity (month lengths,
//! leap days) is delegated to `chrono`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Offset between a Minguo year and the Gregorian year.
pub const ROC_EPOCH_OFFSET: i32 = 1911;

static ROC_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{3})/([0-9]{2})/([0-9]{2})$").unwrap());

/// Converts a `YYY/MM/DD` Minguo date token into a Gregorian date.
///
/// Returns `None` when the token is empty, is not exactly the
/// three-two-two digit pattern, or names a day that does not exist.
///
/// ```
/// # use case_plan_import::date::convert_roc_date;
/// let date = convert_roc_date("110/05/24").unwrap();
/// assert_eq!(date.to_string(), "2021-05-24");
/// assert!(convert_roc_date("110/02/30").is_none());
/// assert!(convert_roc_date("").is_none());
/// ```
pub fn convert_roc_date(token: &str) -> Option<NaiveDate> {
    if token.is_empty() {
        return None;
    }
    let caps = ROC_DATE.captures(token)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year + ROC_EPOCH_OFFSET, month, day)
}

/// Same as [`convert_roc_date`] but renders the normalized ISO string
/// (`YYYY-MM-DD`) that the record serializes to.
pub fn convert_roc_date_iso(token: &str) -> Option<String> {
    convert_roc_date(token).map(|d| d.format("%Y-%m-%d").to_string())
}

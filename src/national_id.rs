//! national_id.rs
//!
//! National identification number check.
//!
//! The parser only needs a yes/no answer, so the check sits behind
//! [`NationalIdValidator`]; [`TaiwanNationalId`] is the one used by
//! default. Any `Fn(&str) -> bool` also works as a validator.

use once_cell::sync::Lazy;
use regex::Regex;

pub trait NationalIdValidator {
    fn is_valid(&self, id: &str) -> bool;
}

impl<F> NationalIdValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, id: &str) -> bool {
        self(id)
    }
}

/// Taiwan national ID: area letter, `1` or `2`, seven digits and a check
/// digit. Resident-certificate numbers (second character a letter or
/// `8`/`9`) are not national IDs and are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaiwanNationalId;

static NATIONAL_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][12][0-9]{8}$").unwrap());

/// Two-digit codes of the area letters, `A` through `Z`.
const AREA_CODES: [u32; 26] = [
    10, 11, 12, 13, 14, 15, 16, 17, 34, 18, 19, 20, 21, 22, 35, 23, 24, 25, 26, 27, 28, 29, 32,
    30, 31, 33,
];

/// Weights of the nine digits after the letter.
const DIGIT_WEIGHTS: [u32; 9] = [8, 7, 6, 5, 4, 3, 2, 1, 1];

impl NationalIdValidator for TaiwanNationalId {
    fn is_valid(&self, id: &str) -> bool {
        if !NATIONAL_ID.is_match(id) {
            return false;
        }
        let mut chars = id.chars();
        let Some(letter) = chars.next() else {
            return false;
        };
        let area = AREA_CODES[(letter as u8 - b'A') as usize];
        let mut sum = area / 10 + (area % 10) * 9;
        for (c, weight) in chars.zip(DIGIT_WEIGHTS) {
            let Some(d) = c.to_digit(10) else {
                return false;
            };
            sum += d * weight;
        }
        sum % 10 == 0
    }
}

//! assemble/evaluation.rs
//!
//! Caregivers and the activities-of-daily-living scores. The two score
//! tables are read from fixed offsets, so the record always carries all
//! eleven ADL and eight IADL entries whatever the document holds.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::anchors::*;
use crate::record::{AdlEntry, Evaluation, Helper, IadlEntry};
use crate::stream::TokenStream;
use crate::text_tools::{match_text, parse_leading_int};

/// `n.relation`: the trailing non-digit pair after the option number.
static RELATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.]\D$").unwrap());
static TRAILING_NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D$").unwrap());
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Where an ADL item's answer and score sit relative to its label.
#[derive(Debug, Clone, Copy)]
enum AdlCells {
    /// Both at fixed offsets after the label.
    After { val: usize, score: usize },
    /// The score sits `back` cells before the next item's label.
    ScoreBefore { val: usize, next: &'static str, back: usize },
    /// The answer spans `span` cells.
    Spread { span: usize, score: usize },
    /// A total with no score column, `back` cells before the next table.
    Total { next: &'static str, back: usize },
}

const ADL_LAYOUT: [(&str, AdlCells); 11] = [
    (E1, AdlCells::After { val: 3, score: 5 }),
    (E2, AdlCells::After { val: 1, score: 3 }),
    (E3, AdlCells::After { val: 3, score: 5 }),
    (E4, AdlCells::After { val: 3, score: 5 }),
    (E5, AdlCells::After { val: 1, score: 3 }),
    (E6, AdlCells::After { val: 1, score: 3 }),
    (E7, AdlCells::After { val: 1, score: 3 }),
    (MOVEMENT, AdlCells::ScoreBefore { val: 1, next: E9, back: 2 }),
    (E9, AdlCells::Spread { span: 3, score: 5 }),
    (E10, AdlCells::After { val: 1, score: 3 }),
    (E11, AdlCells::Total { next: F, back: 2 }),
];

const IADL_LABELS: [&str; 8] = [F1, F2, F3, F4, F5, F6, F7, F8];

/// Cell `back` places before the first `label`, or empty.
fn before(stream: &TokenStream, label: &str, back: usize) -> String {
    stream
        .position(label)
        .and_then(|at| at.checked_sub(back))
        .map_or_else(String::new, |i| stream.token(i).to_string())
}

fn adl(stream: &TokenStream, title: &str, cells: AdlCells) -> AdlEntry {
    let (val, score) = match cells {
        AdlCells::After { val, score } => (
            stream.read_at(title, val).to_string(),
            stream.read_at(title, score).to_string(),
        ),
        AdlCells::ScoreBefore { val, next, back } => {
            (stream.read_at(title, val).to_string(), before(stream, next, back))
        }
        AdlCells::Spread { span, score } => (
            (1..=span).map(|k| stream.read_at(title, k)).collect(),
            stream.read_at(title, score).to_string(),
        ),
        AdlCells::Total { next, back } => {
            let val = if stream.contains(title) {
                before(stream, next, back)
            } else {
                String::new()
            };
            (val, String::new())
        }
    };
    AdlEntry {
        title: title.to_string(),
        val,
        score,
    }
}

fn helper(stream: &TokenStream) -> Helper {
    let mut helper = Helper {
        primary_name: stream.read_at(HELPER_PRIMARY_NAME, 1).to_string(),
        primary_relation: match_text(stream.read_at(HELPER_PRIMARY_RELATION, 1), &RELATION, 0).to_string(),
        primary_gender: match_text(stream.read_at(HELPER_PRIMARY_GENDER, 1), &TRAILING_NON_DIGIT, 0)
            .to_string(),
        primary_age: parse_leading_int(match_text(stream.read_at(HELPER_PRIMARY_AGE, 1), &DIGITS, 0)),
        ..Helper::default()
    };
    // A blank secondary name flattens to the relation label or to "none".
    let secondary = stream.read_at(HELPER_SECONDARY_NAME, 1);
    if !secondary.is_empty() && secondary != HELPER_SECONDARY_RELATION && secondary != NONE {
        helper.secondary_name = secondary.to_string();
        helper.secondary_relation =
            match_text(stream.read_at(HELPER_SECONDARY_RELATION, 1), &RELATION, 0).to_string();
    }
    helper
}

pub fn read(stream: &TokenStream) -> Evaluation {
    Evaluation {
        helper: helper(stream),
        adls: ADL_LAYOUT
            .iter()
            .map(|&(title, cells)| adl(stream, title, cells))
            .collect(),
        iadls: IADL_LABELS
            .iter()
            .map(|&title| IadlEntry {
                title: title.to_string(),
                val: stream.read_at(title, 1).to_string(),
            })
            .collect(),
    }
}

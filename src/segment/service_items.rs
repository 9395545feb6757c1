//! segment/service_items.rs
//!
//! Priced service rows of the care and professional service tables.
//!
//! Each table is bounded by its own header label and the next table's
//! header. Inside it, a row starts at a token that looks like a service
//! code of the table's category (`BA01`, `DA01`, `EF01`, …) and its numeric
//! cells follow: unit price, amount, total.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, trace};

use crate::anchors;
use crate::boundary::{resolve_block, MalformedBlock};
use crate::config::ParserConfig;
use crate::stream::TokenStream;

/// A priced service row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub item: String,
    pub price: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
    /// Always the first character of `item`.
    pub item_type: String,
    /// The code is one introduced by the post-2018 payment regulation.
    #[serde(default)]
    pub new_item: bool,
}

impl ServiceItem {
    pub fn new(item: &str, price: Decimal, amount: Decimal, total: Decimal, new_item: bool) -> Self {
        ServiceItem {
            item: item.to_string(),
            price,
            amount,
            total,
            item_type: item.chars().next().map(String::from).unwrap_or_default(),
            new_item,
        }
    }
}

/// Result of segmenting one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub items: Vec<ServiceItem>,
    /// Some row-start code, emitted or not, is a new-regulation code.
    pub has_new_item: bool,
    /// The table's bounds could not be resolved; `items` is empty.
    pub malformed: bool,
}

/// One service table: its bounding labels and which codes start a row.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub start: &'static str,
    pub end: &'static str,
    pub codes: Regex,
}

/// The four service tables in document order. Only the first one is
/// mandatory.
pub static CATEGORY_GROUPS: Lazy<[CategoryGroup; 4]> = Lazy::new(|| {
    [
        CategoryGroup {
            start: anchors::CARE_PROFESSIONAL_SERVICE_MONTH,
            end: anchors::TRANSPORTATION,
            codes: Regex::new(r"^(B|C)").unwrap(),
        },
        CategoryGroup {
            start: anchors::TRANSPORTATION,
            end: anchors::ASSISTIVE_SERVICE,
            codes: Regex::new(r"^D").unwrap(),
        },
        CategoryGroup {
            start: anchors::ASSISTIVE_SERVICE,
            end: anchors::RESPITE_SERVICE_YEAR,
            codes: Regex::new(r"^(E|F)").unwrap(),
        },
        CategoryGroup {
            start: anchors::RESPITE_SERVICE_YEAR,
            end: anchors::OTHER,
            codes: Regex::new(r"^G").unwrap(),
        },
    ]
});

/// A numeric cell: starts with a digit, may carry thousands separators.
static NUMERIC_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d[\d,]*(?:\.\d+)?)").unwrap());

/// Parses a numeric cell, ignoring the currency marker and separators.
/// Returns `None` for tokens that do not start with a digit.
pub fn parse_numeric_cell(token: &str) -> Option<Decimal> {
    let token = token.replace(anchors::CURRENCY, "");
    let caps = NUMERIC_CELL.captures(&token)?;
    Decimal::from_str(&caps[1].replace(',', "")).ok()
}

fn is_new_regulation_code(code: &str, fragments: &[String]) -> bool {
    fragments.iter().any(|f| code.contains(f.as_str()))
}

/// Segments the table between `start_keyword` and `end_keyword` into
/// service rows whose code matches `codes`.
///
/// Row `i` spans up to the next row's code; the last row spans
/// `config.last_row_width` tokens. Rows with fewer than two numeric cells
/// are headers or notes and are dropped. Stray copies of the bounding
/// labels are hidden from `stream` on the way.
///
/// # Returns
///
/// A [`Segmentation`]; when the table cannot be bounded it is empty and
/// `malformed` is set.
///
/// # Examples
///
/// ```
/// # use case_plan_import::segment::{segment_service_items, CATEGORY_GROUPS};
/// # use case_plan_import::stream::TokenStream;
/// # use case_plan_import::ParserConfig;
/// let g = &CATEGORY_GROUPS[1];
/// let mut s = TokenStream::from_tokens([g.start, "項目", "DA01", "交通接送", "190", "4", "760", g.end, "項目"]);
/// let seg = segment_service_items(&mut s, g.start, g.end, &g.codes, &ParserConfig::default());
/// assert_eq!(seg.items.len(), 1);
/// assert_eq!(seg.items[0].item_type, "D");
/// ```
pub fn segment_service_items(
    stream: &mut TokenStream,
    start_keyword: &str,
    end_keyword: &str,
    codes: &Regex,
    config: &ParserConfig,
) -> Segmentation {
    let bounds = match resolve_block(stream, start_keyword, end_keyword, config.repair_ceiling) {
        Ok(bounds) => bounds,
        Err(MalformedBlock { block, repairs }) => {
            debug!(%block, repairs, "service table is malformed");
            return Segmentation {
                malformed: true,
                ..Segmentation::default()
            };
        }
    };

    let row_starts: Vec<usize> = (bounds.start + 1..bounds.end)
        .filter(|&i| codes.is_match(stream.token(i)))
        .collect();

    let mut segmentation = Segmentation::default();
    for (n, &row) in row_starts.iter().enumerate() {
        let code = stream.token(row);
        let width = match row_starts.get(n + 1) {
            Some(&next) => next - row,
            None => config.last_row_width,
        };
        let cells: Vec<Decimal> = (1..width)
            .filter_map(|j| parse_numeric_cell(stream.token(row + j)))
            .collect();

        let new_item = is_new_regulation_code(code, &config.new_item_fragments);
        segmentation.has_new_item |= new_item;

        if cells.len() < 2 {
            trace!(code, cells = cells.len(), "skipped row without enough numeric cells");
            continue;
        }
        let cell = |k: usize| cells.get(k).copied().unwrap_or(Decimal::ZERO);
        trace!(code, width, "service row");
        segmentation
            .items
            .push(ServiceItem::new(code, cell(0), cell(1), cell(2), new_item));
    }
    segmentation
}

//! segment/numbered.rs
//!
//! The case manager's numbered plan items.
//!
//! Rows are numbered `1`, `2`, `3`, … in the first column. How many cells
//! a row has depends on the form revision, and only the distance between
//! two consecutive row numbers tells them apart. The accepted distances
//! are listed in [`RowLayout`]; a number at any other distance is part of
//! a cell's text, not a row boundary.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::anchors;
use crate::stream::TokenStream;

/// One numbered plan item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItemRow {
    pub item: String,
    /// Only present in [`RowLayout::Full`] rows.
    pub name: String,
    /// Only present in [`RowLayout::Full`] rows.
    pub unit: String,
    pub reason: String,
}

/// Known row shapes, keyed by the distance between row numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    /// `n item`
    ItemOnly,
    /// `n item reason`
    ItemReason,
    /// `n item name unit reason`
    Full,
}

impl RowLayout {
    pub const ALL: [RowLayout; 3] = [RowLayout::ItemOnly, RowLayout::ItemReason, RowLayout::Full];

    /// Distance from this row's number to the next row's number.
    pub fn width(self) -> usize {
        match self {
            RowLayout::ItemOnly => 2,
            RowLayout::ItemReason => 3,
            RowLayout::Full => 5,
        }
    }

    pub fn from_gap(gap: usize) -> Option<RowLayout> {
        Self::ALL.into_iter().find(|layout| layout.width() == gap)
    }

    /// Reads the row whose number sits at `number_at`.
    fn read(self, stream: &TokenStream, number_at: usize) -> PlanItemRow {
        let cell = |k: usize| stream.token(number_at + k).to_string();
        let width = self.width();
        PlanItemRow {
            item: cell(1),
            name: if self == RowLayout::Full { cell(2) } else { String::new() },
            unit: if self == RowLayout::Full { cell(3) } else { String::new() },
            reason: if width >= 3 { cell(width - 1) } else { String::new() },
        }
    }
}

/// Segments the numbered list between `start_keyword` and `end_keyword`.
///
/// The list only applies when the start label is followed by the A-unit
/// caption and then the [`ITEM`](anchors::ITEM) column header, and the end
/// label exists; otherwise `None`.
///
/// The last row has no successor to measure against and reuses the last
/// distance measured, accepted or not. It is dropped when that distance
/// fits no layout, and a list with a single numbered row yields no rows.
///
/// # Examples
///
/// ```
/// # use case_plan_import::segment::segment_numbered_rows;
/// # use case_plan_import::stream::TokenStream;
/// let s = TokenStream::from_tokens([
///     "個案管理照顧計畫", "(A單位)", "項目",
///     "1", "AA01", "初評",
///     "2", "AA03", "追蹤",
///     "照顧問題清單",
/// ]);
/// let rows = segment_numbered_rows(&s, "個案管理照顧計畫", "照顧問題清單").unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].reason, "追蹤");
/// ```
pub fn segment_numbered_rows(
    stream: &TokenStream,
    start_keyword: &str,
    end_keyword: &str,
) -> Option<Vec<PlanItemRow>> {
    let start = stream.position(start_keyword)?;
    if !stream.token(start + 1).contains(anchors::A_UNIT) || stream.token(start + 2) != anchors::ITEM {
        return None;
    }
    let header = start + 2;
    let end = stream.position(end_keyword)?;

    let mut rows = Vec::new();
    let mut expected = 1usize;
    let mut previous: Option<usize> = None;
    let mut last_gap = 0usize;

    for i in header + 1..end {
        if stream.token(i) != expected.to_string() {
            continue;
        }
        let Some(prev) = previous else {
            previous = Some(i);
            expected += 1;
            continue;
        };
        last_gap = i - prev;
        match RowLayout::from_gap(last_gap) {
            Some(layout) => {
                trace!(row = expected - 1, ?layout, "plan item row");
                rows.push(layout.read(stream, prev));
                previous = Some(i);
                expected += 1;
            }
            None => trace!(at = i, gap = last_gap, "row number inside a cell, ignored"),
        }
    }

    if let (Some(prev), Some(layout)) = (previous, RowLayout::from_gap(last_gap)) {
        rows.push(layout.read(stream, prev));
    }
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = anchors::CASE_MGMT_TAKECARE_PLAN;
    const END: &str = anchors::A_QUESTION_LIST;

    fn stream(tokens: &[&str]) -> TokenStream {
        TokenStream::from_tokens(tokens.iter().copied())
    }

    #[test]
    fn test_layout_table() {
        assert_eq!(RowLayout::from_gap(2), Some(RowLayout::ItemOnly));
        assert_eq!(RowLayout::from_gap(3), Some(RowLayout::ItemReason));
        assert_eq!(RowLayout::from_gap(5), Some(RowLayout::Full));
        assert_eq!(RowLayout::from_gap(4), None);
        assert_eq!(RowLayout::from_gap(1), None);
    }

    #[test]
    fn test_full_width_rows() {
        let s = stream(&[
            "x", START, "(A單位)", "項目",
            "1", "AA01", "照顧計畫擬定", "次", "初評",
            "2", "AA03", "照顧問題改善", "次", "複評",
            END,
        ]);
        let rows = segment_numbered_rows(&s, START, END).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            PlanItemRow {
                item: "AA01".into(),
                name: "照顧計畫擬定".into(),
                unit: "次".into(),
                reason: "初評".into(),
            }
        );
        assert_eq!(rows[1].item, "AA03");
        assert_eq!(rows[1].reason, "複評");
    }

    #[test]
    fn test_narrow_rows_leave_name_and_unit_empty() {
        let s = stream(&[
            "x", START, "A單位", "項目",
            "1", "AA01", "初評",
            "2", "AA02", "複評",
            "3", "AA04", "轉介",
            END,
        ]);
        let rows = segment_numbered_rows(&s, START, END).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.name.is_empty() && r.unit.is_empty()));
        assert_eq!(rows[2].reason, "轉介");

        let s = stream(&["x", START, "A單位", "項目", "1", "AA01", "2", "AA02", END]);
        let rows = segment_numbered_rows(&s, START, END).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].item, "AA02");
        assert!(rows[1].reason.is_empty());
    }

    #[test]
    fn test_number_inside_cell_is_noise() {
        let s = stream(&[
            "x", START, "A單位", "項目",
            "1", "AA01", "照顧計畫擬定", "次", "2",
            "2", "AA03", "照顧問題改善", "次", "1",
            END,
        ]);
        // The first "2" is a cell at distance 4, which no layout has; the
        // row boundary is the "2" at distance 5.
        let rows = segment_numbered_rows(&s, START, END).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].unit, "次");
        assert_eq!(rows[0].reason, "2");
        assert_eq!(rows[1].item, "AA03");

        let s = stream(&[
            "x", START, "A單位", "項目",
            "1", "AA01", "每", "週", "2", "次", "2", "AA03",
            END,
        ]);
        // Neither "2" sits at an accepted distance, so no row is recognized.
        let rows = segment_numbered_rows(&s, START, END).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_trailing_noise_drops_last_row() {
        let s = stream(&[
            "x", START, "A單位", "項目",
            "1", "AA01", "n1", "u1", "r1",
            "2", "AA03", "n2", "u2", "3", "r2",
            END,
        ]);
        // The "3" sits at distance 4 from the last row number.
        let rows = segment_numbered_rows(&s, START, END).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item, "AA01");
        assert_eq!(rows[0].reason, "r1");
    }

    #[test]
    fn test_single_row_yields_nothing() {
        let s = stream(&["x", START, "A單位", "項目", "1", "AA01", "初評", END]);
        assert_eq!(segment_numbered_rows(&s, START, END), Some(vec![]));
    }

    #[test]
    fn test_not_applicable_without_layout_markers() {
        let s = stream(&["x", START, "B單位", "項目", "1", "AA01", END]);
        assert!(segment_numbered_rows(&s, START, END).is_none());
        let s = stream(&["x", START, "A單位", "說明", "1", "AA01", END]);
        assert!(segment_numbered_rows(&s, START, END).is_none());
        let s = stream(&["x", START, "A單位", "項目", "1", "AA01"]);
        assert!(segment_numbered_rows(&s, START, END).is_none());
    }
}

//! boundary.rs
//!
//! Locates the two header labels that bound a service-item block.
//!
//! Some revisions of the form print a block header twice, once as a
//! caption elsewhere on the page and once directly above the table. Only
//! the copy followed within two tokens by the [`ITEM`](anchors::ITEM)
//! column header is the real one. The resolver hides earlier copies until
//! the first visible occurrence lines up, for the start label and then for
//! the end label, and gives up after a fixed number of hidden tokens.

use tracing::{debug, warn};

use crate::anchors;
use crate::stream::TokenStream;

/// Default number of stray labels the resolver may hide per block.
pub const DEFAULT_REPAIR_CEILING: usize = 1000;

/// Visible positions of a block's start and end labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockBounds {
    pub start: usize,
    pub end: usize,
}

/// The block could not be bounded: a label is absent, or no aligned copy
/// was found within the ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedBlock {
    /// Start label of the block that failed.
    pub block: String,
    pub repairs: usize,
}

fn is_aligned(stream: &TokenStream, index: usize) -> bool {
    stream.token(index + 1) == anchors::ITEM || stream.token(index + 2) == anchors::ITEM
}

/// Hides misaligned copies of `keyword` until its first visible copy is
/// aligned. `repairs` is shared across both labels of a block.
fn align(
    stream: &mut TokenStream,
    keyword: &str,
    block: &str,
    repairs: &mut usize,
    ceiling: usize,
) -> Result<usize, MalformedBlock> {
    loop {
        let Some(index) = stream.position(keyword) else {
            debug!(block, keyword, "block label not found");
            return Err(MalformedBlock {
                block: block.to_string(),
                repairs: *repairs,
            });
        };
        if is_aligned(stream, index) {
            return Ok(index);
        }
        *repairs += 1;
        if *repairs > ceiling {
            warn!(block, ceiling, "repair ceiling reached, block treated as malformed");
            return Err(MalformedBlock {
                block: block.to_string(),
                repairs: *repairs - 1,
            });
        }
        let origin = stream.suppress(index);
        debug!(keyword, ?origin, "hid misaligned block label");
    }
}

/// Resolves the `start_keyword`..`end_keyword` block, hiding stray copies
/// of either label from `stream`.
///
/// # Returns
///
/// * `Ok(BlockBounds)` with the visible positions of both labels.
/// * `Err(MalformedBlock)` when a label is missing or more than `ceiling`
///   copies had to be hidden.
///
/// # Examples
///
/// ```
/// # use case_plan_import::boundary::{resolve_block, DEFAULT_REPAIR_CEILING};
/// # use case_plan_import::stream::TokenStream;
/// let mut s = TokenStream::from_tokens(["交通接送服務", "說明", "x", "交通接送服務", "項目", "DA01", "輔具及居家無障礙環境改善服務", "項目"]);
/// let bounds = resolve_block(&mut s, "交通接送服務", "輔具及居家無障礙環境改善服務", DEFAULT_REPAIR_CEILING).unwrap();
/// assert_eq!(s.suppressed(), 1);
/// assert_eq!(s.origin(bounds.start), Some(3));
/// ```
pub fn resolve_block(
    stream: &mut TokenStream,
    start_keyword: &str,
    end_keyword: &str,
    ceiling: usize,
) -> Result<BlockBounds, MalformedBlock> {
    let mut repairs = 0;
    let start = align(stream, start_keyword, start_keyword, &mut repairs, ceiling)?;
    let end = align(stream, end_keyword, start_keyword, &mut repairs, ceiling)?;
    // Hiding copies of the end label can only shift the start label left
    // if a stray end label sat before it.
    let start = stream.position(start_keyword).unwrap_or(start);
    Ok(BlockBounds { start, end })
}

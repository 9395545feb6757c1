//! segment/mod.rs
//!
//! Splits table-like regions of the token stream into rows. Neither table
//! on the form survives flattening with its cell borders, so rows are
//! recovered from what is left:
//!
//! - [`service_items`]: priced service rows, found by their service code
//!   and sized by the distance to the next code.
//! - [`numbered`]: the case manager's numbered plan items, sized by the
//!   gap between consecutive row numbers.

pub mod numbered;
pub mod service_items;

pub use numbered::{segment_numbered_rows, PlanItemRow, RowLayout};
pub use service_items::{
    segment_service_items, CategoryGroup, Segmentation, ServiceItem, CATEGORY_GROUPS,
};

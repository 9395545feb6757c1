//! Imports long-term-care case plans from flattened assessment forms.
//!
//! The case-management system exports a care-management assessment form
//! (照顧管理評估量表) as a web page. Once flattened to text, the table
//! structure is gone and what remains is a run of cells separated by
//! spaces. This crate recovers a structured [`CaseRecord`] from that run:
//!
//! 1. **Reading fields** relative to the labels printed on the form
//!    ([`stream::TokenStream`]).
//! 2. **Segmenting** the priced service tables and the case manager's
//!    numbered plan list into rows ([`segment`]), after hiding stray
//!    copies of their bounding labels ([`boundary`]).
//! 3. **Validating** that the document is an assessment form with a
//!    usable customer identity ([`validation`]).
//! 4. **Assembling** the record ([`assemble`]). Dates on the form use the
//!    Republic of China calendar and are converted by [`date`].
//!
//! [`compute_overage_fee`] is the one calculation offered on top: what
//! the customer pays once a set of services exceeds the monthly quota.
//!
//! # Usage
//!
//! ```ignore
//! use case_plan_import::{import_file, PreFlattened};
//!
//! fn example() -> Result<(), case_plan_import::ImportError> {
//!     let record = import_file("uploads/plan.txt", &PreFlattened)?;
//!     println!("{}", record.basic_info.customer.name);
//!     for item in &record.take_care_plan.bundled_item {
//!         println!("{} x {} = {}", item.item, item.amount, item.total);
//!     }
//!     Ok(())
//! }
//! ```

use std::path::Path;

pub mod anchors;
pub mod assemble;
pub mod boundary;
pub mod config;
pub mod date;
pub mod error;
pub mod fee;
pub mod fileio;
pub mod flatten;
pub mod national_id;
pub mod record;
pub mod segment;
pub mod stream;
pub mod text_tools;
pub mod validation;

pub use assemble::CasePlanParser;
pub use config::ParserConfig;
pub use error::{ErrorKind, ImportError};
pub use fee::{compute_overage_fee, FeeItem};
pub use flatten::{PreFlattened, TextFlattener};
pub use national_id::{NationalIdValidator, TaiwanNationalId};
pub use record::CaseRecord;

/// Parses already-flattened text with the default configuration.
///
/// # Examples
///
/// ```
/// use case_plan_import::{parse_flattened, ErrorKind};
///
/// let err = parse_flattened("not an assessment form").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnsupportedDocument);
/// assert_eq!(err.to_string(), "此檔案格式無法支援");
/// ```
pub fn parse_flattened(text: &str) -> Result<CaseRecord, ImportError> {
    CasePlanParser::default().parse(text)
}

/// Reads the document at `path`, flattens it and parses it with the
/// default configuration.
///
/// # Returns
///
/// * `Ok(CaseRecord)` for an accepted assessment form.
/// * `Err(ImportError::Io)` when the file cannot be read as UTF-8.
/// * Any validation error [`CasePlanParser::parse`] reports.
pub fn import_file<P: AsRef<Path>>(path: P, flattener: &dyn TextFlattener) -> Result<CaseRecord, ImportError> {
    let raw = fileio::read_document(path)?;
    CasePlanParser::default().parse_document(&raw, flattener)
}

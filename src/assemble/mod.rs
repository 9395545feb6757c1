//! assemble/mod.rs
//!
//! Turns a flattened document into a [`CaseRecord`].
//!
//! The document is read twice. The narrative sections keep the line
//! breaks typed inside their cells, so they are sliced out of a stream
//! that still has them; everything else is read from a stream with single
//! line breaks removed, where every form cell is exactly one token.
//!
//! Order matters: the service tables are segmented before validation
//! because an unbounded care-service table is itself a validation
//! failure, and the record is only filled once every check has passed.

pub mod basic_info;
pub mod care_plan;
pub mod evaluation;
pub mod fields;

use tracing::debug;

use crate::anchors;
use crate::config::ParserConfig;
use crate::error::ImportError;
use crate::flatten::TextFlattener;
use crate::national_id::{NationalIdValidator, TaiwanNationalId};
use crate::record::CaseRecord;
use crate::segment::{segment_numbered_rows, segment_service_items, Segmentation, CATEGORY_GROUPS};
use crate::stream::{normalize, strip_line_breaks, TokenStream};
use crate::validation::{validate, Evidence, Identity};

use self::fields::{apply_rules, FIELD_RULES};

/// Parses flattened assessment forms. Holds no per-document state, so one
/// parser can serve any number of documents.
pub struct CasePlanParser {
    config: ParserConfig,
    id_validator: Box<dyn NationalIdValidator + Send + Sync>,
}

impl Default for CasePlanParser {
    fn default() -> Self {
        CasePlanParser::new(ParserConfig::default())
    }
}

impl CasePlanParser {
    pub fn new(config: ParserConfig) -> Self {
        CasePlanParser {
            config,
            id_validator: Box::new(TaiwanNationalId),
        }
    }

    /// Replaces the national-ID check, e.g. to also accept resident
    /// certificate numbers.
    pub fn with_id_validator<V>(mut self, validator: V) -> Self
    where
        V: NationalIdValidator + Send + Sync + 'static,
    {
        self.id_validator = Box::new(validator);
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Flattens `raw` with `flattener` and parses the result.
    pub fn parse_document(&self, raw: &str, flattener: &dyn TextFlattener) -> Result<CaseRecord, ImportError> {
        self.parse(&flattener.flatten(raw))
    }

    /// Parses text already flattened to space-separated cells.
    ///
    /// # Returns
    ///
    /// * `Ok(CaseRecord)` once every validation check has passed.
    /// * `Err` with the first failing check's error; no partial record is
    ///   returned.
    pub fn parse(&self, flattened: &str) -> Result<CaseRecord, ImportError> {
        let normalized = normalize(flattened);
        let mut record = CaseRecord::default();

        let mut narrative = TokenStream::tokenize(&normalized);
        care_plan::fill_narrative(&mut narrative, &mut record.take_care_plan);

        let mut stream = TokenStream::tokenize(&strip_line_breaks(&normalized));
        debug!(tokens = stream.len(), "tokenized document");

        // The contact block holds a service label, so it is read before
        // segmentation can hide anything inside it.
        record.take_care_plan.a_contact = care_plan::a_unit_contact(&stream);

        let mut service_block: Option<Segmentation> = None;
        for group in CATEGORY_GROUPS.iter() {
            let segmentation = segment_service_items(&mut stream, group.start, group.end, &group.codes, &self.config);
            record.take_care_plan.bundled_item.extend(segmentation.items.iter().cloned());
            if service_block.is_none() {
                service_block = Some(segmentation);
            }
        }
        let service_block = service_block.unwrap_or_default();
        record.take_care_plan.has_new_item = service_block.has_new_item;

        record.take_care_plan.a_plan_item =
            segment_numbered_rows(&stream, anchors::CASE_MGMT_TAKECARE_PLAN, anchors::A_QUESTION_LIST)
                .unwrap_or_default();

        let identity = Identity::read(&stream);
        validate(&Evidence {
            stream: &stream,
            note_marker_window: self.config.note_marker_window,
            service_block: &service_block,
            identity: &identity,
            id_validator: self.id_validator.as_ref(),
        })?;

        apply_rules(&stream, FIELD_RULES, &mut record);
        basic_info::fill(&stream, &identity, &mut record.basic_info);
        care_plan::fill(&stream, &mut record.take_care_plan);
        record.evaluation = evaluation::read(&stream);
        record.take_care_plan.contract_version = self.config.contract_version.clone();

        debug!(
            customer = %record.basic_info.customer.personal_id,
            items = record.take_care_plan.bundled_item.len(),
            plan_rows = record.take_care_plan.a_plan_item.len(),
            "assembled case record"
        );
        Ok(record)
    }
}

//! assemble/fields.rs
//!
//! Fields that sit at a fixed offset from their label and need nothing
//! more than a conversion. They are listed once in [`FIELD_RULES`] and
//! filled by [`apply_rules`]; fields with their own logic live next to
//! the section they belong to.

use tracing::trace;

use crate::anchors::*;
use crate::date::convert_roc_date;
use crate::record::CaseRecord;
use crate::stream::TokenStream;
use crate::text_tools::parse_leading_int;

/// One anchor-relative field.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub anchor: &'static str,
    /// The label printed after this field. Reading it back means the
    /// field was blank.
    pub delimiter: Option<&'static str>,
    pub offset: usize,
    /// Converts the cell and stores it in the record.
    pub apply: fn(&mut CaseRecord, &str),
}

impl FieldRule {
    pub fn read<'s>(&self, stream: &'s TokenStream) -> &'s str {
        match self.delimiter {
            Some(delimiter) => stream.read_field(self.anchor, delimiter, self.offset),
            None => stream.read_at(self.anchor, self.offset),
        }
    }
}

const fn at(anchor: &'static str, offset: usize, apply: fn(&mut CaseRecord, &str)) -> FieldRule {
    FieldRule {
        anchor,
        delimiter: None,
        offset,
        apply,
    }
}

const fn until(
    anchor: &'static str,
    delimiter: &'static str,
    offset: usize,
    apply: fn(&mut CaseRecord, &str),
) -> FieldRule {
    FieldRule {
        anchor,
        delimiter: Some(delimiter),
        offset,
        apply,
    }
}

pub const FIELD_RULES: &[FieldRule] = &[
    // Application
    at(APPLICATION_DATE, 1, |r, v| r.basic_info.application_date = convert_roc_date(v)),
    at(UNDERTAKER, 1, |r, v| r.basic_info.caretaker = v.to_string()),
    at(PROCESS_TIME, 1, |r, v| r.basic_info.handle_time = convert_roc_date(v)),
    at(LONG_CARE_QUALIFICATION, 1, |r, v| r.basic_info.eligibility = v.to_string()),
    // Customer
    at(ABORIGINAL_RACE, 1, |r, v| r.basic_info.customer.aboriginal_race = v.to_string()),
    until(EMPLOYMENT, EMPLOYMENT_INTENTION, 1, |r, v| {
        r.basic_info.customer.employment = v.to_string()
    }),
    until(EMPLOYMENT_INTENTION, CURRENT_LIVING_INSTITUTION, 1, |r, v| {
        r.basic_info.customer.employment_intention = v.to_string()
    }),
    at(HOSPITALIZED, 1, |r, v| r.basic_info.customer.hospitalized = v.to_string()),
    at(HIRE_CARE, 1, |r, v| r.basic_info.customer.hire_care = v.to_string()),
    at(HIRE_CARE_NUM, 1, |r, v| r.basic_info.customer.hire_care_num = parse_leading_int(v)),
    at(MENTAL_DISORDER, 1, |r, v| r.basic_info.mention_handicap = v.to_string()),
    at(EDUCATION, 1, |r, v| r.basic_info.education = v.to_string()),
    // Agent
    until(AGENT_NAME, AGENT_PERSONAL_ID, 1, |r, v| r.basic_info.agent.name = v.to_string()),
    until(AGENT_PERSONAL_ID, AGENT_PHONE_H, 1, |r, v| {
        r.basic_info.agent.personal_id = v.to_string()
    }),
    until(AGENT_PHONE_H, AGENT_PHONE_O, 1, |r, v| r.basic_info.agent.phone_h = v.to_string()),
    until(AGENT_PHONE_O, AGENT_MOBILE, 1, |r, v| r.basic_info.agent.phone_o = v.to_string()),
    until(AGENT_MOBILE, AGENT_RELATION, 1, |r, v| r.basic_info.agent.phone_c = v.to_string()),
    at(AGENT_RELATION, 1, |r, v| r.basic_info.agent.relation = v.to_string()),
    until(AGENT_RELATION, AGENT_EMAIL, 3, |r, v| {
        r.basic_info.agent.relation_note = v.to_string()
    }),
    until(AGENT_EMAIL, AGENT_ADDRESS, 1, |r, v| r.basic_info.agent.email = v.to_string()),
    // Emergency contact
    until(CONTACT_NAME, CONTACT_PHONE_H, 1, |r, v| r.basic_info.contact.name = v.to_string()),
    until(CONTACT_PHONE_H, CONTACT_PHONE_O, 1, |r, v| {
        r.basic_info.contact.phone_h = v.to_string()
    }),
    until(CONTACT_PHONE_O, CONTACT_MOBILE, 1, |r, v| {
        r.basic_info.contact.phone_o = v.to_string()
    }),
    until(CONTACT_MOBILE, CONTACT_RELATION, 1, |r, v| {
        r.basic_info.contact.phone_c = v.to_string()
    }),
    at(CONTACT_RELATION, 1, |r, v| r.basic_info.contact.relation = v.to_string()),
    until(CONTACT_RELATION, CONTACT_EMAIL, 3, |r, v| {
        r.basic_info.contact.relation_note = v.to_string()
    }),
    until(CONTACT_EMAIL, CONTACT_ADDRESS, 1, |r, v| r.basic_info.contact.email = v.to_string()),
    // Plan
    at(PLAN_CATEGORY, 1, |r, v| r.take_care_plan.plan_type = v.to_string()),
    at(WRITE_OFF, 1, |r, v| r.take_care_plan.write_off = v.to_string()),
    at(EVALUATE_DATE, 1, |r, v| r.take_care_plan.evaluate_date = v.to_string()),
    at(IS_DISABILITY_PROVE, 1, |r, v| r.take_care_plan.disability_prove = v.to_string()),
    at(A_CARE_TAKER_SERVICE, 1, |r, v| r.take_care_plan.is_a_care_taker = !v.is_empty()),
    at(BA12_USE, 1, |r, v| r.take_care_plan.item_aa06_include_ba12 = v.contains(CHECK_BOX)),
];

/// Reads every rule's cell out of `stream` and stores it.
pub fn apply_rules(stream: &TokenStream, rules: &[FieldRule], record: &mut CaseRecord) {
    for rule in rules {
        let value = rule.read(stream);
        trace!(anchor = rule.anchor, value, "field");
        (rule.apply)(record, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stream(tokens: &[&str]) -> TokenStream {
        TokenStream::from_tokens(tokens.iter().copied())
    }

    #[test]
    fn test_blank_agent_fields() {
        let s = stream(&[
            AGENT_NAME, "陳大文",
            AGENT_PERSONAL_ID, AGENT_PHONE_H, "07-1234567",
            AGENT_PHONE_O, AGENT_MOBILE, "0912345678",
            AGENT_RELATION, "子女", "", "長子", AGENT_EMAIL, AGENT_ADDRESS,
        ]);
        let mut record = CaseRecord::default();
        apply_rules(&s, FIELD_RULES, &mut record);
        let agent = &record.basic_info.agent;
        assert_eq!(agent.name, "陳大文");
        assert_eq!(agent.personal_id, "");
        assert_eq!(agent.phone_h, "07-1234567");
        assert_eq!(agent.phone_o, "");
        assert_eq!(agent.phone_c, "0912345678");
        assert_eq!(agent.relation, "子女");
        assert_eq!(agent.relation_note, "長子");
        assert_eq!(agent.email, "");
    }

    #[test]
    fn test_conversions() {
        let s = stream(&[
            APPLICATION_DATE, "110/05/24",
            PROCESS_TIME, "110/13/01",
            HIRE_CARE_NUM, "2人",
            A_CARE_TAKER_SERVICE, "王個管",
            BA12_USE, CHECKED_ICON,
        ]);
        let mut record = CaseRecord::default();
        apply_rules(&s, FIELD_RULES, &mut record);
        assert_eq!(record.basic_info.application_date, NaiveDate::from_ymd_opt(2021, 5, 24));
        assert_eq!(record.basic_info.handle_time, None);
        assert_eq!(record.basic_info.customer.hire_care_num, Some(2));
        assert!(record.take_care_plan.is_a_care_taker);
        assert!(record.take_care_plan.item_aa06_include_ba12);
    }

    #[test]
    fn test_absent_labels_leave_defaults() {
        let mut record = CaseRecord::default();
        apply_rules(&stream(&["x", "y"]), FIELD_RULES, &mut record);
        assert_eq!(record.basic_info.caretaker, "");
        assert_eq!(record.basic_info.customer.hire_care_num, None);
        assert!(!record.take_care_plan.is_a_care_taker);
    }
}

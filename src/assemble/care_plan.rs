//! assemble/care_plan.rs
//!
//! The care-plan part of the form: the free-text narrative, the A-unit
//! case manager's plan and contact, the benefit quotas, supervisor
//! approvals and the case-management items the plan qualifies for.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::anchors::*;
use crate::date::convert_roc_date;
use crate::record::{AUnitContact, Bundled, BundledRespite, SignatureEntry, TakeCarePlan};
use crate::segment::ServiceItem;
use crate::stream::TokenStream;
use crate::text_tools::{is_checked, match_text, parse_leading_int};

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static CMS_GRADE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^第\d級").unwrap());

/// How far before the care-service label the CMS grade may sit.
const CMS_GRADE_LOOKBACK: usize = 9;

/// Narrative text of a section starts this many tokens after its label.
const A_UNIT_TEXT_OFFSET: usize = 3;

/// The `n`-th number in `text`.
fn nth_number(text: &str, n: usize) -> Option<Decimal> {
    parse_leading_int(match_text(text, &DIGITS, n)).map(Decimal::from)
}

/// Fills the free-text sections. Reads a stream in which line breaks
/// inside cells are still present, and may hide a duplicated
/// description label from it.
pub fn fill_narrative(stream: &mut TokenStream, plan: &mut TakeCarePlan) {
    // Some revisions print the description label once more right before
    // the subject; that copy is not the real one.
    if let Some(at) = stream.position(PLAN_DESCRIPTION) {
        if stream.token(at + 1) == THEME || stream.token(at + 2) == THEME {
            debug!(at, "hid duplicated description label");
            stream.suppress(at);
        }
    }
    let theme = stream.position(THEME);
    let reason = stream.position(PLAN_CHANGE_REASON);
    let description = stream.position(PLAN_DESCRIPTION);

    if let Some(theme) = theme {
        if let Some(end) = reason.or(description) {
            plan.theme = stream.join(theme + 1, end);
        }
    }
    if let (Some(reason), Some(description)) = (reason, description) {
        plan.modify_reason = stream.join(reason + 1, description);
    }
    if let Some(description) = description {
        let end = stream
            .position(CASE_WISH)
            .or_else(|| stream.position(CARE_PLAN));
        if let Some(end) = end {
            plan.introduction = stream.join(description + 1, end);
        }
    }

    fill_a_unit_plan(stream, plan);
}

fn fill_a_unit_plan(stream: &TokenStream, plan: &mut TakeCarePlan) {
    let (Some(mut start), Some(mut end)) = (stream.position(QUESTION), stream.position(A_CONTACT)) else {
        return;
    };
    if stream.token(start + 1).contains(A_UNIT) && stream.token(end + 1).contains(A_UNIT) {
        start += 1;
        end += 1;
    }

    let mut destination = None;
    let mut execution = None;
    let mut memo = None;
    for i in start + 1..end {
        match stream.token(i) {
            PLAN_DESTINATION => destination = Some(i),
            PLAN_EXEC => execution = Some(i),
            OTHER_NOTE => memo = Some(i),
            _ => {}
        }
    }

    if let (Some(from), Some(to)) = (destination, execution) {
        plan.a_introduction = stream.join(from + A_UNIT_TEXT_OFFSET, to);
    }
    if let (Some(from), Some(to)) = (execution, memo) {
        plan.a_execution = stream.join(from + A_UNIT_TEXT_OFFSET, to);
    }
    if let Some(from) = memo {
        // The block ends with the contact caption.
        plan.a_memo = stream.join(from + A_UNIT_TEXT_OFFSET, end.saturating_sub(1));
    }
}

/// Case manager contact of the A unit. Labels in this block carry extra
/// text around them, so they are matched by substring; a blank value
/// leaves the field as it was.
pub fn a_unit_contact(stream: &TokenStream) -> AUnitContact {
    let mut contact = AUnitContact::default();
    let (Some(mut start), Some(mut end)) = (
        stream.position(A_CONTACT),
        stream.position(CARE_PROFESSIONAL_SERVICE_MONTH),
    ) else {
        return contact;
    };
    if stream.token(start + 1).contains(A_UNIT) && stream.token(end + 1).contains(SEARCH_SERVICE_DETAIL) {
        start += 1;
        end += 1;
    }

    for i in start + 1..end {
        let label = stream.token(i);
        let value = stream.token(i + 1);
        if value.is_empty() {
            continue;
        }
        if label.contains(A_UNIT_NAME) {
            contact.unit = value.to_string();
        }
        if label.contains(A_CARE_TAKER_NAME) {
            contact.name = value.to_string();
        }
        if label.contains(CONTACT_PHONE) {
            contact.telephone = value.to_string();
        }
        if label.contains(E_MAIL) {
            contact.email = value.to_string();
        }
    }
    contact
}

/// Quotas, approvals and case-management items.
pub fn fill(stream: &TokenStream, plan: &mut TakeCarePlan) {
    plan.bundled_active = bundled_active(stream).to_string();
    if let Some((grade, bundled)) = monthly_quota(stream) {
        plan.cms_level = grade;
        plan.bundled = bundled;
    }
    if let Some(respite) = respite_quota(stream) {
        plan.bundled_g = respite;
    }
    plan.sign_supervisor = signatures(stream);
    fill_case_management_items(stream, plan);

    let hospital = stream.read_at(DISCHARGE_HOSPITAL, 1);
    if hospital != NO_WILLINGNESS {
        plan.discharge_hospital = hospital.to_string();
    }
}

fn bundled_active(stream: &TokenStream) -> &'static str {
    match stream.position(CMS_LEVEL) {
        Some(at) if at > 0 && stream.token(at - 1).find(CHECK_BOX).is_some_and(|p| p > 0) => ENABLE,
        _ => NON_ENABLE,
    }
}

/// CMS grade and monthly quota. The care-service label also heads other
/// tables; the one that counts has the grade a few tokens before it.
fn monthly_quota(stream: &TokenStream) -> Option<(String, Bundled)> {
    let (at, grade) = stream.positions(CARE_PROFESSIONAL_SERVICE).find_map(|at| {
        (1..=CMS_GRADE_LOOKBACK.min(at))
            .map(|back| stream.token(at - back))
            .find(|cell| CMS_GRADE.is_match(cell))
            .map(|grade| (at, grade.to_string()))
    })?;

    // `quota … allowance … (used) … pays`
    let figures = stream.token(at + 3);
    let bundled = Bundled {
        quota: nth_number(figures, 0),
        allowance: nth_number(figures, 1),
        pays: nth_number(figures, 3),
        price_type: stream.read_at(PRICE_CATEGORY, 1).to_string(),
        worker_care: stream.read_field(ALLOWANCE, INTERFACE_NOTE, 1).to_string(),
    };
    Some((grade, bundled))
}

/// Annual respite quota, from the respite label whose figures start with
/// the quota caption.
fn respite_quota(stream: &TokenStream) -> Option<BundledRespite> {
    let at = stream
        .positions(RESPITE_SERVICE)
        .find(|&at| stream.token(at + 3).starts_with(QUOTA_PREFIX))?;
    let usage = stream.token(at + 4);
    Some(BundledRespite {
        quota: nth_number(stream.token(at + 3), 0),
        allowance: nth_number(usage, 0),
        pays: nth_number(usage, 2),
    })
}

/// Offsets of the name, status and date cells after a supervisor label.
struct SignatureLayout {
    label: &'static str,
    name: usize,
    status: usize,
    date: usize,
}

const SIGNATURE_LAYOUTS: [SignatureLayout; 2] = [
    SignatureLayout {
        label: SIGN_SUPERVISOR_ONE,
        name: 3,
        status: 5,
        date: 7,
    },
    SignatureLayout {
        label: SIGN_SUPERVISOR_TWO,
        name: 2,
        status: 4,
        date: 6,
    },
];

/// Supervisor approvals in signing order. The second supervisor only
/// signs after the first, and a date only counts once a status is set.
fn signatures(stream: &TokenStream) -> Vec<SignatureEntry> {
    let mut entries = Vec::new();
    for layout in &SIGNATURE_LAYOUTS {
        let name = stream.read_field(layout.label, APPROVAL_STATUS, layout.name);
        if name.is_empty() {
            break;
        }
        let status = stream.read_field(layout.label, APPROVAL_DATE, layout.status);
        let date = if status.is_empty() {
            None
        } else {
            convert_roc_date(stream.read_field(layout.label, APPROVAL_CONTENT, layout.date))
        };
        entries.push(SignatureEntry {
            name: name.to_string(),
            status: status.to_string(),
            date,
        });
    }
    entries
}

/// Default case-management items marked as conforming: code, unit price
/// and units per period.
const DEFAULT_ITEMS: [(&str, i64, i64); 3] = [(AA05, 200, 31), (AA06, 200, 31), (AA07, 760, 12)];

/// Scans the case-management section for conforming default items and
/// for the categories the AA08 and AA09 items cover.
fn fill_case_management_items(stream: &TokenStream, plan: &mut TakeCarePlan) {
    plan.item_aa09.g = Some(false);
    let Some(start) = stream.position(MENTAL_DISORDER) else {
        return;
    };
    let Some(end) = stream
        .position(INTERFACE_NOTE)
        .or_else(|| stream.position(UPLOAD_PICTURE))
    else {
        return;
    };

    for i in start + 2..end {
        let code = stream.token(i);
        let conforming = stream.token(i + 1) == CONFORM;
        if let Some(&(item, price, amount)) = DEFAULT_ITEMS.iter().find(|(item, ..)| code.starts_with(item)) {
            if conforming {
                let (price, amount) = (Decimal::from(price), Decimal::from(amount));
                plan.bundled_item
                    .push(ServiceItem::new(item, price, amount, Decimal::ZERO, false));
            }
        } else if code.starts_with("AA08") {
            plan.item_aa08.b = is_checked(stream.token(i + 3));
            plan.item_aa08.c = is_checked(stream.token(i + 4));
        } else if code.starts_with("AA09") {
            plan.item_aa09.b = is_checked(stream.token(i + 3));
            plan.item_aa09.c = is_checked(stream.token(i + 4));
            plan.item_aa09.g = Some(is_checked(stream.token(i + 5)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(tokens: &[&str]) -> TokenStream {
        TokenStream::from_tokens(tokens.iter().copied())
    }

    #[test]
    fn test_narrative_sections() {
        let mut s = stream(&[
            THEME, "新案", "評估",
            PLAN_CHANGE_REASON, "家屬", "要求",
            PLAN_DESCRIPTION, "案主獨居", CASE_WISH, "x",
        ]);
        let mut plan = TakeCarePlan::default();
        fill_narrative(&mut s, &mut plan);
        assert_eq!(plan.theme, "新案評估");
        assert_eq!(plan.modify_reason, "家屬要求");
        assert_eq!(plan.introduction, "案主獨居");
    }

    #[test]
    fn test_duplicated_description_label_is_hidden() {
        let mut s = stream(&[
            PLAN_DESCRIPTION, "", THEME, "初評",
            PLAN_DESCRIPTION, "需要", "協助\n沐浴", CARE_PLAN,
        ]);
        let mut plan = TakeCarePlan::default();
        fill_narrative(&mut s, &mut plan);
        assert_eq!(s.suppressed(), 1);
        assert_eq!(plan.theme, "初評");
        assert_eq!(plan.introduction, "需要協助\n沐浴");
    }

    #[test]
    fn test_a_unit_plan() {
        let mut s = stream(&[
            QUESTION, "(A單位)",
            PLAN_DESTINATION, "：", "", "維持", "自主",
            PLAN_EXEC, "：", "", "每週", "訪視",
            OTHER_NOTE, "：", "", "無", "聯絡資訊",
            A_CONTACT, "(A單位)",
        ]);
        let mut plan = TakeCarePlan::default();
        fill_narrative(&mut s, &mut plan);
        assert_eq!(plan.a_introduction, "維持自主");
        assert_eq!(plan.a_execution, "每週訪視");
        assert_eq!(plan.a_memo, "無聯絡資訊");
    }

    #[test]
    fn test_a_unit_contact() {
        let s = stream(&[
            A_CONTACT, "(A單位)",
            "A單位單位名稱", "長照中心",
            "個管員姓名：", "王小美",
            CONTACT_PHONE, "",
            "電子信箱：", "a@example.com",
            CARE_PROFESSIONAL_SERVICE_MONTH, SEARCH_SERVICE_DETAIL,
        ]);
        let contact = a_unit_contact(&s);
        assert_eq!(contact.unit, "長照中心");
        assert_eq!(contact.name, "王小美");
        assert_eq!(contact.telephone, "");
        assert_eq!(contact.email, "a@example.com");
    }

    #[test]
    fn test_monthly_quota_needs_grade() {
        let s = stream(&[
            CARE_PROFESSIONAL_SERVICE, "x",
            "第4級", "y", CARE_PROFESSIONAL_SERVICE, ":", "",
            "額度18580元，已核定10000元，使用5000元，自付1200元",
            PRICE_CATEGORY, "一般戶",
            ALLOWANCE, INTERFACE_NOTE,
        ]);
        let (grade, bundled) = monthly_quota(&s).unwrap();
        assert_eq!(grade, "第4級");
        assert_eq!(bundled.quota, Some(Decimal::from(18580)));
        assert_eq!(bundled.allowance, Some(Decimal::from(10000)));
        assert_eq!(bundled.pays, Some(Decimal::from(1200)));
        assert_eq!(bundled.price_type, "一般戶");
        assert_eq!(bundled.worker_care, "");

        let s = stream(&[CARE_PROFESSIONAL_SERVICE, "x", "y", "z"]);
        assert!(monthly_quota(&s).is_none());
    }

    #[test]
    fn test_respite_quota() {
        let s = stream(&[
            RESPITE_SERVICE, "a", "b", "c",
            RESPITE_SERVICE, "", "", "給付額度32340元", "已使用0元，剩餘32340元，自付100元",
        ]);
        let respite = respite_quota(&s).unwrap();
        assert_eq!(respite.quota, Some(Decimal::from(32340)));
        assert_eq!(respite.allowance, Some(Decimal::ZERO));
        assert_eq!(respite.pays, Some(Decimal::from(100)));
    }

    #[test]
    fn test_bundled_active() {
        assert_eq!(bundled_active(&stream(&[CHECKED_ICON, CMS_LEVEL])), ENABLE);
        assert_eq!(bundled_active(&stream(&["[x]", CMS_LEVEL])), NON_ENABLE);
        assert_eq!(bundled_active(&stream(&[CMS_LEVEL])), NON_ENABLE);
    }

    #[test]
    fn test_signatures() {
        let s = stream(&[
            SIGN_SUPERVISOR_ONE, "", "", "林督導", APPROVAL_STATUS, "核准", APPROVAL_DATE, "110/05/24",
            SIGN_SUPERVISOR_TWO, "", "張組長", APPROVAL_STATUS, APPROVAL_DATE, "", APPROVAL_CONTENT,
        ]);
        let entries = signatures(&s);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "林督導");
        assert_eq!(entries[0].status, "核准");
        assert_eq!(entries[0].date, chrono::NaiveDate::from_ymd_opt(2021, 5, 24));
        assert_eq!(entries[1].name, "張組長");
        assert_eq!(entries[1].status, "");
        assert_eq!(entries[1].date, None);
    }

    #[test]
    fn test_second_signature_needs_first() {
        let s = stream(&[
            SIGN_SUPERVISOR_ONE, "", "", APPROVAL_STATUS,
            SIGN_SUPERVISOR_TWO, "", "張組長", APPROVAL_STATUS,
        ]);
        assert!(signatures(&s).is_empty());
    }

    #[test]
    fn test_case_management_items() {
        let s = stream(&[
            MENTAL_DISORDER, "否",
            "AA05照顧管理", CONFORM,
            "AA06", "不符合",
            "AA07", CONFORM,
            "AA08", "", "", CHECKED_ICON, "[x]",
            "AA09", "", "", "[x]", CHECKED_ICON, CHECKED_ICON,
            INTERFACE_NOTE,
        ]);
        let mut plan = TakeCarePlan::default();
        fill_case_management_items(&s, &mut plan);
        let codes: Vec<&str> = plan.bundled_item.iter().map(|i| i.item.as_str()).collect();
        assert_eq!(codes, vec![AA05, AA07]);
        assert_eq!(plan.bundled_item[1].price, Decimal::from(760));
        assert_eq!(plan.bundled_item[1].amount, Decimal::from(12));
        assert_eq!(plan.bundled_item[1].total, Decimal::ZERO);
        assert_eq!(plan.bundled_item[1].item_type, ITEM_TYPE_A);
        assert!(plan.item_aa08.b && !plan.item_aa08.c);
        assert!(!plan.item_aa09.b && plan.item_aa09.c);
        assert_eq!(plan.item_aa09.g, Some(true));
    }

    #[test]
    fn test_case_management_scan_needs_bounds() {
        let s = stream(&["AA05", CONFORM, INTERFACE_NOTE]);
        let mut plan = TakeCarePlan::default();
        fill_case_management_items(&s, &mut plan);
        assert!(plan.bundled_item.is_empty());
        assert_eq!(plan.item_aa09.g, Some(false));
    }

    #[test]
    fn test_discharge_hospital() {
        let mut plan = TakeCarePlan::default();
        fill(&stream(&[DISCHARGE_HOSPITAL, NO_WILLINGNESS]), &mut plan);
        assert_eq!(plan.discharge_hospital, "");
        fill(&stream(&[DISCHARGE_HOSPITAL, "高雄醫院"]), &mut plan);
        assert_eq!(plan.discharge_hospital, "高雄醫院");
    }
}

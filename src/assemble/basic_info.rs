//! assemble/basic_info.rs
//!
//! Customer identity, demographics, addresses, disability and the
//! checklists of the basic-information part of the form.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::anchors::*;
use crate::record::{BasicInfo, Disability};
use crate::stream::TokenStream;
use crate::text_tools::{checked_after, match_text, split_address};
use crate::validation::Identity;

static HEIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9.]+公分").unwrap());
static WEIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9.]+公斤").unwrap());
static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.]+").unwrap());

/// Characters of boilerplate in front of the disease name.
const DISEASE_PREFIX_CHARS: usize = 6;

/// How many option cells follow the language and service-kind labels.
const LANGUAGE_OPTIONS: usize = 5;
const SERVICE_KIND_OPTIONS: usize = 16;

const BEHAVIORS: [&str; 4] = [LANGUAGE_ATTACK, PHYSICAL_ATTACK, RESIST_CARE, ITEM_ATTACK];
const MEDICAL_HISTORY: [&str; 8] = [
    DEMENTIA,
    MENTAL_ILLNESS,
    AUTISM,
    LOW_INTELLIGENCE,
    CEREBRAL_PALSY,
    SPINAL_CORD_INJURY,
    INFECTIOUS_DISEASE,
    RARE_DISEASE,
];

pub fn fill(stream: &TokenStream, identity: &Identity, info: &mut BasicInfo) {
    fill_identity(stream, identity, info);
    fill_demographics(stream, info);
    fill_addresses(stream, info);
    info.customer.level = care_level(stream);
    info.handicap_level = handicap_level(stream);
    info.disability = disability(stream);
    info.agent.address = two_cell_address(stream, AGENT_ADDRESS);
    info.contact.address = two_cell_address(stream, CONTACT_ADDRESS);
    info.behavior = observed_behaviors(stream);
    info.medical_history = checked_labels(stream, &MEDICAL_HISTORY);
    info.special_mark = special_marks(stream);
}

fn fill_identity(stream: &TokenStream, identity: &Identity, info: &mut BasicInfo) {
    let customer = &mut info.customer;
    customer.name = identity.name.clone();
    if let Some(at) = stream.position(TRADITIONAL_NAME) {
        let original = stream.token(at + 2);
        if !original.is_empty() {
            customer.name = format!("{}({})", customer.name, original);
        }
    }
    customer.gender = identity.gender.clone();
    customer.birthday = identity.birthday;
    customer.personal_id = identity.personal_id.clone();

    let foreign = stream.read_at(PERSONAL_ID, 2);
    customer.foreign = foreign.contains(FOREIGN) && foreign.contains(CHECK_BOX);

    // The phone number may be split over several cells before the name.
    if let (Some(phone), Some(name)) = (stream.position(PHONE), stream.position(NAME)) {
        customer.phone = stream.join(phone + 1, name);
    }
}

fn fill_demographics(stream: &TokenStream, info: &mut BasicInfo) {
    let customer = &mut info.customer;

    let aboriginal = stream.read_at(ABORIGINAL_IDENTITY, 1);
    if aboriginal != NO {
        customer.aboriginal_identity = aboriginal.to_string();
    }

    let bmi = stream.read_at(BMI, 1);
    customer.height = match_text(bmi, &HEIGHT, 0).to_string();
    customer.weight = match match_text(bmi, &WEIGHT, 0) {
        "" => match_text(stream.read_at(BMI, 2), &WEIGHT, 0).to_string(),
        weight => weight.to_string(),
    };

    customer.living_situation = living_situation(stream);
    customer.living_partner = living_partners(stream);
    customer.language = checked_after(stream, LANGUAGE, LANGUAGE_OPTIONS);

    customer.disease = if stream.read_at(DISEASE, 1) == YES {
        Some(stream.read_at(DISEASE, 2).chars().skip(DISEASE_PREFIX_CHARS).collect())
    } else {
        None
    };

    let mut kinds = checked_after(stream, SERVICE_ITEM, SERVICE_KIND_OPTIONS);
    kinds.sort();
    customer.service_item = kinds;
}

/// The questionnaire answer wins over the basic-information cell unless
/// the question was skipped.
fn living_situation(stream: &TokenStream) -> String {
    let answer = match_text(stream.read_at(LIVING_SITUATION_Q, 1), &NON_NUMERIC, 0);
    let skipped = format!("【{}", SKIP_ANSWER);
    if answer.is_empty() || answer == skipped {
        stream.read_at(LIVING_SITUATION, 1).to_string()
    } else {
        answer.to_string()
    }
}

/// The partner cell lists every option as `[icon]n.caption`; the caption of
/// each checked option runs from after its number to the next icon.
fn living_partners(stream: &TokenStream) -> Vec<String> {
    let Some(at) = stream.position(LIVING_PARTNER_Q) else {
        return Vec::new();
    };
    let separator = format!("{}]", CHECK_GIF);
    stream
        .token(at + 1)
        .split(separator.as_str())
        .skip(1)
        .map(|option| {
            let from = option.find('.').map_or(0, |dot| dot + 1);
            match option.find('[') {
                Some(to) if to >= from => option[from..to].to_string(),
                _ => String::new(),
            }
        })
        .collect()
}

fn fill_addresses(stream: &TokenStream, info: &mut BasicInfo) {
    let registered = stream.position(REGISTERED_ADDRESS);
    let service = stream.position(SERVICE_ADDRESS);
    let language = stream.position(LANGUAGE);
    // Address cells start three tokens after their label.
    if let (Some(from), Some(to)) = (registered, service) {
        info.customer.set_registered_address(split_address(&stream.join(from + 3, to)));
    }
    if let (Some(from), Some(to)) = (service, language) {
        info.customer.set_service_address(split_address(&stream.join(from + 3, to)));
    }
}

/// The welfare status appears in the basic information and again in the
/// plan section, three tokens after the plan category, when the plan
/// updated it. The plan's value wins.
fn care_level(stream: &TokenStream) -> String {
    let mut basic = "";
    let mut updated = "";
    for at in stream.positions(LONG_CARE_STATUS) {
        let value = stream.token(at + 1);
        if at >= 3 && stream.token(at - 3) == PLAN_CATEGORY {
            updated = value;
        } else {
            basic = value;
        }
    }
    if basic.is_empty() {
        basic = stream.read_at(LONG_CARE_LEVEL, 1);
    }
    let level = if updated.is_empty() { basic } else { updated };
    level.to_string()
}

/// Level after the `n.` numbering of the handicap answer. Elderly
/// applicants answer with the age category, which is not a level.
fn handicap_level(stream: &TokenStream) -> String {
    let mut handicap = stream.read_at(HANDICAP, 1);
    if handicap == AGE {
        handicap = "";
    }
    if handicap.is_empty() {
        handicap = stream.read_field(HANDICAP_LEVEL, VALID_DATE, 1);
    }
    handicap.split('.').nth(1).unwrap_or("").to_string()
}

fn disability(stream: &TokenStream) -> Disability {
    if stream.read_field(DISABILITY_PROVE, NONE, 1).is_empty() {
        return Disability {
            level: NORMAL.to_string(),
            note: vec![NONE.to_string()],
            prove: NONE.to_string(),
            system: NEW_SYSTEM.to_string(),
            old_body_situation: String::new(),
        };
    }

    let mut disability = Disability {
        prove: stream.read_at(DISABILITY_PROVE, 1).to_string(),
        ..Disability::default()
    };
    let body = stream.read_at(BARRIER_CATEGORY_DESCRIPTION, 1);
    if body.contains(&format!("({}", NEW_SYSTEM)) {
        disability.system = NEW_SYSTEM.to_string();
        disability.note = if body.contains(MULTIPLE_OBSTACLES) {
            multiple_obstacle_notes(stream)
        } else {
            vec![body.to_string()]
        };
    } else {
        disability.system = OLD_SYSTEM.to_string();
        disability.old_body_situation =
            stream.read_field(BARRIER_CATEGORY_DESCRIPTION, HANDICAP_LEVEL, 1).to_string();
    }
    disability.level = match stream.read_field(BARRIER_CATEGORY_DESCRIPTION, APPRAISAL_DATE, 1) {
        "" => NORMAL.to_string(),
        level => level.to_string(),
    };
    disability
}

/// Categories of a new-system multiple disability. Either ticked in the
/// category grid (`第N類`) or typed out after the description.
fn multiple_obstacle_notes(stream: &TokenStream) -> Vec<String> {
    if stream.read_at(BARRIER_CATEGORY_DESCRIPTION, 2) == HANDICAP_LEVEL {
        let notes: Vec<String> = match (
            stream.position(BARRIER_CATEGORY_NEW),
            stream.position(BARRIER_CATEGORY_OLD),
        ) {
            (Some(from), Some(to)) => (from + 1..to)
                .map(|i| stream.token(i))
                .filter(|cell| cell.starts_with(CHECKED_ICON))
                .filter_map(|cell| cell.chars().find(char::is_ascii_digit))
                .map(|n| format!("{}{}{}", ICF, n, CATEGORY))
                .collect(),
            _ => Vec::new(),
        };
        return if notes.is_empty() {
            vec![MULTIPLE_OBSTACLES.to_string()]
        } else {
            notes
        };
    }

    let typed = match stream.read_at(BARRIER_CATEGORY_DESCRIPTION, 2) {
        "" => stream.read_at(BARRIER_CATEGORY_DESCRIPTION, 3),
        typed => typed,
    };
    let separator = if typed.contains(ICF) { '、' } else { ',' };
    typed.split(separator).map(String::from).collect()
}

fn two_cell_address(stream: &TokenStream, anchor: &str) -> String {
    format!("{}{}", stream.read_at(anchor, 1), stream.read_at(anchor, 2))
}

fn observed_behaviors(stream: &TokenStream) -> String {
    BEHAVIORS
        .iter()
        .filter(|label| stream.read_at(label, 1).contains(HAPPENED))
        .map(|label| format!("{},", label))
        .collect()
}

/// Labels whose checkbox is ticked, each followed by a comma.
fn checked_labels(stream: &TokenStream, labels: &[&str]) -> String {
    labels
        .iter()
        .filter(|label| stream.contains(&format!("{}{}", CHECKED_ICON, label)))
        .map(|label| format!("{},", label))
        .collect()
}

/// Marks that decide whether the AA06 case-management item applies.
fn special_marks(stream: &TokenStream) -> String {
    let mut marks = checked_labels(stream, &[WITH_TUBE, MOVE_DIFFICULT]);
    let transfer = stream.read_at(MOVEMENT, 1);
    for mark in [SIT_UP_ON_HIS_OWN, FULL_ASSISTANCE] {
        if transfer == mark {
            marks.push_str(mark);
            marks.push(',');
        }
    }
    marks
}

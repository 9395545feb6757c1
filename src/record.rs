//! record.rs
//!
//! The case record handed back by a successful import. Field names on the
//! wire follow the case-management system the record is loaded into,
//! which is why a few of them (`ADLs`, `Aintroduction`,
//! `registeredAddress_city`, …) are renamed by hand.
//!
//! Text fields that the form left blank are empty strings; fields that
//! need a parsed value (dates, counts, money) are `None` when the cell
//! did not hold one.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::segment::{PlanItemRow, ServiceItem};
use crate::text_tools::AddressParts;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub basic_info: BasicInfo,
    pub take_care_plan: TakeCarePlan,
    pub evaluation: Evaluation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub application_date: Option<NaiveDate>,
    pub customer: Customer,
    pub disability: Disability,
    pub agent: Delegate,
    pub contact: Delegate,
    /// Name of the officer who took the application.
    pub caretaker: String,
    /// Comma-terminated list of observed behavior problems.
    pub behavior: String,
    /// Comma-terminated list of checked medical-history items.
    pub medical_history: String,
    pub education: String,
    pub eligibility: String,
    pub handicap_level: String,
    pub handle_time: Option<NaiveDate>,
    pub mention_handicap: String,
    pub special_mark: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub gender: String,
    pub birthday: Option<NaiveDate>,
    pub personal_id: String,
    pub foreign: bool,
    pub phone: String,
    pub aboriginal_identity: String,
    pub aboriginal_race: String,
    pub height: String,
    pub weight: String,
    pub living_situation: String,
    pub living_partner: Vec<String>,
    pub language: Vec<String>,
    pub level: String,
    pub employment: String,
    pub employment_intention: String,
    pub hospitalized: String,
    pub hire_care: String,
    pub hire_care_num: Option<i64>,
    pub disease: Option<String>,
    pub service_item: Vec<String>,

    #[serde(rename = "registeredAddress_city")]
    pub registered_address_city: String,
    #[serde(rename = "registeredAddress_region")]
    pub registered_address_region: String,
    #[serde(rename = "registeredAddress_village")]
    pub registered_address_village: String,
    #[serde(rename = "registeredAddress_neighborhood")]
    pub registered_address_neighborhood: String,
    #[serde(rename = "registeredAddress_road")]
    pub registered_address_road: String,
    #[serde(rename = "registeredAddress_others")]
    pub registered_address_others: String,

    #[serde(rename = "serviceAddress_city")]
    pub service_address_city: String,
    #[serde(rename = "serviceAddress_region")]
    pub service_address_region: String,
    #[serde(rename = "serviceAddress_village")]
    pub service_address_village: String,
    #[serde(rename = "serviceAddress_neighborhood")]
    pub service_address_neighborhood: String,
    #[serde(rename = "serviceAddress_road")]
    pub service_address_road: String,
    #[serde(rename = "serviceAddress_others")]
    pub service_address_others: String,
}

impl Customer {
    pub fn set_registered_address(&mut self, parts: AddressParts) {
        self.registered_address_city = parts.city;
        self.registered_address_region = parts.region;
        self.registered_address_village = parts.village;
        self.registered_address_neighborhood = parts.neighborhood;
        self.registered_address_road = parts.road;
        self.registered_address_others = parts.the_rest;
    }

    pub fn set_service_address(&mut self, parts: AddressParts) {
        self.service_address_city = parts.city;
        self.service_address_region = parts.region;
        self.service_address_village = parts.village;
        self.service_address_neighborhood = parts.neighborhood;
        self.service_address_road = parts.road;
        self.service_address_others = parts.the_rest;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disability {
    pub level: String,
    pub note: Vec<String>,
    pub prove: String,
    /// New or old classification system.
    pub system: String,
    /// Only filled under the old system.
    pub old_body_situation: String,
}

/// The designated agent or the emergency contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegate {
    pub name: String,
    /// Only recorded for the agent.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub personal_id: String,
    pub phone_h: String,
    pub phone_o: String,
    pub phone_c: String,
    pub relation: String,
    pub relation_note: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeCarePlan {
    pub theme: String,
    pub modify_reason: String,
    pub introduction: String,
    #[serde(rename = "Aintroduction")]
    pub a_introduction: String,
    #[serde(rename = "AExecution")]
    pub a_execution: String,
    #[serde(rename = "AMemo")]
    pub a_memo: String,
    #[serde(rename = "AContact")]
    pub a_contact: AUnitContact,
    #[serde(rename = "APlanItem")]
    pub a_plan_item: Vec<PlanItemRow>,
    #[serde(rename = "CMSLevel")]
    pub cms_level: String,
    pub bundled: Bundled,
    #[serde(rename = "bundledG")]
    pub bundled_g: BundledRespite,
    pub bundled_item: Vec<ServiceItem>,
    pub bundled_active: String,
    pub sign_supervisor: Vec<SignatureEntry>,
    pub contract_version: String,
    pub has_new_item: bool,
    pub disability_prove: String,
    pub evaluate_date: String,
    #[serde(rename = "itemAA06IncludeBA12")]
    pub item_aa06_include_ba12: bool,
    #[serde(rename = "itemAA08")]
    pub item_aa08: CategoryFlags,
    #[serde(rename = "itemAA09")]
    pub item_aa09: CategoryFlags,
    pub plan_type: String,
    pub write_off: String,
    #[serde(rename = "isACareTaker")]
    pub is_a_care_taker: bool,
    pub discharge_hospital: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AUnitContact {
    pub unit: String,
    pub name: String,
    pub telephone: String,
    pub email: String,
}

/// Monthly care and professional service quota.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundled {
    pub quota: Option<Decimal>,
    pub allowance: Option<Decimal>,
    pub pays: Option<Decimal>,
    pub price_type: String,
    pub worker_care: String,
}

/// Annual respite care quota.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundledRespite {
    pub quota: Option<Decimal>,
    pub allowance: Option<Decimal>,
    pub pays: Option<Decimal>,
}

/// Which service categories a case-management item covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFlags {
    #[serde(rename = "B")]
    pub b: bool,
    #[serde(rename = "C")]
    pub c: bool,
    /// Only meaningful for AA09.
    #[serde(rename = "G", skip_serializing_if = "Option::is_none", default)]
    pub g: Option<bool>,
}

/// A supervisor's approval of the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub name: String,
    pub status: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub helper: Helper,
    #[serde(rename = "ADLs")]
    pub adls: Vec<AdlEntry>,
    #[serde(rename = "IADLs")]
    pub iadls: Vec<IadlEntry>,
}

/// Primary and secondary caregivers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Helper {
    pub primary_name: String,
    pub primary_relation: String,
    pub primary_gender: String,
    pub primary_age: Option<i64>,
    pub secondary_name: String,
    pub secondary_relation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdlEntry {
    pub title: String,
    pub val: String,
    pub score: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IadlEntry {
    pub title: String,
    pub val: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let mut record = CaseRecord::default();
        record.take_care_plan.item_aa09.g = Some(true);
        record.basic_info.customer.set_registered_address(AddressParts {
            city: "臺南市".into(),
            ..AddressParts::default()
        });
        let json = serde_json::to_value(&record).unwrap();

        let plan = &json["takeCarePlan"];
        for key in ["Aintroduction", "AExecution", "AMemo", "AContact", "APlanItem", "CMSLevel", "bundledG", "isACareTaker"] {
            assert!(plan.get(key).is_some(), "missing {key}");
        }
        assert_eq!(plan["itemAA09"]["G"], true);
        assert!(plan["itemAA08"].get("G").is_none());
        assert!(json["evaluation"].get("ADLs").is_some());
        assert!(json["evaluation"].get("IADLs").is_some());
        assert_eq!(json["basicInfo"]["customer"]["registeredAddress_city"], "臺南市");
        assert!(json["basicInfo"]["applicationDate"].is_null());
    }

    #[test]
    fn test_contact_omits_personal_id() {
        let contact = Delegate {
            name: "陳小華".into(),
            ..Delegate::default()
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert!(json.get("personalId").is_none());
        assert_eq!(json["phoneH"], "");
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let entry = SignatureEntry {
            name: "林督導".into(),
            status: "核准".into(),
            date: NaiveDate::from_ymd_opt(2021, 5, 24),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"2021-05-24\""));
    }
}

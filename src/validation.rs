//! validation.rs
//!
//! The gate a document passes before its record is assembled. Checks run
//! in the order of [`CHECKS`] and the first failure is the one reported,
//! so a document with several problems always reports the same error.

use chrono::NaiveDate;
use tracing::debug;

use crate::anchors;
use crate::date::convert_roc_date;
use crate::error::ImportError;
use crate::national_id::NationalIdValidator;
use crate::segment::Segmentation;
use crate::stream::TokenStream;

/// The customer fields that must be present and well formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub gender: String,
    pub birthday: Option<NaiveDate>,
    pub personal_id: String,
}

impl Identity {
    pub fn read(stream: &TokenStream) -> Identity {
        Identity {
            // A colon cell sits between the name label and the name.
            name: stream.read_at(anchors::NAME, 2).to_string(),
            gender: stream.read_at(anchors::GENDER, 1).to_string(),
            birthday: convert_roc_date(stream.read_at(anchors::BIRTHDAY, 1)),
            personal_id: stream.read_at(anchors::PERSONAL_ID, 1).to_string(),
        }
    }
}

/// Everything the checks look at.
pub struct Evidence<'a> {
    pub stream: &'a TokenStream,
    pub note_marker_window: usize,
    /// Segmentation of the care and professional service table.
    pub service_block: &'a Segmentation,
    pub identity: &'a Identity,
    pub id_validator: &'a dyn NationalIdValidator,
}

pub type Check = fn(&Evidence<'_>) -> Result<(), ImportError>;

fn qualification_present(e: &Evidence<'_>) -> Result<(), ImportError> {
    if e.stream.contains(anchors::LONG_CARE_QUALIFICATION) {
        Ok(())
    } else {
        Err(ImportError::UnsupportedDocument)
    }
}

fn not_a_referral_note(e: &Evidence<'_>) -> Result<(), ImportError> {
    match e.stream.position(anchors::NOTE) {
        Some(i) if i < e.note_marker_window => Err(ImportError::WrongDocumentType),
        _ => Ok(()),
    }
}

fn service_block_bounded(e: &Evidence<'_>) -> Result<(), ImportError> {
    if e.service_block.malformed {
        Err(ImportError::MissingRequiredSection)
    } else {
        Ok(())
    }
}

fn name_present(e: &Evidence<'_>) -> Result<(), ImportError> {
    if e.identity.name.is_empty() {
        Err(ImportError::MissingName)
    } else {
        Ok(())
    }
}

fn gender_present(e: &Evidence<'_>) -> Result<(), ImportError> {
    if e.identity.gender.is_empty() {
        Err(ImportError::MissingGender)
    } else {
        Ok(())
    }
}

fn birthday_valid(e: &Evidence<'_>) -> Result<(), ImportError> {
    e.identity.birthday.map(|_| ()).ok_or(ImportError::InvalidBirthday)
}

fn personal_id_present(e: &Evidence<'_>) -> Result<(), ImportError> {
    if e.identity.personal_id.is_empty() {
        Err(ImportError::InvalidPersonalId)
    } else {
        Ok(())
    }
}

fn personal_id_checksum(e: &Evidence<'_>) -> Result<(), ImportError> {
    if e.id_validator.is_valid(&e.identity.personal_id) {
        Ok(())
    } else {
        Err(ImportError::InvalidPersonalId)
    }
}

/// The checks, in the order they run.
pub const CHECKS: [(&str, Check); 8] = [
    ("qualification", qualification_present),
    ("referral_note", not_a_referral_note),
    ("service_block", service_block_bounded),
    ("name", name_present),
    ("gender", gender_present),
    ("birthday", birthday_valid),
    ("personal_id", personal_id_present),
    ("personal_id_checksum", personal_id_checksum),
];

/// Runs every check in order and stops at the first failure.
///
/// # Returns
///
/// * `Ok(())` when the document may be assembled.
/// * `Err` with the error of the first check in [`CHECKS`] that failed.
pub fn validate(evidence: &Evidence<'_>) -> Result<(), ImportError> {
    for (name, check) in CHECKS {
        if let Err(err) = check(evidence) {
            debug!(check = name, error = %err, "document rejected");
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::national_id::TaiwanNationalId;

    struct Case {
        tokens: Vec<String>,
        malformed: bool,
    }

    impl Case {
        fn valid() -> Case {
            let tokens = [
                "評估量表", anchors::LONG_CARE_QUALIFICATION, "符合",
                anchors::NAME, "：", "蔡戴淑喜",
                anchors::GENDER, "女",
                anchors::BIRTHDAY, "030/07/15",
                anchors::PERSONAL_ID, "E200871506",
            ];
            Case {
                tokens: tokens.iter().map(|t| t.to_string()).collect(),
                malformed: false,
            }
        }

        fn set(mut self, label: &str, offset: usize, value: &str) -> Case {
            let i = self.tokens.iter().position(|t| t == label).unwrap();
            self.tokens[i + offset] = value.to_string();
            self
        }

        fn run(&self) -> Result<(), ImportError> {
            let stream = TokenStream::from_tokens(self.tokens.clone());
            let identity = Identity::read(&stream);
            let block = Segmentation {
                malformed: self.malformed,
                ..Segmentation::default()
            };
            validate(&Evidence {
                stream: &stream,
                note_marker_window: 10,
                service_block: &block,
                identity: &identity,
                id_validator: &TaiwanNationalId,
            })
        }
    }

    fn kind(case: &Case) -> Option<ErrorKind> {
        case.run().err().map(|e| e.kind())
    }

    #[test]
    fn test_valid_document_passes() {
        assert!(Case::valid().run().is_ok());
    }

    #[test]
    fn test_missing_qualification() {
        let case = Case::valid().set(anchors::LONG_CARE_QUALIFICATION, 0, "資格");
        assert_eq!(kind(&case), Some(ErrorKind::UnsupportedDocument));
    }

    #[test]
    fn test_referral_note_near_start() {
        let case = Case::valid().set("評估量表", 0, anchors::NOTE);
        assert_eq!(kind(&case), Some(ErrorKind::WrongDocumentType));
    }

    #[test]
    fn test_referral_note_far_from_start_is_fine() {
        let mut case = Case::valid();
        case.tokens.push(anchors::NOTE.to_string());
        assert!(case.run().is_ok());
    }

    #[test]
    fn test_malformed_service_block() {
        let mut case = Case::valid();
        case.malformed = true;
        assert_eq!(kind(&case), Some(ErrorKind::MissingRequiredSection));
    }

    #[test]
    fn test_individual_fields() {
        assert_eq!(kind(&Case::valid().set(anchors::NAME, 2, "")), Some(ErrorKind::MissingName));
        assert_eq!(kind(&Case::valid().set(anchors::GENDER, 1, "")), Some(ErrorKind::MissingGender));
        assert_eq!(
            kind(&Case::valid().set(anchors::BIRTHDAY, 1, "110/02/30")),
            Some(ErrorKind::InvalidBirthday)
        );
        assert_eq!(
            kind(&Case::valid().set(anchors::PERSONAL_ID, 1, "")),
            Some(ErrorKind::InvalidPersonalId)
        );
        assert_eq!(
            kind(&Case::valid().set(anchors::PERSONAL_ID, 1, "E200871507")),
            Some(ErrorKind::InvalidPersonalId)
        );
    }

    #[test]
    fn test_earliest_failure_wins() {
        let case = Case::valid()
            .set(anchors::GENDER, 1, "")
            .set(anchors::BIRTHDAY, 1, "bad")
            .set(anchors::NAME, 2, "");
        assert_eq!(kind(&case), Some(ErrorKind::MissingName));

        let mut case = Case::valid().set("評估量表", 0, anchors::NOTE).set(anchors::NAME, 2, "");
        case.malformed = true;
        assert_eq!(kind(&case), Some(ErrorKind::WrongDocumentType));

        let case = Case::valid()
            .set(anchors::LONG_CARE_QUALIFICATION, 0, "x")
            .set("評估量表", 0, anchors::NOTE);
        assert_eq!(kind(&case), Some(ErrorKind::UnsupportedDocument));
    }

    #[test]
    fn test_check_order_is_fixed() {
        let names: Vec<&str> = CHECKS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "qualification",
                "referral_note",
                "service_block",
                "name",
                "gender",
                "birthday",
                "personal_id",
                "personal_id_checksum"
            ]
        );
    }
}

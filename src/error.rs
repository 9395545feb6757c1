//! error.rs
//!
//! The single error type of the crate.

/// Everything that can stop an import.
///
/// The `Display` strings are shown to end users as-is, so they are part of
/// the contract and must not be reworded.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The long-care qualification label is missing.
    #[error("此檔案格式無法支援")]
    UnsupportedDocument,

    /// A referral note was uploaded instead of an assessment form.
    #[error("此檔案格式無法支援 (請提供照顧管理評估量表，而非照會單)")]
    WrongDocumentType,

    /// The care and professional service block could not be bounded.
    #[error("個案匯入/更新失敗, HTML內未包含規定內容")]
    MissingRequiredSection,

    #[error("個案姓名為空")]
    MissingName,

    #[error("個案性別為空")]
    MissingGender,

    #[error("個案生日格式有誤")]
    InvalidBirthday,

    /// Empty national ID, or one that fails the checksum.
    #[error("個案身份證字號格式有誤")]
    InvalidPersonalId,

    #[error("Quota parse error - {0}")]
    QuotaParse(String),

    /// Billed amounts too large to add up.
    #[error("Fee overflow - {0}")]
    FeeOverflow(String),

    /// Configuration text that does not deserialize.
    #[error("invalid parser configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Fieldless discriminant of [`ImportError`], for callers that branch on
/// the failure kind rather than on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedDocument,
    WrongDocumentType,
    MissingRequiredSection,
    MissingName,
    MissingGender,
    InvalidBirthday,
    InvalidPersonalId,
    QuotaParse,
    FeeOverflow,
    Config,
    Io,
}

impl ImportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImportError::UnsupportedDocument => ErrorKind::UnsupportedDocument,
            ImportError::WrongDocumentType => ErrorKind::WrongDocumentType,
            ImportError::MissingRequiredSection => ErrorKind::MissingRequiredSection,
            ImportError::MissingName => ErrorKind::MissingName,
            ImportError::MissingGender => ErrorKind::MissingGender,
            ImportError::InvalidBirthday => ErrorKind::InvalidBirthday,
            ImportError::InvalidPersonalId => ErrorKind::InvalidPersonalId,
            ImportError::QuotaParse(_) => ErrorKind::QuotaParse,
            ImportError::FeeOverflow(_) => ErrorKind::FeeOverflow,
            ImportError::Config(_) => ErrorKind::Config,
            ImportError::Io(_) => ErrorKind::Io,
        }
    }
}

use crate::domain::locale::Language;
use crate::ports::Severity;
use thiserror::Error;

/// Input errors found while validating a life span submission.
///
/// Every variant is recoverable by correcting the input and submitting again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("birth date is missing")]
    MissingBirthDate,

    #[error("life expectancy is missing")]
    MissingExpectancy,

    #[error("birth date is not a valid YYYY-MM-DD date")]
    InvalidBirthDate,

    #[error("birth date is in the future")]
    FutureBirthDate,

    #[error("life expectancy must be an integer between 1 and 500")]
    ExpectancyOutOfRange,

    #[error("life expectancy has already been exceeded")]
    LifeAlreadyExceeded,
}

impl ValidationError {
    /// How loudly the notifier should present this error.
    pub fn severity(&self) -> Severity {
        match self {
            ValidationError::MissingBirthDate => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// User-facing message in the given language.
    pub fn message(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (ValidationError::MissingBirthDate, Language::En) => "Please select your birthday.",
            (ValidationError::MissingBirthDate, Language::Ko) => "생년월일을 입력해주세요.",
            (ValidationError::MissingExpectancy, Language::En) => "Please select your life expectancy.",
            (ValidationError::MissingExpectancy, Language::Ko) => "수명을 입력해주세요.(수명 범위 1~500)",
            (ValidationError::InvalidBirthDate, Language::En) => "Birthday must be a date like 1990-05-17.",
            (ValidationError::InvalidBirthDate, Language::Ko) => "생년월일은 1990-05-17 형식으로 입력해주세요.",
            (ValidationError::FutureBirthDate, Language::En) => "Birthday cannot be in the future.",
            (ValidationError::FutureBirthDate, Language::Ko) => "오늘 이후 날짜를 생일로 입력할 수 없습니다.",
            (ValidationError::ExpectancyOutOfRange, Language::En) => {
                "Life expectancy must be between 1 and 500."
            }
            (ValidationError::ExpectancyOutOfRange, Language::Ko) => "수명은 1~500살 사이로 입력해주세요.",
            (ValidationError::LifeAlreadyExceeded, Language::En) => {
                "The life expectancy you entered has already been exceeded."
            }
            (ValidationError::LifeAlreadyExceeded, Language::Ko) => "입력한 수명이 이미 초과되었습니다.",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

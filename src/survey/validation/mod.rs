mod rules;

pub use rules::{age_on, looks_like_email, parse_birth_date};

use chrono::NaiveDate;
use tracing::debug;

use super::domain::SurveySubmission;

/// Rule kinds, in evaluation order. The display text is the notice shown to
/// the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationFailure {
    #[error("All personal details fields are required.")]
    MissingPersonalDetails,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Age must be between 5 and 120.")]
    InvalidAge,
    #[error("Please select at least one favorite food.")]
    NoFoodSelected,
    #[error("Please rate all statements.")]
    IncompleteRatings,
}

impl ValidationFailure {
    pub fn message(self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationFailure),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn failure(&self) -> Option<ValidationFailure> {
        match self {
            Self::Valid => None,
            Self::Invalid(failure) => Some(*failure),
        }
    }
}

impl From<Result<(), ValidationFailure>> for ValidationResult {
    fn from(value: Result<(), ValidationFailure>) -> Self {
        match value {
            Ok(()) => Self::Valid,
            Err(failure) => Self::Invalid(failure),
        }
    }
}

/// Youngest accepted respondent age, in whole years.
pub const MIN_AGE: i32 = 5;
/// Oldest accepted respondent age, in whole years.
pub const MAX_AGE: i32 = 120;

/// Stateless checker applying the ordered rule list to a submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    /// First failing rule wins; later rules are not evaluated.
    pub fn validate(&self, submission: &SurveySubmission, today: NaiveDate) -> ValidationResult {
        let result = self.check(submission, today);
        if let Err(failure) = result {
            debug!(rule = ?failure, "survey submission rejected by validation");
        }
        result.into()
    }

    fn check(
        &self,
        submission: &SurveySubmission,
        today: NaiveDate,
    ) -> Result<(), ValidationFailure> {
        rules::required_fields(submission)?;
        rules::email_format(submission)?;
        rules::age_window(submission, today)?;
        rules::food_selected(submission)?;
        rules::ratings_complete(submission)
    }
}

pub fn validate(submission: &SurveySubmission, today: NaiveDate) -> ValidationResult {
    ValidationEngine.validate(submission, today)
}

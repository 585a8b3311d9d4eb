//! Lifestyle survey: form state, validation, submission, and results.

pub mod client;
pub mod controller;
pub mod domain;
pub mod foods;
pub mod form;
pub mod ratings;
pub mod results;
pub mod validation;

#[cfg(test)]
mod tests;

pub use client::{ApiError, HttpSurveyApi, SubmitReceipt, SurveyApi};
pub use controller::{Notice, SubmissionController, SubmissionState, SubmitOutcome};
pub use domain::{
    FoodOption, LikertQuestion, LikertScale, PersonalDetails, SurveySubmission, UnknownOption,
};
pub use foods::FoodSelectionSet;
pub use form::{PersonalField, SurveyFormModel};
pub use ratings::LikertAnswerMap;
pub use results::{ResultsAggregateView, ResultsState, StatRow, SurveyAggregateStats};
pub use validation::{validate, ValidationEngine, ValidationFailure, ValidationResult};

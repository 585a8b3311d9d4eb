use chrono::NaiveDate;

use super::domain::{FoodOption, LikertQuestion, LikertScale, PersonalDetails, SurveySubmission};
use super::foods::FoodSelectionSet;
use super::ratings::LikertAnswerMap;
use super::validation::parse_birth_date;

/// Text inputs on the personal-details section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullNames,
    Email,
    DateOfBirth,
    ContactNumber,
}

/// In-progress survey state for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyFormModel {
    personal: PersonalDetails,
    foods: FoodSelectionSet,
    ratings: LikertAnswerMap,
}

impl SurveyFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn personal(&self) -> &PersonalDetails {
        &self.personal
    }

    pub fn foods(&self) -> &FoodSelectionSet {
        &self.foods
    }

    pub fn ratings(&self) -> &LikertAnswerMap {
        &self.ratings
    }

    pub fn set_field(&mut self, field: PersonalField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PersonalField::FullNames => self.personal.full_names = value,
            PersonalField::Email => self.personal.email = value,
            PersonalField::DateOfBirth => self.personal.date_of_birth = value,
            PersonalField::ContactNumber => self.personal.contact_number = value,
        }
    }

    pub fn toggle_food(&mut self, item: FoodOption) {
        self.foods.toggle(item);
    }

    pub fn set_rating(&mut self, question: LikertQuestion, value: LikertScale) {
        self.ratings.set_rating(question, value);
    }

    /// Apply the date picker's result. `None` means the picker was dismissed
    /// and the current value is kept.
    pub fn apply_date_pick(&mut self, picked: Option<NaiveDate>) {
        if let Some(date) = picked {
            self.personal.date_of_birth = date.format("%Y-%m-%d").to_string();
        }
    }

    /// Initial value to open the date picker on.
    pub fn date_picker_seed(&self, today: NaiveDate) -> NaiveDate {
        parse_birth_date(&self.personal.date_of_birth).unwrap_or(today)
    }

    pub fn snapshot(&self) -> SurveySubmission {
        SurveySubmission {
            personal: self.personal.clone(),
            selected_foods: self.foods.as_list().to_vec(),
            ratings: self.ratings.as_map().clone(),
        }
    }

    /// Back to a blank form after a successful submission.
    pub fn reset(&mut self) {
        self.personal = PersonalDetails::default();
        self.foods.clear();
        self.ratings.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.personal == PersonalDetails::default()
            && self.foods.is_empty()
            && self.ratings.is_empty()
    }
}

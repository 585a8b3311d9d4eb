use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Favourite-food choices offered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FoodOption {
    Pizza,
    Pasta,
    #[serde(rename = "Pap and Wors")]
    PapAndWors,
    Other,
}

impl FoodOption {
    pub const ALL: [Self; 4] = [Self::Pizza, Self::Pasta, Self::PapAndWors, Self::Other];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pizza => "Pizza",
            Self::Pasta => "Pasta",
            Self::PapAndWors => "Pap and Wors",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FoodOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FoodOption {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == value)
            .ok_or_else(|| UnknownOption::Food(value.to_string()))
    }
}

/// Statements rated on the agreement scale, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LikertQuestion {
    #[serde(rename = "I like to watch movies")]
    WatchMovies,
    #[serde(rename = "I like to listen to radio")]
    ListenRadio,
    #[serde(rename = "I like to eat out")]
    EatOut,
    #[serde(rename = "I like to watch TV")]
    WatchTv,
}

impl LikertQuestion {
    pub const ALL: [Self; 4] = [
        Self::WatchMovies,
        Self::ListenRadio,
        Self::EatOut,
        Self::WatchTv,
    ];

    pub const fn statement(self) -> &'static str {
        match self {
            Self::WatchMovies => "I like to watch movies",
            Self::ListenRadio => "I like to listen to radio",
            Self::EatOut => "I like to eat out",
            Self::WatchTv => "I like to watch TV",
        }
    }
}

impl fmt::Display for LikertQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.statement())
    }
}

impl FromStr for LikertQuestion {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|question| question.statement() == value)
            .ok_or_else(|| UnknownOption::Question(value.to_string()))
    }
}

/// Five-point agreement scale. Serialized as its code ("1".."5").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LikertScale {
    #[serde(rename = "1")]
    StronglyAgree,
    #[serde(rename = "2")]
    Agree,
    #[serde(rename = "3")]
    Neutral,
    #[serde(rename = "4")]
    Disagree,
    #[serde(rename = "5")]
    StronglyDisagree,
}

impl LikertScale {
    pub const ALL: [Self; 5] = [
        Self::StronglyAgree,
        Self::Agree,
        Self::Neutral,
        Self::Disagree,
        Self::StronglyDisagree,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::StronglyAgree => "1",
            Self::Agree => "2",
            Self::Neutral => "3",
            Self::Disagree => "4",
            Self::StronglyDisagree => "5",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglyAgree => "Strongly Agree",
            Self::Agree => "Agree",
            Self::Neutral => "Neutral",
            Self::Disagree => "Disagree",
            Self::StronglyDisagree => "Strongly Disagree",
        }
    }
}

impl FromStr for LikertScale {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scale| scale.code() == value.trim())
            .ok_or_else(|| UnknownOption::ScaleCode(value.to_string()))
    }
}

/// Raised when free text does not name one of the fixed survey choices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownOption {
    #[error("'{0}' is not one of the offered food options")]
    Food(String),
    #[error("'{0}' is not one of the rated statements")]
    Question(String),
    #[error("'{0}' is not a scale code between 1 and 5")]
    ScaleCode(String),
}

/// Respondent contact fields exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub full_names: String,
    pub email: String,
    /// ISO `YYYY-MM-DD`; empty until a date has been picked.
    pub date_of_birth: String,
    pub contact_number: String,
}

impl PersonalDetails {
    pub fn has_blank_field(&self) -> bool {
        [
            &self.full_names,
            &self.email,
            &self.date_of_birth,
            &self.contact_number,
        ]
        .iter()
        .any(|value| value.is_empty())
    }
}

/// Snapshot of the form taken for one submit attempt. Serializes to the
/// `POST /api/submit` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    #[serde(flatten)]
    pub personal: PersonalDetails,
    pub selected_foods: Vec<FoodOption>,
    pub ratings: BTreeMap<LikertQuestion, LikertScale>,
}

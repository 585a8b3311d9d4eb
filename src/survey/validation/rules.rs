use chrono::{Datelike, NaiveDate};

use super::super::domain::{LikertQuestion, SurveySubmission};
use super::{ValidationFailure, MAX_AGE, MIN_AGE};

pub(crate) fn required_fields(submission: &SurveySubmission) -> Result<(), ValidationFailure> {
    if submission.personal.has_blank_field() {
        return Err(ValidationFailure::MissingPersonalDetails);
    }
    Ok(())
}

pub(crate) fn email_format(submission: &SurveySubmission) -> Result<(), ValidationFailure> {
    if looks_like_email(&submission.personal.email) {
        Ok(())
    } else {
        Err(ValidationFailure::InvalidEmail)
    }
}

pub(crate) fn age_window(
    submission: &SurveySubmission,
    today: NaiveDate,
) -> Result<(), ValidationFailure> {
    let birth =
        parse_birth_date(&submission.personal.date_of_birth).ok_or(ValidationFailure::InvalidAge)?;
    let age = age_on(birth, today);
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(())
    } else {
        Err(ValidationFailure::InvalidAge)
    }
}

pub(crate) fn food_selected(submission: &SurveySubmission) -> Result<(), ValidationFailure> {
    if submission.selected_foods.is_empty() {
        return Err(ValidationFailure::NoFoodSelected);
    }
    Ok(())
}

pub(crate) fn ratings_complete(submission: &SurveySubmission) -> Result<(), ValidationFailure> {
    let complete = LikertQuestion::ALL
        .iter()
        .all(|question| submission.ratings.contains_key(question));
    if complete {
        Ok(())
    } else {
        Err(ValidationFailure::IncompleteRatings)
    }
}

/// `local@domain.tld` shape: exactly one `@`, no whitespace, and a dot inside
/// the domain with at least one character on each side.
pub fn looks_like_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let inner = match (domain.chars().next(), domain.chars().last()) {
        (Some(first), Some(last)) if domain.len() > first.len_utf8() + last.len_utf8() => {
            &domain[first.len_utf8()..domain.len() - last.len_utf8()]
        }
        _ => return false,
    };
    inner.contains('.')
}

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Whole years between `birth` and `today`. The birthday counts on the day
/// itself.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let naive = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        naive - 1
    } else {
        naive
    }
}

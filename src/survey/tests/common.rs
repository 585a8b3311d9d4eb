use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;
use tokio::sync::oneshot;

use crate::survey::client::{ApiError, SubmitReceipt, SurveyApi};
use crate::survey::domain::{
    FoodOption, LikertQuestion, LikertScale, PersonalDetails, SurveySubmission,
};
use crate::survey::form::{PersonalField, SurveyFormModel};
use crate::survey::results::SurveyAggregateStats;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2024, 6, 1)
}

pub(super) fn valid_submission() -> SurveySubmission {
    let ratings = LikertQuestion::ALL
        .into_iter()
        .map(|question| (question, LikertScale::StronglyAgree))
        .collect::<BTreeMap<_, _>>();

    SurveySubmission {
        personal: PersonalDetails {
            full_names: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            date_of_birth: "2010-01-01".to_string(),
            contact_number: "0123456789".to_string(),
        },
        selected_foods: vec![FoodOption::Pizza],
        ratings,
    }
}

pub(super) fn submission_born(date_of_birth: &str) -> SurveySubmission {
    let mut submission = valid_submission();
    submission.personal.date_of_birth = date_of_birth.to_string();
    submission
}

pub(super) fn filled_form() -> SurveyFormModel {
    let mut form = SurveyFormModel::new();
    form.set_field(PersonalField::FullNames, "Jane Doe");
    form.set_field(PersonalField::Email, "jane@x.com");
    form.set_field(PersonalField::ContactNumber, "0123456789");
    form.apply_date_pick(Some(date(2010, 1, 1)));
    form.toggle_food(FoodOption::Pizza);
    for question in LikertQuestion::ALL {
        form.set_rating(question, LikertScale::StronglyAgree);
    }
    form
}

/// Scripted endpoint double. An optional gate holds the first submit open
/// until the test releases it.
pub(super) struct StubApi {
    submit_reply: Result<SubmitReceipt, ApiError>,
    results_reply: Result<Option<SurveyAggregateStats>, ApiError>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    submit_calls: AtomicUsize,
    results_calls: AtomicUsize,
    last_submission: Mutex<Option<SurveySubmission>>,
}

impl StubApi {
    fn with_replies(
        submit_reply: Result<SubmitReceipt, ApiError>,
        results_reply: Result<Option<SurveyAggregateStats>, ApiError>,
    ) -> Self {
        Self {
            submit_reply,
            results_reply,
            gate: Mutex::new(None),
            submit_calls: AtomicUsize::new(0),
            results_calls: AtomicUsize::new(0),
            last_submission: Mutex::new(None),
        }
    }

    pub(super) fn accepting(message: Option<&str>) -> Self {
        Self::with_replies(
            Ok(SubmitReceipt {
                message: message.map(str::to_string),
            }),
            Ok(None),
        )
    }

    pub(super) fn refusing(error: ApiError) -> Self {
        Self::with_replies(Err(error.clone()), Err(error))
    }

    pub(super) fn serving(stats: Option<SurveyAggregateStats>) -> Self {
        Self::with_replies(Ok(SubmitReceipt::default()), Ok(stats))
    }

    pub(super) fn gated(self, gate: oneshot::Receiver<()>) -> Self {
        *self.gate.lock().expect("gate mutex poisoned") = Some(gate);
        self
    }

    pub(super) fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub(super) fn results_calls(&self) -> usize {
        self.results_calls.load(Ordering::SeqCst)
    }

    pub(super) fn last_submission(&self) -> Option<SurveySubmission> {
        self.last_submission
            .lock()
            .expect("submission mutex poisoned")
            .clone()
    }

    async fn wait_for_gate(&self) {
        let gate = self.gate.lock().expect("gate mutex poisoned").take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

impl SurveyApi for StubApi {
    async fn submit_survey(
        &self,
        submission: &SurveySubmission,
    ) -> Result<SubmitReceipt, ApiError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_submission
            .lock()
            .expect("submission mutex poisoned") = Some(submission.clone());
        self.wait_for_gate().await;
        self.submit_reply.clone()
    }

    async fn fetch_results(&self) -> Result<Option<SurveyAggregateStats>, ApiError> {
        self.results_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        self.results_reply.clone()
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::client::SurveyApi;
use super::form::SurveyFormModel;
use super::validation::{ValidationEngine, ValidationFailure, ValidationResult};

pub const SUCCESS_FALLBACK_MESSAGE: &str = "Survey submitted successfully!";
pub const FAILURE_FALLBACK_MESSAGE: &str = "Failed to submit survey. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

impl SubmissionState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "SUBMIT",
            Self::Submitting => "SUBMITTING...",
        }
    }

    pub const fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Blocking message for the respondent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

/// How one `submit` call resolved. The controller is back in `Idle` for every
/// variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A rule failed; nothing was sent and the form is untouched.
    Rejected(ValidationFailure),
    /// Server accepted the survey; the form has been cleared.
    Submitted { message: String },
    /// Transport or server failure; the form is kept for a manual retry.
    Failed { message: String },
    /// Another submission was already in flight; this call did nothing.
    AlreadySubmitting,
    /// The session was torn down; the response (if any) was ignored.
    Discarded,
}

impl SubmitOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Rejected(failure) => Some(Notice {
                title: "Validation Error",
                message: failure.message(),
            }),
            SubmitOutcome::Submitted { message } => Some(Notice {
                title: "Success",
                message: message.clone(),
            }),
            SubmitOutcome::Failed { message } => Some(Notice {
                title: "Error",
                message: message.clone(),
            }),
            SubmitOutcome::AlreadySubmitting | SubmitOutcome::Discarded => None,
        }
    }
}

/// Clears the in-flight flag on every exit path, including a dropped future.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns the form for one survey session and drives submit attempts against
/// the remote endpoint, at most one at a time.
pub struct SubmissionController<A> {
    api: Arc<A>,
    form: Mutex<SurveyFormModel>,
    engine: ValidationEngine,
    submitting: AtomicBool,
    active: AtomicBool,
}

impl<A> SubmissionController<A>
where
    A: SurveyApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self::with_form(api, SurveyFormModel::new())
    }

    pub fn with_form(api: Arc<A>, form: SurveyFormModel) -> Self {
        Self {
            api,
            form: Mutex::new(form),
            engine: ValidationEngine,
            submitting: AtomicBool::new(false),
            active: AtomicBool::new(true),
        }
    }

    pub fn state(&self) -> SubmissionState {
        if self.submitting.load(Ordering::Acquire) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    /// Apply an edit to the form.
    pub fn edit<R>(&self, apply: impl FnOnce(&mut SurveyFormModel) -> R) -> R {
        apply(&mut self.lock_form())
    }

    pub fn form(&self) -> SurveyFormModel {
        self.lock_form().clone()
    }

    pub async fn submit(&self, today: NaiveDate) -> SubmitOutcome {
        if !self.active.load(Ordering::Acquire) {
            return SubmitOutcome::Discarded;
        }
        if self.submitting.load(Ordering::Acquire) {
            debug!("submission already in flight; ignoring submit");
            return SubmitOutcome::AlreadySubmitting;
        }

        let submission = self.lock_form().snapshot();
        if let ValidationResult::Invalid(failure) = self.engine.validate(&submission, today) {
            return SubmitOutcome::Rejected(failure);
        }

        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("submission already in flight; ignoring submit");
            return SubmitOutcome::AlreadySubmitting;
        }
        let _in_flight = InFlight(&self.submitting);

        info!(foods = submission.selected_foods.len(), "submitting survey");
        let result = self.api.submit_survey(&submission).await;

        if !self.active.load(Ordering::Acquire) {
            debug!("survey session torn down before the response arrived; discarding");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(receipt) => {
                self.lock_form().reset();
                let message = receipt
                    .message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| SUCCESS_FALLBACK_MESSAGE.to_string());
                info!("survey submitted");
                SubmitOutcome::Submitted { message }
            }
            Err(err) => {
                warn!(error = %err, "survey submission failed");
                let message = err
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| FAILURE_FALLBACK_MESSAGE.to_string());
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// End the session. Responses still in flight will not touch the form.
    pub fn teardown(&self) {
        self.active.store(false, Ordering::Release);
    }

    fn lock_form(&self) -> MutexGuard<'_, SurveyFormModel> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

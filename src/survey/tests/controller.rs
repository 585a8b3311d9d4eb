use super::common::*;
use std::sync::Arc;
use tokio::sync::oneshot;

use crate::survey::client::ApiError;
use crate::survey::controller::{
    Notice, SubmissionController, SubmissionState, SubmitOutcome, FAILURE_FALLBACK_MESSAGE,
    SUCCESS_FALLBACK_MESSAGE,
};
use crate::survey::domain::{FoodOption, LikertQuestion, LikertScale};
use crate::survey::form::{PersonalField, SurveyFormModel};
use crate::survey::validation::ValidationFailure;

#[tokio::test]
async fn invalid_form_never_reaches_the_network() {
    let api = Arc::new(StubApi::accepting(None));
    let mut form = filled_form();
    form.set_field(PersonalField::Email, "not-an-email");
    let controller = SubmissionController::with_form(api.clone(), form.clone());

    let outcome = controller.submit(today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationFailure::InvalidEmail)
    );
    assert_eq!(
        outcome.notice(),
        Some(Notice {
            title: "Validation Error",
            message: "Please enter a valid email address.".to_string(),
        })
    );
    assert_eq!(api.submit_calls(), 0);
    assert_eq!(controller.form(), form);
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn success_resets_the_form_and_uses_server_message() {
    let api = Arc::new(StubApi::accepting(Some("Survey saved")));
    let controller = SubmissionController::with_form(api.clone(), filled_form());

    let outcome = controller.submit(today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Submitted {
            message: "Survey saved".to_string()
        }
    );
    assert_eq!(outcome.notice().map(|notice| notice.title), Some("Success"));
    assert_eq!(api.submit_calls(), 1);
    assert!(controller.form().is_blank());
    assert_eq!(controller.state(), SubmissionState::Idle);

    let sent = api.last_submission().expect("submission recorded");
    assert_eq!(sent.personal.full_names, "Jane Doe");
    assert_eq!(sent.selected_foods, vec![FoodOption::Pizza]);
    assert_eq!(sent.ratings.len(), 4);
}

#[tokio::test]
async fn success_without_message_uses_fallback() {
    let api = Arc::new(StubApi::accepting(None));
    let controller = SubmissionController::with_form(api, filled_form());

    let outcome = controller.submit(today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Submitted {
            message: SUCCESS_FALLBACK_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn server_error_keeps_form_and_surfaces_message() {
    let api = Arc::new(StubApi::refusing(ApiError::Status {
        status: 409,
        message: Some("Email already used".to_string()),
    }));
    let controller = SubmissionController::with_form(api.clone(), filled_form());

    let outcome = controller.submit(today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "Email already used".to_string()
        }
    );
    assert_eq!(outcome.notice().map(|notice| notice.title), Some("Error"));
    assert_eq!(controller.form(), filled_form());
    assert_eq!(controller.state(), SubmissionState::Idle);

    // Retry is manual and sends again.
    controller.submit(today()).await;
    assert_eq!(api.submit_calls(), 2);
}

#[tokio::test]
async fn transport_error_uses_generic_message() {
    let api = Arc::new(StubApi::refusing(ApiError::Transport(
        "connection refused".to_string(),
    )));
    let controller = SubmissionController::with_form(api, filled_form());

    let outcome = controller.submit(today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: FAILURE_FALLBACK_MESSAGE.to_string()
        }
    );
    assert!(!controller.form().is_blank());
}

#[tokio::test]
async fn second_submit_while_in_flight_is_ignored() {
    let (release, gate) = oneshot::channel();
    let api = Arc::new(StubApi::accepting(Some("ok")).gated(gate));
    let controller = SubmissionController::with_form(api.clone(), filled_form());

    let (first, second, ()) = tokio::join!(
        controller.submit(today()),
        controller.submit(today()),
        async {
            assert_eq!(controller.state(), SubmissionState::Submitting);
            assert_eq!(controller.state().label(), "SUBMITTING...");
            let _ = release.send(());
        }
    );

    assert_eq!(
        first,
        SubmitOutcome::Submitted {
            message: "ok".to_string()
        }
    );
    assert_eq!(second, SubmitOutcome::AlreadySubmitting);
    assert_eq!(second.notice(), None);
    assert_eq!(api.submit_calls(), 1);
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.state().label(), "SUBMIT");
}

#[tokio::test]
async fn dropped_attempt_clears_the_in_flight_flag() {
    let (_release, gate) = oneshot::channel::<()>();
    let api = Arc::new(StubApi::accepting(None).gated(gate));
    let controller = SubmissionController::with_form(api.clone(), filled_form());

    tokio::select! {
        biased;
        _ = controller.submit(today()) => panic!("gated submit cannot finish"),
        _ = async {} => {}
    }

    assert_eq!(api.submit_calls(), 1);
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.form(), filled_form());
}

#[tokio::test]
async fn response_after_teardown_is_discarded() {
    let (release, gate) = oneshot::channel();
    let api = Arc::new(StubApi::accepting(Some("ok")).gated(gate));
    let controller = SubmissionController::with_form(api.clone(), filled_form());

    let (outcome, ()) = tokio::join!(controller.submit(today()), async {
        controller.teardown();
        let _ = release.send(());
    });

    assert_eq!(outcome, SubmitOutcome::Discarded);
    assert_eq!(controller.form(), filled_form());
    assert_eq!(controller.state(), SubmissionState::Idle);

    assert_eq!(controller.submit(today()).await, SubmitOutcome::Discarded);
    assert_eq!(api.submit_calls(), 1);
}

#[tokio::test]
async fn edits_flow_into_the_next_submission() {
    let api = Arc::new(StubApi::accepting(None));
    let controller = SubmissionController::new(api.clone());

    let outcome = controller.submit(today()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationFailure::MissingPersonalDetails)
    );

    controller.edit(|form: &mut SurveyFormModel| {
        *form = filled_form();
        form.toggle_food(FoodOption::Pizza);
    });
    assert_eq!(
        controller.submit(today()).await,
        SubmitOutcome::Rejected(ValidationFailure::NoFoodSelected)
    );

    controller.edit(|form| {
        form.toggle_food(FoodOption::PapAndWors);
        form.set_rating(LikertQuestion::EatOut, LikertScale::Disagree);
    });
    assert!(matches!(
        controller.submit(today()).await,
        SubmitOutcome::Submitted { .. }
    ));

    let sent = api.last_submission().expect("submission recorded");
    assert_eq!(sent.selected_foods, vec![FoodOption::PapAndWors]);
    assert_eq!(
        sent.ratings.get(&LikertQuestion::EatOut),
        Some(&LikertScale::Disagree)
    );
}

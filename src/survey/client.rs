//! HTTP collaborator that stores submissions and serves aggregate statistics.

use std::future::Future;

use serde::Deserialize;
use tracing::{debug, warn};

use super::domain::SurveySubmission;
use super::results::SurveyAggregateStats;
use crate::config::ApiConfig;

/// Acknowledgement for an accepted submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub message: Option<String>,
}

/// Remote endpoint contract. Implemented over HTTP by [`HttpSurveyApi`] and by
/// in-memory doubles in tests.
pub trait SurveyApi: Send + Sync {
    /// `POST /api/submit`.
    fn submit_survey(
        &self,
        submission: &SurveySubmission,
    ) -> impl Future<Output = Result<SubmitReceipt, ApiError>> + Send;

    /// `GET /api/results`. `Ok(None)` when the server answered with `null`.
    fn fetch_results(
        &self,
    ) -> impl Future<Output = Result<Option<SurveyAggregateStats>, ApiError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the server in an error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

/// Pull a non-empty `message` string out of a JSON body; anything else is ignored.
fn message_from_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<MessageBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
}

/// `reqwest`-backed client for the survey endpoint.
#[derive(Debug, Clone)]
pub struct HttpSurveyApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpSurveyApi {
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("lifestyle-survey/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }
}

impl SurveyApi for HttpSurveyApi {
    async fn submit_survey(
        &self,
        submission: &SurveySubmission,
    ) -> Result<SubmitReceipt, ApiError> {
        let url = self.config.submit_url();
        debug!(%url, foods = submission.selected_foods.len(), "posting survey submission");

        let response = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let message = message_from_body(&body);

        if !status.is_success() {
            warn!(status = status.as_u16(), "survey submission refused by server");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(SubmitReceipt { message })
    }

    async fn fetch_results(&self) -> Result<Option<SurveyAggregateStats>, ApiError> {
        let url = self.config.results_url();
        debug!(%url, "requesting survey results");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: message_from_body(&body),
            });
        }

        let payload = serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(SurveyAggregateStats::from_payload(payload))
    }
}

pub mod config;
pub mod error;
pub mod survey;
pub mod telemetry;

use config::AppConfig;
use error::AppError;
use survey::HttpSurveyApi;
use tracing::info;

/// Load configuration, install logging, and build the HTTP client the
/// survey screens talk to.
pub fn bootstrap() -> Result<(AppConfig, HttpSurveyApi), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let api = HttpSurveyApi::new(config.api.clone())?;
    info!(
        environment = ?config.environment,
        endpoint = %config.api.base_url,
        "survey client ready"
    );

    Ok((config, api))
}

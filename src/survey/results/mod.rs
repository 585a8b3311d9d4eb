mod stats;
pub mod views;

pub use stats::SurveyAggregateStats;
pub use views::{stat_rows, StatRow, NO_PERCENTAGE_PLACEHOLDER, NO_SURVEYS_PLACEHOLDER};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

use super::client::SurveyApi;

pub const LOADING_MESSAGE: &str = "Loading results...";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch survey results.";
pub const NO_DATA_MESSAGE: &str = "No data available.";

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    Loading,
    Loaded(SurveyAggregateStats),
    Failed(String),
}

impl ResultsState {
    /// Status line for the non-table states.
    pub fn message(&self) -> Option<&str> {
        match self {
            ResultsState::Loading => Some(LOADING_MESSAGE),
            ResultsState::Loaded(_) => None,
            ResultsState::Failed(message) => Some(message.as_str()),
        }
    }
}

/// Results screen state for one mount: a single fetch, no retries.
#[derive(Debug)]
pub struct ResultsAggregateView {
    state: Mutex<ResultsState>,
    requested: AtomicBool,
    mounted: AtomicBool,
}

impl Default for ResultsAggregateView {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsAggregateView {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ResultsState::Loading),
            requested: AtomicBool::new(false),
            mounted: AtomicBool::new(true),
        }
    }

    pub fn state(&self) -> ResultsState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Issue the mount-time request. Later calls, and any call after
    /// `unmount`, return the current state without touching the network.
    pub async fn load<A: SurveyApi>(&self, api: &A) -> ResultsState {
        if !self.is_mounted() || self.requested.swap(true, Ordering::AcqRel) {
            return self.state();
        }

        let outcome = api.fetch_results().await;

        if !self.mounted.load(Ordering::Acquire) {
            debug!("results view unmounted before the response arrived; discarding");
            return self.state();
        }

        let next = match outcome {
            Ok(Some(stats)) => {
                info!(total = ?stats.total, "survey results loaded");
                ResultsState::Loaded(stats)
            }
            Ok(None) => ResultsState::Failed(NO_DATA_MESSAGE.to_string()),
            Err(err) => {
                warn!(error = %err, "unable to fetch survey results");
                ResultsState::Failed(FETCH_FAILED_MESSAGE.to_string())
            }
        };

        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next.clone();
        next
    }

    /// Rows to render once loaded.
    pub fn rows(&self) -> Option<Vec<StatRow>> {
        match &*self.state.lock().unwrap_or_else(PoisonError::into_inner) {
            ResultsState::Loaded(stats) => Some(stat_rows(stats)),
            _ => None,
        }
    }

    /// Screen torn down; a response still in flight will be ignored.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }
}

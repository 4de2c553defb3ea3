//! Driving port for practice statistics.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{Error, GoalProgressReport, PracticeStats};

/// Request for statistics over a trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeStatsRequest {
    pub window_days: u32,
}

impl PracticeStatsRequest {
    pub const DEFAULT_WINDOW_DAYS: u32 = 30;
    pub const MAX_WINDOW_DAYS: u32 = crate::domain::stats::MAX_WINDOW_DAYS;

    /// Accepts windows of `1..=MAX_WINDOW_DAYS` days.
    ///
    /// Rejections carry the `details.issues` list used by every request
    /// validation failure, with a single `out_of_range` issue on `days`.
    pub fn validate(self) -> Result<Self, Error> {
        if (1..=Self::MAX_WINDOW_DAYS).contains(&self.window_days) {
            return Ok(self);
        }
        let message = format!(
            "days must be between 1 and {} (got {})",
            Self::MAX_WINDOW_DAYS,
            self.window_days
        );
        Err(
            Error::invalid_request("request validation failed").with_details(json!({
                "issues": [{ "field": "days", "code": "out_of_range", "message": message }]
            })),
        )
    }
}

impl Default for PracticeStatsRequest {
    fn default() -> Self {
        Self {
            window_days: Self::DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Statistics snapshot plus goal progress.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeStatsResponse {
    pub stats: PracticeStats,
    pub goal_progress: GoalProgressReport,
}

/// Driving port for statistics reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PracticeStatsQuery: Send + Sync {
    /// Computes statistics as of the current local time.
    async fn get_stats(
        &self,
        request: PracticeStatsRequest,
    ) -> Result<PracticeStatsResponse, Error>;
}

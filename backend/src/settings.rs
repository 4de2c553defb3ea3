//! Runtime settings loaded via OrthoConfig.
//!
//! Both structs read the `PRACTICE_` environment prefix, CLI flags and
//! configuration files. Unset values fall back to the documented defaults
//! through the accessor methods.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{GoalTargets, PracticeValidationError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRACTICE")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Initial daily goal in minutes.
    pub daily_minutes: Option<i64>,
    /// Initial weekly goal in minutes.
    pub weekly_minutes: Option<i64>,
    /// Initial monthly goal in minutes.
    pub monthly_minutes: Option<i64>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Goal targets seeded into the goals repository at startup.
    ///
    /// # Errors
    ///
    /// Returns an error when a configured target is not a positive number of
    /// minutes.
    pub fn goal_targets(&self) -> Result<GoalTargets, PracticeValidationError> {
        GoalTargets::new(
            self.daily_minutes
                .unwrap_or(i64::from(GoalTargets::DEFAULT_DAILY_MINUTES)),
            self.weekly_minutes
                .unwrap_or(i64::from(GoalTargets::DEFAULT_WEEKLY_MINUTES)),
            self.monthly_minutes
                .unwrap_or(i64::from(GoalTargets::DEFAULT_MONTHLY_MINUTES)),
        )
    }
}

/// Settings for the interactive timer client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRACTICE")]
pub struct TimerSettings {
    /// Base URL of the practice tracker API.
    pub api_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl TimerSettings {
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

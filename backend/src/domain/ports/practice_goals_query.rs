//! Driving port for reading practice goals.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, GoalTargets, PracticeGoals};

use super::practice_goals_command::PracticeGoalsPayload;

/// Response carrying the current goals record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPracticeGoalsResponse {
    pub goals: PracticeGoalsPayload,
}

/// Driving port for goals read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PracticeGoalsQuery: Send + Sync {
    /// Returns the current goals record.
    async fn get_goals(&self) -> Result<GetPracticeGoalsResponse, Error>;
}

/// Fixture query implementation returning the default targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePracticeGoalsQuery;

#[async_trait]
impl PracticeGoalsQuery for FixturePracticeGoalsQuery {
    async fn get_goals(&self) -> Result<GetPracticeGoalsResponse, Error> {
        Ok(GetPracticeGoalsResponse {
            goals: PracticeGoals::new(uuid::Uuid::nil(), GoalTargets::default()).into(),
        })
    }
}

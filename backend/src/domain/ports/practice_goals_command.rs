//! Driving port for replacing practice goals.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, GoalTargets, PracticeGoals};

/// Serializable goals payload for driving ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeGoalsPayload {
    pub id: Uuid,
    pub daily_minutes: u32,
    pub weekly_minutes: u32,
    pub monthly_minutes: u32,
}

impl From<PracticeGoals> for PracticeGoalsPayload {
    fn from(value: PracticeGoals) -> Self {
        let targets = value.targets();
        Self {
            id: value.id(),
            daily_minutes: targets.daily_minutes(),
            weekly_minutes: targets.weekly_minutes(),
            monthly_minutes: targets.monthly_minutes(),
        }
    }
}

/// Request to replace every goal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacePracticeGoalsRequest {
    pub targets: GoalTargets,
}

/// Response carrying the stored goals record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacePracticeGoalsResponse {
    pub goals: PracticeGoalsPayload,
}

/// Driving port for goals write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PracticeGoalsCommand: Send + Sync {
    /// Replaces the goals record; the stored record receives a fresh id.
    async fn replace_goals(
        &self,
        request: ReplacePracticeGoalsRequest,
    ) -> Result<ReplacePracticeGoalsResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePracticeGoalsCommand;

#[async_trait]
impl PracticeGoalsCommand for FixturePracticeGoalsCommand {
    async fn replace_goals(
        &self,
        request: ReplacePracticeGoalsRequest,
    ) -> Result<ReplacePracticeGoalsResponse, Error> {
        Ok(ReplacePracticeGoalsResponse {
            goals: PracticeGoals::with_fresh_id(request.targets).into(),
        })
    }
}

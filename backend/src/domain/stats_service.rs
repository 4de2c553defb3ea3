//! Statistics domain service.
//!
//! Reads the full session list and goals record, then runs the pure
//! aggregator against the clock's local time.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::goals_service::map_goals_repository_error;
use crate::domain::ports::{
    PracticeGoalsRepository, PracticeSessionRepository, PracticeStatsQuery, PracticeStatsRequest,
    PracticeStatsResponse,
};
use crate::domain::practice_session_service::map_session_repository_error;
use crate::domain::{Error, compute_goal_progress, compute_practice_stats};

/// Statistics service implementing [`PracticeStatsQuery`].
#[derive(Clone)]
pub struct PracticeStatsService<S, G> {
    session_repo: Arc<S>,
    goals_repo: Arc<G>,
    clock: Arc<dyn Clock>,
}

impl<S, G> PracticeStatsService<S, G> {
    pub fn new(session_repo: Arc<S>, goals_repo: Arc<G>, clock: Arc<dyn Clock>) -> Self {
        Self {
            session_repo,
            goals_repo,
            clock,
        }
    }
}

#[async_trait]
impl<S, G> PracticeStatsQuery for PracticeStatsService<S, G>
where
    S: PracticeSessionRepository,
    G: PracticeGoalsRepository,
{
    async fn get_stats(
        &self,
        request: PracticeStatsRequest,
    ) -> Result<PracticeStatsResponse, Error> {
        let window_days = request.validate()?.window_days;

        let sessions = self
            .session_repo
            .list_all()
            .await
            .map_err(map_session_repository_error)?;
        let goals = self
            .goals_repo
            .load()
            .await
            .map_err(map_goals_repository_error)?;

        let now = self.clock.local();
        debug!(window_days, sessions = sessions.len(), "computing practice stats");

        Ok(PracticeStatsResponse {
            stats: compute_practice_stats(&sessions, window_days, now),
            goal_progress: compute_goal_progress(&sessions, goals.targets(), now),
        })
    }
}

//! Builders wiring repositories and services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use practice_tracker::domain::{
    PracticeGoalsService, PracticeSessionService, PracticeStatsService,
};
use practice_tracker::inbound::http::state::{HttpState, HttpStatePorts};
use practice_tracker::outbound::persistence::{
    InMemoryGoalsRepository, InMemoryPracticeSessionRepository,
};

use super::ServerConfig;

/// Build HTTP state over process-local repositories.
///
/// The repositories are created once here and shared by every worker, so
/// all requests observe the same sessions and goals.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let sessions_repo = Arc::new(InMemoryPracticeSessionRepository::new());
    let goals_repo = Arc::new(InMemoryGoalsRepository::new(config.goal_targets));

    let sessions = Arc::new(PracticeSessionService::new(
        Arc::clone(&sessions_repo),
        Arc::clone(&clock),
    ));
    let goals = Arc::new(PracticeGoalsService::new(Arc::clone(&goals_repo)));
    let stats = Arc::new(PracticeStatsService::new(sessions_repo, goals_repo, clock));

    web::Data::new(HttpState::new(HttpStatePorts {
        sessions: sessions.clone(),
        sessions_query: sessions,
        goals: goals.clone(),
        goals_query: goals,
        stats,
    }))
}

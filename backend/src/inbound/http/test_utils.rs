//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::Trace;
use crate::domain::fixture_clock::fixture_clock;
use crate::domain::{PracticeGoalsService, PracticeSessionService, PracticeStatsService};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::persistence::{InMemoryGoalsRepository, InMemoryPracticeSessionRepository};

/// Build handler state over fresh in-memory repositories and the fixture clock.
pub fn in_memory_state() -> HttpState {
    let clock = fixture_clock();
    let sessions_repo = Arc::new(InMemoryPracticeSessionRepository::new());
    let goals_repo = Arc::new(InMemoryGoalsRepository::default());
    let sessions = Arc::new(PracticeSessionService::new(
        Arc::clone(&sessions_repo),
        Arc::clone(&clock),
    ));
    let goals = Arc::new(PracticeGoalsService::new(Arc::clone(&goals_repo)));
    HttpState::new(HttpStatePorts {
        sessions: sessions.clone(),
        sessions_query: sessions,
        goals: goals.clone(),
        goals_query: goals,
        stats: Arc::new(PracticeStatsService::new(sessions_repo, goals_repo, clock)),
    })
}

/// Build an application exposing the API routes over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure_api)
}

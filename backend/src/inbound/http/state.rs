//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    PracticeGoalsCommand, PracticeGoalsQuery, PracticeSessionCommand, PracticeSessionQuery,
    PracticeStatsQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub sessions: Arc<dyn PracticeSessionCommand>,
    pub sessions_query: Arc<dyn PracticeSessionQuery>,
    pub goals: Arc<dyn PracticeGoalsCommand>,
    pub goals_query: Arc<dyn PracticeGoalsQuery>,
    pub stats: Arc<dyn PracticeStatsQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub sessions: Arc<dyn PracticeSessionCommand>,
    pub sessions_query: Arc<dyn PracticeSessionQuery>,
    pub goals: Arc<dyn PracticeGoalsCommand>,
    pub goals_query: Arc<dyn PracticeGoalsQuery>,
    pub stats: Arc<dyn PracticeStatsQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use practice_tracker::domain::ports::{
    ///     FixturePracticeGoalsCommand, FixturePracticeGoalsQuery, FixturePracticeSessionCommand,
    ///     FixturePracticeSessionQuery,
    /// };
    /// use practice_tracker::domain::PracticeStatsService;
    /// use practice_tracker::inbound::http::state::{HttpState, HttpStatePorts};
    /// use practice_tracker::outbound::persistence::{
    ///     InMemoryGoalsRepository, InMemoryPracticeSessionRepository,
    /// };
    ///
    /// let stats = PracticeStatsService::new(
    ///     Arc::new(InMemoryPracticeSessionRepository::new()),
    ///     Arc::new(InMemoryGoalsRepository::default()),
    ///     Arc::new(mockable::DefaultClock),
    /// );
    /// let state = HttpState::new(HttpStatePorts {
    ///     sessions: Arc::new(FixturePracticeSessionCommand),
    ///     sessions_query: Arc::new(FixturePracticeSessionQuery),
    ///     goals: Arc::new(FixturePracticeGoalsCommand),
    ///     goals_query: Arc::new(FixturePracticeGoalsQuery),
    ///     stats: Arc::new(stats),
    /// });
    /// let _sessions = state.sessions.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            sessions,
            sessions_query,
            goals,
            goals_query,
            stats,
        } = ports;
        Self {
            sessions,
            sessions_query,
            goals,
            goals_query,
            stats,
        }
    }
}

//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are what inbound adapters call.
//! Driven ports (`*Repository`) are what outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod practice_goals_command;
mod practice_goals_query;
mod practice_goals_repository;
mod practice_session_command;
mod practice_session_query;
mod practice_session_repository;
mod practice_stats_query;

#[cfg(test)]
pub use practice_goals_command::MockPracticeGoalsCommand;
pub use practice_goals_command::{
    FixturePracticeGoalsCommand, PracticeGoalsCommand, PracticeGoalsPayload,
    ReplacePracticeGoalsRequest, ReplacePracticeGoalsResponse,
};
#[cfg(test)]
pub use practice_goals_query::MockPracticeGoalsQuery;
pub use practice_goals_query::{
    FixturePracticeGoalsQuery, GetPracticeGoalsResponse, PracticeGoalsQuery,
};
#[cfg(test)]
pub use practice_goals_repository::MockPracticeGoalsRepository;
pub use practice_goals_repository::{
    FixturePracticeGoalsRepository, PracticeGoalsRepository, PracticeGoalsRepositoryError,
};
#[cfg(test)]
pub use practice_session_command::MockPracticeSessionCommand;
pub use practice_session_command::{
    CreatePracticeSessionRequest, CreatePracticeSessionResponse, DeletePracticeSessionRequest,
    FixturePracticeSessionCommand, NewPracticeSession, PracticeSessionCommand,
    PracticeSessionPayload, UpdatePracticeSessionRequest, UpdatePracticeSessionResponse,
};
#[cfg(test)]
pub use practice_session_query::MockPracticeSessionQuery;
pub use practice_session_query::{
    FixturePracticeSessionQuery, GetPracticeSessionRequest, GetPracticeSessionResponse,
    ListPracticeSessionsResponse, PracticeSessionQuery,
};
#[cfg(test)]
pub use practice_session_repository::MockPracticeSessionRepository;
pub use practice_session_repository::{
    FixturePracticeSessionRepository, PracticeSessionRepository, PracticeSessionRepositoryError,
};
#[cfg(test)]
pub use practice_stats_query::MockPracticeStatsQuery;
pub use practice_stats_query::{PracticeStatsQuery, PracticeStatsRequest, PracticeStatsResponse};

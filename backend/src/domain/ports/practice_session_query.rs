//! Driving port for practice session reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Error;

use super::practice_session_command::PracticeSessionPayload;

/// Request to fetch one practice session by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPracticeSessionRequest {
    pub session_id: Uuid,
}

/// Response for a single practice session lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPracticeSessionResponse {
    pub session: PracticeSessionPayload,
}

/// Every stored session, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPracticeSessionsResponse {
    pub sessions: Vec<PracticeSessionPayload>,
}

/// Driving port for practice session read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PracticeSessionQuery: Send + Sync {
    /// Lists all sessions ordered by date descending.
    async fn list_sessions(&self) -> Result<ListPracticeSessionsResponse, Error>;

    /// Fetches one session; fails with `not_found` for unknown ids.
    async fn get_session(
        &self,
        request: GetPracticeSessionRequest,
    ) -> Result<GetPracticeSessionResponse, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePracticeSessionQuery;

#[async_trait]
impl PracticeSessionQuery for FixturePracticeSessionQuery {
    async fn list_sessions(&self) -> Result<ListPracticeSessionsResponse, Error> {
        Ok(ListPracticeSessionsResponse {
            sessions: Vec::new(),
        })
    }

    async fn get_session(
        &self,
        request: GetPracticeSessionRequest,
    ) -> Result<GetPracticeSessionResponse, Error> {
        Err(Error::not_found(format!(
            "practice session {} not found",
            request.session_id
        )))
    }
}

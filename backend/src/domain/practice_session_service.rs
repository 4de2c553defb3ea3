//! Practice session domain service.
//!
//! Implements the session driving ports on top of the session repository.
//! Identifiers and creation timestamps are assigned here, never by callers.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::ports::{
    CreatePracticeSessionRequest, CreatePracticeSessionResponse, DeletePracticeSessionRequest,
    GetPracticeSessionRequest, GetPracticeSessionResponse, ListPracticeSessionsResponse,
    PracticeSessionCommand, PracticeSessionPayload, PracticeSessionQuery,
    PracticeSessionRepository, PracticeSessionRepositoryError, UpdatePracticeSessionRequest,
    UpdatePracticeSessionResponse,
};

pub(crate) fn map_session_repository_error(error: PracticeSessionRepositoryError) -> Error {
    warn!(%error, "practice session repository call failed");
    match error {
        PracticeSessionRepositoryError::Connection { message } => Error::service_unavailable(
            format!("practice session repository unavailable: {message}"),
        ),
        PracticeSessionRepositoryError::Query { message } => {
            Error::internal(format!("practice session repository error: {message}"))
        }
    }
}

fn session_not_found(session_id: Uuid) -> Error {
    Error::not_found(format!("practice session {session_id} not found"))
}

/// Practice session service implementing the command and query ports.
#[derive(Clone)]
pub struct PracticeSessionService<R> {
    session_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> PracticeSessionService<R> {
    /// Create a new service over the session repository.
    pub fn new(session_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            session_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> PracticeSessionCommand for PracticeSessionService<R>
where
    R: PracticeSessionRepository,
{
    async fn create_session(
        &self,
        request: CreatePracticeSessionRequest,
    ) -> Result<CreatePracticeSessionResponse, Error> {
        let session = request
            .session
            .into_session(Uuid::new_v4(), self.clock.utc())
            .map_err(|err| Error::invalid_request(format!("invalid practice session: {err}")))?;

        self.session_repo
            .save(&session)
            .await
            .map_err(map_session_repository_error)?;

        info!(
            session_id = %session.id(),
            duration_seconds = session.duration_seconds(),
            "practice session created"
        );
        Ok(CreatePracticeSessionResponse {
            session: session.into(),
        })
    }

    async fn update_session(
        &self,
        request: UpdatePracticeSessionRequest,
    ) -> Result<UpdatePracticeSessionResponse, Error> {
        let UpdatePracticeSessionRequest {
            session_id,
            changes,
        } = request;

        let existing = self
            .session_repo
            .find_by_id(&session_id)
            .await
            .map_err(map_session_repository_error)?
            .ok_or_else(|| session_not_found(session_id))?;

        if changes.is_empty() {
            debug!(%session_id, "practice session update carried no changes");
            return Ok(UpdatePracticeSessionResponse {
                session: existing.into(),
            });
        }

        let updated = existing
            .apply(changes)
            .map_err(|err| Error::invalid_request(format!("invalid practice session: {err}")))?;

        let replaced = self
            .session_repo
            .replace_existing(&updated)
            .await
            .map_err(map_session_repository_error)?;
        if !replaced {
            debug!(%session_id, "practice session deleted during update");
            return Err(session_not_found(session_id));
        }

        info!(%session_id, "practice session updated");
        Ok(UpdatePracticeSessionResponse {
            session: updated.into(),
        })
    }

    async fn delete_session(&self, request: DeletePracticeSessionRequest) -> Result<(), Error> {
        let removed = self
            .session_repo
            .delete(&request.session_id)
            .await
            .map_err(map_session_repository_error)?;

        if !removed {
            return Err(session_not_found(request.session_id));
        }
        info!(session_id = %request.session_id, "practice session deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> PracticeSessionQuery for PracticeSessionService<R>
where
    R: PracticeSessionRepository,
{
    async fn list_sessions(&self) -> Result<ListPracticeSessionsResponse, Error> {
        let mut sessions = self
            .session_repo
            .list_all()
            .await
            .map_err(map_session_repository_error)?;

        sessions.sort_by(|a, b| b.date().cmp(&a.date()).then_with(|| a.id().cmp(&b.id())));

        Ok(ListPracticeSessionsResponse {
            sessions: sessions
                .into_iter()
                .map(PracticeSessionPayload::from)
                .collect(),
        })
    }

    async fn get_session(
        &self,
        request: GetPracticeSessionRequest,
    ) -> Result<GetPracticeSessionResponse, Error> {
        let session = self
            .session_repo
            .find_by_id(&request.session_id)
            .await
            .map_err(map_session_repository_error)?
            .ok_or_else(|| session_not_found(request.session_id))?;

        Ok(GetPracticeSessionResponse {
            session: session.into(),
        })
    }
}

#[cfg(test)]
#[path = "practice_session_service_tests.rs"]
mod tests;

//! Driving port for practice session mutations.
//!
//! Callers hand over the user-editable session fields; the implementation
//! assigns the identifier and creation timestamp.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    Error, PracticeSession, PracticeSessionChanges, PracticeSessionDraft, PracticeValidationError,
    Rating,
};

/// Serializable practice session payload for driving ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSessionPayload {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub focus_area: Option<String>,
    pub mood: Rating,
    pub focus: Rating,
    /// Practised time in whole seconds.
    pub duration: u32,
    pub date: DateTime<Utc>,
}

impl From<PracticeSession> for PracticeSessionPayload {
    fn from(value: PracticeSession) -> Self {
        let PracticeSessionDraft {
            id,
            name,
            description,
            notes,
            focus_area,
            mood,
            focus,
            duration_seconds,
            date,
        } = value.into_draft();
        Self {
            id,
            name,
            description,
            notes,
            focus_area,
            mood,
            focus,
            duration: duration_seconds,
            date,
        }
    }
}

impl TryFrom<PracticeSessionPayload> for PracticeSession {
    type Error = PracticeValidationError;

    fn try_from(value: PracticeSessionPayload) -> Result<Self, Self::Error> {
        PracticeSession::new(PracticeSessionDraft {
            id: value.id,
            name: value.name,
            description: value.description,
            notes: value.notes,
            focus_area: value.focus_area,
            mood: value.mood,
            focus: value.focus,
            duration_seconds: value.duration,
            date: value.date,
        })
    }
}

/// User-editable fields of a session that is about to be created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPracticeSession {
    pub name: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub focus_area: Option<String>,
    pub mood: Rating,
    pub focus: Rating,
    /// Practised time in whole seconds.
    pub duration: u32,
}

impl NewPracticeSession {
    /// Builds the session entity once an id and timestamp are assigned.
    pub fn into_session(
        self,
        id: Uuid,
        date: DateTime<Utc>,
    ) -> Result<PracticeSession, PracticeValidationError> {
        PracticeSession::new(PracticeSessionDraft {
            id,
            name: self.name,
            description: self.description,
            notes: self.notes,
            focus_area: self.focus_area,
            mood: self.mood,
            focus: self.focus,
            duration_seconds: self.duration,
            date,
        })
    }
}

/// Request to create a practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePracticeSessionRequest {
    pub session: NewPracticeSession,
}

/// Response from creating a practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePracticeSessionResponse {
    pub session: PracticeSessionPayload,
}

/// Request to apply a partial update to a stored session.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePracticeSessionRequest {
    pub session_id: Uuid,
    pub changes: PracticeSessionChanges,
}

/// Response carrying the updated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePracticeSessionResponse {
    pub session: PracticeSessionPayload,
}

/// Request to delete a stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePracticeSessionRequest {
    pub session_id: Uuid,
}

/// Driving port for practice session write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PracticeSessionCommand: Send + Sync {
    /// Creates a session with a fresh id and the current timestamp.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use practice_tracker::domain::Rating;
    /// # use practice_tracker::domain::ports::{
    /// #     CreatePracticeSessionRequest, FixturePracticeSessionCommand, NewPracticeSession,
    /// #     PracticeSessionCommand,
    /// # };
    /// # async fn example() -> Result<(), practice_tracker::domain::Error> {
    /// let command = FixturePracticeSessionCommand;
    /// let response = command
    ///     .create_session(CreatePracticeSessionRequest {
    ///         session: NewPracticeSession {
    ///             name: "Scales".to_owned(),
    ///             description: None,
    ///             notes: None,
    ///             focus_area: Some("Scales & Exercises".to_owned()),
    ///             mood: Rating::Four,
    ///             focus: Rating::Three,
    ///             duration: 600,
    ///         },
    ///     })
    ///     .await?;
    /// assert_eq!(response.session.name, "Scales");
    /// # Ok(())
    /// # }
    /// ```
    async fn create_session(
        &self,
        request: CreatePracticeSessionRequest,
    ) -> Result<CreatePracticeSessionResponse, Error>;

    /// Applies a partial update; fails with `not_found` for unknown ids.
    async fn update_session(
        &self,
        request: UpdatePracticeSessionRequest,
    ) -> Result<UpdatePracticeSessionResponse, Error>;

    /// Deletes a session; fails with `not_found` for unknown ids.
    async fn delete_session(&self, request: DeletePracticeSessionRequest) -> Result<(), Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePracticeSessionCommand;

#[async_trait]
impl PracticeSessionCommand for FixturePracticeSessionCommand {
    async fn create_session(
        &self,
        request: CreatePracticeSessionRequest,
    ) -> Result<CreatePracticeSessionResponse, Error> {
        let session = request
            .session
            .into_session(Uuid::new_v4(), Utc::now())
            .map_err(|err| Error::invalid_request(format!("invalid practice session: {err}")))?;
        Ok(CreatePracticeSessionResponse {
            session: session.into(),
        })
    }

    async fn update_session(
        &self,
        request: UpdatePracticeSessionRequest,
    ) -> Result<UpdatePracticeSessionResponse, Error> {
        Err(Error::not_found(format!(
            "practice session {} not found",
            request.session_id
        )))
    }

    async fn delete_session(&self, request: DeletePracticeSessionRequest) -> Result<(), Error> {
        Err(Error::not_found(format!(
            "practice session {} not found",
            request.session_id
        )))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;
    use crate::domain::ErrorCode;

    #[fixture]
    fn new_session() -> NewPracticeSession {
        NewPracticeSession {
            name: "Sight reading".to_owned(),
            description: None,
            notes: Some("Bach chorales".to_owned()),
            focus_area: Some("Sight Reading".to_owned()),
            mood: Rating::Three,
            focus: Rating::Four,
            duration: 1_800,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_command_assigns_identity(new_session: NewPracticeSession) {
        let response = FixturePracticeSessionCommand
            .create_session(CreatePracticeSessionRequest {
                session: new_session,
            })
            .await
            .expect("fixture create succeeds");

        assert!(!response.session.id.is_nil());
        assert_eq!(response.session.duration, 1_800);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_command_rejects_blank_name(mut new_session: NewPracticeSession) {
        new_session.name = "  ".to_owned();
        let error = FixturePracticeSessionCommand
            .create_session(CreatePracticeSessionRequest {
                session: new_session,
            })
            .await
            .expect_err("blank name rejected");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn payload_serialises_with_camel_case_keys(new_session: NewPracticeSession) {
        let session = new_session
            .into_session(Uuid::nil(), Utc::now())
            .expect("valid session");
        let value = serde_json::to_value(PracticeSessionPayload::from(session))
            .expect("payload serialises");

        assert_eq!(value["focusArea"], json!("Sight Reading"));
        assert_eq!(value["mood"], json!(3));
        assert_eq!(value["duration"], json!(1_800));
        assert_eq!(value["description"], json!(null));
    }
}

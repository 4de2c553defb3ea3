//! Practice session HTTP handlers.
//!
//! ```text
//! GET    /api/sessions
//! GET    /api/sessions/{id}
//! POST   /api/sessions
//! PATCH  /api/sessions/{id}
//! DELETE /api/sessions/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    CreatePracticeSessionRequest, DeletePracticeSessionRequest, GetPracticeSessionRequest,
    NewPracticeSession, PracticeSessionPayload, UpdatePracticeSessionRequest,
};
use crate::domain::{
    Error, PracticeSessionChanges, PracticeValidationError, Rating, duration_from_seconds,
    rating_from_value,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, ValidationIssues, parse_uuid};

const ID: FieldName = FieldName::new("id");
const NAME: FieldName = FieldName::new("name");
const MOOD: FieldName = FieldName::new("mood");
const FOCUS: FieldName = FieldName::new("focus");
const DURATION: FieldName = FieldName::new("duration");

/// Request payload for creating a practice session.
///
/// `id` and `date` are assigned by the server; any values sent are ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequestBody {
    #[schema(example = "Scales")]
    pub name: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    #[schema(example = "Scales & Exercises")]
    pub focus_area: Option<String>,
    #[schema(minimum = 1, maximum = 5, example = 4)]
    pub mood: Option<i64>,
    #[schema(minimum = 1, maximum = 5, example = 3)]
    pub focus: Option<i64>,
    /// Practised time in whole seconds.
    #[schema(minimum = 0, example = 600)]
    pub duration: Option<i64>,
}

/// Request payload for a partial session update.
///
/// Absent fields are kept. `null` clears `description`, `notes` and
/// `focusArea` and is rejected for the remaining fields.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequestBody {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub focus_area: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i64>, minimum = 1, maximum = 5)]
    pub mood: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i64>, minimum = 1, maximum = 5)]
    pub focus: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i64>, minimum = 0)]
    pub duration: Option<Option<i64>>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Stored practice session as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub focus_area: Option<String>,
    #[schema(minimum = 1, maximum = 5)]
    pub mood: u8,
    #[schema(minimum = 1, maximum = 5)]
    pub focus: u8,
    /// Practised time in whole seconds.
    pub duration: u32,
    #[schema(format = "date-time")]
    pub date: String,
}

impl From<PracticeSessionPayload> for SessionResponseBody {
    fn from(value: PracticeSessionPayload) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            description: value.description,
            notes: value.notes,
            focus_area: value.focus_area,
            mood: value.mood.value(),
            focus: value.focus.value(),
            duration: value.duration,
            date: value.date.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

fn required_name(issues: &mut ValidationIssues, name: Option<String>) -> Option<String> {
    match name {
        None => {
            issues.missing(NAME);
            None
        }
        Some(name) if name.trim().is_empty() => {
            issues.domain(NAME, &PracticeValidationError::BlankName);
            None
        }
        Some(name) => Some(name),
    }
}

fn required_rating(
    issues: &mut ValidationIssues,
    field: FieldName,
    value: Option<i64>,
) -> Option<Rating> {
    let Some(value) = value else {
        issues.missing(field);
        return None;
    };
    issues.check(field, rating_from_value(value))
}

fn parse_create_body(body: CreateSessionRequestBody) -> Result<NewPracticeSession, Error> {
    let mut issues = ValidationIssues::default();
    let name = required_name(&mut issues, body.name);
    let mood = required_rating(&mut issues, MOOD, body.mood);
    let focus = required_rating(&mut issues, FOCUS, body.focus);
    let duration = match body.duration {
        Some(value) => issues.check(DURATION, duration_from_seconds(value)),
        None => {
            issues.missing(DURATION);
            None
        }
    };

    issues.finish(|| {
        Some(NewPracticeSession {
            name: name?,
            description: body.description,
            notes: body.notes,
            focus_area: body.focus_area,
            mood: mood?,
            focus: focus?,
            duration: duration?,
        })
    })
}

/// Validates a field that may be omitted but never cleared.
fn non_nullable<T>(
    issues: &mut ValidationIssues,
    field: FieldName,
    value: Option<Option<i64>>,
    parse: impl FnOnce(i64) -> Result<T, PracticeValidationError>,
) -> Option<T> {
    match value? {
        Some(raw) => issues.check(field, parse(raw)),
        None => {
            issues.not_nullable(field);
            None
        }
    }
}

fn parse_update_body(body: UpdateSessionRequestBody) -> Result<PracticeSessionChanges, Error> {
    let mut issues = ValidationIssues::default();
    let name = match body.name {
        None => None,
        Some(None) => {
            issues.not_nullable(NAME);
            None
        }
        Some(Some(name)) => required_name(&mut issues, Some(name)),
    };
    let mood = non_nullable(&mut issues, MOOD, body.mood, rating_from_value);
    let focus = non_nullable(&mut issues, FOCUS, body.focus, rating_from_value);
    let duration_seconds = non_nullable(&mut issues, DURATION, body.duration, duration_from_seconds);

    issues.finish(|| {
        Some(PracticeSessionChanges {
            name,
            description: body.description,
            notes: body.notes,
            focus_area: body.focus_area,
            mood,
            focus,
            duration_seconds,
        })
    })
}

/// List every stored session, newest first.
#[utoipa::path(
    get,
    path = "/api/sessions",
    responses(
        (status = 200, description = "Stored sessions", body = [SessionResponseBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["sessions"],
    operation_id = "listSessions"
)]
#[get("/sessions")]
pub async fn list_sessions(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<SessionResponseBody>>> {
    let response = state.sessions_query.list_sessions().await?;
    Ok(web::Json(
        response
            .sessions
            .into_iter()
            .map(SessionResponseBody::from)
            .collect(),
    ))
}

/// Fetch one session by id.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(("id" = String, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Stored session", body = SessionResponseBody),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown session", body = ErrorSchema)
    ),
    tags = ["sessions"],
    operation_id = "getSession"
)]
#[get("/sessions/{id}")]
pub async fn get_session(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<SessionResponseBody>> {
    let session_id = parse_uuid(&path.into_inner(), ID)?;
    let response = state
        .sessions_query
        .get_session(GetPracticeSessionRequest { session_id })
        .await?;
    Ok(web::Json(SessionResponseBody::from(response.session)))
}

/// Record a practice session.
///
/// # Examples
/// ```no_run
/// use actix_web::web;
/// use practice_tracker::inbound::http::sessions::{CreateSessionRequestBody, create_session};
/// use practice_tracker::inbound::http::state::HttpState;
///
/// async fn call_handler(state: web::Data<HttpState>) {
///     let payload = web::Json(CreateSessionRequestBody {
///         name: Some("Scales".to_owned()),
///         mood: Some(4),
///         focus: Some(3),
///         duration: Some(600),
///         ..CreateSessionRequestBody::default()
///     });
///     let _response = create_session(state, payload).await;
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionRequestBody,
    responses(
        (status = 201, description = "Session recorded", body = SessionResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["sessions"],
    operation_id = "createSession"
)]
#[post("/sessions")]
pub async fn create_session(
    state: web::Data<HttpState>,
    payload: web::Json<CreateSessionRequestBody>,
) -> ApiResult<HttpResponse> {
    let session = parse_create_body(payload.into_inner())?;
    let response = state
        .sessions
        .create_session(CreatePracticeSessionRequest { session })
        .await?;
    Ok(HttpResponse::Created().json(SessionResponseBody::from(response.session)))
}

/// Apply a partial update to a stored session.
#[utoipa::path(
    patch,
    path = "/api/sessions/{id}",
    params(("id" = String, Path, description = "Session identifier")),
    request_body = UpdateSessionRequestBody,
    responses(
        (status = 200, description = "Session updated", body = SessionResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown session", body = ErrorSchema)
    ),
    tags = ["sessions"],
    operation_id = "updateSession"
)]
#[patch("/sessions/{id}")]
pub async fn update_session(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateSessionRequestBody>,
) -> ApiResult<web::Json<SessionResponseBody>> {
    let session_id = parse_uuid(&path.into_inner(), ID)?;
    let changes = parse_update_body(payload.into_inner())?;
    let response = state
        .sessions
        .update_session(UpdatePracticeSessionRequest {
            session_id,
            changes,
        })
        .await?;
    Ok(web::Json(SessionResponseBody::from(response.session)))
}

/// Delete a stored session.
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(("id" = String, Path, description = "Session identifier")),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown session", body = ErrorSchema)
    ),
    tags = ["sessions"],
    operation_id = "deleteSession"
)]
#[delete("/sessions/{id}")]
pub async fn delete_session(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let session_id = parse_uuid(&path.into_inner(), ID)?;
    state
        .sessions
        .delete_session(DeletePracticeSessionRequest { session_id })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "sessions_tests.rs"]
mod tests;

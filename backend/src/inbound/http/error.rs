//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers turn
//! domain failures into consistent JSON responses and status codes. The
//! extractor error handlers at the bottom route malformed JSON bodies, query
//! strings and path segments into the same envelope as handler validation.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::validation::{FieldName, IssueCode, ValidationIssues};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Maps JSON extractor failures onto a validation envelope.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let mut issues = ValidationIssues::default();
    match &err {
        JsonPayloadError::Deserialize(inner) if inner.is_data() => {
            issues.push(
                FieldName::new("body"),
                IssueCode::InvalidType,
                inner.to_string(),
            );
        }
        JsonPayloadError::ContentType => {
            issues.push(
                FieldName::new("body"),
                IssueCode::InvalidJson,
                "content type must be application/json",
            );
        }
        other => {
            issues.push(FieldName::new("body"), IssueCode::InvalidJson, other.to_string());
        }
    }
    issues.into_error().into()
}

/// Maps query string extractor failures onto a validation envelope.
pub(crate) fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let mut issues = ValidationIssues::default();
    issues.push(FieldName::new("query"), IssueCode::InvalidType, err.to_string());
    issues.into_error().into()
}

/// Maps path extractor failures onto a validation envelope.
pub(crate) fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let mut issues = ValidationIssues::default();
    issues.push(FieldName::new("path"), IssueCode::InvalidType, err.to_string());
    issues.into_error().into()
}

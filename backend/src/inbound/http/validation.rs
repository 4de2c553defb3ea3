//! Shared validation helpers for inbound HTTP adapters.
//!
//! Handlers collect every problem in a request body before answering, so a
//! client sees all rejected fields in one `400` response:
//!
//! ```json
//! { "code": "invalid_request", "message": "request validation failed",
//!   "details": { "issues": [{ "field": "mood", "code": "out_of_range", "message": "..." }] } }
//! ```

use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{Error, PracticeValidationError};

/// Validation issue codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IssueCode {
    MissingField,
    NotNullable,
    InvalidUuid,
    InvalidType,
    InvalidJson,
    /// A domain rule rejected the value; the code comes from the domain error.
    Domain(&'static str),
}

impl IssueCode {
    fn as_str(self) -> &'static str {
        match self {
            IssueCode::MissingField => "missing_field",
            IssueCode::NotNullable => "not_nullable",
            IssueCode::InvalidUuid => "invalid_uuid",
            IssueCode::InvalidType => "invalid_type",
            IssueCode::InvalidJson => "invalid_json",
            IssueCode::Domain(code) => code,
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ValidationIssue {
    field: &'static str,
    code: &'static str,
    message: String,
}

/// Accumulates validation issues for a single request.
#[derive(Debug, Default)]
pub(crate) struct ValidationIssues {
    issues: Vec<ValidationIssue>,
}

impl ValidationIssues {
    pub(crate) fn push(&mut self, field: FieldName, code: IssueCode, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field: field.as_str(),
            code: code.as_str(),
            message: message.into(),
        });
    }

    pub(crate) fn missing(&mut self, field: FieldName) {
        let name = field.as_str();
        self.push(
            field,
            IssueCode::MissingField,
            format!("missing required field: {name}"),
        );
    }

    pub(crate) fn not_nullable(&mut self, field: FieldName) {
        let name = field.as_str();
        self.push(
            field,
            IssueCode::NotNullable,
            format!("{name} must not be null"),
        );
    }

    pub(crate) fn domain(&mut self, field: FieldName, err: &PracticeValidationError) {
        self.push(field, IssueCode::Domain(err.code()), err.to_string());
    }

    /// Records the outcome of a fallible conversion and passes the value on.
    pub(crate) fn check<T>(
        &mut self,
        field: FieldName,
        result: Result<T, PracticeValidationError>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.domain(field, &err);
                None
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Converts the collected issues into a domain error.
    pub(crate) fn into_error(self) -> Error {
        Error::invalid_request("request validation failed")
            .with_details(json!({ "issues": self.issues }))
    }

    /// Returns `value` when no issue was recorded.
    pub(crate) fn finish<T>(self, value: impl FnOnce() -> Option<T>) -> Result<T, Error> {
        if !self.is_empty() {
            return Err(self.into_error());
        }
        value().ok_or_else(|| Error::internal("validated request is incomplete"))
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let mut issues = ValidationIssues::default();
    let name = field.as_str();
    issues.push(
        field,
        IssueCode::InvalidUuid,
        format!("{name} must be a valid UUID, got {value:?}"),
    );
    issues.into_error()
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

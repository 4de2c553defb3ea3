//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer (sessions,
//! goals, stats, health) and the error schema wrappers that document domain
//! types without coupling them to utoipa.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::goals::{GoalsRequestBody, GoalsResponseBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::sessions::{
    CreateSessionRequestBody, SessionResponseBody, UpdateSessionRequestBody,
};
use crate::inbound::http::stats::{
    AchievementsBody, FocusAreaCountBody, GoalProgressBody, GoalProgressReportBody,
    PracticeDayBody, PracticeStatsBody, RatingCountBody, StatsResponseBody, TrendPointBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Practice tracker API",
        description = "Record practice sessions, manage goals and read practice statistics."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::sessions::list_sessions,
        crate::inbound::http::sessions::get_session,
        crate::inbound::http::sessions::create_session,
        crate::inbound::http::sessions::update_session,
        crate::inbound::http::sessions::delete_session,
        crate::inbound::http::goals::get_goals,
        crate::inbound::http::goals::replace_goals,
        crate::inbound::http::stats::get_stats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        CreateSessionRequestBody,
        UpdateSessionRequestBody,
        SessionResponseBody,
        GoalsRequestBody,
        GoalsResponseBody,
        StatsResponseBody,
        PracticeStatsBody,
        FocusAreaCountBody,
        RatingCountBody,
        TrendPointBody,
        PracticeDayBody,
        AchievementsBody,
        GoalProgressReportBody,
        GoalProgressBody,
    )),
    tags(
        (name = "sessions", description = "Recorded practice sessions"),
        (name = "goals", description = "Daily, weekly and monthly practice targets"),
        (name = "stats", description = "Statistics over a trailing window"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI document structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[rstest]
    #[case("/api/sessions")]
    #[case("/api/sessions/{id}")]
    #[case("/api/goals")]
    #[case("/api/stats")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn openapi_documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[test]
    fn session_response_schema_uses_camel_case() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let session = schemas
            .get("SessionResponseBody")
            .expect("SessionResponseBody schema");

        assert_object_schema_has_field(session, "focusArea");
        assert_object_schema_has_field(session, "duration");
    }
}

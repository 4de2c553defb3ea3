//! Tests for practice session HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::TRACE_ID_HEADER;
use crate::inbound::http::test_utils::{in_memory_state, test_app};

fn scales_payload() -> Value {
    json!({
        "name": "  Scales  ",
        "description": "C major, two octaves",
        "notes": "",
        "focusArea": "Scales & Exercises",
        "mood": 4,
        "focus": 3,
        "duration": 600
    })
}

fn issue_codes(body: &Value) -> Vec<(String, String)> {
    body["details"]["issues"]
        .as_array()
        .map(|issues| {
            issues
                .iter()
                .map(|issue| {
                    (
                        issue["field"].as_str().unwrap_or_default().to_owned(),
                        issue["code"].as_str().unwrap_or_default().to_owned(),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

macro_rules! call {
    ($app:expr, $request:expr) => {
        actix_test::call_service(&$app, $request.to_request()).await
    };
}

async fn create(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    payload: Value,
) -> SessionResponseBody {
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/api/sessions")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    actix_test::read_body_json(response).await
}

#[actix_web::test]
async fn create_assigns_id_and_date_and_normalises_text() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let created = create(&app, scales_payload()).await;

    assert!(uuid::Uuid::parse_str(&created.id).is_ok());
    assert_eq!(created.date, "2026-03-09T17:45:00.000Z");
    assert_eq!(created.name, "Scales");
    assert_eq!(created.notes, None);
    assert_eq!(created.focus_area.as_deref(), Some("Scales & Exercises"));
    assert_eq!((created.mood, created.focus, created.duration), (4, 3, 600));
}

#[actix_web::test]
async fn create_ignores_client_supplied_id_and_date() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let mut payload = scales_payload();
    payload["id"] = json!("00000000-0000-0000-0000-000000000001");
    payload["date"] = json!("1999-01-01T00:00:00Z");

    let created = create(&app, payload).await;

    assert_ne!(created.id, "00000000-0000-0000-0000-000000000001");
    assert!(created.date.starts_with("2026-03-09"));
}

#[actix_web::test]
async fn create_collects_every_validation_issue() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = call!(
        app,
        actix_test::TestRequest::post()
            .uri("/api/sessions")
            .set_json(json!({ "name": "   ", "mood": 9, "duration": -5 }))
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(
        issue_codes(&body),
        vec![
            ("name".to_owned(), "blank_field".to_owned()),
            ("mood".to_owned(), "out_of_range".to_owned()),
            ("focus".to_owned(), "missing_field".to_owned()),
            ("duration".to_owned(), "negative_value".to_owned()),
        ]
    );
}

#[rstest]
#[case::string_rating(json!({ "name": "Scales", "mood": "4", "focus": 3, "duration": 60 }), "invalid_type")]
#[case::fractional_duration(json!({ "name": "Scales", "mood": 4, "focus": 3, "duration": 1.5 }), "invalid_type")]
#[actix_web::test]
async fn create_rejects_mistyped_fields(#[case] payload: Value, #[case] code: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = call!(
        app,
        actix_test::TestRequest::post()
            .uri("/api/sessions")
            .set_json(payload)
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(issue_codes(&body)[0].1, code);
}

#[actix_web::test]
async fn create_rejects_malformed_json() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = call!(
        app,
        actix_test::TestRequest::post()
            .uri("/api/sessions")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(issue_codes(&body), vec![("body".to_owned(), "invalid_json".to_owned())]);
}

#[actix_web::test]
async fn list_and_get_return_stored_sessions() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let created = create(&app, scales_payload()).await;

    let listed: Vec<SessionResponseBody> = actix_test::read_body_json(call!(
        app,
        actix_test::TestRequest::get().uri("/api/sessions")
    ))
    .await;
    let fetched: SessionResponseBody = actix_test::read_body_json(call!(
        app,
        actix_test::TestRequest::get().uri(&format!("/api/sessions/{}", created.id))
    ))
    .await;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(fetched.name, "Scales");
}

#[rstest]
#[case::get(actix_test::TestRequest::get())]
#[case::delete(actix_test::TestRequest::delete())]
#[actix_web::test]
async fn malformed_ids_are_rejected(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = call!(app, request.uri("/api/sessions/not-a-uuid"));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(issue_codes(&body), vec![("id".to_owned(), "invalid_uuid".to_owned())]);
}

#[actix_web::test]
async fn unknown_session_is_not_found() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = call!(
        app,
        actix_test::TestRequest::get().uri("/api/sessions/00000000-0000-0000-0000-000000000009")
    );

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn patch_distinguishes_absent_from_null() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let created = create(&app, scales_payload()).await;

    let response = call!(
        app,
        actix_test::TestRequest::patch()
            .uri(&format!("/api/sessions/{}", created.id))
            .set_json(json!({ "description": null, "mood": 5, "duration": 900 }))
    );

    assert_eq!(response.status(), StatusCode::OK);
    let updated: SessionResponseBody = actix_test::read_body_json(response).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.date, created.date);
    assert_eq!(updated.name, "Scales");
    assert_eq!(updated.description, None);
    assert_eq!(updated.focus_area, created.focus_area);
    assert_eq!((updated.mood, updated.focus, updated.duration), (5, 3, 900));
}

#[actix_web::test]
async fn patch_rejects_nulls_for_required_fields() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let created = create(&app, scales_payload()).await;

    let response = call!(
        app,
        actix_test::TestRequest::patch()
            .uri(&format!("/api/sessions/{}", created.id))
            .set_json(json!({ "name": null, "focus": 0 }))
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        issue_codes(&body),
        vec![
            ("name".to_owned(), "not_nullable".to_owned()),
            ("focus".to_owned(), "out_of_range".to_owned()),
        ]
    );
}

#[actix_web::test]
async fn patch_unknown_session_is_not_found() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = call!(
        app,
        actix_test::TestRequest::patch()
            .uri("/api/sessions/00000000-0000-0000-0000-000000000009")
            .set_json(json!({ "notes": "late" }))
    );

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_removes_session_once() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let created = create(&app, scales_payload()).await;
    let uri = format!("/api/sessions/{}", created.id);

    let first = call!(app, actix_test::TestRequest::delete().uri(&uri));
    let second = call!(app, actix_test::TestRequest::delete().uri(&uri));
    let listed: Vec<SessionResponseBody> = actix_test::read_body_json(call!(
        app,
        actix_test::TestRequest::get().uri("/api/sessions")
    ))
    .await;

    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert!(listed.is_empty());
}

//! End-to-end coverage of the session and goals endpoints through the full
//! application wiring.

use actix_web::http::StatusCode;
use actix_web::{App, test};
use practice_tracker::Trace;
use practice_tracker::domain::TRACE_ID_HEADER;
use practice_tracker::inbound::http::configure_api;
use serde_json::{Value, json};

mod common;

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(common::app_state())
                .wrap(Trace)
                .configure(configure_api),
        )
        .await
    };
}

#[actix_web::test]
async fn session_lifecycle_round_trips_through_the_api() {
    let app = init_app!();

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/sessions")
            .set_json(json!({
                "name": "Scales",
                "focusArea": "Scales & Exercises",
                "mood": 4,
                "focus": 3,
                "duration": 600
            }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(created).await;
    let id = created["id"].as_str().expect("id assigned").to_owned();
    assert!(created["date"].is_string());

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/sessions").to_request(),
    )
    .await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["id"], id.as_str());
    assert_eq!(listed[0]["name"], "Scales");

    let deleted = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/sessions/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/sessions").to_request(),
    )
    .await;
    assert_eq!(listed, json!([]));

    let again = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/sessions/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    assert!(again.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(again).await;
    assert_eq!(body["code"], "not_found");
    assert!(body["traceId"].is_string());
}

#[actix_web::test]
async fn sessions_are_listed_newest_first() {
    let app = init_app!();

    for name in ["Etudes", "Repertoire"] {
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/sessions")
                .set_json(json!({ "name": name, "mood": 3, "focus": 3, "duration": 60 }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/sessions").to_request(),
    )
    .await;
    let dates: Vec<&str> = listed
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|session| session["date"].as_str())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[actix_web::test]
async fn goal_update_replaces_values_and_identity() {
    let app = init_app!();

    let before: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/goals").to_request(),
    )
    .await;
    let replaced: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/goals")
            .set_json(json!({ "dailyMinutes": 20, "weeklyMinutes": 140, "monthlyMinutes": 600 }))
            .to_request(),
    )
    .await;
    let after: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/goals").to_request(),
    )
    .await;

    assert_eq!(before["dailyMinutes"], 30);
    assert_ne!(replaced["id"], before["id"]);
    assert_eq!(after, replaced);
    assert_eq!(after["weeklyMinutes"], 140);
}

#[actix_web::test]
async fn stats_count_todays_sessions() {
    let app = init_app!();
    for duration in [1_200, 600] {
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/sessions")
                .set_json(json!({ "name": "Scales", "mood": 5, "focus": 4, "duration": duration }))
                .to_request(),
        )
        .await;
    }

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/stats?days=30").to_request(),
    )
    .await;

    assert_eq!(body["stats"]["totalSeconds"], 1_800);
    assert_eq!(body["stats"]["currentStreak"], 1);
    assert_eq!(body["stats"]["longestStreak"], 1);
    assert_eq!(body["stats"]["trend"].as_array().map(Vec::len), Some(30));
    assert_eq!(body["stats"]["trend"][29]["minutes"], 30);
    assert_eq!(body["goalProgress"]["daily"]["practicedMinutes"], 30);
    assert_eq!(body["goalProgress"]["daily"]["percent"], 100.0);
    assert_eq!(body["goalProgress"]["weekly"]["remainingMinutes"], 180);
}

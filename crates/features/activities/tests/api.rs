#![cfg(feature = "server")]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use mhs_activities::router::activities_router;
use mhs_kernel::domain::config::ApiConfig;
use mhs_kernel::server::ApiState;
use serde_json::Value;
use tower::ServiceExt;

fn app_with(config: ApiConfig) -> Router {
    let slice = mhs_activities::init(&config).expect("activities slice");
    let state =
        ApiState::builder().config(config).register_slice(slice).build().expect("api state");

    let (router, _api): (Router, _) = activities_router().with_state(state).split_for_parts();
    router
}

fn app() -> Router {
    app_with(ApiConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri).body(Body::empty()).expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn participants(activities: &Value, name: &str) -> Vec<String> {
    serde_json::from_value(activities[name]["participants"].clone()).expect("participants")
}

#[tokio::test]
async fn get_activities_lists_chess_club() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/activities").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_object());
    let chess = &body["Chess Club"];
    assert!(chess["participants"].is_array());
    assert!(chess["max_participants"].is_u64());
    assert!(chess["description"].is_string());
    assert!(chess["schedule"].is_string());
}

#[tokio::test]
async fn signup_adds_participant() {
    let app = app();
    let (_, before) = send(&app, Method::GET, "/activities").await;
    let initial = participants(&before, "Tennis Club").len();

    let (status, body) =
        send(&app, Method::POST, "/activities/Tennis%20Club/signup?email=test@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed up test@example.com for Tennis Club");

    let (_, after) = send(&app, Method::GET, "/activities").await;
    let tennis = participants(&after, "Tennis Club");
    assert_eq!(tennis.len(), initial + 1);
    assert_eq!(tennis.last().map(String::as_str), Some("test@example.com"));
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let app = app();
    let uri = "/activities/Basketball%20Team/signup?email=duplicate@example.com";

    let (first, _) = send(&app, Method::POST, uri).await;
    assert_eq!(first, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student already signed up for this activity");

    let (_, list) = send(&app, Method::GET, "/activities").await;
    let count = participants(&list, "Basketball Team")
        .iter()
        .filter(|p| *p == "duplicate@example.com")
        .count();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn signup_for_unknown_activity_is_not_found() {
    let app = app();
    let (status, body) =
        send(&app, Method::POST, "/activities/NonExistent%20Activity/signup?email=test@example.com")
            .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn unregister_removes_participant() {
    let app = app();
    let (status, _) =
        send(&app, Method::POST, "/activities/Art%20Studio/signup?email=unregister@example.com")
            .await;
    assert_eq!(status, StatusCode::OK);

    let (_, before) = send(&app, Method::GET, "/activities").await;
    let initial = participants(&before, "Art Studio").len();

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Art%20Studio/unregister?email=unregister@example.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Unregistered unregister@example.com from Art Studio");

    let (_, after) = send(&app, Method::GET, "/activities").await;
    let art = participants(&after, "Art Studio");
    assert_eq!(art.len(), initial - 1);
    assert!(!art.contains(&"unregister@example.com".to_owned()));
}

#[tokio::test]
async fn unregister_without_signup_is_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=notsignedup@example.com",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is not signed up for this activity");
}

#[tokio::test]
async fn unregister_from_unknown_activity_is_not_found() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/NonExistent%20Activity/unregister?email=test@example.com",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn signup_then_unregister_restores_roster() {
    let app = app();
    let (_, before) = send(&app, Method::GET, "/activities").await;

    send(&app, Method::POST, "/activities/Chess%20Club/signup?email=round@trip.edu").await;
    send(&app, Method::DELETE, "/activities/Chess%20Club/unregister?email=round@trip.edu").await;

    let (_, after) = send(&app, Method::GET, "/activities").await;
    assert_eq!(participants(&after, "Chess Club"), participants(&before, "Chess Club"));
}

#[tokio::test]
async fn missing_email_is_unprocessable() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/activities/Chess%20Club/signup").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn email_format_is_not_validated() {
    let app = app();
    let (status, body) =
        send(&app, Method::POST, "/activities/Math%20Club/signup?email=not-an-email").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed up not-an-email for Math Club");
}

#[tokio::test]
async fn capacity_is_advisory_only() {
    let app = app();
    let (_, list) = send(&app, Method::GET, "/activities").await;
    let max = list["Tennis Club"]["max_participants"].as_u64().expect("capacity");
    let current = participants(&list, "Tennis Club").len() as u64;

    for i in 0..=(max - current) {
        let uri = format!("/activities/Tennis%20Club/signup?email=extra{i}@example.com");
        let (status, _) = send(&app, Method::POST, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, list) = send(&app, Method::GET, "/activities").await;
    assert!(participants(&list, "Tennis Club").len() as u64 > max);
}

#[tokio::test]
async fn enforced_capacity_rejects_full_activity() {
    let mut config = ApiConfig::default();
    config.activities.enforce_capacity = true;
    let app = app_with(config);

    let (_, list) = send(&app, Method::GET, "/activities").await;
    let max = list["Tennis Club"]["max_participants"].as_u64().expect("capacity");
    let current = participants(&list, "Tennis Club").len() as u64;

    for i in 0..(max - current) {
        let uri = format!("/activities/Tennis%20Club/signup?email=fill{i}@example.com");
        let (status, _) = send(&app, Method::POST, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) =
        send(&app, Method::POST, "/activities/Tennis%20Club/signup?email=late@example.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is full");
}

#[tokio::test]
async fn malformed_activity_name_gets_json_detail() {
    let app = app();
    for (method, uri) in [
        (Method::POST, "/activities/%FF/signup?email=a@mergington.edu"),
        (Method::DELETE, "/activities/%FF/unregister?email=a@mergington.edu"),
    ] {
        let (status, body) = send(&app, method, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["detail"].as_str().is_some_and(|d| d.contains("UTF-8")), "{uri}: {body}");
    }
}

#[tokio::test]
async fn repeated_email_parameter_is_unprocessable() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=a@mergington.edu&email=b@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (_, list) = send(&app, Method::GET, "/activities").await;
    let chess = participants(&list, "Chess Club");
    assert!(!chess.iter().any(|p| p == "a@mergington.edu" || p == "b@mergington.edu"));
}

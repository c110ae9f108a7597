//! Integration tests for the panel JSON API.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use relink_axum::bootstrap::{ServerConfig, bootstrap};
use relink_axum::routes::create_router;

const PASSWORD: &str = "correct horse battery staple";

fn test_app() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let config = ServerConfig {
        port: 0,
        admin_file: dir.path().join("admins.txt"),
        stats_file: dir.path().join("relink_stats.json"),
        password: PASSWORD.to_string(),
    };
    let app = create_router(Arc::new(bootstrap(&config)));
    (dir, app)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            None,
            &json!({"password": PASSWORD}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_endpoint_is_open() {
    let (_dir, app) = test_app();

    let response = app.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            None,
            &json!({"password": "nope"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_is_throttled_after_five_attempts() {
    let (_dir, app) = test_app();

    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/login",
                None,
                &json!({"password": "nope"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Sixth attempt hits the window even with the right password.
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            None,
            &json!({"password": PASSWORD}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn guarded_routes_refuse_missing_or_bogus_tokens() {
    let (_dir, app) = test_app();

    for token in [None, Some("not-a-real-token")] {
        let response = app.clone().oneshot(get("/api/admins", token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn admin_crud_round_trip() {
    let (_dir, app) = test_app();
    let token = login(&app).await;

    // Starts empty.
    let response = app
        .clone()
        .oneshot(get("/api/admins", Some(&token)))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([]));

    // Add two, list comes back sorted.
    for id in [300u64, 100] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admins",
                Some(&token),
                &json!({"admin_id": id}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    let response = app
        .clone()
        .oneshot(get("/api/admins", Some(&token)))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([100, 300]));

    // Duplicate add is a 400, removing a stranger is a 404.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/admins",
            Some(&token),
            &json!({"admin_id": 100}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            "/api/admins/999",
            Some(&token),
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Remove one for real.
    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            "/api/admins/300",
            Some(&token),
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([100]));
}

#[tokio::test]
async fn stats_report_and_snapshot() {
    let (_dir, app) = test_app();
    let token = login(&app).await;

    for success in [true, true, false] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/stats",
                Some(&token),
                &json!({"success": success}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(get("/api/stats", Some(&token)))
        .await
        .unwrap();
    let snapshot = body_json(response).await;
    assert_eq!(snapshot["total_conversions"], 3);
    assert_eq!(snapshot["successful_conversions"], 2);
    assert_eq!(snapshot["failed_conversions"], 1);
}

#[tokio::test]
async fn dashboard_aggregates_stats_and_admins() {
    let (_dir, app) = test_app();
    let token = login(&app).await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/admins",
            Some(&token),
            &json!({"admin_id": 42}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/api/dashboard", Some(&token)))
        .await
        .unwrap();
    let dashboard = body_json(response).await;
    assert_eq!(dashboard["admins"], json!([42]));
    assert_eq!(dashboard["stats"]["total_conversions"], 0);
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let (_dir, app) = test_app();
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/logout", Some(&token), &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/api/stats", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{
    USERNAME, bearer_get, login, send, setup_test_app, str_field, test_jwt_config, test_state,
    test_state_with,
};
use pokegate_config::{JwtConfig, RefreshPolicy};
use tower::ServiceExt;

#[tokio::test]
async fn test_profile_with_valid_token() {
    let app = setup_test_app(test_state());
    let tokens = login(&app).await;

    let (status, body) = send(
        &app,
        bearer_get("/profile", str_field(&tokens, "accessToken")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert_eq!(body["user"]["sub"], 1);
    assert_eq!(body["user"]["username"], USERNAME);
    assert_eq!(body["user"]["role"], "student");
    assert!(body["user"]["exp"].is_i64());
}

#[tokio::test]
async fn test_profile_without_header() {
    let app = setup_test_app(test_state());

    let request = Request::builder()
        .uri("/profile")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing token");
}

#[tokio::test]
async fn test_profile_with_garbled_token() {
    let app = setup_test_app(test_state());

    let (status, body) = send(&app, bearer_get("/profile", "not-a-jwt")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_profile_with_non_bearer_scheme() {
    let app = setup_test_app(test_state());

    let request = Request::builder()
        .uri("/profile")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_profile_with_expired_token() {
    let jwt_config = JwtConfig {
        access_token_expiry: -5,
        ..test_jwt_config()
    };
    let app = setup_test_app(test_state_with(jwt_config, RefreshPolicy::Reuse));
    let tokens = login(&app).await;

    let (status, _) = send(
        &app,
        bearer_get("/profile", str_field(&tokens, "accessToken")),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_profile_rejects_refresh_token() {
    let app = setup_test_app(test_state());
    let tokens = login(&app).await;

    let (status, _) = send(
        &app,
        bearer_get("/profile", str_field(&tokens, "refreshToken")),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_test_data_with_valid_token() {
    let app = setup_test_app(test_state());
    let tokens = login(&app).await;

    let (status, body) = send(
        &app,
        bearer_get("/test-data", str_field(&tokens, "accessToken")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().is_some_and(|d| !d.is_empty()));
    assert!(
        chrono::DateTime::parse_from_rfc3339(str_field(&body, "receivedAt")).is_ok(),
        "receivedAt should be RFC 3339: {body}"
    );
    assert_eq!(body["user"]["username"], USERNAME);
}

#[tokio::test]
async fn test_test_data_without_header() {
    let app = setup_test_app(test_state());

    let request = Request::builder()
        .uri("/test-data")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cors_preflight_for_allowed_origin() {
    let app = setup_test_app(test_state());

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/login")
        .header(header::ORIGIN, "http://localhost:5174")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5174"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_cors_preflight_for_other_origin() {
    let app = setup_test_app(test_state());

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/login")
        .header(header::ORIGIN, "http://evil.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

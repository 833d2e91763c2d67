mod common;

use axum::http::StatusCode;
use common::{
    PASSWORD, USERNAME, bearer_get, json_request, send, setup_single_token_app, str_field,
    test_state,
};
use serde_json::json;

#[tokio::test]
async fn test_login_returns_single_token() {
    let state = test_state();
    let app = setup_single_token_app(state.clone());

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/login",
            json!({ "username": USERNAME, "password": PASSWORD }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!str_field(&body, "token").is_empty());
    assert!(body.get("refreshToken").is_none());
    assert!(state.refresh_tokens.is_empty());
}

#[tokio::test]
async fn test_token_opens_profile() {
    let app = setup_single_token_app(test_state());

    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/login",
            json!({ "username": USERNAME, "password": PASSWORD }),
        ),
    )
    .await;

    let (status, profile) = send(&app, bearer_get("/profile", str_field(&body, "token"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["user"]["username"], USERNAME);
}

#[tokio::test]
async fn test_wrong_password() {
    let app = setup_single_token_app(test_state());

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/login",
            json!({ "username": USERNAME, "password": "pikachu" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_pair_routes_are_absent() {
    let app = setup_single_token_app(test_state());

    let (status, _) = send(
        &app,
        json_request("POST", "/refresh", json!({ "refreshToken": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, bearer_get("/test-data", "x")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

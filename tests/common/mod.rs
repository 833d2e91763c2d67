use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use pokegate::router::{init_router, init_single_token_router};
use pokegate::state::AppState;
use pokegate_config::{CorsConfig, JwtConfig, RefreshPolicy, SessionConfig};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const USERNAME: &str = "Sacha";
pub const PASSWORD: &str = "passwordPokedex123";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        access_secret: "integration-access-secret-at-least-32-chars".to_string(),
        refresh_secret: "integration-refresh-secret-at-least-32-chars".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 604800,
        uses_demo_secrets: false,
    }
}

#[allow(dead_code)]
pub fn test_state_with(jwt_config: JwtConfig, refresh_policy: RefreshPolicy) -> AppState {
    AppState::new(
        jwt_config,
        CorsConfig {
            allowed_origins: vec!["http://localhost:5174".to_string()],
        },
        SessionConfig {
            refresh_policy,
            sweep_interval_secs: 0,
        },
    )
}

pub fn test_state() -> AppState {
    test_state_with(test_jwt_config(), RefreshPolicy::Reuse)
}

#[allow(dead_code)]
pub fn setup_test_app(state: AppState) -> Router {
    init_router(state)
}

#[allow(dead_code)]
pub fn setup_single_token_app(state: AppState) -> Router {
    init_single_token_router(state)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn bearer_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Sends `request` and returns the status with the JSON body (`Null` if empty).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}

/// Logs in as the demo user and returns the response body.
#[allow(dead_code)]
pub async fn login(app: &Router) -> Value {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/login",
            json!({ "username": USERNAME, "password": PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[allow(dead_code)]
pub fn str_field<'a>(body: &'a Value, field: &str) -> &'a str {
    body[field]
        .as_str()
        .unwrap_or_else(|| panic!("missing string field {field} in {body}"))
}

use axum::{Router, routing::post};

use super::controller::{login, login_single_token, logout, refresh};
use crate::state::AppState;

pub fn init_session_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
}

pub fn init_single_token_session_router() -> Router<AppState> {
    Router::new().route("/login", post(login_single_token))
}

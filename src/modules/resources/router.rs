use axum::{Router, routing::get};

use super::controller::{profile, test_data};
use crate::state::AppState;

pub fn init_resources_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile))
        .route("/test-data", get(test_data))
}

pub fn init_profile_router() -> Router<AppState> {
    Router::new().route("/profile", get(profile))
}

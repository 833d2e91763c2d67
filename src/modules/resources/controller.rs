use axum::Json;
use chrono::Utc;
use tracing::instrument;

use super::model::{ProfileResponse, TestDataResponse, starter_pokedex};
use crate::middleware::auth::AuthUser;

/// Return the caller's access token claims
#[instrument(
    skip_all,
    fields(
        user_id = auth_user.user_id(),
        username = auth_user.username(),
        role = %auth_user.role()
    )
)]
pub async fn profile(auth_user: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        message: "Welcome to the protected area!".to_string(),
        user: auth_user.0,
    })
}

/// Return sample data stamped with the time of the request
#[instrument(
    skip_all,
    fields(
        user_id = auth_user.user_id(),
        username = auth_user.username(),
        role = %auth_user.role()
    )
)]
pub async fn test_data(auth_user: AuthUser) -> Json<TestDataResponse> {
    Json(TestDataResponse {
        data: starter_pokedex(),
        received_at: Utc::now(),
        user: auth_user.0,
    })
}

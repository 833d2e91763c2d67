use axum::Json;
use axum::extract::State;
use tracing::instrument;

use pokegate_core::{AppError, AuthError};

use super::model::{
    LoginRequest, LoginResponse, MessageResponse, RefreshResponse, RefreshTokenRequest,
    TokenResponse,
};
use super::service::SessionService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Login and receive an access/refresh token pair
#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = SessionService::login(
        state.credentials.as_ref(),
        &state.refresh_tokens,
        &state.jwt_config,
        dto,
    )?;
    Ok(Json(response))
}

/// Login and receive a single access token
#[instrument(skip(state))]
pub async fn login_single_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response =
        SessionService::login_single_token(state.credentials.as_ref(), &state.jwt_config, dto)?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new access token
#[instrument(skip_all)]
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshTokenRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    let refresh_token = dto.refresh_token.ok_or(AuthError::MissingRefreshToken)?;

    let response = SessionService::refresh(
        state.credentials.as_ref(),
        &state.refresh_tokens,
        &state.jwt_config,
        state.session_config.refresh_policy,
        &refresh_token,
    )?;
    Ok(Json(response))
}

/// Revoke a refresh token
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshTokenRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let refresh_token = dto.refresh_token.ok_or(AuthError::MissingRefreshToken)?;

    SessionService::logout(&state.refresh_tokens, &refresh_token);
    Ok(Json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}

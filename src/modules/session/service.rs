use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, instrument};

use pokegate_auth::{
    CredentialStore, RefreshTokenRegistry, issue_access_token, issue_refresh_token,
    verify_refresh_token,
};
use pokegate_config::{JwtConfig, RefreshPolicy};
use pokegate_core::{AppError, AuthError};

use super::model::{LoginRequest, LoginResponse, RefreshResponse, TokenResponse};
use crate::state::AppState;

pub struct SessionService;

impl SessionService {
    /// Checks credentials, mints an access/refresh pair and registers the
    /// refresh token. Nothing is issued or stored on failure.
    #[instrument(skip(store, registry, jwt_config))]
    pub fn login(
        store: &dyn CredentialStore,
        registry: &RefreshTokenRegistry,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let user = store.verify(&dto.username, &dto.password)?;

        let access_token = issue_access_token(&user, jwt_config)?;
        let refresh_token = issue_refresh_token(&user, jwt_config)?;
        registry.register(refresh_token.clone());

        info!(user_id = user.id, active_sessions = registry.len(), "user logged in");

        Ok(LoginResponse {
            access_token,
            refresh_token,
            expires_in: jwt_config.access_token_expiry,
            refresh_expires_in: jwt_config.refresh_token_expiry,
        })
    }

    /// Login for the single-token server: one access token, no session state.
    #[instrument(skip(store, jwt_config))]
    pub fn login_single_token(
        store: &dyn CredentialStore,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<TokenResponse, AppError> {
        let user = store.verify(&dto.username, &dto.password)?;
        let token = issue_access_token(&user, jwt_config)?;

        info!(user_id = user.id, "user logged in");

        Ok(TokenResponse { token })
    }

    /// Exchanges an active refresh token for a new access token.
    ///
    /// Checks, in order: registry membership, signature and expiry under the
    /// refresh secret, and that the subject is still a known user. With
    /// [`RefreshPolicy::Rotate`] the presented token is swapped for a new one.
    #[instrument(skip_all, fields(policy = ?policy))]
    pub fn refresh(
        store: &dyn CredentialStore,
        registry: &RefreshTokenRegistry,
        jwt_config: &JwtConfig,
        policy: RefreshPolicy,
        refresh_token: &str,
    ) -> Result<RefreshResponse, AppError> {
        if !registry.is_active(refresh_token) {
            return Err(AuthError::UnregisteredRefreshToken.into());
        }

        let claims = verify_refresh_token(refresh_token, jwt_config)?;

        let user = store
            .find_by_id(claims.sub)
            .ok_or(AuthError::SubjectMismatch)?;

        let access_token = issue_access_token(&user, jwt_config)?;

        let (refresh_token, refresh_expires_in) = match policy {
            RefreshPolicy::Reuse => (None, None),
            RefreshPolicy::Rotate => {
                let rotated = issue_refresh_token(&user, jwt_config)?;
                if !registry.rotate(refresh_token, rotated.clone()) {
                    return Err(AuthError::UnregisteredRefreshToken.into());
                }
                (Some(rotated), Some(jwt_config.refresh_token_expiry))
            }
        };

        debug!(user_id = user.id, "access token refreshed");

        Ok(RefreshResponse {
            access_token,
            expires_in: jwt_config.access_token_expiry,
            refresh_token,
            refresh_expires_in,
        })
    }

    /// Revokes `refresh_token`. Unknown tokens are accepted silently.
    #[instrument(skip_all)]
    pub fn logout(registry: &RefreshTokenRegistry, refresh_token: &str) -> bool {
        let revoked = registry.revoke(refresh_token);
        info!(revoked, active_sessions = registry.len(), "logout");
        revoked
    }

    /// Drops registry entries whose refresh token has expired.
    pub fn purge_expired_refresh_tokens(
        registry: &RefreshTokenRegistry,
        jwt_config: &JwtConfig,
    ) -> usize {
        registry.retain(|token| {
            !matches!(
                verify_refresh_token(token, jwt_config),
                Err(AuthError::ExpiredToken)
            )
        })
    }
}

/// Periodically purges expired refresh tokens until the runtime shuts down.
pub fn spawn_refresh_token_sweeper(state: AppState, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = SessionService::purge_expired_refresh_tokens(
                &state.refresh_tokens,
                &state.jwt_config,
            );
            if removed > 0 {
                debug!(
                    removed,
                    remaining = state.refresh_tokens.len(),
                    "purged expired refresh tokens"
                );
            }
        }
    })
}

use std::sync::Arc;

use pokegate_auth::{CredentialStore, RefreshTokenRegistry, StaticCredentialStore};
use pokegate_config::{ConfigError, CorsConfig, JwtConfig, SessionConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub session_config: SessionConfig,
    pub credentials: Arc<dyn CredentialStore>,
    pub refresh_tokens: RefreshTokenRegistry,
}

impl AppState {
    /// State backed by the demo user and an empty refresh token registry.
    pub fn new(
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            jwt_config,
            cors_config,
            session_config,
            credentials: Arc::new(StaticCredentialStore::default()),
            refresh_tokens: RefreshTokenRegistry::new(),
        }
    }
}

pub fn init_app_state() -> Result<AppState, ConfigError> {
    Ok(AppState::new(
        JwtConfig::from_env()?,
        CorsConfig::from_env(),
        SessionConfig::from_env()?,
    ))
}

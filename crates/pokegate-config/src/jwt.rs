use std::env;
use std::fmt;

use crate::error::ConfigError;
use crate::vars::{non_empty, parse_or};

const DEMO_ACCESS_SECRET: &str = "super_secret_key_change_me";
const DEMO_REFRESH_SECRET: &str = "super_refresh_secret_change_me";

/// Upper bound for either token lifetime: one year.
pub const MAX_TOKEN_EXPIRY: i64 = 365 * 24 * 60 * 60;

/// Signing material and lifetimes for both token kinds.
///
/// Access and refresh tokens are signed with distinct secrets so that one
/// leaked key cannot mint the other kind of token.
#[derive(Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds.
    pub refresh_token_expiry: i64,
    /// Set when at least one secret fell back to a built-in demo value.
    pub uses_demo_secrets: bool,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut uses_demo_secrets = false;
        let access_secret = secret(&lookup, "JWT_SECRET", &mut uses_demo_secrets)?;
        let refresh_secret = secret(&lookup, "JWT_REFRESH_SECRET", &mut uses_demo_secrets)?;

        if access_secret == refresh_secret {
            return Err(ConfigError::SharedSecret);
        }

        Ok(Self {
            access_secret,
            refresh_secret,
            access_token_expiry: expiry(&lookup, "JWT_ACCESS_EXPIRY", 3600)?, // 1 hour
            refresh_token_expiry: expiry(&lookup, "JWT_REFRESH_EXPIRY", 604800)?, // 7 days
            uses_demo_secrets,
        })
    }
}

fn secret<L>(lookup: &L, key: &'static str, used_default: &mut bool) -> Result<String, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    if let Some(value) = non_empty(lookup, key) {
        return Ok(value);
    }

    if cfg!(feature = "demo-defaults") {
        *used_default = true;
        let fallback = match key {
            "JWT_REFRESH_SECRET" => DEMO_REFRESH_SECRET,
            _ => DEMO_ACCESS_SECRET,
        };
        return Ok(fallback.to_string());
    }

    Err(ConfigError::MissingSecret(key))
}

/// Token lifetime in seconds, within `1..=MAX_TOKEN_EXPIRY`.
fn expiry<L>(lookup: &L, key: &'static str, default: i64) -> Result<i64, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    let seconds = parse_or(lookup, key, default)?;
    if (1..=MAX_TOKEN_EXPIRY).contains(&seconds) {
        Ok(seconds)
    } else {
        Err(ConfigError::Invalid {
            key,
            value: seconds.to_string(),
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .field("uses_demo_secrets", &self.uses_demo_secrets)
            .finish()
    }
}

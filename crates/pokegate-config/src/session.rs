use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::vars::parse_or;

/// What `/refresh` does with the refresh token it was given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Keep the presented refresh token valid until logout or expiry.
    #[default]
    Reuse,
    /// Revoke the presented token and hand out a new one with each refresh.
    Rotate,
}

impl FromStr for RefreshPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reuse" => Ok(Self::Reuse),
            "rotate" => Ok(Self::Rotate),
            _ => Err(ConfigError::Invalid {
                key: "REFRESH_TOKEN_POLICY",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub refresh_policy: RefreshPolicy,
    /// Seconds between sweeps of expired refresh tokens. Zero disables sweeping.
    pub sweep_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_policy: RefreshPolicy::Reuse,
            sweep_interval_secs: 300,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            refresh_policy: parse_or(&lookup, "REFRESH_TOKEN_POLICY", defaults.refresh_policy)?,
            sweep_interval_secs: parse_or(
                &lookup,
                "REFRESH_SWEEP_INTERVAL",
                defaults.sweep_interval_secs,
            )?,
        })
    }

    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }
}

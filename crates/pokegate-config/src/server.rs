use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::vars::{non_empty, parse_or};

/// Which demo server to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServerVariant {
    /// `/login` returns a single access token; only `/profile` is protected.
    Single,
    /// Access + refresh tokens with `/refresh` and `/logout`.
    #[default]
    Pair,
}

impl FromStr for ServerVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "minimal" => Ok(Self::Single),
            "pair" => Ok(Self::Pair),
            _ => Err(ConfigError::Invalid {
                key: "SERVER_VARIANT",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ServerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Pair => f.write_str("pair"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub variant: ServerVariant,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: non_empty(&lookup, "HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            variant: parse_or(&lookup, "SERVER_VARIANT", ServerVariant::Pair)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

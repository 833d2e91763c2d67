use thiserror::Error;

/// Startup configuration failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingSecret(&'static str),

    #[error("JWT_SECRET and JWT_REFRESH_SECRET must differ")]
    SharedSecret,

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

use std::str::FromStr;

use crate::error::ConfigError;

/// Reads `key` through `lookup` and parses it, falling back to `default` when unset.
/// Blank values count as unset.
pub(crate) fn parse_or<T, L>(lookup: &L, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    L: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

pub(crate) fn non_empty<L>(lookup: &L, key: &str) -> Option<String>
where
    L: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

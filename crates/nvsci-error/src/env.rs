//! Environment variable helpers
//!
//! ```ignore
//! use nvsci_error::env::{env_get, env_get_bool};
//!
//! let strict: bool = env_get_bool("NVSCI_ERRINFO_STRICT", true);
//! let width: usize = env_get("NVSCI_ERRINFO_NAME_WIDTH", 40);
//! ```

use std::str::FromStr;

/// Parse an environment variable as `T`, or return `default` when unset
/// or unparsable.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Boolean variable.
///
/// "1", "true", "yes", "on" are true and "0", "false", "no", "off" are
/// false (case-insensitive). Unset or any other text returns `default`.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

/// `Some(T)` if the variable is set and parses.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

// ============================================================================
// Tests
// ============================================================================

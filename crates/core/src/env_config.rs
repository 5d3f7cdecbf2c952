//! Environment variable lookup for startup configuration.
//!
//! Required values fail fast with [`ConfigError`]; optional values fall back
//! to a default with a warning when set to something unparsable.

use std::fmt::Display;
use std::str::FromStr;

use crate::ConfigError;

/// Read a required environment variable.
///
/// Unset and blank values are both reported as [`ConfigError::Missing`].
pub fn env_required(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing { var: var.to_owned() }),
    }
}

/// Read and parse a required environment variable.
pub fn env_parse_required<T>(var: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env_required(var)?;
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: var.to_owned(),
        value: raw.clone(),
        reason: e.to_string(),
    })
}

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

#[cfg(test)]
#[allow(unsafe_code, reason = "each test owns a unique variable name")]
mod tests {
    use super::*;

    fn set(var: &str, value: &str) {
        // SAFETY: variable names are unique per test, nothing else reads them.
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        // SAFETY: see `set`.
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_required_present() {
        let var_name = "QUOTEBOOK_TEST_REQUIRED_PRESENT_41027";
        set(var_name, "postgres://localhost/quotes");
        assert_eq!(env_required(var_name).unwrap(), "postgres://localhost/quotes");
        unset(var_name);
    }

    #[test]
    fn test_env_required_missing() {
        let var_name = "QUOTEBOOK_TEST_REQUIRED_MISSING_41028";
        unset(var_name);
        assert_eq!(
            env_required(var_name),
            Err(ConfigError::Missing { var: var_name.to_owned() })
        );
    }

    #[test]
    fn test_env_required_blank_is_missing() {
        let var_name = "QUOTEBOOK_TEST_REQUIRED_BLANK_41029";
        set(var_name, "   ");
        assert!(matches!(env_required(var_name), Err(ConfigError::Missing { .. })));
        unset(var_name);
    }

    #[test]
    fn test_env_parse_required_invalid() {
        let var_name = "QUOTEBOOK_TEST_PARSE_REQUIRED_41030";
        set(var_name, "eighty");
        let err = env_parse_required::<u16>(var_name).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref value, .. } if value == "eighty"));
        unset(var_name);
    }

    #[test]
    fn test_env_parse_required_port() {
        let var_name = "QUOTEBOOK_TEST_PARSE_PORT_41031";
        set(var_name, "8080");
        assert_eq!(env_parse_required::<u16>(var_name).unwrap(), 8080);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "QUOTEBOOK_TEST_PARSE_INVALID_41032";
        set(var_name, "banana");
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "QUOTEBOOK_TEST_PARSE_MISSING_41033";
        unset(var_name);
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }
}

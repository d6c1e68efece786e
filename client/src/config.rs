//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs.

use r38_common::config::ClientConfig;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use r38_client::config::get_env_with_fallback;
///
/// let base_url = get_env_with_fallback("R38_BASE_URL", "BASE_URL");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Load client configuration from environment variables.
///
/// `R38_BASE_URL`（旧: `BASE_URL`）と `R38_TIMEOUT_SECS`（旧: `TIMEOUT_SECS`）を読み、
/// 未設定の項目は `ClientConfig::default()` の値を使う。
pub fn client_config_from_env() -> ClientConfig {
    let defaults = ClientConfig::default();
    ClientConfig {
        base_url: get_env_with_fallback_or("R38_BASE_URL", "BASE_URL", &defaults.base_url),
        timeout_secs: get_env_with_fallback_parse(
            "R38_TIMEOUT_SECS",
            "TIMEOUT_SECS",
            defaults.timeout_secs,
        ),
    }
}

/// ログレベルを取得
///
/// 環境変数 `R38_LOG_LEVEL`（旧: `LOG_LEVEL`）、未設定なら `info`。
pub fn log_level() -> String {
    get_env_with_fallback_or("R38_LOG_LEVEL", "LOG_LEVEL", "info")
}

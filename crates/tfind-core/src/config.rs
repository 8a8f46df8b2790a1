use crate::app_config::{AppConfig, LocationAuthorization};
use crate::ConfigError;

pub const DEFAULT_DIRECTORY_URL: &str = "https://www.cineplex.com/api/v1/theatres?language=en-us";
pub const DEFAULT_VENDOR_BASE_URL: &str = "https://www.cineplex.com";
pub const DEFAULT_SEARCH_RADIUS_METERS: f64 = 50_000.0;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can drive it
/// from a `HashMap` instead of the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_timeout_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))?;
        if secs == 0 {
            return Err(invalid(var, "timeout must be at least 1 second".to_string()));
        }
        Ok(secs)
    };

    let parse_radius = |var: &str| -> Result<f64, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(DEFAULT_SEARCH_RADIUS_METERS);
        };
        let radius = raw.parse::<f64>().map_err(|e| invalid(var, e.to_string()))?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(invalid(
                var,
                format!("radius must be a positive number of meters, got {raw}"),
            ));
        }
        Ok(radius)
    };

    let log_level = or_default("TFIND_LOG_LEVEL", "info");
    let directory_url = or_default("TFIND_DIRECTORY_URL", DEFAULT_DIRECTORY_URL);
    let vendor_base_url = or_default("TFIND_VENDOR_BASE_URL", DEFAULT_VENDOR_BASE_URL)
        .trim_end_matches('/')
        .to_string();
    let search_radius_meters = parse_radius("TFIND_SEARCH_RADIUS_METERS")?;
    let request_timeout_secs = parse_timeout_secs("TFIND_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TFIND_USER_AGENT", "tfind/0.1 (theatre-finder)");
    let location_authorization = parse_location_authorization(&or_default(
        "TFIND_LOCATION_AUTHORIZATION",
        "when-in-use",
    ))?;

    Ok(AppConfig {
        log_level,
        directory_url,
        vendor_base_url,
        search_radius_meters,
        request_timeout_secs,
        user_agent,
        location_authorization,
    })
}

fn parse_location_authorization(s: &str) -> Result<LocationAuthorization, ConfigError> {
    match s {
        "always" => Ok(LocationAuthorization::AuthorizedAlways),
        "when-in-use" => Ok(LocationAuthorization::AuthorizedWhenInUse),
        "denied" => Ok(LocationAuthorization::Denied),
        "not-determined" => Ok(LocationAuthorization::NotDetermined),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TFIND_LOCATION_AUTHORIZATION".to_string(),
            reason: format!(
                "unknown authorization '{other}' (expected always, when-in-use, denied, not-determined)"
            ),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

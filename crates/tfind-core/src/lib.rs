pub mod app_config;
pub mod config;
pub mod theater;

pub use app_config::{AppConfig, LocationAuthorization};
pub use config::{load_app_config, load_app_config_from_env};
pub use theater::{detail_url, Coordinate, TheaterRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

//! Receipt scoring core: the receipt data model, the point rules, and the
//! identifier-keyed store that holds computed scores.

pub mod app_config;
pub mod config;
pub mod ids;
pub mod points;
pub mod receipt;
pub mod store;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use ids::new_receipt_id;
pub use points::{calculate_points, score_breakdown, PointsBreakdown};
pub use receipt::{Item, Receipt};
pub use store::ScoreStore;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

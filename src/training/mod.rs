//! Periodic training for the regressor.
//!
//! This module provides:
//! - Step/period scheduling
//! - Regression error metrics (MSE, RMSE)
//! - The driver loop that alternates training slices with evaluation

mod config;
mod metrics;
mod trainer;

pub use config::PeriodicSchedule;
pub use metrics::{mean_squared_error, root_mean_squared_error};
pub use trainer::{train_regression_model, TrainingResult};

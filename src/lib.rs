//! # tabreg
//!
//! A Rust library for training feed-forward neural-network regressors over
//! tabular data, with per-period error reporting.
//!
//! Network layers, autodiff, optimizers, and checkpoint serialization are
//! delegated to the Burn framework; this crate wraps them in an estimator
//! object ([`DnnRegressor`]), a shuffled mini-batch input pipeline, a
//! periodic training driver, and a reporting sink for RMSE curves.
//!
//! ## Features
//!
//! - **Burn backend**: WGPU backend for GPU acceleration, NdArray for CPU.
//! - **Estimator API**: the regressor resumes training across calls and
//!   checkpoints into its model directory; a second run can warm-start from
//!   the first one's weights.
//! - **Periodic driver**: splits a step budget into reporting periods and
//!   records training/validation RMSE curves, one entry per period.
//!
//! ## Example
//!
//! ```
//! use tabreg::prelude::*;
//! use burn::backend::{Autodiff, NdArray};
//!
//! type Backend = Autodiff<NdArray>;
//!
//! let device = Default::default();
//! let examples = FeatureTable::new(
//!     vec!["latitude".into(), "longitude".into()],
//!     vec![vec![34.0, -118.0], vec![37.0, -122.0]],
//! )?;
//!
//! let model_dir = std::env::temp_dir().join(format!("tabreg-doc-{}", std::process::id()));
//! let regressor = DnnRegressorConfig::new(examples.columns().to_vec(), vec![8, 4], &model_dir)
//!     .with_seed(42)
//!     .build::<Backend>(&device)?;
//!
//! let predictions = regressor.predict(&examples)?;
//! assert_eq!(predictions.len(), 2);
//! # Ok::<(), tabreg::ModelError>(())
//! ```

pub mod checkpoint;
pub mod data;
pub mod errors;
pub mod layers;
pub mod optim;
pub mod regressor;
pub mod report;
pub mod training;

// Re-exports for convenience
pub use data::{FeatureTable, TargetColumn};
pub use errors::ModelError;
pub use optim::{GradientDescent, OptimizerConfig};
pub use regressor::{DnnRegressor, DnnRegressorConfig};
pub use report::RmseCurves;
pub use training::{train_regression_model, PeriodicSchedule, TrainingResult};

/// Backend type alias for WGPU with autodiff support.
pub type Backend = burn::backend::Autodiff<burn::backend::Wgpu>;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::data::{FeatureTable, TargetColumn};
    pub use crate::errors::ModelError;
    pub use crate::optim::{GradientDescent, OptimizerConfig};
    pub use crate::regressor::{DnnRegressor, DnnRegressorConfig};
    pub use crate::report::RmseCurves;
    pub use crate::training::{train_regression_model, PeriodicSchedule, TrainingResult};
    pub use crate::Backend;
}

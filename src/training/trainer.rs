//! Periodic training driver.
//!
//! Splits a step budget into reporting periods; each period trains the
//! regressor for its slice of steps, evaluates on both datasets, and appends
//! the RMSE of each to the returned curves.

use burn::tensor::backend::AutodiffBackend;

use super::config::PeriodicSchedule;
use super::metrics::root_mean_squared_error;
use crate::data::{FeatureTable, TargetColumn};
use crate::errors::ModelError;
use crate::regressor::{DnnRegressor, DnnRegressorConfig};
use crate::report::RmseCurves;

/// Training outcome: the live estimator plus per-period error curves.
#[derive(Debug)]
pub struct TrainingResult<B: AutodiffBackend> {
    /// The trained regressor, still usable for prediction or more training.
    pub regressor: DnnRegressor<B>,
    /// Training-set RMSE, one entry per period.
    pub training_rmse: Vec<f32>,
    /// Validation-set RMSE, one entry per period.
    pub validation_rmse: Vec<f32>,
}

impl<B: AutodiffBackend> TrainingResult<B> {
    /// Bundles both curves for reporting.
    pub fn curves(&self) -> RmseCurves {
        RmseCurves::new(self.training_rmse.clone(), self.validation_rmse.clone())
    }
}

/// Trains a feed-forward regression model with periodic evaluation.
///
/// Builds the estimator once at entry, then alternates training slices with
/// full evaluation passes over the training and validation tables, reducing
/// each prediction vector to an RMSE scalar. There is no convergence check
/// and no early stopping; errors from the underlying train or predict calls
/// propagate to the caller.
pub fn train_regression_model<B: AutodiffBackend>(
    config: &DnnRegressorConfig,
    schedule: &PeriodicSchedule,
    training_examples: &FeatureTable,
    training_targets: &TargetColumn,
    validation_examples: &FeatureTable,
    validation_targets: &TargetColumn,
    device: &B::Device,
) -> Result<TrainingResult<B>, ModelError> {
    schedule.validate()?;
    if validation_examples.num_rows() != validation_targets.len() {
        return Err(ModelError::RowCountMismatch {
            examples: validation_examples.num_rows(),
            targets: validation_targets.len(),
        });
    }

    let mut regressor = config.build::<B>(device)?;

    log::info!(
        "training model: {} steps over {} periods, batch size {}",
        schedule.steps,
        schedule.periods,
        schedule.batch_size
    );

    let mut training_rmse = Vec::with_capacity(schedule.periods);
    let mut validation_rmse = Vec::with_capacity(schedule.periods);

    for period in 0..schedule.periods {
        // Train from the prior state, then take a break to compute
        // predictions on both sets.
        regressor.train(
            training_examples,
            training_targets,
            schedule.steps_for_period(period),
            schedule.batch_size,
        )?;

        let training_predictions = regressor.predict(training_examples)?;
        let validation_predictions = regressor.predict(validation_examples)?;

        let training_error =
            root_mean_squared_error(&training_predictions, training_targets.values());
        let validation_error =
            root_mean_squared_error(&validation_predictions, validation_targets.values());

        log::info!("  period {:02} : {:.2}", period, training_error);

        training_rmse.push(training_error);
        validation_rmse.push(validation_error);
    }

    log::info!(
        "model training finished at global step {}",
        regressor.global_step()
    );

    Ok(TrainingResult {
        regressor,
        training_rmse,
        validation_rmse,
    })
}

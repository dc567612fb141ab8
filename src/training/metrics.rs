//! Regression error metrics.

/// Mean squared error between predictions and targets.
///
/// Both slices must have the same length; an empty pair yields 0.
pub fn mean_squared_error(predictions: &[f32], targets: &[f32]) -> f32 {
    debug_assert_eq!(predictions.len(), targets.len());
    if predictions.is_empty() {
        return 0.0;
    }
    let sum: f32 = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| (p - t) * (p - t))
        .sum();
    sum / predictions.len() as f32
}

/// Root-mean-squared error: `sqrt(mean((prediction - target)^2))`.
pub fn root_mean_squared_error(predictions: &[f32], targets: &[f32]) -> f32 {
    mean_squared_error(predictions, targets).sqrt()
}

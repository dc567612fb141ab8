//! Integration tests exercising the full periodic-training flow: build a
//! regressor, train it over several periods, and check the reported curves,
//! checkpoints, and warm-start behavior.

use burn::backend::{Autodiff, NdArray};
use tabreg::prelude::*;
use tabreg::report;
use tempfile::TempDir;

type TrainingBackend = Autodiff<NdArray>;

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Noise-free plane: y = 2*a - b.
fn plane_dataset(rows: usize, offset: f32) -> (FeatureTable, TargetColumn) {
    let data: Vec<Vec<f32>> = (0..rows)
        .map(|i| {
            let a = offset + i as f32 * 0.1;
            let b = offset - i as f32 * 0.05;
            vec![a, b]
        })
        .collect();
    let targets = data.iter().map(|row| 2.0 * row[0] - row[1]).collect();
    (
        FeatureTable::new(names(&["a", "b"]), data).expect("Table build should succeed"),
        TargetColumn::new("y", targets),
    )
}

#[test]
fn test_periodic_training_end_to_end() {
    let model_dir = TempDir::new().expect("Temp dir should be created");
    let device = Default::default();
    let (train_x, train_y) = plane_dataset(40, 0.0);
    let (valid_x, valid_y) = plane_dataset(12, 0.3);

    let config = DnnRegressorConfig::new(names(&["a", "b"]), vec![8, 4], model_dir.path())
        .with_optimizer(OptimizerConfig::new(GradientDescent::Adam, 0.02))
        .with_seed(17);
    let schedule = PeriodicSchedule::new().steps(60).periods(5).batch_size(10);

    let result = train_regression_model::<TrainingBackend>(
        &config, &schedule, &train_x, &train_y, &valid_x, &valid_y, &device,
    )
    .expect("Training should succeed");

    // One curve entry per period, all non-negative.
    assert_eq!(result.training_rmse.len(), 5);
    assert_eq!(result.validation_rmse.len(), 5);
    assert!(result.training_rmse.iter().all(|v| *v >= 0.0));
    assert!(result.validation_rmse.iter().all(|v| *v >= 0.0));

    // The whole step budget was spent.
    assert_eq!(result.regressor.global_step(), 60);

    // Training left checkpoints in the model directory.
    let checkpoints = std::fs::read_dir(model_dir.path())
        .expect("Model dir should be readable")
        .flatten()
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "mpk"))
        .count();
    assert!(checkpoints > 0);
}

#[test]
fn test_training_improves_fit_on_linear_data() {
    let model_dir = TempDir::new().expect("Temp dir should be created");
    let device = Default::default();
    let (train_x, train_y) = plane_dataset(40, 0.0);
    let (valid_x, valid_y) = plane_dataset(12, 0.3);

    let config = DnnRegressorConfig::new(names(&["a", "b"]), vec![8], model_dir.path())
        .with_optimizer(OptimizerConfig::new(GradientDescent::Adam, 0.05))
        .with_seed(23);
    let schedule = PeriodicSchedule::new().steps(300).periods(6).batch_size(10);

    let result = train_regression_model::<TrainingBackend>(
        &config, &schedule, &train_x, &train_y, &valid_x, &valid_y, &device,
    )
    .expect("Training should succeed");

    let first = result.training_rmse.first().copied().unwrap_or(f32::MAX);
    let last = result.training_rmse.last().copied().unwrap_or(f32::MAX);
    assert!(
        last < first,
        "Training RMSE should decrease: first={}, last={}",
        first,
        last
    );
}

#[test]
fn test_returned_handle_supports_further_use() {
    let model_dir = TempDir::new().expect("Temp dir should be created");
    let device = Default::default();
    let (train_x, train_y) = plane_dataset(20, 0.0);
    let (valid_x, valid_y) = plane_dataset(8, 0.3);

    let config = DnnRegressorConfig::new(names(&["a", "b"]), vec![4], model_dir.path()).with_seed(9);
    let schedule = PeriodicSchedule::new().steps(10).periods(2).batch_size(5);

    let mut result = train_regression_model::<TrainingBackend>(
        &config, &schedule, &train_x, &train_y, &valid_x, &valid_y, &device,
    )
    .expect("Training should succeed");

    let predictions = result
        .regressor
        .predict(&train_x)
        .expect("Predict should succeed");
    assert_eq!(predictions.len(), train_x.num_rows());

    result
        .regressor
        .train(&train_x, &train_y, 5, 5)
        .expect("Further training should succeed");
    assert_eq!(result.regressor.global_step(), 15);
}

#[test]
fn test_warm_start_continues_from_previous_run() {
    let first_dir = TempDir::new().expect("Temp dir should be created");
    let second_dir = TempDir::new().expect("Temp dir should be created");
    let device = Default::default();
    let (train_x, train_y) = plane_dataset(20, 0.0);
    let (valid_x, valid_y) = plane_dataset(8, 0.3);

    let first_config =
        DnnRegressorConfig::new(names(&["a", "b"]), vec![4], first_dir.path()).with_seed(31);
    let schedule = PeriodicSchedule::new().steps(20).periods(2).batch_size(5);

    let first = train_regression_model::<TrainingBackend>(
        &first_config, &schedule, &train_x, &train_y, &valid_x, &valid_y, &device,
    )
    .expect("First run should succeed");
    let first_predictions = first
        .regressor
        .predict(&valid_x)
        .expect("Predict should succeed");

    // A fresh estimator warm-started from the first run's model dir begins
    // with identical weights.
    let warmed = DnnRegressorConfig::new(names(&["a", "b"]), vec![4], second_dir.path())
        .with_warm_start(first_dir.path())
        .build::<TrainingBackend>(&device)
        .expect("Warm start should succeed");
    let warmed_predictions = warmed.predict(&valid_x).expect("Predict should succeed");

    for (a, b) in first_predictions.iter().zip(warmed_predictions.iter()) {
        assert!((a - b).abs() < 1e-6, "Expected {} to match {}", a, b);
    }
}

#[test]
fn test_curves_report_and_save() {
    let model_dir = TempDir::new().expect("Temp dir should be created");
    let out_dir = TempDir::new().expect("Temp dir should be created");
    let device = Default::default();
    let (train_x, train_y) = plane_dataset(20, 0.0);
    let (valid_x, valid_y) = plane_dataset(8, 0.3);

    let config = DnnRegressorConfig::new(names(&["a", "b"]), vec![4], model_dir.path()).with_seed(2);
    let schedule = PeriodicSchedule::new().steps(9).periods(3).batch_size(5);

    let result = train_regression_model::<TrainingBackend>(
        &config, &schedule, &train_x, &train_y, &valid_x, &valid_y, &device,
    )
    .expect("Training should succeed");

    let curves = result.curves();
    assert_eq!(curves.periods(), 3);
    assert_eq!(curves.final_training(), result.training_rmse.last().copied());

    let chart = report::render_chart(&curves);
    assert!(chart.contains("Root Mean Squared Error vs. Periods"));

    let path = out_dir.path().join("curves.json");
    curves.save(&path).expect("Save should succeed");
    let json = std::fs::read_to_string(&path).expect("File should be readable");
    let restored: RmseCurves = serde_json::from_str(&json).expect("JSON should parse");
    assert_eq!(restored, curves);
}

//! `DnnRegressor` - a feed-forward regression estimator over tabular data.
//!
//! The regressor owns a stack of dense layers, its optimizer settings, and a
//! checkpoint directory. Repeated `train` calls resume from the weights left
//! behind by the previous call, so a driver can interleave training slices
//! with evaluation passes on the same live handle.

use std::path::PathBuf;

use burn::module::Module;
use burn::optim::{GradientsParams, Optimizer};
use burn::tensor::backend::{AutodiffBackend, Backend};
use burn::tensor::Tensor;

use crate::checkpoint::Checkpointer;
use crate::data::{BatchSampler, FeatureTable, TargetColumn};
use crate::errors::ModelError;
use crate::layers::{Activation, Dense, DenseConfig};
use crate::optim::{GradientDescent, OptimizerConfig};

/// Checkpoints kept per model directory.
const CHECKPOINTS_RETAINED: usize = 5;

/// Configuration for building a [`DnnRegressor`].
#[derive(Debug, Clone)]
pub struct DnnRegressorConfig {
    /// Names of the predictor columns, in the order the network consumes them.
    pub feature_columns: Vec<String>,
    /// Width of each hidden ReLU layer.
    pub hidden_units: Vec<usize>,
    /// Optimizer settings (update rule, learning rate, clip norm).
    pub optimizer: OptimizerConfig,
    /// Directory receiving a checkpoint after every training call.
    pub model_dir: PathBuf,
    /// Optional model directory to load initial weights from.
    pub warm_start_from: Option<PathBuf>,
    /// Seed for the shuffled input pipeline.
    pub seed: Option<u64>,
}

impl DnnRegressorConfig {
    /// Creates a config with default optimizer settings and no warm start.
    pub fn new(
        feature_columns: Vec<String>,
        hidden_units: Vec<usize>,
        model_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            feature_columns,
            hidden_units,
            optimizer: OptimizerConfig::default(),
            model_dir: model_dir.into(),
            warm_start_from: None,
            seed: None,
        }
    }

    /// Sets the optimizer.
    pub fn with_optimizer(mut self, optimizer: OptimizerConfig) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Warm-starts from the latest checkpoint in another model directory.
    pub fn with_warm_start(mut self, dir: impl Into<PathBuf>) -> Self {
        self.warm_start_from = Some(dir.into());
        self
    }

    /// Seeds the input pipeline for reproducible batch order.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the estimator, creating fresh weights on `device` or loading
    /// them from the warm-start directory.
    pub fn build<B: AutodiffBackend>(
        &self,
        device: &B::Device,
    ) -> Result<DnnRegressor<B>, ModelError> {
        if self.feature_columns.is_empty() {
            return Err(ModelError::NoFeatureColumns);
        }
        if self.hidden_units.is_empty() {
            return Err(ModelError::NoHiddenLayers);
        }

        let mut layers = Vec::with_capacity(self.hidden_units.len() + 1);
        let mut input_size = self.feature_columns.len();
        for &width in &self.hidden_units {
            layers.push(
                DenseConfig::new(input_size, width)
                    .with_activation(Activation::Relu)
                    .init(device),
            );
            input_size = width;
        }
        // Single linear output unit.
        layers.push(DenseConfig::new(input_size, 1).init(device));

        let mut network = RegressorNetwork { layers };
        if let Some(dir) = &self.warm_start_from {
            let source = Checkpointer::new(dir, CHECKPOINTS_RETAINED)?;
            network = source
                .restore_latest(network, device)?
                .ok_or_else(|| ModelError::Checkpoint {
                    message: format!("no checkpoint to warm-start from in {}", dir.display()),
                })?;
        }

        Ok(DnnRegressor {
            feature_columns: self.feature_columns.clone(),
            hidden_units: self.hidden_units.clone(),
            optimizer: self.optimizer.clone(),
            checkpointer: Checkpointer::new(&self.model_dir, CHECKPOINTS_RETAINED)?,
            seed: self.seed,
            device: device.clone(),
            network,
            global_step: 0,
        })
    }
}

/// The dense stack owned by the estimator: hidden ReLU layers followed by a
/// single linear output unit.
#[derive(Module, Debug)]
pub struct RegressorNetwork<B: Backend> {
    layers: Vec<Dense<B>>,
}

impl<B: Backend> RegressorNetwork<B> {
    /// Forward pass: `[batch, features] -> [batch, 1]`.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let mut x = input;
        for layer in &self.layers {
            x = layer.forward(x);
        }
        x
    }
}

/// A feed-forward regression estimator.
///
/// Stateful across calls: `train` advances the same weights every time, and a
/// checkpoint lands in the model directory after each call. The handle stays
/// live after training, so callers can keep predicting or training with it.
#[derive(Debug)]
pub struct DnnRegressor<B: AutodiffBackend> {
    feature_columns: Vec<String>,
    hidden_units: Vec<usize>,
    optimizer: OptimizerConfig,
    checkpointer: Checkpointer,
    seed: Option<u64>,
    device: B::Device,
    network: RegressorNetwork<B>,
    global_step: u64,
}

impl<B: AutodiffBackend> DnnRegressor<B> {
    /// Runs `steps` forward/backward passes, one shuffled mini-batch per
    /// step, then checkpoints the updated weights into the model directory.
    pub fn train(
        &mut self,
        examples: &FeatureTable,
        targets: &TargetColumn,
        steps: u64,
        batch_size: usize,
    ) -> Result<(), ModelError> {
        self.check_features(examples)?;
        if examples.num_rows() != targets.len() {
            return Err(ModelError::RowCountMismatch {
                examples: examples.num_rows(),
                targets: targets.len(),
            });
        }
        if examples.is_empty() {
            return Err(ModelError::EmptyTable);
        }
        if batch_size == 0 {
            return Err(ModelError::InvalidSchedule {
                message: "batch size must be non-zero".to_string(),
            });
        }

        match self.optimizer.method {
            GradientDescent::Sgd => {
                let mut optimizer = self.optimizer.sgd_config().init();
                self.run_steps(&mut optimizer, examples, targets, steps, batch_size);
            }
            GradientDescent::Adagrad => {
                let mut optimizer = self.optimizer.adagrad_config().init();
                self.run_steps(&mut optimizer, examples, targets, steps, batch_size);
            }
            GradientDescent::Adam => {
                let mut optimizer = self.optimizer.adam_config().init();
                self.run_steps(&mut optimizer, examples, targets, steps, batch_size);
            }
        }

        self.checkpointer
            .save(&self.network, self.global_step)
            .map(|_| ())
    }

    fn run_steps<O>(
        &mut self,
        optimizer: &mut O,
        examples: &FeatureTable,
        targets: &TargetColumn,
        steps: u64,
        batch_size: usize,
    ) where
        O: Optimizer<RegressorNetwork<B>, B>,
    {
        // Vary the shuffle order between calls while staying reproducible
        // for a fixed seed.
        let sampler_seed = self.seed.map(|seed| seed ^ self.global_step);
        let mut sampler = BatchSampler::new(examples.num_rows(), sampler_seed);
        let num_features = examples.num_features();

        let mut network = self.network.clone();
        for _ in 0..steps {
            let indices = sampler.next_batch(batch_size);
            let batch_rows = examples.gather_rows(&indices);
            let batch_targets = targets.gather(&indices);

            let input = Tensor::<B, 1>::from_floats(batch_rows.as_slice(), &self.device)
                .reshape([indices.len(), num_features]);
            let target = Tensor::<B, 1>::from_floats(batch_targets.as_slice(), &self.device)
                .reshape([indices.len(), 1]);

            let predictions = network.forward(input);
            let diff = predictions - target;
            let loss = (diff.clone() * diff).mean();

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &network);
            network = optimizer.step(self.optimizer.learning_rate, network, grads);
            self.global_step += 1;
        }
        self.network = network;
    }

    /// Full-table forward pass, no shuffling: one predicted value per row.
    pub fn predict(&self, examples: &FeatureTable) -> Result<Vec<f32>, ModelError> {
        self.check_features(examples)?;
        if examples.is_empty() {
            return Ok(Vec::new());
        }

        let flat = examples.flattened();
        let input = Tensor::<B, 1>::from_floats(flat.as_slice(), &self.device)
            .reshape([examples.num_rows(), examples.num_features()]);
        let output = self.network.forward(input);
        output
            .to_data()
            .to_vec()
            .map_err(|e| ModelError::TensorData {
                message: format!("{e:?}"),
            })
    }

    fn check_features(&self, examples: &FeatureTable) -> Result<(), ModelError> {
        if examples.columns() != self.feature_columns.as_slice() {
            return Err(ModelError::FeatureColumnMismatch {
                expected: self.feature_columns.clone(),
                actual: examples.columns().to_vec(),
            });
        }
        Ok(())
    }

    /// Total training steps taken across all `train` calls.
    pub fn global_step(&self) -> u64 {
        self.global_step
    }

    /// The predictor column names the network consumes.
    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    /// Hidden layer widths.
    pub fn hidden_units(&self) -> &[usize] {
        &self.hidden_units
    }

    /// The underlying dense stack.
    pub fn network(&self) -> &RegressorNetwork<B> {
        &self.network
    }
}

//! Optimizer selection for the regressor.
//!
//! The estimator accepts one of three gradient-descent variants; whichever is
//! chosen, gradients are clipped by global norm before every update unless the
//! caller disables clipping.

use burn::grad_clipping::GradientClippingConfig;
use burn::optim::{AdaGradConfig, AdamConfig, SgdConfig};
use serde::{Deserialize, Serialize};

/// Norm applied when callers do not override clipping.
pub const DEFAULT_CLIP_NORM: f32 = 5.0;

/// Supported gradient-descent update rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientDescent {
    /// Plain stochastic gradient descent.
    #[default]
    Sgd,
    /// Adagrad with per-parameter learning-rate scaling.
    Adagrad,
    /// Adam with bias-corrected moment estimates.
    Adam,
}

/// Optimizer settings carried by the regressor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Which update rule to use.
    pub method: GradientDescent,
    /// Learning rate passed to every optimizer step.
    pub learning_rate: f64,
    /// Clip gradients to this global norm before each update.
    pub clip_norm: Option<f32>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            method: GradientDescent::Sgd,
            learning_rate: 1e-3,
            clip_norm: Some(DEFAULT_CLIP_NORM),
        }
    }
}

impl OptimizerConfig {
    /// Creates a config with the default clip norm.
    pub fn new(method: GradientDescent, learning_rate: f64) -> Self {
        Self {
            method,
            learning_rate,
            clip_norm: Some(DEFAULT_CLIP_NORM),
        }
    }

    /// Overrides or disables gradient clipping.
    pub fn with_clip_norm(mut self, clip_norm: Option<f32>) -> Self {
        self.clip_norm = clip_norm;
        self
    }

    fn clipping(&self) -> Option<GradientClippingConfig> {
        self.clip_norm.map(GradientClippingConfig::Norm)
    }

    pub(crate) fn sgd_config(&self) -> SgdConfig {
        SgdConfig::new().with_gradient_clipping(self.clipping())
    }

    pub(crate) fn adagrad_config(&self) -> AdaGradConfig {
        AdaGradConfig::new().with_grad_clipping(self.clipping())
    }

    pub(crate) fn adam_config(&self) -> AdamConfig {
        AdamConfig::new().with_grad_clipping(self.clipping())
    }
}

//! Neural network layer implementations.
//!
//! Building blocks for the regressor's dense stack: fully connected layers
//! and their activation functions.

pub mod activation;
pub mod dense;

pub use activation::Activation;
pub use dense::{Dense, DenseConfig};

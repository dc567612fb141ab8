//! Model-directory persistence for network weights.
//!
//! Checkpoints are msgpack records written by Burn's file recorder, named by
//! global step so the latest state of a run can be located and restored.

use std::fs;
use std::path::{Path, PathBuf};

use burn::module::Module;
use burn::record::{FullPrecisionSettings, NamedMpkFileRecorder};
use burn::tensor::backend::Backend;

use crate::errors::ModelError;

const CHECKPOINT_PREFIX: &str = "model-";
const CHECKPOINT_EXTENSION: &str = "mpk";

/// Directory-scoped saver/loader for network weights.
///
/// Only the most recent `max_retained` checkpoints are kept on disk.
#[derive(Debug, Clone)]
pub struct Checkpointer {
    model_dir: PathBuf,
    max_retained: usize,
}

impl Checkpointer {
    /// Opens a checkpoint directory, creating it if needed.
    pub fn new<P: AsRef<Path>>(model_dir: P, max_retained: usize) -> Result<Self, ModelError> {
        let model_dir = model_dir.as_ref().to_path_buf();
        fs::create_dir_all(&model_dir).map_err(|e| ModelError::Checkpoint {
            message: format!("failed to create {}: {e}", model_dir.display()),
        })?;
        Ok(Self {
            model_dir,
            max_retained,
        })
    }

    /// The directory this checkpointer writes into.
    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    // Extension left off; the recorder sets it.
    fn path_for(&self, step: u64) -> PathBuf {
        self.model_dir.join(format!("{CHECKPOINT_PREFIX}{step:08}"))
    }

    /// Saves the network record under the given global step.
    pub fn save<B, M>(&self, network: &M, step: u64) -> Result<PathBuf, ModelError>
    where
        B: Backend,
        M: Module<B>,
    {
        let path = self.path_for(step);
        let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
        network
            .clone()
            .save_file(&path, &recorder)
            .map_err(|e| ModelError::Checkpoint {
                message: format!("failed to save {}: {e}", path.display()),
            })?;
        log::debug!("saved checkpoint for step {} in {}", step, self.model_dir.display());
        self.prune();
        Ok(path)
    }

    /// Loads the record saved under `step` into the given network.
    pub fn load<B, M>(&self, network: M, step: u64, device: &B::Device) -> Result<M, ModelError>
    where
        B: Backend,
        M: Module<B>,
    {
        let path = self.path_for(step);
        let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
        network
            .load_file(&path, &recorder, device)
            .map_err(|e| ModelError::Checkpoint {
                message: format!("failed to load {}: {e}", path.display()),
            })
    }

    /// Step number of the most recent checkpoint, if any exist.
    pub fn latest_step(&self) -> Option<u64> {
        let entries = fs::read_dir(&self.model_dir).ok()?;
        entries
            .flatten()
            .filter_map(|entry| Self::parse_step(&entry.path()))
            .max()
    }

    /// Loads the most recent checkpoint into the given network, or returns
    /// `None` when the directory holds no checkpoints.
    pub fn restore_latest<B, M>(
        &self,
        network: M,
        device: &B::Device,
    ) -> Result<Option<M>, ModelError>
    where
        B: Backend,
        M: Module<B>,
    {
        match self.latest_step() {
            Some(step) => self.load(network, step, device).map(Some),
            None => Ok(None),
        }
    }

    fn parse_step(path: &Path) -> Option<u64> {
        if path.extension()?.to_str()? != CHECKPOINT_EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        stem.strip_prefix(CHECKPOINT_PREFIX)?.parse().ok()
    }

    fn prune(&self) {
        let Ok(entries) = fs::read_dir(&self.model_dir) else {
            return;
        };
        let mut steps: Vec<u64> = entries
            .flatten()
            .filter_map(|entry| Self::parse_step(&entry.path()))
            .collect();
        if steps.len() <= self.max_retained {
            return;
        }
        steps.sort_unstable();
        let excess = steps.len() - self.max_retained;
        for step in steps.into_iter().take(excess) {
            let mut path = self.path_for(step);
            path.set_extension(CHECKPOINT_EXTENSION);
            if let Err(e) = fs::remove_file(&path) {
                log::warn!("failed to remove old checkpoint {}: {e}", path.display());
            }
        }
    }
}

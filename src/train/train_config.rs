use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`           — total number of full passes over the training data;
///                        every pass updates the weights once per sample
/// - `display_interval` — loss is reported after epoch 1 and after every
///                        epoch divisible by this value; must be at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub display_interval: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig { epochs: 1000, display_interval: 100 }
    }
}

impl TrainConfig {
    pub fn new(epochs: usize, display_interval: usize) -> Self {
        TrainConfig { epochs, display_interval }
    }

    pub fn validate(&self) -> Result<()> {
        if self.display_interval == 0 {
            return Err(Error::Configuration("display_interval must be at least 1".into()));
        }
        Ok(())
    }

    /// Whether the loss is reported at the end of the 1-based `epoch`.
    pub fn should_report(&self, epoch: usize) -> bool {
        epoch == 1 || (self.display_interval > 0 && epoch % self.display_interval == 0)
    }
}

use serde::{Serialize, Deserialize};

/// Statistics for one reported epoch.
///
/// `train_loop` produces one value after epoch 1 and after every
/// `display_interval`-th epoch, hands it to the configured reporter and keeps
/// it in the returned history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Half mean-squared error over the full dataset after this epoch.
    pub loss: f64,
    /// Argmax accuracy in [0, 1]; only set when targets have more than one column.
    pub accuracy: Option<f64>,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

impl EpochStats {
    /// The `epoch=<k>, loss=<v>` progress line, loss at 7 decimals.
    pub fn progress_line(&self) -> String {
        format!("epoch={}, loss={:.7}", self.epoch, self.loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_uses_seven_decimals() {
        let stats = EpochStats {
            epoch: 100,
            total_epochs: 1000,
            loss: 0.125,
            accuracy: None,
            elapsed_ms: 0,
        };
        assert_eq!(stats.progress_line(), "epoch=100, loss=0.1250000");
    }
}

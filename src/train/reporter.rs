use std::sync::mpsc;

use tracing::info;

use crate::train::epoch_stats::EpochStats;

/// Receives progress from `train_loop`.
///
/// The loop never prints on its own; whatever should happen with a checkpoint
/// (logging, forwarding to another thread, collecting into a chart) lives in
/// an implementation of this trait.
pub trait ProgressReporter {
    fn report(&mut self, stats: &EpochStats);
}

/// Logs `epoch=<k>, loss=<v>` at INFO level through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn report(&mut self, stats: &EpochStats) {
        match stats.accuracy {
            Some(acc) => info!(accuracy = acc, "{}", stats.progress_line()),
            None => info!("{}", stats.progress_line()),
        }
    }
}

/// Discards every checkpoint.
impl ProgressReporter for () {
    fn report(&mut self, _stats: &EpochStats) {}
}

/// Forwards checkpoints to a receiver on another thread. A dropped receiver
/// does not stop training.
impl ProgressReporter for mpsc::Sender<EpochStats> {
    fn report(&mut self, stats: &EpochStats) {
        let _ = self.send(stats.clone());
    }
}

impl<F> ProgressReporter for F
where
    F: FnMut(&EpochStats),
{
    fn report(&mut self, stats: &EpochStats) {
        self(stats)
    }
}

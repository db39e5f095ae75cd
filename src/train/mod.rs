pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;
pub mod metrics;
pub mod reporter;

pub use trainer::train_sample;
pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use loop_fn::{evaluate_loss, train_loop};
pub use metrics::{accuracy, argmax};
pub use reporter::{ProgressReporter, TracingReporter};

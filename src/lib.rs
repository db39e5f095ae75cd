pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationKind;
pub use network::network::{ForwardTrace, Network};
pub use network::config::RunConfig;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use data::dataset::Dataset;
pub use data::logic::LogicTable;
pub use train::{
    accuracy, evaluate_loss, train_loop, train_sample, EpochStats, ProgressReporter, TracingReporter, TrainConfig,
};

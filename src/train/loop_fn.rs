use std::time::Instant;

use tracing::debug;

use crate::data::dataset::Dataset;
use crate::error::{Error, Result};
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::metrics;
use crate::train::reporter::ProgressReporter;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_sample;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for exactly `config.epochs` epochs and returns the stats
/// of every reported epoch.
///
/// # Arguments
/// - `network`  — mutable reference to the network; modified in place
/// - `dataset`  — features and targets; widths must match the first and last
///                layer sizes
/// - `config`   — epoch count and reporting interval
/// - `reporter` — receives one `EpochStats` after epoch 1 and after every
///                `display_interval`-th epoch
///
/// Samples are visited in dataset order and every sample's update is applied
/// before the next one is processed. There is no early stopping.
///
/// # Errors
/// - `Error::Configuration` if `display_interval` is 0
/// - `Error::Dimension` if the dataset does not fit the network
/// - `Error::Arithmetic` if any weight is NaN or infinite after an epoch, or
///   a reported loss is
pub fn train_loop<P: ProgressReporter + ?Sized>(
    network: &mut Network,
    dataset: &Dataset,
    config: &TrainConfig,
    reporter: &mut P,
) -> Result<Vec<EpochStats>> {
    config.validate()?;
    dataset.validate_for(network)?;

    let inputs = dataset.augmented();
    let targets = dataset.targets();
    let mut history = Vec::new();

    debug!(
        network = %network,
        samples = dataset.len(),
        epochs = config.epochs,
        "starting training"
    );

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        // ── One full pass over the training data ───────────────────────────
        for (input, target) in inputs.iter().zip(targets.iter()) {
            train_sample(network, input, target)?;
        }
        if !network.weights.iter().all(Matrix::is_finite) {
            return Err(Error::Arithmetic(format!("epoch {epoch}: weights are not finite")));
        }

        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        if !config.should_report(epoch) {
            continue;
        }

        // ── Evaluate and emit progress ────────────────────────────────────
        let predictions = predict_augmented(network, &inputs)?;
        let loss = MseLoss::loss(&predictions, targets).map_err(|err| match err {
            Error::Arithmetic(msg) => Error::Arithmetic(format!("epoch {epoch}: {msg}")),
            other => other,
        })?;
        let accuracy = if dataset.target_width() > 1 {
            Some(metrics::accuracy(&predictions, targets)?)
        } else {
            None
        };

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            loss,
            accuracy,
            elapsed_ms,
        };
        reporter.report(&stats);
        history.push(stats);
    }

    Ok(history)
}

/// Half-MSE of `network` over a whole dataset without touching the weights.
pub fn evaluate_loss(network: &Network, dataset: &Dataset) -> Result<f64> {
    dataset.validate_for(network)?;
    let predictions = network.predict_batch(dataset.features())?;
    MseLoss::loss(&predictions, dataset.targets())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn predict_augmented(network: &Network, inputs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    inputs.iter()
        .map(|x| network.forward_augmented(x).map(|trace| trace.output().to_vec()))
        .collect()
}

use std::path::PathBuf;
use std::process::ExitCode;

use backprop_nn::{evaluate_loss, ActivationKind, LogicTable, RunConfig, TracingReporter};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Train a fully-connected network on a two-input truth table.
///
/// Values given on the command line override those from `--config`.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Layer sizes, input first, e.g. `2,2,1`
    #[arg(short, long, value_delimiter = ',')]
    layers: Option<Vec<usize>>,

    /// unit_step, sigmoid, relu or identity
    #[arg(short, long)]
    activation: Option<ActivationKind>,

    #[arg(long)]
    learning_rate: Option<f64>,

    #[arg(short, long)]
    epochs: Option<usize>,

    /// Report the loss every N epochs
    #[arg(short, long)]
    display_interval: Option<usize>,

    /// Seed for weight initialisation
    #[arg(short, long)]
    seed: Option<u64>,

    /// xor, and or or
    #[arg(long)]
    dataset: Option<LogicTable>,

    /// Write the effective configuration to this path and exit
    #[arg(long)]
    dump_config: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> backprop_nn::Result<(RunConfig, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load_json(path)?,
            None => RunConfig::default(),
        };
        if let Some(layers) = self.layers {
            config.layers = layers;
        }
        if let Some(activation) = self.activation {
            config.activation = activation;
        }
        if let Some(lr) = self.learning_rate {
            config.learning_rate = lr;
        }
        if let Some(epochs) = self.epochs {
            config.training.epochs = epochs;
        }
        if let Some(interval) = self.display_interval {
            config.training.display_interval = interval;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(dataset) = self.dataset {
            config.dataset = dataset;
        }
        Ok((config, self.dump_config))
    }
}

fn run(args: Args) -> backprop_nn::Result<()> {
    let (config, dump_path) = args.into_config()?;
    if let Some(path) = dump_path {
        config.save_json(&path)?;
        info!(path = %path.display(), "wrote configuration");
        return Ok(());
    }

    let dataset = config.dataset.dataset();
    let mut network = config.build_network()?;
    info!(dataset = %config.dataset, activation = %config.activation, "{network}");

    network.fit(&dataset, &config.training, &mut TracingReporter)?;
    info!("final loss={:.7}", evaluate_loss(&network, &dataset)?);

    for (input, target) in dataset.features().iter().zip(dataset.targets()) {
        let output = network.predict(input)?;
        info!("input={input:?} target={target:?} output={output:.4?}");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

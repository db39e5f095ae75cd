use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::activation::activation::ActivationKind;
use crate::data::dataset::Dataset;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::train::{loop_fn, reporter::ProgressReporter, trainer};
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Fully-connected network whose biases are folded into the weight matrices.
///
/// `weights[i]` connects layer `i` to layer `i + 1` and has shape
/// `(layers[i] + 1, layers[i + 1] + 1)`, except the last transition which has
/// no bias column: `(layers[L-2] + 1, layers[L-1])`.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<usize>,
    activation: ActivationKind,
    learning_rate: f64,
    pub(crate) weights: Vec<Matrix>,
}

/// Everything a single forward pass produced, layer by layer.
///
/// `inputs[i]` is the (augmented) vector fed into transition `i`;
/// `pre_activations[i]` and `activations[i]` are its linear output and its
/// activated output. The last entry of `activations` is the network output.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardTrace {
    pub inputs: Vec<Vec<f64>>,
    pub pre_activations: Vec<Vec<f64>>,
    pub activations: Vec<Vec<f64>>,
}

impl ForwardTrace {
    pub fn output(&self) -> &[f64] {
        self.activations.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Network {
    /// Builds a network with weights drawn from the thread-local RNG.
    pub fn new(layers: Vec<usize>, activation: ActivationKind, learning_rate: f64) -> Result<Network> {
        Network::with_rng(layers, activation, learning_rate, &mut rand::thread_rng())
    }

    /// Builds a network whose initial weights depend only on `seed`.
    pub fn with_seed(
        layers: Vec<usize>,
        activation: ActivationKind,
        learning_rate: f64,
        seed: u64,
    ) -> Result<Network> {
        Network::with_rng(layers, activation, learning_rate, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(
        layers: Vec<usize>,
        activation: ActivationKind,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Network> {
        validate_config(&layers, learning_rate)?;

        let weights = (0..layers.len() - 1)
            .map(|i| {
                let (rows, cols) = transition_shape(&layers, i);
                let scale = 1.0 / (layers[i] as f64).sqrt();
                Matrix::scaled_normal(rows, cols, scale, &mut *rng)
            })
            .collect();

        let network = Network { layers, activation, learning_rate, weights };
        debug!(network = %network, activation = %activation, learning_rate, "initialized weights");
        Ok(network)
    }

    /// Builds a network around explicit weight matrices, checking every shape.
    pub fn from_weights(
        layers: Vec<usize>,
        activation: ActivationKind,
        learning_rate: f64,
        weights: Vec<Matrix>,
    ) -> Result<Network> {
        validate_config(&layers, learning_rate)?;
        if weights.len() != layers.len() - 1 {
            return Err(Error::dimension("weight matrix count", layers.len() - 1, weights.len()));
        }
        for (i, w) in weights.iter().enumerate() {
            let (rows, cols) = transition_shape(&layers, i);
            if w.rows != rows {
                return Err(Error::dimension(format!("weights[{i}] rows"), rows, w.rows));
            }
            if w.cols != cols {
                return Err(Error::dimension(format!("weights[{i}] cols"), cols, w.cols));
            }
        }
        Ok(Network { layers, activation, learning_rate, weights })
    }

    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    pub fn activation(&self) -> ActivationKind {
        self.activation
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn input_size(&self) -> usize {
        self.layers[0]
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1]
    }

    /// One transition: `activation(a_prev · W)`.
    pub fn forward_step(&self, a_prev: &[f64], weights: &Matrix) -> Result<(Vec<f64>, Vec<f64>)> {
        let z = Matrix::row(a_prev.to_vec()).checked_mul(weights)?;
        let pre = z.data.into_iter().next().unwrap_or_default();
        let out = pre.iter().map(|&x| self.activation.function(x)).collect();
        Ok((pre, out))
    }

    /// Forward pass over a raw feature vector; the bias 1.0 is appended here.
    pub fn forward(&self, x: &[f64]) -> Result<ForwardTrace> {
        if x.len() != self.input_size() {
            return Err(Error::dimension("input vector", self.input_size(), x.len()));
        }
        let mut augmented = x.to_vec();
        augmented.push(1.0);
        self.forward_augmented(&augmented)
    }

    /// Forward pass over a vector that already carries its trailing bias term.
    pub fn forward_augmented(&self, x: &[f64]) -> Result<ForwardTrace> {
        if x.len() != self.input_size() + 1 {
            return Err(Error::dimension("augmented input vector", self.input_size() + 1, x.len()));
        }

        let depth = self.weights.len();
        let mut trace = ForwardTrace {
            inputs: Vec::with_capacity(depth),
            pre_activations: Vec::with_capacity(depth),
            activations: Vec::with_capacity(depth),
        };

        let mut current = x.to_vec();
        for w in &self.weights {
            let (pre, out) = self.forward_step(&current, w)?;
            trace.inputs.push(current);
            trace.pre_activations.push(pre);
            current = out.clone();
            trace.activations.push(out);
        }
        Ok(trace)
    }

    /// Network output for one raw feature vector.
    pub fn predict(&self, x: &[f64]) -> Result<Vec<f64>> {
        let trace = self.forward(x)?;
        Ok(trace.output().to_vec())
    }

    pub fn predict_batch(&self, xs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        xs.iter().map(|x| self.predict(x)).collect()
    }

    /// One per-sample gradient update; `x` must carry its bias term.
    pub fn backward_step(&mut self, x: &[f64], target: &[f64]) -> Result<()> {
        trainer::train_sample(self, x, target)
    }

    /// Trains in place for `config.epochs` passes; see [`loop_fn::train_loop`].
    pub fn fit<P: ProgressReporter>(
        &mut self,
        dataset: &Dataset,
        config: &TrainConfig,
        reporter: &mut P,
    ) -> Result<Vec<EpochStats>> {
        loop_fn::train_loop(self, dataset, config, reporter)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "NeuralNetwork: {}", sizes.join("-"))
    }
}

/// Shape of `weights[i]`; only the final transition drops the bias column.
fn transition_shape(layers: &[usize], i: usize) -> (usize, usize) {
    let last = i + 2 == layers.len();
    let cols = if last { layers[i + 1] } else { layers[i + 1] + 1 };
    (layers[i] + 1, cols)
}

fn validate_config(layers: &[usize], learning_rate: f64) -> Result<()> {
    if layers.len() < 2 {
        return Err(Error::Configuration(format!(
            "a network needs at least 2 layers, got {}",
            layers.len()
        )));
    }
    if let Some(i) = layers.iter().position(|&size| size == 0) {
        return Err(Error::Configuration(format!("layer {i} has size 0")));
    }
    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(Error::Configuration(format!(
            "learning rate must be positive and finite, got {learning_rate}"
        )));
    }
    Ok(())
}

use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::activation::activation::ActivationKind;
use crate::data::logic::LogicTable;
use crate::error::Result;
use crate::network::network::Network;
use crate::train::train_config::TrainConfig;

/// A serializable description of one training run: architecture,
/// hyperparameters, the built-in dataset to train on and an optional seed.
///
/// Missing fields fall back to the defaults of a 2-2-1 sigmoid XOR run, so a
/// config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Layer sizes, input first.
    pub layers: Vec<usize>,
    pub activation: ActivationKind,
    pub learning_rate: f64,
    pub training: TrainConfig,
    /// Seed for weight initialisation; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    pub dataset: LogicTable,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            layers: vec![2, 2, 1],
            activation: ActivationKind::Sigmoid,
            learning_rate: 0.1,
            training: TrainConfig::default(),
            seed: None,
            dataset: LogicTable::Xor,
        }
    }
}

impl RunConfig {
    /// Constructs the network this config describes.
    pub fn build_network(&self) -> Result<Network> {
        match self.seed {
            Some(seed) => Network::with_seed(self.layers.clone(), self.activation, self.learning_rate, seed),
            None => Network::new(self.layers.clone(), self.activation, self.learning_rate),
        }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: RunConfig = serde_json::from_reader(reader)?;
        config.training.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn partial_json_uses_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"layers": [2, 4, 1], "activation": "relu"}"#).unwrap();
        assert_eq!(config.layers, vec![2, 4, 1]);
        assert_eq!(config.activation, ActivationKind::ReLU);
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.training, TrainConfig::default());
        assert_eq!(config.dataset, LogicTable::Xor);
    }

    #[test]
    fn unknown_activation_fails_to_parse() {
        let parsed = serde_json::from_str::<RunConfig>(r#"{"activation": "softmax"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn save_then_load_preserves_config() {
        let path = std::env::temp_dir().join(format!("backprop-nn-config-{}.json", std::process::id()));
        let config = RunConfig {
            seed: Some(7),
            learning_rate: 0.25,
            ..RunConfig::default()
        };
        config.save_json(&path).unwrap();
        let loaded = RunConfig::load_json(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_rejects_zero_display_interval() {
        let path = std::env::temp_dir().join(format!("backprop-nn-bad-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"training": {"epochs": 10, "display_interval": 0}}"#).unwrap();
        let result = RunConfig::load_json(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn build_network_validates_layers() {
        let config = RunConfig { layers: vec![2], ..RunConfig::default() };
        assert!(matches!(config.build_network(), Err(Error::Configuration(_))));
    }

    #[test]
    fn seeded_config_builds_identical_networks() {
        let config = RunConfig { seed: Some(3), ..RunConfig::default() };
        let a = config.build_network().unwrap();
        let b = config.build_network().unwrap();
        assert_eq!(a.weights(), b.weights());
    }
}

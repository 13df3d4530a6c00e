use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Hyperparameters for a `Neuron::train` run.
///
/// # Fields
/// - `epochs`        — full passes over the training samples; `0` trains nothing
/// - `learning_rate` — step size of every per-sample update; `0.0` is allowed
/// - `seed`          — optional seed for the neuron's initial parameters
///
/// Missing fields in a JSON document fall back to `TrainConfig::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub seed: Option<u64>,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a config from a JSON string.
    pub fn from_json_str(json: &str) -> serde_json::Result<TrainConfig> {
        serde_json::from_str(json)
    }

    /// Reads a config from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> std::io::Result<TrainConfig> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(5000, 0.1)
    }
}

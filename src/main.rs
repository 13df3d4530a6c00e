// Trains a single neuron on XOR and prints what it learned.
// A lone logistic unit cannot separate XOR; the outputs show how close it gets.
//
//   cargo run                      # 5000 epochs, learning rate 0.1
//   cargo run -- config.json       # {"epochs": ..., "learning_rate": ..., "seed": ...}
//   RUST_LOG=debug cargo run       # training progress
use std::{env, io};

use log::info;

use logistic_neuron::{MseLoss, Neuron, Sample, TrainConfig};

fn xor_samples() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], 0.0),
        Sample::new(vec![0.0, 1.0], 1.0),
        Sample::new(vec![1.0, 0.0], 1.0),
        Sample::new(vec![1.0, 1.0], 0.0),
    ]
}

fn main() -> io::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("loading training config from {path}");
            TrainConfig::load_json(path)?
        }
        None => TrainConfig::default(),
    };
    info!("{config:?}");

    let samples = xor_samples();
    let mut neuron = match config.seed {
        Some(seed) => Neuron::with_seed(2, seed),
        None => Neuron::new(2),
    }
    .map_err(io::Error::other)?;

    neuron.train_with_config(&samples, &config).map_err(io::Error::other)?;

    println!("Predictions:");
    for sample in &samples {
        let output = neuron.predict(&sample.inputs).map_err(io::Error::other)?;
        println!(
            "Input: ({}, {}) -> Output: {output:.4}",
            sample.inputs[0], sample.inputs[1]
        );
    }

    let loss = MseLoss::evaluate(&neuron, &samples).map_err(io::Error::other)?;
    println!("MSE: {loss:.6}");

    Ok(())
}

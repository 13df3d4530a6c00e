use log::{debug, trace};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::activation::{sigmoid, sigmoid_derivative};
use crate::error::{NeuronError, Result};
use crate::train::{Sample, TrainConfig};

/// A single logistic unit: `σ(bias + Σ wᵢxᵢ)`.
///
/// The weight count is fixed when the neuron is built. Every `predict` and
/// `train` call checks its inputs against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
    bias: f64,
}

impl Neuron {
    /// Builds a neuron with `input_size` weights and a bias, each drawn
    /// uniformly from (-1, 1) using the thread-local generator.
    pub fn new(input_size: usize) -> Result<Neuron> {
        Neuron::random(input_size, &mut rand::thread_rng())
    }

    /// Like `new`, but reproducible: equal seeds give equal parameters.
    pub fn with_seed(input_size: usize, seed: u64) -> Result<Neuron> {
        Neuron::random(input_size, &mut StdRng::seed_from_u64(seed))
    }

    /// Builds a neuron from explicit parameters.
    pub fn from_parameters(weights: Vec<f64>, bias: f64) -> Result<Neuron> {
        if weights.is_empty() {
            return Err(NeuronError::InvalidConfiguration {
                parameter: "weights",
                reason: "a neuron needs at least one weight".to_string(),
            });
        }
        Ok(Neuron { weights, bias })
    }

    fn random<R: Rng + ?Sized>(input_size: usize, rng: &mut R) -> Result<Neuron> {
        if input_size == 0 {
            return Err(NeuronError::InvalidConfiguration {
                parameter: "input_size",
                reason: "must be at least 1".to_string(),
            });
        }
        let weights = (0..input_size).map(|_| uniform_open(rng)).collect();
        let bias = uniform_open(rng);
        Ok(Neuron { weights, bias })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    /// Forward pass. Returns `σ(bias + Σ wᵢxᵢ)`.
    pub fn predict(&self, inputs: &[f64]) -> Result<f64> {
        self.check_dimension(inputs)?;
        Ok(self.activate(inputs))
    }

    /// Online gradient descent over `samples`, `epochs` times, in the order
    /// given. Each sample updates the parameters before the next is seen.
    ///
    /// All samples are validated up front, so an error leaves the neuron
    /// exactly as it was. Zero epochs, an empty sample set or a zero learning
    /// rate are accepted and change nothing.
    pub fn train(&mut self, samples: &[Sample], epochs: usize, learning_rate: f64) -> Result<()> {
        if !learning_rate.is_finite() || learning_rate < 0.0 {
            return Err(NeuronError::InvalidConfiguration {
                parameter: "learning_rate",
                reason: format!("must be finite and non-negative, got {learning_rate}"),
            });
        }
        for sample in samples {
            self.check_dimension(&sample.inputs)?;
        }

        debug!(
            "training on {} samples for {epochs} epochs (learning rate {learning_rate})",
            samples.len()
        );

        for epoch in 1..=epochs {
            for sample in samples {
                self.step(sample, learning_rate);
            }
            trace!("epoch {epoch}/{epochs} done, bias = {}", self.bias);
        }

        debug!("training finished: weights = {:?}, bias = {}", self.weights, self.bias);
        Ok(())
    }

    /// `train` with the epoch count and learning rate taken from `config`.
    pub fn train_with_config(&mut self, samples: &[Sample], config: &TrainConfig) -> Result<()> {
        self.train(samples, config.epochs, config.learning_rate)
    }

    /// One per-sample update. Dimensions must already be checked.
    fn step(&mut self, sample: &Sample, learning_rate: f64) {
        let output = self.activate(&sample.inputs);
        let error = sample.target - output;
        let delta = error * sigmoid_derivative(output);

        for (w, x) in self.weights.iter_mut().zip(&sample.inputs) {
            *w += learning_rate * delta * x;
        }
        self.bias += learning_rate * delta;
    }

    fn activate(&self, inputs: &[f64]) -> f64 {
        let z = self.weights.iter().zip(inputs)
            .fold(self.bias, |sum, (w, x)| sum + w * x);
        sigmoid(z)
    }

    fn check_dimension(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.weights.len() {
            return Err(NeuronError::DimensionMismatch {
                expected: self.weights.len(),
                got: inputs.len(),
            });
        }
        Ok(())
    }
}

/// Uniform sample on the open interval (-1, 1).
fn uniform_open<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        // gen::<f64>() is in [0, 1), so only -1.0 itself needs rejecting.
        let x = rng.gen::<f64>() * 2.0 - 1.0;
        if x > -1.0 {
            return x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_parameters_lie_in_open_unit_interval() {
        for seed in 0..50 {
            let neuron = Neuron::with_seed(4, seed).unwrap();
            assert_eq!(neuron.input_size(), 4);
            let mut params = neuron.weights().to_vec();
            params.push(neuron.bias());
            for p in params {
                assert!(p > -1.0 && p < 1.0, "parameter {p} out of range");
            }
        }
    }

    #[test]
    fn unseeded_construction_succeeds() {
        let neuron = Neuron::new(3).unwrap();
        assert_eq!(neuron.weights().len(), 3);
    }

    #[test]
    fn zero_inputs_is_invalid() {
        assert!(matches!(
            Neuron::new(0),
            Err(NeuronError::InvalidConfiguration { parameter: "input_size", .. })
        ));
        assert!(matches!(
            Neuron::from_parameters(vec![], 0.3),
            Err(NeuronError::InvalidConfiguration { parameter: "weights", .. })
        ));
    }

    #[test]
    fn step_applies_output_based_delta() {
        let mut neuron = Neuron::from_parameters(vec![0.0, 0.0], 0.0).unwrap();
        neuron.step(&Sample::new(vec![1.0, 2.0], 1.0), 1.0);
        // output 0.5, error 0.5, delta 0.5 * 0.25
        assert_eq!(neuron.weights(), &[0.125, 0.25]);
        assert_eq!(neuron.bias(), 0.125);
    }

    #[test]
    fn negative_or_nan_learning_rate_is_rejected() {
        let mut neuron = Neuron::with_seed(1, 1).unwrap();
        let before = neuron.clone();
        let samples = vec![Sample::new(vec![1.0], 1.0)];
        assert!(neuron.train(&samples, 1, -0.1).is_err());
        assert!(neuron.train(&samples, 1, f64::NAN).is_err());
        assert_eq!(neuron, before);
    }

    #[test]
    fn empty_sample_set_is_a_no_op() {
        let mut neuron = Neuron::with_seed(2, 9).unwrap();
        let before = neuron.clone();
        neuron.train(&[], 100, 0.5).unwrap();
        assert_eq!(neuron, before);
    }
}

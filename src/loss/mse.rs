use crate::error::Result;
use crate::neuron::Neuron;
use crate::train::Sample;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²). Empty input yields `0.0`.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        if predicted.is_empty() {
            return 0.0;
        }
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }

    /// Mean squared error of `neuron`'s predictions over `samples`.
    pub fn evaluate(neuron: &Neuron, samples: &[Sample]) -> Result<f64> {
        let predicted = samples.iter()
            .map(|s| neuron.predict(&s.inputs))
            .collect::<Result<Vec<f64>>>()?;
        let expected: Vec<f64> = samples.iter().map(|s| s.target).collect();
        Ok(MseLoss::loss(&predicted, &expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NeuronError;

    #[test]
    fn loss_is_mean_of_squares() {
        let loss = MseLoss::loss(&[0.5, 1.0], &[0.0, 0.0]);
        assert!((loss - 0.625).abs() < 1e-12);
    }

    #[test]
    fn loss_of_nothing_is_zero() {
        assert_eq!(MseLoss::loss(&[], &[]), 0.0);
    }

    #[test]
    fn evaluate_uses_predictions() {
        let neuron = Neuron::from_parameters(vec![0.0], 0.0).unwrap();
        let samples = vec![Sample::new(vec![3.0], 1.0), Sample::new(vec![-2.0], 0.0)];
        let loss = MseLoss::evaluate(&neuron, &samples).unwrap();
        assert!((loss - 0.25).abs() < 1e-12);
    }

    #[test]
    fn evaluate_propagates_dimension_mismatch() {
        let neuron = Neuron::from_parameters(vec![0.0, 0.0], 0.0).unwrap();
        let samples = vec![Sample::new(vec![1.0], 1.0)];
        assert_eq!(
            MseLoss::evaluate(&neuron, &samples),
            Err(NeuronError::DimensionMismatch { expected: 2, got: 1 })
        );
    }
}

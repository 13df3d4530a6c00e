use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, NeuronError>;

/// Failures surfaced by neuron construction, prediction and training.
#[derive(Debug, Clone, PartialEq)]
pub enum NeuronError {
    /// An input vector's length disagrees with the neuron's weight count.
    DimensionMismatch { expected: usize, got: usize },
    /// A construction or training argument makes no sense.
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },
}

impl Display for NeuronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeuronError::DimensionMismatch { expected, got } => write!(
                f,
                "input has {got} features but the neuron expects {expected}"
            ),
            NeuronError::InvalidConfiguration { parameter, reason } => {
                write!(f, "invalid {parameter}: {reason}")
            }
        }
    }
}

impl Error for NeuronError {}

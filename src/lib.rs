pub mod activation;
pub mod error;
pub mod neuron;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative};
pub use error::{NeuronError, Result};
pub use neuron::Neuron;
pub use loss::MseLoss;
pub use train::{Sample, TrainConfig};

use serde::{Deserialize, Serialize};

/// One supervised example: a feature vector and its scalar target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub target: f64,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, target: f64) -> Sample {
        Sample { inputs, target }
    }
}

impl From<(Vec<f64>, f64)> for Sample {
    fn from((inputs, target): (Vec<f64>, f64)) -> Self {
        Sample { inputs, target }
    }
}

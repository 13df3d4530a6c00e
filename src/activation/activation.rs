use std::f64::consts::E;

/// Logistic function `σ(z) = 1 / (1 + e^(-z))`.
///
/// No clamping is applied; for ordinary pre-activations the result lies
/// strictly in (0, 1).
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + E.powf(-z))
}

/// Sigmoid derivative expressed through the activation itself.
///
/// `output` must already be `σ(z)`; the identity `σ'(z) = σ(z)(1 - σ(z))`
/// lets the update rule reuse the forward pass result instead of `z`.
pub fn sigmoid_derivative(output: f64) -> f64 {
    output * (1.0 - output)
}

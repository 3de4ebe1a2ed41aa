use std::f64::consts::E;

/// Logistic function `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid, evaluated directly from the pre-activation
/// `x` as `e^-x / (1 + e^-x)^2`.
pub fn sigmoid_derivative(x: f64) -> f64 {
    let e = E.powf(-x);
    e / (1.0 + e).powi(2)
}

/// Snaps confident outputs to 0 or 1 for display. Values strictly above 0.9
/// become 1.0, values strictly below 0.1 become 0.0, the rest pass through.
///
/// Only used when presenting predictions, never during training.
pub fn step_function(x: f64) -> f64 {
    if x > 0.9 {
        1.0
    } else if x < 0.1 {
        0.0
    } else {
        x
    }
}

/// Squared-error loss `E = 1/2 * sum((predicted - expected)^2)`.
pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        0.5 * predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
    }
}

use crate::activation::step_function;
use crate::data::dataset::{argmax, Sample};
use crate::loss::SquaredErrorLoss;
use crate::math::Matrix;
use crate::network::{Network, NetworkError};

/// Network output for one held-out sample.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub expected: Vec<f64>,
    /// Output row after `step_function`, for display.
    pub output: Matrix,
    /// argmax of the raw output equals argmax of `expected`.
    pub correct: bool,
    pub loss: f64,
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub predictions: Vec<Prediction>,
}

impl Evaluation {
    /// Fraction of samples classified correctly, 0.0 when empty.
    pub fn accuracy(&self) -> f64 {
        if self.predictions.is_empty() {
            return 0.0;
        }
        let correct = self.predictions.iter().filter(|p| p.correct).count();
        correct as f64 / self.predictions.len() as f64
    }

    pub fn mean_loss(&self) -> f64 {
        if self.predictions.is_empty() {
            return 0.0;
        }
        self.predictions.iter().map(|p| p.loss).sum::<f64>() / self.predictions.len() as f64
    }
}

/// Runs `forward` on every sample without updating the network.
///
/// The forward cache is left holding the last sample; callers that train
/// afterwards should start with a fresh `forward`.
pub fn evaluate(network: &mut Network, samples: &[Sample]) -> Result<Evaluation, NetworkError> {
    let predictions = samples
        .iter()
        .map(|sample| -> Result<Prediction, NetworkError> {
            let raw = network.forward(&sample.input)?;
            Ok(Prediction {
                expected: sample.expected.clone(),
                correct: argmax(raw.as_slice()) == argmax(&sample.expected),
                loss: SquaredErrorLoss::loss(raw.as_slice(), &sample.expected),
                output: raw.map(step_function),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Evaluation { predictions })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    // Output 0 is driven by input 0 and output 1 by input 1, both strongly.
    fn switch_network() -> Network {
        Network::from_parameters(
            m(vec![vec![10.0, 0.0], vec![0.0, 10.0]]),
            m(vec![vec![-5.0, -5.0]]),
            m(vec![vec![12.0, -12.0], vec![-12.0, 12.0]]),
            m(vec![vec![0.0, 0.0]]),
            0.1,
        )
        .unwrap()
    }

    #[test]
    fn evaluate_steps_outputs_and_scores() {
        let mut net = switch_network();
        let samples = vec![
            Sample::new(vec![1.0, 0.0], vec![1.0, 0.0]),
            Sample::new(vec![0.0, 1.0], vec![0.0, 1.0]),
            Sample::new(vec![0.0, 1.0], vec![1.0, 0.0]),
        ];

        let eval = evaluate(&mut net, &samples).unwrap();

        assert_eq!(eval.predictions.len(), 3);
        assert_eq!(eval.predictions[0].output, m(vec![vec![1.0, 0.0]]));
        assert_eq!(eval.predictions[1].output, m(vec![vec![0.0, 1.0]]));
        assert!(eval.predictions[0].correct && eval.predictions[1].correct);
        assert!(!eval.predictions[2].correct);
        assert!((eval.accuracy() - 2.0 / 3.0).abs() < 1e-12);
        assert!(eval.predictions[2].loss > eval.predictions[0].loss);
    }

    #[test]
    fn evaluate_does_not_update_parameters() {
        let mut net = switch_network();
        let before = net.w2().clone();
        evaluate(&mut net, &[Sample::new(vec![1.0, 1.0], vec![1.0, 0.0])]).unwrap();
        assert_eq!(net.w2(), &before);
    }

    #[test]
    fn empty_evaluation() {
        let eval = evaluate(&mut switch_network(), &[]).unwrap();
        assert_eq!(eval.accuracy(), 0.0);
        assert_eq!(eval.mean_loss(), 0.0);
    }
}

use log::{debug, trace};
use rand::Rng;

use crate::activation::{sigmoid, sigmoid_derivative};
use crate::loss::SquaredErrorLoss;
use crate::math::init::random_matrix;
use crate::math::{Matrix, MatrixError};
use crate::network::error::NetworkError;

/// Values from the most recent `forward` call, consumed by `backward`.
#[derive(Debug, Clone)]
struct ForwardCache {
    x: Matrix,
    z1: Matrix,  // X·W1 + B1
    h: Matrix,
    z2: Matrix,  // H·W2 + B2
    y: Matrix,
}

/// Loss gradients for one sample, shaped like the parameters they update.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
    /// Squared-error loss of the cached prediction against the target.
    pub loss: f64,
}

/// Input → hidden → output network with sigmoid activations on both layers.
///
/// Parameters are row-vector oriented: an input row `X` (1 x input) produces
/// `H = σ(X·W1 + B1)` and `Y = σ(H·W2 + B2)`.
///
/// `forward` caches the activations of its sample; the next `backward` uses
/// them to compute gradients and update the parameters, then clears the
/// cache. Calling `backward` with no cached forward pass is an error.
#[derive(Debug, Clone)]
pub struct Network {
    w1: Matrix,
    b1: Matrix,
    w2: Matrix,
    b2: Matrix,
    learning_rate: f64,
    cache: Option<ForwardCache>,
}

impl Network {
    /// Randomly initialised network drawing weights from `rand::thread_rng()`.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
    ) -> Result<Network, NetworkError> {
        Network::with_rng(input_size, hidden_size, output_size, learning_rate, &mut rand::thread_rng())
    }

    /// Randomly initialised network; every weight and bias is drawn from
    /// `weight_init` using `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Network, NetworkError> {
        debug!(
            "initialising {}-{}-{} network, learning rate {}",
            input_size, hidden_size, output_size, learning_rate
        );

        Ok(Network {
            w1: random_matrix(input_size, hidden_size, rng)?,
            b1: random_matrix(1, hidden_size, rng)?,
            w2: random_matrix(hidden_size, output_size, rng)?,
            b2: random_matrix(1, output_size, rng)?,
            learning_rate,
            cache: None,
        })
    }

    /// Builds a network from explicit parameters.
    ///
    /// `w1` is input x hidden, `b1` is 1 x hidden, `w2` is hidden x output
    /// and `b2` is 1 x output.
    pub fn from_parameters(
        w1: Matrix,
        b1: Matrix,
        w2: Matrix,
        b2: Matrix,
        learning_rate: f64,
    ) -> Result<Network, NetworkError> {
        let checks = [
            ("b1", &b1, (1, w1.cols())),
            ("w2", &w2, (w1.cols(), w2.cols())),
            ("b2", &b2, (1, w2.cols())),
        ];
        for (name, m, expected) in checks {
            if m.shape() != expected {
                return Err(MatrixError::DimensionMismatch {
                    op: name,
                    left: expected,
                    right: m.shape(),
                }
                .into());
            }
        }

        Ok(Network { w1, b1, w2, b2, learning_rate, cache: None })
    }

    /// Forward pass; stores activations for the next `backward`.
    ///
    /// Any previously cached pass is discarded, even if this call fails.
    pub fn forward(&mut self, input: &[f64]) -> Result<Matrix, NetworkError> {
        self.cache = None;

        let x = Matrix::row_vector(input)?;
        let z1 = x.dot(&self.w1)?.add(&self.b1)?;
        let h = z1.map(sigmoid);
        let z2 = h.dot(&self.w2)?.add(&self.b2)?;
        let y = z2.map(sigmoid);

        self.cache = Some(ForwardCache { x, z1, h, z2, y: y.clone() });
        Ok(y)
    }

    /// Gradients of the squared-error loss of the cached forward pass
    /// against `expected`. Parameters and cache are left untouched.
    pub fn compute_gradients(&self, expected: &[f64]) -> Result<Gradients, NetworkError> {
        let cache = self.cache.as_ref().ok_or(NetworkError::StateViolation)?;
        let y2 = Matrix::row_vector(expected)?;

        // δ2 = (Y - Y2) ⊙ σ'(Z2)
        let b2 = cache.y.subtract(&y2)?.hadamard(&cache.z2.map(sigmoid_derivative))?;
        // δ1 = (δ2 · W2ᵗ) ⊙ σ'(Z1)
        let b1 = b2.dot(&self.w2.transpose())?.hadamard(&cache.z1.map(sigmoid_derivative))?;
        let w2 = cache.h.transpose().dot(&b2)?;
        let w1 = cache.x.transpose().dot(&b1)?;

        Ok(Gradients {
            w1,
            b1,
            w2,
            b2,
            loss: SquaredErrorLoss::loss(cache.y.as_slice(), expected),
        })
    }

    /// Backward pass: one gradient-descent step on the cached sample.
    ///
    /// Returns the sample's loss before the update. On success the cache is
    /// consumed; on error nothing changes.
    pub fn backward(&mut self, expected: &[f64]) -> Result<f64, NetworkError> {
        let grads = self.compute_gradients(expected)?;
        self.apply_gradients(&grads)?;
        self.cache = None;

        trace!("sample loss {:.6}", grads.loss);
        Ok(grads.loss)
    }

    fn apply_gradients(&mut self, grads: &Gradients) -> Result<(), MatrixError> {
        let lr = self.learning_rate;
        self.w1 = self.w1.subtract(&grads.w1.scale(lr))?;
        self.w2 = self.w2.subtract(&grads.w2.scale(lr))?;
        self.b1 = self.b1.subtract(&grads.b1.scale(lr))?;
        self.b2 = self.b2.subtract(&grads.b2.scale(lr))?;
        Ok(())
    }

    pub fn w1(&self) -> &Matrix {
        &self.w1
    }

    pub fn b1(&self) -> &Matrix {
        &self.b1
    }

    pub fn w2(&self) -> &Matrix {
        &self.w2
    }

    pub fn b2(&self) -> &Matrix {
        &self.b2
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn input_size(&self) -> usize {
        self.w1.rows()
    }

    pub fn hidden_size(&self) -> usize {
        self.w1.cols()
    }

    pub fn output_size(&self) -> usize {
        self.w2.cols()
    }
}

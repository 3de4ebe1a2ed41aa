pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod data;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::error::MatrixError;
pub use activation::{sigmoid, sigmoid_derivative, step_function};
pub use network::{Gradients, Network, NetworkError};
pub use loss::SquaredErrorLoss;
pub use data::Sample;
pub use train::{evaluate, train_epoch, train_loop, EpochStats, TrainConfig};

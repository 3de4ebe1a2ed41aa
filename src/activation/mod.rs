pub mod activation;

pub use activation::{sigmoid, sigmoid_derivative, step_function};

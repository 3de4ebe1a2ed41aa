pub mod error;
pub mod init;
pub mod matrix;

pub use error::MatrixError;
pub use matrix::Matrix;

pub mod dataset;
pub mod digits;

pub use dataset::{argmax, one_hot, split_holdout, Sample};
pub use digits::{load_digits, parse_digits};

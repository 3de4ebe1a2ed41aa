/// One supervised example: an input row and its expected output row.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub expected: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, expected: Vec<f64>) -> Sample {
        Sample { input, expected }
    }
}

/// One-hot vector of length `n_classes` with a 1.0 at `class`.
///
/// # Panics
/// Panics if `class >= n_classes`.
pub fn one_hot(class: usize, n_classes: usize) -> Vec<f64> {
    assert!(class < n_classes, "class {} out of range for {} classes", class, n_classes);
    let mut v = vec![0.0; n_classes];
    v[class] = 1.0;
    v
}

/// Splits off the trailing `holdout` samples for testing.
///
/// Returns `(train, test)`. If `holdout` exceeds the number of samples, every
/// sample is held out.
pub fn split_holdout(samples: &[Sample], holdout: usize) -> (&[Sample], &[Sample]) {
    let cut = samples.len().saturating_sub(holdout);
    samples.split_at(cut)
}

/// Index of the maximum element in a slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

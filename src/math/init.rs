use rand::Rng;

use crate::math::{Matrix, MatrixError};

/// Number of distinct values `weight_init` can produce.
const RESOLUTION: u32 = 10_000;

/// Uniform draw from `[-0.5, 0.5)` with a step of `1 / 10000`.
///
/// Any `rand::Rng` works as the source, so callers can plug in a seeded
/// generator for reproducible runs.
pub fn weight_init<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0..RESOLUTION) as f64 / RESOLUTION as f64 - 0.5
}

/// `rows x cols` matrix with every element drawn from `weight_init`.
pub fn random_matrix<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Matrix, MatrixError> {
    Ok(Matrix::zeros(rows, cols)?.map(|_| weight_init(&mut *rng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn weight_init_stays_in_range_on_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let w = weight_init(&mut rng);
            assert!((-0.5..0.5).contains(&w), "{} out of range", w);
            let steps = (w + 0.5) * RESOLUTION as f64;
            assert!((steps - steps.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn random_matrix_is_reproducible_with_seed() {
        let a = random_matrix(3, 4, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_matrix(3, 4, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.shape(), (3, 4));
        assert_eq!(a, b);
    }

    #[test]
    fn random_matrix_rejects_empty_shape() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_matrix(0, 4, &mut rng).is_err());
    }
}

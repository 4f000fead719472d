//! Seeded train/test split

use super::Dataset;
use crate::error::ConfigurationError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle the rows with `seed` and hold out `ceil(test_size * n)` of them.
///
/// Returns `(train, test)`. The test split is the first `n_test` rows of the
/// shuffled order, so equal seeds always reproduce the same partition.
pub fn train_test_split(
    dataset: &Dataset,
    test_size: f64,
    seed: u64,
) -> Result<(Dataset, Dataset), ConfigurationError> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(ConfigurationError::InvalidTestSize(test_size));
    }

    let n_samples = dataset.len();
    let n_test = (test_size * n_samples as f64).ceil() as usize;
    if n_test == 0 {
        return Err(ConfigurationError::EmptySplit { n_samples, test_size, side: "test" });
    }
    if n_test >= n_samples {
        return Err(ConfigurationError::EmptySplit { n_samples, test_size, side: "train" });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);
    tracing::debug!(seed, n_train = train_idx.len(), n_test, "split dataset");

    Ok((dataset.select(train_idx), dataset.select(test_idx)))
}

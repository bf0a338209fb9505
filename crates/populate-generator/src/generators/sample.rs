//! Uniform selection from candidate pools.

use crate::generator::GeneratorError;
use rand::Rng;

/// Pick one element uniformly at random. Returns `None` for an empty pool.
pub fn pick_one<'a, T, R: Rng + ?Sized>(rng: &mut R, pool: &'a [T]) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    Some(&pool[rng.gen_range(0..pool.len())])
}

/// Select `k` elements without replacement.
///
/// Runs the first `k` steps of a Fisher-Yates shuffle over a copy of the
/// pool, so every `k`-subset is equally likely and no position is chosen
/// twice. The order of the returned elements is random.
pub fn sample_distinct<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[T],
    k: usize,
) -> Result<Vec<T>, GeneratorError> {
    if pool.len() < k {
        return Err(GeneratorError::InsufficientCandidates {
            needed: k,
            available: pool.len(),
        });
    }

    let mut shuffled = pool.to_vec();
    for i in 0..k {
        let j = rng.gen_range(i..shuffled.len());
        shuffled.swap(i, j);
    }
    shuffled.truncate(k);

    Ok(shuffled)
}

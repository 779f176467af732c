/// Randomness primitives: bounded integers, single picks, and shuffles.
///
/// Every function draws from a caller-supplied RNG so the engine can run
/// seeded (tests, reproducible fixtures) or from entropy.

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid range: min {min} is greater than max {max}")]
    Inverted { min: i64, max: i64 },
}

/// Draw a uniformly distributed integer from the inclusive range `[min, max]`.
///
/// An inverted range (`min > max`) is rejected rather than clamped.
pub fn rand_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Result<i64, RangeError> {
    if min > max {
        return Err(RangeError::Inverted { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// Same as [`rand_int`], for element counts and indices.
pub fn rand_count<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
) -> Result<usize, RangeError> {
    if min > max {
        return Err(RangeError::Inverted {
            min: saturating_i64(min),
            max: saturating_i64(max),
        });
    }
    Ok(rng.gen_range(min..=max))
}

pub(crate) fn saturating_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Pick one uniformly random element. Returns `None` for an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.gen_range(0..items.len())])
}

/// Return a uniformly shuffled copy of `items`. The input is left untouched.
///
/// Fisher–Yates: walk from the last index down to 1, swapping each slot
/// with a uniformly drawn slot in `[0, i]`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Lowercase hex encoding of `n_bytes` random bytes.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R, n_bytes: usize) -> String {
    let mut bytes = vec![0u8; n_bytes];
    rng.fill(bytes.as_mut_slice());
    hex::encode(bytes)
}

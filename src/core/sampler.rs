/// Collection sampler: draws elements from named dataset collections.

use rand::Rng;
use thiserror::Error;
use tracing::trace;

use crate::core::random::{pick, rand_count, saturating_i64, shuffle, RangeError};
use crate::schema::dataset::{Dataset, Value};
use crate::schema::options::{SampleOneOptions, SampleOptions};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// An unregistered key samples like an empty collection.
fn resolve<'a>(dataset: &'a Dataset, key: &str) -> &'a [Value] {
    dataset.collection(key).unwrap_or_else(|| {
        trace!("[lorem-sampler] no collection registered under '{}'", key);
        &[]
    })
}

/// Draw a random sub-sequence of a collection.
///
/// Both ends of the count range are clamped to the collection length before
/// drawing. With `duplicate` each element is picked independently;
/// otherwise the first `count` elements of a shuffled copy are taken.
/// `reverse` flips the order of the result.
pub fn sample_many<R: Rng + ?Sized>(
    rng: &mut R,
    dataset: &Dataset,
    opts: &SampleOptions,
) -> Result<Vec<Value>, SampleError> {
    let items = resolve(dataset, &opts.key);
    if let Some(max) = opts.max {
        if opts.min > max {
            return Err(RangeError::Inverted {
                min: saturating_i64(opts.min),
                max: saturating_i64(max),
            }
            .into());
        }
    }
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let len = items.len();
    let min = opts.min.min(len);
    let max = opts.max.unwrap_or(len).min(len);
    let count = rand_count(rng, min, max)?;

    let mut picked: Vec<Value> = if opts.duplicate {
        (0..count)
            .filter_map(|_| pick(&mut *rng, items).cloned())
            .collect()
    } else {
        let mut shuffled = shuffle(rng, items);
        shuffled.truncate(count);
        shuffled
    };
    if opts.reverse {
        picked.reverse();
    }

    trace!(
        "[lorem-sampler] sampled {} of {} from '{}' (duplicate={})",
        picked.len(),
        len,
        opts.key,
        opts.duplicate
    );
    Ok(picked)
}

/// Draw one element: the first of a shuffled copy, or the last with
/// `from_end`. Returns `None` for an empty or unregistered collection.
pub fn sample_one<R: Rng + ?Sized>(
    rng: &mut R,
    dataset: &Dataset,
    opts: &SampleOneOptions,
) -> Result<Option<Value>, SampleError> {
    let items = resolve(dataset, &opts.key);
    let mut shuffled = shuffle(rng, items);
    Ok(if opts.from_end {
        shuffled.pop()
    } else {
        shuffled.into_iter().next()
    })
}

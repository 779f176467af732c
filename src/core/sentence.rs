/// Sentence composer: random words with hashtags spliced in at random positions.

use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::trace;

use crate::core::random::{pick, rand_count, shuffle, RangeError};
use crate::schema::dataset::Dataset;
use crate::schema::options::SentenceOptions;

/// Upper bound on `word_max`.
pub const MAX_WORDS_PER_SENTENCE: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("word pool is empty")]
    EmptyWordPool,
    #[error("sentence word range up to {requested} exceeds the limit of {limit}")]
    TooManyWords { requested: usize, limit: usize },
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Draw one word uniformly from the dataset's word pool.
pub fn random_word<R: Rng + ?Sized>(rng: &mut R, dataset: &Dataset) -> Result<String, ComposeError> {
    pick(rng, dataset.words())
        .cloned()
        .ok_or(ComposeError::EmptyWordPool)
}

/// Compose one sentence.
///
/// Words are drawn with replacement. Distinct hashtags are shuffled and the
/// first few are inserted one at a time, each at a position drawn over the
/// sentence as it stands after the previous insertion. The leading token is
/// capitalized (after the `#` for a hashtag) and a single period closes the
/// sentence. With zero words and zero hashtags the result is `"."`.
pub fn compose_sentence<R: Rng + ?Sized>(
    rng: &mut R,
    dataset: &Dataset,
    opts: &SentenceOptions,
) -> Result<String, ComposeError> {
    let words = dataset.words();
    if words.is_empty() {
        return Err(ComposeError::EmptyWordPool);
    }
    if opts.word_max > MAX_WORDS_PER_SENTENCE {
        return Err(ComposeError::TooManyWords {
            requested: opts.word_max,
            limit: MAX_WORDS_PER_SENTENCE,
        });
    }

    let words_count = rand_count(rng, opts.word_min, opts.word_max)?;
    let mut tokens: Vec<String> = Vec::new();
    for _ in 0..words_count {
        // Non-empty pool checked above.
        if let Some(word) = pick(rng, words) {
            tokens.push(word.clone());
        }
    }

    let available = distinct(dataset.hashtags());
    let shuffled = shuffle(rng, &available);
    let drawn = rand_count(rng, opts.hashtag_min, opts.hashtag_max)?;
    let hashtags_count = drawn.min(available.len());

    for tag in &shuffled[..hashtags_count] {
        let index = rand_count(rng, 0, tokens.len())?;
        tokens.insert(index, tag.clone());
    }

    capitalize_leading(&mut tokens);

    trace!(
        "[lorem-sampler] sentence: {} words, {} hashtags",
        words_count,
        hashtags_count
    );

    let mut sentence = tokens.join(" ");
    sentence.push('.');
    Ok(sentence)
}

/// Deduplicate, keeping first-seen order.
fn distinct(items: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    items
        .iter()
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

fn capitalize_leading(tokens: &mut [String]) {
    let Some(first) = tokens.first_mut() else {
        return;
    };
    let capitalized = match first.strip_prefix('#') {
        Some(tag) => format!("#{}", capitalize(tag)),
        None => capitalize(first),
    };
    *first = capitalized;
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

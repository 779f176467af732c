/// Text block and full-text composers.
///
/// A block is several sentences joined by single spaces. Its hashtags are
/// re-derived from the joined text rather than carried over from
/// composition, so they reflect capitalization applied to leading tokens.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::hashtag::{extract_hashtags, merge_hashtags};
use crate::core::random::rand_count;
use crate::core::sentence::{compose_sentence, ComposeError};
use crate::schema::dataset::Dataset;
use crate::schema::options::{FullTextOptions, TextOptions};

/// Generated text paired with the hashtags recoverable from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub hashtags: Vec<String>,
}

/// A title and body with one merged hashtag list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullText {
    pub title: String,
    pub text: String,
    pub hashtags: Vec<String>,
}

/// Compose `rand(min, max)` sentences and join them with single spaces.
pub fn random_sentences<R: Rng + ?Sized>(
    rng: &mut R,
    dataset: &Dataset,
    opts: &TextOptions,
) -> Result<String, ComposeError> {
    let count = rand_count(rng, opts.min, opts.max)?;
    let sentences = (0..count)
        .map(|_| compose_sentence(&mut *rng, dataset, &opts.sentence))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sentences.join(" "))
}

pub fn compose_text_block<R: Rng + ?Sized>(
    rng: &mut R,
    dataset: &Dataset,
    opts: &TextOptions,
) -> Result<TextBlock, ComposeError> {
    let text = random_sentences(rng, dataset, opts)?;
    let hashtags = extract_hashtags(&text);
    Ok(TextBlock { text, hashtags })
}

/// Compose the title block, then the body block, and merge their hashtags
/// (cleaned, lowercased, title tags first).
pub fn compose_full_text<R: Rng + ?Sized>(
    rng: &mut R,
    dataset: &Dataset,
    opts: &FullTextOptions,
) -> Result<FullText, ComposeError> {
    let title = compose_text_block(rng, dataset, &opts.title)?;
    let body = compose_text_block(rng, dataset, &opts.text)?;
    let hashtags = merge_hashtags([title.hashtags.as_slice(), body.hashtags.as_slice()]);
    Ok(FullText {
        title: title.text,
        text: body.text,
        hashtags,
    })
}

use serde::{Deserialize, Serialize};

/// Parameters for composing one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceOptions {
    pub word_min: usize,
    pub word_max: usize,
    pub hashtag_min: usize,
    pub hashtag_max: usize,
}

impl Default for SentenceOptions {
    fn default() -> Self {
        Self {
            word_min: 4,
            word_max: 10,
            hashtag_min: 0,
            hashtag_max: 2,
        }
    }
}

impl SentenceOptions {
    pub fn words(mut self, min: usize, max: usize) -> Self {
        self.word_min = min;
        self.word_max = max;
        self
    }

    pub fn hashtags(mut self, min: usize, max: usize) -> Self {
        self.hashtag_min = min;
        self.hashtag_max = max;
        self
    }
}

/// Parameters for a block of sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Sentence count range, inclusive.
    pub min: usize,
    pub max: usize,
    pub sentence: SentenceOptions,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            min: 1,
            max: 5,
            sentence: SentenceOptions::default(),
        }
    }
}

impl TextOptions {
    pub fn sentences(mut self, min: usize, max: usize) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_sentence(mut self, sentence: SentenceOptions) -> Self {
        self.sentence = sentence;
        self
    }
}

/// Independent parameter sets for the title and body blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FullTextOptions {
    pub title: TextOptions,
    pub text: TextOptions,
}

/// Inclusive integer range for `random_int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntOptions {
    #[serde(default)]
    pub min: i64,
    pub max: i64,
}

impl IntOptions {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// `[0, max]`.
    pub fn up_to(max: i64) -> Self {
        Self { min: 0, max }
    }
}

/// Collection sampled when a preset names no key.
pub const DEFAULT_SAMPLE_KEY: &str = "objectsIdUsers";

/// Multi-element draw from a named collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleOptions {
    pub key: String,
    pub min: usize,
    /// Defaults to the collection length; always clamped to it.
    pub max: Option<usize>,
    /// Draw with replacement.
    pub duplicate: bool,
    pub reverse: bool,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_KEY)
    }
}

impl SampleOptions {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            min: 0,
            max: None,
            duplicate: false,
            reverse: false,
        }
    }

    pub fn with_range(mut self, min: usize, max: usize) -> Self {
        self.min = min;
        self.max = Some(max);
        self
    }

    pub fn with_duplicates(mut self, duplicate: bool) -> Self {
        self.duplicate = duplicate;
        self
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// Single-element draw from a named collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleOneOptions {
    pub key: String,
    pub from_end: bool,
}

impl Default for SampleOneOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_KEY)
    }
}

impl SampleOneOptions {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            from_end: false,
        }
    }

    pub fn from_end(mut self, from_end: bool) -> Self {
        self.from_end = from_end;
        self
    }
}

/// Throwaway e-mail address shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailOptions {
    /// Random bytes in the local part; rendered as twice as many hex digits.
    pub local_bytes: usize,
    pub domain: String,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            local_bytes: 14,
            domain: "gmail.com".to_string(),
        }
    }
}

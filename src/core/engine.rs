/// The engine facade: one seeded RNG plus a shared, read-only dataset.
///
/// Wires the composers and the sampler behind the host-facing call surface.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::core::random::{rand_int, random_hex, RangeError};
use crate::core::sampler::{self, SampleError};
use crate::core::sentence::{self, ComposeError};
use crate::core::text::{self, FullText, TextBlock};
use crate::schema::dataset::{Dataset, DatasetError, Value};
use crate::schema::options::{
    EmailOptions, FullTextOptions, IntOptions, SampleOneOptions, SampleOptions, TextOptions,
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("compose error: {0}")]
    Compose(#[from] ComposeError),
    #[error("sample error: {0}")]
    Sample(#[from] SampleError),
    #[error("range error: {0}")]
    Range(#[from] RangeError),
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("no dataset configured: call dataset_path() or with_dataset()")]
    NoDataset,
}

/// The top-level generator. Built via `LoremEngine::builder()`.
pub struct LoremEngine {
    dataset: Arc<Dataset>,
    rng: StdRng,
    seed: Option<u64>,
}

/// Builder for constructing a `LoremEngine`.
pub struct LoremEngineBuilder {
    dataset_path: Option<PathBuf>,
    dataset: Option<Arc<Dataset>>,
    seed: Option<u64>,
}

impl LoremEngine {
    pub fn builder() -> LoremEngineBuilder {
        LoremEngineBuilder {
            dataset_path: None,
            dataset: None,
            seed: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Shared handle to the dataset, for building sibling engines.
    pub fn shared_dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    /// The seed this engine was built with; `None` when seeded from entropy.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Restart the RNG from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = Some(seed);
    }

    pub fn random_word(&mut self) -> Result<String, EngineError> {
        Ok(sentence::random_word(&mut self.rng, &self.dataset)?)
    }

    pub fn random_sentences(&mut self, opts: &TextOptions) -> Result<String, EngineError> {
        Ok(text::random_sentences(&mut self.rng, &self.dataset, opts)?)
    }

    pub fn random_text_block(&mut self, opts: &TextOptions) -> Result<TextBlock, EngineError> {
        Ok(text::compose_text_block(&mut self.rng, &self.dataset, opts)?)
    }

    pub fn random_full_text(&mut self, opts: &FullTextOptions) -> Result<FullText, EngineError> {
        Ok(text::compose_full_text(&mut self.rng, &self.dataset, opts)?)
    }

    pub fn random_int(&mut self, opts: &IntOptions) -> Result<i64, EngineError> {
        Ok(rand_int(&mut self.rng, opts.min, opts.max)?)
    }

    pub fn sample_many(&mut self, opts: &SampleOptions) -> Result<Vec<Value>, EngineError> {
        Ok(sampler::sample_many(&mut self.rng, &self.dataset, opts)?)
    }

    pub fn sample_one(&mut self, opts: &SampleOneOptions) -> Result<Option<Value>, EngineError> {
        Ok(sampler::sample_one(&mut self.rng, &self.dataset, opts)?)
    }

    /// A throwaway address: `local_bytes` random bytes as hex, then `@domain`.
    pub fn random_email(&mut self, opts: &EmailOptions) -> String {
        format!("{}@{}", random_hex(&mut self.rng, opts.local_bytes), opts.domain)
    }
}

impl LoremEngineBuilder {
    /// Load the dataset from a RON or JSON file at build time.
    pub fn dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = Some(path.into());
        self
    }

    /// Provide a dataset directly (for testing without files).
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(Arc::new(dataset));
        self
    }

    /// Share an already loaded dataset with other engines.
    pub fn with_shared_dataset(mut self, dataset: Arc<Dataset>) -> Self {
        self.dataset = Some(dataset);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// A directly provided dataset takes precedence over `dataset_path`.
    pub fn build(self) -> Result<LoremEngine, EngineError> {
        let dataset = match (self.dataset, self.dataset_path) {
            (Some(dataset), _) => dataset,
            (None, Some(path)) => Arc::new(Dataset::load(&path)?),
            (None, None) => return Err(EngineError::NoDataset),
        };

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        debug!(
            "[lorem-sampler] engine ready (seed={:?}, words={}, hashtags={}, collections={})",
            self.seed,
            dataset.words().len(),
            dataset.hashtags().len(),
            dataset.collections().len()
        );

        Ok(LoremEngine {
            dataset,
            rng,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::options::SentenceOptions;

    fn build_test_dataset() -> Dataset {
        Dataset::builder()
            .words(["lorem", "ipsum", "dolor", "sit", "amet", "consectetur"])
            .hashtags(["#fixtures", "#demo", "#Sample", "#demo"])
            .collection("objects.idUsers", ["u-01", "u-02", "u-03", "u-04", "u-05"])
            .collection("objects.idPosts", [101i64, 102, 103])
            .collection("empty", Vec::<Value>::new())
            .build()
            .unwrap()
    }

    fn build_test_engine(seed: u64) -> LoremEngine {
        LoremEngine::builder()
            .seed(seed)
            .with_dataset(build_test_dataset())
            .build()
            .unwrap()
    }

    #[test]
    fn builder_without_dataset_fails() {
        assert!(matches!(
            LoremEngine::builder().seed(1).build(),
            Err(EngineError::NoDataset)
        ));
    }

    #[test]
    fn builder_missing_dataset_file_fails() {
        let result = LoremEngine::builder()
            .dataset_path("tests/fixtures/missing_dataset.ron")
            .build();
        assert!(matches!(
            result,
            Err(EngineError::Dataset(DatasetError::NotFound(_)))
        ));
    }

    #[test]
    fn builder_with_seed() {
        let engine = build_test_engine(12345);
        assert_eq!(engine.seed(), Some(12345));
        let unseeded = LoremEngine::builder()
            .with_dataset(build_test_dataset())
            .build()
            .unwrap();
        assert_eq!(unseeded.seed(), None);
    }

    #[test]
    fn same_seed_same_output() {
        let mut a = build_test_engine(42);
        let mut b = build_test_engine(42);
        let opts = FullTextOptions::default();
        assert_eq!(
            a.random_full_text(&opts).unwrap(),
            b.random_full_text(&opts).unwrap()
        );
        let sample = SampleOptions::new("objects.idUsers");
        assert_eq!(a.sample_many(&sample).unwrap(), b.sample_many(&sample).unwrap());
        assert_eq!(a.random_word().unwrap(), b.random_word().unwrap());
    }

    #[test]
    fn different_seeds_differ_somewhere() {
        let opts = TextOptions::default();
        let baseline = build_test_engine(1).random_sentences(&opts).unwrap();
        let found_different =
            (2..50).any(|seed| build_test_engine(seed).random_sentences(&opts).unwrap() != baseline);
        assert!(found_different, "Expected different output with different seeds");
    }

    #[test]
    fn reseed_restarts_sequence() {
        let mut engine = build_test_engine(7);
        let first = engine.random_int(&IntOptions::new(0, 1_000_000)).unwrap();
        engine.reseed(7);
        let again = engine.random_int(&IntOptions::new(0, 1_000_000)).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn random_int_range_and_error() {
        let mut engine = build_test_engine(3);
        for _ in 0..200 {
            let n = engine.random_int(&IntOptions::new(-2, 2)).unwrap();
            assert!((-2..=2).contains(&n));
        }
        assert!(matches!(
            engine.random_int(&IntOptions::new(2, -2)),
            Err(EngineError::Range(RangeError::Inverted { min: 2, max: -2 }))
        ));
    }

    #[test]
    fn sentences_surface_compose_errors() {
        let mut engine = LoremEngine::builder()
            .seed(1)
            .with_dataset(Dataset::default())
            .build()
            .unwrap();
        assert!(matches!(
            engine.random_sentences(&TextOptions::default().sentences(1, 1)),
            Err(EngineError::Compose(ComposeError::EmptyWordPool))
        ));
        assert!(engine.random_word().is_err());
    }

    #[test]
    fn text_block_hashtags_match_text() {
        let mut engine = build_test_engine(11);
        let opts = TextOptions::default()
            .sentences(3, 3)
            .with_sentence(SentenceOptions::default().hashtags(1, 2));
        let block = engine.random_text_block(&opts).unwrap();
        assert!(!block.hashtags.is_empty());
        for tag in &block.hashtags {
            assert!(block.text.to_lowercase().contains(tag.as_str()));
        }
    }

    #[test]
    fn sample_surface() {
        let mut engine = build_test_engine(5);
        let posts = engine
            .sample_many(&SampleOptions::new("objects.idPosts").with_range(3, 3))
            .unwrap();
        assert_eq!(posts.len(), 3);
        assert!(engine.sample_one(&SampleOneOptions::new("empty")).unwrap().is_none());
        assert!(engine.sample_one(&SampleOneOptions::new("objects")).unwrap().is_none());
        assert!(engine
            .sample_many(&SampleOptions::new("objectsIdUsers"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn random_email_shape() {
        let mut engine = build_test_engine(9);
        let email = engine.random_email(&EmailOptions::default());
        let (local, domain) = email.split_once('@').unwrap();
        assert_eq!(local.len(), 28);
        assert!(local.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(domain, "gmail.com");
    }

    #[test]
    fn dataset_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dataset>();
        assert_send_sync::<Arc<Dataset>>();
    }

    #[test]
    fn engines_share_one_dataset() {
        let engine = build_test_engine(1);
        let shared = engine.shared_dataset();
        let sibling = LoremEngine::builder()
            .seed(2)
            .with_shared_dataset(Arc::clone(&shared))
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(&shared, &sibling.shared_dataset()));
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}

//! WASM bindings for lorem-sampler: powers the fixture playground page.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use lorem_sampler::core::engine::LoremEngine;
use lorem_sampler::schema::dataset::Dataset;
use lorem_sampler::schema::options::{
    EmailOptions, FullTextOptions, IntOptions, SampleOneOptions, SampleOptions, TextOptions,
};

// ---------------------------------------------------------------------------
// Embedded default dataset (compiled into the WASM binary)
// ---------------------------------------------------------------------------
mod data {
    pub const DEFAULT_DATASET: &str = include_str!("../../data/default/dataset.ron");
}

// ---------------------------------------------------------------------------
// JSON helpers for communication across the WASM boundary
// ---------------------------------------------------------------------------

/// Empty input means "all defaults".
fn parse_opts<T: DeserializeOwned + Default>(json: &str) -> Result<T, JsError> {
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    parse_required(json)
}

fn parse_required<T: DeserializeOwned>(json: &str) -> Result<T, JsError> {
    serde_json::from_str(json).map_err(|e| JsError::new(&format!("Invalid options JSON: {e}")))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

fn engine_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&format!("Generation error: {e}"))
}

// ---------------------------------------------------------------------------
// LoremDemo (the main exported struct)
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct LoremDemo {
    engine: LoremEngine,
}

#[wasm_bindgen]
impl LoremDemo {
    /// Create a demo instance over the embedded default dataset.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<LoremDemo, JsError> {
        let dataset = Dataset::parse_ron(data::DEFAULT_DATASET)
            .map_err(|e| JsError::new(&format!("Dataset parse error: {e}")))?;
        Self::from_dataset(dataset, seed)
    }

    /// Create a demo instance over a caller-supplied JSON dataset.
    pub fn with_json_dataset(dataset_json: &str, seed: u64) -> Result<LoremDemo, JsError> {
        let dataset = Dataset::parse_json(dataset_json)
            .map_err(|e| JsError::new(&format!("Dataset parse error: {e}")))?;
        Self::from_dataset(dataset, seed)
    }

    pub fn word(&mut self) -> Result<String, JsError> {
        self.engine.random_word().map_err(engine_error)
    }

    /// Sentences as plain text. Options JSON: `{"min":1,"max":3,"sentence":{...}}`.
    pub fn sentences(&mut self, opts_json: &str) -> Result<String, JsError> {
        let opts: TextOptions = parse_opts(opts_json)?;
        self.engine.random_sentences(&opts).map_err(engine_error)
    }

    /// Returns `{"text": ..., "hashtags": [...]}`.
    pub fn text_block(&mut self, opts_json: &str) -> Result<String, JsError> {
        let opts: TextOptions = parse_opts(opts_json)?;
        let block = self.engine.random_text_block(&opts).map_err(engine_error)?;
        to_json(&block)
    }

    /// Returns `{"title": ..., "text": ..., "hashtags": [...]}`.
    pub fn full_text(&mut self, opts_json: &str) -> Result<String, JsError> {
        let opts: FullTextOptions = parse_opts(opts_json)?;
        let full = self.engine.random_full_text(&opts).map_err(engine_error)?;
        to_json(&full)
    }

    /// Options JSON: `{"min":0,"max":10}` (`min` may be omitted).
    pub fn int(&mut self, opts_json: &str) -> Result<i64, JsError> {
        let opts: IntOptions = parse_required(opts_json)?;
        self.engine.random_int(&opts).map_err(engine_error)
    }

    /// Returns a JSON array of sampled values. Without a `key`, samples `objectsIdUsers`.
    ///
    /// Options JSON: `{"key":"objects.idUsers","min":1,"max":3,"duplicate":false,"reverse":false}`.
    pub fn sample_many(&mut self, opts_json: &str) -> Result<String, JsError> {
        let opts: SampleOptions = parse_opts(opts_json)?;
        let values = self.engine.sample_many(&opts).map_err(engine_error)?;
        let json: Vec<serde_json::Value> = values.iter().map(|v| v.to_json()).collect();
        to_json(&json)
    }

    /// Returns the sampled value as JSON, or `null` for an empty or unknown collection.
    pub fn sample_one(&mut self, opts_json: &str) -> Result<String, JsError> {
        let opts: SampleOneOptions = parse_opts(opts_json)?;
        let value = self.engine.sample_one(&opts).map_err(engine_error)?;
        to_json(&value.map(|v| v.to_json()))
    }

    pub fn email(&mut self, opts_json: &str) -> Result<String, JsError> {
        let opts: EmailOptions = parse_opts(opts_json)?;
        Ok(self.engine.random_email(&opts))
    }

    /// Return JSON array of the dataset's collection keys.
    pub fn collection_keys(&self) -> String {
        serde_json::to_string(&self.engine.dataset().collections().keys())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Reset the engine with a new seed (same dataset).
    pub fn reset(&mut self, seed: u64) {
        self.engine.reseed(seed);
    }
}

// Private helpers
impl LoremDemo {
    fn from_dataset(dataset: Dataset, seed: u64) -> Result<LoremDemo, JsError> {
        let engine = LoremEngine::builder()
            .seed(seed)
            .with_dataset(dataset)
            .build()
            .map_err(|e| JsError::new(&format!("Engine build error: {e}")))?;
        Ok(LoremDemo { engine })
    }
}

//! Lorem Sampler: placeholder text and sample data for fixtures and demos.
//!
//! Composes lorem-style sentences with hashtags spliced in, builds titled
//! text blocks with their hashtag sets, and samples elements from named
//! collections in a reference dataset. Everything draws from one seedable
//! RNG, so a fixed seed reproduces the same output.

pub mod core;
pub mod schema;

pub use crate::core::engine::{EngineError, LoremEngine, LoremEngineBuilder};
pub use crate::core::text::{FullText, TextBlock};
pub use crate::schema::dataset::{Dataset, DatasetError, Value};
pub use crate::schema::options::{
    EmailOptions, FullTextOptions, IntOptions, SampleOneOptions, SampleOptions, SentenceOptions,
    TextOptions, DEFAULT_SAMPLE_KEY,
};

pub mod engine;
pub mod hashtag;
pub mod random;
pub mod sampler;
pub mod sentence;
pub mod text;

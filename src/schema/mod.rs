pub mod dataset;
pub mod options;

pub mod engine;
pub mod growth;

pub use engine::{PlayerFailure, ProgressionEngine, ProgressionReport};

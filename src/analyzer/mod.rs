//! Snippet analysis: the check roster and the engine that runs it

pub mod checks;
pub mod engine;

pub use engine::AnalysisEngine;

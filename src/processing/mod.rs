//! Rule-based resume analysis

pub mod vocabulary;
pub mod extractor;
pub mod signals;
pub mod scoring;
pub mod job_match;
pub mod narrative;
pub mod analyzer;
pub mod strategy;

pub use analyzer::{Analysis, AnalysisResult, AnalysisStrategy, FallbackAnalyzer};
pub use strategy::{Strategy, StrategyRun};

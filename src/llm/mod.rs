//! Remote language-model analysis

pub mod analyzer;
pub mod client;
pub mod prompts;

pub use analyzer::RemoteAnalyzer;
pub use client::{CompletionClient, OpenAiClient};

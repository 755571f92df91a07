//! Strategy selection between the remote AI analyzer and the rule-based engine

use crate::config::Config;
use crate::llm::prompts::PromptTemplates;
use crate::llm::{OpenAiClient, RemoteAnalyzer};
use crate::processing::analyzer::{AnalysisResult, AnalysisStrategy, FallbackAnalyzer};
use log::{info, warn};
use std::time::Duration;

/// Outcome of one strategy run.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub result: AnalysisResult,
    /// Name of the strategy that actually produced `result`
    pub produced_by: &'static str,
}

pub enum Strategy {
    Fallback(FallbackAnalyzer),
    Remote(RemoteAnalyzer<OpenAiClient>),
}

impl Strategy {
    /// Remote when AI is enabled and an API key is available, otherwise the
    /// rule-based engine.
    pub fn from_config(config: &Config) -> Self {
        if !config.ai.enabled {
            info!("Remote AI disabled; using rule-based analysis");
            return Strategy::Fallback(FallbackAnalyzer);
        }

        let Some(api_key) = config.resolve_api_key() else {
            info!(
                "No API key found in config or ${}; using rule-based analysis",
                config.ai.api_key_env
            );
            return Strategy::Fallback(FallbackAnalyzer);
        };

        match OpenAiClient::new(&config.ai, api_key) {
            Ok(client) => {
                info!("Using remote AI analysis with model {}", client.model());
                let templates = PromptTemplates::with_limits(
                    config.analysis.resume_prompt_chars,
                    config.analysis.job_prompt_chars,
                );
                Strategy::Remote(
                    RemoteAnalyzer::new(client)
                        .with_templates(templates)
                        .with_timeout(Duration::from_secs(config.ai.timeout_secs)),
                )
            }
            Err(e) => {
                warn!("Failed to initialize AI client: {}; using rule-based analysis", e);
                Strategy::Fallback(FallbackAnalyzer)
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Strategy::Remote(_))
    }

    /// Analyze and report which strategy produced the result.
    pub async fn run(&self, resume_text: &str, job_text: &str) -> StrategyRun {
        match self {
            Strategy::Fallback(engine) => StrategyRun {
                result: engine.analyze(resume_text, job_text),
                produced_by: engine.name(),
            },
            Strategy::Remote(remote) => {
                let (result, fell_back) = remote.analyze_or_fallback(resume_text, job_text).await;
                let produced_by = if fell_back { FallbackAnalyzer.name() } else { remote.name() };
                StrategyRun { result, produced_by }
            }
        }
    }
}

impl AnalysisStrategy for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Fallback(engine) => engine.name(),
            Strategy::Remote(remote) => remote.name(),
        }
    }

    async fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        self.run(resume_text, job_text).await.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_ai_selects_fallback() {
        let mut config = Config::default();
        config.ai.enabled = false;
        config.ai.api_key = Some("sk-test".to_string());

        let strategy = Strategy::from_config(&config);
        assert!(!strategy.is_remote());
        assert_eq!(strategy.name(), "rule-based");
    }

    #[test]
    fn test_missing_key_selects_fallback() {
        let mut config = Config::default();
        config.ai.api_key = None;
        config.ai.api_key_env = "RESUME_ANALYZER_TEST_NEVER_SET".to_string();

        assert!(!Strategy::from_config(&config).is_remote());
    }

    #[test]
    fn test_key_selects_remote() {
        let mut config = Config::default();
        config.ai.api_key = Some("sk-test".to_string());

        let strategy = Strategy::from_config(&config);
        assert!(strategy.is_remote());
        assert_eq!(strategy.name(), "remote-ai");
    }

    #[tokio::test]
    async fn test_unreachable_remote_reports_fallback() {
        let mut config = Config::default();
        config.ai.api_key = Some("sk-test".to_string());
        config.ai.api_url = "http://127.0.0.1:9/v1/chat/completions".to_string();
        config.ai.timeout_secs = 2;

        let resume = "Rust developer with 4 years of experience";
        let run = Strategy::from_config(&config).run(resume, "").await;

        assert_eq!(run.produced_by, "rule-based");
        assert_eq!(run.result, FallbackAnalyzer.analyze(resume, ""));
    }

    #[tokio::test]
    async fn test_fallback_strategy_run() {
        let run = Strategy::Fallback(FallbackAnalyzer).run("", "").await;
        assert_eq!(run.produced_by, "rule-based");
        assert_eq!(run.result.ats_score, 40);
    }
}

//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub ai: AiConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Settings for the optional remote AI strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub enabled: bool,
    pub api_url: String,
    pub model: String,
    /// Inline key; takes precedence over `api_key_env`.
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub resume_prompt_chars: usize,
    pub job_prompt_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig {
                enabled: true,
                api_url: "https://api.openai.com/v1/chat/completions".to_string(),
                model: "gpt-3.5-turbo".to_string(),
                api_key: None,
                api_key_env: "OPENAI_API_KEY".to_string(),
                timeout_secs: 30,
                temperature: 0.3,
                max_tokens: 1200,
            },
            analysis: AnalysisConfig {
                resume_prompt_chars: 3000,
                job_prompt_chars: 1000,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from an explicit path, writing defaults there if the file is absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    /// Resolve the API key from the inline value or the configured env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.ai
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.ai.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    /// Set a configuration value by dotted key, e.g. `ai.timeout_secs`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "ai.enabled" => self.ai.enabled = parse_value(key, value)?,
            "ai.api_url" => self.ai.api_url = value.to_string(),
            "ai.model" => self.ai.model = value.to_string(),
            "ai.api_key" => {
                self.ai.api_key = if value.is_empty() { None } else { Some(value.to_string()) }
            }
            "ai.api_key_env" => self.ai.api_key_env = value.to_string(),
            "ai.timeout_secs" => self.ai.timeout_secs = parse_value(key, value)?,
            "ai.temperature" => self.ai.temperature = parse_value(key, value)?,
            "ai.max_tokens" => self.ai.max_tokens = parse_value(key, value)?,
            "analysis.resume_prompt_chars" => self.analysis.resume_prompt_chars = parse_value(key, value)?,
            "analysis.job_prompt_chars" => self.analysis.job_prompt_chars = parse_value(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeAnalyzerError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(ResumeAnalyzerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        ResumeAnalyzerError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}

//! Resume analyzer: resume scoring, skill detection and job-match insights

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::error::ResumeAnalyzerError;
use resume_analyzer::input::InputManager;
use resume_analyzer::output::{
    save_report_to_file, suggest_filename, AnalysisReport, ReportGenerator, ReportMetadata,
};
use resume_analyzer::processing::{AnalysisStrategy, FallbackAnalyzer, Strategy};
use std::path::Path;
use std::process;
use std::time::{Duration, Instant};

const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx"];
const JOB_EXTENSIONS: &[&str] = &["txt", "md", "pdf", "docx"];

#[tokio::main]
async fn main() {
    // Pick up OPENAI_API_KEY and friends from a local .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        match e.downcast_ref::<ResumeAnalyzerError>() {
            Some(rejected) if rejected.is_user_facing() => {
                eprintln!("❌ {}", rejected);
                error!("Input rejected: {:#}", e);
            }
            _ => error!("Command failed: {:#}", e),
        }
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            detailed,
            save,
            no_ai,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeAnalyzerError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            let console = output_format == OutputFormat::Console;

            cli::validate_file_extension(&resume, RESUME_EXTENSIONS)
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;
            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, JOB_EXTENSIONS)
                    .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            if console {
                println!("🚀 Resume analysis");
                println!("📄 Resume: {}", resume.display());
                match (&job, &job_text) {
                    (Some(path), _) => println!("💼 Job Description: {}", path.display()),
                    (None, Some(_)) => println!("💼 Job Description: inline text"),
                    (None, None) => println!("💼 Job Description: none"),
                }
            }

            let start_time = Instant::now();
            let mut input_manager = InputManager::new();

            let resume_text = input_manager
                .extract_resume(&resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;

            let job_text = match (job, job_text) {
                (Some(path), _) => match input_manager.extract_text(&path).await {
                    Err(ResumeAnalyzerError::EmptyExtraction(_)) => {
                        warn!("Job description {} is empty; analyzing without it", path.display());
                        String::new()
                    }
                    other => other.with_context(|| format!("Failed to read job description {}", path.display()))?,
                },
                (None, Some(text)) => text,
                (None, None) => String::new(),
            };

            info!(
                "Extracted {} resume characters, {} job description characters",
                resume_text.chars().count(),
                job_text.chars().count()
            );

            let strategy = if no_ai {
                info!("Remote AI skipped by --no-ai");
                Strategy::Fallback(FallbackAnalyzer)
            } else {
                Strategy::from_config(&config)
            };

            let spinner = (console && strategy.is_remote()).then(|| {
                let spinner = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
                    spinner.set_style(style);
                }
                spinner.set_message(format!("🤖 Analyzing with {}...", strategy.name()));
                spinner.enable_steady_tick(Duration::from_millis(100));
                spinner
            });

            let run = strategy.run(&resume_text, &job_text).await;

            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            let metadata = ReportMetadata::new(
                run.produced_by,
                &resume.to_string_lossy(),
                !job_text.trim().is_empty(),
                start_time.elapsed().as_millis() as u64,
            );
            let mut report = AnalysisReport::new(run.result, metadata);
            if detailed {
                if report.is_rule_based() {
                    report = report.with_details(FallbackAnalyzer.analyze_detailed(&resume_text, &job_text));
                } else {
                    info!("Detailed breakdown is only available for rule-based results");
                }
            }

            // No ANSI codes in saved reports
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(output_format, &resume.to_string_lossy(), true))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &path)
                        .with_context(|| format!("Failed to save report to {}", path.display()))?;
                    println!("💾 Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => show_config(&config, config_path),

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default()
                    .save_to(config_path)
                    .with_context(|| format!("Failed to write {}", config_path.display()))?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set(&key, &value)?;
                config
                    .save_to(config_path)
                    .with_context(|| format!("Failed to write {}", config_path.display()))?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn show_config(config: &Config, config_path: &Path) {
    println!("⚙️  Current Configuration ({})\n", config_path.display());
    println!("Remote AI:");
    println!("  Enabled: {}", config.ai.enabled);
    println!("  Endpoint: {}", config.ai.api_url);
    println!("  Model: {}", config.ai.model);
    println!(
        "  API key: {}",
        match (&config.ai.api_key, config.resolve_api_key()) {
            (Some(_), Some(_)) => "set in config".to_string(),
            (None, Some(_)) => format!("from ${}", config.ai.api_key_env),
            _ => format!("not set (checked ${})", config.ai.api_key_env),
        }
    );
    println!("  Timeout: {}s", config.ai.timeout_secs);
    println!("  Temperature: {}", config.ai.temperature);
    println!("  Max tokens: {}", config.ai.max_tokens);
    println!("\nPrompt limits:");
    println!("  Resume characters: {}", config.analysis.resume_prompt_chars);
    println!("  Job description characters: {}", config.analysis.job_prompt_chars);
    println!("\nOutput:");
    println!("  Format: {:?}", config.output.format);
    println!("  Detailed: {}", config.output.detailed);
    println!("  Colors: {}", config.output.color_output);
}

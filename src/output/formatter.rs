//! Console, JSON and Markdown rendering of analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use crate::processing::analyzer::Analysis;
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_list(&self, output: &mut String, title: &str, items: &[String], color: Color) {
        if items.is_empty() {
            return;
        }
        output.push_str(&self.format_header(title, 3));
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }

    fn format_details(&self, output: &mut String, details: &Analysis) {
        let signals = &details.signals;

        output.push_str(&self.format_header("Detailed Breakdown", 2));
        output.push_str(&format!(
            "Technical skills ({}): {}\n",
            signals.skills.technical.len(),
            signals.skills.technical.join(", ")
        ));
        output.push_str(&format!(
            "Soft skills ({}): {}\n",
            signals.skills.soft.len(),
            signals.skills.soft.join(", ")
        ));
        output.push_str(&format!(
            "Experience: {} years, title keywords suggest {:?}, quantified results: {}\n",
            signals.experience.years,
            signals.experience.level,
            yes_no(signals.experience.has_quantifiable_achievements)
        ));
        output.push_str(&format!(
            "Education: section {}, advanced degree {}, certifications {}\n",
            yes_no(signals.education.has_education_section),
            yes_no(signals.education.has_advanced_degree),
            yes_no(signals.education.has_certifications)
        ));
        output.push_str(&format!(
            "Contact: email {}, phone {}, LinkedIn {}, GitHub {}, portfolio {} ({}/3)\n",
            yes_no(signals.contact.has_email),
            yes_no(signals.contact.has_phone),
            yes_no(signals.contact.has_linkedin),
            yes_no(signals.contact.has_github),
            yes_no(signals.contact.has_portfolio),
            signals.contact.completeness
        ));
        output.push_str(&format!(
            "Structure: {} lines, avg {:.1} chars/line, sections {}, metrics {}, action verbs {}\n",
            signals.structure.line_count,
            signals.structure.avg_line_length,
            yes_no(signals.structure.has_sections),
            yes_no(signals.structure.has_metrics),
            yes_no(signals.structure.has_action_verbs)
        ));

        if !signals.keywords.is_empty() {
            let keywords: Vec<String> = signals
                .keywords
                .iter()
                .map(|(keyword, count)| format!("{} ({})", keyword, count))
                .collect();
            output.push_str(&format!("Keywords: {}\n", keywords.join(", ")));
        }

        self.format_list(output, "Achievements", &signals.achievements, Color::Cyan);

        if let Some(job_match) = &details.job_match {
            output.push_str(&format!("\nJob match coverage: {}%\n", job_match.match_percentage));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Strategy: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.strategy,
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!("Score: {}/100 {}\n", result.score, self.format_score_badge(result.score)));
        output.push_str(&format!(
            "ATS Score: {}/100 {}\n",
            result.ats_score,
            self.format_score_badge(result.ats_score)
        ));
        output.push_str(&format!("Experience Level: {}\n", result.experience_level));
        output.push_str(&format!("Industry: {}\n", result.industry_match));
        output.push_str(&format!("Verdict: {}\n\n", self.colorize(report.verdict(), Color::Cyan)));
        output.push_str(&format!("{}\n", result.score_explanation));

        if !result.skills.is_empty() {
            output.push_str(&self.format_header("🛠 Skills", 3));
            output.push_str(&format!("  {}\n", result.skills.join(", ")));
        }

        self.format_list(&mut output, "✅ Strengths", &result.strengths, Color::Green);
        self.format_list(&mut output, "⚠️ Weaknesses", &result.weaknesses, Color::Yellow);
        self.format_list(&mut output, "🔑 Missing Keywords", &result.missing_keywords, Color::Red);

        if !result.recommendations.is_empty() {
            output.push_str(&self.format_header("📋 Recommendations", 2));
            for (i, rec) in result.recommendations.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, rec));
            }
        }

        if self.detailed {
            if let Some(details) = &report.details {
                self.format_details(&mut output, details);
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟢 Very Good",
            70..=79 => "🟡 Good",
            60..=69 => "🟡 Fair",
            50..=59 => "🟠 Below Average",
            _ => "🔴 Poor",
        }
    }

    fn push_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("## {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# 📊 Resume Analysis Report\n\n");

        if self.include_metadata {
            let resume_name = Path::new(&report.metadata.resume_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.resume_file.clone());
            output.push_str(&format!(
                "**Generated:** {} | **Strategy:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.strategy,
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job description:** {}\n\n",
                resume_name,
                if report.metadata.job_provided { "provided" } else { "none" }
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Score | {}/100 {} |\n",
            result.score,
            Self::markdown_score_badge(result.score)
        ));
        output.push_str(&format!(
            "| ATS Score | {}/100 {} |\n",
            result.ats_score,
            Self::markdown_score_badge(result.ats_score)
        ));
        output.push_str(&format!("| Experience Level | {} |\n", result.experience_level));
        output.push_str(&format!("| Industry | {} |\n", result.industry_match));
        if let Some(percentage) = report.match_percentage() {
            output.push_str(&format!("| Job Match | {}% |\n", percentage));
        }
        output.push('\n');

        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict()));
        output.push_str(&format!("{}\n\n", result.score_explanation));

        if !result.skills.is_empty() {
            output.push_str("## 🛠 Skills\n\n");
            output.push_str(&format!("{}\n\n", result.skills.join(", ")));
        }

        Self::push_list(&mut output, "✅ Strengths", &result.strengths);
        Self::push_list(&mut output, "⚠️ Weaknesses", &result.weaknesses);
        Self::push_list(&mut output, "🔑 Missing Keywords", &result.missing_keywords);

        if !result.recommendations.is_empty() {
            output.push_str("## 📋 Recommendations\n\n");
            for (i, rec) in result.recommendations.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, rec));
            }
            output.push('\n');
        }

        if let Some(details) = &report.details {
            let signals = &details.signals;
            output.push_str("## Detailed Breakdown\n\n");
            output.push_str("| Signal | Value |\n");
            output.push_str("|--------|-------|\n");
            output.push_str(&format!("| Technical skills | {} |\n", signals.skills.technical.len()));
            output.push_str(&format!("| Soft skills | {} |\n", signals.skills.soft.len()));
            output.push_str(&format!("| Years of experience | {} |\n", signals.experience.years));
            output.push_str(&format!("| Contact completeness | {}/3 |\n", signals.contact.completeness));
            output.push_str(&format!("| Lines | {} |\n", signals.structure.line_count));
            output.push_str(&format!(
                "| Average line length | {:.1} |\n",
                signals.structure.avg_line_length
            ));
            output.push('\n');

            Self::push_list(&mut output, "Achievements", &signals.achievements);
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}

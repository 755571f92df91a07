//! Composite score, ATS score and profile classification

use crate::processing::signals::ResumeSignals;
use crate::processing::vocabulary::{DEFAULT_INDUSTRY, INDUSTRY_MARKERS, LEADERSHIP_SKILLS};

pub const MAX_SCORE: u8 = 100;

pub const SENIOR_LEVEL: &str = "Senior-level";
pub const MID_LEVEL: &str = "Mid-level";
pub const JUNIOR_LEVEL: &str = "Junior-level";
pub const ENTRY_LEVEL: &str = "Entry-level";

/// Additive point model over every signal. `text` is the raw resume text
/// the signals were derived from.
pub fn calculate_score(signals: &ResumeSignals, text: &str) -> u8 {
    let skills = &signals.skills;
    let mut score: u32 = 0;

    // skills
    score += (skills.total() as u32 * 2).min(35);
    if skills.technical.len() >= 8 {
        score += 5;
    }
    if skills.soft.len() >= 5 {
        score += 5;
    }

    // experience
    if signals.experience.years > 0 {
        score += signals.experience.years.saturating_mul(2).min(15);
    }
    if signals.experience.has_quantifiable_achievements {
        score += 10;
    }
    if !signals.achievements.is_empty() {
        score += 5;
    }

    // education
    if signals.education.has_education_section {
        score += 8;
    }
    if signals.education.has_advanced_degree {
        score += 5;
    }
    if signals.education.has_certifications {
        score += 3;
    }

    // structure and contact
    if signals.structure.has_contact_info {
        score += 3;
    }
    if signals.structure.has_sections {
        score += 4;
    }
    if signals.structure.has_metrics {
        score += 3;
    }
    if signals.contact.completeness >= 2 {
        score += 3;
    }
    let length = text.chars().count();
    if length > 800 && length < 3000 {
        score += 2;
    }

    // content
    score += (signals.keywords.len() as u32).min(5);
    let avg = signals.structure.avg_line_length;
    if avg > 30.0 && avg < 120.0 {
        score += 3;
    }
    if signals.contact.has_linkedin || signals.contact.has_github {
        score += 2;
    }

    score.min(MAX_SCORE as u32) as u8
}

/// Machine-readability estimate: deductions from 100 for missing structure,
/// small bonuses for LinkedIn and metrics.
pub fn calculate_ats_score(signals: &ResumeSignals) -> u8 {
    let mut score: i32 = 100;

    if !signals.structure.has_contact_info {
        score -= 20;
    }
    if !signals.structure.has_sections {
        score -= 15;
    }
    if signals.structure.avg_line_length > 150.0 {
        score -= 10;
    }
    if signals.skills.technical.len() < 3 {
        score -= 15;
    }
    if !signals.contact.has_email {
        score -= 10;
    }

    if signals.contact.has_linkedin {
        score += 5;
    }
    if signals.structure.has_metrics {
        score += 5;
    }

    score.clamp(0, MAX_SCORE as i32) as u8
}

pub fn determine_experience_level(signals: &ResumeSignals) -> &'static str {
    let years = signals.experience.years;
    let skill_count = signals.skills.total();
    let has_leadership = signals
        .skills
        .soft
        .iter()
        .any(|skill| LEADERSHIP_SKILLS.contains(&skill.as_str()));

    if years >= 8 || (years >= 5 && has_leadership) {
        SENIOR_LEVEL
    } else if years >= 3 || (years >= 2 && skill_count >= 10) {
        MID_LEVEL
    } else if years >= 1 || skill_count >= 6 {
        JUNIOR_LEVEL
    } else {
        ENTRY_LEVEL
    }
}

/// First industry whose marker skills intersect the technical skills.
pub fn identify_industry(signals: &ResumeSignals) -> &'static str {
    let technical: Vec<String> = signals.skills.technical.iter().map(|s| s.to_lowercase()).collect();

    INDUSTRY_MARKERS
        .iter()
        .find(|(_, markers)| technical.iter().any(|skill| markers.contains(&skill.as_str())))
        .map(|(industry, _)| *industry)
        .unwrap_or(DEFAULT_INDUSTRY)
}

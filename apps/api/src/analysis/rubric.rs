//! Additive resume quality rubric.
//!
//! Four weighted categories sum to an overall score out of 100. Each
//! category also emits actionable suggestions while it is scored; a verdict
//! headline keyed to the overall score is prepended before the list is
//! returned. Pure and total: absent fields read as "not provided", never as
//! errors.

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    is_provided, EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, SkillEntry,
};

pub const PERSONAL_INFO_MAX: u32 = 25;
pub const EXPERIENCE_MAX: u32 = 35;
pub const EDUCATION_MAX: u32 = 20;
pub const SKILLS_MAX: u32 = 20;

/// Per-category sub-scores. Each is capped at its category maximum, so the
/// overall total never exceeds 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub personal_info: u32,
    pub experience: u32,
    pub education: u32,
    pub skills: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall: u32,
    pub breakdown: ScoreBreakdown,
    pub suggestions: Vec<String>,
}

/// Scores a document against the four-category rubric.
pub fn score_resume(document: &ResumeDocument) -> ScoreResult {
    let mut suggestions = Vec::new();

    let personal_info = score_personal_info(&document.personal_info, &mut suggestions);
    let experience = score_experience(&document.experience, &mut suggestions);
    let education = score_education(&document.education, &mut suggestions);
    let skills = score_skills(&document.skills, &mut suggestions);

    let overall = personal_info + experience + education + skills;
    suggestions.insert(0, verdict_for(overall).to_string());

    ScoreResult {
        overall,
        breakdown: ScoreBreakdown {
            personal_info,
            experience,
            education,
            skills,
        },
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category scoring
// ────────────────────────────────────────────────────────────────────────────

/// Presence points for contact fields, plus a tiered summary term.
/// The full-credit boundary is strictly more than 50 characters.
fn score_personal_info(info: &PersonalInfo, suggestions: &mut Vec<String>) -> u32 {
    let mut score = 0;
    if is_provided(&info.full_name) {
        score += 5;
    }
    if is_provided(&info.email) {
        score += 5;
    }
    if is_provided(&info.phone) {
        score += 5;
    }
    if is_provided(&info.location) {
        score += 3;
    }

    if info.summary_len() > 50 {
        score += 7;
    } else if is_provided(&info.summary) {
        score += 3;
        suggestions.push("Expand your professional summary to 2-3 sentences".to_string());
    } else {
        suggestions.push("Add a professional summary to introduce yourself".to_string());
    }

    score.min(PERSONAL_INFO_MAX)
}

/// Count term of min(entries × 10, 25), plus per-entry bullet bonuses:
/// +2 for having any bullets, +1 more for three or more.
fn score_experience(entries: &[ExperienceEntry], suggestions: &mut Vec<String>) -> u32 {
    if entries.is_empty() {
        suggestions.push("Add your work experience to strengthen your resume".to_string());
        return 0;
    }

    let mut score = (entries.len() as u32 * 10).min(25);

    for entry in entries {
        if entry.description.is_empty() {
            suggestions.push(format!(
                "Add bullet points describing your role at {}",
                entry.company
            ));
            continue;
        }
        score += 2;
        if entry.description.len() >= 3 {
            score += 1;
        } else {
            suggestions.push(format!(
                "Add more details about your achievements at {}",
                entry.company
            ));
        }
    }

    score.min(EXPERIENCE_MAX)
}

/// Count term of min(entries × 15, 20), plus a flat bonus when any entry
/// reports a GPA.
fn score_education(entries: &[EducationEntry], suggestions: &mut Vec<String>) -> u32 {
    if entries.is_empty() {
        suggestions.push("Add your educational background".to_string());
        return 0;
    }

    let mut score = (entries.len() as u32 * 15).min(20);
    if entries.iter().any(EducationEntry::has_gpa) {
        score += 5;
    }

    score.min(EDUCATION_MAX)
}

/// Thin lists (1–4 skills) earn 3 points each and a prompt to add more;
/// five or more earn 2 each, capped at the category maximum.
fn score_skills(skills: &[SkillEntry], suggestions: &mut Vec<String>) -> u32 {
    match skills.len() as u32 {
        0 => {
            suggestions.push("Add relevant skills to showcase your expertise".to_string());
            0
        }
        count @ 1..=4 => {
            suggestions.push("Add more skills to reach 5-10 relevant skills".to_string());
            count * 3
        }
        count => (count * 2).min(SKILLS_MAX),
    }
}

/// Headline verdict prepended to the suggestion list.
fn verdict_for(overall: u32) -> &'static str {
    if overall < 60 {
        "Your resume needs significant improvement. Focus on adding more content."
    } else if overall < 80 {
        "Good start! Add more details to make your resume stand out."
    } else if overall < 90 {
        "Great resume! A few tweaks will make it excellent."
    } else {
        "Excellent resume! You're ready to apply to top companies."
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

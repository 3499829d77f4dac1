//! Detailed checker report.
//!
//! Bundles the classifier findings with a readiness score derived from the
//! issue count and a nine-dimension breakdown for the results page.
//! Dimensions the heuristics cannot measure from the document alone ship
//! fixed baselines; the rest are gated on the same probes the classifier
//! uses. These numbers are report-only display data, distinct from the
//! additive rubric score.

use serde::{Deserialize, Serialize};

use crate::analysis::issues::{classify_issues, Finding};
use crate::models::resume::ResumeDocument;

/// Display breakdown for the checker results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedBreakdown {
    pub content: u32,
    pub ats_parse_rate: u32,
    pub quantifying_impact: u32,
    pub repetition: u32,
    pub spelling_grammar: u32,
    pub format_brevity: u32,
    pub style: u32,
    pub sections: u32,
    pub skills: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    /// Issue-count metric: each finding costs 10 points, floored at 60.
    /// Deliberately distinct from the rubric's additive `overall`.
    pub readiness_score: u32,
    pub breakdown: DetailedBreakdown,
    pub issues: Vec<Finding>,
}

const CONTENT_BASELINE: u32 = 55;
const REPETITION_BASELINE: u32 = 85;
const SPELLING_BASELINE: u32 = 95;
const FORMAT_BASELINE: u32 = 80;
const STYLE_BASELINE: u32 = 75;

/// Classifies the document and assembles the full checker report.
pub fn check_resume(document: &ResumeDocument) -> CheckReport {
    let issues = classify_issues(document);
    let quantified = document.has_quantified_bullets();

    let breakdown = DetailedBreakdown {
        content: CONTENT_BASELINE,
        ats_parse_rate: if quantified { 85 } else { 45 },
        quantifying_impact: if quantified { 90 } else { 30 },
        repetition: REPETITION_BASELINE,
        spelling_grammar: SPELLING_BASELINE,
        format_brevity: FORMAT_BASELINE,
        style: STYLE_BASELINE,
        sections: if document.experience.is_empty() { 60 } else { 90 },
        skills: (document.skills.len() as u32 * 20).min(100),
    };

    CheckReport {
        readiness_score: readiness_score(issues.len()),
        breakdown,
        issues,
    }
}

fn readiness_score(issue_count: usize) -> u32 {
    100u32.saturating_sub(issue_count as u32 * 10).max(60)
}

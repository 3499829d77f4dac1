#![allow(dead_code)]

//! Defect-pattern classifier.
//!
//! A fixed set of independent predicates runs over the document; each one
//! that triggers contributes a typed finding. Findings are reported in
//! predicate declaration order and carry no numeric weight of their own;
//! the rubric in [`super::rubric`] stays the scoring authority.

use serde::{Deserialize, Serialize};

use crate::models::resume::{is_provided, ResumeDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// A single triggered check, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub impact: Impact,
}

/// Summaries shorter than this read as weak.
const SUMMARY_FLOOR: usize = 100;
/// Skill lists shorter than this read as thin.
const SKILL_FLOOR: usize = 5;

/// Runs every predicate over the document and collects the findings.
pub fn classify_issues(document: &ResumeDocument) -> Vec<Finding> {
    let mut findings = Vec::new();
    let info = &document.personal_info;

    if !is_provided(&info.email) || !is_provided(&info.phone) {
        findings.push(Finding {
            category: "Content".to_string(),
            severity: Severity::Error,
            title: "Missing Contact Information".to_string(),
            description: "Your resume is missing essential contact information that ATS systems look for.".to_string(),
            impact: Impact::High,
        });
    }

    if !document.has_quantified_bullets() {
        findings.push(Finding {
            category: "Content".to_string(),
            severity: Severity::Warning,
            title: "Lack of Quantified Achievements".to_string(),
            description: "Add numbers and metrics to demonstrate your impact and achievements."
                .to_string(),
            impact: Impact::High,
        });
    }

    if document.skills.len() < SKILL_FLOOR {
        findings.push(Finding {
            category: "Content".to_string(),
            severity: Severity::Warning,
            title: "Limited Skills Section".to_string(),
            description:
                "Add more relevant skills to improve keyword matching with job descriptions."
                    .to_string(),
            impact: Impact::Medium,
        });
    }

    // Covers the absent case too: an empty summary has length zero.
    if info.summary_len() < SUMMARY_FLOOR {
        findings.push(Finding {
            category: "Content".to_string(),
            severity: Severity::Warning,
            title: "Weak Professional Summary".to_string(),
            description:
                "Your professional summary should be 2-3 sentences highlighting your key qualifications."
                    .to_string(),
            impact: Impact::Medium,
        });
    }

    findings
}

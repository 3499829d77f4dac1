#![allow(dead_code)]

//! Resume document model.
//!
//! The document is produced by external collaborators (builder forms or an
//! upload parser) and arrives camelCase on the wire. Every field defaults,
//! so a partial document reads as "not provided" instead of failing to
//! deserialize. The analysis code never mutates a document.

use serde::{Deserialize, Serialize};

/// Contact details and headline summary for the document owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub summary: String,
}

impl PersonalInfo {
    /// Character length of the summary, ignoring surrounding whitespace.
    pub fn summary_len(&self) -> usize {
        self.summary.trim().chars().count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    /// Ignored when `current` is set.
    pub end_date: String,
    pub current: bool,
    /// Bullet points in display order.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub graduation_date: String,
    pub gpa: Option<String>,
}

impl EducationEntry {
    pub fn has_gpa(&self) -> bool {
        self.gpa.as_deref().map(is_provided).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    pub level: u8,
}

impl SkillEntry {
    /// Proficiency clamped to the 1–5 scale the forms promise but do not enforce.
    pub fn clamped_level(&self) -> u8 {
        self.level.clamp(1, 5)
    }
}

/// The full normalized resume a caller submits for analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
}

impl ResumeDocument {
    /// True when any experience bullet carries a number.
    pub fn has_quantified_bullets(&self) -> bool {
        self.experience.iter().any(|exp| {
            exp.description
                .iter()
                .any(|bullet| bullet.chars().any(|c| c.is_ascii_digit()))
        })
    }
}

/// Presence test for caller-supplied text: whitespace-only counts as absent.
pub fn is_provided(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_builder_wire_shape() {
        let json = r#"{
            "personalInfo": {
                "fullName": "John Doe",
                "email": "john.doe@email.com",
                "phone": "+1 (555) 123-4567",
                "location": "New York, NY",
                "summary": "Experienced professional."
            },
            "experience": [{
                "id": "1",
                "jobTitle": "Senior Software Engineer",
                "company": "Tech Corp",
                "location": "New York, NY",
                "startDate": "2020-01",
                "endDate": "2024-01",
                "current": false,
                "description": ["Led development of microservices serving 1M+ users"]
            }],
            "education": [{
                "id": "1",
                "degree": "Bachelor of Computer Science",
                "school": "State University",
                "location": "Boston, MA",
                "graduationDate": "2016-05",
                "gpa": "3.8"
            }],
            "skills": [{"id": "1", "name": "Rust", "level": 5}]
        }"#;

        let document: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.personal_info.full_name, "John Doe");
        assert_eq!(document.experience[0].job_title, "Senior Software Engineer");
        assert_eq!(document.education[0].gpa.as_deref(), Some("3.8"));
        assert_eq!(document.skills[0].level, 5);
    }

    #[test]
    fn test_partial_document_defaults_to_not_provided() {
        let document: ResumeDocument = serde_json::from_str("{}").unwrap();
        assert!(document.personal_info.full_name.is_empty());
        assert!(document.personal_info.website.is_none());
        assert!(document.experience.is_empty());
        assert!(document.education.is_empty());
        assert!(document.skills.is_empty());
    }

    #[test]
    fn test_is_provided_rejects_whitespace() {
        assert!(is_provided("NYC"));
        assert!(!is_provided(""));
        assert!(!is_provided("   "));
    }

    #[test]
    fn test_summary_len_counts_characters_not_bytes() {
        let info = PersonalInfo {
            summary: "é".repeat(10),
            ..Default::default()
        };
        assert_eq!(info.summary_len(), 10);
    }

    #[test]
    fn test_has_gpa_ignores_blank_values() {
        let mut entry = EducationEntry {
            gpa: Some("3.9".to_string()),
            ..Default::default()
        };
        assert!(entry.has_gpa());
        entry.gpa = Some("  ".to_string());
        assert!(!entry.has_gpa());
        entry.gpa = None;
        assert!(!entry.has_gpa());
    }

    #[test]
    fn test_clamped_level_bounds() {
        let mut skill = SkillEntry {
            id: "1".to_string(),
            name: "Rust".to_string(),
            level: 0,
        };
        assert_eq!(skill.clamped_level(), 1);
        skill.level = 3;
        assert_eq!(skill.clamped_level(), 3);
        skill.level = 9;
        assert_eq!(skill.clamped_level(), 5);
    }

    #[test]
    fn test_quantified_bullets_detects_digits_anywhere() {
        let mut document = ResumeDocument::default();
        assert!(!document.has_quantified_bullets());

        document.experience.push(ExperienceEntry {
            description: vec!["Improved the deployment process".to_string()],
            ..Default::default()
        });
        assert!(!document.has_quantified_bullets());

        document.experience.push(ExperienceEntry {
            description: vec![
                "Mentored the platform team".to_string(),
                "Increased sales by 20%".to_string(),
            ],
            ..Default::default()
        });
        assert!(document.has_quantified_bullets());
    }
}

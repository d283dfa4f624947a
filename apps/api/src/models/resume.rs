//! Resume content and persistence row types.
//!
//! `ResumeContent` is both the deterministic base structure derived from the
//! profile and the final AI-enhanced result: the base starts with empty
//! `summary`/`core_competencies` and unenhanced descriptions, and the
//! reconciler overlays model prose without ever changing array lengths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Resolved contact block. All fields default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// One work-experience record. The factual fields (`title`, `company`,
/// `start_date`, `end_date`) are owned by the base structure and never
/// touched by reconciliation; only `description` is enhanced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    /// Normalized `MM/YYYY`, or the literal "Present" for ongoing roles.
    pub end_date: String,
    pub description: String,
}

/// One education record. `graduation_date` is forced to the empty string in
/// age-optimized mode. `description` is empty in the base structure and
/// filled (best effort) by reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationRecord {
    pub degree: String,
    pub school: String,
    pub field: String,
    pub graduation_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeContent {
    pub personal_info: ContactInfo,
    pub summary: String,
    pub core_competencies: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<EducationRecord>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: String,
    pub profile_id: String,
    pub job_type: String,
    pub title: String,
    pub content: Json<ResumeContent>,
    pub is_active: bool,
    pub is_true_resume: bool,
    pub job_description: Option<String>,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_content_round_trips_camel_case() {
        let content = ResumeContent {
            personal_info: ContactInfo {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ..Default::default()
            },
            summary: "Pioneering engineer.".to_string(),
            core_competencies: "\u{2022} Analysis \u{2013} Deep analytical work.".to_string(),
            work_experience: vec![WorkExperience {
                title: "Programmer".to_string(),
                company: "Analytical Engines".to_string(),
                start_date: "01/1842".to_string(),
                end_date: "Present".to_string(),
                description: "\u{2022} Wrote the first program".to_string(),
            }],
            education: vec![EducationRecord::default()],
            skills: vec!["Mathematics".to_string()],
        };

        let json = serde_json::to_value(&content).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json.get("coreCompetencies").is_some());
        assert!(json["workExperience"][0].get("startDate").is_some());

        let recovered: ResumeContent = serde_json::from_value(json).unwrap();
        assert_eq!(recovered, content);
    }

    #[test]
    fn test_base_education_omits_empty_description() {
        let record = EducationRecord {
            degree: "BSc".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(
            json.get("description").is_none(),
            "empty description must not appear in the serialized base structure"
        );
    }
}

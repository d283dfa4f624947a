//! Stored profile types. Field names stay camelCase on the wire and in the
//! persisted JSON blobs so existing data round-trips unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Contact block of the stored profile. `name` is a legacy pre-merged field
/// used only when first/last are absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// One work-history record. `position` is preferred over the legacy `title`
/// alias. A missing `end_date` means the role is ongoing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkHistoryEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

/// One education record. `institution` is preferred over the legacy `school`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub graduation_date: Option<String>,
}

/// The full profile snapshot the pipeline consumes.
///
/// Arrays are positionally significant: the same index refers to the same
/// logical record across base building, prompting, and reconciliation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub personal_info: PersonalInfo,
    pub work_history: Vec<WorkHistoryEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: String,
    pub personal_info: Json<PersonalInfo>,
    pub work_history: Json<Vec<WorkHistoryEntry>>,
    pub education: Json<Vec<EducationEntry>>,
    pub skills: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRow {
    /// Reassembles the snapshot shape the pipeline consumes.
    pub fn to_profile_data(&self) -> ProfileData {
        ProfileData {
            personal_info: self.personal_info.0.clone(),
            work_history: self.work_history.0.clone(),
            education: self.education.0.clone(),
            skills: self.skills.0.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_data_deserializes_camel_case() {
        let json = serde_json::json!({
            "personalInfo": {"firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"},
            "workHistory": [{"company": "Analytical Engines", "position": "Programmer", "startDate": "1842-01-01", "endDate": null}],
            "education": [{"institution": "Home Tutoring", "degree": "Mathematics", "graduationDate": "1835"}],
            "skills": ["Mathematics", "Notes"]
        });
        let profile: ProfileData = serde_json::from_value(json).unwrap();
        assert_eq!(profile.personal_info.first_name.as_deref(), Some("Ada"));
        assert_eq!(profile.work_history.len(), 1);
        assert!(profile.work_history[0].end_date.is_none());
        assert_eq!(profile.skills.len(), 2);
    }

    #[test]
    fn test_profile_data_defaults_missing_sections() {
        let profile: ProfileData = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(profile.work_history.is_empty());
        assert!(profile.education.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.personal_info.name.is_none());
    }
}

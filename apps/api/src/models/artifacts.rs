//! Rows for the artifacts generated alongside resumes: cover letters,
//! interview prep sheets, and skills-gap reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CoverLetterRow {
    pub id: String,
    pub resume_id: String,
    pub job_title: String,
    pub company_name: String,
    pub job_description: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Interview prep is upserted per resume: `questions` is replaced on each
/// regeneration, `notes` is a free-form blob owned by the user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewPrepRow {
    pub id: String,
    pub resume_id: String,
    pub questions: Json<Vec<String>>,
    pub notes: Json<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillsReportRow {
    pub id: String,
    pub resume_id: String,
    pub job_description: String,
    pub matched_skills: Json<Vec<String>>,
    pub suggestions: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

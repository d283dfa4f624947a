//! Skills gap analysis: compares a stored resume against a job description
//! and reports matched skills, missing skills, and suggestions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json as SqlJson;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::parse_json_payload;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::models::artifacts::SkillsReportRow;
use crate::resume::store::get_resume;
use crate::state::AppState;

const SKILLS_MAX_TOKENS: u32 = 2048;

const SKILLS_SYSTEM: &str = "You are an expert career advisor specializing in skills gap \
    analysis. You compare a candidate's real resume against a job description and report \
    honestly on fit. Only count a skill as matched when the resume actually evidences it.";

/// Replace: {resume_json}, {job_description}.
const SKILLS_TEMPLATE: &str = r#"Compare the following resume against the job description and analyze the skills fit.

Resume (JSON):
{resume_json}

Job description:
{job_description}

Return a JSON object in exactly this shape:
{
  "matchedSkills": ["skills from the job description the resume clearly evidences"],
  "missingSkills": ["skills the job description asks for that the resume does not show"],
  "suggestions": ["2-5 concrete, actionable suggestions for closing the most important gaps"]
}

Return only valid JSON."#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_id: String,
    pub job_description: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAnalysis {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub report: SkillsReportRow,
    pub analysis: SkillsAnalysis,
}

/// POST /api/v1/skills/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<AnalyzeResponse>), AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description is required.".to_string(),
        ));
    }

    let resume = get_resume(&state.db, &req.resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {} not found", req.resume_id)))?;

    let resume_json = serde_json::to_string_pretty(&resume.content.0).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to serialize resume content: {e}"))
    })?;

    let user_prompt = SKILLS_TEMPLATE
        .replace("{resume_json}", &resume_json)
        .replace("{job_description}", &req.job_description);

    tracing::info!(resume_id = %req.resume_id, "running skills gap analysis");

    let system_prompt = format!("{SKILLS_SYSTEM} {JSON_ONLY_SYSTEM}");
    let reply = state
        .llm
        .invoke(&system_prompt, &user_prompt, SKILLS_MAX_TOKENS)
        .await
        .map_err(AppError::from)?;

    let analysis = extract_analysis(&reply).ok_or_else(|| {
        tracing::error!("Could not parse skills analysis from model reply");
        AppError::MalformedResponse("failed to parse skills analysis from AI response".to_string())
    })?;

    let report = sqlx::query_as::<_, SkillsReportRow>(
        r#"
        INSERT INTO skills_reports
            (id, resume_id, job_description, matched_skills, suggestions, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4().simple().to_string())
    .bind(&req.resume_id)
    .bind(&req.job_description)
    .bind(SqlJson(&analysis.matched_skills))
    .bind(SqlJson(&analysis.suggestions))
    .bind(Utc::now())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(AnalyzeResponse { report, analysis })))
}

/// GET /api/v1/skills
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillsReportRow>>, AppError> {
    let rows = sqlx::query_as::<_, SkillsReportRow>(
        "SELECT * FROM skills_reports ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// Lenient extraction: each array is optional and non-string elements are
/// skipped, but the reply must be JSON with at least one recognized field.
fn extract_analysis(raw_text: &str) -> Option<SkillsAnalysis> {
    let value = parse_json_payload(raw_text).ok()?;
    if !value.is_object() {
        return None;
    }
    let has_any = ["matchedSkills", "missingSkills", "suggestions"]
        .iter()
        .any(|key| value.get(key).is_some());
    if !has_any {
        return None;
    }
    Some(SkillsAnalysis {
        matched_skills: string_list(&value, "matchedSkills"),
        missing_skills: string_list(&value, "missingSkills"),
        suggestions: string_list(&value, "suggestions"),
    })
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

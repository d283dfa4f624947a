//! Interview preparation: generates likely interview questions from a stored
//! resume and keeps the user's prep notes alongside them. One prep record
//! per resume.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use sqlx::types::Json as SqlJson;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::parse_json_payload;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::models::artifacts::InterviewPrepRow;
use crate::resume::store::get_resume;
use crate::state::AppState;

const INTERVIEW_MAX_TOKENS: u32 = 2048;

const INTERVIEW_SYSTEM: &str = "You are an expert interview coach. You anticipate the \
    questions a hiring panel is most likely to ask a specific candidate, grounded in their \
    actual resume.";

/// Replace: {resume_json}, and {job_context} with either a job-description
/// block or the empty string.
const INTERVIEW_TEMPLATE: &str = r#"Based on the following resume, generate 10 interview questions this candidate should prepare for. Mix behavioral questions grounded in their specific work history with role-relevant technical or situational questions. Reference their actual companies, roles, and achievements where it sharpens the question.

Resume (JSON):
{resume_json}
{job_context}
Return a JSON object in exactly this shape:
{
  "questions": [
    "First question...",
    "Second question..."
  ]
}

Return only valid JSON with exactly 10 questions."#;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewPrepRequest {
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    pub notes: Value,
}

/// POST /api/v1/interview-prep/:resume_id. (Re)generates questions for a
/// resume, replacing any existing prep record but keeping its notes.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
    Json(req): Json<InterviewPrepRequest>,
) -> Result<Json<InterviewPrepRow>, AppError> {
    let resume = get_resume(&state.db, &resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let resume_json = serde_json::to_string_pretty(&resume.content.0).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to serialize resume content: {e}"))
    })?;

    let job_context = match req.job_description.as_deref().map(str::trim) {
        Some(jd) if !jd.is_empty() => format!("\nTarget job description:\n{jd}\n"),
        _ => String::new(),
    };

    let user_prompt = INTERVIEW_TEMPLATE
        .replace("{resume_json}", &resume_json)
        .replace("{job_context}", &job_context);

    tracing::info!(%resume_id, "generating interview questions");

    let system_prompt = format!("{INTERVIEW_SYSTEM} {JSON_ONLY_SYSTEM}");
    let reply = state
        .llm
        .invoke(&system_prompt, &user_prompt, INTERVIEW_MAX_TOKENS)
        .await
        .map_err(AppError::from)?;

    let questions = extract_questions(&reply).ok_or_else(|| {
        tracing::error!("Could not parse interview questions from model reply");
        AppError::MalformedResponse(
            "failed to parse interview questions from AI response".to_string(),
        )
    })?;

    let row = upsert_prep(&state, &resume_id, &questions).await?;
    Ok(Json(row))
}

/// GET /api/v1/interview-prep/:resume_id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<InterviewPrepRow>, AppError> {
    fetch_prep(&state, &resume_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!("No interview prep found for resume {resume_id}"))
        })
}

/// PUT /api/v1/interview-prep/:resume_id/notes. Notes only; questions stay.
pub async fn handle_save_notes(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
    Json(req): Json<NotesRequest>,
) -> Result<Json<InterviewPrepRow>, AppError> {
    let row = sqlx::query_as::<_, InterviewPrepRow>(
        r#"
        UPDATE interview_preps
        SET notes = ?, updated_at = ?
        WHERE resume_id = ?
        RETURNING *
        "#,
    )
    .bind(SqlJson(&req.notes))
    .bind(Utc::now())
    .bind(&resume_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!("No interview prep found for resume {resume_id}"))
    })?;
    Ok(Json(row))
}

/// Lenient extraction: any JSON object with a `questions` array of strings
/// counts; non-string elements are skipped.
fn extract_questions(raw_text: &str) -> Option<Vec<String>> {
    let value = parse_json_payload(raw_text).ok()?;
    let questions: Vec<String> = value
        .get("questions")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    if questions.is_empty() {
        None
    } else {
        Some(questions)
    }
}

async fn fetch_prep(
    state: &AppState,
    resume_id: &str,
) -> Result<Option<InterviewPrepRow>, sqlx::Error> {
    sqlx::query_as::<_, InterviewPrepRow>("SELECT * FROM interview_preps WHERE resume_id = ?")
        .bind(resume_id)
        .fetch_optional(&state.db)
        .await
}

async fn upsert_prep(
    state: &AppState,
    resume_id: &str,
    questions: &[String],
) -> Result<InterviewPrepRow, sqlx::Error> {
    let now = Utc::now();
    if fetch_prep(state, resume_id).await?.is_some() {
        sqlx::query_as::<_, InterviewPrepRow>(
            r#"
            UPDATE interview_preps
            SET questions = ?, updated_at = ?
            WHERE resume_id = ?
            RETURNING *
            "#,
        )
        .bind(SqlJson(questions))
        .bind(now)
        .bind(resume_id)
        .fetch_one(&state.db)
        .await
    } else {
        sqlx::query_as::<_, InterviewPrepRow>(
            r#"
            INSERT INTO interview_preps
                (id, resume_id, questions, notes, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4().simple().to_string())
        .bind(resume_id)
        .bind(SqlJson(questions))
        .bind(SqlJson(&Value::Object(serde_json::Map::new())))
        .bind(now)
        .bind(now)
        .fetch_one(&state.db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_questions_from_fenced_reply() {
        let reply = "```json\n{\"questions\": [\"Tell me about Acme.\", \"Why this role?\"]}\n```";
        let questions = extract_questions(reply).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0], "Tell me about Acme.");
    }

    #[test]
    fn test_extract_questions_skips_non_strings() {
        let reply = r#"{"questions": ["One", 2, null, "Two"]}"#;
        assert_eq!(extract_questions(reply).unwrap(), vec!["One", "Two"]);
    }

    #[test]
    fn test_extract_questions_rejects_missing_or_empty() {
        assert!(extract_questions("{}").is_none());
        assert!(extract_questions(r#"{"questions": []}"#).is_none());
        assert!(extract_questions("not json at all").is_none());
    }
}

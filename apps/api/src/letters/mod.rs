//! Cover letter generation: prompt built from a stored resume plus the job
//! posting, model output persisted as plain text.

pub mod prompts;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::artifacts::CoverLetterRow;
use crate::resume::store::get_resume;
use crate::state::AppState;

use prompts::{
    length_instruction, personality_instruction, COVER_LETTER_MAX_TOKENS, COVER_LETTER_SYSTEM,
    COVER_LETTER_TEMPLATE,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub resume_id: String,
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub length: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetterListQuery {
    pub resume_id: Option<String>,
}

/// POST /api/v1/cover-letters
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> Result<(StatusCode, Json<CoverLetterRow>), AppError> {
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

    let user_prompt = COVER_LETTER_TEMPLATE
        .replace("{job_title}", &req.job_title)
        .replace("{company_name}", &req.company_name)
        .replace("{resume_json}", &resume_json)
        .replace("{job_description}", &req.job_description)
        .replace(
            "{personality_instruction}",
            personality_instruction(&req.personality),
        )
        .replace("{length_instruction}", length_instruction(&req.length));

    tracing::info!(resume_id = %req.resume_id, job_title = %req.job_title, "generating cover letter");

    let letter = state
        .llm
        .invoke(COVER_LETTER_SYSTEM, &user_prompt, COVER_LETTER_MAX_TOKENS)
        .await
        .map_err(AppError::from)?;

    let row = create_cover_letter(&state.db, &req, letter.trim()).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/cover-letters?resumeId=...
pub async fn handle_list(
    State(state): State<AppState>,
    Query(query): Query<CoverLetterListQuery>,
) -> Result<Json<Vec<CoverLetterRow>>, AppError> {
    let rows = match query.resume_id {
        Some(resume_id) => {
            sqlx::query_as::<_, CoverLetterRow>(
                "SELECT * FROM cover_letters WHERE resume_id = ? ORDER BY created_at DESC",
            )
            .bind(resume_id)
            .fetch_all(&state.db)
            .await?
        }
        None => {
            sqlx::query_as::<_, CoverLetterRow>(
                "SELECT * FROM cover_letters ORDER BY created_at DESC",
            )
            .fetch_all(&state.db)
            .await?
        }
    };
    Ok(Json(rows))
}

async fn create_cover_letter(
    pool: &SqlitePool,
    req: &CoverLetterRequest,
    content: &str,
) -> Result<CoverLetterRow, sqlx::Error> {
    sqlx::query_as::<_, CoverLetterRow>(
        r#"
        INSERT INTO cover_letters
            (id, resume_id, job_title, company_name, job_description, content, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4().simple().to_string())
    .bind(&req.resume_id)
    .bind(&req.job_title)
    .bind(&req.company_name)
    .bind(&req.job_description)
    .bind(content)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

//! HTTP handlers for resume generation and management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::models::resume::{ResumeContent, ResumeRow};
use crate::profile;
use crate::resume::generator::generate_resume_content;
use crate::resume::store::{self, NewResume};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub job_type: String,
    #[serde(default)]
    pub age_optimized: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateTrueRequest {
    pub age_optimized: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizeRequest {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    #[serde(default)]
    pub age_optimized: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub job_type: String,
    pub title: String,
    pub content: ResumeContent,
}

async fn require_profile(state: &AppState) -> Result<crate::models::profile::ProfileRow, AppError> {
    profile::get_profile(&state.db)
        .await?
        .ok_or_else(|| {
            AppError::Validation("Profile not found. Please create your profile first.".to_string())
        })
}

/// POST /api/v1/resumes/generate. Enhanced resume for a job type.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let profile_row = require_profile(&state).await?;
    let content = generate_resume_content(
        &profile_row.to_profile_data(),
        &req.job_type,
        req.age_optimized,
        state.llm.as_ref(),
    )
    .await?;

    let title = format!("{} Resume", req.job_type);
    let row = store::create_resume(
        &state.db,
        NewResume {
            profile_id: &profile_row.id,
            job_type: &req.job_type,
            title: &title,
            content: &content,
            is_true_resume: false,
            job_description: None,
            company_name: None,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// POST /api/v1/resumes/true. The unembellished reference resume. Replaces
/// any previous one.
pub async fn handle_generate_true(
    State(state): State<AppState>,
    Json(req): Json<GenerateTrueRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let profile_row = require_profile(&state).await?;
    let content = generate_resume_content(
        &profile_row.to_profile_data(),
        "General",
        req.age_optimized,
        state.llm.as_ref(),
    )
    .await?;

    store::delete_true_resumes(&state.db).await?;
    let row = store::create_resume(
        &state.db,
        NewResume {
            profile_id: &profile_row.id,
            job_type: "General",
            title: "Original Resume",
            content: &content,
            is_true_resume: true,
            job_description: None,
            company_name: None,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// POST /api/v1/resumes/customize. Resume tailored to a specific posting.
pub async fn handle_customize(
    State(state): State<AppState>,
    Json(req): Json<CustomizeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description is required.".to_string(),
        ));
    }

    let profile_row = require_profile(&state).await?;
    let content = generate_resume_content(
        &profile_row.to_profile_data(),
        &req.job_title,
        req.age_optimized,
        state.llm.as_ref(),
    )
    .await?;

    let title = format!("{} - {}", req.job_title, req.company_name);
    let row = store::create_resume(
        &state.db,
        NewResume {
            profile_id: &profile_row.id,
            job_type: &req.job_title,
            title: &title,
            content: &content,
            is_true_resume: false,
            job_description: Some(&req.job_description),
            company_name: Some(&req.company_name),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    Ok(Json(store::list_resumes(&state.db).await?))
}

pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeRow>, AppError> {
    store::get_resume(&state.db, &id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    store::update_resume(&state.db, &id, &req.job_type, &req.title, &req.content)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    if store::delete_resume(&state.db, &id).await? {
        Ok(Json(json!({ "deleted": true })))
    } else {
        Err(AppError::NotFound(format!("Resume {id} not found")))
    }
}

pub async fn handle_activate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeRow>, AppError> {
    if !store::set_active_resume(&state.db, &id).await? {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    store::get_resume(&state.db, &id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

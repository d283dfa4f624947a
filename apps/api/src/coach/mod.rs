//! AI career coach chat: a roster of coach personas and a multi-turn chat
//! endpoint that relays the conversation history through the LLM client,
//! optionally grounding the coach in one of the user's stored resumes.

pub mod personas;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, ChatRole, ModelInvoker};
use crate::models::resume::ResumeContent;
use crate::resume::store::get_resume;
use crate::state::AppState;

use personas::{coach_by_id, CoachPersona, CoachSummary, COACHES};

const COACH_MAX_TOKENS: u32 = 4096;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub coach_id: String,
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub resume_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub content: String,
}

/// GET /api/v1/coaches
pub async fn handle_list() -> Json<Vec<CoachSummary>> {
    Json(COACHES.iter().map(CoachSummary::from).collect())
}

/// POST /api/v1/coach/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let persona = coach_by_id(&req.coach_id)
        .ok_or_else(|| AppError::NotFound(format!("Coach {} not found", req.coach_id)))?;

    let resume_content = match &req.resume_id {
        Some(resume_id) => {
            let resume = get_resume(&state.db, resume_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
            Some(resume.content.0)
        }
        None => None,
    };

    tracing::info!(coach = persona.id, turns = req.messages.len(), "coach chat");

    let content = chat_with_coach(
        persona,
        &req.messages,
        resume_content.as_ref(),
        state.llm.as_ref(),
    )
    .await?;
    Ok(Json(ChatResponse { content }))
}

/// Runs one chat turn: persona system prompt (plus optional resume context)
/// and the full message history go to the model as-is.
pub async fn chat_with_coach(
    persona: &CoachPersona,
    messages: &[ChatMessage],
    resume: Option<&ResumeContent>,
    llm: &dyn ModelInvoker,
) -> Result<String, AppError> {
    if messages.is_empty() {
        return Err(AppError::Validation(
            "At least one message is required.".to_string(),
        ));
    }
    if messages.last().map(|m| m.role) != Some(ChatRole::User) {
        return Err(AppError::Validation(
            "The last message must come from the user.".to_string(),
        ));
    }

    let mut system_prompt = persona.system_prompt();
    if let Some(content) = resume {
        system_prompt.push_str(&resume_context_block(content)?);
    }

    let reply = llm
        .invoke_chat(&system_prompt, messages, COACH_MAX_TOKENS)
        .await?;
    Ok(reply.trim().to_string())
}

/// Context block appended to the system prompt when the chat is grounded in
/// a stored resume.
fn resume_context_block(content: &ResumeContent) -> Result<String, AppError> {
    let resume_json = serde_json::to_string_pretty(content).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to serialize resume content: {e}"))
    })?;
    Ok(format!(
        "\n\n[The user's current resume (use this when giving feedback on their resume, \
         bullets, or LinkedIn; you may address them by the name it contains):\n{resume_json}]"
    ))
}

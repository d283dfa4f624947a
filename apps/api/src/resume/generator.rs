//! Resume content generation pipeline: base structure, prompt, model call,
//! reconciliation.

use crate::errors::AppError;
use crate::llm_client::ModelInvoker;
use crate::models::profile::ProfileData;
use crate::models::resume::ResumeContent;
use crate::resume::base::build_base;
use crate::resume::prompts::{compose_prompt, RESUME_MAX_TOKENS};
use crate::resume::reconcile::reconcile;

/// Runs the full pipeline for one resume. The returned content always
/// mirrors the factual base: the model only contributes summary, core
/// competencies, and descriptions.
pub async fn generate_resume_content(
    profile: &ProfileData,
    job_type: &str,
    age_optimized: bool,
    llm: &dyn ModelInvoker,
) -> Result<ResumeContent, AppError> {
    let base = build_base(profile, age_optimized);
    let prompt = compose_prompt(&base, job_type, age_optimized)?;

    tracing::info!(
        job_type,
        age_optimized,
        work_entries = base.work_experience.len(),
        "generating resume content"
    );

    let reply = llm
        .invoke(&prompt.system_prompt, &prompt.user_prompt, RESUME_MAX_TOKENS)
        .await?;

    reconcile(&reply, &base).map_err(|e| {
        tracing::error!("Could not parse model reply as JSON: {e}");
        AppError::MalformedResponse("failed to parse resume content from AI response".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    use crate::models::profile::{PersonalInfo, WorkHistoryEntry};

    struct CannedInvoker {
        reply: String,
    }

    #[async_trait]
    impl ModelInvoker for CannedInvoker {
        async fn invoke_chat(
            &self,
            _system_prompt: &str,
            _messages: &[crate::llm_client::ChatMessage],
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            Ok(self.reply.clone())
        }
    }

    struct FailingInvoker;

    #[async_trait]
    impl ModelInvoker for FailingInvoker {
        async fn invoke_chat(
            &self,
            _system_prompt: &str,
            _messages: &[crate::llm_client::ChatMessage],
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            Err(LlmError::MissingApiKey)
        }
    }

    fn sample_profile() -> ProfileData {
        ProfileData {
            personal_info: PersonalInfo {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                email: Some("ada@example.com".to_string()),
                ..Default::default()
            },
            work_history: vec![WorkHistoryEntry {
                company: Some("Acme".to_string()),
                position: Some("Engineer".to_string()),
                start_date: Some("2018-01-01".to_string()),
                end_date: Some("".to_string()),
                description: Some("Wrote code".to_string()),
                ..Default::default()
            }],
            skills: vec!["Rust".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_pipeline_merges_model_prose_onto_facts() {
        let invoker = CannedInvoker {
            reply: serde_json::json!({
                "summary": "Great engineer.",
                "workExperience": [{"description": "• Built things"}]
            })
            .to_string(),
        };

        let content = generate_resume_content(&sample_profile(), "General", false, &invoker)
            .await
            .unwrap();

        assert_eq!(content.personal_info.name, "Ada Lovelace");
        assert_eq!(content.summary, "Great engineer.");
        let exp = &content.work_experience[0];
        assert_eq!(exp.title, "Engineer");
        assert_eq!(exp.company, "Acme");
        assert_eq!(exp.start_date, "01/2018");
        assert_eq!(exp.end_date, "Present");
        assert_eq!(exp.description, "• Built things");
        assert_eq!(content.skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_missing_api_key_surfaces_as_configuration_error() {
        let err = generate_resume_content(&sample_profile(), "General", false, &FailingInvoker)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_unparseable_reply_fails_whole_generation() {
        let invoker = CannedInvoker {
            reply: "Sure! Here is your resume: it looks great.".to_string(),
        };
        let err = generate_resume_content(&sample_profile(), "General", false, &invoker)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}

//! Positional merge of AI-generated prose onto the factual base structure.
//!
//! The model is only trusted for prose: summary, core competencies, and
//! per-entry descriptions. Everything factual (names, companies, titles,
//! dates, skills) comes from the base, so a model that hallucinates or
//! reorders entries cannot corrupt the output. Extraction is lenient:
//! missing or wrong-typed fields fall back to the base value, and the only
//! hard failure is a response that is not JSON at all.

use serde_json::Value;

use crate::llm_client::parse_json_payload;
use crate::models::resume::ResumeContent;

/// Merges the model's reply onto `base`. Fails only when the reply (after
/// fence stripping) is not valid JSON.
pub fn reconcile(raw_text: &str, base: &ResumeContent) -> Result<ResumeContent, serde_json::Error> {
    let ai = parse_json_payload(raw_text)?;

    let ai_work = array_field(&ai, "workExperience");
    let ai_education = array_field(&ai, "education");

    if ai_work.len() < base.work_experience.len() {
        tracing::warn!(
            expected = base.work_experience.len(),
            received = ai_work.len(),
            "model returned fewer work experience enhancements than expected; \
             missing entries keep their original descriptions"
        );
    }

    let work_experience = base
        .work_experience
        .iter()
        .enumerate()
        .map(|(i, exp)| {
            let mut merged = exp.clone();
            if let Some(description) = description_at(ai_work, i) {
                merged.description = description.to_string();
            }
            merged
        })
        .collect();

    let education = base
        .education
        .iter()
        .enumerate()
        .map(|(i, edu)| {
            let mut merged = edu.clone();
            if let Some(description) = description_at(ai_education, i) {
                merged.description = description.to_string();
            }
            merged
        })
        .collect();

    Ok(ResumeContent {
        personal_info: base.personal_info.clone(),
        summary: string_field(&ai, "summary").unwrap_or_default().to_string(),
        core_competencies: string_field(&ai, "coreCompetencies")
            .unwrap_or_default()
            .to_string(),
        work_experience,
        education,
        skills: base.skills.clone(),
    })
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Enhancement description at position `i`, if present and non-empty.
fn description_at(entries: &[Value], i: usize) -> Option<&str> {
    entries
        .get(i)
        .and_then(|entry| entry.get("description"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ContactInfo, EducationRecord, WorkExperience};

    fn sample_base() -> ResumeContent {
        ResumeContent {
            personal_info: ContactInfo {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ..Default::default()
            },
            work_experience: vec![
                WorkExperience {
                    title: "Engineer".to_string(),
                    company: "Acme".to_string(),
                    start_date: "01/2018".to_string(),
                    end_date: "Present".to_string(),
                    description: "Did engineering".to_string(),
                },
                WorkExperience {
                    title: "Analyst".to_string(),
                    company: "Globex".to_string(),
                    start_date: "06/2015".to_string(),
                    end_date: "12/2017".to_string(),
                    description: "Did analysis".to_string(),
                },
            ],
            education: vec![EducationRecord {
                degree: "BSc".to_string(),
                school: "State University".to_string(),
                field: "Mathematics".to_string(),
                graduation_date: "2014".to_string(),
                description: String::new(),
            }],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_merges_prose_and_preserves_facts() {
        let reply = serde_json::json!({
            "summary": "Seasoned engineer.",
            "coreCompetencies": "• Leadership – Led teams.",
            "workExperience": [
                {"description": "• Built systems"},
                {"description": "• Analyzed data"}
            ],
            "education": [{"description": "Graduated with honors"}]
        })
        .to_string();

        let merged = reconcile(&reply, &sample_base()).unwrap();
        assert_eq!(merged.summary, "Seasoned engineer.");
        assert_eq!(merged.core_competencies, "• Leadership – Led teams.");
        assert_eq!(merged.work_experience[0].description, "• Built systems");
        assert_eq!(merged.work_experience[1].description, "• Analyzed data");
        assert_eq!(merged.education[0].description, "Graduated with honors");
        // Facts untouched.
        assert_eq!(merged.personal_info.name, "Ada Lovelace");
        assert_eq!(merged.work_experience[0].company, "Acme");
        assert_eq!(merged.work_experience[1].end_date, "12/2017");
        assert_eq!(merged.skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_cardinality_and_order_follow_the_base() {
        // Model reorders and invents an extra entry; output still mirrors base.
        let reply = serde_json::json!({
            "summary": "s",
            "workExperience": [
                {"company": "Fabricated Inc", "description": "• First"},
                {"description": "• Second"},
                {"description": "• Extra, ignored"}
            ]
        })
        .to_string();

        let merged = reconcile(&reply, &sample_base()).unwrap();
        assert_eq!(merged.work_experience.len(), 2);
        assert_eq!(merged.work_experience[0].company, "Acme");
        assert_eq!(merged.work_experience[0].description, "• First");
        assert_eq!(merged.work_experience[1].description, "• Second");
    }

    #[test]
    fn test_short_reply_keeps_original_descriptions() {
        let reply = serde_json::json!({
            "summary": "s",
            "workExperience": [{"description": "• Only one"}]
        })
        .to_string();

        let merged = reconcile(&reply, &sample_base()).unwrap();
        assert_eq!(merged.work_experience[0].description, "• Only one");
        assert_eq!(merged.work_experience[1].description, "Did analysis");
    }

    #[test]
    fn test_empty_description_falls_back_to_base() {
        let reply = serde_json::json!({
            "workExperience": [{"description": ""}, {"description": "• Kept"}]
        })
        .to_string();

        let merged = reconcile(&reply, &sample_base()).unwrap();
        assert_eq!(merged.work_experience[0].description, "Did engineering");
        assert_eq!(merged.work_experience[1].description, "• Kept");
    }

    #[test]
    fn test_missing_fields_default_gracefully() {
        let merged = reconcile("{}", &sample_base()).unwrap();
        assert_eq!(merged.summary, "");
        assert_eq!(merged.core_competencies, "");
        assert_eq!(merged.work_experience[0].description, "Did engineering");
        assert_eq!(merged.education[0].description, "");
    }

    #[test]
    fn test_fenced_reply_is_accepted() {
        let reply = "```json\n{\"summary\": \"Fenced.\"}\n```";
        let merged = reconcile(reply, &sample_base()).unwrap();
        assert_eq!(merged.summary, "Fenced.");
    }

    #[test]
    fn test_non_json_reply_is_an_error() {
        assert!(reconcile("I'm sorry, I can't do that.", &sample_base()).is_err());
    }
}

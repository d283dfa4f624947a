//! Prompt composer for resume content generation.
//!
//! Two modes: a generic enhancement prompt (`jobType == "General"`) and a
//! job-targeted prompt. Both restrict the model to prose only: summary,
//! core competencies, and per-entry descriptions. Both demand array lengths
//! that exactly match the base structure. The reconciler tolerates
//! violations anyway, but a well-instructed model rarely commits them.

use crate::errors::AppError;
use crate::llm_client::prompts::{BULLET_FORMAT_RULE, NON_FABRICATION_RULE};
use crate::models::resume::ResumeContent;

pub const RESUME_MAX_TOKENS: u32 = 4096;

/// System directive for resume generation. The non-fabrication and bullet
/// formatting rules are appended at composition time.
const RESUME_SYSTEM: &str = "You are an expert resume writer with 20+ years of experience. \
    Your specialty is transforming raw information into polished, professional resumes \
    that sound impressive and compelling. You excel at using strong action verbs, \
    achievement-focused language, and industry-standard terminology to make candidates \
    stand out.";

const AGE_OPTIMIZED_SYSTEM_FOCUS: &str = "SPECIAL FOCUS: You specialize in creating \
    age-optimized resumes that emphasize modern skills, contemporary language, and \
    recent achievements while maintaining professionalism and truthfulness.";

const AGE_OPTIMIZATION_INSTRUCTIONS: &str = r#"
AGE OPTIMIZATION MODE - CRITICAL INSTRUCTIONS:
- MODERNIZE ALL LANGUAGE: Use contemporary, current industry terminology. Avoid dated phrases or old-fashioned language.
- FOCUS ON RECENT EXPERIENCE: Emphasize the most recent work experiences (last 10-15 years) in descriptions and summary.
- REMOVE AGE INDICATORS: Do not mention "years of experience" with specific numbers that might reveal age. Use phrases like "extensive experience" or "proven track record" instead.
- CONTEMPORARY TONE: Write in a fresh, modern, energetic tone that sounds current and forward-thinking.
- SKILLS-FOCUSED: Emphasize skills and achievements over chronological history.
- REMOVE OUTDATED REFERENCES: Do not reference old technologies, methodologies, or industry terms that are clearly outdated.
"#;

/// Generic enhancement prompt. Replace: {age_instructions}, {summary_emphasis},
/// {tone_suffix}, {verb_guidance}, {older_roles_note}, {base_resume_json}.
const GENERAL_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer. Your task is to enhance ONLY the descriptions and create a professional summary. ALL factual data has already been preserved and will be merged back.
{age_instructions}
CRITICAL: You are ONLY enhancing descriptions and creating a summary. DO NOT return company names, job titles, dates, personal info, skills, or education - these are already preserved.

MANDATORY: You MUST return enhanced descriptions for EVERY work experience and EVERY education entry provided. The arrays you return must have the EXACT SAME LENGTH as the arrays in the Base Resume Structure.

Your task:
1. CREATE A PROFESSIONAL SUMMARY: Write a compelling 3-4 sentence summary that highlights the candidate's key strengths{summary_emphasis}. Use powerful, confident language{tone_suffix}.

2. CREATE CORE COMPETENCIES: From the candidate's work history, skills, and experience in the Base Resume Structure below, derive 5-8 core competencies in "Title – Description" format. Do not invent competencies; each must be supported by their actual roles, achievements, or skills. Each line: a short bold-style title (e.g. "Team Leadership & Development"), then an em dash "–", then 1-2 sentences describing impact drawn from their experience. Return as a single string with each competency on its own line starting with "• ".

3. ENHANCE WORK EXPERIENCE DESCRIPTIONS: For EACH AND EVERY work experience in the Base Resume Structure, enhance the description field only (you must return one enhanced description for each work experience):
   - Format as bullet points: Each achievement should be on its own line starting with "• " (bullet character)
   - Convert plain descriptions into achievement-focused bullet points
   - Use strong, modern action verbs (Led, Developed, Implemented, Optimized, Increased, etc.){verb_guidance}
   - Add quantifiable results where possible (percentages, numbers, scale)
   - Make responsibilities sound more impactful and professional
   - Focus on achievements and outcomes, not just duties{older_roles_note}
   - CRITICAL: Return the description as a multi-line string with each bullet point on a new line, starting with "• "

4. ENHANCE EDUCATION DESCRIPTIONS: Make education descriptions sound more professional and highlight relevant coursework or achievements if applicable.

Base Resume Structure (factual data already preserved):
{base_resume_json}

Return a JSON object with ONLY these fields:
{
  "summary": "A compelling, professional 3-4 sentence summary that makes the candidate sound impressive",
  "coreCompetencies": "• Title One – Brief description of impact and scope.\n• Title Two – Brief description.\n• (5-8 total, each line: • Title – Description using em dash – )",
  "workExperience": [
    { "description": "• Enhanced bullet point for the FIRST work experience\n• Second bullet point\n• Third bullet point with quantifiable results" },
    { "description": "• Enhanced bullet point for the SECOND work experience\n• Second bullet point\n• Third bullet point with quantifiable results" }
  ],
  "education": [
    { "description": "Enhanced education description (if applicable)" }
  ]
}

CRITICAL REQUIREMENTS:
- You MUST return coreCompetencies as a string with 5-8 lines; each line starts with "• " and uses the format "Title – Description" (em dash between title and description).
- The workExperience array MUST contain exactly the same number of entries as provided in the Base Resume Structure
- Each entry in workExperience must correspond to the same position in the original array (first entry = first work experience, second entry = second work experience, etc.)
- The education array MUST contain exactly the same number of entries as provided in the Base Resume Structure
- Return ONLY the summary, coreCompetencies, and enhanced descriptions
- DO NOT include personalInfo, company names, job titles, dates, or skills in your response
- These will be merged with the preserved factual data
- Return only valid JSON."#;

/// Job-targeted prompt. Replace: {job_type} plus the same tokens as the
/// general template.
const TARGETED_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer. Your task is to enhance ONLY the descriptions and create a professional summary optimized for {job_type} positions. ALL factual data has already been preserved and will be merged back.
{age_instructions}
CRITICAL: You are ONLY enhancing descriptions and creating a summary. DO NOT return company names, job titles, dates, personal info, skills, or education - these are already preserved.

MANDATORY: You MUST return enhanced descriptions for EVERY work experience and EVERY education entry provided. The arrays you return must have the EXACT SAME LENGTH as the arrays in the Base Resume Structure.

Your task:
1. CREATE A TARGETED PROFESSIONAL SUMMARY: Write a compelling 3-4 sentence summary specifically tailored for {job_type} roles, highlighting relevant experience and skills{tone_suffix}.

2. CREATE CORE COMPETENCIES: From the candidate's work history, skills, and experience in the Base Resume Structure below, derive 5-8 core competencies relevant to {job_type} in "Title – Description" format. Do not invent competencies; each must be supported by their actual roles, achievements, or skills. Each line: short title, then an em dash "–", then 1-2 sentences describing impact drawn from their experience. Return as a single string, each line starting with "• ".

3. ENHANCE WORK EXPERIENCE DESCRIPTIONS: For EACH AND EVERY work experience in the Base Resume Structure, enhance the description field only, emphasizing relevance to {job_type} (you must return one enhanced description for each work experience):
   - Format as bullet points: Each achievement should be on its own line starting with "• " (bullet character)
   - Convert plain descriptions into achievement-focused bullet points
   - Use strong, modern action verbs (Led, Developed, Implemented, Optimized, Increased, etc.){verb_guidance}
   - Emphasize experiences most relevant to {job_type} roles{recency_note}
   - Add quantifiable results where possible
   - Make responsibilities sound more impactful and professional
   - Focus on achievements and outcomes relevant to {job_type}{older_roles_note}
   - CRITICAL: Return the description as a multi-line string with each bullet point on a new line, starting with "• "

4. ENHANCE EDUCATION DESCRIPTIONS: Make education descriptions sound professional and highlight any coursework or achievements relevant to {job_type}.

Base Resume Structure (factual data already preserved):
{base_resume_json}

Return a JSON object with ONLY these fields:
{
  "summary": "A compelling, professional summary tailored for {job_type} roles",
  "coreCompetencies": "• Title One – Description relevant to {job_type}.\n• Title Two – Description.\n• (5-8 total, each line: • Title – Description with em dash – )",
  "workExperience": [
    { "description": "• Enhanced bullet point relevant to {job_type} for the FIRST work experience\n• Second bullet point\n• Third bullet point with quantifiable results" },
    { "description": "• Enhanced bullet point relevant to {job_type} for the SECOND work experience\n• Second bullet point\n• Third bullet point with quantifiable results" }
  ],
  "education": [
    { "description": "Enhanced education description (if applicable)" }
  ]
}

CRITICAL REQUIREMENTS:
- You MUST return coreCompetencies as a string with 5-8 lines; each line starts with "• " and uses "Title – Description" format (em dash between title and description).
- The workExperience array MUST contain exactly the same number of entries as provided in the Base Resume Structure
- Each entry in workExperience must correspond to the same position in the original array (first entry = first work experience, second entry = second work experience, etc.)
- The education array MUST contain exactly the same number of entries as provided in the Base Resume Structure
- Return ONLY the summary, coreCompetencies, and enhanced descriptions
- DO NOT include personalInfo, company names, job titles, dates, or skills in your response
- These will be merged with the preserved factual data
- Return only valid JSON."#;

/// The instruction pair handed to the model invoker.
#[derive(Debug, Clone)]
pub struct ComposedPrompt {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Builds the system directive and user prompt for a generation call.
pub fn compose_prompt(
    base: &ResumeContent,
    job_type: &str,
    age_optimized: bool,
) -> Result<ComposedPrompt, AppError> {
    let base_resume_json = serde_json::to_string_pretty(base).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to serialize base resume: {e}"))
    })?;

    let is_general = job_type == "General";

    let age_instructions = if age_optimized {
        AGE_OPTIMIZATION_INSTRUCTIONS
    } else {
        ""
    };
    let summary_emphasis = if age_optimized {
        ", proven expertise, and unique value proposition"
    } else {
        ", years of experience, and unique value proposition"
    };
    let tone_suffix = if age_optimized {
        " with a modern, contemporary tone"
    } else {
        ""
    };
    let verb_guidance = if age_optimized {
        " - prefer contemporary, current industry terminology"
    } else {
        ""
    };
    let recency_note = if age_optimized {
        " - prioritize recent experiences"
    } else {
        ""
    };
    let older_roles_note = if age_optimized {
        "\n   - For older positions, emphasize transferable skills and modern relevance rather than dated specifics"
    } else {
        ""
    };

    let template = if is_general {
        GENERAL_PROMPT_TEMPLATE
    } else {
        TARGETED_PROMPT_TEMPLATE
    };

    let user_prompt = template
        .replace("{job_type}", job_type)
        .replace("{age_instructions}", age_instructions)
        .replace("{summary_emphasis}", summary_emphasis)
        .replace("{tone_suffix}", tone_suffix)
        .replace("{verb_guidance}", verb_guidance)
        .replace("{recency_note}", recency_note)
        .replace("{older_roles_note}", older_roles_note)
        .replace("{base_resume_json}", &base_resume_json);

    let mut system_prompt = String::from(RESUME_SYSTEM);
    if age_optimized {
        system_prompt.push(' ');
        system_prompt.push_str(AGE_OPTIMIZED_SYSTEM_FOCUS);
    }
    system_prompt.push(' ');
    system_prompt.push_str(NON_FABRICATION_RULE);
    system_prompt.push(' ');
    system_prompt.push_str(BULLET_FORMAT_RULE);

    Ok(ComposedPrompt {
        system_prompt,
        user_prompt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{ProfileData, WorkHistoryEntry};
    use crate::resume::base::build_base_for_year;

    fn sample_base() -> ResumeContent {
        let profile = ProfileData {
            work_history: vec![WorkHistoryEntry {
                company: Some("Acme Corp LLC".to_string()),
                position: Some("Engineer".to_string()),
                start_date: Some("2018-01-01".to_string()),
                ..Default::default()
            }],
            skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        build_base_for_year(&profile, false, 2026)
    }

    #[test]
    fn test_general_prompt_has_no_job_type_targeting() {
        let prompt = compose_prompt(&sample_base(), "General", false).unwrap();
        assert!(!prompt.user_prompt.contains("{job_type}"));
        assert!(!prompt.user_prompt.contains("optimized for"));
    }

    #[test]
    fn test_targeted_prompt_names_the_job_type() {
        let prompt = compose_prompt(&sample_base(), "Data Engineer", false).unwrap();
        assert!(prompt
            .user_prompt
            .contains("optimized for Data Engineer positions"));
        assert!(!prompt.user_prompt.contains("{job_type}"));
    }

    #[test]
    fn test_base_structure_is_embedded() {
        let prompt = compose_prompt(&sample_base(), "General", false).unwrap();
        assert!(prompt.user_prompt.contains("Acme Corp LLC"));
        assert!(prompt.user_prompt.contains("01/2018"));
    }

    #[test]
    fn test_age_instructions_only_when_flagged() {
        let plain = compose_prompt(&sample_base(), "General", false).unwrap();
        assert!(!plain.user_prompt.contains("AGE OPTIMIZATION MODE"));
        assert!(!plain.system_prompt.contains("age-optimized"));

        let optimized = compose_prompt(&sample_base(), "General", true).unwrap();
        assert!(optimized.user_prompt.contains("AGE OPTIMIZATION MODE"));
        assert!(optimized
            .user_prompt
            .contains("Do not mention \"years of experience\""));
        assert!(optimized.system_prompt.contains("age-optimized"));
    }

    #[test]
    fn test_system_prompt_carries_non_fabrication_rule() {
        let prompt = compose_prompt(&sample_base(), "General", false).unwrap();
        assert!(prompt.system_prompt.contains("preserve ALL factual information"));
        assert!(prompt.system_prompt.contains("bullet points"));
    }

    #[test]
    fn test_no_unresolved_placeholders_remain() {
        for (job_type, age) in [("General", false), ("General", true), ("Sales", false), ("Sales", true)] {
            let prompt = compose_prompt(&sample_base(), job_type, age).unwrap();
            for token in [
                "{age_instructions}",
                "{summary_emphasis}",
                "{tone_suffix}",
                "{verb_guidance}",
                "{recency_note}",
                "{older_roles_note}",
                "{base_resume_json}",
            ] {
                assert!(
                    !prompt.user_prompt.contains(token),
                    "unresolved {token} for jobType={job_type}, age={age}"
                );
            }
        }
    }
}

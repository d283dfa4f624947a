//! Cover letter prompt templates and tone/length controls.

pub const COVER_LETTER_MAX_TOKENS: u32 = 2048;

pub const COVER_LETTER_SYSTEM: &str = "You are an expert cover letter writer. You write \
    compelling, personalized cover letters that connect a candidate's real experience to a \
    specific role. You must preserve ALL factual information from the resume exactly as \
    provided: company names, job titles, dates, and institutions must never be altered or \
    invented. Return plain text only, with no markdown formatting or commentary.";

/// Replace: {job_title}, {company_name}, {resume_json}, {job_description},
/// {personality_instruction}, {length_instruction}.
pub const COVER_LETTER_TEMPLATE: &str = r#"Write a cover letter for the following position.

Position: {job_title}
Company: {company_name}

Candidate's resume (JSON):
{resume_json}

Job description:
{job_description}

Instructions:
- {personality_instruction}
- {length_instruction}
- Open with a hook specific to the role and company, not a generic greeting line.
- Draw on the candidate's actual experience from the resume; do not invent employers, titles, dates, or achievements.
- Connect the candidate's strongest relevant experience to the needs in the job description.
- Close with a confident call to action.
- Return ONLY the letter text. No subject line, no markdown, no explanation."#;

/// Tone of voice. Unknown values fall back to professional.
pub fn personality_instruction(personality: &str) -> &'static str {
    match personality {
        "friendly" => "Write in a warm, friendly, approachable tone while staying professional.",
        "enthusiastic" => {
            "Write with genuine enthusiasm and energy about the role and the company."
        }
        "formal" => "Write in a formal, traditional business tone.",
        "conversational" => "Write in a natural, conversational tone, as if speaking directly to the hiring manager.",
        _ => "Write in a polished, professional tone.",
    }
}

/// Target length. Unknown values fall back to medium.
pub fn length_instruction(length: &str) -> &'static str {
    match length {
        "short" => "Keep it concise: 2 short paragraphs, under 200 words.",
        "long" => "Write a detailed letter: 4-5 paragraphs, around 450 words.",
        _ => "Aim for 3 paragraphs, around 300 words.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tone_and_length_fall_back_to_defaults() {
        assert_eq!(personality_instruction("pirate"), personality_instruction("professional"));
        assert_eq!(length_instruction("epic"), length_instruction("medium"));
    }
}

// Shared prompt fragments. Each feature that calls the LLM defines its own
// prompts alongside it; this file holds the cross-cutting pieces.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// The hard non-fabrication rule shared by every generation feature.
/// Factual records come from the stored profile; the model only writes prose.
pub const NON_FABRICATION_RULE: &str = "\
    CRITICAL RULE: You must preserve ALL factual information EXACTLY as provided - \
    company names (including LLC, Inc., Corp., etc.), job titles/positions, \
    personal information, dates, institution names, degree names. \
    NEVER change, shorten, remove suffixes, or 'improve' factual data. \
    Only enhance descriptions and summaries - factual data must remain \
    identical to the source.";

/// Bullet formatting rule for multi-line description fields.
pub const BULLET_FORMAT_RULE: &str = "\
    FORMATTING RULE: All work experience descriptions MUST be formatted as \
    bullet points, with each bullet on a new line starting with \"\u{2022} \" \
    (bullet character followed by space).";

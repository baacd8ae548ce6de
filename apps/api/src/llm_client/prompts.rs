// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Output rules appended to every prompt that expects a JSON object back.
pub const JSON_ONLY_RULES: &str = "\
Rules:
- Return ONLY valid JSON matching the schema.
- Do NOT include markdown, code fences, or explanations.
- If unsure, leave fields empty or set to 0.";

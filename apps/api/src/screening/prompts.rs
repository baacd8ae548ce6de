// Screening LLM prompt templates.

use crate::llm_client::prompts::JSON_ONLY_RULES;

pub const ATTRIBUTE_SCHEMA: &str = r#"{
  "skills": [],
  "experience_years": 0,
  "education": ""
}"#;

/// Builds the attribute extraction prompt for one resume.
pub fn extraction_prompt(resume_text: &str) -> String {
    format!(
        "Extract structured JSON from the following resume text.\n\n\
         Resume:\n{resume_text}\n\n\
         Schema:\n{ATTRIBUTE_SCHEMA}\n\n\
         {JSON_ONLY_RULES}\n"
    )
}

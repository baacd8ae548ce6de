//! Attribute extraction: turns raw resume text into an `AttributeRecord`.
//!
//! `AppState` carries an `Arc<dyn AttributeExtractor>` so handlers never talk
//! to the model directly and tests can substitute a fixed record.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::screening::attributes::AttributeRecord;
use crate::screening::prompts::extraction_prompt;

#[async_trait]
pub trait AttributeExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> Result<AttributeRecord, AppError>;
}

/// Extractor backed by a single chat completion call.
pub struct LlmAttributeExtractor(pub LlmClient);

#[async_trait]
impl AttributeExtractor for LlmAttributeExtractor {
    async fn extract(&self, resume_text: &str) -> Result<AttributeRecord, AppError> {
        let reply = self
            .0
            .call_text(&extraction_prompt(resume_text))
            .await
            .map_err(|e| AppError::Llm(format!("Attribute extraction call failed: {e}")))?;
        parse_reply(&reply)
    }
}

/// Interprets an already sanitized model reply.
///
/// Non-JSON replies degrade to the fallback record; JSON that is not an
/// object is an extraction failure.
pub fn parse_reply(reply: &str) -> Result<AttributeRecord, AppError> {
    match serde_json::from_str::<Value>(reply) {
        Ok(Value::Object(object)) => Ok(AttributeRecord::from_object(&object)),
        Ok(other) => Err(AppError::Extraction(format!(
            "model returned JSON {} instead of an object",
            json_kind(&other)
        ))),
        Err(e) => {
            warn!("Model returned non-JSON ({e}); using fallback record");
            Ok(AttributeRecord::fallback(reply))
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_reply() {
        let record =
            parse_reply(r#"{"skills": ["Rust", "SQL"], "experience_years": "3", "education": "MCA"}"#)
                .unwrap();
        assert_eq!(record.skill_count(), 2);
        assert_eq!(record.experience_years(), 3);
        assert_eq!(record.education(), "MCA");
        assert_eq!(record.raw_output(), None);
    }

    #[test]
    fn test_parse_non_json_falls_back() {
        let record = parse_reply("I could not find any skills.").unwrap();
        assert_eq!(record.skill_count(), 0);
        assert_eq!(record.raw_output(), Some("I could not find any skills."));
    }

    #[test]
    fn test_parse_empty_reply_falls_back() {
        let record = parse_reply("").unwrap();
        assert_eq!(record.raw_output(), Some(""));
    }

    #[test]
    fn test_parse_array_reply_is_error() {
        let err = parse_reply(r#"["python"]"#).unwrap_err();
        assert!(matches!(err, AppError::Extraction(msg) if msg.contains("array")));
    }
}

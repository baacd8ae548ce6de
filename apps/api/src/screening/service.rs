//! The screening pipeline shared by every entry point:
//! extract attributes → score → persist.

use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::attributes::NormalizedAttributes;
use crate::screening::scorer::Decision;
use crate::state::AppState;
use crate::store::ScreeningDocument;

/// Outcome of one screening. `id` is absent when persisting failed.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub data: NormalizedAttributes,
    pub score: u32,
    pub decision: Decision,
    /// The unparseable model reply, when extraction fell back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
}

/// Screens one resume's text. A store failure is logged, not returned:
/// the caller still gets the score.
pub async fn screen_text(state: &AppState, resume_text: &str) -> Result<ScreeningOutcome, AppError> {
    let resume_text = resume_text.trim();
    if resume_text.is_empty() {
        return Err(AppError::Validation(
            "Please paste resume text before submitting.".to_string(),
        ));
    }

    let record = state.extractor.extract(resume_text).await?;
    let result = state.scorer.score(&record);
    info!(
        "Scored resume with {} policy: score={} decision={}",
        state.scorer.name(),
        result.score,
        result.decision
    );

    let document = ScreeningDocument::new(record.normalized(), result);
    let id = match state.store.insert(&document).await {
        Ok(stored) => Some(stored.id),
        Err(e) => {
            error!("Failed to store screening result in {}: {e}", state.store.backend());
            None
        }
    };

    Ok(ScreeningOutcome {
        id,
        data: document.data,
        score: document.score,
        decision: document.decision,
        raw_output: record.raw_output().map(String::from),
    })
}

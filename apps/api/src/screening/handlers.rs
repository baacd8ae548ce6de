//! Axum route handlers for screening and the results dashboard.

use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::render::{pages, HtmlError};
use crate::screening::documents::DocumentKind;
use crate::screening::service::{screen_text, ScreeningOutcome};
use crate::screening::summary::DashboardSummary;
use crate::state::AppState;
use crate::store::StoredScreening;

const UPLOAD_FIELD: &str = "resume_file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScreenTextRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScreeningListResponse {
    pub summary: DashboardSummary,
    pub screenings: Vec<StoredScreening>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_home() -> Html<String> {
    pages::home_page()
}

/// GET /screen-resume
pub async fn handle_screen_form() -> Html<String> {
    pages::screen_form_page()
}

/// POST /screen-resume
///
/// JSON bodies get a JSON outcome; form posts get the HTML result page.
pub async fn handle_screen_text(State(state): State<AppState>, request: Request) -> Response {
    if is_json(&request) {
        screen_json(&state, request).await.into_response()
    } else {
        screen_form(&state, request)
            .await
            .map_err(|e| HtmlError::new(e, "/screen-resume"))
            .into_response()
    }
}

async fn screen_json(
    state: &AppState,
    request: Request,
) -> Result<Json<ScreeningOutcome>, AppError> {
    let Json(body) = Json::<ScreenTextRequest>::from_request(request, state)
        .await
        .map_err(|e| AppError::from_rejection(e.status(), e.body_text()))?;
    let outcome = screen_text(state, body.resume_text.as_deref().unwrap_or_default()).await?;
    Ok(Json(outcome))
}

async fn screen_form(state: &AppState, request: Request) -> Result<Html<String>, AppError> {
    let Form(body) = Form::<ScreenTextRequest>::from_request(request, state)
        .await
        .map_err(|e| AppError::from_rejection(e.status(), e.body_text()))?;
    let outcome = screen_text(state, body.resume_text.as_deref().unwrap_or_default()).await?;
    Ok(pages::result_page(&outcome))
}

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
}

/// POST /upload-resume
///
/// Multipart upload of a PDF or image in the `resume_file` field.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, HtmlError> {
    upload(&state, multipart)
        .await
        .map_err(|e| HtmlError::new(e, "/"))
}

async fn upload(state: &AppState, mut multipart: Multipart) -> Result<Html<String>, AppError> {
    let bad_upload = |e: MultipartError| {
        let message = format!("Could not read the upload: {}", e.body_text());
        AppError::from_rejection(e.status(), message)
    };

    while let Some(field) = multipart.next_field().await.map_err(bad_upload)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let kind = DocumentKind::from_filename(field.file_name().unwrap_or_default())?;
        let bytes = field.bytes().await.map_err(bad_upload)?;
        let text = state.documents.read_text(kind, bytes).await?;
        let outcome = screen_text(state, &text).await?;
        return Ok(pages::result_page(&outcome));
    }

    Err(AppError::Validation(
        "No file uploaded. Please select a PDF or image.".to_string(),
    ))
}

/// GET /results
pub async fn handle_dashboard(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let screenings = state
        .store
        .list_recent()
        .await
        .map_err(|e| HtmlError::new(e, "/"))?;
    let summary = DashboardSummary::from_screenings(&screenings);
    Ok(pages::dashboard_page(&summary, &screenings))
}

/// GET /api/v1/screenings
pub async fn handle_list_screenings(
    State(state): State<AppState>,
) -> Result<Json<ScreeningListResponse>, AppError> {
    let screenings = state.store.list_recent().await?;
    Ok(Json(ScreeningListResponse {
        summary: DashboardSummary::from_screenings(&screenings),
        screenings,
    }))
}

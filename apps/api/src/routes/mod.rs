pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Browser pages
        .route("/", get(handlers::handle_home))
        .route(
            "/screen-resume",
            get(handlers::handle_screen_form).post(handlers::handle_screen_text),
        )
        .route("/upload-resume", post(handlers::handle_upload))
        .route("/results", get(handlers::handle_dashboard))
        // JSON API
        .route("/api/v1/screenings", get(handlers::handle_list_screenings))
        .layer(body_limit)
        .with_state(state)
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/resumes/score", post(handlers::handle_score))
        .route("/api/v1/resumes/check", post(handlers::handle_check))
        // Server-side PDF/DOCX extraction lives with the upload collaborator
        .route("/api/v1/resumes/parse", post(not_implemented))
        .with_state(state)
}

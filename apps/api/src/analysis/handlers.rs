//! Axum route handlers for the Analysis API.

use std::time::Duration;

use axum::{extract::State, Json};

use crate::analysis::report::{check_resume, CheckReport};
use crate::analysis::rubric::{score_resume, ScoreResult};
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

/// POST /api/v1/resumes/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(document): Json<ResumeDocument>,
) -> Json<ScoreResult> {
    pace(&state).await;
    let result = score_resume(&document);
    tracing::debug!(overall = result.overall, "scored resume document");
    Json(result)
}

/// POST /api/v1/resumes/check
pub async fn handle_check(
    State(state): State<AppState>,
    Json(document): Json<ResumeDocument>,
) -> Json<CheckReport> {
    pace(&state).await;
    let report = check_resume(&document);
    tracing::debug!(
        readiness = report.readiness_score,
        issues = report.issues.len(),
        "checked resume document"
    );
    Json(report)
}

/// Optional response pacing for clients that animate their analysis step.
/// A no-op unless ANALYSIS_DELAY_MS is set.
async fn pace(state: &AppState) {
    let delay = state.config.analysis_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
}

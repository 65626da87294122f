//! Axum route handlers for the Interview Analysis API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::engine::analyze_interview;
use crate::analysis::models::{InterviewResult, InterviewSubmission};
use crate::errors::AppError;
use crate::questions::DEFAULT_QUESTION_COUNT;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Correlates the analysis with the platform's interview record. Minted
    /// here when absent; never persisted by this service.
    pub interview_id: Option<Uuid>,
    #[serde(flatten)]
    pub submission: InterviewSubmission,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub interview_id: Uuid,
    pub analysis: InterviewResult,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub domain: String,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub domain: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews/analyze
///
/// Scores every question on the three axes and returns the full analysis.
/// An unknown domain is not an error — it scores with an empty keyword set.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.submission.domain.trim().is_empty() {
        return Err(AppError::Validation("domain cannot be empty".to_string()));
    }

    let interview_id = request.interview_id.unwrap_or_else(Uuid::new_v4);
    let analysis = analyze_interview(
        &request.submission,
        &state.lexicon,
        state.transcriber.as_ref(),
    )
    .await;

    Ok(Json(AnalyzeResponse {
        interview_id,
        analysis,
    }))
}

/// GET /api/v1/interviews/questions?domain=...&count=N
///
/// Samples questions for an interview draft. Unknown domains fall back to the
/// default bank rather than failing.
pub async fn handle_get_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionsQuery>,
) -> Result<Json<QuestionsResponse>, AppError> {
    if params.domain.trim().is_empty() {
        return Err(AppError::Validation("domain cannot be empty".to_string()));
    }

    let count = params.count.unwrap_or(DEFAULT_QUESTION_COUNT);
    let questions = state.questions.sample(&params.domain, count);

    Ok(Json(QuestionsResponse {
        domain: params.domain,
        questions,
    }))
}

/// GET /api/v1/domains
///
/// Lists the domains configured in the lexicon.
pub async fn handle_list_domains(State(state): State<AppState>) -> Json<DomainsResponse> {
    Json(DomainsResponse {
        domains: state.lexicon.domains(),
    })
}

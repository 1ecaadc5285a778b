use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::ingest::store;
use crate::matching::demand::{compute_skill_demand, rank_demand};
use crate::models::posting::{JobPosting, JobPostingRow};
use crate::state::AppState;

/// Keyword used when an ingest request does not name one.
const DEFAULT_KEYWORD: &str = "software developer";

#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub fetched: usize,
    pub stored: u64,
}

/// POST /api/v1/ingest
/// Fetches a fresh batch from the listings source and replaces the store.
/// An empty fetch leaves the store untouched.
pub async fn handle_ingest(
    State(state): State<AppState>,
    body: Option<Json<IngestRequest>>,
) -> Result<Json<IngestResponse>, AppError> {
    let keyword = body
        .and_then(|Json(req)| req.keyword)
        .unwrap_or_else(|| DEFAULT_KEYWORD.to_string());

    let postings = state.listings.fetch_postings(&keyword).await?;

    if postings.is_empty() {
        info!("No postings fetched; store left unchanged");
        return Ok(Json(IngestResponse {
            fetched: 0,
            stored: 0,
        }));
    }

    let stored = store::replace_all(&state.db, &postings).await?;
    Ok(Json(IngestResponse {
        fetched: postings.len(),
        stored,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PostingFilter {
    pub location: Option<String>,
    pub source: Option<String>,
    pub search: Option<String>,
}

/// GET /api/v1/postings?location=&source=&search=
pub async fn handle_list_postings(
    State(state): State<AppState>,
    Query(filter): Query<PostingFilter>,
) -> Result<Json<Vec<JobPostingRow>>, AppError> {
    let rows = store::fetch_filtered(
        &state.db,
        filter.location.as_deref(),
        filter.source.as_deref(),
        filter.search.as_deref(),
    )
    .await?;
    Ok(Json(rows))
}

#[derive(Debug, Serialize)]
pub struct SkillDemand {
    pub skill: String,
    pub count: u32,
}

/// GET /api/v1/skills/demand
/// Counts vocabulary-term demand across all stored postings and returns the
/// ranked list (descending count, vocabulary order on ties).
pub async fn handle_skill_demand(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillDemand>>, AppError> {
    let postings: Vec<JobPosting> = store::fetch_all(&state.db)
        .await?
        .into_iter()
        .map(JobPosting::from)
        .collect();

    let counts = compute_skill_demand(&state.vocabulary, &postings);
    let ranked = rank_demand(&state.vocabulary, &counts);

    Ok(Json(
        ranked
            .into_iter()
            .map(|(skill, count)| SkillDemand { skill, count })
            .collect(),
    ))
}

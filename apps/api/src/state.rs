use std::sync::Arc;

use sqlx::PgPool;

use crate::ingest::listings::PostingSource;
use crate::matching::vocabulary::{RoleCatalog, SkillVocabulary};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Loaded once at startup; read-only for the life of the process.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Per-role skill checklists, also load-once and read-only.
    pub roles: Arc<RoleCatalog>,
    /// Pluggable posting source. Default: RemoteListingsClient.
    pub listings: Arc<dyn PostingSource>,
}

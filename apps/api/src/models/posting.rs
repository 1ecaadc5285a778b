use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One job listing as fetched from a posting source. Immutable once fetched;
/// the same structure is handed to the store and to the demand counter, so
/// there is no per-row ad-hoc record building anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
    pub source: Option<String>,
    pub apply_link: Option<String>,
}

/// A stored posting row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPostingRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
    pub source: Option<String>,
    pub apply_link: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl From<JobPostingRow> for JobPosting {
    fn from(row: JobPostingRow) -> Self {
        JobPosting {
            title: row.title,
            company: row.company,
            location: row.location,
            description: row.description,
            salary: row.salary,
            source: row.source,
            apply_link: row.apply_link,
        }
    }
}

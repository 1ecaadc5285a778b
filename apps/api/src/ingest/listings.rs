//! Remote listings client — paginated fetch from the job listings API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::posting::JobPosting;

const RESULTS_PER_PAGE: u32 = 50;
/// Pagination safety cap (~250 postings per ingest).
const MAX_PAGES: u32 = 5;
/// Source label stamped on every posting from this client.
const SOURCE: &str = "listings-api";

/// A source of job postings. Implemented by the remote listings client;
/// tests and future sources plug in without touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn PostingSource>`.
#[async_trait]
pub trait PostingSource: Send + Sync {
    async fn fetch_postings(&self, keyword: &str) -> Result<Vec<JobPosting>, AppError>;
}

/// Client for a paginated listings API of the
/// `{base}/{page}?app_id=..&app_key=..&what=..` shape.
pub struct RemoteListingsClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
    default_location: String,
}

impl RemoteListingsClient {
    pub fn new(
        base_url: String,
        app_id: String,
        app_key: String,
        default_location: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            app_id,
            app_key,
            default_location,
        }
    }

    fn to_posting(&self, result: ListingResult) -> JobPosting {
        JobPosting {
            title: result.title,
            company: result.company.display_name,
            location: result
                .location
                .display_name
                .unwrap_or_else(|| self.default_location.clone()),
            description: result.description,
            salary: None,
            source: Some(SOURCE.to_string()),
            apply_link: result.redirect_url,
        }
    }
}

#[async_trait]
impl PostingSource for RemoteListingsClient {
    /// Walks result pages until the API errors, a page comes back empty, or
    /// the safety cap is hit. A non-success status mid-walk keeps whatever
    /// was fetched so far; only a transport failure is an error.
    async fn fetch_postings(&self, keyword: &str) -> Result<Vec<JobPosting>, AppError> {
        info!("Fetching postings for keyword: {keyword}");

        let mut postings = Vec::new();

        for page in 1..=MAX_PAGES {
            let url = format!("{}/{page}", self.base_url);
            let response = self
                .http
                .get(&url)
                .query(&[
                    ("app_id", self.app_id.as_str()),
                    ("app_key", self.app_key.as_str()),
                    ("results_per_page", &RESULTS_PER_PAGE.to_string()),
                    ("what", keyword),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                warn!("Listings API returned {} on page {page}", response.status());
                break;
            }

            let body: ListingsPage = response.json().await?;
            if body.results.is_empty() {
                break;
            }

            postings.extend(body.results.into_iter().map(|r| self.to_posting(r)));
        }

        info!("Total postings fetched: {}", postings.len());
        Ok(postings)
    }
}

#[derive(Debug, Deserialize)]
struct ListingsPage {
    #[serde(default)]
    results: Vec<ListingResult>,
}

#[derive(Debug, Deserialize)]
struct ListingResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company: CompanyField,
    #[serde(default)]
    location: LocationField,
    #[serde(default)]
    description: String,
    #[serde(default)]
    redirect_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CompanyField {
    #[serde(default)]
    display_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct LocationField {
    #[serde(default)]
    display_name: Option<String>,
}

//! Job Board Client — fetches posting snippets for a job title from a
//! Remotive-style search API.
//!
//! Best-effort by contract: any network error, non-2xx status, or parse
//! failure degrades to an empty snippet list. The matcher treats that
//! as "no data" and scores 0%, mirroring how fetch failures have always
//! behaved for this assessment. Known weak point: there is no retry, no
//! backoff, and no pagination — a flaky fetch silently produces an
//! empty group.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::extract::strip_markup;

/// How many postings to keep per title. The overlap score stabilizes
/// quickly, so a handful is enough.
const POSTINGS_PER_TITLE: usize = 5;

/// Fetches posting text for one job title.
///
/// Carried in `AppState` as `Arc<dyn JobBoardClient>` so tests can swap
/// in a canned implementation.
#[async_trait]
pub trait JobBoardClient: Send + Sync {
    async fn fetch(&self, job_title: &str) -> Vec<String>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    jobs: Vec<Posting>,
}

#[derive(Debug, Deserialize)]
struct Posting {
    title: String,
    #[serde(default)]
    description: String,
}

/// Production client against the configured job-search API.
pub struct HttpJobBoardClient {
    client: Client,
    base_url: String,
}

impl HttpJobBoardClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl JobBoardClient for HttpJobBoardClient {
    async fn fetch(&self, job_title: &str) -> Vec<String> {
        let limit = POSTINGS_PER_TITLE.to_string();
        let request = self
            .client
            .get(&self.base_url)
            .query(&[("search", job_title), ("limit", limit.as_str())]);

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("job search request for '{job_title}' failed: {e}");
                return Vec::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("job search for '{job_title}' returned {status}");
            return Vec::new();
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                warn!("job search body for '{job_title}' unreadable: {e}");
                return Vec::new();
            }
        };

        let snippets = parse_postings(&body);
        debug!("job search for '{job_title}' yielded {} postings", snippets.len());
        snippets
    }
}

/// Parses a search response into plain-text snippets, one per posting.
/// Descriptions arrive as HTML; tags are stripped so the matcher sees
/// only words.
fn parse_postings(body: &str) -> Vec<String> {
    let response: SearchResponse = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            warn!("job search response did not parse: {e}");
            return Vec::new();
        }
    };

    response
        .jobs
        .into_iter()
        .take(POSTINGS_PER_TITLE)
        .map(|posting| format!("{} {}", posting.title, strip_markup(&posting.description)))
        .collect()
}

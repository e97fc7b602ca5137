use crate::error::{ContribError, Result};
use chrono::{DateTime, Utc};
use log::debug;
use octocrab::{Octocrab, Page};
use serde::Deserialize;
use std::time::Duration;

pub const PER_PAGE: u8 = 100;

/// Pause between consecutive page requests.
const PAGE_DELAY: Duration = Duration::from_millis(100);

pub struct GithubClient {
    octocrab: Octocrab,
}

/// One entry of the issue search endpoint. Pull requests come back as issues
/// carrying a `pull_request` object.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub title: String,
    pub repository_url: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub state: Option<String>,
    pub pull_request: Option<serde_json::Value>,
}

impl SearchItem {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some() || self.state.as_deref() == Some("closed")
    }
}

fn invalid_api_url(url: &str, err: octocrab::Error) -> ContribError {
    ContribError::Config(format!("Invalid API URL {url}: {err}"))
}

/// Checks that `url` is usable as an API base without building a client.
pub fn check_api_url(url: &str) -> Result<()> {
    Octocrab::builder()
        .base_uri(url)
        .map(|_| ())
        .map_err(|e| invalid_api_url(url, e))
}

impl GithubClient {
    pub fn new(token: &str, api_url: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(url) = api_url {
            builder = builder.base_uri(url).map_err(|e| invalid_api_url(url, e))?;
        }
        let octocrab = builder
            .build()
            .map_err(|e| ContribError::GitHub(e.to_string()))?;
        Ok(Self { octocrab })
    }

    /// Collects every issue and pull request created by `account`, following
    /// the `next` link until the result set is exhausted.
    pub async fn search_issues_by_author(&self, account: &str) -> Result<Vec<SearchItem>> {
        let query = format!("author:{account}");
        let per_page = PER_PAGE.to_string();

        let mut page: Page<SearchItem> = self
            .octocrab
            .get(
                "/search/issues",
                Some(&[
                    ("q", query.as_str()),
                    ("per_page", per_page.as_str()),
                    ("page", "1"),
                ]),
            )
            .await?;

        let mut all_items = Vec::new();
        let mut page_number = 1u32;
        loop {
            debug!(
                "Search page {page_number}: {} item(s) (total {:?})",
                page.items.len(),
                page.total_count
            );
            all_items.append(&mut page.items);
            if page.next.is_none() {
                break;
            }

            tokio::time::sleep(PAGE_DELAY).await;
            page = match self.octocrab.get_page::<SearchItem>(&page.next).await? {
                Some(next) => next,
                None => break,
            };
            page_number += 1;
        }

        Ok(all_items)
    }
}

use crate::error::Result;
use crate::github::{GithubClient, SearchItem};
use crate::report::record::{repository_from_url, Exclusions, IssueRecord};
use chrono::Datelike;
use log::info;

#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub records: Vec<IssueRecord>,
    /// One line per search result that was dropped.
    pub warnings: Vec<String>,
}

/// Fetches everything `account` has authored and keeps the records that pass
/// the exclusion list. Excluded records never reach any report.
pub async fn fetch_records(
    client: &GithubClient,
    account: &str,
    exclusions: &Exclusions,
) -> Result<FetchOutcome> {
    let items = client.search_issues_by_author(account).await?;
    let total = items.len();
    let outcome = collect_records(items, exclusions);
    info!(
        "Fetched {total} item(s) for {account}, kept {}",
        outcome.records.len()
    );
    Ok(outcome)
}

pub fn collect_records(items: Vec<SearchItem>, exclusions: &Exclusions) -> FetchOutcome {
    let mut outcome = FetchOutcome::default();

    for item in items {
        let Some(repository) = repository_from_url(&item.repository_url) else {
            outcome.warnings.push(format!(
                "Skipping \"{}\": unrecognized repository URL {}",
                item.title, item.repository_url
            ));
            continue;
        };

        if let Some(pattern) = exclusions.matching(&repository) {
            outcome.warnings.push(format!(
                "Excluding \"{}\" in {repository} (matches \"{pattern}\")",
                item.title
            ));
            continue;
        }

        let is_pull_request = item.is_pull_request();
        let is_closed = item.is_closed();
        outcome.records.push(IssueRecord {
            year: item.created_at.year(),
            title: item.title,
            repository,
            is_pull_request,
            is_closed,
        });
    }

    outcome
}

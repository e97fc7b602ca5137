use crate::report::record::IssueRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    issues: u64,
    prs: u64,
}

impl Tally {
    fn count(&mut self, record: &IssueRecord) {
        if record.is_pull_request {
            self.prs += 1;
        } else {
            self.issues += 1;
        }
    }
}

/// Counts of one group and their share of the overall totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shares {
    pub issue_num: u64,
    pub pr_num: u64,
    pub issue_percent: f64,
    pub pr_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepoSummary {
    pub repo: String,
    #[serde(flatten)]
    pub shares: Shares,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    #[serde(flatten)]
    pub shares: Shares,
}

fn ratio(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

fn tally_by<K, F>(records: &[IssueRecord], key: F) -> BTreeMap<K, Tally>
where
    K: Ord,
    F: Fn(&IssueRecord) -> K,
{
    let mut tallies: BTreeMap<K, Tally> = BTreeMap::new();
    for record in records {
        tallies.entry(key(record)).or_default().count(record);
    }
    tallies
}

fn into_shares<K>(tallies: BTreeMap<K, Tally>) -> Vec<(K, Shares)> {
    let (total_issues, total_prs) = tallies
        .values()
        .fold((0, 0), |(i, p), t| (i + t.issues, p + t.prs));

    tallies
        .into_iter()
        .map(|(key, t)| {
            let shares = Shares {
                issue_num: t.issues,
                pr_num: t.prs,
                issue_percent: ratio(t.issues, total_issues),
                pr_percent: ratio(t.prs, total_prs),
            };
            (key, shares)
        })
        .collect()
}

/// Issue and PR counts per `owner/repo`, ordered by repository name.
pub fn by_repository(records: &[IssueRecord]) -> Vec<RepoSummary> {
    into_shares(tally_by(records, |r| r.repository.clone()))
        .into_iter()
        .map(|(repo, shares)| RepoSummary { repo, shares })
        .collect()
}

/// Issue and PR counts per creation year. Every year between the first and
/// last one seen is present, with zero counts where nothing was authored.
pub fn by_year(records: &[IssueRecord]) -> Vec<YearSummary> {
    let mut tallies = tally_by(records, |r| r.year);

    let bounds = tallies
        .keys()
        .next()
        .copied()
        .zip(tallies.keys().next_back().copied());
    if let Some((min, max)) = bounds {
        for year in min..=max {
            tallies.entry(year).or_default();
        }
    }

    into_shares(tallies)
        .into_iter()
        .map(|(year, shares)| YearSummary { year, shares })
        .collect()
}

pub mod aggregate;
pub mod columns;
pub mod record;
pub mod render;
pub mod theme;

use aggregate::{RepoSummary, Shares, YearSummary};
use columns::Field;
use record::IssueRecord;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// One row per issue or pull request.
    Issues,
    ByYear,
    ByRepository,
}

impl ReportMode {
    pub fn from_flags(summary: bool, by_repo: bool) -> Self {
        match (summary, by_repo) {
            (false, _) => ReportMode::Issues,
            (true, false) => ReportMode::ByYear,
            (true, true) => ReportMode::ByRepository,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Row {
    Issue(IssueRecord),
    Repository(RepoSummary),
    Year(YearSummary),
}

/// A single cell value, borrowed from its row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Year(i32),
    Count(u64),
    Ratio(f64),
    Flag(bool),
    Empty,
}

impl Value<'_> {
    fn as_number(&self) -> f64 {
        match *self {
            Value::Year(y) => f64::from(y),
            Value::Count(n) => n as f64,
            Value::Ratio(r) => r,
            Value::Flag(b) => f64::from(u8::from(b)),
            Value::Text(_) | Value::Empty => 0.0,
        }
    }

    /// Text compares lexicographically, everything else numerically.
    pub fn compare(&self, other: &Value<'_>) -> Ordering {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (a, b) => a.as_number().total_cmp(&b.as_number()),
        }
    }
}

impl Shares {
    fn value(&self, field: Field) -> Value<'_> {
        match field {
            Field::IssueCount => Value::Count(self.issue_num),
            Field::PrCount => Value::Count(self.pr_num),
            Field::IssuePercent => Value::Ratio(self.issue_percent),
            Field::PrPercent => Value::Ratio(self.pr_percent),
            _ => Value::Empty,
        }
    }
}

impl Row {
    pub fn value(&self, field: Field) -> Value<'_> {
        match self {
            Row::Issue(r) => match field {
                Field::Year => Value::Year(r.year),
                Field::Title => Value::Text(&r.title),
                Field::Repo => Value::Text(&r.repository),
                Field::PullRequest => Value::Flag(r.is_pull_request),
                Field::Closed => Value::Flag(r.is_closed),
                _ => Value::Empty,
            },
            Row::Repository(s) => match field {
                Field::Repo => Value::Text(&s.repo),
                other => s.shares.value(other),
            },
            Row::Year(s) => match field {
                Field::Year => Value::Year(s.year),
                other => s.shares.value(other),
            },
        }
    }
}

/// Shapes fetched records into the rows of the requested report. The raw
/// listing passes records through untouched.
pub fn build_rows(mode: ReportMode, records: Vec<IssueRecord>) -> Vec<Row> {
    match mode {
        ReportMode::Issues => records.into_iter().map(Row::Issue).collect(),
        ReportMode::ByYear => aggregate::by_year(&records)
            .into_iter()
            .map(Row::Year)
            .collect(),
        ReportMode::ByRepository => aggregate::by_repository(&records)
            .into_iter()
            .map(Row::Repository)
            .collect(),
    }
}

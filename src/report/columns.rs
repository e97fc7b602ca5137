use crate::error::{ContribError, Result};
use crate::report::ReportMode;

/// Row attributes a column can show and rows can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Title,
    Repo,
    PullRequest,
    Closed,
    IssueCount,
    PrCount,
    IssuePercent,
    PrPercent,
}

impl Field {
    pub fn is_numeric(self) -> bool {
        !matches!(self, Field::Title | Field::Repo)
    }

    pub fn is_percentage(self) -> bool {
        matches!(self, Field::IssuePercent | Field::PrPercent)
    }

    /// Share of the leftover table width given to columns without a fixed width.
    pub fn elastic_share(self) -> Option<f64> {
        match self {
            Field::Title => Some(0.7),
            Field::Repo => Some(0.3),
            Field::IssuePercent | Field::PrPercent => Some(0.35),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub id: &'static str,
    pub name: &'static str,
    pub field: Field,
    /// Fixed content width; 0 for elastic columns.
    pub width: usize,
}

const fn column(id: &'static str, name: &'static str, field: Field, width: usize) -> Column {
    Column {
        id,
        name,
        field,
        width,
    }
}

const ISSUE_COLUMNS: &[Column] = &[
    column("year", "Year", Field::Year, 7),
    column("title", "Title", Field::Title, 0),
    column("repo", "Repo", Field::Repo, 0),
    column("pr", "PR", Field::PullRequest, 3),
    column("closed", "Closed", Field::Closed, 6),
];

const YEAR_COLUMNS: &[Column] = &[
    column("year", "Year", Field::Year, 7),
    column("issue_num", "Issues", Field::IssueCount, 6),
    column("pr_num", "PRs", Field::PrCount, 6),
    column("issue_percent", "Issue %", Field::IssuePercent, 0),
    column("pr_percent", "PR %", Field::PrPercent, 0),
];

const REPO_COLUMNS: &[Column] = &[
    column("repo", "Repo", Field::Repo, 0),
    column("issue_num", "Issues", Field::IssueCount, 6),
    column("pr_num", "PRs", Field::PrCount, 6),
    column("issue_percent", "Issue %", Field::IssuePercent, 0),
    column("pr_percent", "PR %", Field::PrPercent, 0),
];

impl ReportMode {
    pub fn columns(self) -> &'static [Column] {
        match self {
            ReportMode::Issues => ISSUE_COLUMNS,
            ReportMode::ByYear => YEAR_COLUMNS,
            ReportMode::ByRepository => REPO_COLUMNS,
        }
    }

    /// Positions shown when no `--output` selection is given.
    pub fn default_columns(self) -> &'static [usize] {
        match self {
            ReportMode::Issues => &[0, 1, 2, 3],
            ReportMode::ByYear | ReportMode::ByRepository => &[0, 1, 2, 3, 4],
        }
    }

    pub fn default_sort(self) -> Field {
        match self {
            ReportMode::Issues | ReportMode::ByYear => Field::Year,
            ReportMode::ByRepository => Field::Repo,
        }
    }
}

pub fn column_ids(mode: ReportMode) -> Vec<&'static str> {
    mode.columns().iter().map(|c| c.id).collect()
}

fn find_column(mode: ReportMode, id: &str) -> Result<(usize, &'static Column)> {
    let id = id.trim().to_lowercase();
    mode.columns()
        .iter()
        .enumerate()
        .find(|(_, c)| c.id == id)
        .ok_or_else(|| ContribError::InvalidColumn {
            id,
            valid: column_ids(mode).join(", "),
        })
}

/// Parses a comma-separated list of column ids into column positions, in the
/// order given.
pub fn parse_columns(mode: ReportMode, csv: &str) -> Result<Vec<usize>> {
    csv.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| find_column(mode, id).map(|(pos, _)| pos))
        .collect()
}

pub fn parse_sort(mode: ReportMode, id: &str) -> Result<Field> {
    find_column(mode, id).map(|(_, c)| c.field)
}

pub fn resolve_visible(mode: ReportMode, selection: Vec<usize>) -> Vec<usize> {
    if selection.is_empty() {
        mode.default_columns().to_vec()
    } else {
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [ReportMode; 3] = [
        ReportMode::Issues,
        ReportMode::ByYear,
        ReportMode::ByRepository,
    ];

    #[test]
    fn ids_are_unique_per_mode() {
        for mode in MODES {
            let mut ids = column_ids(mode);
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), total, "duplicate id in {mode:?}");
        }
    }

    #[test]
    fn parse_columns_keeps_given_order() {
        assert_eq!(
            parse_columns(ReportMode::Issues, "year,title").unwrap(),
            vec![0, 1]
        );
        assert_eq!(
            parse_columns(ReportMode::Issues, "repo, YEAR").unwrap(),
            vec![2, 0]
        );
    }

    #[test]
    fn parse_columns_skips_empty_tokens() {
        assert!(parse_columns(ReportMode::Issues, "").unwrap().is_empty());
        assert_eq!(
            parse_columns(ReportMode::ByYear, ",pr_num,,").unwrap(),
            vec![2]
        );
    }

    #[test]
    fn parse_columns_rejects_unknown_id() {
        let err = parse_columns(ReportMode::Issues, "bogus").unwrap_err();
        match err {
            ContribError::InvalidColumn { id, valid } => {
                assert_eq!(id, "bogus");
                assert_eq!(valid, "year, title, repo, pr, closed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn columns_are_mode_specific() {
        assert!(parse_columns(ReportMode::Issues, "issue_num").is_err());
        assert!(parse_columns(ReportMode::ByYear, "title").is_err());
        assert!(parse_columns(ReportMode::ByRepository, "year").is_err());
        assert!(parse_columns(ReportMode::ByRepository, "repo,pr_percent").is_ok());
    }

    #[test]
    fn parse_sort_resolves_fields() {
        assert_eq!(parse_sort(ReportMode::Issues, "Title").unwrap(), Field::Title);
        assert_eq!(
            parse_sort(ReportMode::ByRepository, "pr_percent").unwrap(),
            Field::PrPercent
        );
        assert!(matches!(
            parse_sort(ReportMode::ByYear, "mountpoint"),
            Err(ContribError::InvalidColumn { .. })
        ));
    }

    #[test]
    fn empty_selection_uses_defaults() {
        assert_eq!(
            resolve_visible(ReportMode::Issues, Vec::new()),
            vec![0, 1, 2, 3]
        );
        assert_eq!(
            resolve_visible(ReportMode::ByYear, Vec::new()),
            vec![0, 1, 2, 3, 4]
        );
        assert_eq!(resolve_visible(ReportMode::Issues, vec![4]), vec![4]);
    }

    #[test]
    fn default_sort_is_a_visible_column_of_its_mode() {
        for mode in MODES {
            let sort = mode.default_sort();
            assert!(mode.columns().iter().any(|c| c.field == sort));
        }
    }

    #[test]
    fn text_and_numeric_fields() {
        assert!(!Field::Title.is_numeric());
        assert!(!Field::Repo.is_numeric());
        assert!(Field::Year.is_numeric());
        assert!(Field::IssuePercent.is_numeric());
        assert!(Field::PrPercent.is_percentage());
        assert!(!Field::PrCount.is_percentage());
    }
}

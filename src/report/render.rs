use crate::display;
use crate::report::columns::{Column, Field};
use crate::report::theme::{TableStyle, Theme};
use crate::report::{ReportMode, Row, Value};
use comfy_table::{
    Cell, CellAlignment, ColumnConstraint, ContentArrangement, Table, TableComponent, Width,
};

pub const DEFAULT_WIDTH: usize = 80;

/// Padding comfy-table puts around every cell.
const COLUMN_PADDING: usize = 2;
const MIN_ELASTIC_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Maximum table width in terminal columns.
    pub width: usize,
    pub theme: Theme,
    pub style: TableStyle,
    pub color: bool,
}

pub struct TableReport {
    pub title: String,
    pub table: Table,
    pub footer: String,
    color: bool,
}

impl TableReport {
    pub fn print(&self) {
        display::section_header(&self.title, self.color);
        println!("{}", self.table);
        println!("\n{}", self.footer);
    }
}

/// Stable ascending sort on one field.
pub fn sort_rows(rows: &mut [Row], field: Field) {
    rows.sort_by(|a, b| a.value(field).compare(&b.value(field)));
}

/// Width of the percentage bar, brackets included. Narrow terminals get none.
pub fn bar_width(width: usize) -> usize {
    match width {
        w if w < 100 => 0,
        w if w < 120 => 12,
        _ => 22,
    }
}

pub fn percent_bar(ratio: f64, bar_width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    if bar_width < 3 {
        return format!("{:5.1}%", ratio * 100.0);
    }

    let inner = bar_width - 2;
    let filled = ((ratio * inner as f64) as usize).min(inner);
    format!(
        "[{}{}] {:5.1}%",
        "#".repeat(filled),
        ".".repeat(inner - filled),
        ratio * 100.0
    )
}

/// Width left for elastic columns once every visible column's fixed width,
/// padding and separator is taken off.
pub fn elastic_width(columns: &[Column], visible: &[usize], width: usize, separators: bool) -> usize {
    let separator = usize::from(separators);
    columns
        .iter()
        .enumerate()
        .filter(|(i, _)| visible.contains(i))
        .fold(width, |remaining, (_, c)| {
            remaining.saturating_sub(COLUMN_PADDING + separator + c.width)
        })
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn captions(mode: ReportMode, count: usize) -> (String, String) {
    match mode {
        ReportMode::Issues => (
            format!("Your {count} Issues/PRs"),
            format!("{count} issue(s)/PR(s) found."),
        ),
        ReportMode::ByYear => (
            "Contributions by Year".to_string(),
            format!("{count} year(s) summarized."),
        ),
        ReportMode::ByRepository => (
            "Contributions by Repository".to_string(),
            format!("{count} repository(ies) summarized."),
        ),
    }
}

fn cell(row: &Row, field: Field, bar: usize, theme: &Theme) -> Cell {
    match row.value(field) {
        Value::Text(text) => Cell::new(text),
        Value::Year(year) => Cell::new(year).fg(theme.accent),
        Value::Count(count) => Cell::new(count),
        Value::Ratio(ratio) => Cell::new(percent_bar(ratio, bar)).fg(theme.bar),
        Value::Flag(set) => match field {
            Field::PullRequest => Cell::new(if set { "○" } else { "-" }).fg(theme.marker),
            _ => Cell::new(if set { "closed" } else { "open" }),
        },
        Value::Empty => Cell::new(""),
    }
}

/// Lays out already sorted rows. Returns `None` when there is nothing to show.
pub fn build_table(
    rows: &[Row],
    mode: ReportMode,
    visible: &[usize],
    config: &RenderConfig,
) -> Option<TableReport> {
    if rows.is_empty() {
        return None;
    }

    let columns = mode.columns();
    let shown: Vec<&Column> = columns
        .iter()
        .enumerate()
        .filter(|(i, _)| visible.contains(i))
        .map(|(_, c)| c)
        .collect();

    let mut table = Table::new();
    config.style.apply(&mut table);
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(to_u16(config.width));
    if config.color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_header(shown.iter().map(|c| c.name).collect::<Vec<_>>());

    let separators = table.style(TableComponent::VerticalLines).is_some();
    let elastic = elastic_width(columns, visible, config.width, separators);
    for (index, column) in shown.iter().enumerate() {
        let Some(table_column) = table.column_mut(index) else {
            continue;
        };
        if let Some(share) = column.field.elastic_share() {
            let limit = ((elastic as f64 * share) as usize).max(MIN_ELASTIC_WIDTH);
            table_column.set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(to_u16(
                limit,
            ))));
        }
        if column.field.is_numeric() && !column.field.is_percentage() {
            table_column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let bar = bar_width(config.width);
    for row in rows {
        table.add_row(
            shown
                .iter()
                .map(|c| cell(row, c.field, bar, &config.theme))
                .collect::<Vec<_>>(),
        );
    }

    let (title, footer) = captions(mode, rows.len());
    Some(TableReport {
        title,
        table,
        footer,
        color: config.color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_rows;
    use crate::report::record::IssueRecord;

    fn record(year: i32, title: &str, repo: &str, is_pr: bool) -> IssueRecord {
        IssueRecord {
            year,
            title: title.to_string(),
            repository: repo.to_string(),
            is_pull_request: is_pr,
            is_closed: false,
        }
    }

    fn config(width: usize) -> RenderConfig {
        RenderConfig {
            width,
            theme: Theme::DARK,
            style: TableStyle::Unicode,
            color: false,
        }
    }

    fn two_records() -> Vec<IssueRecord> {
        vec![
            record(2020, "Fix issue #4", "a/b", true),
            record(2017, "add beginner yml", "oss-gate/workshop", false),
        ]
    }

    #[test]
    fn bar_width_thresholds() {
        assert_eq!(bar_width(80), 0);
        assert_eq!(bar_width(99), 0);
        assert_eq!(bar_width(100), 12);
        assert_eq!(bar_width(119), 12);
        assert_eq!(bar_width(120), 22);
        assert_eq!(bar_width(300), 22);
    }

    #[test]
    fn percent_bar_rendering() {
        assert_eq!(percent_bar(0.42, 12), "[####......]  42.0%");
        assert_eq!(percent_bar(1.0, 12), "[##########] 100.0%");
        assert_eq!(percent_bar(0.0, 12), "[..........]   0.0%");
        assert_eq!(percent_bar(0.42, 0), " 42.0%");
    }

    #[test]
    fn elastic_width_subtracts_fixed_columns() {
        let columns = ReportMode::Issues.columns();
        // year 7, title 0, repo 0, pr 3; each with 2 padding and 1 separator
        assert_eq!(elastic_width(columns, &[0, 1, 2, 3], 80, true), 58);
        assert_eq!(elastic_width(columns, &[0, 1, 2, 3], 80, false), 62);
        assert_eq!(elastic_width(columns, &[0, 1, 2, 3, 4], 10, true), 0);
    }

    #[test]
    fn sort_rows_by_year_then_text_and_flags() {
        let mut rows = build_rows(ReportMode::Issues, two_records());
        sort_rows(&mut rows, Field::Year);
        assert_eq!(rows[0].value(Field::Year), Value::Year(2017));

        sort_rows(&mut rows, Field::Title);
        assert_eq!(rows[0].value(Field::Title), Value::Text("Fix issue #4"));

        sort_rows(&mut rows, Field::PullRequest);
        assert_eq!(rows[0].value(Field::PullRequest), Value::Flag(false));
    }

    #[test]
    fn sort_counts_numerically() {
        let records: Vec<IssueRecord> = (0..10)
            .map(|i| record(2020, "t", "big/repo", i % 2 == 0))
            .chain(std::iter::once(record(2020, "t", "small/repo", false)))
            .collect();
        let mut rows = build_rows(ReportMode::ByRepository, records);
        sort_rows(&mut rows, Field::IssueCount);
        assert_eq!(rows[0].value(Field::Repo), Value::Text("small/repo"));
        assert_eq!(rows[1].value(Field::IssueCount), Value::Count(5));
    }

    #[test]
    fn empty_rows_render_nothing() {
        for mode in [ReportMode::Issues, ReportMode::ByYear, ReportMode::ByRepository] {
            assert!(build_table(&[], mode, mode.default_columns(), &config(120)).is_none());
        }
    }

    #[test]
    fn raw_table_shows_only_visible_columns() {
        let mut rows = build_rows(ReportMode::Issues, two_records());
        sort_rows(&mut rows, Field::Year);
        let report = build_table(&rows, ReportMode::Issues, &[0, 1, 2, 3], &config(100)).unwrap();
        let rendered = report.table.to_string();

        assert_eq!(report.title, "Your 2 Issues/PRs");
        assert_eq!(report.footer, "2 issue(s)/PR(s) found.");
        assert!(rendered.contains("Year"));
        assert!(rendered.contains("oss-gate/workshop"));
        assert!(rendered.contains('○'));
        assert!(!rendered.contains("Closed"));
        assert!(!rendered.contains('\u{1b}'));

        let first = rendered.find("2017").unwrap();
        let second = rendered.find("2020").unwrap();
        assert!(first < second);
    }

    #[test]
    fn year_table_has_bars_on_wide_terminals() {
        let rows = build_rows(ReportMode::ByYear, two_records());
        let report = build_table(
            &rows,
            ReportMode::ByYear,
            ReportMode::ByYear.default_columns(),
            &config(120),
        )
        .unwrap();
        let rendered = report.table.to_string();

        assert_eq!(report.title, "Contributions by Year");
        assert_eq!(report.footer, "4 year(s) summarized.");
        assert!(rendered.contains("[####################] 100.0%"));
        assert!(rendered.contains("2018"));
        assert!(rendered.contains("2019"));
    }

    #[test]
    fn narrow_terminals_get_plain_percentages() {
        let rows = build_rows(ReportMode::ByRepository, two_records());
        let report = build_table(
            &rows,
            ReportMode::ByRepository,
            ReportMode::ByRepository.default_columns(),
            &config(80),
        )
        .unwrap();
        let rendered = report.table.to_string();

        assert_eq!(report.footer, "2 repository(ies) summarized.");
        assert!(rendered.contains("100.0%"));
        assert!(!rendered.contains("[#"));
    }

    #[test]
    fn table_fits_the_configured_width() {
        let long_title = "word ".repeat(60);
        let rows = build_rows(
            ReportMode::Issues,
            vec![record(2021, &long_title, "some-organization/some-repository", false)],
        );
        let report = build_table(&rows, ReportMode::Issues, &[0, 1, 2, 3, 4], &config(80)).unwrap();
        for line in report.table.to_string().lines() {
            assert!(line.chars().count() <= 80, "line too wide: {line}");
        }
    }
}

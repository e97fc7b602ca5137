use crate::error::{ContribError, Result};
use owo_colors::OwoColorize;
use serde::ser::Serialize;
use serde_json::ser::PrettyFormatter;

pub fn output<T: Serialize + ?Sized>(
    json_mode: bool,
    data: &T,
    render_table: impl FnOnce(&T),
) -> Result<()> {
    if json_mode {
        println!("{}", to_json(data)?);
    } else {
        render_table(data);
    }
    Ok(())
}

/// Pretty JSON with one space of indentation per level.
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    data.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| ContribError::Render(e.to_string()))
}

pub fn section_header(title: &str, color: bool) {
    print!("{}", header_lines(title, color));
}

fn header_lines(title: &str, color: bool) -> String {
    let rule = "─".repeat(title.chars().count());
    if color {
        format!("\n{}\n{}\n", title.cyan().bold(), rule.cyan())
    } else {
        format!("\n{title}\n{rule}\n")
    }
}

pub fn warn(msg: &str) {
    eprintln!("{} {msg}", "warning:".yellow().bold());
}

pub fn error(msg: &str) {
    eprintln!("{} {msg}", "error:".red().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::record::IssueRecord;
    use crate::report::{build_rows, ReportMode, Row};

    #[test]
    fn plain_header_has_no_escape_codes() {
        let header = header_lines("Contributions by Year", false);
        assert_eq!(header, "\nContributions by Year\n─────────────────────\n");
        assert!(header_lines("Year", true).contains('\u{1b}'));
    }

    #[test]
    fn empty_rows_serialize_to_empty_array() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(to_json(rows.as_slice()).unwrap(), "[]");
    }

    #[test]
    fn json_uses_single_space_indent() {
        let rows = build_rows(
            ReportMode::Issues,
            vec![IssueRecord {
                year: 2017,
                title: "add beginner yml".into(),
                repository: "oss-gate/workshop".into(),
                is_pull_request: false,
                is_closed: true,
            }],
        );
        let expected = r#"[
 {
  "year": 2017,
  "title": "add beginner yml",
  "repo": "oss-gate/workshop",
  "pr": false,
  "closed": true
 }
]"#;
        assert_eq!(to_json(rows.as_slice()).unwrap(), expected);
    }

    #[test]
    fn summary_json_field_order_follows_columns() {
        let rows = build_rows(
            ReportMode::ByRepository,
            vec![IssueRecord {
                year: 2020,
                title: "t".into(),
                repository: "a/b".into(),
                is_pull_request: true,
                is_closed: false,
            }],
        );
        let json = to_json(rows.as_slice()).unwrap();
        let keys: Vec<usize> = ["\"repo\"", "\"issue_num\"", "\"pr_num\"", "\"issue_percent\"", "\"pr_percent\""]
            .iter()
            .map(|k| json.find(k).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}

use crate::commands::{color_enabled, resolve_width};
use crate::config::{load_config, resolve_token, TOKEN_FILE};
use crate::display;
use crate::error::Result;
use crate::fetch::fetch_records;
use crate::github::{check_api_url, GithubClient};
use crate::report::columns::{self, Field};
use crate::report::record::Exclusions;
use crate::report::render::{self, RenderConfig};
use crate::report::theme::{TableStyle, Theme};
use crate::report::{build_rows, ReportMode};
use clap::Args;
use log::debug;
use std::path::Path;

#[derive(Args, Debug)]
pub struct ContributionArgs {
    /// GitHub account whose issues and pull requests are listed
    #[arg(long, required = true)]
    pub account: String,

    /// GitHub token (falls back to ./token.txt, then github_token in ~/.oss-contrib.yml)
    #[arg(long)]
    pub token: Option<String>,

    /// Show counts per year instead of individual issues
    #[arg(long)]
    pub summary: bool,

    /// With --summary, group by repository instead of by year
    #[arg(long, requires = "summary")]
    pub repo: bool,

    /// Color theme: dark, light
    #[arg(long, default_value = "dark")]
    pub theme: String,

    /// Table style: unicode, ascii
    #[arg(long, default_value = "unicode")]
    pub style: String,

    /// Comma-separated columns to show (raw: year, title, repo, pr, closed;
    /// summary: year or repo, issue_num, pr_num, issue_percent, pr_percent)
    #[arg(long)]
    pub output: Option<String>,

    /// Column to sort by (defaults to year, or repo with --summary --repo)
    #[arg(long)]
    pub sort: Option<String>,

    /// Maximum output width (0 detects the terminal width)
    #[arg(long, default_value = "0")]
    pub width: usize,

    /// Output rows as JSON
    #[arg(long)]
    pub json: bool,

    /// Print skipped and excluded items to stderr
    #[arg(long)]
    pub warnings: bool,

    /// Additional organizations to exclude (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Base URL of the GitHub API, e.g. for GitHub Enterprise
    #[arg(long)]
    pub api_url: Option<String>,
}

struct View {
    columns: Vec<usize>,
    sort: Field,
    render: RenderConfig,
}

/// Validates every display option and the API URL up front so a bad flag
/// fails before any file or network access.
fn resolve_view(args: &ContributionArgs, mode: ReportMode) -> Result<View> {
    let theme: Theme = args.theme.parse()?;
    let style: TableStyle = args.style.parse()?;
    let selection = columns::parse_columns(mode, args.output.as_deref().unwrap_or(""))?;
    let sort = match args.sort.as_deref() {
        Some(id) => columns::parse_sort(mode, id)?,
        None => mode.default_sort(),
    };
    if let Some(url) = args.api_url.as_deref() {
        check_api_url(url)?;
    }

    Ok(View {
        columns: columns::resolve_visible(mode, selection),
        sort,
        render: RenderConfig {
            width: resolve_width(args.width),
            theme,
            style,
            color: color_enabled(),
        },
    })
}

pub async fn run(args: &ContributionArgs) -> Result<()> {
    let mode = ReportMode::from_flags(args.summary, args.repo);
    let view = resolve_view(args, mode)?;
    debug!(
        "Mode {mode:?}, columns {:?}, sort {:?}, width {}",
        view.columns, view.sort, view.render.width
    );

    let config = load_config()?;
    let token = resolve_token(args.token.as_deref(), Path::new(TOKEN_FILE), &config)?;
    let exclusions = Exclusions::new(
        config.exclude_orgs.iter().chain(args.exclude.iter()),
        &args.account,
    );

    let client = GithubClient::new(&token, args.api_url.as_deref())?;
    let outcome = fetch_records(&client, &args.account, &exclusions).await?;

    if args.warnings {
        for warning in &outcome.warnings {
            display::warn(warning);
        }
    }

    let mut rows = build_rows(mode, outcome.records);
    render::sort_rows(&mut rows, view.sort);

    display::output(args.json, rows.as_slice(), |rows| {
        if let Some(report) = render::build_table(rows, mode, &view.columns, &view.render) {
            report.print();
        }
    })
}

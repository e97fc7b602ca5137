mod commands;
mod config;
mod display;
mod error;
mod fetch;
mod github;
mod report;

use clap::Parser;
use commands::contributions::ContributionArgs;

#[derive(Parser)]
#[command(
    name = "oss-contrib",
    version,
    about = "Summarize the issues and pull requests a GitHub account has authored"
)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(long)]
    verbose: bool,

    #[command(flatten)]
    args: ContributionArgs,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(verbose)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::contributions::run(&cli.args).await {
        display::error(&e.to_string());
        std::process::exit(1);
    }
}

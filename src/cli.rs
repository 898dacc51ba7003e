use crate::api::{self, BrowserKind};
use crate::config::{ScrapeConfig, StatFilter};
use crate::ApiResponse;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matchscrape", version, about = "Scheduled matches + statistics to xlsx (JSON status output)")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape one sport's scheduled matches (the default command)
    Scrape(ScrapeArgs),
    /// List the known sports and their menu positions
    Sports,
    /// Show the activity log, newest first
    Logs(LogsArgs),
}

#[derive(Args, Default)]
struct ScrapeArgs {
    /// Sport display name as shown in the site menu, e.g. ТЕННИС
    #[arg(long)]
    sport: Option<String>,
    /// Spreadsheet to write
    #[arg(long)]
    output: Option<PathBuf>,
    /// JSON file overriding the built-in selectors and settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keep every statistic row instead of the allow-list
    #[arg(long = "all-stats")]
    all_stats: bool,
    /// Run Chrome without a window
    #[arg(long)]
    headless: bool,
    /// Replay saved pages from a directory with a manifest.json
    #[arg(long = "snapshot-dir")]
    snapshot_dir: Option<PathBuf>,
}

#[derive(Args)]
struct LogsArgs {
    /// Only lines mentioning this sport or match id
    subject: Option<String>,
    #[arg(long)]
    errors: bool,
}

/// Returns the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    match cli.cmd.unwrap_or(Command::Scrape(ScrapeArgs::default())) {
        Command::Scrape(args) => finish(scrape_cmd(args)),
        Command::Sports => finish(Ok(api::sports())),
        Command::Logs(LogsArgs { subject, errors }) => {
            finish(api::read_logs(subject.as_deref(), errors))
        }
    }
}

fn scrape_cmd(args: ScrapeArgs) -> crate::Result<crate::RunSummary> {
    let mut config = match &args.config {
        Some(path) => ScrapeConfig::load(path)?,
        None => ScrapeConfig::default(),
    };
    if let Some(sport) = args.sport {
        config.sport = sport;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if args.all_stats {
        config.stat_filter = StatFilter::All;
    }

    let kind = match args.snapshot_dir {
        Some(dir) => BrowserKind::Snapshot { dir },
        None => BrowserKind::Chrome {
            headless: args.headless,
        },
    };
    api::scrape(&kind, config)
}

fn finish<T: serde::Serialize>(res: crate::Result<T>) -> i32 {
    match res {
        Ok(v) => {
            print_json(ApiResponse::ok(v));
            0
        }
        Err(e) => {
            print_json(ApiResponse::<()>::err(e.to_string()));
            1
        }
    }
}

fn print_json<T: serde::Serialize>(val: T) {
    match serde_json::to_string_pretty(&val) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("failed to render output: {e}"),
    }
}

use crate::api::{self, Components};
use crate::config::Config;
use crate::engine::Progress;
use crate::tools::fetch::HttpFetcher;
use crate::types::ApiResponse;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "checkup-lens",
    version,
    about = "Scrape health-checkup packages and compare them with an LLM"
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape a listing page and print the AI analysis (streams progress)
    Analyze(AnalyzeArgs),
    /// Scrape a listing page and write a static HTML report
    Report(ReportArgs),
    /// Print the scraped package text only
    Scrape(FetchArgs),
    /// Parse package text or HTML into JSON records (file, URL or '-' for stdin)
    Parse { input: String },
    /// Show the activity log, newest first
    Logs(LogsArgs),
}

#[derive(Args)]
struct FetchArgs {
    url: String,
    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[derive(Args)]
struct AnalyzeArgs {
    #[command(flatten)]
    fetch: FetchArgs,
    /// Also print the raw scraped text
    #[arg(long)]
    raw: bool,
}

#[derive(Args)]
struct ReportArgs {
    #[command(flatten)]
    fetch: FetchArgs,
    /// Output HTML path
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct LogsArgs {
    /// Only failed operations
    #[arg(long)]
    errors: bool,
    /// Only lines mentioning this host
    #[arg(long)]
    target: Option<String>,
}

pub fn run() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let mut config = Config::from_env();

    let result = match cli.cmd {
        Command::Analyze(args) => {
            apply_fetch_args(&mut config, &args.fetch);
            analyze(&config, &args.fetch.url, args.raw)
        }
        Command::Report(args) => {
            apply_fetch_args(&mut config, &args.fetch);
            config.output_path = args.output.or(config.output_path);
            report(&config, &args.fetch.url)
        }
        Command::Scrape(args) => {
            apply_fetch_args(&mut config, &args);
            scrape(&config, &args.url)
        }
        Command::Parse { input } => parse(&config, &input),
        Command::Logs(args) => logs(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn apply_fetch_args(config: &mut Config, args: &FetchArgs) {
    if let Some(secs) = args.timeout {
        config.fetch.timeout = Duration::from_secs(secs);
    }
}

fn print_progress(p: &Progress) {
    eprintln!("{p}");
}

fn analyze(config: &Config, url: &str, show_raw: bool) -> anyhow::Result<ExitCode> {
    let components = Components::from_config(config)?;
    let analysis = match api::analyze_url(url, &components, &mut print_progress) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("❌ {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if show_raw {
        println!("── 📄 Raw Scraped Data ──────────────────────");
        println!("{}", analysis.summary);
        println!("─────────────────────────────────────────────\n");
    }
    println!("## 📊 Analysis Results\n");
    println!("{}", analysis.markdown);
    Ok(ExitCode::SUCCESS)
}

fn report(config: &Config, url: &str) -> anyhow::Result<ExitCode> {
    let components = Components::from_config(config)?;
    let written = write_report_for(url, &components, config)?;
    Ok(if written { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Batch path behind `report`. `Ok(false)` means an upstream failure was
/// reported and no file was written.
pub(crate) fn write_report_for(
    url: &str,
    components: &Components,
    config: &Config,
) -> anyhow::Result<bool> {
    match api::generate_report(url, components, config, &mut print_progress) {
        Ok((_, path)) => {
            eprintln!("✅ Full report saved to '{}'", path.display());
            Ok(true)
        }
        Err(e) if e.is_upstream() => {
            eprintln!("❌ {e}");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn scrape(config: &Config, url: &str) -> anyhow::Result<ExitCode> {
    let components = Components::from_config(config)?;
    match api::scrape_url(url, &components) {
        Ok(summary) => {
            println!("{summary}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("❌ {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn parse(config: &Config, input: &str) -> anyhow::Result<ExitCode> {
    let text = read_input(config, input)?;
    let ok = match api::parse_input(&text) {
        Ok(records) => print_json(&ApiResponse::ok(records)),
        Err(e) => {
            print_json(&ApiResponse::<()>::err(e.to_string()));
            false
        }
    };
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn logs(args: LogsArgs) -> anyhow::Result<ExitCode> {
    for line in api::read_activity(args.target.as_deref(), args.errors)? {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

fn read_input(config: &Config, input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read from stdin")?;
        Ok(buffer)
    } else if input.starts_with("http://") || input.starts_with("https://") {
        let fetcher = HttpFetcher::new(config.fetch.clone())?;
        Ok(fetcher.fetch_html(input)?)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read '{input}'"))
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            true
        }
        Err(e) => {
            eprintln!("Error serializing to JSON: {e}");
            false
        }
    }
}

use crate::config::Config;
use crate::engine::*;
use crate::error::*;
use crate::services::ActivityLogger;
use crate::tools::extract::extract_packages;
use crate::tools::fetch::HttpFetcher;
use crate::tools::parse::parse_packages;
use crate::tools::recommend::LlmRecommender;
use crate::tools::render::{write_report, ReportMeta};
use crate::types::{PackageRecord, PackageSummary};
use std::path::PathBuf;
use std::time::Instant;
use url::Url;

// Logging failures must never break the pipeline.
fn log_outcome<T>(target: Option<&str>, event: &str, started: Instant, result: &Result<T>) {
    let Ok(logger) = ActivityLogger::new() else {
        return;
    };
    let ms = started.elapsed().as_millis();
    let _ = match result {
        Ok(_) => logger.info(target, event, Some(&format!("succeeded in {ms}ms"))),
        Err(e) => logger.error(target, event, Some(&format!("failed in {ms}ms: {e}"))),
    };
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url).ok()?.host_str().map(str::to_string)
}

/* ------------ public facade components ------------ */

pub struct Components {
    pub fetcher: Box<dyn PageFetcher>,
    pub recommender: Box<dyn Recommender>,
}

impl Components {
    /// Real HTTP fetcher and OpenRouter recommender built from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            fetcher: Box::new(HttpFetcher::new(config.fetch.clone())?),
            recommender: Box::new(LlmRecommender::new(config.llm.clone())?),
        })
    }

    pub fn engine(&self) -> Engine<'_> {
        Engine::new(&*self.fetcher, &*self.recommender)
    }
}

/* ------------ pipeline entrypoints ------------ */

/// Fetch a listing page and extract its package blocks.
pub fn scrape_url(url: &str, components: &Components) -> Result<PackageSummary> {
    let started = Instant::now();
    let result = components.engine().scrape(url);
    log_outcome(host_of(url).as_deref(), "scrape", started, &result);
    result
}

/// Full pipeline with progress callbacks (interactive path).
pub fn analyze_url(
    url: &str,
    components: &Components,
    on_progress: &mut dyn FnMut(&Progress),
) -> Result<Analysis> {
    let started = Instant::now();
    let result = components.engine().run(url, on_progress);
    log_outcome(host_of(url).as_deref(), "analyze", started, &result);
    result
}

/// Full pipeline ending in a static HTML file (batch path). Returns the
/// analysis and the path written.
pub fn generate_report(
    url: &str,
    components: &Components,
    config: &Config,
    on_progress: &mut dyn FnMut(&Progress),
) -> Result<(Analysis, PathBuf)> {
    let started = Instant::now();
    let result = components.engine().run(url, on_progress).and_then(|analysis| {
        let path = config.output_path();
        write_report(&path, &analysis.markdown, &ReportMeta::for_source(url))?;
        Ok((analysis, path))
    });
    log_outcome(host_of(url).as_deref(), "report", started, &result);
    result
}

/// Structured records from either a textual summary or raw page HTML.
pub fn parse_input(input: &str) -> Result<Vec<PackageRecord>> {
    let trimmed = input.trim_start();
    if trimmed.starts_with('<') {
        let summary = extract_packages(input)?;
        return Ok(parse_packages(&summary.text()));
    }
    Ok(parse_packages(input))
}

/// Activity log lines, newest first.
pub fn read_activity(target: Option<&str>, errors_only: bool) -> Result<Vec<String>> {
    ActivityLogger::new()?.read_logs(target, errors_only)
}

use crate::error::*;
use crate::tools::extract::extract_packages;
use crate::tools::fetch::FetchResult;
use crate::types::{ExtractionTier, PackageSummary};
use serde::Serialize;

pub trait PageFetcher {
    fn name(&self) -> &'static str;
    fn fetch_page(&self, url: &str) -> Result<FetchResult>;
}

pub trait Recommender {
    fn name(&self) -> &'static str;
    /// Markdown commentary for a textual package summary.
    fn recommend(&self, summary: &str) -> Result<String>;
}

/// Status updates emitted while a pipeline run progresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Fetching { url: String },
    Scraped { count: usize, tier: ExtractionTier },
    Analyzing,
    Finished,
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Progress::Fetching { url } => write!(f, "🔍 Scraping health packages from {url}..."),
            Progress::Scraped { count, .. } => write!(f, "✅ Scraped {count} package entries!"),
            Progress::Analyzing => write!(f, "🧠 Analyzing with LLM..."),
            Progress::Finished => write!(f, "📊 Analysis complete"),
        }
    }
}

/// Output of a full pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub summary: PackageSummary,
    /// Model output, or the recommendation error rendered as markdown.
    pub markdown: String,
}

pub struct Engine<'a> {
    pub fetcher: &'a dyn PageFetcher,
    pub recommender: &'a dyn Recommender,
}

impl<'a> Engine<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, recommender: &'a dyn Recommender) -> Self {
        Self {
            fetcher,
            recommender,
        }
    }

    /// Fetch and extract. Fails on fetch errors and empty pages.
    pub fn scrape(&self, url: &str) -> Result<PackageSummary> {
        let fetched = self.fetcher.fetch_page(url)?;
        log::info!(
            "fetched {} bytes from {url} via {} in {}ms ({} attempts)",
            fetched.html.len(),
            self.fetcher.name(),
            fetched.duration_ms,
            fetched.attempts
        );
        extract_packages(&fetched.html)
    }

    /// Full run. Only fetch/extract failures are returned as errors;
    /// recommendation failures end up in [`Analysis::markdown`].
    pub fn run(&self, url: &str, on_progress: &mut dyn FnMut(&Progress)) -> Result<Analysis> {
        on_progress(&Progress::Fetching { url: url.to_string() });
        let summary = self.scrape(url)?;

        on_progress(&Progress::Scraped {
            count: summary.len(),
            tier: summary.tier,
        });
        on_progress(&Progress::Analyzing);

        let markdown = match self.recommender.recommend(&summary.text()) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{} failed: {e}", self.recommender.name());
                e.to_string()
            }
        };

        on_progress(&Progress::Finished);
        Ok(Analysis { summary, markdown })
    }
}

mod client;
mod headers;
mod retry;
mod tests;

pub mod types;

// Re-export types for public use
pub use client::ReqwestTransport;
pub use types::*;

use crate::config::FetchConfig;
use crate::engine::PageFetcher;
use crate::error::{CheckupError, Result};
use url::Url;

/// Page fetcher: browser headers plus bounded retry on transient server
/// errors.
///
/// # Examples
/// ```no_run
/// use checkup_lens::config::FetchConfig;
/// use checkup_lens::tools::fetch::HttpFetcher;
///
/// let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
/// let result = fetcher.fetch("https://example.com/lab").unwrap();
/// println!("{} bytes in {} attempts", result.html.len(), result.attempts);
/// ```
pub struct HttpFetcher<T: Transport = ReqwestTransport> {
    transport: T,
    config: FetchConfig,
}

impl HttpFetcher<ReqwestTransport> {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config).map_err(CheckupError::Other)?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> HttpFetcher<T> {
    pub fn with_transport(transport: T, config: FetchConfig) -> Self {
        Self { transport, config }
    }

    /// Fetch HTML from URL, retrying on the configured server-error statuses.
    pub fn fetch(&self, url: &str) -> Result<FetchResult> {
        validate_url(url)?;
        retry::fetch_with_retry(
            &self.transport,
            url,
            &headers::browser_headers(),
            &self.config.retry,
            std::thread::sleep,
        )
    }

    /// Fetch HTML from URL (convenience function that returns only the HTML).
    pub fn fetch_html(&self, url: &str) -> Result<String> {
        self.fetch(url).map(FetchResult::into_html)
    }
}

impl<T: Transport> PageFetcher for HttpFetcher<T> {
    fn name(&self) -> &'static str {
        "reqwest-blocking"
    }

    fn fetch_page(&self, url: &str) -> Result<FetchResult> {
        self.fetch(url)
    }
}

fn validate_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|_| CheckupError::InvalidUrl(url.into()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CheckupError::InvalidUrl(url.into()));
    }
    Ok(())
}

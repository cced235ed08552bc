use super::types::{HttpResponse, Transport};
use crate::config::FetchConfig;
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use reqwest::redirect;

const REDIRECT_LIMIT: usize = 10;

/// Blocking reqwest transport.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(cfg: &FetchConfig) -> Result<Self, String> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| format!("Failed to build client: {}", e))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, headers: &HeaderMap) -> Result<HttpResponse, String> {
        let response = self
            .client
            .get(url)
            .headers(headers.clone())
            .send()
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| format!("Failed to read response: {}", e))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
            body,
        })
    }
}

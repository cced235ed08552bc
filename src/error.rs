use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckupError>;

/// Prefixes that mark a pipeline value as an error rather than content.
pub const SENTINEL_PREFIXES: [&str; 2] = ["Error", "No health"];

#[derive(Debug, Error)]
pub enum CheckupError {
    /// Transport failure after retries, or a non-success status.
    #[error("Error fetching URL: {0}")]
    Fetch(String),

    #[error("No health packages found on this page.")]
    NoPackages,

    #[error(
        "❌ **OpenRouter API key not found.** Please create a `.env` file with:\n\n```\nOPENROUTER_API_KEY=your_key_here\n```"
    )]
    MissingCredential,

    #[error("❌ **LLM Analysis Error:** {0}")]
    Recommendation(String),

    #[error("Error fetching URL: invalid url: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl CheckupError {
    pub fn fetch_error(url: &str, detail: &str) -> Self {
        CheckupError::Fetch(format!("{detail} for url: {url}"))
    }

    /// True for failures that end the pipeline before the LLM stage.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CheckupError::Fetch(_) | CheckupError::NoPackages | CheckupError::InvalidUrl(_)
        )
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for CheckupError {
    fn from(e: reqwest::Error) -> Self {
        CheckupError::Fetch(e.to_string())
    }
}

/// Check whether raw pipeline text is an error/empty sentinel.
pub fn is_sentinel(text: &str) -> bool {
    SENTINEL_PREFIXES.iter().any(|p| text.starts_with(p))
}

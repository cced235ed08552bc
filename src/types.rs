use serde::{Deserialize, Serialize};

/// Separator between flattened text segments of one package block.
pub const SEGMENT_SEPARATOR: &str = " | ";

/// Separator between package blocks in the textual summary.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Placeholder for a record field the parser could not fill.
pub const NOT_AVAILABLE: &str = "N/A";

/// Which extraction pass produced the blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionTier {
    /// Package-card anchors matched by selector.
    Structural,
    /// Keyword-matched lines from the flattened page text.
    Fallback,
}

/// Ordered, non-empty set of package blocks scraped from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub tier: ExtractionTier,
    pub blocks: Vec<String>,
}

impl PackageSummary {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Textual form handed to the LLM: blocks joined by a blank line.
    pub fn text(&self) -> String {
        self.blocks.join(BLOCK_SEPARATOR)
    }
}

impl std::fmt::Display for PackageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// Structured view of one package block. Every field is always present;
/// missing values hold [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    #[serde(rename = "parameters")]
    pub parameter_summary: String,
    #[serde(rename = "tests")]
    pub test_list: String,
    pub discounted_price: String,
    pub original_price: String,
    #[serde(rename = "discount")]
    pub discount_label: String,
}

impl Default for PackageRecord {
    fn default() -> Self {
        Self {
            name: NOT_AVAILABLE.to_string(),
            parameter_summary: NOT_AVAILABLE.to_string(),
            test_list: NOT_AVAILABLE.to_string(),
            discounted_price: NOT_AVAILABLE.to_string(),
            original_price: NOT_AVAILABLE.to_string(),
            discount_label: NOT_AVAILABLE.to_string(),
        }
    }
}

/// JSON envelope printed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

mod utils;

use utils::*;

use crate::error::{CheckupError, Result};
use crate::types::{ExtractionTier, PackageSummary};
use scraper::Html;

/// Extract package blocks from page HTML.
///
/// Tries package-card anchors first and falls back to keyword-matched text
/// lines only when no card qualifies. Blocks keep page order.
pub fn extract_blocks(html: &str) -> Option<PackageSummary> {
    let doc = Html::parse_document(html);

    let blocks = structural_blocks(&doc);
    if !blocks.is_empty() {
        log::debug!("structural pass matched {} package cards", blocks.len());
        return Some(PackageSummary {
            tier: ExtractionTier::Structural,
            blocks,
        });
    }

    let blocks = fallback_blocks(&doc);
    if !blocks.is_empty() {
        log::debug!("fallback pass matched {} text lines", blocks.len());
        return Some(PackageSummary {
            tier: ExtractionTier::Fallback,
            blocks,
        });
    }

    None
}

/// Extract packages, failing with [`CheckupError::NoPackages`] when neither
/// pass finds anything.
pub fn extract_packages(html: &str) -> Result<PackageSummary> {
    extract_blocks(html).ok_or(CheckupError::NoPackages)
}

/// Textual summary of the page, or the "no packages" message.
pub fn extract_text(html: &str) -> String {
    match extract_packages(html) {
        Ok(summary) => summary.text(),
        Err(e) => e.to_string(),
    }
}

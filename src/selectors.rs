//! Pre-compiled CSS selectors shared across tools.

use once_cell::sync::Lazy;
use scraper::Selector;

/// Package cards: links into the health-packages section.
pub static PACKAGE_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href*='health-packages']").expect("valid selector"));

/// Elements whose text content is not page text.
pub const NON_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

use scraper::{ElementRef, Html};

use crate::selectors::{NON_TEXT_ELEMENTS, PACKAGE_LINK_SELECTOR};
use crate::types::SEGMENT_SEPARATOR;

/// Words that mark a free-text line as package-related.
const FALLBACK_KEYWORDS: [&str; 5] = ["Parameters", "Include", "Panel", "Checkup", "Profile"];

/// Fallback lines at or below this many characters are noise.
const MIN_FALLBACK_LINE_CHARS: usize = 20;

/// Text nodes below `root` in document order, skipping script/style content.
fn visible_text_nodes<'a>(root: ElementRef<'a>) -> impl Iterator<Item = &'a str> + 'a {
    root.descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| NON_TEXT_ELEMENTS.contains(&e.name()))
        });
        (!hidden).then_some(&**text)
    })
}

/// Join the trimmed, non-empty text nodes below `root` with `separator`.
pub(super) fn flatten_text(root: ElementRef<'_>, separator: &str) -> String {
    visible_text_nodes(root)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Card text must mention what the package includes and how much.
pub(super) fn is_package_card(text: &str) -> bool {
    text.contains("Include") && (text.contains("Parameters") || text.contains("Tests"))
}

pub(super) fn is_package_line(line: &str) -> bool {
    FALLBACK_KEYWORDS.iter().any(|kw| line.contains(kw))
        && line.trim().chars().count() > MIN_FALLBACK_LINE_CHARS
}

/// Structural pass: one block per qualifying package-card anchor.
pub(super) fn structural_blocks(doc: &Html) -> Vec<String> {
    doc.select(&PACKAGE_LINK_SELECTOR)
        .map(|card| flatten_text(card, SEGMENT_SEPARATOR))
        .filter(|text| is_package_card(text))
        .collect()
}

/// Fallback pass: keyword lines from the whole page text.
pub(super) fn fallback_blocks(doc: &Html) -> Vec<String> {
    flatten_text(doc.root_element(), "\n")
        .lines()
        .filter(|line| is_package_line(line))
        .map(|line| line.trim().to_string())
        .collect()
}

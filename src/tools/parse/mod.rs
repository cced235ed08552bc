//! Package record parser.
//!
//! Turns the extractor's textual summary into [`PackageRecord`]s. Parsing
//! never fails: blocks that match nothing still yield a record, with
//! [`NOT_AVAILABLE`] in every field that could not be filled.

pub mod rules;

pub use rules::{classify, Rule, Slot, RULES};

use crate::types::{PackageRecord, BLOCK_SEPARATOR, NOT_AVAILABLE, SEGMENT_SEPARATOR};
use rules::{DIGITS_REGEX, TRAILING_TEST_REGEX};

const UNKNOWN_NAME: &str = "Unknown";

/// Parse every non-empty block of a textual summary.
pub fn parse_packages(summary: &str) -> Vec<PackageRecord> {
    summary
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(parse_block)
        .collect()
}

/// Parse one pipe-delimited block.
pub fn parse_block(block: &str) -> PackageRecord {
    let segments: Vec<&str> = block
        .split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let mut fields = Fields::default();
    for segment in &segments {
        if let Some(slot) = classify(segment) {
            fields.apply(slot, segment);
        }
    }

    let name = fields.name.take().unwrap_or_else(|| {
        segments
            .first()
            .map(|s| s.to_string())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    });

    PackageRecord {
        name,
        parameter_summary: or_na(fields.parameters),
        test_list: or_na(fields.tests),
        discounted_price: or_na(fields.discounted_price),
        original_price: or_na(fields.original_price),
        discount_label: or_na(fields.discount),
    }
}

#[derive(Default)]
struct Fields {
    name: Option<String>,
    parameters: Option<String>,
    tests: Option<String>,
    discounted_price: Option<String>,
    original_price: Option<String>,
    discount: Option<String>,
}

impl Fields {
    fn apply(&mut self, slot: Slot, segment: &str) {
        match slot {
            Slot::Discount => self.discount = Some(segment.to_string()),
            Slot::Parameters => self.parameters = Some(segment.to_string()),
            Slot::Prices => {
                // Listing order is discounted price, then original price.
                let mut runs = DIGITS_REGEX.find_iter(segment).map(|m| m.as_str());
                if let (Some(discounted), Some(original)) = (runs.next(), runs.next()) {
                    self.discounted_price = Some(discounted.to_string());
                    self.original_price = Some(original.to_string());
                }
            }
            Slot::Name => {
                let name = TRAILING_TEST_REGEX.replace(segment, "").trim().to_string();
                if !name.is_empty() {
                    self.name = Some(name);
                }
            }
            Slot::Tests => {
                if self.tests.is_none() {
                    self.tests = Some(segment.to_string());
                }
            }
        }
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

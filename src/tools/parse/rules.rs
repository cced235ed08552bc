//! Ordered segment classification rules. The first rule whose predicate
//! matches decides the slot; a segment fills at most one slot.

use once_cell::sync::Lazy;
use regex::Regex;

static DISCOUNT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\d+%\s*Off$").expect("valid regex"));
static LEADING_PRICES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s+\d+").expect("valid regex"));
pub(super) static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));
pub(super) static TRAILING_TEST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*Test\s*$").expect("valid regex"));

/// Minimum length (exclusive) for a free-text segment to count as a test list.
const MIN_TEST_LIST_CHARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Discount,
    Parameters,
    Prices,
    Name,
    Tests,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub slot: Slot,
    pub matches: fn(&str) -> bool,
}

pub static RULES: [Rule; 5] = [
    Rule {
        slot: Slot::Discount,
        matches: is_discount,
    },
    Rule {
        slot: Slot::Parameters,
        matches: is_parameter_summary,
    },
    Rule {
        slot: Slot::Prices,
        matches: is_price_line,
    },
    Rule {
        slot: Slot::Name,
        matches: is_name,
    },
    Rule {
        slot: Slot::Tests,
        matches: is_test_list,
    },
];

/// Slot for a trimmed segment, if any rule claims it.
pub fn classify(segment: &str) -> Option<Slot> {
    RULES
        .iter()
        .find(|rule| (rule.matches)(segment))
        .map(|rule| rule.slot)
}

fn is_discount(s: &str) -> bool {
    DISCOUNT_REGEX.is_match(s)
}

fn is_parameter_summary(s: &str) -> bool {
    s.contains("Include") && s.contains("Parameters")
}

fn is_price_line(s: &str) -> bool {
    s.contains("Read More") || LEADING_PRICES_REGEX.is_match(s)
}

fn is_name(s: &str) -> bool {
    s.contains("in CMC") || s.contains("Test")
}

fn is_test_list(s: &str) -> bool {
    s.chars().count() > MIN_TEST_LIST_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_is_case_insensitive_and_anchored() {
        assert_eq!(classify("65% Off"), Some(Slot::Discount));
        assert_eq!(classify("10% OFF"), Some(Slot::Discount));
        assert_eq!(classify("5%off"), Some(Slot::Discount));
        assert_ne!(classify("Flat 65% Off"), Some(Slot::Discount));
    }

    #[test]
    fn parameters_need_both_words() {
        assert_eq!(classify("Include 83 Parameters"), Some(Slot::Parameters));
        assert_eq!(classify("83 Parameters"), Some(Slot::Tests));
    }

    #[test]
    fn price_line_by_marker_or_leading_digits() {
        assert_eq!(classify("799 2270 Read More"), Some(Slot::Prices));
        assert_eq!(classify("Read More"), Some(Slot::Prices));
        assert_eq!(classify("1499  3000"), Some(Slot::Prices));
        assert_ne!(classify("Rs 799 2270"), Some(Slot::Prices));
    }

    #[test]
    fn name_rule_wins_over_test_list() {
        assert_eq!(
            classify("Basic Panel in CMC (Vellore) Test"),
            Some(Slot::Name)
        );
        assert_eq!(classify("Thyroid Test"), Some(Slot::Name));
    }

    #[test]
    fn earlier_rules_take_precedence() {
        // Would also satisfy the name rule.
        assert_eq!(classify("Include 12 Parameters Test"), Some(Slot::Parameters));
        assert_eq!(classify("Test 100 200 Read More"), Some(Slot::Prices));
    }

    #[test]
    fn short_free_text_is_unclassified() {
        assert_eq!(classify("CBC"), None);
        assert_eq!(classify("12345"), None);
        assert_eq!(classify("CBC, LFT"), Some(Slot::Tests));
    }
}

//! Intent classification for free-text assistant commands.
//!
//! Classification is a pure function over the message text; it never looks
//! at cart or catalog state. Matching is case-insensitive throughout.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the first "buy"/"purchase" keyword for stripping.
static BUY_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)buy|purchase").expect("valid regex"));

/// Extracts the item list from "checkout <list>".
static CHECKOUT_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)checkout\s+(.+)").expect("valid regex"));

/// Splits a checkout list on commas and/or the literal word "and".
static LIST_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:,|\sand\s)+").expect("valid regex"));

/// The classified purpose of a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// "buy X" / "purchase X": the remaining text is a product name query.
    Buy(String),
    /// Bare "checkout" or "checkout all": the whole cart.
    CheckoutAll,
    /// "checkout <list>": candidate item-name tokens.
    CheckoutItems(Vec<String>),
    /// No recognized command.
    Unknown,
}

/// Classify a user message.
#[must_use]
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();

    if lower.contains("buy") || lower.contains("purchase") {
        // Strip the first keyword occurrence; the rest is the query.
        let query = BUY_KEYWORD.replacen(message, 1, "").trim().to_string();
        return Intent::Buy(query);
    }

    if lower.contains("checkout") {
        return CHECKOUT_LIST.captures(message).map_or(
            Intent::CheckoutAll,
            |caps| {
                let list = caps
                    .get(1)
                    .map(|m| m.as_str().trim())
                    .unwrap_or_default();
                if list.is_empty() || list.eq_ignore_ascii_case("all") {
                    return Intent::CheckoutAll;
                }
                let tokens: Vec<String> = LIST_SPLIT
                    .split(list)
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(ToString::to_string)
                    .collect();
                if tokens.is_empty() {
                    Intent::CheckoutAll
                } else {
                    Intent::CheckoutItems(tokens)
                }
            },
        );
    }

    Intent::Unknown
}

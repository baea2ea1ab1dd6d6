//! # Rule-Based Extractor
//!
//! Keyword/regex implementation of [`EntityExtractor`].
//!
//! Recognizes utterances like `100 kg apples for 10 rupees per kg` using
//! three configurable vocabularies: product keywords, quantity units, and
//! currency tokens. Captured unit and currency tokens are normalized
//! through configurable alias maps (`rs` -> `rupees`, `grams` -> `gram`),
//! so downstream comparisons see one canonical spelling per token.
//! Anything the extractor cannot recognize comes back as an absent field -
//! never a default.
//!
//! # Examples
//!
//! ```
//! use trade_matcher::infrastructure::extraction::{
//!     EntityExtractor, ExtractionPatterns, RuleBasedExtractor,
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let extractor = RuleBasedExtractor::new(&ExtractionPatterns::default()).unwrap();
//! let request = extractor
//!     .extract("I want 100 kg apples for 10 rupees per kg")
//!     .await
//!     .unwrap();
//! assert_eq!(request.product(), Some("apples"));
//! # });
//! ```

use crate::domain::entities::TradeRequest;
use crate::domain::value_objects::{Currency, Price, Quantity, Unit};
use crate::infrastructure::extraction::traits::{
    EntityExtractor, ExtractionError, ExtractionResult,
};
use async_trait::async_trait;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;
use std::str::FromStr;

/// Vocabularies and alias maps driving the rule-based extractor.
///
/// Loaded from the application config; the defaults cover the demo
/// marketplace data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionPatterns {
    /// Product keywords recognized as the requested product.
    #[serde(default = "default_product_keywords")]
    pub product_keywords: Vec<String>,

    /// Unit tokens that mark the number before them as a quantity.
    #[serde(default = "default_quantity_units")]
    pub quantity_units: Vec<String>,

    /// Currency tokens that mark the adjacent number as a price.
    #[serde(default = "default_price_currencies")]
    pub price_currencies: Vec<String>,

    /// Unit spellings folded to a canonical token after capture.
    #[serde(default = "default_unit_aliases")]
    pub unit_aliases: BTreeMap<String, String>,

    /// Currency spellings folded to a canonical token after capture.
    #[serde(default = "default_currency_aliases")]
    pub currency_aliases: BTreeMap<String, String>,
}

impl Default for ExtractionPatterns {
    fn default() -> Self {
        Self {
            product_keywords: default_product_keywords(),
            quantity_units: default_quantity_units(),
            price_currencies: default_price_currencies(),
            unit_aliases: default_unit_aliases(),
            currency_aliases: default_currency_aliases(),
        }
    }
}

fn default_product_keywords() -> Vec<String> {
    [
        "apples", "rice", "milk", "sugar", "coffee", "tea", "chicken", "oranges", "potatoes",
    ]
    .map(String::from)
    .to_vec()
}

fn default_quantity_units() -> Vec<String> {
    [
        "kg", "kgs", "kilograms", "gram", "grams", "liter", "liters", "dozen",
    ]
    .map(String::from)
    .to_vec()
}

fn default_price_currencies() -> Vec<String> {
    ["rupees", "rupee", "rs", "inr", "dollars", "usd"]
        .map(String::from)
        .to_vec()
}

fn default_unit_aliases() -> BTreeMap<String, String> {
    alias_map(&[
        ("kgs", "kg"),
        ("kilograms", "kg"),
        ("grams", "gram"),
        ("liters", "liter"),
    ])
}

fn default_currency_aliases() -> BTreeMap<String, String> {
    alias_map(&[
        ("rupee", "rupees"),
        ("rs", "rupees"),
        ("inr", "rupees"),
        ("usd", "dollars"),
    ])
}

fn alias_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(alias, canonical)| ((*alias).to_string(), (*canonical).to_string()))
        .collect()
}

/// Rule-based [`EntityExtractor`] implementation.
///
/// All patterns are compiled once at construction.
#[derive(Debug)]
pub struct RuleBasedExtractor {
    product_re: Option<Regex>,
    quantity_re: Option<Regex>,
    // "10 rupees" and "rs 10" forms respectively.
    price_re: Option<Regex>,
    price_prefix_re: Option<Regex>,
    // Fallback for quantities stated without a unit.
    number_re: Regex,
    unit_aliases: BTreeMap<String, String>,
    currency_aliases: BTreeMap<String, String>,
}

impl RuleBasedExtractor {
    /// Creates an extractor from the given pattern vocabularies.
    ///
    /// Empty vocabularies disable the corresponding dimension: with no
    /// currency tokens configured, no price is ever extracted.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidPattern`] if a compiled pattern is
    /// rejected by the regex engine.
    pub fn new(patterns: &ExtractionPatterns) -> ExtractionResult<Self> {
        let product_re = match alternation(&patterns.product_keywords) {
            Some(alt) => Some(compile(&format!(r"(?i)\b({alt})\b"))?),
            None => None,
        };
        let quantity_re = match alternation(&patterns.quantity_units) {
            Some(alt) => Some(compile(&format!(
                r"(?i)\b([0-9]+(?:\.[0-9]+)?)\s*({alt})\b"
            ))?),
            None => None,
        };
        let (price_re, price_prefix_re) = match alternation(&patterns.price_currencies) {
            Some(alt) => (
                Some(compile(&format!(
                    r"(?i)\b([0-9]+(?:\.[0-9]+)?)\s*({alt})\b"
                ))?),
                Some(compile(&format!(
                    r"(?i)({alt})\s*([0-9]+(?:\.[0-9]+)?)\b"
                ))?),
            ),
            None => (None, None),
        };
        Ok(Self {
            product_re,
            quantity_re,
            price_re,
            price_prefix_re,
            number_re: compile(r"\b[0-9]+(?:\.[0-9]+)?\b")?,
            unit_aliases: normalize_aliases(&patterns.unit_aliases),
            currency_aliases: normalize_aliases(&patterns.currency_aliases),
        })
    }

    fn extract_product(&self, text: &str) -> Option<String> {
        let re = self.product_re.as_ref()?;
        re.find(text).map(|m| m.as_str().to_lowercase())
    }

    fn extract_quantity(&self, text: &str) -> Option<(Quantity, Unit)> {
        let re = self.quantity_re.as_ref()?;
        let captures = re.captures(text)?;
        let quantity = parse_decimal(captures.get(1)?.as_str())
            .and_then(|d| Quantity::from_decimal(d).ok())?;
        let token = canonical(&self.unit_aliases, captures.get(2)?.as_str());
        let unit = Unit::new(token).ok()?;
        Some((quantity, unit))
    }

    /// Picks up a bare number as a unitless quantity when no unit-marked
    /// quantity was found. Numbers inside the price match are skipped so a
    /// lone price is never mistaken for a quantity.
    fn extract_bare_quantity(
        &self,
        text: &str,
        price_span: Option<&Range<usize>>,
    ) -> Option<Quantity> {
        self.number_re
            .find_iter(text)
            .filter(|m| !price_span.is_some_and(|span| overlaps(&m.range(), span)))
            .find_map(|m| parse_decimal(m.as_str()).and_then(|d| Quantity::from_decimal(d).ok()))
    }

    fn extract_price(&self, text: &str) -> Option<(Price, Currency, Range<usize>)> {
        if let Some(re) = self.price_re.as_ref() {
            if let Some(captures) = re.captures(text) {
                let price = parse_decimal(captures.get(1)?.as_str())
                    .and_then(|d| Price::from_decimal(d).ok());
                let token = canonical(&self.currency_aliases, captures.get(2)?.as_str());
                let currency = Currency::new(token).ok();
                if let (Some(price), Some(currency)) = (price, currency) {
                    return Some((price, currency, captures.get(0)?.range()));
                }
            }
        }
        let re = self.price_prefix_re.as_ref()?;
        let captures = re.captures(text)?;
        let token = canonical(&self.currency_aliases, captures.get(1)?.as_str());
        let currency = Currency::new(token).ok()?;
        let price = parse_decimal(captures.get(2)?.as_str())
            .and_then(|d| Price::from_decimal(d).ok())?;
        Some((price, currency, captures.get(0)?.range()))
    }
}

#[async_trait]
impl EntityExtractor for RuleBasedExtractor {
    async fn extract(&self, text: &str) -> ExtractionResult<TradeRequest> {
        let mut builder = TradeRequest::builder();
        if let Some(product) = self.extract_product(text) {
            builder = builder.product(product);
        }
        let price = self.extract_price(text);
        if let Some((quantity, unit)) = self.extract_quantity(text) {
            builder = builder.quantity(quantity).unit(unit);
        } else if let Some(quantity) =
            self.extract_bare_quantity(text, price.as_ref().map(|(_, _, span)| span))
        {
            builder = builder.quantity(quantity);
        }
        if let Some((price, currency, _)) = price {
            builder = builder.price(price).currency(currency);
        }
        Ok(builder.build())
    }
}

/// Builds a regex alternation from a vocabulary, longest tokens first so
/// `grams` wins over `gram`.
fn alternation(tokens: &[String]) -> Option<String> {
    let mut escaped: Vec<String> = tokens
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .map(|t| regex::escape(&t))
        .collect();
    if escaped.is_empty() {
        return None;
    }
    escaped.sort_by_key(|t| std::cmp::Reverse(t.len()));
    Some(escaped.join("|"))
}

/// Lowercases alias keys and values so lookups match captured tokens.
fn normalize_aliases(aliases: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    aliases
        .iter()
        .map(|(alias, canonical)| (alias.trim().to_lowercase(), canonical.trim().to_lowercase()))
        .filter(|(alias, canonical)| !alias.is_empty() && !canonical.is_empty())
        .collect()
}

/// Folds a captured token to its canonical spelling, if an alias exists.
fn canonical(aliases: &BTreeMap<String, String>, token: &str) -> String {
    let token = token.to_lowercase();
    aliases.get(&token).cloned().unwrap_or(token)
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

fn compile(pattern: &str) -> ExtractionResult<Regex> {
    Regex::new(pattern).map_err(|e| ExtractionError::InvalidPattern(e.to_string()))
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s).ok()
}

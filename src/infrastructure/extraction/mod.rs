//! # Entity Extraction
//!
//! Capability boundary for turning free-form text into a structured
//! [`TradeRequest`](crate::domain::entities::TradeRequest).
//!
//! The matching engine depends on the extractor only through its output
//! type, so the implementation (rule-based, model-based, or otherwise) can
//! vary independently. This crate ships [`RuleBasedExtractor`], a
//! keyword/regex implementation driven by configurable patterns.

pub mod rule_based;
pub mod traits;

pub use rule_based::{ExtractionPatterns, RuleBasedExtractor};
pub use traits::{EntityExtractor, ExtractionError, ExtractionResult};

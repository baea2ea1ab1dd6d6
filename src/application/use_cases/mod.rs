//! # Use Cases
//!
//! Application-level orchestration.
//!
//! - [`FindMatchesUseCase`]: Extracts a structured request from an
//!   utterance, takes a listing snapshot, and ranks it

pub mod find_matches;

pub use find_matches::{FindMatchesResponse, FindMatchesUseCase};

//! # Application Services
//!
//! Services that orchestrate domain logic.
//!
//! - [`MatchingEngine`]: Scores, filters, and ranks listings against a
//!   trade request
//! - [`Session`]: Explicit conversation state machine driving the engine

pub mod matching_engine;
pub mod session;

pub use matching_engine::{MatchResult, MatchingEngine};
pub use session::{Session, SessionState};

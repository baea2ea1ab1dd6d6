//! # Application Layer
//!
//! Use case orchestration and application services.
//!
//! This layer coordinates domain objects to perform business operations.
//!
//! ## Services
//!
//! - [`MatchingEngine`](services::MatchingEngine): Scores and ranks listings
//!   against a trade request
//! - [`Session`](services::Session): Conversation state machine around the
//!   engine
//!
//! ## Use Cases
//!
//! - [`FindMatchesUseCase`](use_cases::FindMatchesUseCase): Extracts a
//!   request from text and ranks the listing snapshot

pub mod error;
pub mod services;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{MatchResult, MatchingEngine, Session, SessionState};
pub use use_cases::{FindMatchesResponse, FindMatchesUseCase};

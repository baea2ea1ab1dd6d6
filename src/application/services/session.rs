//! # Conversation Session
//!
//! Explicit state machine around the matching engine.
//!
//! A session tracks one participant's conversation:
//!
//! ```text
//! AwaitingRole → AwaitingRequest(role) → (search) → AwaitingRole
//! ```
//!
//! Role tracking is an owned object passed through each interaction - not
//! process-wide state - so several sessions can run independently. After
//! every completed search the session resets to role selection.
//!
//! # Examples
//!
//! ```
//! use trade_matcher::application::services::{Session, SessionState};
//!
//! assert_eq!(
//!     Session::greeting(),
//!     "Welcome! Are you a 'buyer' or a 'seller'?"
//! );
//! ```

use crate::application::error::ApplicationResult;
use crate::application::services::matching_engine::MatchResult;
use crate::application::use_cases::find_matches::FindMatchesUseCase;
use crate::domain::value_objects::{Role, Unit};
use std::fmt;
use std::sync::Arc;

/// Conversation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the participant to declare a role.
    #[default]
    AwaitingRole,
    /// Waiting for the trade request utterance.
    AwaitingRequest(Role),
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingRole => write!(f, "awaiting-role"),
            Self::AwaitingRequest(role) => write!(f, "awaiting-request({role})"),
        }
    }
}

/// One participant's conversation with the marketplace.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    use_case: Arc<FindMatchesUseCase>,
}

impl Session {
    /// Creates a new session in the role-selection state.
    #[must_use]
    pub fn new(use_case: Arc<FindMatchesUseCase>) -> Self {
        Self {
            state: SessionState::default(),
            use_case,
        }
    }

    /// The opening line of every session.
    #[must_use]
    pub const fn greeting() -> &'static str {
        "Welcome! Are you a 'buyer' or a 'seller'?"
    }

    /// Returns the current conversation state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Handles one participant utterance and returns the reply.
    ///
    /// # Errors
    ///
    /// Propagates extraction and listing-source failures; conversational
    /// missteps (unknown role, unrecognized product) are handled with
    /// re-prompts, not errors.
    pub async fn respond(&mut self, input: &str) -> ApplicationResult<String> {
        match self.state {
            SessionState::AwaitingRole => Ok(self.handle_role_selection(input)),
            SessionState::AwaitingRequest(role) => self.handle_request(input, role).await,
        }
    }

    fn handle_role_selection(&mut self, input: &str) -> String {
        match parse_role_phrase(input) {
            Some(Role::Buyer) => {
                self.state = SessionState::AwaitingRequest(Role::Buyer);
                "Alright. What do you wish to buy? (e.g., '100 kg apples for 10 rupees per kg')"
                    .to_string()
            }
            Some(Role::Seller) => {
                self.state = SessionState::AwaitingRequest(Role::Seller);
                "Okay. What do you wish to sell? (e.g., '50 kg rice at 50 rupees per kg')"
                    .to_string()
            }
            None => "Please specify if you are a 'buyer' or 'seller'.".to_string(),
        }
    }

    async fn handle_request(&mut self, input: &str, role: Role) -> ApplicationResult<String> {
        if is_acknowledgment(input) {
            let verb = match role {
                Role::Buyer => "buy",
                Role::Seller => "sell",
            };
            return Ok(format!("Please tell me what you wish to {verb}."));
        }

        let response = self.use_case.execute(input, role).await?;

        let Some(product) = response.request.product().map(str::to_string) else {
            // No product recognized: keep the role and let the participant
            // rephrase.
            return Ok(
                "I couldn't understand the product. Please specify what you wish to buy/sell \
                 (e.g., 'apples', 'rice')."
                    .to_string(),
            );
        };

        // One search per declared role; reset for the next transaction.
        self.state = SessionState::AwaitingRole;

        let counterparties = match role {
            Role::Buyer => "sellers",
            Role::Seller => "buyers",
        };
        let mut reply = if response.matches.is_empty() {
            format!("I couldn't find any matching {counterparties} for your request.")
        } else {
            let mut lines = vec![format!(
                "These are the top {} {counterparties} as per your request for {product}:",
                response.matches.len()
            )];
            for (i, result) in response.matches.iter().enumerate() {
                lines.push(render_match(i + 1, result, role));
            }
            lines.join("\n")
        };
        reply.push_str(
            "\nIs there anything else I can help you with? If you want to make another \
             request, please tell me if you are a 'buyer' or 'seller' again.",
        );
        Ok(reply)
    }
}

/// Renders one ranked match the way the marketplace announces it.
fn render_match(position: usize, result: &MatchResult, role: Role) -> String {
    let listing = &result.listing;
    let unit = listing.unit().map_or("units", Unit::as_str);
    let price = match listing.currency() {
        Some(currency) => format!("{} {}", listing.price_per_unit(), currency.as_str()),
        None => listing.price_per_unit().to_string(),
    };
    match role {
        Role::Buyer => format!(
            "  {position}. Seller ID: {} is selling {} {unit} of {} at {price} per {unit}.",
            listing.owner(),
            listing.quantity(),
            listing.product_name(),
        ),
        Role::Seller => format!(
            "  {position}. Buyer ID: {} is looking to buy {} {unit} of {} at {price} per {unit}.",
            listing.owner(),
            listing.quantity(),
            listing.product_name(),
        ),
    }
}

/// Parses a role declaration, accepting the common phrasings.
fn parse_role_phrase(input: &str) -> Option<Role> {
    match input.trim().to_lowercase().as_str() {
        "buyer" | "i am a buyer" | "i'm a buyer" | "i want to buy" => Some(Role::Buyer),
        "seller" | "i am a seller" | "i'm a seller" | "i want to sell" => Some(Role::Seller),
        _ => None,
    }
}

fn is_acknowledgment(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "alright" | "okay" | "ok" | "yes" | "sure" | "go ahead"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::extraction::{ExtractionPatterns, RuleBasedExtractor};
    use crate::infrastructure::persistence::InMemoryListingRepository;

    fn session() -> Session {
        let extractor =
            Arc::new(RuleBasedExtractor::new(&ExtractionPatterns::default()).unwrap());
        let listings = Arc::new(InMemoryListingRepository::with_demo_listings().unwrap());
        Session::new(Arc::new(FindMatchesUseCase::new(extractor, listings)))
    }

    mod role_selection {
        use super::*;

        #[tokio::test]
        async fn buyer_phrase_moves_to_request_state() {
            let mut session = session();
            let reply = session.respond("I want to buy").await.unwrap();
            assert_eq!(session.state(), SessionState::AwaitingRequest(Role::Buyer));
            assert!(reply.contains("wish to buy"));
        }

        #[tokio::test]
        async fn seller_token_moves_to_request_state() {
            let mut session = session();
            session.respond("seller").await.unwrap();
            assert_eq!(session.state(), SessionState::AwaitingRequest(Role::Seller));
        }

        #[tokio::test]
        async fn unknown_role_reprompts() {
            let mut session = session();
            let reply = session.respond("broker").await.unwrap();
            assert_eq!(session.state(), SessionState::AwaitingRole);
            assert!(reply.contains("'buyer' or 'seller'"));
        }
    }

    mod request_handling {
        use super::*;

        #[tokio::test]
        async fn acknowledgment_reprompts_without_search() {
            let mut session = session();
            session.respond("buyer").await.unwrap();
            let reply = session.respond("okay").await.unwrap();
            assert_eq!(session.state(), SessionState::AwaitingRequest(Role::Buyer));
            assert!(reply.contains("wish to buy"));
        }

        #[tokio::test]
        async fn successful_search_renders_matches_and_resets() {
            let mut session = session();
            session.respond("buyer").await.unwrap();
            let reply = session
                .respond("I want 100 kg apples for 10 rupees per kg")
                .await
                .unwrap();

            assert_eq!(session.state(), SessionState::AwaitingRole);
            assert!(reply.contains("top 3 sellers"));
            assert!(reply.contains("Seller ID: seller_A"));
            assert!(reply.contains("per kg"));
        }

        #[tokio::test]
        async fn unrecognized_product_keeps_role() {
            let mut session = session();
            session.respond("buyer").await.unwrap();
            let reply = session.respond("I want 100 kg mangoes").await.unwrap();

            assert_eq!(session.state(), SessionState::AwaitingRequest(Role::Buyer));
            assert!(reply.contains("couldn't understand the product"));
        }

        #[tokio::test]
        async fn no_match_reply_resets_state() {
            let mut session = session();
            session.respond("seller").await.unwrap();
            // Nobody is buying milk in the demo set.
            let reply = session
                .respond("10 liter milk at 5 rupees per liter")
                .await
                .unwrap();

            assert_eq!(session.state(), SessionState::AwaitingRole);
            assert!(reply.contains("couldn't find any matching buyers"));
        }
    }
}

//! # Matching Engine
//!
//! Scores and ranks counterparty listings against a trade request.
//!
//! The engine is a pure function over its inputs: given a request, a
//! snapshot of the listing collection, and the participant's role, it
//! filters eligible listings (opposite side, same product), scores each one
//! along the quantity and price dimensions, and returns the top 3 by score
//! with a role-directed price tie-break.
//!
//! Units and currencies are binary compatibility gates - no conversion is
//! performed. All band arithmetic is exact decimal math.
//!
//! # Examples
//!
//! ```
//! use trade_matcher::application::services::MatchingEngine;
//! use trade_matcher::domain::entities::TradeRequest;
//! use trade_matcher::domain::value_objects::Role;
//!
//! let engine = MatchingEngine::new();
//! let request = TradeRequest::builder().product("apples").build();
//!
//! // No listings, no matches.
//! assert!(engine.rank(&request, &[], Role::Buyer).is_empty());
//! ```

use crate::domain::entities::{Listing, TradeRequest};
use crate::domain::value_objects::Role;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A listing paired with its match score.
///
/// Produced per invocation of [`MatchingEngine::rank`] and discarded once
/// the caller has consumed the ranked list.
///
/// # Invariants
///
/// - `score` is in `1..=10` (zero-score listings are never retained)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The matched listing.
    pub listing: Listing,
    /// Total match score: quantity sub-score + price sub-score.
    pub score: u8,
}

impl MatchResult {
    /// Creates a new match result.
    #[must_use]
    pub const fn new(listing: Listing, score: u8) -> Self {
        Self { listing, score }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchResult(score={} {})", self.score, self.listing)
    }
}

/// The matching and ranking engine.
///
/// Stateless and deterministic: identical inputs always produce identical
/// output, and no state is retained between calls. The caller supplies a
/// consistent snapshot of the listing collection per invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingEngine;

impl MatchingEngine {
    /// Maximum number of results returned by [`rank`](Self::rank).
    pub const MAX_RESULTS: usize = 3;

    /// Creates a new matching engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Ranks the listing snapshot against the request for the given role.
    ///
    /// A listing is eligible when its side is the role's counterparty side
    /// (buyers see selling listings, sellers see buying listings) and its
    /// product name equals the requested product case-insensitively.
    /// Eligible listings are scored on quantity closeness (0-5) and price
    /// favorability (0-5, direction depends on the role); only listings
    /// with a positive total are retained.
    ///
    /// Retained listings are sorted by score descending, ties broken by
    /// price per unit - ascending for buyers, descending for sellers - and
    /// the first [`MAX_RESULTS`](Self::MAX_RESULTS) are returned.
    ///
    /// Returns an empty vector when the request names no product.
    #[must_use]
    pub fn rank(
        &self,
        request: &TradeRequest,
        listings: &[Listing],
        role: Role,
    ) -> Vec<MatchResult> {
        let Some(product) = request.product() else {
            return Vec::new();
        };

        // Same case-folding policy as Unit/Currency equality.
        let product = product.to_lowercase();
        let side = role.counterparty_side();
        let mut matches: Vec<MatchResult> = listings
            .iter()
            .filter(|listing| {
                listing.side() == side && listing.product_name().to_lowercase() == product
            })
            .filter_map(|listing| {
                let score = quantity_subscore(request, listing) + price_subscore(request, listing, role);
                (score > 0).then(|| MatchResult::new(listing.clone(), score))
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| match role {
                Role::Buyer => a.listing.price_per_unit().cmp(&b.listing.price_per_unit()),
                Role::Seller => b.listing.price_per_unit().cmp(&a.listing.price_per_unit()),
            })
        });
        matches.truncate(Self::MAX_RESULTS);
        matches
    }
}

/// Compatibility gate for optional units and currencies: both present and
/// equal, or both absent.
fn both_or_neither<T: PartialEq>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        (None, None) => true,
        _ => false,
    }
}

/// Quantity sub-score, 0-5.
///
/// Scores only when the request declares a quantity and the units are
/// compatible. The absolute difference is banded relative to the requested
/// quantity.
fn quantity_subscore(request: &TradeRequest, listing: &Listing) -> u8 {
    let Some(requested) = request.quantity() else {
        return 0;
    };
    if !both_or_neither(request.unit(), listing.unit()) {
        return 0;
    }

    let diff = requested.abs_diff(listing.quantity());
    let target = requested.get();
    if diff.is_zero() {
        5
    } else if diff <= target * Decimal::new(5, 2) {
        4
    } else if diff <= target * Decimal::new(10, 2) {
        3
    } else if diff <= target * Decimal::new(25, 2) {
        2
    } else if diff <= target * Decimal::new(50, 2) {
        1
    } else {
        0
    }
}

/// Price sub-score, 0-5, role-asymmetric.
///
/// Scores only when the request declares a price and the currencies are
/// compatible. Buyers prefer listing prices at or below the requested
/// price; sellers prefer at or above. Both directions use the same band
/// widths.
fn price_subscore(request: &TradeRequest, listing: &Listing, role: Role) -> u8 {
    let Some(target) = request.price() else {
        return 0;
    };
    if !both_or_neither(request.currency(), listing.currency()) {
        return 0;
    }

    let listed = listing.price_per_unit().get();
    let target = target.get();
    match role {
        Role::Buyer => {
            if listed <= target {
                5
            } else if listed <= target * Decimal::new(105, 2) {
                4
            } else if listed <= target * Decimal::new(110, 2) {
                3
            } else if listed <= target * Decimal::new(120, 2) {
                2
            } else if listed <= target * Decimal::new(150, 2) {
                1
            } else {
                0
            }
        }
        Role::Seller => {
            if listed >= target {
                5
            } else if listed >= target * Decimal::new(95, 2) {
                4
            } else if listed >= target * Decimal::new(90, 2) {
                3
            } else if listed >= target * Decimal::new(80, 2) {
                2
            } else if listed >= target * Decimal::new(50, 2) {
                1
            } else {
                0
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        Currency, ListingId, ListingSide, Price, Quantity, Unit, UserId,
    };

    fn listing(
        id: u64,
        owner: &str,
        side: ListingSide,
        product: &str,
        quantity: f64,
        unit: Option<&str>,
        price: f64,
        currency: Option<&str>,
    ) -> Listing {
        Listing::new(
            ListingId::new(id),
            UserId::new(owner).unwrap(),
            side,
            product,
            Quantity::new(quantity).unwrap(),
            unit.map(|u| Unit::new(u).unwrap()),
            Price::new(price).unwrap(),
            currency.map(|c| Currency::new(c).unwrap()),
        )
        .unwrap()
    }

    fn selling(id: u64, owner: &str, product: &str, quantity: f64, price: f64) -> Listing {
        listing(
            id,
            owner,
            ListingSide::Selling,
            product,
            quantity,
            Some("kg"),
            price,
            Some("rupees"),
        )
    }

    fn full_request(product: &str, quantity: f64, price: f64) -> TradeRequest {
        TradeRequest::builder()
            .product(product)
            .quantity(Quantity::new(quantity).unwrap())
            .unit(Unit::new("kg").unwrap())
            .price(Price::new(price).unwrap())
            .currency(Currency::new("rupees").unwrap())
            .build()
    }

    mod preconditions {
        use super::*;

        #[test]
        fn no_product_yields_empty() {
            let engine = MatchingEngine::new();
            let listings = vec![selling(1, "seller_A", "apples", 100.0, 9.0)];
            let request = TradeRequest::default();

            assert!(engine.rank(&request, &listings, Role::Buyer).is_empty());
            assert!(engine.rank(&request, &listings, Role::Seller).is_empty());
        }

        #[test]
        fn empty_product_yields_empty() {
            let engine = MatchingEngine::new();
            let listings = vec![selling(1, "seller_A", "apples", 100.0, 9.0)];
            let request = TradeRequest::builder().product("  ").build();

            assert!(engine.rank(&request, &listings, Role::Buyer).is_empty());
        }

        #[test]
        fn product_only_match_is_dropped() {
            // Product matches but no quantity/price data: total score 0,
            // retention rule drops it.
            let engine = MatchingEngine::new();
            let listings = vec![selling(1, "seller_A", "apples", 100.0, 9.0)];
            let request = TradeRequest::builder().product("apples").build();

            assert!(engine.rank(&request, &listings, Role::Buyer).is_empty());
        }
    }

    mod eligibility {
        use super::*;

        #[test]
        fn buyer_only_sees_selling_listings() {
            let engine = MatchingEngine::new();
            let listings = vec![listing(
                1,
                "buyer_X",
                ListingSide::Buying,
                "apples",
                100.0,
                Some("kg"),
                9.0,
                Some("rupees"),
            )];
            let request = full_request("apples", 100.0, 10.0);

            assert!(engine.rank(&request, &listings, Role::Buyer).is_empty());
            assert_eq!(engine.rank(&request, &listings, Role::Seller).len(), 1);
        }

        #[test]
        fn product_comparison_is_case_insensitive() {
            let engine = MatchingEngine::new();
            let listings = vec![selling(1, "seller_A", "Apples", 100.0, 9.0)];
            let request = full_request("APPLES", 100.0, 10.0);

            assert_eq!(engine.rank(&request, &listings, Role::Buyer).len(), 1);
        }

        #[test]
        fn product_comparison_folds_unicode_case() {
            let engine = MatchingEngine::new();
            let listings = vec![selling(1, "seller_A", "CAFÉ", 100.0, 9.0)];
            let request = full_request("café", 100.0, 10.0);

            assert_eq!(engine.rank(&request, &listings, Role::Buyer).len(), 1);
        }

        #[test]
        fn different_product_is_ignored() {
            let engine = MatchingEngine::new();
            let listings = vec![selling(1, "seller_A", "rice", 100.0, 9.0)];
            let request = full_request("apples", 100.0, 10.0);

            assert!(engine.rank(&request, &listings, Role::Buyer).is_empty());
        }
    }

    mod quantity_bands {
        use super::*;

        fn quantity_score(listing_quantity: f64) -> u8 {
            let request = TradeRequest::builder()
                .product("apples")
                .quantity(Quantity::new(100.0).unwrap())
                .unit(Unit::new("kg").unwrap())
                .build();
            quantity_subscore(&request, &selling(1, "seller_A", "apples", listing_quantity, 9.0))
        }

        #[test]
        fn exact_match_scores_five() {
            assert_eq!(quantity_score(100.0), 5);
        }

        #[test]
        fn five_percent_boundary_scores_four() {
            assert_eq!(quantity_score(105.0), 4);
            assert_eq!(quantity_score(95.0), 4);
        }

        #[test]
        fn ten_percent_boundary_scores_three() {
            assert_eq!(quantity_score(110.0), 3);
            assert_eq!(quantity_score(90.0), 3);
        }

        #[test]
        fn twenty_five_percent_boundary_scores_two() {
            assert_eq!(quantity_score(125.0), 2);
            assert_eq!(quantity_score(80.0), 2);
        }

        #[test]
        fn fifty_percent_boundary_scores_one() {
            assert_eq!(quantity_score(150.0), 1);
            assert_eq!(quantity_score(50.0), 1);
        }

        #[test]
        fn beyond_fifty_percent_scores_zero() {
            assert_eq!(quantity_score(151.0), 0);
            assert_eq!(quantity_score(49.0), 0);
        }

        #[test]
        fn absent_request_quantity_scores_zero() {
            let request = TradeRequest::builder().product("apples").build();
            let score = quantity_subscore(&request, &selling(1, "seller_A", "apples", 100.0, 9.0));
            assert_eq!(score, 0);
        }

        #[test]
        fn unit_mismatch_scores_zero() {
            let request = TradeRequest::builder()
                .product("tea")
                .quantity(Quantity::new(500.0).unwrap())
                .unit(Unit::new("kg").unwrap())
                .build();
            let gram_listing = listing(
                1,
                "seller_H",
                ListingSide::Selling,
                "tea",
                500.0,
                Some("gram"),
                15.0,
                Some("rupees"),
            );
            assert_eq!(quantity_subscore(&request, &gram_listing), 0);
        }

        #[test]
        fn one_sided_unit_scores_zero() {
            let request = TradeRequest::builder()
                .product("apples")
                .quantity(Quantity::new(100.0).unwrap())
                .build();
            let with_unit = selling(1, "seller_A", "apples", 100.0, 9.0);
            assert_eq!(quantity_subscore(&request, &with_unit), 0);
        }

        #[test]
        fn both_units_absent_still_scores() {
            let request = TradeRequest::builder()
                .product("apples")
                .quantity(Quantity::new(100.0).unwrap())
                .build();
            let unitless = listing(
                1,
                "seller_A",
                ListingSide::Selling,
                "apples",
                100.0,
                None,
                9.0,
                Some("rupees"),
            );
            assert_eq!(quantity_subscore(&request, &unitless), 5);
        }
    }

    mod price_bands {
        use super::*;

        fn price_score(listing_price: f64, role: Role) -> u8 {
            let request = TradeRequest::builder()
                .product("apples")
                .price(Price::new(10.0).unwrap())
                .currency(Currency::new("rupees").unwrap())
                .build();
            price_subscore(
                &request,
                &selling(1, "seller_A", "apples", 100.0, listing_price),
                role,
            )
        }

        #[test]
        fn buyer_at_or_below_target_scores_five() {
            assert_eq!(price_score(10.0, Role::Buyer), 5);
            assert_eq!(price_score(9.0, Role::Buyer), 5);
        }

        #[test]
        fn buyer_bands_above_target() {
            assert_eq!(price_score(10.5, Role::Buyer), 4);
            assert_eq!(price_score(11.0, Role::Buyer), 3);
            assert_eq!(price_score(12.0, Role::Buyer), 2);
            assert_eq!(price_score(15.0, Role::Buyer), 1);
            assert_eq!(price_score(15.01, Role::Buyer), 0);
        }

        #[test]
        fn seller_at_or_above_target_scores_five() {
            assert_eq!(price_score(10.0, Role::Seller), 5);
            assert_eq!(price_score(11.0, Role::Seller), 5);
        }

        #[test]
        fn seller_bands_below_target() {
            assert_eq!(price_score(9.5, Role::Seller), 4);
            assert_eq!(price_score(9.0, Role::Seller), 3);
            assert_eq!(price_score(8.0, Role::Seller), 2);
            assert_eq!(price_score(5.0, Role::Seller), 1);
            assert_eq!(price_score(4.99, Role::Seller), 0);
        }

        #[test]
        fn currency_mismatch_scores_zero() {
            let request = TradeRequest::builder()
                .product("apples")
                .price(Price::new(10.0).unwrap())
                .currency(Currency::new("dollars").unwrap())
                .build();
            let score = price_subscore(
                &request,
                &selling(1, "seller_A", "apples", 100.0, 9.0),
                Role::Buyer,
            );
            assert_eq!(score, 0);
        }

        #[test]
        fn absent_request_price_scores_zero() {
            let request = TradeRequest::builder().product("apples").build();
            let score = price_subscore(
                &request,
                &selling(1, "seller_A", "apples", 100.0, 9.0),
                Role::Buyer,
            );
            assert_eq!(score, 0);
        }
    }

    mod ranking {
        use super::*;

        #[test]
        fn reference_scenario_orders_sellers() {
            // Request: 100 kg apples at 10 rupees, role buyer.
            // seller_A: 100kg @ 9  -> qty 5 + price 5 = 10
            // seller_C: 90kg  @ 10 -> qty 3 + price 5 = 8
            // seller_B: 120kg @ 11 -> qty 2 + price 3 = 5
            let engine = MatchingEngine::new();
            let listings = vec![
                selling(1, "seller_A", "apples", 100.0, 9.0),
                selling(2, "seller_B", "apples", 120.0, 11.0),
                selling(3, "seller_C", "apples", 90.0, 10.0),
            ];
            let request = full_request("apples", 100.0, 10.0);

            let ranked = engine.rank(&request, &listings, Role::Buyer);

            assert_eq!(ranked.len(), 3);
            assert_eq!(ranked[0].listing.owner().as_str(), "seller_A");
            assert_eq!(ranked[0].score, 10);
            assert_eq!(ranked[1].listing.owner().as_str(), "seller_C");
            assert_eq!(ranked[1].score, 8);
            assert_eq!(ranked[2].listing.owner().as_str(), "seller_B");
            assert_eq!(ranked[2].score, 5);
        }

        #[test]
        fn tie_break_prefers_cheaper_for_buyer() {
            let engine = MatchingEngine::new();
            let listings = vec![
                selling(1, "seller_A", "apples", 100.0, 9.5),
                selling(2, "seller_B", "apples", 100.0, 9.0),
            ];
            let request = full_request("apples", 100.0, 10.0);

            let ranked = engine.rank(&request, &listings, Role::Buyer);
            assert_eq!(ranked[0].score, ranked[1].score);
            assert_eq!(ranked[0].listing.owner().as_str(), "seller_B");
        }

        #[test]
        fn tie_break_prefers_pricier_for_seller() {
            let engine = MatchingEngine::new();
            let buying = |id, owner, price| {
                listing(
                    id,
                    owner,
                    ListingSide::Buying,
                    "apples",
                    100.0,
                    Some("kg"),
                    price,
                    Some("rupees"),
                )
            };
            let listings = vec![buying(1, "buyer_X", 10.5), buying(2, "buyer_Y", 11.0)];
            let request = full_request("apples", 100.0, 10.0);

            let ranked = engine.rank(&request, &listings, Role::Seller);
            assert_eq!(ranked[0].score, ranked[1].score);
            assert_eq!(ranked[0].listing.owner().as_str(), "buyer_Y");
        }

        #[test]
        fn returns_at_most_three() {
            let engine = MatchingEngine::new();
            let listings: Vec<Listing> = (1..=5)
                .map(|i| selling(i, &format!("seller_{i}"), "apples", 100.0, 9.0))
                .collect();
            let request = full_request("apples", 100.0, 10.0);

            let ranked = engine.rank(&request, &listings, Role::Buyer);
            assert_eq!(ranked.len(), MatchingEngine::MAX_RESULTS);
        }

        #[test]
        fn scores_stay_in_bounds() {
            let engine = MatchingEngine::new();
            let listings: Vec<Listing> = (1..=20)
                .map(|i| {
                    selling(
                        i,
                        &format!("seller_{i}"),
                        "apples",
                        50.0 + i as f64 * 10.0,
                        5.0 + i as f64,
                    )
                })
                .collect();
            let request = full_request("apples", 100.0, 10.0);

            for result in engine.rank(&request, &listings, Role::Buyer) {
                assert!((1..=10).contains(&result.score));
            }
        }

        #[test]
        fn role_symmetry_holds() {
            // Swapping the role and flipping every listing side yields the
            // same ranked output.
            let engine = MatchingEngine::new();
            let request = full_request("apples", 100.0, 10.0);

            // Listing prices sit at the requested price so the price
            // sub-score is 5 for either role and the comparison is exact.
            let as_selling: Vec<Listing> = vec![
                selling(1, "p1", "apples", 100.0, 10.0),
                selling(2, "p2", "apples", 120.0, 10.0),
                selling(3, "p3", "apples", 90.0, 10.0),
            ];
            let as_buying: Vec<Listing> = as_selling
                .iter()
                .map(|l| {
                    Listing::new(
                        l.id(),
                        l.owner().clone(),
                        l.side().opposite(),
                        l.product_name(),
                        l.quantity(),
                        l.unit().cloned(),
                        l.price_per_unit(),
                        l.currency().cloned(),
                    )
                    .unwrap()
                })
                .collect();

            let buyer_view = engine.rank(&request, &as_selling, Role::Buyer);
            let seller_view = engine.rank(&request, &as_buying, Role::Seller);

            let buyer_scores: Vec<(u8, &str)> = buyer_view
                .iter()
                .map(|m| (m.score, m.listing.owner().as_str()))
                .collect();
            let seller_scores: Vec<(u8, &str)> = seller_view
                .iter()
                .map(|m| (m.score, m.listing.owner().as_str()))
                .collect();
            assert_eq!(buyer_scores, seller_scores);
        }

        #[test]
        fn rank_is_idempotent() {
            let engine = MatchingEngine::new();
            let listings = vec![
                selling(1, "seller_A", "apples", 100.0, 9.0),
                selling(2, "seller_B", "apples", 120.0, 11.0),
            ];
            let request = full_request("apples", 100.0, 10.0);

            let first = engine.rank(&request, &listings, Role::Buyer);
            let second = engine.rank(&request, &listings, Role::Buyer);
            assert_eq!(first, second);
        }

        #[test]
        fn unit_mismatch_leaves_price_dimension() {
            // kg vs gram disables the quantity sub-score; the price
            // sub-score alone keeps the listing in the result.
            let engine = MatchingEngine::new();
            let gram_listing = listing(
                1,
                "seller_H",
                ListingSide::Selling,
                "tea",
                500.0,
                Some("gram"),
                15.0,
                Some("rupees"),
            );
            let request = TradeRequest::builder()
                .product("tea")
                .quantity(Quantity::new(500.0).unwrap())
                .unit(Unit::new("kg").unwrap())
                .price(Price::new(15.0).unwrap())
                .currency(Currency::new("rupees").unwrap())
                .build();

            let ranked = engine.rank(&request, &[gram_listing], Role::Buyer);
            assert_eq!(ranked.len(), 1);
            assert_eq!(ranked[0].score, 5);
        }
    }
}

//! # Delivery Pricing
//!
//! Shared pricing library for the Dona Capivara storefront backend.
//!
//! ## Strategies
//!
//! Two delivery-fee rules ship side by side and are selected per deployment,
//! never mixed:
//!
//! - **Flat-rate** ([`fee::flat_fee`]): base + per-km rate with a price
//!   floor, a neighbor discount inside a fixed radius, and ceiling rounding
//!   to 0,50 increments. Needs only a zone classification and a distance,
//!   no network.
//!
//! - **Geocoded** ([`geo::geo_fee`]): resolve the customer address to a
//!   coordinate, ask the routing service for the real road distance from
//!   the store, then charge one of two tiers (free inside the radius, one
//!   flat amount outside).
//!
//! ## Collaborators
//!
//! The geocoded rule talks to two external services. Both sit behind small
//! traits ([`geo::Geocode`], [`geo::RoadDistance`]) so the fee logic tests
//! against fixed fakes instead of the live API. [`geo::GeoapifyClient`]
//! implements both against the Geoapify endpoints in [`models`].
//!
//! A failed lookup never turns into a fee. Charging the wrong delivery
//! amount is a direct financial error, so every failure surfaces as a
//! distinct [`error::QuoteError`] and the caller decides what to do with
//! the order.

pub mod error;
pub mod fee;
pub mod geo;
pub mod models;

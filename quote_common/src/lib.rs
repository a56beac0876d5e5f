//!
//! Domain types and pure logic behind the residential quote service.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `tier` — service tiers and the fixed `PricingTable`.
//! - `calculator` — request validation and the elevator quote formula.
//! - `agents` — the static agent roster and region averages.
//! - `contact` — contact form validation.
#![warn(missing_docs)]
pub mod agents;
pub mod calculator;
pub mod contact;
pub mod error;
pub mod result;
pub mod tier;

pub use calculator::{QuoteCalculator, QuoteRequest, QuoteResult};
pub use error::QuoteError;
pub use result::Result;
pub use tier::{PricingTable, PricingTier, Tier};

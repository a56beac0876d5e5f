//! Service tiers and the fixed pricing table.
//!
//! The table is built once at startup and never mutated afterwards; callers hold
//! it by reference (or behind an `Arc`) and only ever read from it.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::QuoteError;
use crate::result::Result;

/// Residential service tier.
///
/// Parsing is case-sensitive: only the lowercase names are accepted.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Standard,
    Premium,
    Excelium,
}

impl Tier {
    /// Resolve a raw, possibly missing, tier name.
    pub fn from_input(raw: Option<&str>) -> Result<Self> {
        let raw = raw.unwrap_or_default();
        raw.parse::<Self>()
            .map_err(|_| QuoteError::UnknownTier(raw.to_string()))
    }
}

/// Price of one elevator and the installation surcharge for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    /// Currency amount per elevator.
    pub unit_price: Decimal,
    /// Fraction of the unit cost charged for installation, between 0 and 1.
    pub install_rate: Decimal,
}

impl PricingTier {
    /// Build a tier from a whole unit price and an install rate in percent.
    pub fn new(unit_price: i64, install_percent: i64) -> Self {
        Self {
            unit_price: Decimal::new(unit_price, 0),
            install_rate: Decimal::new(install_percent, 2),
        }
    }
}

/// Immutable mapping from tier to its pricing.
#[derive(Debug, Clone)]
pub struct PricingTable {
    tiers: HashMap<Tier, PricingTier>,
}

impl PricingTable {
    /// The residential price list.
    pub fn residential() -> Self {
        Self::from_entries([
            (Tier::Standard, PricingTier::new(7565, 10)),
            (Tier::Premium, PricingTier::new(12345, 13)),
            (Tier::Excelium, PricingTier::new(15400, 16)),
        ])
    }

    /// Build a table from arbitrary entries. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Tier, PricingTier)>,
    {
        Self {
            tiers: entries.into_iter().collect(),
        }
    }

    /// Pricing for `tier`, if the table carries it.
    pub fn get(&self, tier: Tier) -> Option<&PricingTier> {
        self.tiers.get(&tier)
    }

    /// Entries in tier declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Tier, &PricingTier)> {
        Tier::iter().filter_map(|tier| self.tiers.get(&tier).map(|p| (tier, p)))
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::residential()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_names_are_case_sensitive() {
        assert_eq!(Tier::from_input(Some("premium")), Ok(Tier::Premium));
        assert_eq!(
            Tier::from_input(Some("Premium")),
            Err(QuoteError::UnknownTier("Premium".into()))
        );
        assert_eq!(
            Tier::from_input(Some("luxury")),
            Err(QuoteError::UnknownTier("luxury".into()))
        );
        assert_eq!(
            Tier::from_input(None),
            Err(QuoteError::UnknownTier(String::new()))
        );
    }

    #[test]
    fn display_uses_lowercase_names() {
        let names: Vec<String> = Tier::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["standard", "premium", "excelium"]);
    }

    #[test]
    fn tiers_serialize_as_lowercase_names() {
        let tiers: Vec<Tier> = PricingTable::residential().entries().map(|(t, _)| t).collect();
        assert_eq!(
            serde_json::to_value(tiers).unwrap(),
            serde_json::json!(["standard", "premium", "excelium"])
        );
    }

    #[test]
    fn residential_table_has_every_tier() {
        let table = PricingTable::residential();
        let premium = table.get(Tier::Premium).copied();
        assert_eq!(
            premium,
            Some(PricingTier {
                unit_price: Decimal::new(12345, 0),
                install_rate: Decimal::new(13, 2),
            })
        );
        assert_eq!(table.entries().count(), 3);
    }

    #[test]
    fn partial_table_skips_missing_tiers() {
        let table = PricingTable::from_entries([(Tier::Excelium, PricingTier::new(1, 0))]);
        assert!(table.get(Tier::Standard).is_none());
        let tiers: Vec<Tier> = table.entries().map(|(t, _)| t).collect();
        assert_eq!(tiers, [Tier::Excelium]);
    }
}

//! Sales agents and per-region aggregates.
//!
//! The directory is a fixed in-memory list loaded at startup. Region lookups are
//! linear, case-insensitive filters; averages are arithmetic means rounded to
//! two decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::QuoteError;
use crate::result::Result;

/// A single sales agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact address.
    pub email: String,
    /// Sales region, lowercase.
    pub region: String,
    /// Customer rating out of 5.
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    /// Commission fee per sale.
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
}

impl AgentRecord {
    /// Build a record; `rating_tenths` is the rating times ten (45 = 4.5).
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        region: &str,
        rating_tenths: i64,
        fee: i64,
    ) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            region: region.to_string(),
            rating: Decimal::new(rating_tenths, 1),
            fee: Decimal::new(fee, 0),
        }
    }

    /// `true` when the agent works in `region`, ignoring ASCII case.
    pub fn works_in(&self, region: &str) -> bool {
        self.region.eq_ignore_ascii_case(region.trim())
    }
}

/// Mean rating and fee over one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionAverage {
    /// Region as requested, trimmed and lowercased.
    pub region: String,
    /// Agents the means were taken over.
    pub agent_count: usize,
    /// Mean rating, two decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_rating: Decimal,
    /// Mean fee, two decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_fee: Decimal,
}

/// Read-only list of agents.
#[derive(Debug, Clone, Default)]
pub struct AgentDirectory {
    agents: Vec<AgentRecord>,
}

impl AgentDirectory {
    /// Wrap an explicit list.
    pub fn new(agents: Vec<AgentRecord>) -> Self {
        Self { agents }
    }

    /// The built-in mock roster.
    pub fn seeded() -> Self {
        Self::new(vec![
            AgentRecord::new("Ava", "Tremblay", "ava.tremblay@example.com", "north", 45, 12000),
            AgentRecord::new("Liam", "Gagnon", "liam.gagnon@example.com", "north", 48, 15000),
            AgentRecord::new("Noah", "Roy", "noah.roy@example.com", "north", 39, 9500),
            AgentRecord::new("Emma", "Cote", "emma.cote@example.com", "south", 42, 11000),
            AgentRecord::new("Olivia", "Bouchard", "olivia.bouchard@example.com", "south", 47, 13500),
            AgentRecord::new("Lucas", "Gauthier", "lucas.gauthier@example.com", "east", 50, 17000),
            AgentRecord::new("Chloe", "Morin", "chloe.morin@example.com", "east", 36, 8000),
            AgentRecord::new("Nathan", "Lavoie", "nathan.lavoie@example.com", "east", 44, 10500),
            AgentRecord::new("Zoe", "Fortin", "zoe.fortin@example.com", "west", 41, 9900),
        ])
    }

    /// Every agent in roster order.
    pub fn all(&self) -> &[AgentRecord] {
        &self.agents
    }

    /// Agents working in `region` (case-insensitive), in roster order.
    pub fn in_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a AgentRecord> + 'a {
        self.agents.iter().filter(move |agent| agent.works_in(region))
    }

    /// Mean rating and fee for `region`.
    pub fn region_average(&self, region: Option<&str>) -> Result<RegionAverage> {
        let region = region.map(str::trim).unwrap_or_default();
        if region.is_empty() {
            return Err(QuoteError::MissingRegion);
        }

        let (count, rating_sum, fee_sum) = self.in_region(region).fold(
            (0usize, Decimal::ZERO, Decimal::ZERO),
            |(count, rating, fee), agent| (count + 1, rating + agent.rating, fee + agent.fee),
        );
        if count == 0 {
            return Err(QuoteError::UnknownRegion(region.to_string()));
        }

        let divisor = Decimal::from(count);
        Ok(RegionAverage {
            region: region.to_ascii_lowercase(),
            agent_count: count,
            average_rating: mean(rating_sum, divisor)?,
            average_fee: mean(fee_sum, divisor)?,
        })
    }
}

fn mean(sum: Decimal, divisor: Decimal) -> Result<Decimal> {
    let mut value = sum
        .checked_div(divisor)
        .ok_or_else(|| QuoteError::Computation("average out of range".into()))?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    Ok(value)
}

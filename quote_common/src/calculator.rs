//! Residential elevator quote calculator.
//!
//! Two steps, kept apart so that a caller holding already-typed values can skip
//! string validation:
//!
//! - [`QuoteRequest::parse`] turns untrusted text into a validated request. Checks
//!   run in stages over both numeric fields (number, then whole number, then
//!   positive) and only then look at the tier, so `apartments=0&floors=-5&tier=x`
//!   reports the non-positive input rather than the tier.
//! - [`QuoteCalculator::compute_quote`] applies the pricing formula to a valid
//!   request using a borrowed, read-only [`PricingTable`].
//!
//! Costs are exact decimals; the total is rounded to cents with midpoint values
//! rounded away from zero.

use std::num::IntErrorKind;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::{InputField, QuoteError};
use crate::result::Result;
use crate::tier::{PricingTable, Tier};

/// Apartments served by a single elevator on one floor.
const APARTMENTS_PER_ELEVATOR: f64 = 6.0;
/// Floors served by one elevator column.
const FLOORS_PER_COLUMN: f64 = 20.0;
/// Decimal places of the quoted total.
const CURRENCY_SCALE: u32 = 2;

/// Validated quote input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteRequest {
    apartments: u32,
    floors: u32,
    tier: Tier,
}

/// Elevators required and what they cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Total elevators over all columns.
    pub elevators_required: u64,
    /// Unit plus installation cost, rounded to two decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,
}

/// Shape of a numeric field after the first validation stage.
#[derive(Debug, Clone, Copy)]
enum Numeric {
    Whole(i64),
    Fractional,
}

#[derive(Debug, Clone, Copy)]
struct NumericInput<'a> {
    field: InputField,
    raw: &'a str,
    value: Numeric,
}

impl<'a> NumericInput<'a> {
    fn read(field: InputField, raw: Option<&'a str>) -> Result<Self> {
        let raw = raw.unwrap_or_default();
        let text = raw.trim();
        let invalid = || QuoteError::InvalidNumber {
            field,
            value: raw.to_string(),
        };

        let value = match text.parse::<i64>() {
            Ok(v) if v > i64::from(u32::MAX) => return Err(invalid()),
            Ok(v) => Numeric::Whole(v),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Err(invalid());
            }
            // Anything float-shaped is a number, just not a whole one.
            Err(_) => match text.parse::<f64>() {
                Ok(v) if v.is_finite() => Numeric::Fractional,
                _ => return Err(invalid()),
            },
        };
        Ok(Self { field, raw, value })
    }

    fn whole(self) -> Result<i64> {
        match self.value {
            Numeric::Whole(v) => Ok(v),
            Numeric::Fractional => Err(QuoteError::NonIntegerInput {
                field: self.field,
                value: self.raw.to_string(),
            }),
        }
    }
}

fn positive(field: InputField, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(QuoteError::NonPositiveInput { field, value });
    }
    u32::try_from(value).map_err(|_| QuoteError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl QuoteRequest {
    /// Validate raw request parameters.
    ///
    /// Missing numeric fields are reported as [`QuoteError::InvalidNumber`], a
    /// missing tier as [`QuoteError::UnknownTier`].
    pub fn parse(
        apartments: Option<&str>,
        floors: Option<&str>,
        tier: Option<&str>,
    ) -> Result<Self> {
        let apartments = NumericInput::read(InputField::Apartments, apartments)?;
        let floors = NumericInput::read(InputField::Floors, floors)?;

        let apartments = apartments.whole()?;
        let floors = floors.whole()?;

        let apartments = positive(InputField::Apartments, apartments)?;
        let floors = positive(InputField::Floors, floors)?;

        Ok(Self {
            apartments,
            floors,
            tier: Tier::from_input(tier)?,
        })
    }

    /// Build a request from already-typed values, checking positivity.
    pub fn try_new(apartments: i64, floors: i64, tier: Tier) -> Result<Self> {
        Ok(Self {
            apartments: positive(InputField::Apartments, apartments)?,
            floors: positive(InputField::Floors, floors)?,
            tier,
        })
    }

    /// Number of apartments in the building.
    pub fn apartments(&self) -> u32 {
        self.apartments
    }

    /// Number of floors in the building.
    pub fn floors(&self) -> u32 {
        self.floors
    }

    /// Requested service tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }
}

/// Elevators needed for a building of `apartments` units over `floors` floors.
///
/// The per-floor density uses real division before rounding up, so 80 units on
/// 10 floors (8 per floor) needs two elevators per column.
pub fn elevators_required(apartments: u32, floors: u32) -> u64 {
    let apartments_per_floor = f64::from(apartments) / f64::from(floors);
    let elevators_per_column = (apartments_per_floor / APARTMENTS_PER_ELEVATOR).ceil();
    let columns = (f64::from(floors) / FLOORS_PER_COLUMN).ceil();
    // Both factors are positive and bounded by u32::MAX.
    elevators_per_column as u64 * columns as u64
}

/// Prices validated requests against a borrowed pricing table.
#[derive(Debug, Clone, Copy)]
pub struct QuoteCalculator<'a> {
    pricing: &'a PricingTable,
}

impl<'a> QuoteCalculator<'a> {
    /// Create a calculator reading from `pricing`.
    pub fn new(pricing: &'a PricingTable) -> Self {
        Self { pricing }
    }

    /// Compute the quote for a validated request.
    pub fn compute_quote(&self, request: &QuoteRequest) -> Result<QuoteResult> {
        let pricing = self.pricing.get(request.tier).ok_or_else(|| {
            QuoteError::Computation(format!("no pricing configured for tier {}", request.tier))
        })?;

        let elevators = elevators_required(request.apartments, request.floors);
        let overflow = || QuoteError::Computation("cost exceeds representable range".into());

        let unit_cost = Decimal::from(elevators)
            .checked_mul(pricing.unit_price)
            .ok_or_else(overflow)?;
        let install_cost = unit_cost
            .checked_mul(pricing.install_rate)
            .ok_or_else(overflow)?;
        let mut total_cost = unit_cost
            .checked_add(install_cost)
            .ok_or_else(overflow)?
            .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        total_cost.rescale(CURRENCY_SCALE);

        Ok(QuoteResult {
            elevators_required: elevators,
            total_cost,
        })
    }

    /// Validate raw parameters and compute the quote in one go.
    pub fn quote(
        &self,
        apartments: Option<&str>,
        floors: Option<&str>,
        tier: Option<&str>,
    ) -> Result<QuoteResult> {
        let request = QuoteRequest::parse(apartments, floors, tier)?;
        self.compute_quote(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::PricingTier;

    fn quote(apartments: &str, floors: &str, tier: &str) -> Result<QuoteResult> {
        let table = PricingTable::residential();
        QuoteCalculator::new(&table).quote(Some(apartments), Some(floors), Some(tier))
    }

    fn cents(value: i64) -> Decimal {
        Decimal::new(value, 2)
    }

    #[test]
    fn standard_quote() {
        let result = quote("80", "10", "standard").unwrap();
        assert_eq!(result.elevators_required, 2);
        assert_eq!(result.total_cost, cents(1_664_300));
        assert_eq!(result.total_cost.to_string(), "16643.00");
    }

    #[test]
    fn premium_quote() {
        let result = quote("100", "20", "premium").unwrap();
        assert_eq!(result.elevators_required, 1);
        assert_eq!(result.total_cost.to_string(), "13949.85");
    }

    #[test]
    fn excelium_quote_spans_two_columns() {
        let result = quote("150", "30", "excelium").unwrap();
        assert_eq!(result.elevators_required, 2);
        assert_eq!(result.total_cost.to_string(), "35728.00");
    }

    #[test]
    fn elevator_count_uses_real_division() {
        // 7 apartments on 1 floor still needs a second elevator.
        assert_eq!(elevators_required(7, 1), 2);
        assert_eq!(elevators_required(6, 1), 1);
        assert_eq!(elevators_required(1, 21), 2);
        assert_eq!(elevators_required(1, 1), 1);
    }

    #[test]
    fn unknown_tier_is_rejected() {
        assert_eq!(
            quote("80", "10", "luxury"),
            Err(QuoteError::UnknownTier("luxury".into()))
        );
    }

    #[test]
    fn missing_tier_is_rejected() {
        let table = PricingTable::residential();
        let err = QuoteCalculator::new(&table)
            .quote(Some("80"), Some("10"), None)
            .unwrap_err();
        assert_eq!(err.kind(), "unknown_tier");
    }

    #[test]
    fn text_is_not_a_number() {
        assert_eq!(
            quote("abc", "10", "standard"),
            Err(QuoteError::InvalidNumber {
                field: InputField::Apartments,
                value: "abc".into(),
            })
        );
        assert_eq!(quote("10", "", "standard").unwrap_err().kind(), "invalid_number");
        assert_eq!(quote("NaN", "10", "standard").unwrap_err().kind(), "invalid_number");
        assert_eq!(quote("inf", "10", "standard").unwrap_err().kind(), "invalid_number");
    }

    #[test]
    fn fractional_values_are_not_truncated() {
        assert_eq!(
            quote("10.0", "10", "standard"),
            Err(QuoteError::NonIntegerInput {
                field: InputField::Apartments,
                value: "10.0".into(),
            })
        );
        assert_eq!(quote("80", "2.5", "standard").unwrap_err().kind(), "non_integer_input");
    }

    #[test]
    fn non_positive_is_reported_before_tier() {
        assert_eq!(
            quote("0", "-5", "luxury"),
            Err(QuoteError::NonPositiveInput {
                field: InputField::Apartments,
                value: 0,
            })
        );
        assert_eq!(
            quote("5", "-5", "standard"),
            Err(QuoteError::NonPositiveInput {
                field: InputField::Floors,
                value: -5,
            })
        );
    }

    #[test]
    fn number_checks_cover_both_fields_before_integrality() {
        // floors is not a number, apartments is fractional: the number check wins.
        assert_eq!(quote("1.5", "x", "standard").unwrap_err().kind(), "invalid_number");
    }

    #[test]
    fn out_of_range_counts_are_invalid() {
        assert_eq!(quote("4294967296", "1", "standard").unwrap_err().kind(), "invalid_number");
        assert_eq!(
            quote("99999999999999999999", "1", "standard").unwrap_err().kind(),
            "invalid_number"
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(quote(" 80 ", "10", "standard").unwrap().elevators_required, 2);
    }

    #[test]
    fn largest_building_still_prices() {
        let result = quote("4294967295", "1", "excelium").unwrap();
        assert_eq!(result.elevators_required, 715_827_883);
    }

    #[test]
    fn repeated_calls_are_identical_and_leave_table_untouched() {
        let table = PricingTable::residential();
        let before = table.get(Tier::Premium).copied();
        let calculator = QuoteCalculator::new(&table);
        let request = QuoteRequest::try_new(100, 20, Tier::Premium).unwrap();

        let first = calculator.compute_quote(&request).unwrap();
        let second = calculator.compute_quote(&request).unwrap();
        assert_eq!(first, second);
        assert_eq!(table.get(Tier::Premium).copied(), before);
    }

    #[test]
    fn missing_table_entry_is_a_computation_error() {
        let table = PricingTable::from_entries([(Tier::Standard, PricingTier::new(7565, 10))]);
        let request = QuoteRequest::try_new(10, 2, Tier::Premium).unwrap();
        let err = QuoteCalculator::new(&table).compute_quote(&request).unwrap_err();
        assert!(matches!(err, QuoteError::Computation(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn midpoint_cents_round_up() {
        // 1 elevator at 0.05 with 10% install = 0.055 -> 0.06
        let table = PricingTable::from_entries([(
            Tier::Standard,
            PricingTier {
                unit_price: Decimal::new(5, 2),
                install_rate: Decimal::new(10, 2),
            },
        )]);
        let request = QuoteRequest::try_new(1, 1, Tier::Standard).unwrap();
        let result = QuoteCalculator::new(&table).compute_quote(&request).unwrap();
        assert_eq!(result.total_cost.to_string(), "0.06");
    }

    #[test]
    fn try_new_rejects_zero() {
        assert_eq!(
            QuoteRequest::try_new(10, 0, Tier::Standard),
            Err(QuoteError::NonPositiveInput {
                field: InputField::Floors,
                value: 0,
            })
        );
    }

    #[test]
    fn result_serializes_camel_case_numbers() {
        let result = quote("80", "10", "standard").unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["elevatorsRequired"], 2);
        assert_eq!(json["totalCost"].as_f64(), Some(16643.0));
    }
}

//! Error types shared between the calculator, the agent directory and the server.
//!
//! `QuoteError` covers every way a request can be rejected by the domain layer.
//! Each variant carries enough context to build a client-facing message and
//! exposes a stable snake_case [`QuoteError::kind`] used in HTTP error bodies.
use strum_macros::Display;
use thiserror::Error;

/// Numeric request field that failed validation.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputField {
    Apartments,
    Floors,
}

/// Unified domain error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// The value could not be read as a number at all (or does not fit the allowed range).
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber {
        /// Offending field.
        field: InputField,
        /// Raw input as received.
        value: String,
    },

    /// The value is numeric but not written as a whole number.
    #[error("{field} must be a whole number, got {value:?}")]
    NonIntegerInput {
        /// Offending field.
        field: InputField,
        /// Raw input as received.
        value: String,
    },

    /// The value is zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveInput {
        /// Offending field.
        field: InputField,
        /// Parsed value.
        value: i64,
    },

    /// Tier missing or not one of the known names.
    #[error("unknown tier {0:?}, expected one of: standard, premium, excelium")]
    UnknownTier(String),

    /// Internal inconsistency while computing a quote.
    #[error("quote computation failed: {0}")]
    Computation(String),

    /// Region query parameter absent or blank.
    #[error("region must be provided")]
    MissingRegion,

    /// No agent works in the requested region.
    #[error("no agents found in region {0:?}")]
    UnknownRegion(String),

    /// Contact form payload failed a presence/shape check.
    #[error("invalid contact request: {0}")]
    InvalidContact(String),
}

impl QuoteError {
    /// Stable machine-readable name of the error.
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::InvalidNumber { .. } => "invalid_number",
            QuoteError::NonIntegerInput { .. } => "non_integer_input",
            QuoteError::NonPositiveInput { .. } => "non_positive_input",
            QuoteError::UnknownTier(_) => "unknown_tier",
            QuoteError::Computation(_) => "computation_error",
            QuoteError::MissingRegion => "missing_region",
            QuoteError::UnknownRegion(_) => "unknown_region",
            QuoteError::InvalidContact(_) => "invalid_contact",
        }
    }

    /// `true` when the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, QuoteError::Computation(_))
    }
}

//! Error Types for the Site Core

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, SiteError>;

/// Catalog, content and configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A catalog must offer at least one tier
    #[error("Catalog has no tiers")]
    EmptyCatalog,

    /// Two tiers share the same slug
    #[error("Duplicate tier id: {0}")]
    DuplicateTier(String),

    /// A numeric price below zero
    #[error("Tier {tier} has a negative {frequency} price: {amount}")]
    NegativePrice {
        tier: String,
        frequency: &'static str,
        amount: Decimal,
    },

    /// Lookup of a slug that is not in the catalog
    #[error("Tier not found: {0}")]
    UnknownTier(String),

    /// Billing frequency other than monthly/yearly
    #[error("Unknown billing frequency: {0}")]
    UnknownFrequency(String),

    /// Rotations need something to rotate through
    #[error("Cannot rotate through an empty sequence")]
    EmptySequence,

    #[error("Index {index} out of range for sequence of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SiteError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            SiteError::UnknownTier(_) => "That plan is no longer available.",
            SiteError::UnknownFrequency(_) => "Please choose monthly or yearly billing.",
            SiteError::Config(_) => "Site configuration error.",
            _ => "Something went wrong loading this page.",
        }
    }
}

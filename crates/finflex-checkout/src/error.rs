//! Checkout Error Types

use finflex_core::SiteError;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Checkout flow errors.
///
/// None of these model a declined payment or failed sign-in; the stubs
/// cannot fail. They report calls made in the wrong state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Action not allowed in the current state
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    /// Catalog lookup failed
    #[error(transparent)]
    Site(#[from] SiteError),
}

impl CheckoutError {
    pub(crate) fn transition(from: &'static str, action: &'static str) -> Self {
        CheckoutError::InvalidTransition { from, action }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            CheckoutError::InvalidTransition { .. } => "Please wait for the current step to finish.",
            CheckoutError::Site(err) => err.user_message(),
        }
    }
}

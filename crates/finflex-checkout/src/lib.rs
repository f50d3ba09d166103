//! # finflex-checkout
//!
//! Plan selection, the sign-in stub and the simulated payment behind the
//! FinFlex pricing section.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  offer  ┌─────────┐  take  ┌──────────────────────────┐
//! │   Pricing   │────────▶│ Handoff │───────▶│        /signin           │
//! │ (selector)  │         └─────────┘        │  Auth ──▶ Payment ──▶ ✓  │
//! └─────────────┘                            └──────────────────────────┘
//! ```
//!
//! Nothing here talks to a payment provider or identity service. Sign-in
//! accepts any input and payment succeeds after a fixed delay.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! use finflex_checkout::{CheckoutFlow, Handoff, PlanSelector};
//! use finflex_core::{BillingFrequency, Catalog};
//!
//! let mut selector = PlanSelector::new(Catalog::finflex());
//! selector.set_frequency(BillingFrequency::Yearly);
//!
//! let mut handoff = Handoff::new();
//! handoff.offer(selector.select("teams")?);
//!
//! let mut flow = CheckoutFlow::new(handoff.take(), Duration::from_secs(2));
//! flow.submit_auth()?;
//! let delay = flow.pay()?;
//! // ...after `delay`
//! flow.settle()?;
//! ```

pub mod auth;
pub mod error;
pub mod flow;
pub mod handoff;
pub mod payment;
pub mod selection;

pub use auth::{AuthForm, AuthMode, AuthStub, Proceed};
pub use error::{CheckoutError, Result};
pub use flow::{CheckoutFlow, CheckoutStep};
pub use handoff::Handoff;
pub use payment::{display_price, CardField, PaymentMethod, PaymentPhase, PaymentStub, PaymentSummary};
pub use selection::{PlanSelector, SelectionPayload};

//! # finflex-core
//!
//! Plan catalog, page content and the small amount of client-side motion
//! logic behind the FinFlex marketing site.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────┐   ┌──────────┐   ┌─────────┐   ┌──────┐   ┌─────────┐
//! │ Catalog │──▶│ Selector │──▶│ Handoff │──▶│ Auth │──▶│ Payment │
//! └─────────┘   └──────────┘   └─────────┘   └──────┘   └─────────┘
//!   (here)        (web)          (finflex-checkout ─────────────▶)
//! ```
//!
//! Data only moves left to right; no stage reads back from a later one.

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod rotation;
pub mod schedule;
pub mod site;

pub use catalog::{BillingFrequency, Catalog, PlanPrice, PlanTier, PriceLabel, TierFlags, TierPrices};
pub use config::TimingConfig;
pub use content::Icon;
pub use error::{Result, SiteError};
pub use rotation::Rotation;
pub use schedule::Scheduler;
pub use site::{MobileMenu, Page};

//! Plan Selection
//!
//! The pricing section's frequency toggle and the payload created when a
//! tier's call-to-action is activated.

use finflex_core::{BillingFrequency, Catalog, PlanPrice, PlanTier};

use crate::error::Result;

/// A user's plan choice, carried from the pricing view to checkout.
///
/// The price is captured at selection time and never re-derived, so a
/// later catalog change does not affect an in-flight payment. Fields are
/// private: the payload cannot change once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionPayload {
    tier: PlanTier,
    frequency: BillingFrequency,
    resolved_price: PlanPrice,
}

impl SelectionPayload {
    /// Snapshot `tier` at `frequency`
    pub fn new(tier: &PlanTier, frequency: BillingFrequency) -> Self {
        let resolved_price = *tier.price_for(frequency);

        tracing::info!(
            tier = %tier.id,
            frequency = %frequency,
            price = %resolved_price,
            "Plan selected"
        );

        Self {
            tier: tier.clone(),
            frequency,
            resolved_price,
        }
    }

    pub fn tier(&self) -> &PlanTier {
        &self.tier
    }

    pub fn frequency(&self) -> BillingFrequency {
        self.frequency
    }

    pub fn resolved_price(&self) -> &PlanPrice {
        &self.resolved_price
    }
}

/// Pricing section state: the catalog plus the active frequency tab
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanSelector {
    catalog: Catalog,
    frequency: BillingFrequency,
}

impl PlanSelector {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            frequency: BillingFrequency::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn frequency(&self) -> BillingFrequency {
        self.frequency
    }

    /// Display-only; the catalog is never touched
    pub fn set_frequency(&mut self, frequency: BillingFrequency) {
        self.frequency = frequency;
    }

    pub fn toggle_frequency(&mut self) {
        self.frequency = self.frequency.toggled();
    }

    /// Price label on a tier card at the active frequency
    pub fn card_price(&self, tier: &PlanTier) -> String {
        tier.price_for(self.frequency).card_label()
    }

    /// Activate a tier's call-to-action
    pub fn select(&self, tier_id: &str) -> Result<SelectionPayload> {
        let tier = self.catalog.find(tier_id)?;
        Ok(SelectionPayload::new(tier, self.frequency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckoutError;
    use finflex_core::SiteError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_resolved_price_matches_catalog() {
        let catalog = Catalog::finflex();
        for tier in catalog.iter() {
            for frequency in BillingFrequency::ALL {
                let payload = SelectionPayload::new(tier, frequency);
                assert_eq!(payload.resolved_price(), tier.price_for(frequency));
                assert_eq!(payload.frequency(), frequency);
                assert_eq!(payload.tier(), tier);
            }
        }
    }

    #[test]
    fn test_select_teams_yearly() {
        let mut selector = PlanSelector::new(Catalog::finflex());
        selector.toggle_frequency();

        let payload = selector.select("teams").unwrap();
        assert_eq!(payload.tier().id, "teams");
        assert_eq!(payload.frequency(), BillingFrequency::Yearly);
        assert_eq!(payload.resolved_price(), &PlanPrice::Amount(dec!(75)));
    }

    #[test]
    fn test_sentinel_tier_still_selectable() {
        let selector = PlanSelector::new(Catalog::finflex());
        let payload = selector.select("enterprise").unwrap();
        assert_eq!(payload.resolved_price(), &PlanPrice::CUSTOM);

        let payload = selector.select("individuals").unwrap();
        assert_eq!(payload.resolved_price(), &PlanPrice::FREE);
    }

    #[test]
    fn test_toggle_is_display_only() {
        let mut selector = PlanSelector::new(Catalog::finflex());
        let catalog = selector.catalog().clone();
        let teams = catalog.find("teams").unwrap().clone();

        assert_eq!(selector.card_price(&teams), "$90");
        selector.toggle_frequency();
        assert_eq!(selector.card_price(&teams), "$75");
        selector.toggle_frequency();
        assert_eq!(selector.card_price(&teams), "$90");

        assert_eq!(selector.catalog(), &catalog);
    }

    #[test]
    fn test_payload_is_a_snapshot() {
        let mut tiers = Catalog::finflex().tiers().to_vec();
        let payload = SelectionPayload::new(&tiers[1], BillingFrequency::Monthly);

        tiers[1].price.monthly = PlanPrice::Amount(dec!(999));
        assert_eq!(payload.resolved_price(), &PlanPrice::Amount(dec!(90)));
    }

    #[test]
    fn test_unknown_tier() {
        let selector = PlanSelector::default();
        assert_eq!(
            selector.select("gold").unwrap_err(),
            CheckoutError::Site(SiteError::UnknownTier("gold".into()))
        );
    }
}

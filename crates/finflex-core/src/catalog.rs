//! Plan Catalog
//!
//! Static pricing tiers offered on the pricing section. Prices are either a
//! decimal amount or one of the `Free`/`Custom` sentinels, and every tier
//! carries exactly one price per billing frequency.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SiteError};

/// Billing cadence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingFrequency {
    #[default]
    Monthly,
    Yearly,
}

impl BillingFrequency {
    /// Toggle order on the pricing section
    pub const ALL: [BillingFrequency; 2] = [BillingFrequency::Monthly, BillingFrequency::Yearly];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingFrequency::Monthly => "monthly",
            BillingFrequency::Yearly => "yearly",
        }
    }

    /// Capitalized label ("Monthly Billing")
    pub fn label(&self) -> &'static str {
        match self {
            BillingFrequency::Monthly => "Monthly",
            BillingFrequency::Yearly => "Yearly",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            BillingFrequency::Monthly => BillingFrequency::Yearly,
            BillingFrequency::Yearly => BillingFrequency::Monthly,
        }
    }

    /// Badge shown next to the frequency tab
    pub fn discount_badge(&self) -> Option<&'static str> {
        match self {
            BillingFrequency::Monthly => None,
            BillingFrequency::Yearly => Some("Save 35%"),
        }
    }
}

impl fmt::Display for BillingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingFrequency {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(BillingFrequency::Monthly),
            "yearly" => Ok(BillingFrequency::Yearly),
            other => Err(SiteError::UnknownFrequency(other.to_string())),
        }
    }
}

/// Non-numeric price placeholders
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceLabel {
    Free,
    Custom,
}

impl PriceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceLabel::Free => "Free",
            PriceLabel::Custom => "Custom",
        }
    }
}

/// A tier's price at one billing frequency.
///
/// Serializes as a bare number or as the sentinel string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanPrice {
    Amount(#[serde(with = "rust_decimal::serde::float")] Decimal),
    Label(PriceLabel),
}

impl PlanPrice {
    pub const FREE: PlanPrice = PlanPrice::Label(PriceLabel::Free);
    pub const CUSTOM: PlanPrice = PlanPrice::Label(PriceLabel::Custom);

    pub fn amount(&self) -> Option<Decimal> {
        match self {
            PlanPrice::Amount(amount) => Some(*amount),
            PlanPrice::Label(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, PlanPrice::Amount(_))
    }

    /// Text for a pricing card: `$90` or the sentinel verbatim
    pub fn card_label(&self) -> String {
        self.to_string()
    }
}

impl From<Decimal> for PlanPrice {
    fn from(amount: Decimal) -> Self {
        PlanPrice::Amount(amount)
    }
}

impl fmt::Display for PlanPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanPrice::Amount(amount) => write!(f, "${}", amount.normalize()),
            PlanPrice::Label(label) => f.write_str(label.as_str()),
        }
    }
}

/// Exactly one price per billing frequency
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPrices {
    pub monthly: PlanPrice,
    pub yearly: PlanPrice,
}

impl TierPrices {
    pub fn new(monthly: impl Into<PlanPrice>, yearly: impl Into<PlanPrice>) -> Self {
        Self {
            monthly: monthly.into(),
            yearly: yearly.into(),
        }
    }

    /// Same price at both frequencies
    pub fn flat(price: PlanPrice) -> Self {
        Self {
            monthly: price,
            yearly: price,
        }
    }

    pub fn get(&self, frequency: BillingFrequency) -> &PlanPrice {
        match frequency {
            BillingFrequency::Monthly => &self.monthly,
            BillingFrequency::Yearly => &self.yearly,
        }
    }

    fn validate(&self, tier: &str) -> Result<()> {
        for frequency in BillingFrequency::ALL {
            if let Some(amount) = self.get(frequency).amount() {
                if amount < Decimal::ZERO {
                    return Err(SiteError::NegativePrice {
                        tier: tier.to_string(),
                        frequency: frequency.as_str(),
                        amount,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Emphasis flags; display only
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierFlags {
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub highlighted: bool,
}

/// One pricing offering
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTier {
    /// Unique slug (e.g., "teams")
    pub id: String,

    /// Display name
    pub name: String,

    /// One-line pitch under the name
    pub description: String,

    pub price: TierPrices,

    /// Ordered feature bullets
    pub features: Vec<String>,

    /// Call-to-action label
    pub cta: String,

    #[serde(default)]
    pub flags: TierFlags,
}

impl PlanTier {
    pub fn price_for(&self, frequency: BillingFrequency) -> &PlanPrice {
        self.price.get(frequency)
    }
}

/// Ordered set of tiers with unique ids
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    tiers: Vec<PlanTier>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and price sanity
    pub fn new(tiers: Vec<PlanTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(SiteError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for tier in &tiers {
            if !seen.insert(tier.id.as_str()) {
                return Err(SiteError::DuplicateTier(tier.id.clone()));
            }
            tier.price.validate(&tier.id)?;
        }

        Ok(Self { tiers })
    }

    /// The FinFlex pricing tiers
    pub fn finflex() -> Self {
        Self {
            tiers: vec![
                tier(
                    "individuals",
                    "Individuals",
                    "For your hobby projects",
                    TierPrices::flat(PlanPrice::FREE),
                    &[
                        "Free email alerts",
                        "3-minute checks",
                        "Automatic data enrichment",
                        "10 monitors",
                        "Up to 3 seats",
                    ],
                    "Get started",
                    TierFlags::default(),
                ),
                tier(
                    "teams",
                    "Teams",
                    "Great for small businesses",
                    TierPrices::new(dec!(90), dec!(75)),
                    &[
                        "Unlimited phone calls",
                        "30 second checks",
                        "Single-user account",
                        "20 monitors",
                        "Up to 6 seats",
                    ],
                    "Get started",
                    TierFlags {
                        popular: true,
                        highlighted: false,
                    },
                ),
                tier(
                    "organizations",
                    "Organizations",
                    "Great for large businesses",
                    TierPrices::new(dec!(120), dec!(100)),
                    &[
                        "Unlimited phone calls",
                        "15 second checks",
                        "Single-user account",
                        "50 monitors",
                        "Up to 10 seats",
                    ],
                    "Get started",
                    TierFlags::default(),
                ),
                tier(
                    "enterprise",
                    "Enterprise",
                    "For multiple teams",
                    TierPrices::flat(PlanPrice::CUSTOM),
                    &[
                        "Everything in Organizations",
                        "Up to 5 team members",
                        "100 monitors",
                        "15 status pages",
                        "200+ integrations",
                    ],
                    "Contact Us",
                    TierFlags {
                        popular: false,
                        highlighted: true,
                    },
                ),
            ],
        }
    }

    pub fn tiers(&self) -> &[PlanTier] {
        &self.tiers
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanTier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Look up a tier by slug
    pub fn find(&self, id: &str) -> Result<&PlanTier> {
        self.tiers
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| {
                tracing::debug!(tier = id, "Unknown tier requested");
                SiteError::UnknownTier(id.to_string())
            })
    }

    /// Card labels for every tier at one frequency, in catalog order
    pub fn display_prices(&self, frequency: BillingFrequency) -> Vec<String> {
        self.tiers
            .iter()
            .map(|t| t.price_for(frequency).card_label())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::finflex()
    }
}

fn tier(
    id: &str,
    name: &str,
    description: &str,
    price: TierPrices,
    features: &[&str],
    cta: &str,
    flags: TierFlags,
) -> PlanTier {
    PlanTier {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        features: features.iter().map(|f| (*f).to_string()).collect(),
        cta: cta.into(),
        flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_valid_prices() {
        let catalog = Catalog::finflex();
        for tier in catalog.iter() {
            for frequency in BillingFrequency::ALL {
                match tier.price_for(frequency) {
                    PlanPrice::Amount(amount) => assert!(*amount >= Decimal::ZERO),
                    PlanPrice::Label(_) => {}
                }
            }
        }
        // Builtin catalog also passes the checked constructor
        assert!(Catalog::new(catalog.tiers().to_vec()).is_ok());
    }

    #[test]
    fn test_teams_pricing() {
        let catalog = Catalog::finflex();
        let teams = catalog.find("teams").unwrap();
        assert_eq!(teams.price_for(BillingFrequency::Monthly), &PlanPrice::Amount(dec!(90)));
        assert_eq!(teams.price_for(BillingFrequency::Yearly), &PlanPrice::Amount(dec!(75)));
        assert!(teams.flags.popular);
    }

    #[test]
    fn test_enterprise_is_custom() {
        let catalog = Catalog::finflex();
        let enterprise = catalog.find("enterprise").unwrap();
        assert_eq!(enterprise.price.monthly, PlanPrice::CUSTOM);
        assert_eq!(enterprise.price.yearly, PlanPrice::CUSTOM);
        assert_eq!(enterprise.price.yearly.card_label(), "Custom");
        assert!(enterprise.flags.highlighted);
    }

    #[test]
    fn test_frequency_toggle_restores_display() {
        let catalog = Catalog::finflex();
        let before = catalog.clone();

        let monthly = catalog.display_prices(BillingFrequency::Monthly);
        let yearly = catalog.display_prices(BillingFrequency::Monthly.toggled());
        let back = catalog.display_prices(BillingFrequency::Monthly.toggled().toggled());

        assert_eq!(monthly, vec!["Free", "$90", "$120", "Custom"]);
        assert_eq!(yearly, vec!["Free", "$75", "$100", "Custom"]);
        assert_eq!(monthly, back);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_unknown_tier() {
        let err = Catalog::finflex().find("platinum").unwrap_err();
        assert_eq!(err, SiteError::UnknownTier("platinum".into()));
    }

    #[test]
    fn test_rejects_duplicates_and_negative_prices() {
        let mut tiers = Catalog::finflex().tiers().to_vec();
        tiers.push(tiers[0].clone());
        assert_eq!(
            Catalog::new(tiers).unwrap_err(),
            SiteError::DuplicateTier("individuals".into())
        );

        let mut tiers = Catalog::finflex().tiers().to_vec();
        tiers[1].price.yearly = PlanPrice::Amount(dec!(-5));
        assert!(matches!(
            Catalog::new(tiers),
            Err(SiteError::NegativePrice { frequency: "yearly", .. })
        ));

        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), SiteError::EmptyCatalog);
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("Yearly".parse::<BillingFrequency>().unwrap(), BillingFrequency::Yearly);
        assert_eq!(BillingFrequency::default(), BillingFrequency::Monthly);
        assert!("weekly".parse::<BillingFrequency>().is_err());
        assert_eq!(BillingFrequency::Yearly.discount_badge(), Some("Save 35%"));
    }

    #[test]
    fn test_price_wire_shape() {
        let prices: TierPrices =
            serde_json::from_str(r#"{"monthly": "Free", "yearly": 75}"#).unwrap();
        assert_eq!(prices.monthly, PlanPrice::FREE);
        assert_eq!(prices.yearly.amount(), Some(dec!(75)));

        let json = serde_json::to_value(TierPrices::flat(PlanPrice::CUSTOM)).unwrap();
        assert_eq!(json["monthly"], "Custom");
    }
}

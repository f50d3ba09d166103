//! Simulated Payment
//!
//! Shows the carried plan and price, pretends to process for a fixed delay,
//! then always succeeds.
//!
//! ```text
//! ┌──────┐  pay   ┌────────────┐  delay  ┌─────────┐  exit
//! │ Idle │───────▶│ Processing │────────▶│ Success │──────▶ Home
//! └──────┘        └────────────┘         └─────────┘
//! ```
//!
//! No failure path, no retry and no cancel once processing has begun.

use finflex_core::{BillingFrequency, Icon, Page, PlanPrice, PriceLabel};
use std::time::Duration;

use crate::error::{CheckoutError, Result};
use crate::selection::SelectionPayload;

/// Plan name shown when checkout is opened without a selection
pub const TRIAL_PLAN_NAME: &str = "Trial";

/// Price shown when checkout is opened without a selection
pub const TRIAL_DISPLAY_PRICE: &str = "$0.00";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaymentPhase {
    #[default]
    Idle,
    Processing,
    Success,
}

impl PaymentPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentPhase::Idle => "idle",
            PaymentPhase::Processing => "processing",
            PaymentPhase::Success => "success",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    #[default]
    Card,
    PayPal,
    ApplePay,
    GooglePay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::PayPal,
        PaymentMethod::ApplePay,
        PaymentMethod::GooglePay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::ApplePay | PaymentMethod::GooglePay => "Pay",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            PaymentMethod::Card => Icon::CreditCard,
            PaymentMethod::PayPal => Icon::PayPal,
            PaymentMethod::ApplePay => Icon::Apple,
            PaymentMethod::GooglePay => Icon::Google,
        }
    }

    /// Everything but the card form hands off to an external wallet
    pub fn redirects(&self) -> bool {
        !matches!(self, PaymentMethod::Card)
    }
}

/// Card form inputs, mirrored on the card preview when focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardField {
    Number,
    Name,
    Expiry,
    Cvc,
}

impl CardField {
    pub const ALL: [CardField; 4] = [CardField::Number, CardField::Name, CardField::Expiry, CardField::Cvc];

    pub fn label(&self) -> &'static str {
        match self {
            CardField::Number => "Card Number",
            CardField::Name => "Card Holder",
            CardField::Expiry => "Expires",
            CardField::Cvc => "CVC",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            CardField::Number => "0000 0000 0000 0000",
            CardField::Name => "Name on card",
            CardField::Expiry => "MM/YY",
            CardField::Cvc => "123",
        }
    }

    /// Sample value drawn on the card preview
    pub fn preview(&self) -> &'static str {
        match self {
            CardField::Number => "4242 4242 4242 4242",
            CardField::Name => "John Doe",
            CardField::Expiry => "12/28",
            CardField::Cvc => "•••",
        }
    }
}

/// Checkout price label.
///
/// Numbers render as currency and every sentinel as `Custom`. A missing
/// selection falls back to the zero-amount trial.
pub fn display_price(price: Option<&PlanPrice>) -> String {
    match price {
        Some(price @ PlanPrice::Amount(_)) => price.to_string(),
        Some(PlanPrice::Label(_)) => PriceLabel::Custom.as_str().to_string(),
        None => TRIAL_DISPLAY_PRICE.to_string(),
    }
}

/// Order summary shown above the card form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentSummary {
    pub plan_name: String,
    pub frequency: BillingFrequency,
    pub display_price: String,
}

impl PaymentSummary {
    pub fn from_selection(selection: Option<&SelectionPayload>) -> Self {
        match selection {
            Some(selection) => Self {
                plan_name: selection.tier().name.clone(),
                frequency: selection.frequency(),
                display_price: display_price(Some(selection.resolved_price())),
            },
            None => Self {
                plan_name: TRIAL_PLAN_NAME.to_string(),
                frequency: BillingFrequency::default(),
                display_price: display_price(None),
            },
        }
    }

    /// "Teams Plan"
    pub fn plan_title(&self) -> String {
        format!("{} Plan", self.plan_name)
    }

    /// "Yearly Billing"
    pub fn billing_line(&self) -> String {
        format!("{} Billing", self.frequency.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentStub {
    selection: Option<SelectionPayload>,
    summary: PaymentSummary,
    phase: PaymentPhase,
    method: PaymentMethod,
    focused: Option<CardField>,
    processing_delay: Duration,
}

impl PaymentStub {
    pub fn new(selection: Option<SelectionPayload>, processing_delay: Duration) -> Self {
        let summary = PaymentSummary::from_selection(selection.as_ref());
        Self {
            selection,
            summary,
            phase: PaymentPhase::Idle,
            method: PaymentMethod::default(),
            focused: None,
            processing_delay,
        }
    }

    pub fn summary(&self) -> &PaymentSummary {
        &self.summary
    }

    pub fn selection(&self) -> Option<&SelectionPayload> {
        self.selection.as_ref()
    }

    pub fn phase(&self) -> PaymentPhase {
        self.phase
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn focused(&self) -> Option<CardField> {
        self.focused
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    pub fn select_method(&mut self, method: PaymentMethod) -> Result<()> {
        self.ensure_idle("change payment method")?;
        self.method = method;
        Ok(())
    }

    pub fn focus(&mut self, field: CardField) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Pay button text
    pub fn pay_label(&self) -> String {
        match self.phase {
            PaymentPhase::Processing => "Processing...".to_string(),
            _ => format!("Pay {}", self.summary.display_price),
        }
    }

    /// Start processing; the caller schedules [`PaymentStub::settle`] after
    /// the returned delay
    pub fn pay(&mut self) -> Result<Duration> {
        self.ensure_idle("pay")?;
        self.phase = PaymentPhase::Processing;

        tracing::info!(
            plan = %self.summary.plan_name,
            price = %self.summary.display_price,
            method = ?self.method,
            delay = ?self.processing_delay,
            "Processing simulated payment"
        );

        Ok(self.processing_delay)
    }

    /// Finish processing; always succeeds and drops the carried selection
    pub fn settle(&mut self) -> Result<()> {
        if self.phase != PaymentPhase::Processing {
            return Err(CheckoutError::transition(self.phase.as_str(), "settle payment"));
        }
        self.phase = PaymentPhase::Success;
        self.selection = None;

        tracing::info!(plan = %self.summary.plan_name, "Simulated payment succeeded");
        Ok(())
    }

    pub fn success_message(&self) -> String {
        format!("Your subscription to {} is now active.", self.summary.plan_name)
    }

    /// The single way out of the success view
    pub fn exit(&self) -> Result<Page> {
        if self.phase != PaymentPhase::Success {
            return Err(CheckoutError::transition(self.phase.as_str(), "leave checkout"));
        }
        Ok(Page::Home)
    }

    /// Give the selection back (leaving payment for the auth step)
    pub(crate) fn into_selection(self) -> Option<SelectionPayload> {
        self.selection
    }

    fn ensure_idle(&self, action: &'static str) -> Result<()> {
        if self.phase != PaymentPhase::Idle {
            return Err(CheckoutError::transition(self.phase.as_str(), action));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finflex_core::Catalog;
    use rust_decimal_macros::dec;

    const DELAY: Duration = Duration::from_millis(2000);

    fn stub_for(id: &str, frequency: BillingFrequency) -> PaymentStub {
        let catalog = Catalog::finflex();
        let selection = SelectionPayload::new(catalog.find(id).unwrap(), frequency);
        PaymentStub::new(Some(selection), DELAY)
    }

    #[test]
    fn test_display_price_variants() {
        assert_eq!(display_price(Some(&PlanPrice::Amount(dec!(75)))), "$75");
        assert_eq!(display_price(Some(&PlanPrice::CUSTOM)), "Custom");
        assert_eq!(display_price(Some(&PlanPrice::FREE)), "Custom");
        assert_eq!(display_price(None), "$0.00");
    }

    #[test]
    fn test_no_selection_defaults_to_trial() {
        let stub = PaymentStub::new(None, DELAY);
        assert_eq!(stub.summary().plan_name, "Trial");
        assert_eq!(stub.summary().display_price, "$0.00");
        assert_eq!(stub.summary().billing_line(), "Monthly Billing");
        assert_eq!(stub.pay_label(), "Pay $0.00");
    }

    #[test]
    fn test_enterprise_shows_custom() {
        let stub = stub_for("enterprise", BillingFrequency::Yearly);
        assert_eq!(stub.summary().display_price, "Custom");
        assert_eq!(stub.pay_label(), "Pay Custom");
        assert!(!stub.pay_label().contains("$Custom"));
        assert!(!stub.pay_label().contains("NaN"));
    }

    #[test]
    fn test_linear_lifecycle() {
        let mut stub = stub_for("teams", BillingFrequency::Yearly);
        assert_eq!(stub.summary().plan_title(), "Teams Plan");
        assert_eq!(stub.phase(), PaymentPhase::Idle);
        assert!(stub.exit().is_err());

        assert_eq!(stub.pay().unwrap(), DELAY);
        assert_eq!(stub.phase(), PaymentPhase::Processing);
        assert_eq!(stub.pay_label(), "Processing...");

        // No second pay, no method change while processing
        assert!(stub.pay().is_err());
        assert!(stub.select_method(PaymentMethod::PayPal).is_err());

        stub.settle().unwrap();
        assert_eq!(stub.phase(), PaymentPhase::Success);
        assert!(stub.selection().is_none());
        assert_eq!(stub.success_message(), "Your subscription to Teams is now active.");
        assert_eq!(stub.exit().unwrap(), Page::Home);
        assert!(stub.settle().is_err());
    }

    #[test]
    fn test_settle_requires_processing() {
        let mut stub = PaymentStub::new(None, DELAY);
        assert_eq!(
            stub.settle().unwrap_err(),
            CheckoutError::InvalidTransition {
                from: "idle",
                action: "settle payment"
            }
        );
    }

    #[test]
    fn test_methods_and_focus() {
        let mut stub = PaymentStub::new(None, DELAY);
        assert_eq!(stub.method(), PaymentMethod::Card);
        assert!(!stub.method().redirects());

        stub.select_method(PaymentMethod::ApplePay).unwrap();
        assert!(stub.method().redirects());

        stub.focus(CardField::Expiry);
        assert_eq!(stub.focused(), Some(CardField::Expiry));
        stub.blur();
        assert_eq!(stub.focused(), None);
    }
}

//! Checkout Flow
//!
//! Sign-in followed by payment on a single page. The flow owns the
//! selection for as long as checkout is open and hands it from step to
//! step by value.

use finflex_core::Page;
use std::time::Duration;

use crate::auth::{AuthForm, AuthMode, AuthStub};
use crate::error::{CheckoutError, Result};
use crate::payment::{PaymentPhase, PaymentStub};
use crate::selection::SelectionPayload;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CheckoutStep {
    Auth,
    Payment,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Stage {
    Auth {
        stub: AuthStub,
        selection: Option<SelectionPayload>,
    },
    Payment(PaymentStub),
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Auth {
            stub: AuthStub::default(),
            selection: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutFlow {
    stage: Stage,
    processing_delay: Duration,
}

impl CheckoutFlow {
    /// Open checkout on the sign-in step with whatever the handoff produced
    pub fn new(selection: Option<SelectionPayload>, processing_delay: Duration) -> Self {
        tracing::debug!(
            tier = selection.as_ref().map(|s| s.tier().id.as_str()),
            "Checkout opened"
        );
        Self {
            stage: Stage::Auth {
                stub: AuthStub::new(),
                selection,
            },
            processing_delay,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        match self.stage {
            Stage::Auth { .. } => CheckoutStep::Auth,
            Stage::Payment(_) => CheckoutStep::Payment,
        }
    }

    /// Selection currently carried, if any
    pub fn selection(&self) -> Option<&SelectionPayload> {
        match &self.stage {
            Stage::Auth { selection, .. } => selection.as_ref(),
            Stage::Payment(payment) => payment.selection(),
        }
    }

    pub fn auth(&self) -> Option<&AuthStub> {
        match &self.stage {
            Stage::Auth { stub, .. } => Some(stub),
            Stage::Payment(_) => None,
        }
    }

    pub fn payment(&self) -> Option<&PaymentStub> {
        match &self.stage {
            Stage::Payment(payment) => Some(payment),
            Stage::Auth { .. } => None,
        }
    }

    pub fn payment_mut(&mut self) -> Option<&mut PaymentStub> {
        match &mut self.stage {
            Stage::Payment(payment) => Some(payment),
            Stage::Auth { .. } => None,
        }
    }

    pub fn auth_form_mut(&mut self) -> Result<&mut AuthForm> {
        Ok(self.auth_stub_mut("edit sign-in form")?.form_mut())
    }

    pub fn toggle_auth_mode(&mut self) -> Result<AuthMode> {
        let stub = self.auth_stub_mut("switch sign-in mode")?;
        stub.toggle_mode();
        Ok(stub.mode())
    }

    /// Accept the sign-in stub and move to payment
    pub fn submit_auth(&mut self) -> Result<()> {
        match std::mem::take(&mut self.stage) {
            Stage::Auth { stub, selection } => {
                let proceed = stub.submit(selection);
                self.stage = Stage::Payment(PaymentStub::new(proceed.selection, self.processing_delay));
                Ok(())
            }
            payment @ Stage::Payment(_) => {
                self.stage = payment;
                Err(CheckoutError::transition("paying", "submit sign-in"))
            }
        }
    }

    /// Return to sign-in, keeping the selection; only before paying
    pub fn back(&mut self) -> Result<()> {
        match std::mem::take(&mut self.stage) {
            Stage::Payment(payment) if payment.phase() == PaymentPhase::Idle => {
                self.stage = Stage::Auth {
                    stub: AuthStub::new(),
                    selection: payment.into_selection(),
                };
                tracing::debug!("Returned to sign-in");
                Ok(())
            }
            Stage::Payment(payment) => {
                let from = payment.phase().as_str();
                self.stage = Stage::Payment(payment);
                Err(CheckoutError::transition(from, "go back"))
            }
            auth @ Stage::Auth { .. } => {
                self.stage = auth;
                Err(CheckoutError::transition("signing in", "go back"))
            }
        }
    }

    /// Start processing; returns the delay after which to call [`CheckoutFlow::settle`]
    pub fn pay(&mut self) -> Result<Duration> {
        self.payment_stub_mut("pay")?.pay()
    }

    pub fn settle(&mut self) -> Result<()> {
        self.payment_stub_mut("settle payment")?.settle()
    }

    /// Leave the success view
    pub fn exit(&self) -> Result<Page> {
        match &self.stage {
            Stage::Payment(payment) => payment.exit(),
            Stage::Auth { .. } => Err(CheckoutError::transition("signing in", "leave checkout")),
        }
    }

    fn auth_stub_mut(&mut self, action: &'static str) -> Result<&mut AuthStub> {
        match &mut self.stage {
            Stage::Auth { stub, .. } => Ok(stub),
            Stage::Payment(_) => Err(CheckoutError::transition("paying", action)),
        }
    }

    fn payment_stub_mut(&mut self, action: &'static str) -> Result<&mut PaymentStub> {
        match &mut self.stage {
            Stage::Payment(payment) => Ok(payment),
            Stage::Auth { .. } => Err(CheckoutError::transition("signing in", action)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handoff::Handoff;
    use crate::selection::PlanSelector;
    use finflex_core::schedule::ManualScheduler;
    use finflex_core::{BillingFrequency, Catalog, PlanPrice, Scheduler};
    use std::cell::RefCell;
    use std::rc::Rc;

    const DELAY: Duration = Duration::from_millis(2000);

    /// Pricing → handoff → checkout, the way the pages wire it
    fn open_checkout(tier: Option<&str>, frequency: BillingFrequency) -> CheckoutFlow {
        let mut selector = PlanSelector::new(Catalog::finflex());
        selector.set_frequency(frequency);

        let mut handoff = Handoff::new();
        if let Some(id) = tier {
            handoff.offer(selector.select(id).unwrap());
        }
        CheckoutFlow::new(handoff.take(), DELAY)
    }

    fn pay_and_schedule(flow: &Rc<RefCell<CheckoutFlow>>, scheduler: &ManualScheduler) {
        let delay = flow.borrow_mut().pay().unwrap();
        let flow = flow.clone();
        scheduler.after(
            delay,
            Box::new(move || {
                flow.borrow_mut().settle().unwrap();
            }),
        );
    }

    #[test]
    fn test_teams_yearly_end_to_end() {
        let scheduler = ManualScheduler::new();
        let flow = Rc::new(RefCell::new(open_checkout(Some("teams"), BillingFrequency::Yearly)));

        {
            let mut flow = flow.borrow_mut();
            assert_eq!(flow.step(), CheckoutStep::Auth);
            flow.auth_form_mut().unwrap().email = "anyone".into();
            flow.submit_auth().unwrap();
            assert_eq!(flow.step(), CheckoutStep::Payment);

            let payment = flow.payment().unwrap();
            assert_eq!(payment.summary().plan_name, "Teams");
            assert_eq!(payment.summary().billing_line(), "Yearly Billing");
            assert_eq!(payment.pay_label(), "Pay $75");
        }

        pay_and_schedule(&flow, &scheduler);
        assert_eq!(flow.borrow().payment().unwrap().phase(), PaymentPhase::Processing);

        scheduler.advance(Duration::from_millis(1999));
        assert_eq!(flow.borrow().payment().unwrap().phase(), PaymentPhase::Processing);

        scheduler.advance(Duration::from_millis(1));
        let flow = flow.borrow();
        let payment = flow.payment().unwrap();
        assert_eq!(payment.phase(), PaymentPhase::Success);
        assert_eq!(payment.success_message(), "Your subscription to Teams is now active.");
        assert!(flow.selection().is_none());
        assert_eq!(flow.exit().unwrap(), Page::Home);
    }

    #[test]
    fn test_enterprise_renders_custom() {
        let mut flow = open_checkout(Some("enterprise"), BillingFrequency::Monthly);
        flow.toggle_auth_mode().unwrap();
        flow.submit_auth().unwrap();
        let payment = flow.payment().unwrap();
        assert_eq!(payment.summary().display_price, "Custom");
        assert_eq!(payment.pay_label(), "Pay Custom");
    }

    #[test]
    fn test_free_tier_renders_custom() {
        let mut flow = open_checkout(Some("individuals"), BillingFrequency::Monthly);
        assert_eq!(flow.selection().unwrap().resolved_price(), &PlanPrice::FREE);
        flow.submit_auth().unwrap();

        let payment = flow.payment().unwrap();
        assert_eq!(payment.summary().plan_title(), "Individuals Plan");
        assert_eq!(payment.summary().display_price, "Custom");
        assert_eq!(payment.pay_label(), "Pay Custom");
    }

    #[test]
    fn test_direct_visit_is_trial() {
        let mut flow = open_checkout(None, BillingFrequency::Monthly);
        assert!(flow.selection().is_none());
        flow.submit_auth().unwrap();

        let payment = flow.payment().unwrap();
        assert_eq!(payment.summary().plan_name, "Trial");
        assert_eq!(payment.summary().display_price, "$0.00");
    }

    #[test]
    fn test_back_keeps_selection_until_paying() {
        let mut flow = open_checkout(Some("organizations"), BillingFrequency::Monthly);
        flow.submit_auth().unwrap();
        flow.back().unwrap();
        assert_eq!(flow.step(), CheckoutStep::Auth);
        assert_eq!(flow.selection().unwrap().tier().id, "organizations");

        flow.submit_auth().unwrap();
        flow.pay().unwrap();
        assert_eq!(
            flow.back().unwrap_err(),
            CheckoutError::InvalidTransition {
                from: "processing",
                action: "go back"
            }
        );
        assert_eq!(flow.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_step_guards() {
        let mut flow = open_checkout(Some("teams"), BillingFrequency::Monthly);
        assert!(flow.pay().is_err());
        assert!(flow.settle().is_err());
        assert!(flow.exit().is_err());
        assert!(flow.back().is_err());
        assert_eq!(flow.step(), CheckoutStep::Auth);

        flow.submit_auth().unwrap();
        assert!(flow.submit_auth().is_err());
        assert!(flow.toggle_auth_mode().is_err());
        assert_eq!(flow.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_cancelled_timer_never_settles() {
        let scheduler = ManualScheduler::new();
        let flow = Rc::new(RefCell::new(open_checkout(Some("teams"), BillingFrequency::Monthly)));
        flow.borrow_mut().submit_auth().unwrap();

        let delay = flow.borrow_mut().pay().unwrap();
        let settling = flow.clone();
        let handle = scheduler.after(
            delay,
            Box::new(move || {
                settling.borrow_mut().settle().unwrap();
            }),
        );

        // Page torn down mid-processing
        scheduler.cancel(handle);
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(flow.borrow().payment().unwrap().phase(), PaymentPhase::Processing);
    }
}

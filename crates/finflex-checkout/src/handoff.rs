//! Navigation Handoff
//!
//! Short-lived slot that carries a [`SelectionPayload`] across the
//! pricing → sign-in navigation. The receiving page takes the payload out
//! on mount, leaving the slot empty; nothing is persisted.

use crate::selection::SelectionPayload;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Handoff {
    pending: Option<SelectionPayload>,
}

impl Handoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a payload for the next navigation, replacing any stale one
    pub fn offer(&mut self, payload: SelectionPayload) {
        tracing::debug!(tier = %payload.tier().id, "Selection offered");
        if let Some(stale) = self.pending.replace(payload) {
            tracing::debug!(tier = %stale.tier().id, "Replaced unclaimed selection");
        }
    }

    /// Claim the payload; a second take returns `None`
    pub fn take(&mut self) -> Option<SelectionPayload> {
        let payload = self.pending.take();
        tracing::debug!(claimed = payload.is_some(), "Selection handoff taken");
        payload
    }

    /// Drop an unclaimed payload (user navigated elsewhere)
    pub fn discard(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("Discarded unclaimed selection");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finflex_core::{BillingFrequency, Catalog};

    fn payload(id: &str) -> SelectionPayload {
        let catalog = Catalog::finflex();
        SelectionPayload::new(catalog.find(id).unwrap(), BillingFrequency::Monthly)
    }

    #[test]
    fn test_take_once() {
        let mut handoff = Handoff::new();
        handoff.offer(payload("teams"));
        assert!(handoff.is_pending());

        assert_eq!(handoff.take().unwrap().tier().id, "teams");
        assert!(handoff.take().is_none());
    }

    #[test]
    fn test_latest_offer_wins() {
        let mut handoff = Handoff::new();
        handoff.offer(payload("teams"));
        handoff.offer(payload("enterprise"));
        assert_eq!(handoff.take().unwrap().tier().id, "enterprise");
    }

    #[test]
    fn test_discard() {
        let mut handoff = Handoff::new();
        handoff.offer(payload("organizations"));
        handoff.discard();
        assert!(!handoff.is_pending());
        assert!(handoff.take().is_none());
    }
}

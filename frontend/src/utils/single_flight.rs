//! Guard that admits one in-flight operation at a time.
//!
//! `try_begin` is synchronous, so two submits dispatched from the same event
//! loop cannot both pass it: the second sees `InFlight` before any request
//! is issued.

use std::{cell::Cell, rc::Rc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlightToken(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlightState {
    #[default]
    Idle,
    InFlight(FlightToken),
}

#[derive(Default)]
struct Inner {
    state: Cell<FlightState>,
    issued: Cell<u64>,
}

#[derive(Clone, Default)]
pub struct SingleFlight {
    inner: Rc<Inner>,
}

impl SingleFlight {
    pub fn try_begin(&self) -> Option<FlightToken> {
        match self.inner.state.get() {
            FlightState::InFlight(_) => None,
            FlightState::Idle => {
                let token = FlightToken(self.inner.issued.get().wrapping_add(1));
                self.inner.issued.set(token.0);
                self.inner.state.set(FlightState::InFlight(token));
                Some(token)
            }
        }
    }

    /// Returns to `Idle` if `token` is the one in flight. Stale tokens are
    /// ignored.
    pub fn settle(&self, token: FlightToken) -> bool {
        if self.inner.state.get() == FlightState::InFlight(token) {
            self.inner.state.set(FlightState::Idle);
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> FlightState {
        self.inner.state.get()
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state(), FlightState::InFlight(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected_until_settled() {
        let guard = SingleFlight::default();
        let first = guard.try_begin().unwrap();
        assert!(guard.try_begin().is_none());
        assert!(guard.is_in_flight());

        assert!(guard.settle(first));
        assert_eq!(guard.state(), FlightState::Idle);
        assert!(guard.try_begin().is_some());
    }

    #[test]
    fn stale_token_cannot_settle_newer_flight() {
        let guard = SingleFlight::default();
        let first = guard.try_begin().unwrap();
        assert!(guard.settle(first));
        let second = guard.try_begin().unwrap();

        assert!(!guard.settle(first));
        assert_eq!(guard.state(), FlightState::InFlight(second));
        assert!(guard.settle(second));
    }

    #[test]
    fn clones_share_state() {
        let guard = SingleFlight::default();
        let clone = guard.clone();
        let token = guard.try_begin().unwrap();
        assert!(clone.try_begin().is_none());
        assert!(clone.settle(token));
        assert!(!guard.is_in_flight());
    }
}

//! In-process broadcast of auth state changes.
//!
//! Listeners receive every event in emission order. Each subscription is an
//! owned handle; unsubscribing (or dropping it) removes the listener.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use super::types::{AuthEvent, Session};

type Listener = Rc<dyn Fn(AuthEvent, Option<Session>)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

#[derive(Clone, Default)]
pub struct AuthEvents {
    inner: Rc<RefCell<Listeners>>,
}

impl AuthEvents {
    pub fn subscribe(&self, listener: impl Fn(AuthEvent, Option<Session>) + 'static) -> AuthSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, Rc::new(listener)));
        AuthSubscription {
            id,
            listeners: Rc::downgrade(&self.inner),
        }
    }

    pub fn emit(&self, event: AuthEvent, session: Option<Session>) {
        // Snapshot first so a listener may subscribe or unsubscribe re-entrantly.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        log::debug!("auth event {:?} -> {} listener(s)", event, listeners.len());
        for listener in listeners {
            listener(event, session.clone());
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct AuthSubscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

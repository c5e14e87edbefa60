//! License-gated theme switching.
//!
//! `ThemeGuard` listens to the host's preference manager. When the active
//! theme changes to a restricted one without a license it puts the last
//! approved theme back and tells the user why.

mod gate;
mod messages;
mod observer;
mod revert;
mod state;


use std::cell::RefCell;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};

use crate::bus::GuardBus;
use crate::config::GuardConfig;
use crate::event::GuardEvent;
use crate::host::{
    SharedLicenseOracle, SharedNotificationSink, SharedPreferenceManager, SubscriptionId,
};
use crate::types::{Decision, Outcome, PreferenceValue};

use gate::EntitlementGate;
use revert::RevertEngine;
use state::TrackedState;

pub struct ThemeGuard {
    manager: SharedPreferenceManager,
    gate: EntitlementGate,
    revert: RevertEngine,
    /// Re-entrant so the notification raised by our own revert can run on the
    /// same thread, while evaluations from other threads wait their turn.
    state: ReentrantMutex<RefCell<TrackedState>>,
    bus: Option<GuardBus>,
    subscription: Mutex<Option<SubscriptionId>>,
}

impl ThemeGuard {
    /// Builds a guard whose baseline is the manager's current theme, which may
    /// be unknown.
    pub fn new(
        config: &GuardConfig,
        manager: SharedPreferenceManager,
        oracle: SharedLicenseOracle,
        sink: SharedNotificationSink,
    ) -> Self {
        let initial = manager.current_value();
        tracing::debug!(
            "theme guard starting with baseline {:?}, {} restricted theme(s)",
            initial,
            config.restricted.len()
        );
        Self {
            gate: EntitlementGate::new(config.restricted.iter().cloned(), oracle),
            revert: RevertEngine::new(
                manager.clone(),
                sink,
                config.title.clone(),
                config.license_guidance.clone(),
                config.unknown_baseline,
            ),
            manager,
            state: ReentrantMutex::new(RefCell::new(TrackedState::new(initial))),
            bus: None,
            subscription: Mutex::new(None),
        }
    }

    pub fn with_bus(mut self, bus: GuardBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Subscribes the guard to its preference manager. Calling it again
    /// returns the existing subscription.
    pub fn register(self: &Arc<Self>) -> SubscriptionId {
        let mut subscription = self.subscription.lock();
        if let Some(id) = *subscription {
            return id;
        }
        let guard: Weak<Self> = Arc::downgrade(self);
        let id = self.manager.subscribe(Arc::new(move || {
            if let Some(guard) = guard.upgrade() {
                guard.on_preference_changed();
            }
        }));
        *subscription = Some(id);
        id
    }

    pub fn unregister(&self) {
        if let Some(id) = self.subscription.lock().take() {
            self.manager.unsubscribe(id);
        }
    }

    /// Handles a "preference changed" notification. Never fails; every path
    /// ends in a state update, a notice, or nothing at all.
    pub fn on_preference_changed(&self) -> Outcome {
        let outcome = {
            let state = self.state.lock();
            let last_approved = state.borrow().last_approved().cloned();
            let current = self.manager.current_value();

            match observer::changed_value(current, last_approved.as_ref()) {
                None => {
                    tracing::debug!("ignoring theme notification, baseline {last_approved:?}");
                    Outcome::Ignored
                }
                Some(candidate) => {
                    let outcome = match self.gate.evaluate(&candidate) {
                        Decision::Approve => {
                            tracing::info!("approved theme switch to {candidate}");
                            Outcome::Approved { value: candidate }
                        }
                        Decision::Deny => self.revert.revert(&candidate, last_approved.as_ref()),
                    };
                    match &outcome {
                        Outcome::Approved { value: committed }
                        | Outcome::Reverted {
                            restored: committed,
                            ..
                        } => state.borrow_mut().commit(committed.clone()),
                        _ => {}
                    }
                    outcome
                }
            }
        };

        self.publish(&outcome);
        outcome
    }

    pub fn last_approved(&self) -> Option<PreferenceValue> {
        self.state.lock().borrow().last_approved().cloned()
    }

    pub fn is_restricted(&self, value: &PreferenceValue) -> bool {
        self.gate.is_restricted(value)
    }

    fn publish(&self, outcome: &Outcome) {
        if outcome.is_ignored() {
            return;
        }
        if let Some(bus) = &self.bus {
            // No receivers is not an error for the guard.
            let _ = bus.publish(GuardEvent::new(outcome.clone()));
        }
    }
}

impl Drop for ThemeGuard {
    fn drop(&mut self) {
        self.unregister();
    }
}

//! In-process host adapters.
//!
//! Used by the replay binary and by tests. `MemoryPreferenceManager`
//! notifies listeners synchronously from `set_current_value`, after its own
//! lock is released, so a listener may call back into the manager the same
//! way a real host allows.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::{LicenseOracle, NotificationSink, PreferenceListener, PreferenceManager, SubscriptionId};
use crate::error::{GuardError, GuardResult};
use crate::types::{Notice, PreferenceValue};

#[derive(Default)]
struct ManagerInner {
    installed: Vec<PreferenceValue>,
    current: Option<PreferenceValue>,
    listeners: Vec<(SubscriptionId, PreferenceListener)>,
    history: Vec<PreferenceValue>,
}

#[derive(Default)]
pub struct MemoryPreferenceManager {
    inner: Mutex<ManagerInner>,
    next_subscription: AtomicU64,
    refresh_count: AtomicUsize,
}

impl MemoryPreferenceManager {
    pub fn new<I, V>(installed: I, current: Option<PreferenceValue>) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<PreferenceValue>,
    {
        Self {
            inner: Mutex::new(ManagerInner {
                installed: installed.into_iter().map(Into::into).collect(),
                current,
                listeners: Vec::new(),
                history: Vec::new(),
            }),
            next_subscription: AtomicU64::new(1),
            refresh_count: AtomicUsize::new(0),
        }
    }

    /// Removes `value` from the installed set. The current value is untouched.
    pub fn uninstall(&self, value: &PreferenceValue) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.installed.len();
        inner.installed.retain(|installed| installed != value);
        inner.installed.len() != before
    }

    /// Every value passed to a successful `set_current_value`, in order.
    pub fn history(&self) -> Vec<PreferenceValue> {
        self.inner.lock().history.clone()
    }

    pub fn refresh_count(&self) -> usize {
        self.refresh_count.load(Ordering::SeqCst)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    fn notify(&self) {
        let listeners: Vec<PreferenceListener> = self
            .inner
            .lock()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl PreferenceManager for MemoryPreferenceManager {
    fn current_value(&self) -> Option<PreferenceValue> {
        self.inner.lock().current.clone()
    }

    fn installed_values(&self) -> Vec<PreferenceValue> {
        self.inner.lock().installed.clone()
    }

    fn set_current_value(&self, value: &PreferenceValue) -> GuardResult<()> {
        {
            let mut inner = self.inner.lock();
            if !inner.installed.contains(value) {
                return Err(GuardError::PreferenceNotInstalled(value.to_string()));
            }
            inner.current = Some(value.clone());
            inner.history.push(value.clone());
        }
        self.notify();
        Ok(())
    }

    fn refresh_ui(&self) {
        self.refresh_count.fetch_add(1, Ordering::SeqCst);
    }

    fn subscribe(&self, listener: PreferenceListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.inner.lock().listeners.push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .lock()
            .listeners
            .retain(|(subscription, _)| *subscription != id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OracleAnswer {
    Licensed(bool),
    Unavailable,
}

/// Oracle with a fixed, switchable answer. Counts every query.
#[derive(Debug)]
pub struct StaticLicenseOracle {
    answer: Mutex<OracleAnswer>,
    calls: AtomicUsize,
}

impl StaticLicenseOracle {
    pub fn licensed(licensed: bool) -> Self {
        Self {
            answer: Mutex::new(OracleAnswer::Licensed(licensed)),
            calls: AtomicUsize::new(0),
        }
    }

    /// An oracle that fails on every query.
    pub fn unavailable() -> Self {
        Self {
            answer: Mutex::new(OracleAnswer::Unavailable),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_licensed(&self, licensed: bool) {
        *self.answer.lock() = OracleAnswer::Licensed(licensed);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LicenseOracle for StaticLicenseOracle {
    fn is_licensed(&self) -> GuardResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.answer.lock() {
            OracleAnswer::Licensed(licensed) => Ok(licensed),
            OracleAnswer::Unavailable => Err(GuardError::OracleUnavailable(
                "license server unreachable".to_string(),
            )),
        }
    }
}

/// Oracle backed by a closure, for hosts that wrap their own license check.
pub struct FnLicenseOracle<F> {
    check: F,
}

impl<F> FnLicenseOracle<F>
where
    F: Fn() -> GuardResult<bool> + Send + Sync,
{
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F> LicenseOracle for FnLicenseOracle<F>
where
    F: Fn() -> GuardResult<bool> + Send + Sync,
{
    fn is_licensed(&self) -> GuardResult<bool> {
        (self.check)()
    }
}

/// Keeps every notice it is shown.
#[derive(Debug, Default)]
pub struct RecordingNotificationSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.lock().is_empty()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn show(&self, notice: &Notice) {
        self.notices.lock().push(notice.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use std::sync::Arc;

    fn manager() -> MemoryPreferenceManager {
        MemoryPreferenceManager::new(["Light", "Darcula"], Some("Light".into()))
    }

    #[test]
    fn set_current_value_notifies_listeners() {
        let manager = manager();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        manager.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        manager.set_current_value(&"Darcula".into()).expect("set");

        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(manager.current_value(), Some("Darcula".into()));
        assert_eq!(manager.history(), vec![PreferenceValue::from("Darcula")]);
    }

    #[test]
    fn listener_can_reenter_manager() {
        let manager = Arc::new(manager());
        let observed = Arc::new(Mutex::new(None));
        let weak = Arc::downgrade(&manager);
        let slot = observed.clone();
        manager.subscribe(Arc::new(move || {
            if let Some(manager) = weak.upgrade() {
                *slot.lock() = manager.current_value();
            }
        }));

        manager.set_current_value(&"Darcula".into()).expect("set");

        assert_eq!(*observed.lock(), Some("Darcula".into()));
    }

    #[test]
    fn setting_uninstalled_value_fails_without_notifying() {
        let manager = manager();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        manager.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let err = manager
            .set_current_value(&"Gruvbox".into())
            .expect_err("not installed");

        assert!(matches!(err, GuardError::PreferenceNotInstalled(name) if name == "Gruvbox"));
        assert_eq!(seen.load(Ordering::SeqCst), 0);
        assert_eq!(manager.current_value(), Some("Light".into()));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let manager = manager();
        let id = manager.subscribe(Arc::new(|| {}));
        assert_eq!(manager.listener_count(), 1);
        manager.unsubscribe(id);
        assert_eq!(manager.listener_count(), 0);
    }

    #[test]
    fn uninstall_keeps_current_value() {
        let manager = manager();
        assert!(manager.uninstall(&"Light".into()));
        assert!(!manager.uninstall(&"Light".into()));
        assert_eq!(manager.current_value(), Some("Light".into()));
        assert_eq!(manager.installed_values(), vec![PreferenceValue::from("Darcula")]);
    }

    #[test]
    fn static_oracle_counts_calls_and_switches_answer() {
        let oracle = StaticLicenseOracle::licensed(false);
        assert!(!oracle.is_licensed().expect("answer"));
        oracle.set_licensed(true);
        assert!(oracle.is_licensed().expect("answer"));
        assert_eq!(oracle.calls(), 2);

        let offline = StaticLicenseOracle::unavailable();
        assert!(matches!(
            offline.is_licensed(),
            Err(GuardError::OracleUnavailable(_))
        ));
    }

    #[test]
    fn fn_oracle_delegates_to_closure() {
        let oracle = FnLicenseOracle::new(|| Ok(true));
        assert!(oracle.is_licensed().expect("answer"));
    }

    #[test]
    fn recording_sink_keeps_notices() {
        let sink = RecordingNotificationSink::new();
        assert!(sink.is_empty());
        sink.show(&Notice {
            title: "Dark Themes".to_string(),
            body: "hello".to_string(),
            severity: Severity::Info,
        });
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.notices()[0].body, "hello");
    }
}

//! Capabilities the guard consumes from its host.
//!
//! The host owns the preference manager, the license oracle and whatever
//! renders notices. The guard only ever sees these traits, injected at
//! construction, so it can run without a global registry.

mod log_sink;
mod memory;

use std::sync::Arc;

use crate::error::GuardResult;
use crate::types::{Notice, PreferenceValue};

pub use log_sink::LogNotificationSink;
pub use memory::{
    FnLicenseOracle, MemoryPreferenceManager, RecordingNotificationSink, StaticLicenseOracle,
};

/// Callback invoked by the preference manager on every change, including
/// changes the guard itself makes.
pub type PreferenceListener = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

pub trait PreferenceManager: Send + Sync {
    /// The active theme, or `None` when the host cannot tell.
    fn current_value(&self) -> Option<PreferenceValue>;

    fn installed_values(&self) -> Vec<PreferenceValue>;

    /// Activates `value`. Hosts notify their listeners as part of this call.
    fn set_current_value(&self, value: &PreferenceValue) -> GuardResult<()>;

    /// Repaints after a change. No-op for hosts without a visual representation.
    fn refresh_ui(&self) {}

    fn subscribe(&self, listener: PreferenceListener) -> SubscriptionId;

    fn unsubscribe(&self, _id: SubscriptionId) {}
}

pub trait LicenseOracle: Send + Sync {
    /// `Err` means the oracle could not answer.
    fn is_licensed(&self) -> GuardResult<bool>;
}

pub trait NotificationSink: Send + Sync {
    /// Fire-and-forget. Sinks may render asynchronously.
    fn show(&self, notice: &Notice);
}

pub type SharedPreferenceManager = Arc<dyn PreferenceManager>;
pub type SharedLicenseOracle = Arc<dyn LicenseOracle>;
pub type SharedNotificationSink = Arc<dyn NotificationSink>;

//! License-gated theme switching.
//!
//! This crate provides:
//! - `ThemeGuard`, which reverts unlicensed switches to restricted themes
//! - Host capability traits for the preference manager, license oracle and notices
//! - In-memory host adapters for embedding and testing
//! - JSON configuration and a broadcast bus of guard decisions

pub mod bus;
pub mod config;
pub mod error;
pub mod event;
pub mod guard;
pub mod host;
pub mod types;

// Re-export main types
pub use bus::GuardBus;
pub use config::{load_or_create_guard_config, GuardConfig, UnknownBaselinePolicy};
pub use error::{GuardError, GuardResult};
pub use event::GuardEvent;
pub use guard::ThemeGuard;
pub use host::{LicenseOracle, NotificationSink, PreferenceManager};
pub use types::{Decision, Notice, Outcome, PreferenceValue, Severity};

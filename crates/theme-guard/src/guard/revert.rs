use crate::config::UnknownBaselinePolicy;
use crate::host::{SharedNotificationSink, SharedPreferenceManager};
use crate::types::{Outcome, PreferenceValue};

use super::messages;

/// Restores the last approved theme after a denied switch.
///
/// Branches, in order:
/// 1. No fallback was ever established: warn (per policy), mutate nothing.
/// 2. Fallback no longer installed, or the host refuses it: warn, mutate nothing.
/// 3. Otherwise re-apply the fallback, refresh, and explain the denial.
///
/// Nothing is retried and nothing is returned as an error.
pub(crate) struct RevertEngine {
    manager: SharedPreferenceManager,
    sink: SharedNotificationSink,
    title: String,
    license_guidance: String,
    unknown_baseline: UnknownBaselinePolicy,
}

impl RevertEngine {
    pub(crate) fn new(
        manager: SharedPreferenceManager,
        sink: SharedNotificationSink,
        title: String,
        license_guidance: String,
        unknown_baseline: UnknownBaselinePolicy,
    ) -> Self {
        Self {
            manager,
            sink,
            title,
            license_guidance,
            unknown_baseline,
        }
    }

    pub(crate) fn revert(
        &self,
        denied: &PreferenceValue,
        fallback: Option<&PreferenceValue>,
    ) -> Outcome {
        let Some(fallback) = fallback else {
            tracing::warn!("denied theme {denied} with no previously approved theme");
            if self.unknown_baseline == UnknownBaselinePolicy::Warn {
                self.sink
                    .show(&messages::unknown_baseline(&self.title, denied));
            }
            return Outcome::UnknownBaseline {
                denied: denied.clone(),
            };
        };

        if !self.manager.installed_values().contains(fallback) {
            tracing::warn!("cannot revert {denied}: previous theme {fallback} is not installed");
            return self.missing_fallback(denied, fallback);
        }

        // Re-enters the guard through the host's listener; the observer drops
        // that notification because the fallback is still the approved value.
        if let Err(error) = self.manager.set_current_value(fallback) {
            tracing::warn!("cannot revert {denied} to {fallback}: {error}");
            return self.missing_fallback(denied, fallback);
        }
        self.manager.refresh_ui();

        tracing::info!("reverted unlicensed theme {denied} to {fallback}");
        self.sink.show(&messages::license_required(
            &self.title,
            denied,
            &self.license_guidance,
        ));
        Outcome::Reverted {
            denied: denied.clone(),
            restored: fallback.clone(),
        }
    }

    fn missing_fallback(&self, denied: &PreferenceValue, fallback: &PreferenceValue) -> Outcome {
        self.sink
            .show(&messages::missing_fallback(&self.title, denied, fallback));
        Outcome::MissingFallback {
            denied: denied.clone(),
            fallback: fallback.clone(),
        }
    }
}

use super::NotificationSink;
use crate::types::{Notice, Severity};

/// Renders notices as log lines, for hosts with no dialog surface.
#[derive(Debug, Default)]
pub struct LogNotificationSink;

impl LogNotificationSink {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for LogNotificationSink {
    fn show(&self, notice: &Notice) {
        match notice.severity {
            Severity::Info => tracing::info!("[{}] {}", notice.title, notice.body),
            Severity::Warning => tracing::warn!("[{}] {}", notice.title, notice.body),
        }
    }
}

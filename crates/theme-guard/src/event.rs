use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Outcome;

/// A non-ignored guard outcome, stamped for subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardEvent {
    pub id: Uuid,
    pub at: DateTime<Utc>,
    pub outcome: Outcome,
}

impl GuardEvent {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            id: Uuid::now_v7(),
            at: Utc::now(),
            outcome,
        }
    }
}

use crate::types::PreferenceValue;

/// The last committed theme. Never holds a denied value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TrackedState {
    last_approved: Option<PreferenceValue>,
}

impl TrackedState {
    pub(crate) fn new(initial: Option<PreferenceValue>) -> Self {
        Self {
            last_approved: initial,
        }
    }

    pub(crate) fn last_approved(&self) -> Option<&PreferenceValue> {
        self.last_approved.as_ref()
    }

    pub(crate) fn commit(&mut self, value: PreferenceValue) {
        self.last_approved = Some(value);
    }
}

use crate::types::PreferenceValue;

/// Returns the value worth evaluating, if any.
///
/// An unknown current value, or one equal to the last approved value, is a
/// no-op. The equality check is what absorbs the notification raised by the
/// guard's own revert.
pub(crate) fn changed_value(
    current: Option<PreferenceValue>,
    last_approved: Option<&PreferenceValue>,
) -> Option<PreferenceValue> {
    let current = current?;
    if last_approved == Some(&current) {
        return None;
    }
    Some(current)
}

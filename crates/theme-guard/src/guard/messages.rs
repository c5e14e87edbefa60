use crate::types::{Notice, PreferenceValue, Severity};

pub(crate) fn license_required(title: &str, denied: &PreferenceValue, guidance: &str) -> Notice {
    Notice {
        title: title.to_string(),
        body: format!("Pro license is required to use the {denied} theme. {guidance}"),
        severity: Severity::Info,
    }
}

pub(crate) fn unknown_baseline(title: &str, denied: &PreferenceValue) -> Notice {
    Notice {
        title: title.to_string(),
        body: format!(
            "Pro license is required to use the {denied} theme, but the previous theme \
             cannot be determined. Please restart the application or change the theme manually."
        ),
        severity: Severity::Warning,
    }
}

pub(crate) fn missing_fallback(
    title: &str,
    denied: &PreferenceValue,
    fallback: &PreferenceValue,
) -> Notice {
    Notice {
        title: title.to_string(),
        body: format!(
            "Pro license is required to use the {denied} theme, but the previous theme \
             {fallback} could not be found. Please change the theme manually."
        ),
        severity: Severity::Warning,
    }
}

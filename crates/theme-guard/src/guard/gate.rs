use std::collections::HashSet;

use crate::host::SharedLicenseOracle;
use crate::types::{Decision, PreferenceValue};

/// Decides whether a switch to a theme is allowed.
///
/// Free themes never reach the oracle. Restricted themes query it on every
/// transition; an oracle failure counts as "not licensed".
pub(crate) struct EntitlementGate {
    restricted: HashSet<PreferenceValue>,
    oracle: SharedLicenseOracle,
}

impl EntitlementGate {
    pub(crate) fn new<I>(restricted: I, oracle: SharedLicenseOracle) -> Self
    where
        I: IntoIterator<Item = PreferenceValue>,
    {
        Self {
            restricted: restricted.into_iter().collect(),
            oracle,
        }
    }

    pub(crate) fn is_restricted(&self, value: &PreferenceValue) -> bool {
        self.restricted.contains(value)
    }

    pub(crate) fn evaluate(&self, value: &PreferenceValue) -> Decision {
        if !self.is_restricted(value) {
            return Decision::Approve;
        }

        match self.oracle.is_licensed() {
            Ok(true) => Decision::Approve,
            Ok(false) => {
                tracing::debug!("no license for restricted theme {value}");
                Decision::Deny
            }
            Err(error) => {
                tracing::warn!("license check failed for {value}, treating as unlicensed: {error}");
                Decision::Deny
            }
        }
    }
}

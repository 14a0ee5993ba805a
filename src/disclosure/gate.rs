//! Secret check and view selection.

use tracing::{debug, info};

use crate::records::Record;
use crate::secrets::SecretString;

use super::view::{AuthOutcome, DisclosureView};

/// Configuration handed to the gate at construction.
#[derive(Debug, Clone, Default)]
pub struct DisclosureConfig {
    /// Secret that unlocks the full view. `None` disables it.
    pub secret: Option<SecretString>,
}

impl DisclosureConfig {
    /// Config with a configured secret. An empty value counts as unset.
    pub fn with_secret(secret: impl Into<SecretString>) -> Self {
        let secret = secret.into();
        Self {
            secret: (!secret.is_empty()).then_some(secret),
        }
    }

    /// Config where no entered value can authorize.
    pub fn disabled() -> Self {
        Self { secret: None }
    }

    /// Whether a full view is reachable at all.
    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }
}

/// Outcome and view for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    /// Whether the entered secret matched.
    pub outcome: AuthOutcome,
    /// What may be shown.
    pub view: DisclosureView,
}

/// Decides between the full and the names-only view.
///
/// # Example
///
/// ```
/// use safeview::disclosure::{AuthOutcome, DisclosureConfig, DisclosureGate};
/// use safeview::records::parse;
///
/// let gate = DisclosureGate::new(DisclosureConfig::with_secret("open sesame"));
/// let parsed = parse("ana;123");
///
/// let denied = gate.disclose(parsed.records(), "open sesame ");
/// assert_eq!(denied.outcome, AuthOutcome::Unauthorized);
/// assert_eq!(denied.view.lines(), vec!["- ana"]);
///
/// let granted = gate.disclose(parsed.records(), "open sesame");
/// assert_eq!(granted.view.lines(), vec!["- ana | 123"]);
/// ```
#[derive(Debug, Clone)]
pub struct DisclosureGate {
    config: DisclosureConfig,
}

impl DisclosureGate {
    /// Create a gate from explicit configuration.
    pub fn new(config: DisclosureConfig) -> Self {
        Self { config }
    }

    /// Compare `entered` with the configured secret, exactly as given.
    pub fn authorize(&self, entered: &str) -> AuthOutcome {
        match &self.config.secret {
            Some(secret) => AuthOutcome::from(secret.matches(entered)),
            None => {
                debug!("No secret configured; full view unavailable");
                AuthOutcome::Unauthorized
            }
        }
    }

    /// Authorize and build the matching view over `records`.
    pub fn disclose(&self, records: &[Record], entered: &str) -> Disclosure {
        let outcome = self.authorize(entered);
        info!(authorized = outcome.is_authorized(), "Secret checked");
        Disclosure {
            outcome,
            view: DisclosureView::build(records, outcome),
        }
    }
}

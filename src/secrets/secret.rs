//! Secret string wrapper.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// A secret value that is wiped on drop and never printed.
///
/// # Example
///
/// ```
/// use safeview::secrets::SecretString;
///
/// let secret = SecretString::new("hunter2");
/// assert_eq!(format!("{:?}", secret), "SecretString([REDACTED])");
/// assert!(secret.matches("hunter2"));
/// assert!(!secret.matches("Hunter2"));
/// ```
#[derive(Clone, Default)]
pub struct SecretString(Zeroizing<String>);

impl SecretString {
    /// Wrap a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Borrow the plaintext. Keep the borrow short.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the secret is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact, case-sensitive comparison in constant time.
    ///
    /// Time depends only on the lengths, never on where the values differ.
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.expose().as_bytes(), candidate.as_bytes())
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

/// Byte comparison that does not short-circuit on the first difference.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    // ct_eq on slices returns false for unequal lengths without
    // inspecting contents.
    bool::from(a.ct_eq(b))
}

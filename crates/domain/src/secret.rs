//! Password wrapper that zeroes its memory on drop and never prints itself.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Credential string held by the settings types.
///
/// `Debug` and `Display` are redacted; use [`Secret::expose`] only at the
/// point where the plain value is handed to a driver.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    inner: String,
}

impl Secret {
    /// Wrap a plain string.
    pub fn new(value: impl Into<String>) -> Self {
        Self { inner: value.into() }
    }

    /// Expose the inner value (use with caution)
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// Not constant-time; only used for settings equality in tests and config reloads.
impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Secret {}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(***)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates the secret redaction scenario.
    ///
    /// Assertions:
    /// - Confirms `Debug` renders as `Secret(***)`.
    /// - Confirms `Display` renders as `***`.
    /// - Confirms `expose()` still yields the plain value.
    #[test]
    fn test_secret_is_redacted() {
        let secret = Secret::new("hunter2");
        assert_eq!(format!("{:?}", secret), "Secret(***)");
        assert_eq!(secret.to_string(), "***");
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn test_secret_equality() {
        assert_eq!(Secret::new("a"), Secret::new("a"));
        assert_ne!(Secret::new("a"), Secret::new("b"));
        assert!(Secret::new("").is_empty());
    }
}

// src/application/ports/security.rs

/// Compares a presented token against the configured secret.
pub trait SecretMatcher: Send + Sync {
    fn matches(&self, presented: &str, expected: &str) -> bool;
}

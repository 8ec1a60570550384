use crate::application::ports::security::SecretMatcher;
use sha2::{Digest, Sha256};

/// Compares SHA-256 digests of both values in constant time, so neither the
/// secret's length nor the position of the first differing byte leaks.
#[derive(Default, Clone)]
pub struct DigestSecretMatcher;

impl SecretMatcher for DigestSecretMatcher {
    fn matches(&self, presented: &str, expected: &str) -> bool {
        let presented = Sha256::digest(presented.as_bytes());
        let expected = Sha256::digest(expected.as_bytes());
        presented
            .iter()
            .zip(expected.iter())
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_identical_secrets() {
        let matcher = DigestSecretMatcher;
        assert!(matcher.matches("s3cret", "s3cret"));
        assert!(!matcher.matches("s3cret", "s3cret "));
        assert!(!matcher.matches("", "s3cret"));
    }
}

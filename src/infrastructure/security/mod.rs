pub mod secret;

pub use secret::DigestSecretMatcher;

//! Constrained random password generation from a cryptographically secure
//! source.
//!
//! The library exposes a single operation, [`generate`], which takes a
//! [`GenerationRequest`] and returns either a password of exactly the
//! requested length or a typed error. Every successful result draws only from
//! the alphabets of the requested character categories, contains at least one
//! character from each of them (when the length allows), and carries no
//! positional bias from the coverage step.
//!
//! There is no state between calls; each request is an independent, pure
//! pipeline over the process CSPRNG.

use serde::{Deserialize, Serialize};

pub mod generation;
mod request;

pub use generation::{generate, generate_with};
pub use request::{GenerationRequest, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

/// Ceiling on the requested password length, to bound allocation on untrusted
/// input.
pub const MAX_LENGTH: i64 = 1000;

/// Why a generation request produced no password.
///
/// The validation variants are detected before any random draw; a random
/// source failure is terminal for the call and is never retried or downgraded
/// to a non-cryptographic source.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid password length: {0} (must be between 1 and {MAX_LENGTH})")]
    InvalidLength(i64),
    #[error("no character categories selected")]
    NoCategorySelected,
    #[error("the secure random source failed to supply entropy: {0}")]
    RandomSourceUnavailable(#[source] rand::Error),
}

/// A generated password.
///
/// Deliberately opaque in `Debug` output so passwords don't end up in logs or
/// panic messages.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

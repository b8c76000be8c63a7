use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// A plaintext password in transit between the request boundary and the
/// credential hasher. Wrapped in [`Secret`] so it is redacted from debug
/// output and never serialized.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Empty,
}

impl Password {
    pub fn parse(candidate: Secret<String>) -> Result<Self, PasswordError> {
        if candidate.expose_secret().trim().is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(candidate))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(candidate: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(candidate)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// The stored, one-way form of a password: a PHC string produced by the
/// credential hasher. Never equal to the plaintext and never serialized
/// into any response or log line.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(phc_string: String) -> Self {
        Self(Secret::from(phc_string))
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated account name.
///
/// Usernames are the primary identity of an account: at least five
/// characters, ASCII alphanumeric only, matched case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username is required")]
    TooShort,
    #[error("Username contains non alphanumeric characters - not allowed.")]
    NonAlphanumeric,
}

impl Username {
    pub const MIN_LENGTH: usize = 5;

    /// Every rule the candidate breaks, in declaration order. The two rules
    /// are independent so a candidate like "a-b" reports both.
    pub fn violations(candidate: &str) -> Vec<UsernameError> {
        let mut violations = Vec::new();
        if candidate.chars().count() < Self::MIN_LENGTH {
            violations.push(UsernameError::TooShort);
        }
        if !candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
            violations.push(UsernameError::NonAlphanumeric);
        }
        violations
    }

    pub fn parse(candidate: &str) -> Result<Self, UsernameError> {
        match Self::violations(candidate).into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(Self(candidate.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(candidate: String) -> Result<Self, Self::Error> {
        Self::parse(&candidate)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

//! Structural validation of registration and profile-update payloads.
//!
//! Every rule is checked independently and all violations are collected,
//! so a client gets the complete list in one 422 response instead of one
//! failure at a time. No rule here touches persisted state; username
//! uniqueness is the store's concern.

use chrono::NaiveDate;
use secrecy::Secret;
use serde::Serialize;

use super::email::Email;
use super::password::Password;
use super::username::Username;

/// A single field-level rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, error: impl std::fmt::Display) -> Self {
        Self {
            field,
            message: error.to_string(),
        }
    }
}

/// Raw registration payload as it arrives from the request boundary.
#[derive(Debug)]
pub struct RegistrationCandidate {
    pub username: String,
    pub password: Secret<String>,
    pub email: String,
    pub birthday: Option<NaiveDate>,
}

/// A registration payload with every rule satisfied.
#[derive(Debug)]
pub struct ValidRegistration {
    pub username: Username,
    pub password: Password,
    pub email: Email,
    pub birthday: Option<NaiveDate>,
}

pub fn validate_registration(
    candidate: RegistrationCandidate,
) -> Result<ValidRegistration, Vec<Violation>> {
    let mut violations = Vec::new();

    for error in Username::violations(&candidate.username) {
        violations.push(Violation::new("Username", error));
    }
    let username = Username::parse(&candidate.username).ok();

    let password = match Password::parse(candidate.password) {
        Ok(password) => Some(password),
        Err(error) => {
            violations.push(Violation::new("Password", error));
            None
        }
    };

    let email = match Email::parse(&candidate.email) {
        Ok(email) => Some(email),
        Err(error) => {
            violations.push(Violation::new("Email", error));
            None
        }
    };

    match (violations.is_empty(), username, password, email) {
        (true, Some(username), Some(password), Some(email)) => Ok(ValidRegistration {
            username,
            password,
            email,
            birthday: candidate.birthday,
        }),
        _ => Err(violations),
    }
}

/// Raw profile-update payload. The username is taken from the request path
/// and is immutable, so it does not appear here; a missing password keeps
/// the stored hash.
#[derive(Debug)]
pub struct ProfileUpdateCandidate {
    pub password: Option<Secret<String>>,
    pub email: String,
    pub birthday: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
}

#[derive(Debug)]
pub struct ValidProfileUpdate {
    pub password: Option<Password>,
    pub email: Email,
    pub birthday: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
}

pub fn validate_profile_update(
    candidate: ProfileUpdateCandidate,
) -> Result<ValidProfileUpdate, Vec<Violation>> {
    let mut violations = Vec::new();

    let password = match candidate.password {
        None => None,
        Some(raw) => match Password::parse(raw) {
            Ok(password) => Some(password),
            Err(error) => {
                violations.push(Violation::new("Password", error));
                None
            }
        },
    };

    let email = match Email::parse(&candidate.email) {
        Ok(email) => Some(email),
        Err(error) => {
            violations.push(Violation::new("Email", error));
            None
        }
    };

    match (violations.is_empty(), email) {
        (true, Some(email)) => Ok(ValidProfileUpdate {
            password,
            email,
            birthday: candidate.birthday,
            death_date: candidate.death_date,
        }),
        _ => Err(violations),
    }
}

//! Credentials and account records exchanged with the authentication service.

use crate::domain::types::{Email, Gender, NonEmptyString, PhoneNumber, UserRole};

/// Login credentials that passed local validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: Email,
    pub password: String,
}

/// New account that passed local validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub username: NonEmptyString,
    pub email: Email,
    pub password: String,
    pub phone: PhoneNumber,
    pub gender: Gender,
    pub address: String,
    pub role: UserRole,
}

/// Outcome of a successful login: the opaque bearer token and the role tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub role: UserRole,
}

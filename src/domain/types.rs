//! Value objects shared by the portal's forms, content and API records.
//!
//! A value that made it into one of these wrappers has already been checked:
//! ids are positive, emails are lower-cased and valid, phone numbers are E.164.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Reasons a raw value was refused by one of the wrappers below.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("id must be a positive number")]
    NonPositiveId,
    #[error("not a valid email address")]
    InvalidEmail,
    /// Input was empty after trimming.
    #[error("value is empty")]
    EmptyString,
    #[error("not a valid phone number")]
    InvalidPhone,
    #[error("unexpected value: {0}")]
    InvalidValue(String),
}

/// Identifier of a blog article in the site content file.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub struct PostId(i32);

impl PostId {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value < 1 {
            return Err(TypeConstraintError::NonPositiveId);
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<i32> for PostId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        PostId::new(value)
    }
}

impl From<PostId> for i32 {
    fn from(id: PostId) -> Self {
        id.0
    }
}

/// Role tag returned by the authentication service.
///
/// Unknown tags fall back to [`UserRole::Patient`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Doctor,
    #[default]
    Patient,
}

impl UserRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Doctor => "doctor",
            UserRole::Patient => "patient",
        }
    }

    /// Path of the dashboard a user with this role lands on after login.
    pub const fn dashboard_path(self) -> &'static str {
        match self {
            UserRole::Admin => "/admin",
            UserRole::Doctor => "/doctor",
            UserRole::Patient => "/patient",
        }
    }
}

impl From<&str> for UserRole {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "doctor" => UserRole::Doctor,
            _ => UserRole::Patient,
        }
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        UserRole::from(value.as_str())
    }
}

impl From<UserRole> for String {
    fn from(value: UserRole) -> Self {
        value.as_str().to_string()
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender selected on the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown gender `{other}`"
            ))),
        }
    }
}

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let email = email.into().trim().to_lowercase();
        if !email.validate_email() {
            return Err(TypeConstraintError::InvalidEmail);
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phone number normalized to E.164.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses a phone number written in international format.
    pub fn new<S: AsRef<str>>(phone: S) -> Result<Self, TypeConstraintError> {
        let phone = phone.as_ref().trim();
        if phone.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let parsed = parse(None, phone).map_err(|_| TypeConstraintError::InvalidPhone)?;
        Ok(Self(parsed.format().mode(Mode::E164).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed string guaranteed to contain at least one visible character.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            Err(TypeConstraintError::EmptyString)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

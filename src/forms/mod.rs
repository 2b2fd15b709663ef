//! Form definitions backing the portal routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod auth;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
///
/// The display strings are shown to the visitor as flash messages.
pub enum FormError {
    #[error("Please check the highlighted fields: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Please enter your email and password.")]
    MissingCredentials,

    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number.")]
    InvalidPhoneNumber,

    #[error("Please select a valid gender.")]
    InvalidGender,

    #[error("This account type cannot be registered online.")]
    InvalidRole,
}

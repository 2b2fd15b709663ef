//! Boundary to the clinic's HTTP API.
//!
//! Services talk to the API only through [`PortalApi`], and every call comes
//! back as an [`ApiResult`] so callers match on [`ApiError`] variants instead
//! of probing response payloads.

use thiserror::Error;

use crate::domain::auth::{AuthSession, Credentials, Registration};
use crate::domain::doctor::Doctor;

pub mod cache;
pub mod http;
#[cfg(test)]
pub mod stub;

pub use http::HttpPortalApi;

/// Failure reported by the clinic API or the transport beneath it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout).
    #[error("request failed: {0}")]
    Transport(String),
    /// The API answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    /// The API answered successfully but flagged the operation as failed.
    #[error("request was not successful")]
    Unsuccessful { message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Human readable message embedded in the API's error payload, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } | ApiError::Unsuccessful { message } => {
                message.as_deref()
            }
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations the portal needs from the clinic API.
#[allow(async_fn_in_trait)]
pub trait PortalApi {
    /// `GET /doctors`
    async fn list_doctors(&self) -> ApiResult<Vec<Doctor>>;
    /// Authenticates the user and returns the session token and role.
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthSession>;
    /// `POST /register`
    async fn register(&self, registration: &Registration) -> ApiResult<()>;
}

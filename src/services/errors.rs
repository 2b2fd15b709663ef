//! Error type shared by the portal services.

use thiserror::Error;

use crate::api::ApiError;
use crate::forms::FormError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The visitor is not signed in.
    #[error("authentication required")]
    Unauthenticated,

    /// The visitor is signed in with a role that may not see the page.
    #[error("access denied")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    /// A credential submission for this session is still waiting on the API.
    #[error("request already in progress")]
    InFlight,

    /// Local validation failed; the message is meant for the visitor.
    #[error("{0}")]
    Form(String),

    #[error("api error: {0}")]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl ServiceError {
    /// Message to show the visitor, falling back to `fallback` for failures
    /// that carry no presentable text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ServiceError::Form(message) => message.clone(),
            ServiceError::Api(err) => err
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            ServiceError::InFlight => {
                "Your previous request is still being processed.".to_string()
            }
            _ => fallback.to_string(),
        }
    }
}

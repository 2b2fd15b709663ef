//! `reqwest` implementation of [`PortalApi`].

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::cache::QueryCache;
use crate::api::{ApiError, ApiResult, PortalApi};
use crate::domain::auth::{AuthSession, Credentials, Registration};
use crate::domain::doctor::Doctor;
use crate::domain::types::{Gender, UserRole};

const DOCTORS_CACHE_KEY: &str = "doctors";

/// Client for the clinic API.
///
/// Holds a single `reqwest::Client` configured with the request timeout, and
/// caches the doctor listing for the configured TTL.
pub struct HttpPortalApi {
    base_url: String,
    client: reqwest::Client,
    doctors: QueryCache<Vec<Doctor>>,
}

/// Standard `{ success, data, message }` envelope used by listing endpoints.
#[derive(Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Default, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginUser {
    #[serde(default)]
    role: UserRole,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: LoginUser,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    phone: &'a str,
    gender: Gender,
    address: &'a str,
    role: UserRole,
}

#[derive(Deserialize)]
struct RegisterResponse {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl HttpPortalApi {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration, cache_ttl: Duration) -> ApiResult<Self> {
        Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                log::error!("Failed to build HTTP client: {e}");
                ApiError::Transport(e.to_string())
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            doctors: QueryCache::new(cache_ttl),
        })
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            log::error!("Invalid URL constructed: {e}");
            ApiError::InvalidUrl(e.to_string())
        })
    }

    /// Sends the request and returns the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> ApiResult<String> {
        let resp = request
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                log::error!("API request failed: {e}");
                ApiError::Transport(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            log::error!("Failed to read response body: {e}");
            ApiError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            log::error!(
                "API request failed with status {status}: {}",
                truncate_body(&body)
            );
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(body)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
        serde_json::from_str::<T>(body).map_err(|e| {
            log::error!(
                "Failed to parse response: {e} | body: {}",
                truncate_body(body)
            );
            ApiError::Decode(e.to_string())
        })
    }
}

impl PortalApi for HttpPortalApi {
    async fn list_doctors(&self) -> ApiResult<Vec<Doctor>> {
        if let Some(doctors) = self.doctors.get(DOCTORS_CACHE_KEY) {
            return Ok(doctors);
        }

        let url = self.url("/doctors")?;
        let body = self.send(self.client.get(url)).await?;
        let envelope: Envelope<Vec<Doctor>> = Self::decode(&body)?;

        if !envelope.success {
            return Err(ApiError::Unsuccessful {
                message: envelope.message,
            });
        }

        let doctors = envelope.data.unwrap_or_default();
        self.doctors.set(DOCTORS_CACHE_KEY, doctors.clone());
        Ok(doctors)
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthSession> {
        let url = self.url("/login")?;
        let payload = LoginRequest {
            email: credentials.email.as_str(),
            password: &credentials.password,
        };
        let body = self.send(self.client.post(url).json(&payload)).await?;

        match serde_json::from_str::<LoginResponse>(&body) {
            Ok(response) => Ok(AuthSession {
                token: response.token,
                role: response.user.role,
            }),
            Err(e) => match error_message(&body) {
                Some(message) => Err(ApiError::Unsuccessful {
                    message: Some(message),
                }),
                None => {
                    log::error!("Failed to parse login response: {e}");
                    Err(ApiError::Decode(e.to_string()))
                }
            },
        }
    }

    async fn register(&self, registration: &Registration) -> ApiResult<()> {
        let url = self.url("/register")?;
        let payload = RegisterRequest {
            username: registration.username.as_str(),
            email: registration.email.as_str(),
            password: &registration.password,
            phone: registration.phone.as_str(),
            gender: registration.gender,
            address: &registration.address,
            role: registration.role,
        };
        let body = self.send(self.client.post(url).json(&payload)).await?;

        if !body.trim().is_empty() {
            let response: RegisterResponse = Self::decode(&body)?;
            if !response.success {
                return Err(ApiError::Unsuccessful {
                    message: response.message,
                });
            }
        }

        if registration.role == UserRole::Doctor {
            self.doctors.invalidate(DOCTORS_CACHE_KEY);
        }
        Ok(())
    }
}

/// Extracts `message` (or `error`) from a JSON error payload.
fn error_message(body: &str) -> Option<String> {
    let payload = serde_json::from_str::<ErrorPayload>(body).unwrap_or_default();
    payload
        .message
        .or(payload.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

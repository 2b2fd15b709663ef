//! In-memory [`PortalApi`] used by service tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::api::{ApiError, ApiResult, PortalApi};
use crate::domain::auth::{AuthSession, Credentials, Registration};
use crate::domain::doctor::{Department, Doctor};
use crate::domain::types::UserRole;

pub struct StubApi {
    pub doctors: ApiResult<Vec<Doctor>>,
    pub login: ApiResult<AuthSession>,
    pub register: ApiResult<()>,
    calls: AtomicUsize,
}

impl StubApi {
    pub fn new() -> Self {
        Self {
            doctors: Ok(Vec::new()),
            login: Ok(AuthSession {
                token: "token-123".to_string(),
                role: UserRole::Patient,
            }),
            register: Ok(()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_doctors(mut self, count: i32) -> Self {
        self.doctors = Ok((1..=count)
            .map(|id| Doctor {
                id,
                avatar_url: None,
                full_name: format!("Doctor #{id}"),
                specialization: "Cardiology".to_string(),
                department: Department {
                    name: "Heart Center".to_string(),
                },
            })
            .collect());
        self
    }

    pub fn failing(mut self, err: ApiError) -> Self {
        self.doctors = Err(err.clone());
        self.login = Err(err.clone());
        self.register = Err(err);
        self
    }

    /// Number of calls that reached the API.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl PortalApi for StubApi {
    async fn list_doctors(&self) -> ApiResult<Vec<Doctor>> {
        self.record();
        self.doctors.clone()
    }

    async fn login(&self, _credentials: &Credentials) -> ApiResult<AuthSession> {
        self.record();
        self.login.clone()
    }

    async fn register(&self, _registration: &Registration) -> ApiResult<()> {
        self.record();
        self.register.clone()
    }
}

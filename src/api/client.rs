//! Simulated backend client
//!
//! Stands in for the real Nijouzu API while its contract is unsettled: every
//! call resolves after a fixed delay, the way the frontend mocks its
//! requests today. Swapping in a real HTTP client means implementing
//! [`NijouzuApi`](super::NijouzuApi) over the same types; nothing else in
//! the application changes.

use std::time::Duration;

use async_trait::async_trait;

use super::traits::NijouzuApi;
use super::types::{ApiError, ApiStatus, AuthPayload, RegisterRequest, SignInRequest};

/// Default address of the Nijouzu API backend
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8000";

/// Usernames the simulated backend pretends are taken, so the failure path
/// of the submission lifecycle is reachable without a real server.
const RESERVED_USERNAMES: &[&str] = &["admin", "root", "nijouzu"];

/// Health checks answer faster than auth calls
const HEALTH_LATENCY: Duration = Duration::from_millis(300);

/// Client standing in for the Nijouzu backend
pub struct SimulatedClient {
    /// Where the real backend would live
    address: String,
    submit_latency: Duration,
}

impl SimulatedClient {
    /// The latency is configurable so tests and impatient users are not
    /// stuck behind the default two-second mock delay
    pub fn new(address: impl Into<String>, submit_latency: Duration) -> Self {
        Self {
            address: address.into(),
            submit_latency,
        }
    }

    #[allow(dead_code)]
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl NijouzuApi for SimulatedClient {
    async fn health_check(&self) -> Result<ApiStatus, ApiError> {
        tokio::time::sleep(HEALTH_LATENCY).await;
        if !self.address.starts_with("http") {
            return Err(ApiError::Unreachable(self.address.clone()));
        }
        Ok(ApiStatus {
            message: "Welcome to Nijouzu API".to_string(),
            status: "running".to_string(),
        })
    }

    async fn sign_in(&self, request: SignInRequest) -> Result<AuthPayload, ApiError> {
        tokio::time::sleep(self.submit_latency).await;
        tracing::info!(email = %request.email, "simulated sign-in accepted");
        Ok(AuthPayload {
            message: format!("Welcome back, {}!", request.email),
        })
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthPayload, ApiError> {
        tokio::time::sleep(self.submit_latency).await;
        let lowered = request.username.to_ascii_lowercase();
        if RESERVED_USERNAMES.contains(&lowered.as_str()) {
            tracing::warn!(username = %request.username, "simulated registration rejected");
            return Err(ApiError::Rejected(format!(
                "Username \"{}\" is already taken",
                request.username
            )));
        }
        tracing::info!(username = %request.username, "simulated registration accepted");
        Ok(AuthPayload {
            message: format!("Account created for {}", request.username),
        })
    }
}

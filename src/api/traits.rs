//! Trait abstraction for the backend client to enable mocking in tests

use async_trait::async_trait;

use super::types::{ApiError, ApiStatus, AuthPayload, RegisterRequest, SignInRequest};

/// Operations the auth screens need from the Nijouzu backend.
///
/// The concrete transport is deliberately left open: the submission state
/// machine behaves identically whether this is backed by a real HTTP client,
/// the simulated client, or a test double.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NijouzuApi: Send + Sync {
    /// Check backend reachability and report its health payload
    async fn health_check(&self) -> Result<ApiStatus, ApiError>;

    /// Authenticate an existing account
    async fn sign_in(&self, request: SignInRequest) -> Result<AuthPayload, ApiError>;

    /// Create a new account
    async fn register(&self, request: RegisterRequest) -> Result<AuthPayload, ApiError>;
}

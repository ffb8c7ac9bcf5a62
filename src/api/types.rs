//! Request and response types exchanged with the Nijouzu backend

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Health payload returned by the backend root endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub message: String,
    pub status: String,
}

/// Credentials for an existing account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// New-account details. The confirm-password field never leaves the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Outcome payload of a successful sign-in or registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub message: String,
}

/// Errors surfaced by the backend client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend unreachable at {0}")]
    Unreachable(String),
    #[error("{0}")]
    Rejected(String),
}

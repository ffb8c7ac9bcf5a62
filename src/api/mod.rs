//! Backend client module for the Nijouzu API

mod client;
mod traits;
mod types;

pub use client::{SimulatedClient, DEFAULT_ADDRESS};
pub use traits::NijouzuApi;
pub use types::{ApiError, ApiStatus, AuthPayload, RegisterRequest, SignInRequest};

#[cfg(test)]
pub use traits::MockNijouzuApi;

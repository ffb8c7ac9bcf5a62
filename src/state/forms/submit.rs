//! Submission lifecycle shared by the auth forms

use std::future::Future;

use tokio::sync::oneshot;

use crate::api::{ApiError, AuthPayload};

/// Lifecycle of one submission episode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl SubmitState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The submit control is enabled in every state except Pending
    #[allow(dead_code)]
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    /// Form-level failure message, if the last episode failed
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Outcome delivered to the caller on the tick an episode settles
#[derive(Debug)]
pub enum SubmitOutcome {
    Succeeded(AuthPayload),
    Failed(String),
}

/// Drives `Idle → Pending → Succeeded | Failed` for a single form, with at
/// most one operation in flight.
///
/// The injected operation is spawned on the tokio runtime and reports back
/// through a oneshot channel that the event loop polls, so the UI stays
/// responsive while Pending. There is no cancellation: once started, an
/// episode runs to completion before a new one can begin.
#[derive(Debug, Default)]
pub struct Submission {
    state: SubmitState,
    inflight: Option<oneshot::Receiver<Result<AuthPayload, ApiError>>>,
}

impl Submission {
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Start a new episode. Invokes (spawns) `operation` exactly once.
    /// Returns false and does nothing while an earlier episode is still
    /// Pending.
    pub fn begin<F>(&mut self, operation: F) -> bool
    where
        F: Future<Output = Result<AuthPayload, ApiError>> + Send + 'static,
    {
        if self.state.is_pending() {
            return false;
        }
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(operation.await);
        });
        self.state = SubmitState::Pending;
        self.inflight = Some(rx);
        true
    }

    /// Check the in-flight episode without blocking. Returns the outcome on
    /// the tick it settles. Every settle path leaves Pending, including the
    /// operation's task dying before it reports (closed channel).
    pub fn poll(&mut self) -> Option<SubmitOutcome> {
        let rx = self.inflight.as_mut()?;
        match rx.try_recv() {
            Ok(Ok(payload)) => {
                self.inflight = None;
                self.state = SubmitState::Succeeded;
                Some(SubmitOutcome::Succeeded(payload))
            }
            Ok(Err(err)) => {
                let reason = err.to_string();
                self.inflight = None;
                self.state = SubmitState::Failed(reason.clone());
                Some(SubmitOutcome::Failed(reason))
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.inflight = None;
                let reason = "submission was interrupted".to_string();
                self.state = SubmitState::Failed(reason.clone());
                Some(SubmitOutcome::Failed(reason))
            }
        }
    }

    /// Drop a settled episode back to Idle. No-op while Pending.
    pub fn reset(&mut self) {
        if !self.state.is_pending() {
            self.state = SubmitState::Idle;
            self.inflight = None;
        }
    }
}

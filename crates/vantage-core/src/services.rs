//! Collaborator contracts.
//!
//! The controllers consume these services but never implement them: the
//! authentication backend, the toast/notification surface, and the router
//! all live in the surrounding application. Only their interfaces are
//! defined here.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by the authentication collaborator.
///
/// The reason is a human-readable message and is surfaced to the user
/// verbatim, so implementations should phrase it accordingly
/// (e.g. "Invalid credentials").
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{reason}")]
pub struct AuthError {
    pub reason: String,
}

impl AuthError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Authentication collaborator.
///
/// `login` and `logout` are the only suspension points in the control
/// subsystem; both resolve to unit on success or an [`AuthError`] carrying
/// the rejection reason.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn logout(&self) -> Result<(), AuthError>;
}

/// Severity attached to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Notification collaborator (toast surface). Fire-and-forget; no return
/// value is consumed.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Navigation collaborator (router). Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &str);
}

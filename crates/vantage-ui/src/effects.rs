//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use vantage_core::services::Severity;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Spawn the async login call against the authentication collaborator.
    SpawnLogin {
        task: TaskId,
        email: String,
        password: String,
    },

    /// Spawn the async logout call. Carries no task id: logout attempts are
    /// independent and never guarded against overlap.
    SpawnLogout,

    /// Ask the navigation collaborator to move to `route`.
    NavigateTo { route: String },

    /// Ask the notification collaborator to show a message.
    Notify { message: String, severity: Severity },
}

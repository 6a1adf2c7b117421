//! UI event types.
//!
//! Everything that can change state funnels through these events: user
//! interaction with the form, async results arriving from the inbox, and
//! task lifecycle bookkeeping. The reducer in `update` is the only consumer.

use vantage_core::validate::Field;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// A form field's value changed (every keystroke).
    FieldChanged { field: Field, value: String },

    /// Focus left a form field; the field counts as touched from here on.
    FieldBlurred { field: Field },

    /// The user triggered a submission attempt.
    SubmitRequested,

    /// The user triggered the top-bar logout action.
    LogoutRequested,

    /// The authentication collaborator's login call resolved.
    LoginFinished { result: Result<(), String> },

    /// The authentication collaborator's logout call resolved.
    LogoutFinished { result: Result<(), String> },

    /// An async task was spawned by the runtime.
    TaskStarted { kind: TaskKind, started: TaskStarted },

    /// An async task resolved; the inner event is applied only if the task
    /// is still the active one for its kind.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}

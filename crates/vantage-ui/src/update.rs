//! Top-level reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Two guards protect against stale asynchronous resolutions:
//! - `TaskCompleted` results are applied only while their task id is still
//!   the active one for its kind;
//! - `LoginFinished` is applied only while the liveness flag is still set.
//!   After teardown the resolution is logged and discarded, because there
//!   is no live UI state left to update.

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{login, session};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns
/// effects for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::FieldChanged { field, value } => {
            login::handle_field_change(&mut app.login, field, value);
            vec![]
        }
        UiEvent::FieldBlurred { field } => {
            login::handle_field_blur(&mut app.login, field);
            vec![]
        }
        UiEvent::SubmitRequested => login::handle_submit(&mut app.login, &mut app.task_seq),
        UiEvent::LogoutRequested => session::handle_logout_request(),
        UiEvent::LoginFinished { result } => {
            if !app.liveness.is_live() {
                tracing::debug!(?result, "login resolved after teardown; dropping");
                return vec![];
            }
            login::handle_login_result(&mut app.login, result);
            vec![]
        }
        UiEvent::LogoutFinished { result } => {
            session::handle_logout_result(result, &app.config.landing_route)
        }
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, "stale task completion dropped");
                vec![]
            }
        }
    }
}

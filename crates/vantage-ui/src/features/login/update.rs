//! Login feature reducer.
//!
//! Orchestrates one submission attempt end to end: field input, live
//! validation for touched fields, whole-schema validation at submit, and
//! reconciliation of the authentication result.

use vantage_core::validate::{ErrorKey, Field};

use super::state::{LoginFormState, SubmitStatus};
use crate::common::TaskSeq;
use crate::effects::UiEffect;

/// Applies a field edit. Live validation only runs for fields the user has
/// already touched.
pub fn handle_field_change(login: &mut LoginFormState, field: Field, value: String) {
    login.credentials.set(field, value);
    if login.touched.contains(&field) {
        revalidate_field(login, field);
    }
}

/// Marks a field touched and validates it immediately.
pub fn handle_field_blur(login: &mut LoginFormState, field: Field) {
    login.touched.insert(field);
    revalidate_field(login, field);
}

fn revalidate_field(login: &mut LoginFormState, field: Field) {
    match login
        .schema()
        .validate_field(field, login.credentials.get(field))
    {
        Some(message) => login.errors.insert(ErrorKey::Field(field), message),
        None => login.errors.remove(ErrorKey::Field(field)),
    }
}

/// Handles a submit trigger.
///
/// Runs the whole schema against the current input. A validation failure
/// returns the form to idle with the error map populated and issues no
/// call; a clean pass moves to submitting and emits exactly one
/// `SpawnLogin`. Triggers arriving while a call is in flight are ignored.
pub fn handle_submit(login: &mut LoginFormState, task_seq: &mut TaskSeq) -> Vec<UiEffect> {
    if login.status.is_submitting() {
        return vec![];
    }

    login.status = SubmitStatus::Validating;
    login.touched.insert(Field::Email);
    login.touched.insert(Field::Password);

    // Full recompute: stale field entries and any previous submit error
    // are replaced by this pass.
    login.errors = login.schema().validate(&login.credentials);
    if !login.errors.is_empty() {
        login.status = SubmitStatus::Idle;
        return vec![];
    }

    login.status = SubmitStatus::Submitting;
    vec![UiEffect::SpawnLogin {
        task: task_seq.next_id(),
        email: login.credentials.email.clone(),
        password: login.credentials.password.clone(),
    }]
}

/// Reconciles the authentication result into form state.
///
/// The caller has already established that the owning surface is live; a
/// retired instance never reaches this function.
pub fn handle_login_result(login: &mut LoginFormState, result: Result<(), String>) {
    match result {
        Ok(()) => {
            login.status = SubmitStatus::Succeeded;
            // The input has served its purpose; post-login navigation is a
            // collaborator's job, triggered by the success status.
            login.credentials.clear();
        }
        Err(reason) => {
            tracing::error!(%reason, "login attempt rejected");
            login.status = SubmitStatus::Failed;
            login.errors.insert(ErrorKey::Submit, reason);
        }
    }
}

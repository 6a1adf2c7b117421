//! Login form state.

use std::collections::BTreeSet;

use vantage_core::config::Config;
use vantage_core::validate::{self, Credentials, ErrorKey, Field, FieldErrors, Schema};

/// Lifecycle of one submission attempt.
///
/// `Validating` is transient: schema evaluation is synchronous inside the
/// submit reducer, so observers only ever see the other four states between
/// events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    /// True while an authentication call is in flight. The surrounding UI
    /// disables the submit affordance in this state; the reducer ignores
    /// submit triggers regardless.
    pub fn is_submitting(self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    pub fn is_succeeded(self) -> bool {
        matches!(self, SubmitStatus::Succeeded)
    }

    pub fn is_failed(self) -> bool {
        matches!(self, SubmitStatus::Failed)
    }
}

/// Login form state.
///
/// Owns the credential input, the touched set, the error map, and the
/// submission status. One instance per form surface; nothing else may
/// mutate these fields.
pub struct LoginFormState {
    /// Current credential input, prefilled with the configured demo values.
    pub credentials: Credentials,
    /// Fields the user has interacted with; live validation only surfaces
    /// errors for these.
    pub touched: BTreeSet<Field>,
    /// Validation failures plus the synthetic submit entry.
    pub errors: FieldErrors,
    /// Lifecycle state of the current submission attempt.
    pub status: SubmitStatus,

    schema: Schema,
}

impl LoginFormState {
    pub fn new(config: &Config) -> Self {
        Self {
            credentials: Credentials::new(
                config.demo_email.as_str(),
                config.demo_password.as_str(),
            ),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
            schema: validate::credentials(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The collaborator-reported authentication failure, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.errors.get(ErrorKey::Submit)
    }

    /// Clears everything owned by the form. Called at teardown.
    pub fn discard(&mut self) {
        self.credentials.clear();
        self.touched.clear();
        self.errors.clear();
        self.status = SubmitStatus::Idle;
    }
}

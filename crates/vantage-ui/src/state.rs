//! Application state composition.
//!
//! `AppState` bundles the login form slice with the task bookkeeping and
//! the liveness flag. It is owned by the runtime and mutated only by the
//! reducer in `update`.

use vantage_core::config::Config;

use crate::common::{Liveness, TaskSeq, Tasks};
use crate::login::LoginFormState;

pub struct AppState {
    /// Login form slice (credentials, touched set, errors, status).
    pub login: LoginFormState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// True until the owning surface is torn down.
    pub liveness: Liveness,
    /// Application configuration.
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            login: LoginFormState::new(&config),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            liveness: Liveness::new(),
            config,
        }
    }
}

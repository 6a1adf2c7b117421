//! Control-subsystem runtime - owns the collaborators, executes effects.
//!
//! This is the boundary where side effects happen: the reducer stays pure
//! and produces effects; this module executes them. The embedding view
//! layer feeds user interaction in through [`Runtime::dispatch`] and
//! observes the resulting state.
//!
//! ## Inbox Pattern
//!
//! Async handlers send `UiEvent`s to `inbox_tx`; the runtime drains
//! `inbox_rx` and routes each event back through the reducer. Within one
//! submission attempt this preserves the required ordering: validation is
//! observed before the call is issued, and the resolution handler runs
//! strictly after the attempt's call.

mod handlers;

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use vantage_core::config::Config;
use vantage_core::services::{AuthService, Navigator, Notifier};

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::update;

/// Runtime for the session-form control subsystem.
///
/// Owns the state and the collaborator services. Teardown (explicit
/// [`Runtime::shutdown`] or drop) retires the liveness flag, which turns
/// any still-in-flight resolution into a state no-op.
pub struct Runtime {
    /// Application state, mutated only through the reducer.
    pub state: AppState,
    auth: Arc<dyn AuthService>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    in_flight: Vec<JoinHandle<()>>,
}

impl Runtime {
    pub fn new(
        config: Config,
        auth: Arc<dyn AuthService>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config),
            auth,
            notifier,
            navigator,
            inbox_tx,
            inbox_rx,
            in_flight: Vec::new(),
        }
    }

    /// Feeds one event through the reducer and executes the returned
    /// effects.
    pub fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        self.execute_effects(effects);
    }

    /// Applies every queued inbox event and waits for in-flight calls to
    /// resolve, dispatching their results as they arrive. Returns once
    /// nothing is pending.
    pub async fn pump_until_idle(&mut self) {
        while let Some(handle) = self.in_flight.pop() {
            let _ = handle.await;
            self.drain_inbox();
        }
        self.drain_inbox();
    }

    /// Tears the surface down: the form's state is discarded and the
    /// liveness flag is retired, exactly once.
    pub fn shutdown(&mut self) {
        if self.state.liveness.is_live() {
            self.state.liveness.retire();
            self.state.login.discard();
        }
    }

    fn drain_inbox(&mut self) {
        while let Ok(event) = self.inbox_rx.try_recv() {
            self.dispatch(event);
        }
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::SpawnLogin {
                task,
                email,
                password,
            } => {
                let auth = Arc::clone(&self.auth);
                self.spawn_task(TaskKind::Login, task, move || {
                    handlers::login(auth, email, password)
                });
            }
            UiEffect::SpawnLogout => {
                let auth = Arc::clone(&self.auth);
                self.spawn_effect(move || handlers::logout(auth));
            }
            UiEffect::NavigateTo { route } => self.navigator.navigate_to(&route),
            UiEffect::Notify { message, severity } => self.notifier.notify(&message, severity),
        }
    }

    /// Spawns a plain async effect whose result event feeds the inbox.
    fn spawn_effect<F, Fut>(&mut self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let handle = tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
        self.in_flight.push(handle);
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted
    /// lifecycle, so the reducer can drop stale completions.
    fn spawn_task<F, Fut>(&mut self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id },
        });
        let handle = tokio::spawn(async move {
            let inner = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
        self.in_flight.push(handle);
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.state.liveness.retire();
    }
}

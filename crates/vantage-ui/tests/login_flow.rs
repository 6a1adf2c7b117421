//! End-to-end tests for the login and logout flows.
//!
//! Drives the runtime with in-memory collaborators: a scriptable auth
//! service, a recording notifier, and a recording navigator.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use vantage_core::config::Config;
use vantage_core::services::{AuthError, AuthService, Navigator, Notifier, Severity};
use vantage_core::validate::{ErrorKey, Field};
use vantage_ui::Runtime;
use vantage_ui::events::UiEvent;
use vantage_ui::login::SubmitStatus;

struct ScriptedAuth {
    login_response: Result<(), AuthError>,
    logout_response: Result<(), AuthError>,
    login_calls: Mutex<Vec<(String, String)>>,
    logout_calls: Mutex<usize>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedAuth {
    fn succeeding() -> Self {
        Self {
            login_response: Ok(()),
            logout_response: Ok(()),
            login_calls: Mutex::new(Vec::new()),
            logout_calls: Mutex::new(0),
            gate: None,
        }
    }

    fn rejecting_login(reason: &str) -> Self {
        Self {
            login_response: Err(AuthError::new(reason)),
            ..Self::succeeding()
        }
    }

    fn rejecting_logout(reason: &str) -> Self {
        Self {
            logout_response: Err(AuthError::new(reason)),
            ..Self::succeeding()
        }
    }

    fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::succeeding()
        }
    }
}

#[async_trait]
impl AuthService for ScriptedAuth {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.login_calls
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.login_response.clone()
    }

    async fn logout(&self) -> Result<(), AuthError> {
        *self.logout_calls.lock().unwrap() += 1;
        self.logout_response.clone()
    }
}

#[derive(Default)]
struct RecordingNotifier(Mutex<Vec<(String, Severity)>>);

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.0.lock().unwrap().push((message.to_string(), severity));
    }
}

#[derive(Default)]
struct RecordingNavigator(Mutex<Vec<String>>);

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: &str) {
        self.0.lock().unwrap().push(route.to_string());
    }
}

struct Harness {
    runtime: Runtime,
    auth: Arc<ScriptedAuth>,
    notifier: Arc<RecordingNotifier>,
    navigator: Arc<RecordingNavigator>,
}

fn harness(auth: ScriptedAuth) -> Harness {
    let auth = Arc::new(auth);
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let runtime = Runtime::new(
        Config::default(),
        Arc::clone(&auth) as Arc<dyn AuthService>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    );
    Harness {
        runtime,
        auth,
        notifier,
        navigator,
    }
}

#[tokio::test]
async fn successful_login_walks_idle_submitting_succeeded() {
    let mut h = harness(ScriptedAuth::succeeding());
    assert_eq!(h.runtime.state.login.status, SubmitStatus::Idle);

    h.runtime.dispatch(UiEvent::SubmitRequested);
    assert_eq!(h.runtime.state.login.status, SubmitStatus::Submitting);
    assert!(h.runtime.state.login.errors.is_empty());

    h.runtime.pump_until_idle().await;

    assert_eq!(h.runtime.state.login.status, SubmitStatus::Succeeded);
    assert!(h.runtime.state.login.errors.is_empty());
    assert!(h.runtime.state.login.credentials.email.is_empty());
    assert_eq!(
        h.auth.login_calls.lock().unwrap().as_slice(),
        &[("demo@demo.com".to_string(), "Password123".to_string())]
    );
    assert!(h.navigator.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_input_never_reaches_the_collaborator() {
    let mut h = harness(ScriptedAuth::succeeding());

    h.runtime.dispatch(UiEvent::FieldChanged {
        field: Field::Email,
        value: String::new(),
    });
    h.runtime.dispatch(UiEvent::FieldChanged {
        field: Field::Password,
        value: String::new(),
    });
    h.runtime.dispatch(UiEvent::SubmitRequested);
    h.runtime.pump_until_idle().await;

    assert!(h.auth.login_calls.lock().unwrap().is_empty());
    assert_eq!(h.runtime.state.login.status, SubmitStatus::Idle);
    assert_eq!(h.runtime.state.login.errors.len(), 2);
}

#[tokio::test]
async fn live_validation_waits_for_blur() {
    let mut h = harness(ScriptedAuth::succeeding());

    h.runtime.dispatch(UiEvent::FieldChanged {
        field: Field::Email,
        value: "not-an-email".to_string(),
    });
    assert!(h.runtime.state.login.errors.is_empty());

    h.runtime.dispatch(UiEvent::FieldBlurred { field: Field::Email });
    assert_eq!(
        h.runtime.state.login.errors.get(ErrorKey::Field(Field::Email)),
        Some("Must be a valid email")
    );

    h.runtime.dispatch(UiEvent::FieldChanged {
        field: Field::Email,
        value: "demo@demo.com".to_string(),
    });
    assert!(h.runtime.state.login.errors.is_empty());
}

#[tokio::test]
async fn rejected_login_surfaces_the_reason() {
    let mut h = harness(ScriptedAuth::rejecting_login("Invalid credentials"));

    h.runtime.dispatch(UiEvent::SubmitRequested);
    h.runtime.pump_until_idle().await;

    assert_eq!(h.runtime.state.login.status, SubmitStatus::Failed);
    assert_eq!(
        h.runtime.state.login.submit_error(),
        Some("Invalid credentials")
    );
    assert!(h.navigator.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn resubmit_while_in_flight_spawns_no_second_call() {
    let gate = Arc::new(Notify::new());
    let mut h = harness(ScriptedAuth::gated(Arc::clone(&gate)));

    h.runtime.dispatch(UiEvent::SubmitRequested);
    h.runtime.dispatch(UiEvent::SubmitRequested);

    gate.notify_one();
    h.runtime.pump_until_idle().await;

    assert_eq!(h.auth.login_calls.lock().unwrap().len(), 1);
    assert_eq!(h.runtime.state.login.status, SubmitStatus::Succeeded);
}

#[tokio::test]
async fn teardown_swallows_a_late_resolution() {
    let gate = Arc::new(Notify::new());
    let mut h = harness(ScriptedAuth::gated(Arc::clone(&gate)));

    h.runtime.dispatch(UiEvent::SubmitRequested);
    h.runtime.shutdown();

    let status_before = h.runtime.state.login.status;
    let errors_before = h.runtime.state.login.errors.clone();

    gate.notify_one();
    h.runtime.pump_until_idle().await;

    assert_eq!(h.runtime.state.login.status, status_before);
    assert_eq!(h.runtime.state.login.errors, errors_before);
}

#[tokio::test]
async fn logout_success_navigates_home() {
    let mut h = harness(ScriptedAuth::succeeding());

    h.runtime.dispatch(UiEvent::LogoutRequested);
    h.runtime.pump_until_idle().await;

    assert_eq!(h.navigator.0.lock().unwrap().as_slice(), &["/".to_string()]);
    assert!(h.notifier.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn logout_failure_notifies_and_stays() {
    let mut h = harness(ScriptedAuth::rejecting_logout("network down"));

    h.runtime.dispatch(UiEvent::LogoutRequested);
    h.runtime.pump_until_idle().await;

    assert!(h.navigator.0.lock().unwrap().is_empty());
    assert_eq!(
        h.notifier.0.lock().unwrap().as_slice(),
        &[("Unable to logout".to_string(), Severity::Error)]
    );
}

#[tokio::test]
async fn overlapping_logouts_each_resolve() {
    let mut h = harness(ScriptedAuth::succeeding());

    h.runtime.dispatch(UiEvent::LogoutRequested);
    h.runtime.dispatch(UiEvent::LogoutRequested);
    h.runtime.pump_until_idle().await;

    assert_eq!(*h.auth.logout_calls.lock().unwrap(), 2);
    assert_eq!(h.navigator.0.lock().unwrap().len(), 2);
}

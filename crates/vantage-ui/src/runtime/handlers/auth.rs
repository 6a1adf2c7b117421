use std::sync::Arc;

use vantage_core::services::AuthService;

use crate::events::UiEvent;

/// Performs the login call.
///
/// Pure async function - runtime spawns and sends the result to the inbox.
/// The rejection reason travels verbatim; it ends up as the form's submit
/// error.
pub async fn login(auth: Arc<dyn AuthService>, email: String, password: String) -> UiEvent {
    let result = auth
        .login(&email, &password)
        .await
        .map_err(|err| err.to_string());
    UiEvent::LoginFinished { result }
}

/// Performs the logout call.
///
/// Pure async function - runtime spawns and sends the result to the inbox.
pub async fn logout(auth: Arc<dyn AuthService>) -> UiEvent {
    let result = auth.logout().await.map_err(|err| err.to_string());
    UiEvent::LogoutFinished { result }
}

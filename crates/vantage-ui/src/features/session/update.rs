//! Session action reducer.
//!
//! Terminates the current session and leaves the application in a safe,
//! known view. Holds no persistent state: every logout trigger is an
//! independent attempt (logout is idempotent from the caller's
//! perspective), so there is no in-flight guard.

use vantage_core::services::Severity;

use crate::effects::UiEffect;

/// Message shown when the logout collaborator rejects.
pub const LOGOUT_FAILED_MESSAGE: &str = "Unable to logout";

pub fn handle_logout_request() -> Vec<UiEffect> {
    vec![UiEffect::SpawnLogout]
}

/// Reconciles the logout result.
///
/// Success navigates to the landing route. Failure is logged and surfaced
/// exclusively through the notification collaborator; the current view is
/// left unchanged and nothing escapes this controller.
pub fn handle_logout_result(result: Result<(), String>, landing_route: &str) -> Vec<UiEffect> {
    match result {
        Ok(()) => vec![UiEffect::NavigateTo {
            route: landing_route.to_string(),
        }],
        Err(reason) => {
            tracing::error!(%reason, "logout failed");
            vec![UiEffect::Notify {
                message: LOGOUT_FAILED_MESSAGE.to_string(),
                severity: Severity::Error,
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_navigates_to_the_landing_route() {
        let effects = handle_logout_result(Ok(()), "/");

        assert_eq!(
            effects,
            vec![UiEffect::NavigateTo {
                route: "/".to_string()
            }]
        );
    }

    #[test]
    fn failure_notifies_and_stays_put() {
        let effects = handle_logout_result(Err("network down".to_string()), "/");

        assert_eq!(
            effects,
            vec![UiEffect::Notify {
                message: "Unable to logout".to_string(),
                severity: Severity::Error,
            }]
        );
    }

    #[test]
    fn request_spawns_an_unguarded_logout() {
        assert_eq!(handle_logout_request(), vec![UiEffect::SpawnLogout]);
        // A second request before the first resolves is a fresh attempt.
        assert_eq!(handle_logout_request(), vec![UiEffect::SpawnLogout]);
    }
}

//! Session action feature: the top-bar logout flow.

pub mod update;

pub use update::{handle_logout_request, handle_logout_result, LOGOUT_FAILED_MESSAGE};

//! Login form feature: state and reducer for one credential submission
//! lifecycle.

pub mod state;
pub mod update;

pub use state::{LoginFormState, SubmitStatus};
pub use update::{handle_field_blur, handle_field_change, handle_login_result, handle_submit};

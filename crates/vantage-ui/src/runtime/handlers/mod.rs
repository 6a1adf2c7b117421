//! Effect handlers for the runtime.
//!
//! Handlers are pure async functions that return the `UiEvent` carrying
//! their result. The runtime spawns them and feeds the event back through
//! the inbox; they never mutate state directly.

mod auth;

pub use auth::*;

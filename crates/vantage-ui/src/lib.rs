//! Session-form control subsystem for the Vantage dashboard client.
//!
//! Two cooperating controllers, expressed as a pure reducer over owned
//! state plus a runtime that executes effects:
//!
//! - the **login form** (`login`): field input, declarative validation,
//!   one asynchronous authentication attempt at a time, and reconciliation
//!   guarded against the unmount race;
//! - the **session action** (`session`): logout, then navigate home on
//!   success or notify on failure.
//!
//! The rendering layer is not here; an embedding host feeds events into
//! [`Runtime::dispatch`] and renders from [`runtime::Runtime::state`].

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod runtime;
pub mod state;
pub mod update;

pub use features::{login, session};
pub use runtime::Runtime;

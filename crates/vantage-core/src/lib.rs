//! Core building blocks for the Vantage dashboard client.
//!
//! This crate holds everything the UI layer consumes but does not own:
//! collaborator contracts (authentication, notification, navigation),
//! the credential validation schema, configuration, and logging setup.

pub mod config;
pub mod logging;
pub mod services;
pub mod validate;

//! Core logic and abstractions for the Dockhand dispatcher.
//!
//! This crate defines the project registry, the compose action
//! vocabulary, target resolution, and the process runner used across
//! the Dockhand workspace.

pub mod command;
pub mod compose;
pub mod config;
pub mod constants;
pub mod resolve;
pub mod runner;

pub use command::{CommandKind, Invocation};
pub use compose::{has_running_services, ComposeAction};
pub use config::{Configuration, UnknownProject};
pub use resolve::resolve_targets;

//! Core logic for the todo list service.
//!
//! - [`store`] -- the in-memory [`TodoStore`] and its list operations
//! - [`action`] -- transport-independent request validation and dispatch
//! - [`view`] -- list-view shaping for display
//! - [`config`] -- YAML + environment configuration
//!
//! Everything here is synchronous. Serializing concurrent access to the
//! store is the caller's job; see `todos-web` for the HTTP binding.

pub mod action;
pub mod config;
pub mod store;
pub mod view;

pub use action::{dispatch, Action, ActionError, ActionOutcome, ActionRequest, Verb};
pub use config::{AppConfig, ConfigError, LogFormat};
pub use store::TodoStore;
pub use view::list_view;

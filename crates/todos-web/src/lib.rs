//! HTTP API for the todo list service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **List view** (`GET /`) returning the filtered items, the echoed
//!   filter, and the count of active items
//! - **Form actions** (`POST /`, `PUT /{target}`, `DELETE /{target}`)
//!   mapped onto the action table in [`todos_core::action`], with
//!   urlencoded or multipart bodies
//!
//! # Architecture
//!
//! A single [`TodoStore`](todos_core::TodoStore) lives behind a
//! `tokio::sync::RwLock` in [`AppState`]. Each mutation holds the write
//! lock for its whole validate-then-apply sequence; reads share the read
//! lock.

pub mod error;
pub mod form;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerError};
pub use state::AppState;

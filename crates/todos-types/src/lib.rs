//! Shared type definitions for the todo list service.
//!
//! This crate is the single source of truth for the data shapes used
//! across the workspace. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for the browser front-end.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for todo identifiers
//! - [`enums`] -- The list-view [`Filter`]
//! - [`structs`] -- The [`Todo`] record and the [`ListView`] payload

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::Filter;
pub use ids::TodoId;
pub use structs::{ListParams, ListView, Todo};

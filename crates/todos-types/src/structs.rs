//! Core entity structs for the todo list.
//!
//! [`Todo`] is the only persisted-shape record. [`ListView`] is the
//! payload served for the list view and is derived from the store on
//! every request.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::TodoId;

// ---------------------------------------------------------------------------
// Todo
// ---------------------------------------------------------------------------

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Todo {
    /// Opaque identifier, assigned at creation and never changed.
    pub id: TodoId,
    /// Display text. Accepted as given, including empty strings.
    pub title: String,
    /// Whether the item has been completed.
    pub completed: bool,
}

impl Todo {
    /// Create a new, not-yet-completed item with a fresh identifier.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            title: title.into(),
            completed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ListView
// ---------------------------------------------------------------------------

/// Echoed request parameters for the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ListParams {
    /// The raw `filter` query value, echoed verbatim (unknown values
    /// included) so the client can mark the selected filter.
    pub filter: Option<String>,
}

/// Response payload for the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ListView {
    /// Items passing the filter, in stored order.
    pub todos: Vec<Todo>,
    /// Echoed request parameters.
    pub params: ListParams,
    /// Number of active items in the whole store, regardless of filter.
    pub items_left: usize,
}

//! In-memory todo store.
//!
//! [`TodoStore`] holds the process-lifetime list of items in insertion
//! order. It has no durability and no internal locking: callers that
//! share it across tasks must serialize access themselves (the web layer
//! wraps it in a `RwLock`). Absence is never an error here; lookups
//! return `Option` and mutations of unknown IDs are no-ops.

use todos_types::{Filter, Todo, TodoId};
use tracing::debug;

/// The in-memory list of todo items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Return the items passing `filter`, in stored order.
    ///
    /// `None` returns every item.
    pub fn list(&self, filter: Option<Filter>) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|t| filter.is_none_or(|f| f.matches(t.completed)))
            .collect()
    }

    /// Return every item, in stored order.
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    /// Look up a single item.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Append a new, active item with a fresh ID and return that ID.
    ///
    /// The title is stored as given; empty and whitespace-only titles
    /// are accepted.
    pub fn add(&mut self, title: impl Into<String>) -> TodoId {
        let todo = Todo::new(title);
        let id = todo.id;
        debug!(%id, "todo added");
        self.todos.push(todo);
        id
    }

    /// Replace the title and completion flag of the item with `id`.
    ///
    /// Position and ID are preserved. Returns `false` and leaves the
    /// list untouched when no item matches.
    pub fn edit(&mut self, id: TodoId, title: impl Into<String>, completed: bool) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "edit of unknown todo ignored");
            return false;
        };
        todo.title = title.into();
        todo.completed = completed;
        true
    }

    /// Remove the item with `id`. Returns whether an item was removed.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    /// Flip every item in one direction.
    ///
    /// If any item is active, all items become completed; otherwise all
    /// become active. Returns the completion state that was applied.
    pub fn toggle_all(&mut self) -> bool {
        let completed = self.todos.iter().any(|t| !t.completed);
        for todo in &mut self.todos {
            todo.completed = completed;
        }
        completed
    }

    /// Remove every completed item, keeping the rest in order.
    ///
    /// Returns the number of items removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        before.saturating_sub(self.todos.len())
    }

    /// Number of items that are not completed.
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// Total number of items.
    pub const fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the store holds no items.
    pub const fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

//! Transport-independent request handling.
//!
//! An inbound request is a `(verb, action, target, fields)` tuple.
//! [`dispatch`] validates it against the action table and then invokes
//! exactly one [`TodoStore`] operation. Validation always completes
//! before the store is touched, so a rejected request never leaves a
//! partial mutation behind.
//!
//! | Verb | Action | Store call |
//! |------|--------|------------|
//! | `Update` | `toggle-all` | [`TodoStore::toggle_all`] |
//! | `Update` | `toggle-completed` | [`TodoStore::edit`] with the existing title |
//! | `Update` | `edit-title` | [`TodoStore::edit`] with the existing completion flag |
//! | `Delete` | `delete-todo` | [`TodoStore::delete`] |
//! | `Delete` | `clear-completed` | [`TodoStore::clear_completed`] |
//! | `Create` | `new-todo` (or `add`) | [`TodoStore::add`] |

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use todos_types::TodoId;
use tracing::{debug, warn};

use crate::store::TodoStore;

/// Form field names understood by [`dispatch`].
pub mod fields {
    /// Names the action to perform. Required on every request.
    pub const ACTION: &str = "_action";
    /// Title of a new item.
    pub const NEW_TODO: &str = "new-todo";
    /// Replacement title for `edit-title`.
    pub const NEW_TITLE: &str = "new-title";
    /// Checkbox state for `toggle-completed`; `"on"` means completed.
    pub const COMPLETED: &str = "completed";
}

// ---------------------------------------------------------------------------
// Verb / Action
// ---------------------------------------------------------------------------

/// The write intent of a request, mirroring the HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    /// Create a new item (`POST`).
    Create,
    /// Update one or more items (`PUT`).
    Update,
    /// Remove one or more items (`DELETE`).
    Delete,
}

impl core::fmt::Display for Verb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// A named operation. Several actions share a verb, so the name is what
/// disambiguates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Complete everything, or un-complete everything if nothing is active.
    ToggleAll,
    /// Set the completion flag of one item.
    ToggleCompleted,
    /// Replace the title of one item.
    EditTitle,
    /// Remove one item.
    DeleteTodo,
    /// Remove every completed item.
    ClearCompleted,
    /// Append a new item.
    NewTodo,
}

impl Action {
    /// The wire name of this action.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToggleAll => "toggle-all",
            Self::ToggleCompleted => "toggle-completed",
            Self::EditTitle => "edit-title",
            Self::DeleteTodo => "delete-todo",
            Self::ClearCompleted => "clear-completed",
            Self::NewTodo => "new-todo",
        }
    }

    /// The only verb this action may be paired with.
    pub const fn verb(self) -> Verb {
        match self {
            Self::ToggleAll | Self::ToggleCompleted | Self::EditTitle => Verb::Update,
            Self::DeleteTodo | Self::ClearCompleted => Verb::Delete,
            Self::NewTodo => Verb::Create,
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle-all" => Ok(Self::ToggleAll),
            "toggle-completed" => Ok(Self::ToggleCompleted),
            "edit-title" => Ok(Self::EditTitle),
            "delete-todo" => Ok(Self::DeleteTodo),
            "clear-completed" => Ok(Self::ClearCompleted),
            "new-todo" | "add" => Ok(Self::NewTodo),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / outcome / error
// ---------------------------------------------------------------------------

/// An inbound request, independent of transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    /// The write intent.
    pub verb: Verb,
    /// Item identifier for per-item actions (the path segment in HTTP).
    pub target: Option<String>,
    /// Remaining named string fields (form body).
    pub fields: BTreeMap<String, String>,
}

impl ActionRequest {
    /// Build a request from a verb, optional target, and raw form fields.
    pub const fn new(verb: Verb, target: Option<String>, fields: BTreeMap<String, String>) -> Self {
        Self {
            verb,
            target,
            fields,
        }
    }

    /// Look up a named field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The raw action name, if present.
    pub fn action_name(&self) -> Option<&str> {
        self.field(fields::ACTION)
    }
}

/// What a successful [`dispatch`] did to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// A new item was appended.
    Added {
        /// The new item's ID.
        id: TodoId,
    },
    /// An existing item was edited in place.
    Edited {
        /// The edited item's ID.
        id: TodoId,
    },
    /// Every item was set to the same completion state.
    ToggledAll {
        /// The state that was applied.
        completed: bool,
    },
    /// A delete was processed.
    Deleted {
        /// Whether an item was actually removed.
        removed: bool,
    },
    /// Completed items were removed.
    Cleared {
        /// How many items were removed.
        removed: usize,
    },
}

/// Validation failures. Each aborts the request before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The `_action` field was absent.
    #[error("missing required field `_action`")]
    MissingAction,

    /// The action name is unknown, or not valid for the verb.
    #[error("unsupported action `{action}` for {verb} request")]
    UnknownAction {
        /// The request verb.
        verb: Verb,
        /// The raw action name.
        action: String,
    },

    /// A per-item action arrived without a target ID.
    #[error("missing target item for `{0}`")]
    MissingTarget(Action),

    /// The target ID does not resolve to an existing item.
    #[error("todo not found: {0}")]
    NotFound(String),

    /// A required form field was absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Resolve the action named by `request`, checking it against the verb.
///
/// # Errors
///
/// [`ActionError::MissingAction`] when the name is absent and
/// [`ActionError::UnknownAction`] when it is unknown or paired with the
/// wrong verb.
pub fn resolve_action(request: &ActionRequest) -> Result<Action, ActionError> {
    let name = request.action_name().ok_or(ActionError::MissingAction)?;
    match name.parse::<Action>() {
        Ok(action) if action.verb() == request.verb => Ok(action),
        _ => Err(ActionError::UnknownAction {
            verb: request.verb,
            action: name.to_owned(),
        }),
    }
}

/// Validate `request` and apply it to `store`.
///
/// The caller must hold exclusive access to `store` for the whole call;
/// the existence checks and the mutation are assumed to be atomic.
///
/// # Errors
///
/// Returns an [`ActionError`] if a required action name, target, or
/// field is missing, or if `toggle-completed` / `edit-title` names an
/// item that does not exist. The store is unchanged in every error case.
pub fn dispatch(store: &mut TodoStore, request: &ActionRequest) -> Result<ActionOutcome, ActionError> {
    let result = apply(store, request);
    match &result {
        Ok(outcome) => debug!(
            verb = %request.verb,
            action = request.action_name().unwrap_or_default(),
            target = request.target.as_deref().unwrap_or_default(),
            ?outcome,
            "action applied"
        ),
        Err(e) => warn!(
            verb = %request.verb,
            target = request.target.as_deref().unwrap_or_default(),
            error = %e,
            "action rejected"
        ),
    }
    result
}

fn apply(store: &mut TodoStore, request: &ActionRequest) -> Result<ActionOutcome, ActionError> {
    let action = resolve_action(request)?;

    match action {
        Action::ToggleAll => Ok(ActionOutcome::ToggledAll {
            completed: store.toggle_all(),
        }),
        Action::ToggleCompleted => {
            let (id, title) = {
                let todo = existing(store, request, action)?;
                (todo.id, todo.title.clone())
            };
            let completed = request.field(fields::COMPLETED) == Some("on");
            store.edit(id, title, completed);
            Ok(ActionOutcome::Edited { id })
        }
        Action::EditTitle => {
            let (id, completed) = {
                let todo = existing(store, request, action)?;
                (todo.id, todo.completed)
            };
            let title = request
                .field(fields::NEW_TITLE)
                .ok_or(ActionError::MissingField(fields::NEW_TITLE))?;
            store.edit(id, title, completed);
            Ok(ActionOutcome::Edited { id })
        }
        Action::DeleteTodo => {
            let target = request
                .target
                .as_deref()
                .ok_or(ActionError::MissingTarget(action))?;
            let removed = target.parse::<TodoId>().is_ok_and(|id| store.delete(id));
            Ok(ActionOutcome::Deleted { removed })
        }
        Action::ClearCompleted => Ok(ActionOutcome::Cleared {
            removed: store.clear_completed(),
        }),
        Action::NewTodo => {
            let title = request
                .field(fields::NEW_TODO)
                .ok_or(ActionError::MissingField(fields::NEW_TODO))?;
            Ok(ActionOutcome::Added {
                id: store.add(title),
            })
        }
    }
}

/// Resolve the request target to an existing item.
///
/// A target that does not parse as a [`TodoId`] cannot name an item and
/// is reported as not found.
fn existing<'s>(
    store: &'s TodoStore,
    request: &ActionRequest,
    action: Action,
) -> Result<&'s todos_types::Todo, ActionError> {
    let target = request
        .target
        .as_deref()
        .ok_or(ActionError::MissingTarget(action))?;
    target
        .parse::<TodoId>()
        .ok()
        .and_then(|id| store.get(id))
        .ok_or_else(|| ActionError::NotFound(target.to_owned()))
}

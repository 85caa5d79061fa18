//! REST endpoint handlers for the todo API.
//!
//! Mutating handlers translate the HTTP method, path segment, and form
//! body (urlencoded or multipart, see [`FormBody`]) into an
//! [`ActionRequest`] and hand it to [`AppState::apply`]. On success they
//! answer `303 See Other` to `/`, sending the browser back to the
//! unfiltered list.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | List view (`?filter=active\|completed`) |
//! | `POST` | `/` | Create (`_action=new-todo`) |
//! | `GET` | `/{id}` | Single todo |
//! | `PUT` | `/{target}` | `toggle-all`, `toggle-completed`, `edit-title` |
//! | `DELETE` | `/{target}` | `delete-todo`, `clear-completed` |
//! | `POST` | `/{target}` | Same as `PUT`/`DELETE` via a `_method` form field |
//! | `GET` | `/health` | Liveness probe |

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use todos_core::{ActionRequest, Verb};
use todos_types::{ListView, Todo, TodoId};

use crate::error::WebError;
use crate::form::{FormBody, FormFields};
use crate::state::AppState;

/// Form field carrying a method override on `POST /{target}`.
pub const METHOD_FIELD: &str = "_method";

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /` endpoint.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ListQuery {
    /// `active`, `completed`, or anything else for no filter.
    pub filter: Option<String>,
}

// ---------------------------------------------------------------------------
// GET / -- list view
// ---------------------------------------------------------------------------

/// Return the list view, filtered by the optional `filter` query value.
///
/// The raw filter value is echoed back in `params.filter`.
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Json<ListView> {
    let store = state.store.read().await;
    Json(todos_core::list_view(&store, params.filter))
}

// ---------------------------------------------------------------------------
// GET /{id} -- single todo
// ---------------------------------------------------------------------------

/// Return a single todo.
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<Todo>, WebError> {
    let id = parse_id(&id_str)?;
    let store = state.store.read().await;

    store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| WebError::NotFound(format!("todo {id}")))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(serde_json::json!({
        "status": "ok",
        "todos": store.len(),
    }))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// `POST /` -- create a new todo.
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    FormBody(fields): FormBody,
) -> Result<Redirect, WebError> {
    submit(&state, Verb::Create, None, fields).await
}

/// `PUT /{target}` -- update one item, or all items when `target` is `all`.
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(target): Path<String>,
    FormBody(fields): FormBody,
) -> Result<Redirect, WebError> {
    submit(&state, Verb::Update, Some(target), fields).await
}

/// `DELETE /{target}` -- remove one item, or the completed ones when
/// `target` is `all`.
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(target): Path<String>,
    FormBody(fields): FormBody,
) -> Result<Redirect, WebError> {
    submit(&state, Verb::Delete, Some(target), fields).await
}

/// `POST /{target}` -- plain HTML forms can only `POST`, so the intended
/// method travels in a `_method` field (`put` or `delete`).
pub async fn override_todo(
    State(state): State<Arc<AppState>>,
    Path(target): Path<String>,
    FormBody(fields): FormBody,
) -> Result<Redirect, WebError> {
    let verb = match fields.get(METHOD_FIELD).map(String::as_str) {
        Some(m) if m.eq_ignore_ascii_case("put") => Verb::Update,
        Some(m) if m.eq_ignore_ascii_case("delete") => Verb::Delete,
        Some(m) => return Err(WebError::MethodOverride(m.to_owned())),
        None => return Err(WebError::MissingMethodOverride),
    };
    submit(&state, verb, Some(target), fields).await
}

async fn submit(
    state: &AppState,
    verb: Verb,
    target: Option<String>,
    fields: FormFields,
) -> Result<Redirect, WebError> {
    let request = ActionRequest::new(verb, target, fields);
    state.apply(&request).await?;
    Ok(Redirect::to("/"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a todo ID from a path segment.
fn parse_id(s: &str) -> Result<TodoId, WebError> {
    s.parse::<TodoId>()
        .map_err(|e| WebError::InvalidUuid(format!("{s}: {e}")))
}

//! List-view shaping.

use todos_types::{Filter, ListParams, ListView};

use crate::store::TodoStore;

/// Build the list-view payload for a raw `?filter=` value.
///
/// The raw value is resolved with [`Filter::from_query`] (unknown values
/// fall back to the unfiltered list) and echoed back unchanged.
pub fn list_view(store: &TodoStore, filter: Option<String>) -> ListView {
    let todos = store
        .list(Filter::from_query(filter.as_deref()))
        .into_iter()
        .cloned()
        .collect();

    ListView {
        todos,
        params: ListParams { filter },
        items_left: store.active_count(),
    }
}

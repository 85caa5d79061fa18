//! Enumeration types for the todo list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// A view-level predicate restricting which items are listed.
///
/// There is no `All` variant: the unfiltered view is represented by the
/// absence of a filter (`Option::<Filter>::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Filter {
    /// Items that are not yet completed.
    Active,
    /// Items that are completed.
    Completed,
}

impl Filter {
    /// Resolve a raw `?filter=` query value.
    ///
    /// `"active"` and `"completed"` map to their variants. Any other
    /// value, including an absent one, means "no filter"; unknown values
    /// are not an error.
    pub fn from_query(raw: Option<&str>) -> Option<Self> {
        match raw? {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether an item with the given completion flag passes this filter.
    pub const fn matches(self, completed: bool) -> bool {
        match self {
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }

    /// The query-string spelling of this filter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl core::fmt::Display for Filter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_query_values_resolve() {
        assert_eq!(Filter::from_query(Some("active")), Some(Filter::Active));
        assert_eq!(Filter::from_query(Some("completed")), Some(Filter::Completed));
    }

    #[test]
    fn unknown_or_absent_means_unfiltered() {
        assert_eq!(Filter::from_query(None), None);
        assert_eq!(Filter::from_query(Some("")), None);
        assert_eq!(Filter::from_query(Some("Active")), None);
        assert_eq!(Filter::from_query(Some("all")), None);
    }

    #[test]
    fn filters_partition_completion() {
        for completed in [false, true] {
            assert_ne!(
                Filter::Active.matches(completed),
                Filter::Completed.matches(completed)
            );
        }
    }

    #[test]
    fn round_trips_through_display() {
        for filter in [Filter::Active, Filter::Completed] {
            assert_eq!(Filter::from_query(Some(&filter.to_string())), Some(filter));
        }
    }
}

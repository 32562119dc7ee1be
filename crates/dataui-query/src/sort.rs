//! Sort direction and ordering entries.
//!
//! Provides [`Dir`] for sort direction and [`OrderBy`] for field-based ordering.
//! Both are shared by the query encoder and the client-side table state, so the
//! order a table shows locally is the order it asks the remote API for.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    /// Descending order (largest first).
    #[serde(rename = "DESC")]
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the wire name of this direction (`ASC` or `DESC`).
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "ASC",
            Dir::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ordering entry specifying a field and direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderBy {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    #[serde(rename = "order")]
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ascending ordering for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy {
            field: field.into(),
            dir: Dir::Asc,
        }
    }

    /// Creates a new descending ordering for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy {
            field: field.into(),
            dir: Dir::Desc,
        }
    }

    /// Creates a new ordering with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// Returns the ordering a header click on `field` produces from `current`.
    ///
    /// Clicking the active field flips its direction; clicking any other
    /// field starts a fresh ascending sort on it.
    pub fn toggled(current: Option<&OrderBy>, field: &str) -> OrderBy {
        match current {
            Some(active) if active.field == field => OrderBy::new(field, active.dir.flip()),
            _ => OrderBy::asc(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display_uses_wire_names() {
        assert_eq!(Dir::Asc.to_string(), "ASC");
        assert_eq!(Dir::Desc.to_string(), "DESC");
    }

    #[test]
    fn dir_flip() {
        assert_eq!(Dir::Asc.flip(), Dir::Desc);
        assert_eq!(Dir::Desc.flip(), Dir::Asc);
        assert!(Dir::default().is_asc());
    }

    #[test]
    fn order_by_constructors() {
        let asc = OrderBy::asc("name");
        assert_eq!(asc.field, "name");
        assert_eq!(asc.dir, Dir::Asc);

        let desc = OrderBy::desc("grade");
        assert_eq!(desc.field, "grade");
        assert!(desc.dir.is_desc());
    }

    #[test]
    fn toggled_flips_active_field() {
        let active = OrderBy::asc("name");
        assert_eq!(OrderBy::toggled(Some(&active), "name"), OrderBy::desc("name"));

        let active = OrderBy::desc("name");
        assert_eq!(OrderBy::toggled(Some(&active), "name"), OrderBy::asc("name"));
    }

    #[test]
    fn toggled_switches_field_to_ascending() {
        let active = OrderBy::desc("name");
        assert_eq!(OrderBy::toggled(Some(&active), "id"), OrderBy::asc("id"));
        assert_eq!(OrderBy::toggled(None, "id"), OrderBy::asc("id"));
    }
}

//! Filter clause construction.
//!
//! Every search is scoped by a conjunction of required-match clauses on the
//! index's internal metadata fields. Semantic filter keys are a closed enum,
//! so a clause on an unknown field is unrepresentable by construction.

use crate::fields::{DATA_BAG_FIELD, DATA_BAG_ITEM_TYPE, DATABASE_FIELD, TYPE_FIELD};

/// Object kinds indexed directly under the builtin type field.
///
/// Any other kind name is treated as a data-bag name, whose members are
/// indexed as `data_bag_item` documents tagged with the bag name.
pub const BUILTIN_KINDS: [&str; 4] = ["client", "environment", "node", "role"];

/// Returns true if `kind` is one of the builtin object kinds.
pub fn is_builtin_kind(kind: &str) -> bool {
    BUILTIN_KINDS.contains(&kind)
}

/// A semantic filter key, translated to its internal index field on render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    /// The database partition a document belongs to.
    Database,
    /// The builtin object type of a document.
    Type,
    /// The owning bag name of a data-bag item document.
    DataBag,
}

impl FilterKey {
    /// Returns the internal index field this key renders to.
    fn index_field(self) -> &'static str {
        match self {
            Self::Database => DATABASE_FIELD,
            Self::Type => TYPE_FIELD,
            Self::DataBag => DATA_BAG_FIELD,
        }
    }
}

/// An ordered set of required-match filter clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    /// Clauses in insertion order.
    clauses: Vec<(FilterKey, String)>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required-match clause.
    pub fn require(&mut self, key: FilterKey, value: impl Into<String>) {
        self.clauses.push((key, value.into()));
    }

    /// Builds the scoping filter for one database partition and object kind.
    ///
    /// Builtin kinds are flat and filter on the type field alone; any other
    /// kind is a data-bag name and filters on the item-type marker plus the
    /// bag name.
    pub fn scoped(database: &str, kind: &str) -> Self {
        let mut set = Self::new();
        set.require(FilterKey::Database, database);

        if is_builtin_kind(kind) {
            set.require(FilterKey::Type, kind);
        } else {
            set.require(FilterKey::Type, DATA_BAG_ITEM_TYPE);
            set.require(FilterKey::DataBag, kind);
        }

        set
    }

    /// Renders the clauses as a space-joined `+field:value` conjunction.
    pub fn render(&self) -> String {
        self.clauses
            .iter()
            .map(|(key, value)| format!("+{}:{}", key.index_field(), value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

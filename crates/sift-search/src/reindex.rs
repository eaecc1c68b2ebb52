//! Full index rebuild for one database partition.
//!
//! A rebuild wipes every index entry scoped to the partition, then walks
//! the document store kind by kind and resubmits each live object for
//! indexing. A store not-found while listing a kind is tolerated (there
//! happen to be none) and recorded in the report; any other failure is
//! fatal and aborts the remaining kinds.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use sift_query::fields::DATABASE_FIELD;
use sift_store::StoreError;

use crate::{
    error::ReindexError,
    transport::{ObjectStore, SearchIndex},
};

/// Builtin kinds walked during a rebuild.
///
/// Environment objects are a builtin search kind but are not part of the
/// rebuild walk; this matches the observed behavior of the system being
/// replaced. Use [`Reindexer::with_kinds`] to override.
pub const REINDEX_KINDS: [&str; 3] = ["client", "node", "role"];

/// Report key for the nested data-bag kind.
pub const DATA_BAG_KIND: &str = "data_bag";

/// Outcome of one kind's rebuild attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KindOutcome {
    /// Every instance of the kind was resubmitted for indexing.
    Success,
    /// The store had no instances of the kind to list.
    Failed,
}

impl fmt::Display for KindOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Per-kind outcomes of one rebuild, in kind-name order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReindexReport {
    /// Outcome per kind name.
    entries: BTreeMap<String, KindOutcome>,
}

impl ReindexReport {
    /// Creates an empty report.
    fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for one kind.
    fn record(&mut self, kind: &str, outcome: KindOutcome) {
        self.entries.insert(kind.to_string(), outcome);
    }

    /// Returns the outcome recorded for `kind`, if any.
    pub fn outcome(&self, kind: &str) -> Option<KindOutcome> {
        self.entries.get(kind).copied()
    }

    /// Iterates over (kind, outcome) entries in kind-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, KindOutcome)> {
        self.entries.iter().map(|(kind, outcome)| (kind.as_str(), *outcome))
    }

    /// Returns the number of kinds attempted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no kind was attempted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rebuilds the index contents for one database partition.
///
/// Concurrent rebuilds of the same partition race (one rebuild's deletion
/// can overlap another's indexing pass); callers must serialize them.
pub struct Reindexer<'a, I, S> {
    /// Index transport.
    index: &'a I,
    /// Document store transport.
    store: &'a S,
    /// Database partition being rebuilt.
    database: String,
    /// Builtin kinds to walk, in order.
    kinds: Vec<String>,
}

impl<'a, I: SearchIndex, S: ObjectStore> Reindexer<'a, I, S> {
    /// Creates a reindexer for `database` walking the default kind list.
    pub fn new(index: &'a I, store: &'a S, database: impl Into<String>) -> Self {
        Self::with_kinds(index, store, database, &REINDEX_KINDS)
    }

    /// Creates a reindexer walking a custom builtin kind list.
    pub fn with_kinds(
        index: &'a I,
        store: &'a S,
        database: impl Into<String>,
        kinds: &[&str],
    ) -> Self {
        Self {
            index,
            store,
            database: database.into(),
            kinds: kinds.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    /// Wipes the partition's index entries and repopulates them from the
    /// store, returning the per-kind report.
    pub fn rebuild(&self) -> Result<ReindexReport, ReindexError> {
        info!(database = %self.database, "rebuilding index");

        self.index
            .delete_by_query(&format!("{DATABASE_FIELD}:{}", self.database))?;
        self.index.commit()?;

        let mut report = ReindexReport::new();

        for kind in &self.kinds {
            let objects = match self.store.list_all(kind) {
                Ok(objects) => objects,
                Err(StoreError::NotFound { .. }) => {
                    warn!(kind, "no instances found during reindex");
                    report.record(kind, KindOutcome::Failed);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            info!(kind, count = objects.len(), "resubmitting for indexing");
            for object in &objects {
                self.store.submit_for_indexing(kind, object)?;
            }
            report.record(kind, KindOutcome::Success);
        }

        self.rebuild_data_bags(&mut report)?;

        Ok(report)
    }

    /// Walks the nested data-bag kind: every item of every bag.
    fn rebuild_data_bags(&self, report: &mut ReindexReport) -> Result<(), ReindexError> {
        let bags = match self.store.list_bag_names() {
            Ok(bags) => bags,
            Err(StoreError::NotFound { .. }) => {
                warn!("no data bags found during reindex");
                report.record(DATA_BAG_KIND, KindOutcome::Failed);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        for bag in &bags {
            let items = match self.store.list_items_in_bag(bag) {
                Ok(items) => items,
                // A bag deleted between the name listing and the item walk
                // just has nothing left to index.
                Err(StoreError::NotFound { .. }) => {
                    warn!(bag, "data bag vanished during reindex");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            info!(bag, count = items.len(), "resubmitting bag items");
            for item in &items {
                self.store.submit_for_indexing(bag, item)?;
            }
        }

        report.record(DATA_BAG_KIND, KindOutcome::Success);
        Ok(())
    }
}

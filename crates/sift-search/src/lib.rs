//! Search orchestration and index maintenance for sift.
//!
//! This crate composes the two external collaborators, the search index
//! and the backing document store, into the two operations callers see:
//!
//! - [`Searcher::search`]: scope a query to a database partition and object
//!   kind, rewrite it to index-native form, execute it, and hydrate the
//!   returned ids into full objects from the store.
//! - [`Reindexer::rebuild`]: wipe a partition's index entries and
//!   repopulate them from the store's current contents, kind by kind.
//!
//! Everything here is stateless per invocation and strictly sequential:
//! one index round-trip per search, followed by at most one store
//! round-trip. Concurrent searches are safe; concurrent rebuilds of the
//! same partition are not, and callers must serialize them externally.

#![warn(missing_docs)]

mod error;
mod params;
mod reindex;
mod search;
#[cfg(test)]
mod testing;
mod transport;

pub use error::{ReindexError, SearchError};
pub use params::{DEFAULT_ROWS, DEFAULT_START, SearchParams, default_sort};
pub use reindex::{DATA_BAG_KIND, KindOutcome, REINDEX_KINDS, Reindexer, ReindexReport};
pub use search::{Page, Searcher};
pub use transport::{ObjectStore, SearchIndex};

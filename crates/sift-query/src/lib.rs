//! Query rewriting and filter construction for sift search.
//!
//! The search index stores every logical field under a single physical
//! field (`content`), with the logical field name folded into the indexed
//! value: `role:web` is stored and queried as `content:role__=__web`.
//! This crate owns the two pure translation steps that make that scheme
//! invisible to callers:
//!
//! - **Transform**: rewrite a user query (`field:value` pairs, quoted
//!   phrases, range expressions, wildcards) into the index-native form.
//! - **Filter**: build the conjunctive scoping clause that pins a query to
//!   one database partition and one object kind.
//!
//! Both are total functions over their inputs: malformed query fragments
//! pass through verbatim rather than failing.
//!
//! # Example
//!
//! ```
//! use sift_query::transform;
//!
//! assert_eq!(transform("role:web"), "content:role__=__web");
//! assert_eq!(transform("*:*"), "*:*");
//! ```

#![warn(missing_docs)]

pub mod fields;
mod filter;
mod scan;
mod transform;

pub use filter::{BUILTIN_KINDS, FilterKey, FilterSet, is_builtin_kind};
pub use transform::transform;

//! Index field-name constants.
//!
//! The index predates typed schemas: objects from every database share one
//! flat document space, so scoping metadata is carried in deliberately
//! collision-proof field names. These are wire-level literals shared by the
//! query transformer, the filter builder, and the orchestration layer.

/// Physical field that every mangled logical field is stored under.
pub const CONTENT_FIELD: &str = "content";

/// Separator joining a logical field name to its value inside [`CONTENT_FIELD`].
pub const FIELD_VALUE_SEP: &str = "__=__";

/// Field holding the database partition a document belongs to.
pub const DATABASE_FIELD: &str = "X_CHEF_database_CHEF_X";

/// Field holding the builtin object type of a document.
pub const TYPE_FIELD: &str = "X_CHEF_type_CHEF_X";

/// Field holding the document's primary-key id in the document store.
pub const ID_FIELD: &str = "X_CHEF_id_CHEF_X";

/// Field holding the owning bag name on data-bag item documents.
pub const DATA_BAG_FIELD: &str = "data_bag";

/// Value of [`TYPE_FIELD`] that marks a document as a data-bag item.
pub const DATA_BAG_ITEM_TYPE: &str = "data_bag_item";

/// The match-everything query sentinel, passed through untransformed.
pub const MATCH_ALL: &str = "*:*";

/// Maximum indexable value, substituted for `*` as an open upper range bound.
pub const MAX_VALUE: char = '\u{fff0}';

//! Query transformation.
//!
//! Renders the scanned query back out in index-native form: every
//! recognized `field:value` construct is rewritten onto the physical
//! `content` field with the logical field name folded into the value,
//! while gaps and unrecognized text are reproduced exactly.

use crate::{
    fields::{CONTENT_FIELD, FIELD_VALUE_SEP, MATCH_ALL, MAX_VALUE},
    scan::{Node, Segment, scan},
};

/// Rewrites a user query into the index-native query string.
///
/// Total over any input: malformed fragments pass through unmodified, and
/// the match-all sentinel `*:*` is returned unchanged.
///
/// # Example
///
/// ```
/// use sift_query::transform;
///
/// assert_eq!(
///     transform("age:[18 TO 30]"),
///     "content:[age__=__18 TO age__=__30]"
/// );
/// ```
pub fn transform(raw: &str) -> String {
    if raw == MATCH_ALL {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len() * 2);
    for segment in scan(raw) {
        match segment {
            Segment::Gap(gap) => out.push_str(&gap),
            Segment::Node(node) => render(&mut out, &node),
        }
    }
    out
}

/// Renders one query node onto `out`.
fn render(out: &mut String, node: &Node) {
    match node {
        Node::Verbatim(text) => out.push_str(text),

        Node::Pair {
            prefix,
            field,
            value,
            suffix,
        } => {
            out.push_str(prefix);
            push_mangled(out, field, value);
            out.push_str(suffix);
        }

        Node::Phrase {
            prefix,
            field,
            phrase,
            suffix,
        } => {
            out.push_str(prefix);
            out.push_str(CONTENT_FIELD);
            out.push_str(":\"");
            out.push_str(field);
            out.push_str(FIELD_VALUE_SEP);
            out.push_str(phrase);
            out.push('"');
            out.push_str(suffix);
        }

        Node::Range {
            prefix,
            field,
            open,
            lo,
            hi,
            close,
            suffix,
        } => {
            out.push_str(prefix);
            out.push_str(CONTENT_FIELD);
            out.push(':');
            out.push(*open);
            push_lower_bound(out, field, lo);
            out.push_str(" TO ");
            push_upper_bound(out, field, hi);
            out.push(*close);
            out.push_str(suffix);
        }

        Node::MatchAny { prefix, suffix } => {
            out.push_str(prefix);
            out.push_str(CONTENT_FIELD);
            out.push_str(":*");
            out.push_str(suffix);
        }
    }
}

/// Appends `content:field__=__value`.
fn push_mangled(out: &mut String, field: &str, value: &str) {
    out.push_str(CONTENT_FIELD);
    out.push(':');
    out.push_str(field);
    out.push_str(FIELD_VALUE_SEP);
    out.push_str(value);
}

/// Appends a mangled lower range bound; a `*` wildcard is kept bare.
fn push_lower_bound(out: &mut String, field: &str, lo: &str) {
    if lo == "*" {
        out.push('*');
    } else {
        out.push_str(field);
        out.push_str(FIELD_VALUE_SEP);
        out.push_str(lo);
    }
}

/// Appends a mangled upper range bound.
///
/// A `*` wildcard becomes the maximum indexable value so the bound stays a
/// mangled term rather than an unscoped wildcard.
fn push_upper_bound(out: &mut String, field: &str, hi: &str) {
    out.push_str(field);
    out.push_str(FIELD_VALUE_SEP);
    if hi == "*" {
        out.push(MAX_VALUE);
    } else {
        out.push_str(hi);
    }
}

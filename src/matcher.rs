//! Pairwise equivalence primitives for text, attribute values, and tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::compare::CompareOptions;
use crate::tree::TagName;

/// Text value standing for "match anything from here".
pub const WILDCARD_TEXT: &str = "...";
/// Tag name matching any other tag.
pub const WILDCARD_TAG: &str = "any";
/// Attribute key exempting a node pair from attribute checking.
pub const WILDCARD_ATTR: &str = "any";

const NS_WILDCARD_PREFIX: &str = "{...}";

static NORM_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n][ \t\n]+").expect("whitespace pattern compiles"));

/// Collapse interior whitespace runs to a single space and trim both ends.
///
/// Only runs of two or more characters collapse; a lone tab or newline is
/// kept verbatim.
pub fn norm_whitespace(value: &str) -> String {
    NORM_WHITESPACE.replace_all(value, " ").trim().to_string()
}

/// Compare two optional text values for equivalence.
///
/// `None` counts as empty. With `strip`, both sides are whitespace-normalized
/// before comparison; attribute values are compared with `strip = false`.
/// In wildcard mode a side containing [`WILDCARD_TEXT`] becomes a pattern the
/// other side must match from its start; the first argument's pattern wins
/// when both sides contain the token.
pub fn text_equivalent(
    x: Option<&str>,
    y: Option<&str>,
    strip: bool,
    opts: &CompareOptions,
) -> bool {
    let x = x.unwrap_or("");
    let y = y.unwrap_or("");
    let (x, y) = if strip {
        (norm_whitespace(x), norm_whitespace(y))
    } else {
        (x.to_string(), y.to_string())
    };

    if opts.wildcard {
        if x.contains(WILDCARD_TEXT) {
            return wildcard_match(&x, &y);
        }
        if y.contains(WILDCARD_TEXT) {
            return wildcard_match(&y, &x);
        }
    }
    x == y
}

/// Compare two tags for equivalence.
///
/// In wildcard mode the [`WILDCARD_TAG`] name matches anything, including a
/// comment, and a `{...}`-prefixed name constrains only the local part after
/// the last `}`. Comments only ever equal other comments.
pub fn tag_equivalent(x: &TagName, y: &TagName, opts: &CompareOptions) -> bool {
    if opts.wildcard && (is_wildcard_tag(x) || is_wildcard_tag(y)) {
        return true;
    }
    match (x, y) {
        (TagName::Element(x_name), TagName::Element(y_name)) => {
            if opts.wildcard
                && (x_name.starts_with(NS_WILDCARD_PREFIX) || y_name.starts_with(NS_WILDCARD_PREFIX))
            {
                return local_name(x_name) == local_name(y_name);
            }
            x_name == y_name
        }
        (TagName::Comment, TagName::Comment) => true,
        _ => false,
    }
}

fn is_wildcard_tag(tag: &TagName) -> bool {
    matches!(tag, TagName::Element(name) if name == WILDCARD_TAG)
}

fn local_name(name: &str) -> &str {
    name.rsplit('}').next().unwrap_or(name)
}

/// Prefix-anchored match of a `...`-holed pattern against a value.
///
/// Literal segments must appear in order starting at the beginning of
/// `value`; content after the final segment is accepted.
fn wildcard_match(pattern: &str, value: &str) -> bool {
    let expr = pattern
        .split(WILDCARD_TEXT)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    match Regex::new(&format!("(?s)^{expr}")) {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}

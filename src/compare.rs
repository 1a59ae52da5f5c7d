//! Recursive tree equivalence judgment.

use crate::matcher::{tag_equivalent, text_equivalent, WILDCARD_ATTR, WILDCARD_TEXT};
use crate::tree::XmlNode;

/// Configures comparison and diff behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareOptions {
    /// Render designated always-empty HTML tags without body or closing tag.
    pub html: bool,
    /// Enable `...`/`any` wildcard matching for text, tags, and attributes.
    pub wildcard: bool,
}

/// Compare two trees with default options.
pub fn compare(x: &XmlNode, y: &XmlNode) -> bool {
    compare_with_options(x, y, &CompareOptions::default())
}

/// Compare two trees for equivalence.
///
/// Depth-first and short-circuiting: tag, then text, then tail, then
/// attributes, then children pairwise by position. Children counts must
/// match exactly unless a side's text is the wildcard literal, which stands
/// for the entire subtree.
pub fn compare_with_options(x: &XmlNode, y: &XmlNode, opts: &CompareOptions) -> bool {
    if !tag_equivalent(&x.tag, &y.tag, opts) {
        return false;
    }
    if !text_equivalent(x.text.as_deref(), y.text.as_deref(), true, opts) {
        return false;
    }
    if !text_equivalent(x.tail.as_deref(), y.tail.as_deref(), true, opts) {
        return false;
    }

    if !attributes_wildcarded(x, y, opts) {
        if x.attributes.len() != y.attributes.len() {
            return false;
        }
        for ((x_key, x_value), (y_key, y_value)) in x.attributes.iter().zip(&y.attributes) {
            if x_key != y_key || !text_equivalent(Some(x_value), Some(y_value), false, opts) {
                return false;
            }
        }
    }

    if !elides_children(x) && !elides_children(y) {
        if x.children.len() != y.children.len() {
            return false;
        }
        for (x_child, y_child) in x.children.iter().zip(&y.children) {
            if !compare_with_options(x_child, y_child, opts) {
                return false;
            }
        }
    }

    true
}

fn attributes_wildcarded(x: &XmlNode, y: &XmlNode, opts: &CompareOptions) -> bool {
    opts.wildcard
        && (x.attributes.contains_key(WILDCARD_ATTR) || y.attributes.contains_key(WILDCARD_ATTR))
}

/// Raw text of exactly the wildcard literal elides all descendant checks.
fn elides_children(node: &XmlNode) -> bool {
    node.text.as_deref() == Some(WILDCARD_TEXT)
}

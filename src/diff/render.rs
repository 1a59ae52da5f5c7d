//! Annotated co-walk of two trees.
//!
//! Mirrors the comparison walk but never short-circuits: every divergence is
//! rendered in place, and subtrees present on one side only are handed to the
//! plain formatter under a `-`/`+` line prefix.

use quick_xml::escape::escape;

use crate::compare::CompareOptions;
use crate::diff::report::DiffReport;
use crate::format::{display_text, format_node, format_tree, html_empty_tag, lead_in};
use crate::matcher::{norm_whitespace, tag_equivalent, text_equivalent, WILDCARD_ATTR};
use crate::tree::{TagName, XmlNode};

/// Diff two trees with default options.
pub fn diff(x: &XmlNode, y: &XmlNode) -> DiffReport {
    diff_with_options(x, y, &CompareOptions::default())
}

/// Diff two trees, producing both standalone renderings and the merged,
/// annotated line sequence.
pub fn diff_with_options(x: &XmlNode, y: &XmlNode, opts: &CompareOptions) -> DiffReport {
    let mut lines = Vec::new();
    diff_node(x, y, 0, opts, &mut lines);
    DiffReport {
        left: format_tree(x, opts),
        right: format_tree(y, opts),
        lines,
    }
}

fn diff_node(
    x: &XmlNode,
    y: &XmlNode,
    indent: usize,
    opts: &CompareOptions,
    out: &mut Vec<String>,
) {
    let lead = lead_in("", indent);
    let empty_tag = html_empty_tag(&x.tag, opts);

    if (x.children.is_empty() && y.children.is_empty()) || empty_tag {
        let mut line = format!("{lead}{}", diff_open_tag(x, y, opts));
        if !empty_tag {
            line.push_str(&diff_text(x.text.as_deref(), y.text.as_deref(), opts));
            line.push_str(&diff_close_tag(x, y, opts));
        }
        line.push_str(&diff_text(x.tail.as_deref(), y.tail.as_deref(), opts));
        out.push(line);
        return;
    }

    out.push(format!("{lead}{}", diff_open_tag(x, y, opts)));
    let text = diff_text(x.text.as_deref(), y.text.as_deref(), opts);
    if !text.is_empty() {
        out.push(format!("{lead}{text}"));
    }

    let pairs = x.children.len().max(y.children.len());
    for i in 0..pairs {
        match (x.children.get(i), y.children.get(i)) {
            (Some(x_child), Some(y_child)) => diff_node(x_child, y_child, indent + 2, opts, out),
            (Some(x_child), None) => format_node(x_child, indent + 2, "-", opts, out),
            (None, Some(y_child)) => format_node(y_child, indent + 2, "+", opts, out),
            (None, None) => {}
        }
    }

    out.push(format!("{lead}{}", diff_close_tag(x, y, opts)));
    let tail = diff_text(x.tail.as_deref(), y.tail.as_deref(), opts);
    if !tail.is_empty() {
        out.push(format!("{lead}{tail}"));
    }
}

fn diff_open_tag(x: &XmlNode, y: &XmlNode, opts: &CompareOptions) -> String {
    if x.is_comment() && y.is_comment() {
        return "<!--".to_string();
    }
    format!(
        "<{}{}>",
        tag_annotation(&x.tag, &y.tag, opts),
        diff_attributes(x, y, opts)
    )
}

fn diff_close_tag(x: &XmlNode, y: &XmlNode, opts: &CompareOptions) -> String {
    if x.is_comment() && y.is_comment() {
        return "-->".to_string();
    }
    format!("</{}>", tag_annotation(&x.tag, &y.tag, opts))
}

/// Left side's name when the tags agree, `x (- y)` when they do not.
fn tag_annotation(x: &TagName, y: &TagName, opts: &CompareOptions) -> String {
    if tag_equivalent(x, y, opts) {
        x.display_name().to_string()
    } else {
        format!("{} (- {})", x.display_name(), y.display_name())
    }
}

/// Merge both attribute sets into rendered ` key="value"` fragments.
///
/// A two-pointer walk over the two sorted key sequences: shared keys render
/// once (annotated when the values differ), one-sided keys carry a `-`/`+`
/// sign. In wildcard mode a side facing an `any` marker on the other tree
/// renders unsigned, and a one-sided marker itself is omitted.
fn diff_attributes(x: &XmlNode, y: &XmlNode, opts: &CompareOptions) -> String {
    let x_wildcarded = opts.wildcard && x.attributes.contains_key(WILDCARD_ATTR);
    let y_wildcarded = opts.wildcard && y.attributes.contains_key(WILDCARD_ATTR);

    let mut rendered = String::new();
    let mut x_iter = x.attributes.iter().peekable();
    let mut y_iter = y.attributes.iter().peekable();

    loop {
        match (x_iter.peek().copied(), y_iter.peek().copied()) {
            (Some((x_key, x_value)), Some((y_key, y_value))) => {
                if x_key == y_key {
                    rendered.push_str(&shared_attribute(x_key, x_value, y_value, opts));
                    x_iter.next();
                    y_iter.next();
                } else if x_key < y_key {
                    rendered
                        .push_str(&one_sided_attribute(x_key, x_value, "-", y_wildcarded, opts));
                    x_iter.next();
                } else {
                    rendered
                        .push_str(&one_sided_attribute(y_key, y_value, "+", x_wildcarded, opts));
                    y_iter.next();
                }
            }
            (Some((x_key, x_value)), None) => {
                rendered.push_str(&one_sided_attribute(x_key, x_value, "-", y_wildcarded, opts));
                x_iter.next();
            }
            (None, Some((y_key, y_value))) => {
                rendered.push_str(&one_sided_attribute(y_key, y_value, "+", x_wildcarded, opts));
                y_iter.next();
            }
            (None, None) => break,
        }
    }

    rendered
}

fn shared_attribute(key: &str, x_value: &str, y_value: &str, opts: &CompareOptions) -> String {
    if text_equivalent(Some(x_value), Some(y_value), false, opts) {
        format!(" {key}=\"{}\"", escape(x_value))
    } else {
        format!(" {key}=\"{x_value} (- {y_value})\"")
    }
}

fn one_sided_attribute(
    key: &str,
    value: &str,
    sign: &str,
    other_wildcarded: bool,
    opts: &CompareOptions,
) -> String {
    if opts.wildcard && key == WILDCARD_ATTR {
        return String::new();
    }
    let sign = if other_wildcarded { "" } else { sign };
    format!(" {sign}{key}=\"{}\"", escape(value))
}

/// Left side's display text when equivalent, the raw `x (- y)` juxtaposition
/// when not. Blank on both sides renders nothing.
fn diff_text(x: Option<&str>, y: Option<&str>, opts: &CompareOptions) -> String {
    if text_equivalent(x, y, true, opts) {
        display_text(x)
    } else {
        format!(
            "{} (- {})",
            norm_whitespace(x.unwrap_or("")),
            norm_whitespace(y.unwrap_or(""))
        )
    }
}

//! Canonical indented line rendering of a single tree.

use quick_xml::escape::escape;

use crate::compare::CompareOptions;
use crate::tree::{TagName, XmlNode};

/// Tags rendered without body or closing tag under HTML mode.
pub(crate) const EMPTY_TAGS: &[&str] = &[
    "param", "img", "area", "br", "basefont", "input", "base", "meta", "link", "col",
];

/// Render a tree as a sequence of indented display lines.
pub fn format_tree(node: &XmlNode, opts: &CompareOptions) -> Vec<String> {
    let mut lines = Vec::new();
    format_node(node, 0, "", opts, &mut lines);
    lines
}

/// Render one node and its subtree, each line prefixed with `line_prefix`
/// followed by `indent` spaces.
pub(crate) fn format_node(
    node: &XmlNode,
    indent: usize,
    line_prefix: &str,
    opts: &CompareOptions,
    out: &mut Vec<String>,
) {
    let lead = lead_in(line_prefix, indent);
    let empty_tag = html_empty_tag(&node.tag, opts);

    if node.children.is_empty() || empty_tag {
        let mut line = format!("{lead}{}", open_tag(node));
        if !empty_tag {
            line.push_str(&display_text(node.text.as_deref()));
            line.push_str(&close_tag(&node.tag));
        }
        line.push_str(&display_text(node.tail.as_deref()));
        out.push(line);
        return;
    }

    out.push(format!("{lead}{}", open_tag(node)));
    let text = display_text(node.text.as_deref());
    if !text.is_empty() {
        out.push(format!("{lead}{text}"));
    }
    for child in &node.children {
        format_node(child, indent + 2, line_prefix, opts, out);
    }
    out.push(format!("{lead}{}", close_tag(&node.tag)));
    let tail = display_text(node.tail.as_deref());
    if !tail.is_empty() {
        out.push(format!("{lead}{tail}"));
    }
}

pub(crate) fn lead_in(line_prefix: &str, indent: usize) -> String {
    format!("{line_prefix}{:indent$}", "")
}

/// Escaped, end-trimmed text for display; empty when blank.
pub(crate) fn display_text(text: Option<&str>) -> String {
    match text {
        Some(t) if !t.trim().is_empty() => escape(t.trim()).into_owned(),
        _ => String::new(),
    }
}

pub(crate) fn html_empty_tag(tag: &TagName, opts: &CompareOptions) -> bool {
    opts.html && matches!(tag, TagName::Element(name) if EMPTY_TAGS.contains(&name.as_str()))
}

fn open_tag(node: &XmlNode) -> String {
    match &node.tag {
        TagName::Comment => "<!--".to_string(),
        TagName::Element(name) => {
            let mut tag = format!("<{name}");
            for (key, value) in &node.attributes {
                tag.push_str(&format!(" {key}=\"{}\"", escape(value.as_str())));
            }
            tag.push('>');
            tag
        }
    }
}

fn close_tag(tag: &TagName) -> String {
    match tag {
        TagName::Comment => "-->".to_string(),
        TagName::Element(name) => format!("</{name}>"),
    }
}

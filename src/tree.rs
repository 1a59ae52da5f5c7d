use std::collections::BTreeMap;

use serde::Serialize;

/// Tag of a tree node: a named element or a comment marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TagName {
    /// Named element tag, possibly carrying a `{namespace}` prefix.
    Element(String),
    /// Comment node marker.
    Comment,
}

impl TagName {
    /// Name used when the tag appears in rendered lines.
    pub fn display_name(&self) -> &str {
        match self {
            TagName::Element(name) => name,
            TagName::Comment => "!--",
        }
    }
}

/// A generic XML tree node.
///
/// Text placement follows the text/tail model: `text` is content before the
/// first child, `tail` is content after this node's closing tag, owned by
/// this node rather than the parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XmlNode {
    /// Element tag name or comment marker.
    pub tag: TagName,
    /// XML attributes keyed by name.
    pub attributes: BTreeMap<String, String>,
    /// Child nodes in document order.
    pub children: Vec<XmlNode>,
    /// Text content before the first child.
    pub text: Option<String>,
    /// Text content following this node's closing tag.
    pub tail: Option<String>,
}

impl XmlNode {
    /// Create a new element node with no attributes, children, or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: TagName::Element(tag.into()),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
            tail: None,
        }
    }

    /// Create a comment node holding the comment's content as text.
    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            tag: TagName::Comment,
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: Some(content.into()),
            tail: None,
        }
    }

    /// Whether this node is a comment.
    pub fn is_comment(&self) -> bool {
        self.tag == TagName::Comment
    }

    /// Return the first child element with the provided tag name.
    pub fn get_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children
            .iter()
            .find(|child| matches!(&child.tag, TagName::Element(name) if name == tag))
    }
}

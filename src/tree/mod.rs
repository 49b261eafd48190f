//! The parsed node tree.
//!
//! [`Node`] is a tagged variant over the three constructs the parser emits:
//! character data, elements, and comments. Ownership is strictly tree-shaped
//! — every element owns its children and there are no back-references — so a
//! parse result is a plain `Vec<Node>` that can be moved, cloned, and
//! compared freely. Nodes are immutable once parsing completes; the query
//! layer hands out borrowed views into the tree.

/// A name/value pair on an element.
///
/// Names are ASCII-lowercased at parse time. Values from quoted source have
/// character references decoded; bare values are taken verbatim. Source
/// order is preserved and duplicate names are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, lowercased.
    pub name: String,
    /// The attribute value. Empty when the source had no `=value`.
    pub value: String,
}

impl Attribute {
    /// Creates an attribute from anything string-like.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single node in a parsed HTML tree.
///
/// The doctype is represented as a synthetic element named `!DOCTYPE` with
/// no attributes and no children; every other element name is lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A run of character data with character references already decoded.
    Text(String),
    /// An element: lowercased name, attributes in source order, children.
    Element {
        /// The tag name, lowercased.
        name: String,
        /// Attributes in source order, duplicates preserved.
        attributes: Vec<Attribute>,
        /// Child nodes in document order.
        children: Vec<Node>,
    },
    /// The raw text between `<!--` and `-->`, with no entity decoding.
    Comment(String),
}

impl Node {
    /// Creates an element node.
    #[must_use]
    pub fn element(name: impl Into<String>, attributes: Vec<Attribute>, children: Vec<Node>) -> Self {
        Self::Element {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// Creates a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Creates a comment node.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment(content.into())
    }

    /// Returns the tag name of an element node.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the attributes of an element node, or an empty slice for
    /// text and comment nodes.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Self::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    /// Returns the children of an element node, or an empty slice for text
    /// and comment nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Returns the content of a text node.
    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            _ => None,
        }
    }

    /// Returns the content of a comment node.
    #[must_use]
    pub fn comment_value(&self) -> Option<&str> {
        match self {
            Self::Comment(content) => Some(content),
            _ => None,
        }
    }

    /// Returns `true` for element nodes.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    /// Returns the value of the first attribute with the given (lowercase)
    /// name on an element node.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

//! Markup tree consumed by the transform.
//!
//! The tree mirrors the hast shape: a `root` holding children, `element`
//! nodes with a tag name, a property map and children, and `text` nodes.
//! Comments, doctypes and raw data are kept only so they can be skipped.

use std::fmt;

use indexmap::IndexMap;

/// Property map of an element, keyed by property name (`className`, `htmlFor`, ...).
pub type Properties = IndexMap<String, PropertyValue>;

/// Kind of a markup node, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Element,
    Text,
    Comment,
    Doctype,
    Raw,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Element => "element",
            NodeKind::Text => "text",
            NodeKind::Comment => "comment",
            NodeKind::Doctype => "doctype",
            NodeKind::Raw => "raw",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single item of a list-valued property.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    String(String),
    Number(f64),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::String(value) => f.write_str(value),
            Token::Number(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::String(value.to_string())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token::String(value)
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Token::Number(value)
    }
}

impl From<i32> for Token {
    fn from(value: i32) -> Self {
        Token::Number(f64::from(value))
    }
}

/// Value of an element property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Explicitly absent (`null`/`undefined` in hast)
    Null,
    String(String),
    Number(f64),
    Bool(bool),
    List(Vec<Token>),
}

impl PropertyValue {
    /// JavaScript-style truthiness, used to drop falsy known booleans.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Null => false,
            PropertyValue::String(value) => !value.is_empty(),
            PropertyValue::Number(value) => *value != 0.0 && !value.is_nan(),
            PropertyValue::Bool(value) => *value,
            PropertyValue::List(_) => true,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl<T: Into<Token>> From<Vec<T>> for PropertyValue {
    fn from(values: Vec<T>) -> Self {
        PropertyValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropertyValue::Null, Into::into)
    }
}

/// Document root: an ordered list of children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Root {
    pub children: Vec<Node>,
}

/// An element with tag name, properties and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag_name: String,
    pub properties: Properties,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element without properties or children
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style property setter
    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set a property, replacing any previous value
    pub fn set_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.properties.insert(name.to_string(), value.into());
    }

    /// Get a property by its exact name
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Children that produce output: elements and text
    pub fn visible_children(&self) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .filter(|child| matches!(child, Node::Element(_) | Node::Text(_)))
    }
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Root(Root),
    Element(Element),
    Text(String),
    Comment(String),
    Doctype,
    Raw(String),
}

impl Node {
    /// Create a root node
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root { children })
    }

    /// Create an element node without properties or children
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a text node
    pub fn text(value: &str) -> Self {
        Node::Text(value.to_string())
    }

    /// Create a comment node
    pub fn comment(value: &str) -> Self {
        Node::Comment(value.to_string())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            Node::Doctype => NodeKind::Doctype,
            Node::Raw(_) => NodeKind::Raw,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Child nodes; empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(root) => &root.children,
            Node::Element(element) => &element.children,
            _ => &[],
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(value) => value.clone(),
            _ => self
                .children()
                .iter()
                .map(|child| child.text_content())
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Root> for Node {
    fn from(root: Root) -> Self {
        Node::Root(root)
    }
}

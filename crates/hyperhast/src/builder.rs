//! The element-construction seam.
//!
//! A [`Builder`] is anything with a hyperscript-like calling convention:
//! `(name, attributes)` for childless elements and
//! `(name, attributes, children)` otherwise.

use std::convert::Infallible;
use std::marker::PhantomData;

use indexmap::IndexMap;

use hyperhast_core::Element;

/// Attribute map handed to a builder.
pub type Props = IndexMap<String, Value>;

/// Style object: camelCased declaration name to value.
pub type Style = IndexMap<String, String>;

/// A normalized attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    Style(Style),
    /// Nested sub-map (`attributes` / `attrs`)
    Map(Props),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Props> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_style(&self) -> Option<&Style> {
        match self {
            Value::Style(style) => Some(style),
            _ => None,
        }
    }

    /// Scalar value as text, as it would appear in markup
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            Value::Bool(value) => Some(value.to_string()),
            Value::Style(_) | Value::Map(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// A child passed to a builder: a built node or raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Child<N> {
    Node(N),
    Text(String),
}

/// One builder invocation.
#[derive(Debug)]
pub struct Call<'a, N> {
    pub name: String,
    pub attributes: Props,
    /// `None` for the two-argument form; never `Some` of an empty list
    pub children: Option<Vec<Child<N>>>,
    /// The element being rendered; `None` for the detection probe
    pub context: Option<&'a Element>,
}

impl<N> Call<'_, N> {
    /// Number of positional arguments this call represents
    pub fn arity(&self) -> usize {
        if self.children.is_some() {
            3
        } else {
            2
        }
    }
}

/// Observable shape of a node a builder produced.
///
/// Builders report it from [`Builder::inspect`]; dialect detection reads
/// nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shape {
    /// The node's `type` marker, if it has one (`"VirtualNode"`)
    pub kind: Option<String>,
    /// The node carries an owner or store marker
    pub owner: bool,
    /// The node's reconciliation key, if set
    pub key: Option<String>,
    /// The node carries a framework rendering context
    pub framework_context: bool,
}

/// Markers carried by the builder itself rather than its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    pub context: bool,
    pub cleanup: bool,
}

/// An element-construction function.
pub trait Builder {
    /// Node type produced by the builder
    type Node;
    /// Error raised by a failing call
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build one element
    fn create(&mut self, call: Call<'_, Self::Node>) -> Result<Self::Node, Self::Error>;

    /// Describe a node this builder produced
    fn inspect(&self, _node: &Self::Node) -> Shape {
        Shape::default()
    }

    /// Markers on the builder itself
    fn markers(&self) -> Markers {
        Markers::default()
    }
}

/// Builder backed by a closure; always detected as the plain dialect.
pub struct FromFn<F, N> {
    f: F,
    _node: PhantomData<fn() -> N>,
}

/// Adapt a closure into a [`Builder`].
///
/// ```rust
/// use hyperhast::{from_fn, to_h, Call};
/// use hyperhast_core::Node;
///
/// let mut h = from_fn(|call: Call<'_, String>| call.name);
/// let name = to_h(&mut h, &Node::element("p"), ()).unwrap();
/// assert_eq!(name, "p");
/// ```
pub fn from_fn<N, F>(f: F) -> FromFn<F, N>
where
    F: FnMut(Call<'_, N>) -> N,
{
    FromFn {
        f,
        _node: PhantomData,
    }
}

impl<N, F> Builder for FromFn<F, N>
where
    F: FnMut(Call<'_, N>) -> N,
{
    type Node = N;
    type Error = Infallible;

    fn create(&mut self, call: Call<'_, N>) -> Result<N, Infallible> {
        Ok((self.f)(call))
    }
}

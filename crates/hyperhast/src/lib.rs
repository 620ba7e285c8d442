//! # hyperhast
//!
//! Render a markup tree through any hyperscript-like element builder.
//!
//! Element builders disagree on conventions: some take DOM properties,
//! some want attributes in a nested map, some expect `id` and `class` folded
//! into a CSS selector, some want style objects instead of strings, and some
//! need reconciliation keys. This crate detects which convention a builder
//! follows by probing it once, then walks the tree and calls the builder
//! with `(name, attributes)` or `(name, attributes, children)` shaped the
//! way that builder expects.
//!
//! ## Design
//!
//! - **Builder agnostic**: anything implementing [`Builder`] can render a tree
//! - **Dialect detection**: the [`Dialect`] is classified once per transform
//!   from the shape of a trial node
//! - **Injected metadata**: attribute names and semantics come from a
//!   [`Schema`]; [`PropertyInformation`] covers HTML and SVG
//!
//! ## Example
//!
//! ```rust
//! use hyperhast::{from_fn, to_h, Call, Value};
//! use hyperhast_core::{Element, Node};
//!
//! let tree = Node::root(vec![Element::new("h1").with_property("id", "a").into()]);
//!
//! let mut h = from_fn(|call: Call<'_, String>| {
//!     let id = call.attributes.get("id").and_then(Value::as_str).unwrap_or("");
//!     format!("<{} id=\"{}\"></{}>", call.name, id, call.name)
//! });
//!
//! let html = to_h(&mut h, &tree, ()).unwrap();
//! assert_eq!(html, "<h1 id=\"a\"></h1>");
//! ```

mod attributes;
pub mod builder;
pub mod dialect;
#[cfg(feature = "html")]
pub mod html;
mod options;
pub mod space;
pub mod style;
mod transform;
mod transformer;

pub use builder::{from_fn, Builder, Call, Child, FromFn, Markers, Props, Shape, Style, Value};
pub use dialect::{Dialect, Probe, VIRTUAL_NODE};
#[cfg(feature = "html")]
pub use html::parse_fragment;
pub use hyperhast_core::{Element, Node, PropertyInformation, PropertyValue, Schema, Space};
pub use options::{Options, Prefix, DEFAULT_PREFIX};
pub use style::{parse_style, StyleError, StyleErrorKind};
pub use transformer::Transformer;

/// Error type for hyperhast operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("builder is not callable")]
    InvalidBuilder,

    #[error("Expected root or element, not `{0}`")]
    InvalidNode(String),

    #[error("{tag_name}[style]:{source}")]
    StyleParse {
        tag_name: String,
        source: StyleError,
    },

    #[error("builder failed on `{tag_name}`: {source}")]
    Builder {
        tag_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Render `tree` through `builder` with the default metadata table.
///
/// `options` accepts `()`, a `bool` (enable or disable keys), a prefix
/// string, a [`Prefix`], a [`Space`] or full [`Options`].
pub fn to_h<B: Builder>(
    builder: &mut B,
    tree: &Node,
    options: impl Into<Options>,
) -> Result<B::Node> {
    Transformer::with_options(options).transform(builder, tree)
}

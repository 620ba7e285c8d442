//! hyperhast-core - markup tree and attribute metadata
//!
//! This crate provides the data structures and pure lookups that the
//! `hyperhast` transform consumes: the markup tree itself, the attribute-name
//! metadata tables for HTML and SVG, and helpers for space- and
//! comma-separated token lists.
//!
//! # Example
//!
//! ```rust
//! use hyperhast_core::{Element, Node, PropertyInformation, Schema, Space};
//!
//! let tree = Node::root(vec![Element::new("h1")
//!     .with_property("className", vec!["b", "c"])
//!     .with_child(Node::text("Hello"))
//!     .into()]);
//! assert_eq!(tree.text_content(), "Hello");
//!
//! let info = PropertyInformation.find(Space::Html, "className");
//! assert_eq!(info.attribute, "class");
//! ```

mod info;
mod node;
mod tokens;

pub use info::{Info, PropertyInformation, Schema, Space};
pub use node::{Element, Node, NodeKind, Properties, PropertyValue, Root, Token};
pub use tokens::{parse_commas, parse_spaces, stringify_commas, stringify_spaces};

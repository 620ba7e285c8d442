//! Transformer - the entry point for rendering a markup tree through a builder.

use std::borrow::Cow;

use hyperhast_core::{Element, Node, PropertyInformation, Schema};

use crate::builder::Builder;
use crate::dialect::Dialect;
use crate::options::Options;
use crate::transform::{transform, Context};
use crate::{Error, Result};

/// Renders markup trees through builders.
///
/// A transformer holds configuration only; every call to
/// [`Transformer::transform`] detects the builder's dialect afresh and
/// gets its own key counter, so one transformer can serve concurrent
/// renders.
pub struct Transformer<S = PropertyInformation> {
    options: Options,
    schema: S,
}

impl Transformer {
    /// Create a Transformer with default options
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a Transformer with custom options
    pub fn with_options(options: impl Into<Options>) -> Self {
        Self::with_schema(options, PropertyInformation)
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> Transformer<S> {
    /// Create a Transformer with custom options and attribute metadata
    pub fn with_schema(options: impl Into<Options>, schema: S) -> Self {
        Self {
            options: options.into(),
            schema,
        }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Render `tree` through `builder`, returning what the builder returns
    /// for the root element
    pub fn transform<B: Builder>(&self, builder: &mut B, tree: &Node) -> Result<B::Node> {
        self.transform_checked(Some(builder), Some(tree))
    }

    /// Like [`Transformer::transform`], for callers whose builder or tree
    /// may be missing.
    ///
    /// A missing builder fails with [`Error::InvalidBuilder`] before the
    /// tree is looked at; a missing tree fails with [`Error::InvalidNode`].
    pub fn transform_checked<B: Builder>(
        &self,
        builder: Option<&mut B>,
        tree: Option<&Node>,
    ) -> Result<B::Node> {
        let builder = builder.ok_or(Error::InvalidBuilder)?;
        let element = resolve_root(tree)?;

        let dialect = Dialect::detect(builder);
        let prefix = self.options.prefix.resolve(dialect);
        tracing::debug!(?dialect, ?prefix, space = self.options.space.as_str(), "starting transform");

        let mut ctx = Context::new(&self.schema, dialect, prefix);
        transform(builder, &element, self.options.space, &mut ctx)
    }
}

/// The element to render for `tree`.
///
/// A root with a single element child renders that child; any other root
/// is wrapped in a `div`.
fn resolve_root(tree: Option<&Node>) -> Result<Cow<'_, Element>> {
    match tree {
        Some(Node::Root(root)) => match root.children.as_slice() {
            [Node::Element(element)] => Ok(Cow::Borrowed(element)),
            children => Ok(Cow::Owned(Element {
                children: children.to_vec(),
                ..Element::new("div")
            })),
        },
        Some(Node::Element(element)) => Ok(Cow::Borrowed(element)),
        Some(other) => Err(Error::InvalidNode(other.kind().to_string())),
        None => Err(Error::InvalidNode("undefined".to_string())),
    }
}

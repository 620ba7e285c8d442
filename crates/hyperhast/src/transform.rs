//! Recursive markup-tree to builder-call transform.

use hyperhast_core::{parse_spaces, Element, Node, Schema, Space};

use crate::attributes::Normalizer;
use crate::builder::{Builder, Call, Child, Props, Value};
use crate::dialect::Dialect;
use crate::space;
use crate::{Error, Result};

/// Traversal state, owned by a single top-level transform
pub(crate) struct Context<'a, S: Schema + ?Sized> {
    normalizer: Normalizer<'a, S>,
    dialect: Dialect,
    prefix: Option<String>,
    key: usize,
}

impl<'a, S: Schema + ?Sized> Context<'a, S> {
    pub fn new(schema: &'a S, dialect: Dialect, prefix: Option<String>) -> Self {
        Self {
            normalizer: Normalizer::new(schema, dialect),
            dialect,
            prefix,
            key: 0,
        }
    }
}

/// Build `element` and its descendants; `parent_space` is the space of the
/// element's parent.
pub(crate) fn transform<B, S>(
    builder: &mut B,
    element: &Element,
    parent_space: Space,
    ctx: &mut Context<'_, S>,
) -> Result<B::Node>
where
    B: Builder,
    S: Schema + ?Sized,
{
    let space = space::enter(parent_space, &element.tag_name);
    let mut attributes = Props::new();

    for (name, value) in &element.properties {
        ctx.normalizer
            .add(&mut attributes, name, value, space, &element.tag_name)?;
    }

    let mut name = ctx.dialect.tag_name(&element.tag_name, space);

    if ctx.dialect == Dialect::AttributesDom && space != Space::Html {
        attributes.insert(
            "namespace".to_string(),
            Value::String(space.namespace().to_string()),
        );
    }

    if ctx.dialect.folds_selector() {
        name = fold_selector(name, &mut attributes);
    }

    if let Some(prefix) = &ctx.prefix {
        ctx.key += 1;
        attributes.insert(
            "key".to_string(),
            Value::String(format!("{}{}", prefix, ctx.key)),
        );
    }

    tracing::trace!(tag = %element.tag_name, ?space, "transforming element");

    let mut children = Vec::new();
    for child in element.visible_children() {
        match child {
            Node::Element(child) => {
                children.push(Child::Node(transform(builder, child, space, ctx)?));
            }
            Node::Text(value) => children.push(Child::Text(value.clone())),
            _ => {}
        }
    }

    // An explicit empty child list makes some builders treat void elements
    // as having content.
    let children = (!children.is_empty()).then_some(children);

    builder
        .create(Call {
            name,
            attributes,
            children,
            context: Some(element),
        })
        .map_err(|source| Error::Builder {
            tag_name: element.tag_name.clone(),
            source: Box::new(source),
        })
}

/// Move `id` and `class` into the tag name: `h1#a.b.c`
fn fold_selector(mut name: String, attributes: &mut Props) -> String {
    if let Some(id) = take_attribute(attributes, "id").and_then(|value| value.to_text()) {
        if !id.is_empty() {
            name.push('#');
            name.push_str(&id);
        }
    }

    if let Some(class) = take_attribute(attributes, "class").and_then(|value| value.to_text()) {
        for token in parse_spaces(&class) {
            name.push('.');
            name.push_str(&token);
        }
    }

    name
}

/// Remove `key` from the flat map, falling back to the `attrs` sub-map
fn take_attribute(attributes: &mut Props, key: &str) -> Option<Value> {
    if let Some(value) = attributes.shift_remove(key) {
        return Some(value);
    }

    let (value, now_empty) = match attributes.get_mut("attrs") {
        Some(Value::Map(attrs)) => {
            let value = attrs.shift_remove(key);
            (value, attrs.is_empty())
        }
        _ => return None,
    };

    if now_empty {
        attributes.shift_remove("attrs");
    }
    value
}

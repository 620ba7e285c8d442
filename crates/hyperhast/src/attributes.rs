//! Property normalization.
//!
//! Turns one raw `(name, value)` property of an element into the key, value
//! and destination (flat map or nested sub-map) the active dialect expects.

use hyperhast_core::{stringify_commas, stringify_spaces, Info, PropertyValue, Schema, Space};

use crate::builder::{Props, Value};
use crate::dialect::Dialect;
use crate::style::parse_style;
use crate::{Error, Result};

/// Normalizes properties for one dialect against one metadata table.
pub(crate) struct Normalizer<'a, S: Schema + ?Sized> {
    pub schema: &'a S,
    pub dialect: Dialect,
}

impl<'a, S: Schema + ?Sized> Normalizer<'a, S> {
    pub fn new(schema: &'a S, dialect: Dialect) -> Self {
        Self { schema, dialect }
    }

    /// Add property `name` of element `tag_name` to `props`.
    ///
    /// Nullish, `false` and NaN values are dropped, as are falsy known
    /// booleans for dialects with explicit boolean semantics.
    pub fn add(
        &self,
        props: &mut Props,
        name: &str,
        value: &PropertyValue,
        space: Space,
        tag_name: &str,
    ) -> Result<()> {
        let info = self.schema.find(space, name);

        let Some(mut value) = self.convert(&info, value) else {
            tracing::trace!(tag = tag_name, property = name, "dropping property");
            return Ok(());
        };

        if info.boolean && self.dialect == Dialect::SelectorDom {
            value = Value::String(String::new());
        }

        if info.property == "style" && self.dialect.object_style() {
            if let Value::String(declarations) = &value {
                let style = parse_style(declarations).map_err(|source| Error::StyleParse {
                    tag_name: tag_name.to_string(),
                    source,
                })?;
                value = Value::Style(style);
            }
        }

        match self.sub_map(&info) {
            Some(sub) => {
                let entry = props
                    .entry(sub.to_string())
                    .or_insert_with(|| Value::Map(Props::new()));
                if !matches!(entry, Value::Map(_)) {
                    *entry = Value::Map(Props::new());
                }
                if let Value::Map(map) = entry {
                    map.insert(info.attribute.clone(), value);
                }
            }
            None => {
                props.insert(self.inline_key(&info), value);
            }
        }

        Ok(())
    }

    fn convert(&self, info: &Info, value: &PropertyValue) -> Option<Value> {
        if self.dialect.explicit_booleans() && info.boolean && !value.is_truthy() {
            return None;
        }

        match value {
            PropertyValue::Null | PropertyValue::Bool(false) => None,
            PropertyValue::Number(number) if number.is_nan() => None,
            PropertyValue::String(text) => Some(Value::String(text.clone())),
            PropertyValue::Number(number) => Some(Value::Number(*number)),
            PropertyValue::Bool(flag) => Some(Value::Bool(*flag)),
            PropertyValue::List(tokens) if info.comma_separated => {
                Some(Value::String(stringify_commas(tokens)))
            }
            PropertyValue::List(tokens) => Some(Value::String(stringify_spaces(tokens))),
        }
    }

    /// Sub-map the property belongs in; class and style are always inline
    fn sub_map(&self, info: &Info) -> Option<&'static str> {
        if info.property == "className" || info.property == "style" {
            return None;
        }

        match self.dialect {
            Dialect::RetainedFramework => self.dialect.sub_map(),
            Dialect::AttributesDom | Dialect::SelectorDom if !info.must_use_property => {
                self.dialect.sub_map()
            }
            _ => None,
        }
    }

    /// Key of a property placed in the flat map
    fn inline_key(&self, info: &Info) -> String {
        match self.dialect {
            Dialect::RetainedDom => {
                if !info.defined
                    || info.attribute.starts_with("data-")
                    || info.attribute.starts_with("aria-")
                {
                    info.attribute.clone()
                } else {
                    self.schema
                        .react_name(&info.property)
                        .unwrap_or(&info.property)
                        .to_string()
                }
            }
            Dialect::AttributesDom => info.property.clone(),
            Dialect::Plain | Dialect::SelectorDom | Dialect::RetainedFramework => {
                info.attribute.clone()
            }
        }
    }
}

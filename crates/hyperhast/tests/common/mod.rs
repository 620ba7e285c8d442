//! Recording builders that mimic each builder convention.

#![allow(dead_code)]

use std::fmt;

use hyperhast::{Builder, Call, Child, Markers, Props, Shape, Value, VIRTUAL_NODE};

/// Which convention a [`Recorder`] imitates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Plain,
    RetainedDom,
    AttributesDom,
    SelectorDom,
    RetainedFramework,
    /// Plain builder whose trial call fails
    Fussy,
}

/// One recorded builder call
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub name: String,
    pub attributes: Props,
    pub children: Option<Vec<Child<Rendered>>>,
    /// Tag name of the context element, if any
    pub context: Option<String>,
}

impl Rendered {
    pub fn arity(&self) -> usize {
        if self.children.is_some() {
            3
        } else {
            2
        }
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Built child nodes, skipping text
    pub fn elements(&self) -> Vec<&Rendered> {
        self.children
            .iter()
            .flatten()
            .filter_map(|child| match child {
                Child::Node(node) => Some(node),
                Child::Text(_) => None,
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct Refused;

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("refused")
    }
}

impl std::error::Error for Refused {}

pub struct Recorder {
    pub flavor: Flavor,
    pub calls: usize,
    /// Fail when asked to build this tag
    pub refuse: Option<String>,
}

impl Recorder {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            calls: 0,
            refuse: None,
        }
    }
}

impl Builder for Recorder {
    type Node = Rendered;
    type Error = Refused;

    fn create(&mut self, call: Call<'_, Rendered>) -> Result<Rendered, Refused> {
        self.calls += 1;

        if self.flavor == Flavor::Fussy && call.context.is_none() {
            return Err(Refused);
        }
        if self.refuse.as_deref() == Some(call.name.as_str()) {
            return Err(Refused);
        }

        Ok(Rendered {
            name: call.name,
            attributes: call.attributes,
            children: call.children,
            context: call.context.map(|element| element.tag_name.clone()),
        })
    }

    fn inspect(&self, node: &Rendered) -> Shape {
        match self.flavor {
            Flavor::RetainedDom => Shape {
                owner: true,
                key: node.attr("key").and_then(Value::to_text),
                ..Shape::default()
            },
            Flavor::AttributesDom => Shape {
                kind: Some(VIRTUAL_NODE.to_string()),
                ..Shape::default()
            },
            Flavor::RetainedFramework => Shape {
                framework_context: true,
                ..Shape::default()
            },
            Flavor::Plain | Flavor::SelectorDom | Flavor::Fussy => Shape::default(),
        }
    }

    fn markers(&self) -> Markers {
        if self.flavor == Flavor::SelectorDom {
            Markers {
                context: true,
                cleanup: true,
            }
        } else {
            Markers::default()
        }
    }
}

/// Serialize a recorded tree as markup; nested maps are flattened and
/// style objects written back as declarations.
pub fn to_html(node: &Rendered) -> String {
    let mut out = format!("<{}", node.name);
    write_attributes(&mut out, &node.attributes);
    out.push('>');
    for child in node.children.iter().flatten() {
        match child {
            Child::Node(child) => out.push_str(&to_html(child)),
            Child::Text(text) => out.push_str(text),
        }
    }
    out.push_str(&format!("</{}>", node.name));
    out
}

fn write_attributes(out: &mut String, attributes: &Props) {
    for (name, value) in attributes {
        match value {
            Value::Map(map) => write_attributes(out, map),
            Value::Style(style) => {
                let declarations: Vec<String> = style
                    .iter()
                    .map(|(name, value)| format!("{}:{}", name, value))
                    .collect();
                out.push_str(&format!(" {}=\"{}\"", name, declarations.join(";")));
            }
            other => {
                let text = other.to_text().unwrap_or_default();
                out.push_str(&format!(" {}=\"{}\"", name, text));
            }
        }
    }
}

/// Shorthand for building a [`Props`] in assertions
pub fn props(entries: Vec<(&str, Value)>) -> Props {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

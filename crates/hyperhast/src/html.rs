//! HTML parsing support.
//!
//! Parses an HTML fragment with scraper and converts it into the markup
//! tree the transform consumes, resolving attribute names and value types
//! through the built-in property tables.

use scraper::{ElementRef, Html, Node as ScraperNode};

use hyperhast_core::{
    parse_commas, parse_spaces, Element, Info, Node, PropertyInformation, PropertyValue, Schema,
    Space,
};

use crate::space;

/// Parse an HTML fragment into a root node.
///
/// # Example
///
/// ```rust
/// use hyperhast::{from_fn, parse_fragment, to_h, Call};
///
/// let tree = parse_fragment("<h1>Hello</h1>");
/// let mut h = from_fn(|call: Call<'_, String>| call.name);
/// assert_eq!(to_h(&mut h, &tree, ()).unwrap(), "h1");
/// ```
pub fn parse_fragment(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    let mut children = Vec::new();
    convert_children(document.root_element(), Space::Html, &mut children);
    Node::root(children)
}

fn convert_element(element: ElementRef, parent_space: Space) -> Element {
    let tag = element.value().name();
    let space = space::enter(parent_space, tag);
    let mut node = Element::new(tag);

    for (name, value) in element.value().attrs() {
        let info = PropertyInformation.find(space, name);
        node.set_property(&info.property, property_value(&info, value));
    }

    convert_children(element, space, &mut node.children);
    node
}

fn convert_children(element: ElementRef, space: Space, out: &mut Vec<Node>) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => out.push(Node::text(&text.text)),
            ScraperNode::Comment(comment) => out.push(Node::comment(&comment.comment)),
            ScraperNode::Doctype(_) => out.push(Node::Doctype),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    out.push(convert_element(child_element, space).into());
                }
            }
            _ => {}
        }
    }
}

/// Typed property value for a raw attribute value
fn property_value(info: &Info, value: &str) -> PropertyValue {
    if info.boolean {
        PropertyValue::Bool(true)
    } else if info.comma_separated {
        parse_commas(value).into()
    } else if info.space_separated {
        parse_spaces(value).into()
    } else if info.number {
        value
            .trim()
            .parse::<f64>()
            .map_or_else(|_| value.into(), PropertyValue::Number)
    } else {
        value.into()
    }
}

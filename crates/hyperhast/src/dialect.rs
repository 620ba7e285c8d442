//! Builder dialect detection.
//!
//! Builders disagree on how attributes, booleans, styles and keys are
//! passed. The dialect is detected once per transform by probing the
//! builder with a trivial `div` and classifying what comes back.

use hyperhast_core::Space;

use crate::builder::{Builder, Call, Markers, Props, Shape};

/// `type` marker of an attributes-dialect node
pub const VIRTUAL_NODE: &str = "VirtualNode";

/// Calling convention of a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// No special conventions
    #[default]
    Plain,
    /// Retained-tree element factory: flat props keyed by DOM property
    /// name, object styles, reconciliation keys
    RetainedDom,
    /// Virtual-node constructor: `attributes` sub-map, uppercase HTML tag
    /// names, `namespace` for foreign elements, object styles, keys
    AttributesDom,
    /// Selector DSL: id and class folded into the tag name, `attrs` sub-map,
    /// empty-string booleans
    SelectorDom,
    /// Retained framework: `attrs` sub-map, object styles, keys
    RetainedFramework,
}

/// Everything detection looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Probe {
    pub markers: Markers,
    /// Shape of the trial node; `None` when the trial call failed
    pub shape: Option<Shape>,
}

type Predicate = fn(&Probe) -> bool;

/// Checked in order; the first match wins
const PREDICATES: &[(Dialect, Predicate)] = &[
    (Dialect::SelectorDom, is_selector_dom),
    (Dialect::AttributesDom, is_attributes_dom),
    (Dialect::RetainedFramework, is_retained_framework),
    (Dialect::RetainedDom, is_retained_dom),
];

fn is_selector_dom(probe: &Probe) -> bool {
    probe.markers.context && probe.markers.cleanup
}

fn is_attributes_dom(probe: &Probe) -> bool {
    probe
        .shape
        .as_ref()
        .is_some_and(|shape| shape.kind.as_deref() == Some(VIRTUAL_NODE))
}

fn is_retained_framework(probe: &Probe) -> bool {
    probe
        .shape
        .as_ref()
        .is_some_and(|shape| shape.framework_context)
}

fn is_retained_dom(probe: &Probe) -> bool {
    probe
        .shape
        .as_ref()
        .is_some_and(|shape| shape.owner && shape.key.is_none())
}

impl Dialect {
    /// Probe `builder` and classify it.
    ///
    /// The trial call is `div` with an empty attribute map and no children.
    /// A failing trial call counts as no shape at all.
    pub fn detect<B: Builder>(builder: &mut B) -> Dialect {
        let markers = builder.markers();
        let shape = match builder.create(Call {
            name: "div".to_string(),
            attributes: Props::new(),
            children: None,
            context: None,
        }) {
            Ok(node) => Some(builder.inspect(&node)),
            Err(error) => {
                tracing::debug!(%error, "trial builder call failed");
                None
            }
        };

        let dialect = Self::classify(&Probe { markers, shape });
        tracing::debug!(?dialect, "detected builder dialect");
        dialect
    }

    /// Classify an already collected probe
    pub fn classify(probe: &Probe) -> Dialect {
        PREDICATES
            .iter()
            .find(|(_, predicate)| predicate(probe))
            .map_or(Dialect::Plain, |(dialect, _)| *dialect)
    }

    /// Whether keys are generated when no prefix is configured
    pub fn generates_keys(self) -> bool {
        matches!(
            self,
            Dialect::RetainedDom | Dialect::AttributesDom | Dialect::RetainedFramework
        )
    }

    /// Whether falsy known booleans must be omitted
    pub fn explicit_booleans(self) -> bool {
        matches!(
            self,
            Dialect::AttributesDom | Dialect::SelectorDom | Dialect::RetainedFramework
        )
    }

    /// Whether `style` strings become style objects
    pub fn object_style(self) -> bool {
        matches!(
            self,
            Dialect::RetainedDom | Dialect::AttributesDom | Dialect::RetainedFramework
        )
    }

    /// Name of the nested attribute map, if the dialect has one
    pub fn sub_map(self) -> Option<&'static str> {
        match self {
            Dialect::AttributesDom => Some("attributes"),
            Dialect::SelectorDom | Dialect::RetainedFramework => Some("attrs"),
            Dialect::Plain | Dialect::RetainedDom => None,
        }
    }

    /// Whether id and class are folded into the tag name
    pub fn folds_selector(self) -> bool {
        self == Dialect::SelectorDom
    }

    /// Tag name passed to the builder for an element in `space`
    pub fn tag_name(self, name: &str, space: Space) -> String {
        if self == Dialect::AttributesDom && space == Space::Html {
            name.to_uppercase()
        } else {
            name.to_string()
        }
    }
}

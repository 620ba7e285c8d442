//! Attribute-name metadata.
//!
//! Maps a raw property or attribute name to its canonical property name,
//! canonical attribute name and value semantics (boolean, numeric, list
//! separator, must-be-set-as-property). HTML and SVG have separate tables;
//! lookups are case-insensitive on both the property and attribute names.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Markup namespace an element lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Space {
    #[default]
    Html,
    Svg,
}

impl Space {
    /// Parse `"html"` or `"svg"`
    pub fn from_name(name: &str) -> Option<Space> {
        match name {
            "html" => Some(Space::Html),
            "svg" => Some(Space::Svg),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Space::Html => "html",
            Space::Svg => "svg",
        }
    }

    /// Namespace URI of this space
    pub fn namespace(self) -> &'static str {
        match self {
            Space::Html => "http://www.w3.org/1999/xhtml",
            Space::Svg => "http://www.w3.org/2000/svg",
        }
    }
}

/// Metadata for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    /// Canonical property name (`className`)
    pub property: String,
    /// Canonical attribute name (`class`)
    pub attribute: String,
    pub boolean: bool,
    /// Must be set as a DOM property rather than an attribute
    pub must_use_property: bool,
    pub comma_separated: bool,
    pub space_separated: bool,
    pub number: bool,
    /// Whether the name is known to the table (or is a `data-*` attribute)
    pub defined: bool,
}

impl Info {
    /// Metadata for a name the table does not know: passed through verbatim
    pub fn unknown(name: &str) -> Self {
        Self {
            property: name.to_string(),
            attribute: name.to_string(),
            boolean: false,
            must_use_property: false,
            comma_separated: false,
            space_separated: false,
            number: false,
            defined: false,
        }
    }
}

/// Attribute metadata lookup, injected into the transform.
pub trait Schema {
    /// Resolve the metadata for a raw property or attribute name
    fn find(&self, space: Space, name: &str) -> Info;

    /// Property name a retained-dom builder expects, when it differs from
    /// the canonical property name
    fn react_name(&self, property: &str) -> Option<&str> {
        REACT_NAMES
            .iter()
            .find(|(hast, _)| *hast == property)
            .map(|(_, react)| *react)
    }
}

/// The built-in HTML and SVG property tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyInformation;

impl Schema for PropertyInformation {
    fn find(&self, space: Space, name: &str) -> Info {
        let table = match space {
            Space::Html => &*HTML_TABLE,
            Space::Svg => &*SVG_TABLE,
        };

        if let Some(info) = table.get(&name.to_lowercase()) {
            return info.clone();
        }

        if name.len() > 4 && VALID_DATA.is_match(name) {
            return data_info(name);
        }

        Info::unknown(name)
    }
}

const BOOLEAN: u8 = 1;
const MUST_USE_PROPERTY: u8 = 1 << 1;
const COMMA: u8 = 1 << 2;
const SPACE: u8 = 1 << 3;
const NUMBER: u8 = 1 << 4;

/// `(property, attribute, flags)`; an empty attribute means "derive from the property"
type Row = (&'static str, &'static str, u8);

const XML: &[Row] = &[
    ("xmlBase", "xml:base", 0),
    ("xmlLang", "xml:lang", 0),
    ("xmlSpace", "xml:space", 0),
];

const XLINK: &[Row] = &[
    ("xLinkActuate", "xlink:actuate", 0),
    ("xLinkArcRole", "xlink:arcrole", 0),
    ("xLinkHref", "xlink:href", 0),
    ("xLinkRole", "xlink:role", 0),
    ("xLinkShow", "xlink:show", 0),
    ("xLinkTitle", "xlink:title", 0),
    ("xLinkType", "xlink:type", 0),
];

const XMLNS: &[Row] = &[("xmlns", "xmlns", 0), ("xmlnsXLink", "xmlns:xlink", 0)];

const ARIA: &[Row] = &[
    ("ariaActiveDescendant", "", 0),
    ("ariaAtomic", "", 0),
    ("ariaAutoComplete", "", 0),
    ("ariaBusy", "", 0),
    ("ariaChecked", "", 0),
    ("ariaColCount", "", NUMBER),
    ("ariaColIndex", "", NUMBER),
    ("ariaColSpan", "", NUMBER),
    ("ariaControls", "", SPACE),
    ("ariaCurrent", "", 0),
    ("ariaDescribedBy", "", SPACE),
    ("ariaDetails", "", 0),
    ("ariaDisabled", "", 0),
    ("ariaDropEffect", "", SPACE),
    ("ariaErrorMessage", "", 0),
    ("ariaExpanded", "", 0),
    ("ariaFlowTo", "", SPACE),
    ("ariaGrabbed", "", 0),
    ("ariaHasPopup", "", 0),
    ("ariaHidden", "", 0),
    ("ariaInvalid", "", 0),
    ("ariaKeyShortcuts", "", 0),
    ("ariaLabel", "", 0),
    ("ariaLabelledBy", "", SPACE),
    ("ariaLevel", "", NUMBER),
    ("ariaLive", "", 0),
    ("ariaModal", "", 0),
    ("ariaMultiLine", "", 0),
    ("ariaMultiSelectable", "", 0),
    ("ariaOrientation", "", 0),
    ("ariaOwns", "", SPACE),
    ("ariaPlaceholder", "", 0),
    ("ariaPosInSet", "", NUMBER),
    ("ariaPressed", "", 0),
    ("ariaReadOnly", "", 0),
    ("ariaRelevant", "", 0),
    ("ariaRequired", "", 0),
    ("ariaRoleDescription", "", SPACE),
    ("ariaRowCount", "", NUMBER),
    ("ariaRowIndex", "", NUMBER),
    ("ariaRowSpan", "", NUMBER),
    ("ariaSelected", "", 0),
    ("ariaSetSize", "", NUMBER),
    ("ariaSort", "", 0),
    ("ariaValueMax", "", NUMBER),
    ("ariaValueMin", "", NUMBER),
    ("ariaValueNow", "", NUMBER),
    ("ariaValueText", "", 0),
    ("role", "role", 0),
];

const HTML: &[Row] = &[
    ("abbr", "", 0),
    ("accept", "", COMMA),
    ("acceptCharset", "accept-charset", SPACE),
    ("accessKey", "", SPACE),
    ("action", "", 0),
    ("allow", "", 0),
    ("allowFullScreen", "", BOOLEAN),
    ("allowPaymentRequest", "", BOOLEAN),
    ("allowUserMedia", "", BOOLEAN),
    ("alt", "", 0),
    ("as", "", 0),
    ("async", "", BOOLEAN),
    ("autoCapitalize", "", 0),
    ("autoComplete", "", SPACE),
    ("autoFocus", "", BOOLEAN),
    ("autoPlay", "", BOOLEAN),
    ("capture", "", BOOLEAN),
    ("charSet", "", 0),
    ("checked", "", BOOLEAN | MUST_USE_PROPERTY),
    ("cite", "", 0),
    ("className", "class", SPACE),
    ("classId", "", 0),
    ("cols", "", NUMBER),
    ("colSpan", "", 0),
    ("content", "", 0),
    ("contentEditable", "", 0),
    ("controls", "", BOOLEAN),
    ("controlsList", "", SPACE),
    ("coords", "", NUMBER | COMMA),
    ("crossOrigin", "", 0),
    ("data", "", 0),
    ("dataType", "datatype", 0),
    ("dateTime", "", 0),
    ("decoding", "", 0),
    ("default", "", BOOLEAN),
    ("defer", "", BOOLEAN),
    ("dir", "", 0),
    ("dirName", "", 0),
    ("disabled", "", BOOLEAN),
    ("disablePictureInPicture", "", BOOLEAN),
    ("disableRemotePlayback", "", BOOLEAN),
    ("download", "", 0),
    ("draggable", "", 0),
    ("encType", "", 0),
    ("enterKeyHint", "", 0),
    ("form", "", 0),
    ("formAction", "", 0),
    ("formEncType", "", 0),
    ("formMethod", "", 0),
    ("formNoValidate", "", BOOLEAN),
    ("formTarget", "", 0),
    ("headers", "", SPACE),
    ("height", "", NUMBER),
    ("hidden", "", BOOLEAN),
    ("high", "", NUMBER),
    ("href", "", 0),
    ("hrefLang", "", 0),
    ("htmlFor", "for", SPACE),
    ("httpEquiv", "http-equiv", SPACE),
    ("id", "", 0),
    ("imageSizes", "", 0),
    ("imageSrcSet", "", 0),
    ("inert", "", BOOLEAN),
    ("inputMode", "", 0),
    ("integrity", "", 0),
    ("is", "", 0),
    ("isMap", "", BOOLEAN),
    ("itemId", "", 0),
    ("itemProp", "", SPACE),
    ("itemRef", "", SPACE),
    ("itemScope", "", BOOLEAN),
    ("itemType", "", SPACE),
    ("kind", "", 0),
    ("label", "", 0),
    ("lang", "", 0),
    ("language", "", 0),
    ("list", "", 0),
    ("loading", "", 0),
    ("loop", "", BOOLEAN),
    ("low", "", NUMBER),
    ("manifest", "", 0),
    ("max", "", 0),
    ("maxLength", "", NUMBER),
    ("media", "", 0),
    ("method", "", 0),
    ("min", "", 0),
    ("minLength", "", NUMBER),
    ("multiple", "", BOOLEAN | MUST_USE_PROPERTY),
    ("muted", "", BOOLEAN | MUST_USE_PROPERTY),
    ("name", "", 0),
    ("nonce", "", 0),
    ("noModule", "", BOOLEAN),
    ("noValidate", "", BOOLEAN),
    ("open", "", BOOLEAN),
    ("optimum", "", NUMBER),
    ("pattern", "", 0),
    ("ping", "", SPACE),
    ("placeholder", "", 0),
    ("playsInline", "", BOOLEAN),
    ("poster", "", 0),
    ("preload", "", 0),
    ("readOnly", "", BOOLEAN),
    ("referrerPolicy", "", 0),
    ("rel", "", SPACE),
    ("required", "", BOOLEAN),
    ("reversed", "", BOOLEAN),
    ("rows", "", NUMBER),
    ("rowSpan", "", NUMBER),
    ("sandbox", "", SPACE),
    ("scope", "", 0),
    ("scoped", "", BOOLEAN),
    ("seamless", "", BOOLEAN),
    ("selected", "", BOOLEAN | MUST_USE_PROPERTY),
    ("shape", "", 0),
    ("size", "", NUMBER),
    ("sizes", "", 0),
    ("slot", "", 0),
    ("span", "", NUMBER),
    ("spellCheck", "", 0),
    ("src", "", 0),
    ("srcDoc", "", 0),
    ("srcLang", "", 0),
    ("srcSet", "", 0),
    ("start", "", NUMBER),
    ("step", "", 0),
    ("style", "", 0),
    ("tabIndex", "", NUMBER),
    ("target", "", 0),
    ("title", "", 0),
    ("translate", "", 0),
    ("type", "", 0),
    ("typeMustMatch", "", BOOLEAN),
    ("useMap", "", 0),
    ("value", "", 0),
    ("width", "", NUMBER),
    ("wrap", "", 0),
];

const SVG: &[Row] = &[
    ("className", "class", SPACE),
    ("clipPath", "clip-path", 0),
    ("clipPathUnits", "", 0),
    ("clipRule", "clip-rule", 0),
    ("color", "", 0),
    ("cx", "", 0),
    ("cy", "", 0),
    ("d", "", 0),
    ("display", "", 0),
    ("dominantBaseline", "dominant-baseline", 0),
    ("dx", "", 0),
    ("dy", "", 0),
    ("fill", "", 0),
    ("fillOpacity", "fill-opacity", NUMBER),
    ("fillRule", "fill-rule", 0),
    ("filter", "", 0),
    ("fontFamily", "font-family", 0),
    ("fontSize", "font-size", 0),
    ("fontStyle", "font-style", 0),
    ("fontWeight", "font-weight", 0),
    ("fx", "", 0),
    ("fy", "", 0),
    ("gradientTransform", "", 0),
    ("gradientUnits", "", 0),
    ("height", "", 0),
    ("href", "", 0),
    ("id", "", 0),
    ("lang", "", 0),
    ("markerEnd", "marker-end", 0),
    ("markerHeight", "", 0),
    ("markerMid", "marker-mid", 0),
    ("markerStart", "marker-start", 0),
    ("markerUnits", "", 0),
    ("markerWidth", "", 0),
    ("mask", "", 0),
    ("offset", "", 0),
    ("opacity", "", 0),
    ("orient", "", 0),
    ("pathLength", "", NUMBER),
    ("patternUnits", "", 0),
    ("points", "", 0),
    ("preserveAspectRatio", "", 0),
    ("r", "", 0),
    ("refX", "", 0),
    ("refY", "", 0),
    ("rx", "", 0),
    ("ry", "", 0),
    ("stopColor", "stop-color", 0),
    ("stopOpacity", "stop-opacity", 0),
    ("stroke", "", 0),
    ("strokeDashArray", "stroke-dasharray", COMMA),
    ("strokeDashOffset", "stroke-dashoffset", 0),
    ("strokeLineCap", "stroke-linecap", 0),
    ("strokeLineJoin", "stroke-linejoin", 0),
    ("strokeMiterLimit", "stroke-miterlimit", NUMBER),
    ("strokeOpacity", "stroke-opacity", NUMBER),
    ("strokeWidth", "stroke-width", 0),
    ("style", "", 0),
    ("tabIndex", "tabindex", 0),
    ("target", "", 0),
    ("textAnchor", "text-anchor", 0),
    ("transform", "", 0),
    ("type", "", 0),
    ("typeOf", "typeof", SPACE),
    ("version", "", 0),
    ("viewBox", "", 0),
    ("visibility", "", 0),
    ("width", "", 0),
    ("x", "", 0),
    ("x1", "", 0),
    ("x2", "", 0),
    ("y", "", 0),
    ("y1", "", 0),
    ("y2", "", 0),
];

/// Canonical property name to the name a retained-dom builder expects
const REACT_NAMES: &[(&str, &str)] = &[
    ("classId", "classID"),
    ("dataType", "datatype"),
    ("itemId", "itemID"),
    ("strokeDashArray", "strokeDasharray"),
    ("strokeDashOffset", "strokeDashoffset"),
    ("strokeLineCap", "strokeLinecap"),
    ("strokeLineJoin", "strokeLinejoin"),
    ("strokeMiterLimit", "strokeMiterlimit"),
    ("typeOf", "typeof"),
    ("xLinkActuate", "xlinkActuate"),
    ("xLinkArcRole", "xlinkArcrole"),
    ("xLinkHref", "xlinkHref"),
    ("xLinkRole", "xlinkRole"),
    ("xLinkShow", "xlinkShow"),
    ("xLinkTitle", "xlinkTitle"),
    ("xLinkType", "xlinkType"),
    ("xmlnsXLink", "xmlnsXlink"),
];

static VALID_DATA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^data[-\w.:]+$").unwrap());
static DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"-[a-z]").unwrap());
static CAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

static HTML_TABLE: Lazy<HashMap<String, Info>> = Lazy::new(|| {
    build_table(&[
        (XML, Casing::Verbatim),
        (XLINK, Casing::Verbatim),
        (XMLNS, Casing::Verbatim),
        (ARIA, Casing::Aria),
        (HTML, Casing::Lower),
    ])
});

static SVG_TABLE: Lazy<HashMap<String, Info>> = Lazy::new(|| {
    build_table(&[
        (XML, Casing::Verbatim),
        (XLINK, Casing::Verbatim),
        (XMLNS, Casing::Verbatim),
        (ARIA, Casing::Aria),
        (SVG, Casing::Verbatim),
    ])
});

/// How a row without an explicit attribute derives it from the property
#[derive(Clone, Copy)]
enum Casing {
    Lower,
    Verbatim,
    Aria,
}

fn build_table(groups: &[(&[Row], Casing)]) -> HashMap<String, Info> {
    let mut table = HashMap::new();

    for (rows, casing) in groups {
        for (property, attribute, flags) in rows.iter() {
            let attribute = if !attribute.is_empty() {
                attribute.to_string()
            } else {
                match casing {
                    Casing::Lower => property.to_lowercase(),
                    Casing::Verbatim => property.to_string(),
                    Casing::Aria => format!("aria-{}", property[4..].to_lowercase()),
                }
            };

            let info = Info {
                property: property.to_string(),
                attribute: attribute.clone(),
                boolean: flags & BOOLEAN != 0,
                must_use_property: flags & MUST_USE_PROPERTY != 0,
                comma_separated: flags & COMMA != 0,
                space_separated: flags & SPACE != 0,
                number: flags & NUMBER != 0,
                defined: true,
            };

            table.insert(attribute.to_lowercase(), info.clone());
            table.insert(property.to_lowercase(), info);
        }
    }

    table
}

/// `data-foo-bar` keeps its attribute and gains the property `dataFooBar`;
/// `dataFooBar` keeps its property and gains the attribute `data-foo-bar`.
fn data_info(name: &str) -> Info {
    let mut property = name.to_string();
    let mut attribute = name.to_string();

    if name.as_bytes()[4] == b'-' {
        let rest = DASH.replace_all(&name[5..], |caps: &regex::Captures| caps[0][1..].to_uppercase());
        let mut chars = rest.chars();
        property = match chars.next() {
            Some(first) => format!("data{}{}", first.to_uppercase(), chars.as_str()),
            None => "data".to_string(),
        };
    } else {
        let rest = &name[4..];
        if !DASH.is_match(rest) {
            let mut dashes = CAP
                .replace_all(rest, |caps: &regex::Captures| format!("-{}", caps[0].to_lowercase()))
                .into_owned();
            if !dashes.starts_with('-') {
                dashes.insert(0, '-');
            }
            attribute = format!("data{}", dashes);
        }
    }

    Info {
        property,
        attribute,
        defined: true,
        ..Info::unknown(name)
    }
}

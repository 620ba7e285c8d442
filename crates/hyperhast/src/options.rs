//! Transform configuration.

use hyperhast_core::Space;

use crate::dialect::Dialect;

/// Key prefix used when none is configured and the dialect wants keys
pub const DEFAULT_PREFIX: &str = "h-";

/// Generated-key configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Prefix {
    /// `"h-"` for dialects that reconcile on keys, otherwise no keys
    #[default]
    Auto,
    /// Never generate keys
    Disabled,
    /// Generate keys with this prefix; an empty prefix disables keys
    Key(String),
}

impl Prefix {
    /// Prefix in effect for a builder of `dialect`
    pub fn resolve(&self, dialect: Dialect) -> Option<String> {
        match self {
            Prefix::Auto => dialect
                .generates_keys()
                .then(|| DEFAULT_PREFIX.to_string()),
            Prefix::Disabled => None,
            Prefix::Key(prefix) if prefix.is_empty() => None,
            Prefix::Key(prefix) => Some(prefix.clone()),
        }
    }
}

impl From<bool> for Prefix {
    fn from(enabled: bool) -> Self {
        if enabled {
            Prefix::Key(DEFAULT_PREFIX.to_string())
        } else {
            Prefix::Disabled
        }
    }
}

impl From<&str> for Prefix {
    fn from(prefix: &str) -> Self {
        Prefix::Key(prefix.to_string())
    }
}

impl From<String> for Prefix {
    fn from(prefix: String) -> Self {
        Prefix::Key(prefix)
    }
}

impl From<Option<&str>> for Prefix {
    fn from(prefix: Option<&str>) -> Self {
        prefix.map_or(Prefix::Disabled, Prefix::from)
    }
}

/// Options for a transform
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// Generated-key prefix
    pub prefix: Prefix,

    /// Namespace the tree starts in
    pub space: Space,
}

impl From<()> for Options {
    fn from(_: ()) -> Self {
        Options::default()
    }
}

impl From<Prefix> for Options {
    fn from(prefix: Prefix) -> Self {
        Options {
            prefix,
            ..Default::default()
        }
    }
}

impl From<bool> for Options {
    fn from(enabled: bool) -> Self {
        Prefix::from(enabled).into()
    }
}

impl From<&str> for Options {
    fn from(prefix: &str) -> Self {
        Prefix::from(prefix).into()
    }
}

impl From<String> for Options {
    fn from(prefix: String) -> Self {
        Prefix::from(prefix).into()
    }
}

impl From<Space> for Options {
    fn from(space: Space) -> Self {
        Options {
            space,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_prefix() {
        assert_eq!(Prefix::Auto.resolve(Dialect::RetainedDom), Some("h-".to_string()));
        assert_eq!(Prefix::Auto.resolve(Dialect::AttributesDom), Some("h-".to_string()));
        assert_eq!(Prefix::Auto.resolve(Dialect::SelectorDom), None);
        assert_eq!(Prefix::Auto.resolve(Dialect::Plain), None);
    }

    #[test]
    fn test_explicit_prefix() {
        assert_eq!(Prefix::from("prefix-").resolve(Dialect::Plain), Some("prefix-".to_string()));
        assert_eq!(Prefix::from(true).resolve(Dialect::SelectorDom), Some("h-".to_string()));
        assert_eq!(Prefix::from(false).resolve(Dialect::RetainedDom), None);
        assert_eq!(Prefix::from(None).resolve(Dialect::RetainedDom), None);
        assert_eq!(Prefix::from("").resolve(Dialect::RetainedDom), None);
    }

    #[test]
    fn test_shorthands() {
        assert_eq!(Options::from(()), Options::default());
        assert_eq!(Options::from(false).prefix, Prefix::Disabled);
        assert_eq!(Options::from("k").prefix, Prefix::Key("k".to_string()));
        assert_eq!(Options::from(Space::Svg).space, Space::Svg);
        assert_eq!(Options::from(Space::Svg).prefix, Prefix::Auto);
    }
}

//! Style records for nodes and edges
//!
//! Styles are flat values built from a TikZ property list. Anything the model
//! doesn't understand is kept in `extra` so a style file can be written back
//! without losing it.

pub mod edge;
pub mod node;

pub use edge::{ArrowHead, EdgeDecoration, EdgeEnd, EdgeStyle};
pub use node::NodeStyle;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key used for the palette category of a style
pub const CATEGORY_KEY: &str = "tikzit category";

/// One entry of a TikZ property list: `key` or `key=value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub key: String,
    pub value: Option<String>,
}

impl Property {
    pub fn atom(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Value with one level of surrounding braces removed
    pub fn plain_value(&self) -> Option<&str> {
        self.value.as_deref().map(strip_braces)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => f.write_str(&self.key),
        }
    }
}

/// Whether a property list describes an edge (it carries an arrow spec)
pub fn is_edge_style(properties: &[Property]) -> bool {
    properties
        .iter()
        .any(|p| p.value.is_none() && ArrowHead::parse_arrow_spec(&p.key).is_some())
}

pub(crate) fn strip_braces(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(s)
}

/// Wrap a value in braces when it would otherwise break the property list
pub(crate) fn brace_if_needed(s: &str) -> String {
    if s.contains(',') || s.contains('=') || s.contains(']') {
        format!("{{{s}}}")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_display() {
        assert_eq!(Property::atom("->").to_string(), "->");
        assert_eq!(Property::pair("fill", "red").to_string(), "fill=red");
    }

    #[test]
    fn test_plain_value_strips_one_brace_level() {
        let p = Property::pair("tikzit category", "{a, b}");
        assert_eq!(p.plain_value(), Some("a, b"));
        assert_eq!(Property::atom("dashed").plain_value(), None);
    }

    #[test]
    fn test_is_edge_style() {
        assert!(is_edge_style(&[Property::atom("->")]));
        assert!(is_edge_style(&[Property::pair("draw", "blue"), Property::atom("-")]));
        assert!(!is_edge_style(&[Property::pair("fill", "red"), Property::atom("dashed")]));
        // An arrow-looking value doesn't count, only bare atoms do
        assert!(!is_edge_style(&[Property::pair("arrows", "->")]));
    }

    #[test]
    fn test_brace_if_needed() {
        assert_eq!(brace_if_needed("wires"), "wires");
        assert_eq!(brace_if_needed("a, b"), "{a, b}");
    }
}

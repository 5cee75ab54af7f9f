//! Edge styles: arrow heads, mid-edge decoration and line width

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{CATEGORY_KEY, Property, brace_if_needed};
use crate::consts::DEFAULT_EDGE_THICKNESS;
use crate::geometry::{EdgeCurve, float_to_string};

const DECORATION_KEY: &str = "tikzit decoration";
const LINE_WIDTH_KEY: &str = "line width";

/// Tip drawn at one end of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ArrowHead {
    #[default]
    None,
    Plain,
    Latex,
    Flat,
}

/// Which end of the edge a tip belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Tail,
    Head,
}

impl ArrowHead {
    /// Parse one side of a TikZ arrow spec (`>`, `<`, `latex`, `|` or empty)
    pub fn from_tip(tip: &str) -> Option<Self> {
        match tip {
            "" => Some(ArrowHead::None),
            ">" | "<" => Some(ArrowHead::Plain),
            "latex" => Some(ArrowHead::Latex),
            "|" => Some(ArrowHead::Flat),
            _ => None,
        }
    }

    pub fn tip(&self, end: EdgeEnd) -> &'static str {
        match (self, end) {
            (ArrowHead::None, _) => "",
            (ArrowHead::Plain, EdgeEnd::Tail) => "<",
            (ArrowHead::Plain, EdgeEnd::Head) => ">",
            (ArrowHead::Latex, _) => "latex",
            (ArrowHead::Flat, _) => "|",
        }
    }

    /// Split an arrow spec such as `<-|` into (tail, head)
    pub fn parse_arrow_spec(spec: &str) -> Option<(ArrowHead, ArrowHead)> {
        let (tail, head) = spec.split_once('-')?;
        if tail == ">" || head == "<" {
            // Reversed tips aren't something we can represent
            return None;
        }
        Some((Self::from_tip(tail)?, Self::from_tip(head)?))
    }
}

/// Decoration drawn at the middle of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EdgeDecoration {
    #[default]
    None,
    Arrow,
    Tick,
}

impl EdgeDecoration {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeDecoration::None => "none",
            EdgeDecoration::Arrow => "arrow",
            EdgeDecoration::Tick => "tick",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(EdgeDecoration::None),
            "arrow" => Some(EdgeDecoration::Arrow),
            "tick" => Some(EdgeDecoration::Tick),
            _ => None,
        }
    }
}

/// A named edge style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub name: String,
    /// Palette category (`tikzit category`)
    pub category: Option<String>,
    pub head: ArrowHead,
    pub tail: ArrowHead,
    pub decoration: EdgeDecoration,
    /// Line width in pt
    pub thickness: f32,
    /// Properties not covered by the fields above, in source order
    #[serde(default)]
    pub extra: Vec<Property>,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::with_name("New Edge Style")
    }
}

impl EdgeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain undecorated edge with the given name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            head: ArrowHead::None,
            tail: ArrowHead::None,
            decoration: EdgeDecoration::None,
            thickness: DEFAULT_EDGE_THICKNESS,
            extra: Vec::new(),
        }
    }

    /// Build from a parsed property list. Errors describe the bad property.
    pub fn from_properties(
        name: impl Into<String>,
        properties: &[Property],
    ) -> Result<Self, String> {
        let mut style = Self::with_name(name);

        for prop in properties {
            if prop.value.is_none() {
                if let Some((tail, head)) = ArrowHead::parse_arrow_spec(&prop.key) {
                    style.tail = tail;
                    style.head = head;
                    continue;
                }
            }

            match (prop.key.as_str(), prop.plain_value()) {
                (CATEGORY_KEY, Some(category)) => style.category = Some(category.to_string()),
                (DECORATION_KEY, Some(name)) => {
                    style.decoration = EdgeDecoration::from_name(name)
                        .ok_or_else(|| format!("unknown edge decoration '{name}'"))?;
                }
                (LINE_WIDTH_KEY, Some(width)) => match parse_line_width(width) {
                    Some(thickness) => style.thickness = thickness,
                    // Other units and macros are passed through untouched
                    None => style.extra.push(prop.clone()),
                },
                _ => style.extra.push(prop.clone()),
            }
        }

        Ok(style)
    }

    /// TikZ arrow spec for this style, e.g. `->` or `latex-|`
    pub fn arrow_spec(&self) -> String {
        format!(
            "{}-{}",
            self.tail.tip(EdgeEnd::Tail),
            self.head.tip(EdgeEnd::Head)
        )
    }

    /// Property list in the order style files are written
    pub fn to_properties(&self) -> Vec<Property> {
        let mut props = vec![Property::atom(self.arrow_spec())];
        if let Some(category) = &self.category {
            props.push(Property::pair(CATEGORY_KEY, brace_if_needed(category)));
        }
        if self.decoration != EdgeDecoration::None {
            props.push(Property::pair(DECORATION_KEY, self.decoration.as_str()));
        }
        if self.thickness != DEFAULT_EDGE_THICKNESS {
            props.push(Property::pair(
                LINE_WIDTH_KEY,
                format!("{}pt", float_to_string(self.thickness)),
            ));
        }
        props.extend(self.extra.iter().cloned());
        props
    }

    /// Where to draw the decoration on `curve`: midpoint and tangent angle in
    /// degrees. `None` when the style has no decoration.
    pub fn decoration_anchor(&self, curve: &EdgeCurve) -> Option<(Vec2, i32)> {
        match self.decoration {
            EdgeDecoration::None => None,
            EdgeDecoration::Arrow | EdgeDecoration::Tick => {
                Some((curve.midpoint(), curve.tangent_angle_at(0.5)))
            }
        }
    }
}

/// `<number>` or `<number>pt`; anything else isn't a width we model
fn parse_line_width(text: &str) -> Option<f32> {
    let text = text.trim();
    let number = text.strip_suffix("pt").unwrap_or(text).trim();
    number.parse::<f32>().ok().filter(|w| w.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = EdgeStyle::new();
        assert_eq!(style.name, "New Edge Style");
        assert_eq!(style.head, ArrowHead::None);
        assert_eq!(style.tail, ArrowHead::None);
        assert_eq!(style.decoration, EdgeDecoration::None);
        assert_eq!(style.thickness, DEFAULT_EDGE_THICKNESS);
        assert_eq!(style.arrow_spec(), "-");
    }

    #[test]
    fn test_parse_arrow_spec() {
        assert_eq!(
            ArrowHead::parse_arrow_spec("->"),
            Some((ArrowHead::None, ArrowHead::Plain))
        );
        assert_eq!(
            ArrowHead::parse_arrow_spec("<->"),
            Some((ArrowHead::Plain, ArrowHead::Plain))
        );
        assert_eq!(
            ArrowHead::parse_arrow_spec("latex-|"),
            Some((ArrowHead::Latex, ArrowHead::Flat))
        );
        assert_eq!(ArrowHead::parse_arrow_spec("dashed"), None);
        assert_eq!(ArrowHead::parse_arrow_spec(">-<"), None);
        assert_eq!(ArrowHead::parse_arrow_spec("stealth-"), None);
    }

    #[test]
    fn test_from_properties() {
        let props = vec![
            Property::atom("<-"),
            Property::pair("tikzit category", "wires"),
            Property::pair("tikzit decoration", "tick"),
            Property::pair("line width", "0.8pt"),
            Property::atom("dashed"),
        ];
        let style = EdgeStyle::from_properties("wire", &props).unwrap();
        assert_eq!(style.tail, ArrowHead::Plain);
        assert_eq!(style.head, ArrowHead::None);
        assert_eq!(style.category.as_deref(), Some("wires"));
        assert_eq!(style.decoration, EdgeDecoration::Tick);
        assert_eq!(style.thickness, 0.8);
        assert_eq!(style.extra, vec![Property::atom("dashed")]);
    }

    #[test]
    fn test_from_properties_rejects_bad_values() {
        let bad_deco = [Property::atom("-"), Property::pair("tikzit decoration", "zigzag")];
        assert!(EdgeStyle::from_properties("x", &bad_deco).is_err());
    }

    #[test]
    fn test_other_width_units_are_kept_verbatim() {
        for width in ["0.4mm", "1ex", "\\pgflinewidth", "thick"] {
            let props = [Property::atom("->"), Property::pair("line width", width)];
            let style = EdgeStyle::from_properties("thick", &props).unwrap();
            assert_eq!(style.thickness, DEFAULT_EDGE_THICKNESS);
            assert_eq!(style.extra, vec![Property::pair("line width", width)]);
            assert_eq!(style.to_properties(), props.to_vec());
        }
    }

    #[test]
    fn test_to_properties_round_trip() {
        let mut style = EdgeStyle::with_name("bold");
        style.head = ArrowHead::Latex;
        style.decoration = EdgeDecoration::Arrow;
        style.thickness = 1.5;
        style.category = Some("a, b".to_string());
        style.extra.push(Property::pair("draw", "blue"));

        let props = style.to_properties();
        assert_eq!(props[0], Property::atom("-latex"));
        assert!(props.contains(&Property::pair("line width", "1.5pt")));
        assert!(props.contains(&Property::pair("tikzit category", "{a, b}")));

        let back = EdgeStyle::from_properties("bold", &props).unwrap();
        assert_eq!(back, style);
    }

    #[test]
    fn test_near_zero_width_reads_back_as_zero() {
        let mut style = EdgeStyle::with_name("hairline");
        style.thickness = 1e-7;
        let props = style.to_properties();
        assert_eq!(props[1], Property::pair("line width", "0pt"));

        let back = EdgeStyle::from_properties("hairline", &props).unwrap();
        assert_eq!(back.thickness, 0.0);
    }

    #[test]
    fn test_decoration_anchor() {
        let curve = EdgeCurve::straight(Vec2::ZERO, Vec2::new(0.0, -4.0));
        assert_eq!(EdgeStyle::new().decoration_anchor(&curve), None);

        let mut style = EdgeStyle::new();
        style.decoration = EdgeDecoration::Tick;
        let (pos, angle) = style.decoration_anchor(&curve).unwrap();
        assert!((pos - Vec2::new(0.0, -2.0)).length() < 1e-5);
        assert_eq!(angle, -90);
    }
}

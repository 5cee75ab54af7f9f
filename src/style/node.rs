//! Node styles shown in the palette

use serde::{Deserialize, Serialize};

use super::{CATEGORY_KEY, Property, brace_if_needed};

/// A named node style
///
/// `shape`, `fill` and `draw` are only set when the style file gives them, so
/// writing the style back doesn't add keys TikZ would render differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub name: String,
    pub category: Option<String>,
    /// TikZ shape name (`circle`, `rectangle`, ...)
    #[serde(default)]
    pub shape: Option<String>,
    /// Fill color, as written in the style file
    #[serde(default)]
    pub fill: Option<String>,
    /// Stroke color, as written in the style file
    #[serde(default)]
    pub draw: Option<String>,
    #[serde(default)]
    pub extra: Vec<Property>,
}

impl NodeStyle {
    const DEFAULT_SHAPE: &'static str = "circle";
    const DEFAULT_FILL: &'static str = "white";
    const DEFAULT_DRAW: &'static str = "black";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            shape: None,
            fill: None,
            draw: None,
            extra: Vec::new(),
        }
    }

    /// Shape used for the palette icon (`circle` when unset)
    pub fn display_shape(&self) -> &str {
        self.shape.as_deref().unwrap_or(Self::DEFAULT_SHAPE)
    }

    /// Fill used for the palette icon (`white` when unset)
    pub fn display_fill(&self) -> &str {
        self.fill.as_deref().unwrap_or(Self::DEFAULT_FILL)
    }

    /// Stroke used for the palette icon (`black` when unset)
    pub fn display_draw(&self) -> &str {
        self.draw.as_deref().unwrap_or(Self::DEFAULT_DRAW)
    }

    pub fn from_properties(name: impl Into<String>, properties: &[Property]) -> Self {
        let mut style = Self::new(name);
        for prop in properties {
            match (prop.key.as_str(), prop.value.as_deref()) {
                ("fill", Some(fill)) => style.fill = Some(fill.to_string()),
                ("draw", Some(draw)) => style.draw = Some(draw.to_string()),
                ("shape", Some(shape)) => style.shape = Some(shape.to_string()),
                (CATEGORY_KEY, Some(_)) => {
                    style.category = prop.plain_value().map(str::to_string);
                }
                _ => style.extra.push(prop.clone()),
            }
        }
        style
    }

    pub fn to_properties(&self) -> Vec<Property> {
        let mut props = Vec::new();
        if let Some(fill) = &self.fill {
            props.push(Property::pair("fill", fill.as_str()));
        }
        if let Some(draw) = &self.draw {
            props.push(Property::pair("draw", draw.as_str()));
        }
        if let Some(shape) = &self.shape {
            props.push(Property::pair("shape", shape.as_str()));
        }
        if let Some(category) = &self.category {
            props.push(Property::pair(CATEGORY_KEY, brace_if_needed(category)));
        }
        props.extend(self.extra.iter().cloned());
        props
    }
}

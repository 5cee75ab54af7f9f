//! TikZiT style layer - palette, style model and geometry helpers
//!
//! Core modules:
//! - `geometry`: Bezier evaluation, grid snapping, angle helpers, float display
//! - `style`: Node and edge style records
//! - `tikzstyles`: Reading and writing `.tikzstyles` files
//! - `palette`: Style palette controller over a list of node styles
//! - `settings`: Persisted palette preferences

pub mod error;
pub mod geometry;
pub mod palette;
pub mod settings;
pub mod style;
pub mod tikzstyles;

pub use error::{Result, StyleError};
pub use geometry::{
    EdgeCurve, bezier_interpolate, bezier_point, degrees_to_radians, float_to_string,
    normalize_angle_deg, normalize_angle_rad, radians_to_degrees, round_to_nearest, snap_point,
};
pub use palette::{PaletteEntry, PaletteEvent, StylePalette};
pub use settings::{DockGeometry, PaletteSettings};
pub use style::{ArrowHead, EdgeDecoration, EdgeStyle, NodeStyle, Property};
pub use tikzstyles::StyleSheet;

/// Shared constants
pub mod consts {
    /// Floats within this distance of zero are written as `0`
    pub const DISPLAY_ZERO_TOLERANCE: f32 = 0.000001;

    /// Default edge line width (pt)
    pub const DEFAULT_EDGE_THICKNESS: f32 = 1.0;

    /// Default grid step for snapping node positions
    pub const DEFAULT_GRID_STEP: f32 = 0.25;

    /// Name of the reserved first palette row
    pub const NONE_STYLE_NAME: &str = "none";
}

// Static visual encoding constants
//
// Everything here is styling, kept apart from the pipeline logic. Values match
// the source dashboard.

// 5-stop sequential scale for the impact choropleth (pale yellow to deep red)
pub const IMPACT_COLORSCALE: [(f64, &str); 5] = [
    (0.0, "#ffffcc"),
    (0.25, "#ffeda0"),
    (0.5, "#feb24c"),
    (0.75, "#f03b20"),
    (1.0, "#bd0026"),
];

// Grouped-bar series colors
pub const MAGNITUDE_BAR_COLOR: &str = "#3498db";
pub const VULNERABILITY_BAR_COLOR: &str = "#e74c3c";

// Distribution panel bars
pub const DISTRIBUTION_BAR_COLOR: &str = "#f39c12";
pub const DISTRIBUTION_BAR_LINE_COLOR: &str = "#d68910";

// Scatter markers: diameter = impact * scale, colored on the Reds scale
pub const SCATTER_MARKER_SCALE: f64 = 5.0;
pub const SCATTER_MARKER_OPACITY: f64 = 0.7;
pub const SCATTER_MARKER_LINE_COLOR: &str = "darkred";

// Map geography styling
pub const LAND_COLOR: &str = "rgb(243, 243, 243)";
pub const COASTLINE_COLOR: &str = "darkgray";
pub const GEO_BG_COLOR: &str = "rgba(240, 248, 255, 0.5)";
pub const MAP_BORDER_COLOR: &str = "darkgray";
pub const MAP_BORDER_WIDTH: f64 = 0.5;

// Figure frame
pub const FIGURE_WIDTH: u32 = 1400;
pub const FIGURE_HEIGHT: u32 = 1400;
pub const FONT_FAMILY: &str = "Arial, sans-serif";
pub const BASE_FONT_SIZE: u32 = 11;
pub const TITLE_FONT_SIZE: u32 = 22;
pub const SUBPLOT_TITLE_FONT_SIZE: u32 = 16;

// Annotation boxes
pub const CALLOUT_BORDER_COLOR: &str = "#bd0026";
pub const CALLOUT_BG_COLOR: &str = "rgba(255, 255, 255, 0.95)";
pub const FOOTNOTE_BG_COLOR: &str = "rgba(255, 255, 255, 0.9)";
pub const GRID_LINE_COLOR: &str = "lightgray";

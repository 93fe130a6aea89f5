//! Global constants for the ROI editor

/// Distance (in normalized canvas units) to the first vertex below which a
/// click closes the polygon instead of adding a vertex.
pub const CLOSE_THRESHOLD: f64 = 0.02;

/// Minimum number of vertices before a click can close a polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Draw color used until the operator picks another one.
pub const DEFAULT_DRAW_COLOR: &str = "#DF00FF";

/// Swatches offered by the color picker
pub const DEFAULT_PALETTE: &[&str] = &[
    "#DF00FF", "#FF3B30", "#FF9500", "#FFCC00", "#34C759", "#00C7BE", "#007AFF", "#FFFFFF",
];

/// Prefix for ids assigned by the reference polygon owner
pub const OWNER_ID_PREFIX: &str = "roi";

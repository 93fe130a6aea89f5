//! Data models for the ROI editor.

mod color;
mod geometry;
mod polygon;

pub use color::{Color, ColorError};
pub use geometry::{
    CanvasRect, Point, Size, centroid, distance, fit_box_with_ratio, normalize, polygon_contains,
};
pub use polygon::{Polygon, PolygonDraft, PolygonId, PolygonSet, contains_id, hit_test, without};

//! Geometry in normalized canvas space.
//!
//! All coordinates handled by the editor are normalized to the image's
//! aspect-ratio box: `(0, 0)` is the top-left corner and `(1, 1)` the
//! bottom-right corner, independent of the on-screen size.

use serde::{Deserialize, Serialize};

/// A point in normalized canvas coordinates.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }

    /// Whether both coordinates lie inside `[0, 1]`.
    pub fn is_in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Arithmetic mean of the vertices, per axis.
///
/// An empty slice yields `(0, 0)` instead of dividing by zero.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Ray-casting point-in-polygon test.
///
/// Rings with fewer than three vertices contain nothing.
pub fn polygon_contains(vertices: &[Point], point: Point) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (vi, vj) = (vertices[i], vertices[j]);
        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Bounding box of the interaction surface in device (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A surface with no area cannot map pointer positions.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Convert a device position to normalized canvas coordinates.
///
/// Returns `None` for a degenerate surface. The result is not clamped, so
/// positions outside the surface map outside `[0, 1]`.
pub fn normalize(client_x: f64, client_y: f64, rect: &CanvasRect) -> Option<Point> {
    if rect.is_degenerate() {
        return None;
    }
    Some(Point::new(
        (client_x - rect.left) / rect.width,
        (client_y - rect.top) / rect.height,
    ))
}

/// Width and height of a layout box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Largest box with exactly `ratio` (width / height) that fits inside the
/// parent. Keeps the normalized coordinate box stable when the viewport
/// changes shape.
pub fn fit_box_with_ratio(parent_width: f64, parent_height: f64, ratio: f64) -> Size {
    if parent_width <= 0.0 || parent_height <= 0.0 || ratio <= 0.0 {
        return Size::default();
    }
    if parent_width / parent_height > ratio {
        Size {
            width: parent_height * ratio,
            height: parent_height,
        }
    } else {
        Size {
            width: parent_width,
            height: parent_width / ratio,
        }
    }
}

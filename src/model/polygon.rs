//! Region-of-interest polygons.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::Color;
use super::geometry::{Point, centroid, polygon_contains};

/// Stable identifier assigned by the owner of the polygon list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolygonId(String);

impl PolygonId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PolygonId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A closed region of interest.
///
/// Vertex order defines the boundary and is preserved exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub id: PolygonId,
    pub points: Vec<Point>,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Polygon {
    pub fn new(id: impl Into<PolygonId>, points: Vec<Point>, color: impl Into<Color>) -> Self {
        Self {
            id: id.into(),
            points,
            color: color.into(),
            name: None,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Text shown on the polygon's label: the name, or the id when unnamed.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }

    /// Label anchor.
    pub fn centroid(&self) -> Point {
        centroid(&self.points)
    }

    /// Hit test against the polygon's interior.
    pub fn contains(&self, point: Point) -> bool {
        polygon_contains(&self.points, point)
    }
}

/// The canonical, ordered list of polygons.
pub type PolygonSet = Vec<Polygon>;

/// A freshly drawn polygon that has no identity yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonDraft {
    pub points: Vec<Point>,
    pub color: Color,
}

impl PolygonDraft {
    /// Promote to a polygon once the owner has assigned an id.
    pub fn into_polygon(self, id: PolygonId) -> Polygon {
        Polygon {
            id,
            points: self.points,
            color: self.color,
            name: None,
        }
    }
}

/// Whether a polygon with `id` is present.
pub fn contains_id(polygons: &[Polygon], id: &PolygonId) -> bool {
    polygons.iter().any(|p| &p.id == id)
}

/// Copy of `polygons` without `id`, other entries untouched and in order.
pub fn without(polygons: &[Polygon], id: &PolygonId) -> PolygonSet {
    polygons.iter().filter(|p| &p.id != id).cloned().collect()
}

/// Topmost polygon containing `point`. Later entries are drawn on top.
pub fn hit_test<'a>(polygons: &'a [Polygon], point: Point) -> Option<&'a Polygon> {
    polygons.iter().rev().find(|p| p.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(id: &str, min: f64, max: f64) -> Polygon {
        Polygon::new(
            id,
            vec![
                Point::new(min, min),
                Point::new(max, min),
                Point::new(max, max),
                Point::new(min, max),
            ],
            "#34C759",
        )
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let p = square("p1", 0.1, 0.2);
        assert_eq!(p.label(), "p1");
        assert_eq!(p.with_name("Gate").label(), "Gate");
    }

    #[test]
    fn test_without_preserves_order() {
        let set = vec![square("a", 0.0, 0.1), square("b", 0.2, 0.3), square("c", 0.4, 0.5)];
        let rest = without(&set, &PolygonId::from("b"));
        let ids: Vec<_> = rest.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(rest[0], set[0]);
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let set = vec![square("under", 0.0, 0.8), square("over", 0.2, 0.4)];
        let hit = hit_test(&set, Point::new(0.3, 0.3)).map(|p| p.id.as_str());
        assert_eq!(hit, Some("over"));
        let hit = hit_test(&set, Point::new(0.6, 0.6)).map(|p| p.id.as_str());
        assert_eq!(hit, Some("under"));
        assert!(hit_test(&set, Point::new(0.9, 0.9)).is_none());
    }

    #[test]
    fn test_polygon_wire_format() {
        let json = r##"{"id":"p1","points":[[0.1,0.1],[0.5,0.1],[0.5,0.5]],"color":"#DF00FF"}"##;
        let p: Polygon = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_str(), "p1");
        assert_eq!(p.points.len(), 3);
        assert!(p.name.is_none());
        assert_eq!(serde_json::to_string(&p).unwrap(), json);
    }
}

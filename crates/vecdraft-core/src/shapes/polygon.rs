//! Polygon shape.

use super::{ShapeId, ShapePatch, ShapeStyle, ShapeTrait, apply_common_patch};
use crate::geometry::{Aabb, BBox, centroid};
use crate::rounding::rounded_path;
use crate::transform::GroupTransform;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed polygon (series of points).
///
/// Polygons carry no rotation field: every transform is baked into `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub(crate) id: ShapeId,
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Corner radius (0 = sharp corners).
    #[serde(default)]
    pub corner_radius: f64,
    pub style: ShapeStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Polygon {
    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            corner_radius: 0.0,
            style: ShapeStyle::default(),
            group_id: None,
        }
    }

    /// Add a point to the outline.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polygon has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A polygon needs at least three points to enclose an area.
    pub fn is_closed_shape(&self) -> bool {
        self.points.len() >= 3
    }

    /// SVG path data for the outline, rounded when `corner_radius > 0`.
    pub fn to_path_data(&self) -> String {
        rounded_path(&self.points, self.corner_radius)
    }
}

impl ShapeTrait for Polygon {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.points.iter().copied())
    }

    /// The pivot is the vertex centroid, so rotating a polygon keeps its
    /// centroid in place.
    fn bounding_box(&self) -> BBox {
        let bbox = BBox::from_aabb(self.bounds());
        match centroid(&self.points) {
            Some(pivot) => bbox.with_pivot(pivot),
            None => bbox,
        }
    }

    fn vertices(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    fn transformed(&self, transform: &GroupTransform) -> ShapePatch {
        ShapePatch {
            points: Some(self.points.iter().map(|p| transform.apply(*p)).collect()),
            ..ShapePatch::default()
        }
    }

    fn apply_patch(&mut self, patch: &ShapePatch) {
        if let Some(points) = &patch.points {
            self.points = points.clone();
        }
        if let Some(radius) = patch.corner_radius {
            self.corner_radius = radius.max(0.0);
        }
        apply_common_patch(&mut self.style, &mut self.group_id, patch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 100.0),
        ])
    }

    #[test]
    fn test_polygon_creation() {
        let mut poly = Polygon::from_points(Vec::new());
        assert!(poly.is_empty());
        poly.add_point(Point::new(1.0, 1.0));
        assert_eq!(poly.len(), 1);
        assert!(!poly.is_closed_shape());
        assert!(triangle().is_closed_shape());
    }

    #[test]
    fn test_bounds() {
        let bbox = triangle().bounding_box();
        assert_eq!((bbox.x, bbox.y, bbox.width, bbox.height), (0.0, 0.0, 100.0, 100.0));
        assert_eq!(bbox.rotation, 0.0);
        assert!((bbox.cx - 50.0).abs() < 1e-9);
        assert!((bbox.cy - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_plain_path_data() {
        assert_eq!(triangle().to_path_data(), "M0 0 L100 0 L50 100 Z");
    }

    #[test]
    fn test_rounded_path_data() {
        let mut poly = triangle();
        poly.corner_radius = 5.0;
        let d = poly.to_path_data();
        assert!(d.starts_with('M'));
        assert!(d.contains('Q'));
        assert!(d.ends_with('Z'));
    }
}

//! Rectangle shape.

use super::{ShapeId, ShapePatch, ShapeStyle, ShapeTrait, apply_common_patch};
use crate::geometry::{Aabb, BBox, rotate_point, rotated_bounds};
use crate::transform::GroupTransform;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangle with optional rounded corners.
///
/// Rotation is kept separate from the geometry and applied about the
/// rectangle's own center, so `position`/`width`/`height` always describe the
/// unrotated box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner position before rotation.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Corner radius (0 = sharp corners).
    #[serde(default)]
    pub corner_radius: f64,
    /// Rotation angle in degrees (around center).
    #[serde(default)]
    pub rotation: f64,
    pub style: ShapeStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width: width.max(0.0),
            height: height.max(0.0),
            corner_radius: 0.0,
            rotation: 0.0,
            style: ShapeStyle::default(),
            group_id: None,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let min_x = p1.x.min(p2.x);
        let min_y = p1.y.min(p2.y);
        let width = (p2.x - p1.x).abs();
        let height = (p2.y - p1.y).abs();

        Self::new(Point::new(min_x, min_y), width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Get the unrotated rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Corner radius clamped to half the shorter side.
    pub fn effective_corner_radius(&self) -> f64 {
        self.corner_radius
            .max(0.0)
            .min(self.width.min(self.height) / 2.0)
    }

    fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.position;
        [
            Point::new(x, y),
            Point::new(x + self.width, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ]
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Aabb {
        if self.rotation == 0.0 {
            let r = self.as_rect();
            return Aabb::new(r.x0, r.y0, r.x1, r.y1);
        }
        rotated_bounds(self.corners(), self.center(), self.rotation)
    }

    fn bounding_box(&self) -> BBox {
        BBox::new(
            self.position.x,
            self.position.y,
            self.width,
            self.height,
            self.rotation,
        )
    }

    fn vertices(&self) -> Vec<Point> {
        let center = self.center();
        self.corners()
            .into_iter()
            .map(|p| rotate_point(p, center, self.rotation))
            .collect()
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
        let center = self.center();
        let new_center = transform.apply(center);
        let width = self.width * transform.scale_x;
        let height = self.height * transform.scale_y;
        // Offsets from the old position keep an identity transform exact.
        let shift = (new_center - center) - Vec2::new(width - self.width, height - self.height) / 2.0;
        ShapePatch {
            position: Some(self.position + shift),
            width: Some(width),
            height: Some(height),
            rotation: Some(self.rotation + transform.d_rotation),
            ..ShapePatch::default()
        }
    }

    fn apply_patch(&mut self, patch: &ShapePatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(radius) = patch.corner_radius {
            self.corner_radius = radius.max(0.0);
        }
        apply_common_patch(&mut self.style, &mut self.group_id, patch);
    }
}

//! Ellipse shape.

use super::{ShapeId, ShapePatch, ShapeStyle, ShapeTrait, apply_common_patch};
use crate::geometry::{Aabb, BBox, rotated_bounds};
use crate::transform::GroupTransform;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ellipse shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Horizontal radius.
    pub radius_x: f64,
    /// Vertical radius.
    pub radius_y: f64,
    /// Rotation angle in degrees (around center).
    #[serde(default)]
    pub rotation: f64,
    pub style: ShapeStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Ellipse {
    /// Create a new ellipse.
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius_x: radius_x.max(0.0),
            radius_y: radius_y.max(0.0),
            rotation: 0.0,
            style: ShapeStyle::default(),
            group_id: None,
        }
    }

    /// Create a circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, radius, radius)
    }

    /// Create an ellipse inscribed in a rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.center(), rect.width() / 2.0, rect.height() / 2.0)
    }

    /// The unrotated box the ellipse is inscribed in.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }
}

impl ShapeTrait for Ellipse {
    fn id(&self) -> ShapeId {
        self.id
    }

    /// Rotated bounds approximate the silhouette by the rotated box corners.
    fn bounds(&self) -> Aabb {
        let r = self.as_rect();
        if self.rotation == 0.0 {
            return Aabb::new(r.x0, r.y0, r.x1, r.y1);
        }
        let corners = [
            Point::new(r.x0, r.y0),
            Point::new(r.x1, r.y0),
            Point::new(r.x1, r.y1),
            Point::new(r.x0, r.y1),
        ];
        rotated_bounds(corners, self.center, self.rotation)
    }

    fn bounding_box(&self) -> BBox {
        BBox::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.radius_x * 2.0,
            self.radius_y * 2.0,
            self.rotation,
        )
    }

    fn vertices(&self) -> Vec<Point> {
        Vec::new()
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
            position: Some(transform.apply(self.center)),
            radius_x: Some(self.radius_x * transform.scale_x),
            radius_y: Some(self.radius_y * transform.scale_y),
            rotation: Some(self.rotation + transform.d_rotation),
            ..ShapePatch::default()
        }
    }

    fn apply_patch(&mut self, patch: &ShapePatch) {
        if let Some(center) = patch.position {
            self.center = center;
        }
        if let Some(rx) = patch.radius_x {
            self.radius_x = rx;
        }
        if let Some(ry) = patch.radius_y {
            self.radius_y = ry;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        apply_common_patch(&mut self.style, &mut self.group_id, patch);
    }
}

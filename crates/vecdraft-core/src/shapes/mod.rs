//! Shape definitions for the drawing.

mod color;
mod ellipse;
mod path;
mod polygon;
mod rectangle;

pub use color::SerializableColor;
pub use ellipse::Ellipse;
pub use path::{FillRule, PathShape};
pub use polygon::Polygon;
pub use rectangle::Rectangle;

use crate::geometry::{Aabb, BBox};
use crate::path_data::PathSegment;
use crate::transform::GroupTransform;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Style properties shared by every shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color (transparent = no fill).
    #[serde(default = "default_fill")]
    pub fill: SerializableColor,
    /// Stroke color.
    #[serde(default = "default_stroke")]
    pub stroke: SerializableColor,
    /// Stroke width, never negative.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

fn default_fill() -> SerializableColor {
    SerializableColor::new(0xcc, 0xcc, 0xcc, 255)
}

fn default_stroke() -> SerializableColor {
    SerializableColor::new(0x33, 0x33, 0x33, 255)
}

fn default_stroke_width() -> f64 {
    2.0
}

impl ShapeStyle {
    pub fn new(fill: SerializableColor, stroke: SerializableColor, stroke_width: f64) -> Self {
        Self {
            fill,
            stroke,
            stroke_width: stroke_width.max(0.0),
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: default_fill(),
            stroke: default_stroke(),
            stroke_width: default_stroke_width(),
        }
    }
}

/// A partial update to a shape.
///
/// Every field is optional. [`Shape::apply_patch`] applies the fields that
/// make sense for the target variant and ignores the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapePatch {
    /// Rectangle top-left or ellipse center.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_y: Option<f64>,
    /// Rotation in degrees. Ignored by polygons and paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<PathSegment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ShapeStyle>,
    /// `Some(None)` clears the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Option<String>>,
}

impl ShapePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn corner_radius(radius: f64) -> Self {
        Self {
            corner_radius: Some(radius),
            ..Self::default()
        }
    }

    pub fn group(group_id: Option<String>) -> Self {
        Self {
            group_id: Some(group_id),
            ..Self::default()
        }
    }
}

/// A patch addressed to one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeUpdate {
    pub shape_id: ShapeId,
    pub patch: ShapePatch,
}

impl ShapeUpdate {
    pub fn new(shape_id: ShapeId, patch: ShapePatch) -> Self {
        Self { shape_id, patch }
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Axis-aligned bounds in world coordinates, rotation applied.
    fn bounds(&self) -> Aabb;

    /// Unrotated extent plus the pending rotation.
    fn bounding_box(&self) -> BBox;

    /// Corner points in absolute coordinates.
    fn vertices(&self) -> Vec<Point>;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;

    fn group_id(&self) -> Option<&str>;

    /// The patch that moves this shape through a group transform.
    fn transformed(&self, transform: &GroupTransform) -> ShapePatch;

    /// Apply the fields of a patch relevant to this shape.
    fn apply_patch(&mut self, patch: &ShapePatch);
}

/// Enum wrapper for all shape types (for serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Polygon(Polygon),
    Path(PathShape),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Polygon(s) => s.id(),
            Shape::Path(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Aabb {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
            Shape::Path(s) => s.bounds(),
        }
    }

    pub fn bounding_box(&self) -> BBox {
        match self {
            Shape::Rectangle(s) => s.bounding_box(),
            Shape::Ellipse(s) => s.bounding_box(),
            Shape::Polygon(s) => s.bounding_box(),
            Shape::Path(s) => s.bounding_box(),
        }
    }

    pub fn vertices(&self) -> Vec<Point> {
        match self {
            Shape::Rectangle(s) => s.vertices(),
            Shape::Ellipse(s) => s.vertices(),
            Shape::Polygon(s) => s.vertices(),
            Shape::Path(s) => s.vertices(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style(),
            Shape::Ellipse(s) => s.style(),
            Shape::Polygon(s) => s.style(),
            Shape::Path(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Ellipse(s) => s.style_mut(),
            Shape::Polygon(s) => s.style_mut(),
            Shape::Path(s) => s.style_mut(),
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        match self {
            Shape::Rectangle(s) => s.group_id(),
            Shape::Ellipse(s) => s.group_id(),
            Shape::Polygon(s) => s.group_id(),
            Shape::Path(s) => s.group_id(),
        }
    }

    pub fn transformed(&self, transform: &GroupTransform) -> ShapePatch {
        match self {
            Shape::Rectangle(s) => s.transformed(transform),
            Shape::Ellipse(s) => s.transformed(transform),
            Shape::Polygon(s) => s.transformed(transform),
            Shape::Path(s) => s.transformed(transform),
        }
    }

    pub fn apply_patch(&mut self, patch: &ShapePatch) {
        match self {
            Shape::Rectangle(s) => s.apply_patch(patch),
            Shape::Ellipse(s) => s.apply_patch(patch),
            Shape::Polygon(s) => s.apply_patch(patch),
            Shape::Path(s) => s.apply_patch(patch),
        }
    }

    /// Return a copy with the patch applied.
    pub fn patched(&self, patch: &ShapePatch) -> Shape {
        let mut shape = self.clone();
        shape.apply_patch(patch);
        shape
    }

    /// Regenerate the shape's ID with a new unique identifier.
    /// This is used when duplicating shapes to ensure they have unique IDs.
    pub fn regenerate_id(&mut self) {
        let new_id = Uuid::new_v4();
        match self {
            Shape::Rectangle(s) => s.id = new_id,
            Shape::Ellipse(s) => s.id = new_id,
            Shape::Polygon(s) => s.id = new_id,
            Shape::Path(s) => s.id = new_id,
        }
    }

    /// Rotation in degrees (always 0 for polygons and paths).
    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Rectangle(r) => r.rotation,
            Shape::Ellipse(e) => e.rotation,
            Shape::Polygon(_) | Shape::Path(_) => 0.0,
        }
    }

    /// Corner radius for variants that support rounding.
    pub fn corner_radius(&self) -> Option<f64> {
        match self {
            Shape::Rectangle(r) => Some(r.corner_radius),
            Shape::Polygon(p) => Some(p.corner_radius),
            Shape::Ellipse(_) | Shape::Path(_) => None,
        }
    }

    pub fn supports_corner_radius(&self) -> bool {
        self.corner_radius().is_some()
    }

    /// Lowercase variant name, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Polygon(_) => "polygon",
            Shape::Path(_) => "path",
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(value: Rectangle) -> Self {
        Shape::Rectangle(value)
    }
}

impl From<Ellipse> for Shape {
    fn from(value: Ellipse) -> Self {
        Shape::Ellipse(value)
    }
}

impl From<Polygon> for Shape {
    fn from(value: Polygon) -> Self {
        Shape::Polygon(value)
    }
}

impl From<PathShape> for Shape {
    fn from(value: PathShape) -> Self {
        Shape::Path(value)
    }
}

/// Apply the style and group fields every variant shares.
pub(crate) fn apply_common_patch(
    style: &mut ShapeStyle,
    group_id: &mut Option<String>,
    patch: &ShapePatch,
) {
    if let Some(new_style) = &patch.style {
        *style = new_style.clone();
    }
    if let Some(new_group) = &patch.group_id {
        *group_id = new_group.clone();
    }
}

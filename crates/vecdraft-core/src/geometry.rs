//! Bounding boxes, vertex extraction and point rotation.

use crate::shapes::Shape;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds as min/max extents.
///
/// A shape with no geometry yields [`Aabb::EMPTY`] (`+inf` minimums and
/// `-inf` maximums); check [`Aabb::is_empty`] before using the extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Self {
        points.into_iter().fold(Self::EMPTY, |acc, p| acc.include_point(p))
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    #[must_use]
    pub fn include_point(self, p: Point) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            min_y: self.min_y.min(p.y),
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
        }
    }

    /// Union of two boxes. Empty boxes are the identity.
    #[must_use]
    pub fn union(self, other: Aabb) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max_x - self.min_x }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max_y - self.min_y }
    }

    pub fn to_rect(&self) -> Option<Rect> {
        if self.is_empty() {
            None
        } else {
            Some(Rect::new(self.min_x, self.min_y, self.max_x, self.max_y))
        }
    }
}

/// A box at rest plus the rotation (degrees) pending about its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub cx: f64,
    pub cy: f64,
    pub rotation: f64,
}

impl BBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            cx: x + width / 2.0,
            cy: y + height / 2.0,
            rotation,
        }
    }

    /// Unrotated box covering the bounds. An empty box collapses to the origin.
    pub fn from_aabb(aabb: Aabb) -> Self {
        if aabb.is_empty() {
            return Self::new(0.0, 0.0, 0.0, 0.0, 0.0);
        }
        Self::new(aabb.min_x, aabb.min_y, aabb.width(), aabb.height(), 0.0)
    }

    /// The pivot rotation and scale happen about.
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Same box with a different pivot.
    #[must_use]
    pub fn with_pivot(self, pivot: Point) -> Self {
        Self {
            cx: pivot.x,
            cy: pivot.y,
            ..self
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Corners `[TL, TR, BR, BL]` with the rotation applied.
    pub fn corners(&self) -> [Point; 4] {
        let center = self.center();
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
        .map(|p| rotate_point(p, center, self.rotation))
    }
}

/// Rotate `point` about `center` by `degrees` (clockwise on a y-down canvas).
pub fn rotate_point(point: Point, center: Point, degrees: f64) -> Point {
    if degrees == 0.0 {
        return point;
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        dx * cos - dy * sin + center.x,
        dx * sin + dy * cos + center.y,
    )
}

/// Bounds of the corners after rotating them about `center`.
pub(crate) fn rotated_bounds(corners: [Point; 4], center: Point, degrees: f64) -> Aabb {
    Aabb::from_points(corners.into_iter().map(|p| rotate_point(p, center, degrees)))
}

/// Rotation-corrected axis-aligned bounds of a shape.
pub fn axis_aligned_bounds(shape: &Shape) -> Aabb {
    shape.bounds()
}

pub fn bounding_box(shape: &Shape) -> BBox {
    shape.bounding_box()
}

pub fn vertices(shape: &Shape) -> Vec<Point> {
    shape.vertices()
}

/// Reference box for a selection.
///
/// A single shape uses its own box and rotation so single- and multi-select
/// agree; several shapes use the union of their rotated bounds at rotation 0.
pub fn group_bounding_box(shapes: &[Shape]) -> Option<BBox> {
    match shapes {
        [] => None,
        [shape] => Some(shape.bounding_box()),
        _ => {
            let union = shapes
                .iter()
                .map(Shape::bounds)
                .fold(Aabb::EMPTY, Aabb::union);
            Some(BBox::from_aabb(union))
        }
    }
}

/// Half the shortest edge of the closed vertex loop; 0 without vertices.
pub fn corner_radius_capacity(shape: &Shape) -> f64 {
    let points = shape.vertices();
    if points.len() < 2 {
        return 0.0;
    }
    let shortest = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.distance(*b))
        .fold(f64::INFINITY, f64::min);
    shortest / 2.0
}

pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

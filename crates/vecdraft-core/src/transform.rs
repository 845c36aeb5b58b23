//! Composite group transforms.
//!
//! A gesture is expressed as a requested [`BBox`] for the selection. The
//! difference between the initial and requested box becomes one affine map,
//! which each shape variant then applies in its own way (see
//! [`ShapeTrait::transformed`](crate::shapes::ShapeTrait::transformed)).

use crate::geometry::BBox;
use crate::shapes::{Shape, ShapeUpdate};
use kurbo::{Affine, Point, Vec2};

/// Translation, scale and rotation between two selection boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTransform {
    pub dx: f64,
    pub dy: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Rotation delta in degrees.
    pub d_rotation: f64,
    pub affine: Affine,
}

impl GroupTransform {
    pub fn identity() -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            d_rotation: 0.0,
            affine: Affine::IDENTITY,
        }
    }

    /// Derive the transform taking `initial` to `requested`.
    ///
    /// A zero-sized initial dimension keeps a scale factor of 1. Rotation and
    /// scale happen about the initial center.
    pub fn between(initial: &BBox, requested: &BBox) -> Self {
        let dx = requested.x - initial.x;
        let dy = requested.y - initial.y;
        let scale_x = if initial.width == 0.0 { 1.0 } else { requested.width / initial.width };
        let scale_y = if initial.height == 0.0 { 1.0 } else { requested.height / initial.height };
        let d_rotation = requested.rotation - initial.rotation;

        let center = Vec2::new(initial.cx, initial.cy);
        let affine = Affine::translate(center)
            * Affine::rotate(d_rotation.to_radians())
            * Affine::scale_non_uniform(scale_x, scale_y)
            * Affine::translate(-center)
            * Affine::translate(Vec2::new(dx, dy));

        Self {
            dx,
            dy,
            scale_x,
            scale_y,
            d_rotation,
            affine,
        }
    }

    /// A pure translation.
    pub fn translation(delta: Vec2) -> Self {
        Self {
            dx: delta.x,
            dy: delta.y,
            affine: Affine::translate(delta),
            ..Self::identity()
        }
    }

    pub fn apply(&self, point: Point) -> Point {
        self.affine * point
    }

    pub fn is_identity(&self) -> bool {
        self.dx == 0.0
            && self.dy == 0.0
            && self.scale_x == 1.0
            && self.scale_y == 1.0
            && self.d_rotation == 0.0
    }
}

impl Default for GroupTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Updates that carry `initial_shapes` from `initial_bbox` to `requested`.
///
/// Always computed from the pristine snapshot, never from live state, so
/// repeated frames of one gesture do not accumulate error.
pub fn apply_group_transform(
    initial_shapes: &[Shape],
    initial_bbox: &BBox,
    requested: &BBox,
) -> Vec<ShapeUpdate> {
    let transform = GroupTransform::between(initial_bbox, requested);
    transform_shapes(initial_shapes, &transform)
}

pub fn transform_shapes(shapes: &[Shape], transform: &GroupTransform) -> Vec<ShapeUpdate> {
    shapes
        .iter()
        .map(|shape| ShapeUpdate::new(shape.id(), shape.transformed(transform)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{bounding_box, centroid, group_bounding_box, rotate_point};
    use crate::path_data::PathSegment;
    use crate::shapes::{Ellipse, PathShape, Polygon, Rectangle};

    const EPS: f64 = 1e-9;

    fn apply_all(shapes: &[Shape], updates: &[ShapeUpdate]) -> Vec<Shape> {
        shapes
            .iter()
            .zip(updates)
            .map(|(shape, update)| {
                assert_eq!(shape.id(), update.shape_id);
                shape.patched(&update.patch)
            })
            .collect()
    }

    fn sample_shapes() -> Vec<Shape> {
        let mut rect = Rectangle::new(Point::new(10.0, 20.0), 40.0, 30.0);
        rect.rotation = 25.0;
        let mut ellipse = Ellipse::new(Point::new(120.0, 80.0), 15.0, 25.0);
        ellipse.rotation = -10.0;
        vec![
            Shape::from(rect),
            Shape::from(ellipse),
            Shape::from(Polygon::from_points(vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(50.0, 100.0),
            ])),
            Shape::from(PathShape::from_path_data("M3 4 L30 40 C1 2 3 4 5 6 Q7 8 9 10 Z")),
        ]
    }

    #[test]
    fn test_identity_request_is_identity() {
        let shapes = sample_shapes();
        let bbox = group_bounding_box(&shapes).unwrap();
        let transform = GroupTransform::between(&bbox, &bbox);
        assert!(transform.is_identity());
        let result = apply_all(&shapes, &apply_group_transform(&shapes, &bbox, &bbox));
        assert_eq!(result, shapes);
    }

    #[test]
    fn test_move_rectangle_scenario() {
        let rect = Shape::from(Rectangle::new(Point::new(0.0, 0.0), 100.0, 50.0));
        let initial = bounding_box(&rect);
        let requested = BBox::new(10.0, 10.0, 100.0, 50.0, 0.0);
        let updates = apply_group_transform(std::slice::from_ref(&rect), &initial, &requested);
        let Shape::Rectangle(moved) = rect.patched(&updates[0].patch) else {
            panic!("Expected Rectangle shape");
        };
        assert!((moved.position.x - 10.0).abs() < EPS);
        assert!((moved.position.y - 10.0).abs() < EPS);
        assert!((moved.width - 100.0).abs() < EPS);
        assert!((moved.height - 50.0).abs() < EPS);
        assert_eq!(moved.rotation, 0.0);
    }

    #[test]
    fn test_rotate_polygon_about_centroid() {
        let points = vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(50.0, 100.0)];
        let poly = Shape::from(Polygon::from_points(points.clone()));
        let initial = bounding_box(&poly);
        let requested = BBox { rotation: 90.0, ..initial };
        let updates = apply_group_transform(std::slice::from_ref(&poly), &initial, &requested);
        let rotated = poly.patched(&updates[0].patch);

        let center = Point::new(50.0, 100.0 / 3.0);
        assert!(initial.center().distance(center) < EPS);
        let Shape::Polygon(rotated) = rotated else {
            panic!("Expected Polygon shape");
        };
        for (orig, new) in points.iter().zip(&rotated.points) {
            let expected = rotate_point(*orig, center, 90.0);
            assert!((expected.x - new.x).abs() < EPS);
            assert!((expected.y - new.y).abs() < EPS);
        }
        assert_eq!(Shape::Polygon(rotated).rotation(), 0.0);
    }

    #[test]
    fn test_rotation_keeps_centroid_fixed() {
        let points = vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(50.0, 100.0)];
        let poly = Shape::from(Polygon::from_points(points.clone()));
        let initial = bounding_box(&poly);
        let requested = BBox { rotation: 90.0, ..initial };
        let updates = apply_group_transform(std::slice::from_ref(&poly), &initial, &requested);
        let rotated = updates[0].patch.points.clone().unwrap();

        let before = centroid(&points).unwrap();
        let after = centroid(&rotated).unwrap();
        assert!(before.distance(after) < EPS);
        for (orig, new) in points.iter().zip(&rotated) {
            assert!((orig.distance(before) - new.distance(after)).abs() < EPS);
        }
    }

    #[test]
    fn test_rotate_back_from_snapshot_is_exact() {
        let shapes = sample_shapes();
        let bbox = group_bounding_box(&shapes).unwrap();
        let forward = BBox { rotation: bbox.rotation + 37.0, ..bbox };
        let _ = apply_group_transform(&shapes, &bbox, &forward);
        let back = apply_group_transform(&shapes, &bbox, &bbox);
        assert_eq!(apply_all(&shapes, &back), shapes);
    }

    #[test]
    fn test_single_and_group_paths_agree() {
        let mut rect = Rectangle::new(Point::new(5.0, 5.0), 60.0, 20.0);
        rect.rotation = 30.0;
        let shape = Shape::from(rect);
        let own = bounding_box(&shape);
        let group = group_bounding_box(std::slice::from_ref(&shape)).unwrap();
        assert_eq!(own, group);

        let requested = BBox::new(own.x + 7.0, own.y - 3.0, own.width * 1.5, own.height, own.rotation + 45.0);
        let a = apply_group_transform(std::slice::from_ref(&shape), &own, &requested);
        let b = apply_group_transform(std::slice::from_ref(&shape), &group, &requested);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rectangle_keeps_rotation_field() {
        let mut rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        rect.rotation = 10.0;
        let shape = Shape::from(rect);
        let initial = bounding_box(&shape);
        let requested = BBox { rotation: 40.0, ..initial };
        let updates = apply_group_transform(std::slice::from_ref(&shape), &initial, &requested);
        assert_eq!(updates[0].patch.rotation, Some(40.0));
        // Rotation about its own center leaves the position alone.
        let pos = updates[0].patch.position.unwrap();
        assert!((pos.x - 0.0).abs() < EPS && (pos.y - 0.0).abs() < EPS);
    }

    #[test]
    fn test_scale_about_center() {
        let ellipse = Shape::from(Ellipse::new(Point::new(50.0, 50.0), 10.0, 20.0));
        let initial = bounding_box(&ellipse);
        let requested = BBox::new(initial.x, initial.y, initial.width * 2.0, initial.height * 0.5, 0.0);
        let updates = apply_group_transform(std::slice::from_ref(&ellipse), &initial, &requested);
        let patch = &updates[0].patch;
        assert_eq!(patch.position, Some(Point::new(50.0, 50.0)));
        assert_eq!(patch.radius_x, Some(20.0));
        assert_eq!(patch.radius_y, Some(10.0));
    }

    #[test]
    fn test_zero_size_box_keeps_unit_scale() {
        let initial = BBox::new(0.0, 0.0, 0.0, 10.0, 0.0);
        let requested = BBox::new(0.0, 0.0, 50.0, 20.0, 0.0);
        let t = GroupTransform::between(&initial, &requested);
        assert_eq!(t.scale_x, 1.0);
        assert_eq!(t.scale_y, 2.0);
    }

    #[test]
    fn test_arc_points_untransformed() {
        let path = Shape::from(PathShape::from_path_data("M0 0 A5 5 0 0 1 10 0 L20 0"));
        let t = GroupTransform::translation(Vec2::new(5.0, 5.0));
        let updates = transform_shapes(std::slice::from_ref(&path), &t);
        let segments = updates[0].patch.segments.clone().unwrap();
        assert_eq!(segments[0], PathSegment::move_to(Point::new(5.0, 5.0)));
        assert_eq!(segments[1].points, vec![Point::new(10.0, 0.0)]);
        assert_eq!(segments[2], PathSegment::line_to(Point::new(25.0, 5.0)));
    }

    #[test]
    fn test_group_move_translates_everything() {
        let shapes = sample_shapes();
        let bbox = group_bounding_box(&shapes).unwrap();
        let requested = BBox::new(bbox.x + 12.0, bbox.y - 8.0, bbox.width, bbox.height, 0.0);
        let moved = apply_all(&shapes, &apply_group_transform(&shapes, &bbox, &requested));
        let after = group_bounding_box(&moved).unwrap();
        assert!((after.x - requested.x).abs() < 1e-6);
        assert!((after.y - requested.y).abs() < 1e-6);
        assert!((after.width - bbox.width).abs() < 1e-6);
    }
}

//! Selection handles and the gesture-to-box derivations behind them.

use crate::geometry::{BBox, rotate_point};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Handle size in screen pixels.
pub const HANDLE_SIZE: f64 = 10.0;
/// Distance from the top edge to the rotation handle (in world units).
pub const ROTATE_HANDLE_OFFSET: f64 = 30.0;
/// Smallest width or height a resize may produce.
pub const MIN_RESIZE_DIMENSION: f64 = 5.0;
/// Rotation snapping step in degrees.
pub const ANGLE_SNAP_INCREMENT: f64 = 15.0;

/// A grip on the selection box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    /// Rotation handle (above the top edge).
    Rotate,
    /// The box body; drags the whole selection.
    Move,
}

impl Handle {
    /// The eight resize handles, clockwise from the top-left corner.
    pub const RESIZE: [Handle; 8] = [
        Handle::NW,
        Handle::N,
        Handle::NE,
        Handle::E,
        Handle::SE,
        Handle::S,
        Handle::SW,
        Handle::W,
    ];

    pub fn is_resize(&self) -> bool {
        !matches!(self, Handle::Rotate | Handle::Move)
    }

    /// Horizontal and vertical direction of a resize handle in the box's
    /// local frame (-1 = west/north, 1 = east/south, 0 = unaffected).
    pub fn direction(&self) -> (f64, f64) {
        match self {
            Handle::N => (0.0, -1.0),
            Handle::NE => (1.0, -1.0),
            Handle::E => (1.0, 0.0),
            Handle::SE => (1.0, 1.0),
            Handle::S => (0.0, 1.0),
            Handle::SW => (-1.0, 1.0),
            Handle::W => (-1.0, 0.0),
            Handle::NW => (-1.0, -1.0),
            Handle::Rotate | Handle::Move => (0.0, 0.0),
        }
    }
}

/// A handle and where it sits in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePosition {
    pub handle: Handle,
    pub position: Point,
}

impl HandlePosition {
    /// Check if a point (in world coordinates) hits this handle.
    /// `tolerance` should be adjusted for camera zoom.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// Resize and rotate handles for a selection box, rotated with the box.
pub fn handle_positions(bbox: &BBox) -> Vec<HandlePosition> {
    let box_center = Point::new(bbox.x + bbox.width / 2.0, bbox.y + bbox.height / 2.0);
    let pivot = bbox.center();
    let half_w = bbox.width / 2.0;
    let half_h = bbox.height / 2.0;

    let place = |dx: f64, dy: f64| {
        let local = Point::new(box_center.x + dx, box_center.y + dy);
        rotate_point(local, pivot, bbox.rotation)
    };

    let mut handles: Vec<HandlePosition> = Handle::RESIZE
        .iter()
        .map(|&handle| {
            let (hx, hy) = handle.direction();
            HandlePosition {
                handle,
                position: place(hx * half_w, hy * half_h),
            }
        })
        .collect();
    handles.push(HandlePosition {
        handle: Handle::Rotate,
        position: place(0.0, -half_h - ROTATE_HANDLE_OFFSET),
    });
    handles
}

/// Find which handle (if any) is hit at the given point.
pub fn hit_test_handles(bbox: &BBox, point: Point, tolerance: f64) -> Option<Handle> {
    handle_positions(bbox)
        .into_iter()
        .find(|h| h.hit_test(point, tolerance))
        .map(|h| h.handle)
}

/// Whether `point` falls inside the (possibly rotated) box body.
pub fn hit_test_body(bbox: &BBox, point: Point) -> bool {
    let local = rotate_point(point, bbox.center(), -bbox.rotation);
    bbox.as_rect().contains(local)
}

/// Box translated by the pointer delta.
pub fn move_request(initial: &BBox, delta: Vec2) -> BBox {
    BBox {
        x: initial.x + delta.x,
        y: initial.y + delta.y,
        ..*initial
    }
}

/// Box resized by dragging `handle` by `delta`.
///
/// The delta is taken into the box's unrotated frame first so a rotated box
/// stretches along its own axes. The position is kept, which makes the
/// transform a pure scale about the center. Returns `None` when either side
/// would drop to [`MIN_RESIZE_DIMENSION`] or below; callers hold the previous
/// frame.
pub fn resize_request(initial: &BBox, handle: Handle, delta: Vec2) -> Option<BBox> {
    if !handle.is_resize() {
        return None;
    }
    let (sin, cos) = initial.rotation.to_radians().sin_cos();
    let local_dx = delta.x * cos + delta.y * sin;
    let local_dy = -delta.x * sin + delta.y * cos;

    let (hx, hy) = handle.direction();
    let width = initial.width + hx * local_dx;
    let height = initial.height + hy * local_dy;

    if width > MIN_RESIZE_DIMENSION && height > MIN_RESIZE_DIMENSION {
        Some(BBox {
            width,
            height,
            ..*initial
        })
    } else {
        None
    }
}

/// Angle of `pointer` around the box pivot, in degrees, 0 straight up.
pub fn pointer_angle(bbox: &BBox, pointer: Point) -> f64 {
    let dx = pointer.x - bbox.cx;
    let dy = pointer.y - bbox.cy;
    dy.atan2(dx).to_degrees() + 90.0
}

pub fn snap_angle(degrees: f64) -> f64 {
    (degrees / ANGLE_SNAP_INCREMENT).round() * ANGLE_SNAP_INCREMENT
}

/// Box rotated so the rotate handle follows `pointer`.
pub fn rotate_request(initial: &BBox, pointer: Point, snap: bool) -> BBox {
    let mut rotation = pointer_angle(initial, pointer);
    if snap {
        rotation = snap_angle(rotation);
    }
    BBox {
        rotation,
        ..*initial
    }
}

/// Box uniformly scaled by `factor` about its center.
pub fn scale_request(initial: &BBox, factor: f64) -> BBox {
    BBox {
        width: initial.width * factor,
        height: initial.height * factor,
        ..*initial
    }
}

/// Box with an absolute rotation in degrees.
pub fn rotation_request(initial: &BBox, degrees: f64) -> BBox {
    BBox {
        rotation: degrees,
        ..*initial
    }
}

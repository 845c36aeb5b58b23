//! Corner rounding for polygons.

use crate::path_data::{PathSegment, encode};
use kurbo::{Point, Vec2};

/// Closed polyline through `points` without rounding.
pub fn plain_segments(points: &[Point]) -> Vec<PathSegment> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut segments = Vec::with_capacity(points.len() + 1);
    segments.push(PathSegment::move_to(*first));
    segments.extend(rest.iter().map(|p| PathSegment::line_to(*p)));
    segments.push(PathSegment::close());
    segments
}

/// Closed outline through `points` with each corner replaced by a quadratic
/// curve.
///
/// The radius used at a vertex is `min(radius, |edge_in| / 2, |edge_out| / 2)`
/// so neighbouring corners never overlap. A radius `<= 0` or fewer than three
/// points yields the plain polygon.
pub fn rounded_segments(points: &[Point], radius: f64) -> Vec<PathSegment> {
    let n = points.len();
    if n < 3 || radius.is_nan() || radius <= 0.0 {
        return plain_segments(points);
    }

    let mut segments = Vec::with_capacity(n * 2 + 1);
    for i in 0..n {
        let p0 = points[(i + n - 1) % n];
        let p1 = points[i];
        let p2 = points[(i + 1) % n];

        let v_in = p0 - p1;
        let v_out = p2 - p1;
        let r = radius
            .min(v_in.hypot() / 2.0)
            .min(v_out.hypot() / 2.0);

        let start = p1 + unit(v_in) * r;
        let end = p1 + unit(v_out) * r;

        if i == 0 {
            segments.push(PathSegment::move_to(start));
        } else {
            segments.push(PathSegment::line_to(start));
        }
        segments.push(PathSegment::quad_to(p1, end));
    }
    segments.push(PathSegment::close());
    segments
}

/// Path data for [`rounded_segments`].
pub fn rounded_path(points: &[Point], radius: f64) -> String {
    encode(&rounded_segments(points, radius))
}

/// Unit vector, or zero for a degenerate edge.
fn unit(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len > 0.0 { v / len } else { Vec2::ZERO }
}

//! Free-form path shape built from SVG path segments.

use super::{ShapeId, ShapePatch, ShapeStyle, ShapeTrait, apply_common_patch};
use crate::geometry::{Aabb, BBox};
use crate::path_data::{self, PathCommand, PathSegment};
use crate::transform::GroupTransform;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// SVG `fill-rule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillRule {
    EvenOdd,
    NonZero,
}

impl FillRule {
    pub fn as_svg(&self) -> &'static str {
        match self {
            FillRule::EvenOdd => "evenodd",
            FillRule::NonZero => "nonzero",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "evenodd" => Some(FillRule::EvenOdd),
            "nonzero" => Some(FillRule::NonZero),
            _ => None,
        }
    }
}

/// A path made of absolute segments. Like polygons, transforms are baked
/// into the segment points; arc segments pass through untransformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShape {
    pub(crate) id: ShapeId,
    pub segments: Vec<PathSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_rule: Option<FillRule>,
    pub style: ShapeStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl PathShape {
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self {
            id: Uuid::new_v4(),
            segments,
            fill_rule: None,
            style: ShapeStyle::default(),
            group_id: None,
        }
    }

    /// Decode SVG path data. Malformed input yields whatever segments parse.
    pub fn from_path_data(data: &str) -> Self {
        Self::from_segments(path_data::decode(data))
    }

    pub fn to_path_data(&self) -> String {
        path_data::encode(&self.segments)
    }

    pub fn has_arcs(&self) -> bool {
        self.segments.iter().any(PathSegment::is_arc)
    }
}

impl ShapeTrait for PathShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.segments.iter().flat_map(|s| s.points.iter().copied()))
    }

    fn bounding_box(&self) -> BBox {
        BBox::from_aabb(self.bounds())
    }

    /// End points of the drawing segments. Empty when the path has arcs,
    /// whose geometry is not decomposed.
    fn vertices(&self) -> Vec<Point> {
        if self.has_arcs() {
            return Vec::new();
        }
        self.segments
            .iter()
            .filter(|s| s.command != PathCommand::ClosePath)
            .filter_map(PathSegment::end_point)
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
        let segments = self
            .segments
            .iter()
            .map(|segment| {
                if segment.is_arc() {
                    return segment.clone();
                }
                PathSegment {
                    command: segment.command,
                    points: segment.points.iter().map(|p| transform.apply(*p)).collect(),
                }
            })
            .collect();
        ShapePatch {
            segments: Some(segments),
            ..ShapePatch::default()
        }
    }

    fn apply_patch(&mut self, patch: &ShapePatch) {
        if let Some(segments) = &patch.segments {
            self.segments = segments.clone();
        }
        apply_common_patch(&mut self.style, &mut self.group_id, patch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_data() {
        let path = PathShape::from_path_data("M5 5 L15 5 L15 15 L5 15 Z");
        assert_eq!(path.segments.len(), 5);
        assert_eq!(path.to_path_data(), "M5 5 L15 5 L15 15 L5 15 Z");
    }

    #[test]
    fn test_vertices_skip_close() {
        let path = PathShape::from_path_data("M0 0 L10 0 Q10 10 0 10 Z");
        assert_eq!(
            path.vertices(),
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)]
        );
    }

    #[test]
    fn test_bounds_include_control_points() {
        let path = PathShape::from_path_data("M0 0 C0 -20 10 -20 10 0");
        let aabb = path.bounds();
        assert_eq!(aabb.min_y, -20.0);
        assert_eq!(aabb.max_x, 10.0);
    }

    #[test]
    fn test_arc_path_has_no_vertices() {
        let path = PathShape::from_path_data("M0 0 A5 5 0 0 1 10 0");
        assert!(path.has_arcs());
        assert!(path.vertices().is_empty());
    }

    #[test]
    fn test_fill_rule_parse() {
        assert_eq!(FillRule::parse("evenodd"), Some(FillRule::EvenOdd));
        assert_eq!(FillRule::parse("nonzero"), Some(FillRule::NonZero));
        assert_eq!(FillRule::parse("inherit"), None);
        assert_eq!(FillRule::EvenOdd.as_svg(), "evenodd");
    }
}

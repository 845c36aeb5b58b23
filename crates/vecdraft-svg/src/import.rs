//! SVG markup to path shapes.
//!
//! Every supported element becomes a [`PathShape`] whose points already carry
//! the element's cumulative transform. Circles, ellipses and rounded rects are
//! approximated with cubic quarter arcs so they can be baked the same way;
//! arc commands inside `<path d>` pass through untouched.

use crate::{ImportError, ImportOptions, ImportResult};
use kurbo::{Affine, Point, Vec2};
use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{ParserOptions, StyleAttribute};
use roxmltree::Node;
use vecdraft_core::path_data::{self, PathSegment};
use vecdraft_core::rounding::plain_segments;
use vecdraft_core::{Drawing, FillRule, PathShape, SerializableColor, Shape, ShapeId, ShapeStyle};

/// Control point distance for a cubic quarter circle.
const KAPPA: f64 = 0.552_284_749_8;

/// Elements whose subtree never renders directly.
const NON_RENDERED: [&str; 6] = ["defs", "clipPath", "mask", "symbol", "pattern", "marker"];

/// Parse `svg` into path shapes.
///
/// Fails with [`ImportError::MalformedSvg`] when the markup does not parse or
/// has no `<svg>` element, and with [`ImportError::EmptyImport`] when nothing
/// convertible is found.
pub fn import_svg(svg: &str, options: &ImportOptions) -> ImportResult<Vec<Shape>> {
    let doc = roxmltree::Document::parse(svg).map_err(|e| ImportError::MalformedSvg(e.to_string()))?;
    let root = doc
        .descendants()
        .find(|n| n.has_tag_name("svg"))
        .ok_or_else(|| ImportError::MalformedSvg("no <svg> element".to_string()))?;

    let mut shapes = Vec::new();
    let paint = Paint::from_style(&options.default_style);
    // The root's own viewBox and size are ignored; coordinates stay in user space.
    collect_shapes(root, Affine::IDENTITY, &paint, &mut shapes);

    if shapes.is_empty() {
        return Err(ImportError::EmptyImport);
    }
    log::info!("imported {} shape(s) from SVG", shapes.len());
    Ok(shapes)
}

/// Import `svg` into a layer of `drawing`.
///
/// Either every imported shape is added or, on error, the drawing is left
/// untouched.
pub fn import_into(
    drawing: &mut Drawing,
    layer_id: &str,
    svg: &str,
    options: &ImportOptions,
) -> ImportResult<Vec<ShapeId>> {
    if drawing.layer(layer_id).is_none() {
        return Err(ImportError::UnknownLayer(layer_id.to_string()));
    }
    let shapes = import_svg(svg, options)?;
    drawing
        .add_shapes(layer_id, shapes)
        .map_err(|_| ImportError::UnknownLayer(layer_id.to_string()))
}

/// Inherited paint properties while walking the tree.
#[derive(Debug, Clone)]
struct Paint {
    fill: SerializableColor,
    stroke: SerializableColor,
    stroke_width: f64,
    fill_opacity: f64,
    stroke_opacity: f64,
    fill_rule: Option<FillRule>,
    visible: bool,
}

impl Paint {
    fn from_style(style: &ShapeStyle) -> Self {
        Self {
            fill: style.fill,
            stroke: style.stroke,
            stroke_width: style.stroke_width,
            fill_opacity: 1.0,
            stroke_opacity: 1.0,
            fill_rule: None,
            visible: true,
        }
    }

    fn to_style(&self) -> ShapeStyle {
        ShapeStyle::new(
            with_opacity(self.fill, self.fill_opacity),
            with_opacity(self.stroke, self.stroke_opacity),
            self.stroke_width,
        )
    }
}

fn with_opacity(color: SerializableColor, opacity: f64) -> SerializableColor {
    let a = (color.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
    SerializableColor { a, ..color }
}

/// Properties that only affect the element they are set on.
#[derive(Debug, Default)]
struct Local {
    display_none: bool,
    transparent: bool,
}

fn collect_shapes(node: Node<'_, '_>, parent_ctm: Affine, parent_paint: &Paint, out: &mut Vec<Shape>) {
    let tag = node.tag_name().name();
    if NON_RENDERED.contains(&tag) {
        return;
    }

    let mut paint = parent_paint.clone();
    let local = apply_properties(node, &mut paint);
    if local.display_none || local.transparent {
        log::trace!("skipping hidden <{tag}>");
        return;
    }

    let ctm = match node.attribute("transform") {
        Some(transform) => parent_ctm * parse_transform(transform),
        None => parent_ctm,
    };

    match tag {
        "svg" | "g" | "a" | "switch" => {
            for child in node.children().filter(Node::is_element) {
                collect_shapes(child, ctm, &paint, out);
            }
        }
        "rect" | "circle" | "ellipse" | "polygon" | "polyline" | "line" | "path" => {
            if !paint.visible {
                return;
            }
            match element_segments(node, tag) {
                Some(segments) => out.push(build_shape(segments, ctm, &paint)),
                None => log::warn!("could not convert <{tag}> element, skipping"),
            }
        }
        _ => log::trace!("ignoring <{tag}>"),
    }
}

fn build_shape(mut segments: Vec<PathSegment>, ctm: Affine, paint: &Paint) -> Shape {
    for segment in segments.iter_mut().filter(|s| !s.is_arc()) {
        for point in &mut segment.points {
            *point = ctm * *point;
        }
    }
    let mut path = PathShape::from_segments(segments);
    path.style = paint.to_style();
    path.fill_rule = paint.fill_rule;
    Shape::Path(path)
}

/// Resolve presentation attributes, then inline `style` declarations, onto
/// `paint`. Returns the non-inherited visibility flags of this element.
fn apply_properties(node: Node<'_, '_>, paint: &mut Paint) -> Local {
    const PROPERTIES: [&str; 9] = [
        "fill",
        "stroke",
        "stroke-width",
        "fill-opacity",
        "stroke-opacity",
        "fill-rule",
        "display",
        "visibility",
        "opacity",
    ];

    let mut local = Local::default();
    for name in PROPERTIES {
        if let Some(value) = node.attribute(name) {
            apply_property(name, value, paint, &mut local);
        }
    }
    if let Some(style) = node.attribute("style") {
        apply_style_attribute(style, paint, &mut local);
    }
    local
}

/// Apply inline `style` declarations, `!important` ones last.
fn apply_style_attribute(style: &str, paint: &mut Paint, local: &mut Local) {
    let block = match StyleAttribute::parse(style, ParserOptions::default()) {
        Ok(attribute) => attribute.declarations,
        Err(e) => {
            log::warn!("ignoring unparseable style `{style}`: {e}");
            return;
        }
    };
    for property in block.declarations.iter().chain(&block.important_declarations) {
        let id = property.property_id();
        match property.value_to_css_string(PrinterOptions::default()) {
            Ok(value) => apply_property(id.name(), &value, paint, local),
            Err(e) => log::trace!("skipping `{}` declaration: {e}", id.name()),
        }
    }
}

fn apply_property(name: &str, value: &str, paint: &mut Paint, local: &mut Local) {
    let value = value.trim();
    if value == "inherit" {
        return;
    }
    match name {
        "fill" => {
            if let Some(color) = SerializableColor::parse(value) {
                paint.fill = color;
            }
        }
        "stroke" => {
            if let Some(color) = SerializableColor::parse(value) {
                paint.stroke = color;
            }
        }
        "stroke-width" => {
            if let Some(width) = parse_length(value) {
                paint.stroke_width = width.max(0.0);
            }
        }
        "fill-opacity" => {
            if let Some(opacity) = parse_length(value) {
                paint.fill_opacity = opacity;
            }
        }
        "stroke-opacity" => {
            if let Some(opacity) = parse_length(value) {
                paint.stroke_opacity = opacity;
            }
        }
        "fill-rule" => paint.fill_rule = FillRule::parse(value),
        "display" => local.display_none = value == "none",
        "visibility" => paint.visible = !matches!(value, "hidden" | "collapse"),
        "opacity" => local.transparent = parse_length(value).is_some_and(|o| o <= 0.0),
        _ => {}
    }
}

/// Local-space outline of a basic shape element.
fn element_segments(node: Node<'_, '_>, tag: &str) -> Option<Vec<PathSegment>> {
    let segments = match tag {
        "rect" => rect_segments(node)?,
        "circle" => {
            let r = length_attr(node, "r");
            if r <= 0.0 {
                return None;
            }
            ellipse_segments(Point::new(length_attr(node, "cx"), length_attr(node, "cy")), r, r)
        }
        "ellipse" => {
            let rx = length_attr(node, "rx");
            let ry = length_attr(node, "ry");
            if rx <= 0.0 || ry <= 0.0 {
                return None;
            }
            ellipse_segments(Point::new(length_attr(node, "cx"), length_attr(node, "cy")), rx, ry)
        }
        "polygon" | "polyline" => {
            let points = parse_points(node.attribute("points")?);
            if points.len() < 2 {
                return None;
            }
            if tag == "polygon" {
                plain_segments(&points)
            } else {
                let mut segments = vec![PathSegment::move_to(points[0])];
                segments.extend(points[1..].iter().map(|p| PathSegment::line_to(*p)));
                segments
            }
        }
        "line" => vec![
            PathSegment::move_to(Point::new(length_attr(node, "x1"), length_attr(node, "y1"))),
            PathSegment::line_to(Point::new(length_attr(node, "x2"), length_attr(node, "y2"))),
        ],
        "path" => path_data::decode(node.attribute("d")?),
        _ => return None,
    };
    (!segments.is_empty()).then_some(segments)
}

fn rect_segments(node: Node<'_, '_>) -> Option<Vec<PathSegment>> {
    let x = length_attr(node, "x");
    let y = length_attr(node, "y");
    let w = length_attr(node, "width");
    let h = length_attr(node, "height");
    if w <= 0.0 || h <= 0.0 {
        return None;
    }

    // A missing rx or ry takes the other's value.
    let rx_attr = node.attribute("rx").and_then(parse_length);
    let ry_attr = node.attribute("ry").and_then(parse_length);
    let rx = rx_attr.or(ry_attr).unwrap_or(0.0).clamp(0.0, w / 2.0);
    let ry = ry_attr.or(rx_attr).unwrap_or(0.0).clamp(0.0, h / 2.0);

    if rx <= 0.0 || ry <= 0.0 {
        return Some(plain_segments(&[
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ]));
    }

    let (kx, ky) = (rx * KAPPA, ry * KAPPA);
    let (right, bottom) = (x + w, y + h);
    Some(vec![
        PathSegment::move_to(Point::new(x + rx, y)),
        PathSegment::line_to(Point::new(right - rx, y)),
        PathSegment::cubic_to(
            Point::new(right - rx + kx, y),
            Point::new(right, y + ry - ky),
            Point::new(right, y + ry),
        ),
        PathSegment::line_to(Point::new(right, bottom - ry)),
        PathSegment::cubic_to(
            Point::new(right, bottom - ry + ky),
            Point::new(right - rx + kx, bottom),
            Point::new(right - rx, bottom),
        ),
        PathSegment::line_to(Point::new(x + rx, bottom)),
        PathSegment::cubic_to(
            Point::new(x + rx - kx, bottom),
            Point::new(x, bottom - ry + ky),
            Point::new(x, bottom - ry),
        ),
        PathSegment::line_to(Point::new(x, y + ry)),
        PathSegment::cubic_to(
            Point::new(x, y + ry - ky),
            Point::new(x + rx - kx, y),
            Point::new(x + rx, y),
        ),
        PathSegment::close(),
    ])
}

/// Closed ellipse as four cubic quarter arcs, clockwise from the east point.
fn ellipse_segments(center: Point, rx: f64, ry: f64) -> Vec<PathSegment> {
    let (kx, ky) = (rx * KAPPA, ry * KAPPA);
    let at = |dx: f64, dy: f64| Point::new(center.x + dx, center.y + dy);
    vec![
        PathSegment::move_to(at(rx, 0.0)),
        PathSegment::cubic_to(at(rx, ky), at(kx, ry), at(0.0, ry)),
        PathSegment::cubic_to(at(-kx, ry), at(-rx, ky), at(-rx, 0.0)),
        PathSegment::cubic_to(at(-rx, -ky), at(-kx, -ry), at(0.0, -ry)),
        PathSegment::cubic_to(at(kx, -ry), at(rx, -ky), at(rx, 0.0)),
        PathSegment::close(),
    ]
}

/// Parse an SVG transform list into one affine, applied left to right.
fn parse_transform(input: &str) -> Affine {
    let mut out = Affine::IDENTITY;
    let mut s = input.trim();

    while !s.is_empty() {
        let Some(open) = s.find('(') else { break };
        let name = s[..open].trim_matches(|c: char| c.is_whitespace() || c == ',');
        let Some(close) = s[open + 1..].find(')') else {
            break;
        };
        let args = parse_number_list(&s[open + 1..open + 1 + close]);
        let arg = |i: usize, default: f64| args.get(i).copied().unwrap_or(default);

        let m = match name {
            "matrix" if args.len() >= 6 => {
                Affine::new([args[0], args[1], args[2], args[3], args[4], args[5]])
            }
            "translate" => Affine::translate(Vec2::new(arg(0, 0.0), arg(1, 0.0))),
            "scale" => {
                let sx = arg(0, 1.0);
                Affine::scale_non_uniform(sx, arg(1, sx))
            }
            "rotate" => {
                let rotation = Affine::rotate(arg(0, 0.0).to_radians());
                if args.len() >= 3 {
                    let pivot = Vec2::new(args[1], args[2]);
                    Affine::translate(pivot) * rotation * Affine::translate(-pivot)
                } else {
                    rotation
                }
            }
            "skewX" => Affine::skew(arg(0, 0.0).to_radians().tan(), 0.0),
            "skewY" => Affine::skew(0.0, arg(0, 0.0).to_radians().tan()),
            _ => {
                log::warn!("unsupported transform `{name}`, ignoring");
                Affine::IDENTITY
            }
        };

        out *= m;
        s = s[open + 1 + close + 1..].trim_start();
    }

    out
}

fn parse_number_list(input: &str) -> Vec<f64> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<f64>().ok())
        .collect()
}

fn parse_points(input: &str) -> Vec<Point> {
    parse_number_list(input)
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}

/// A plain or `px` length. Units other than `px` and percentages are not
/// resolved.
fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    value.strip_suffix("px").unwrap_or(value).trim().parse().ok()
}

fn length_attr(node: Node<'_, '_>, name: &str) -> f64 {
    node.attribute(name).and_then(parse_length).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecdraft_core::PathCommand;

    const EPS: f64 = 1e-9;

    fn import(svg: &str) -> Vec<Shape> {
        import_svg(svg, &ImportOptions::default()).unwrap()
    }

    fn only_path(svg: &str) -> PathShape {
        let mut shapes = import(svg);
        assert_eq!(shapes.len(), 1);
        match shapes.remove(0) {
            Shape::Path(path) => path,
            other => panic!("Expected Path shape, got {}", other.kind()),
        }
    }

    fn assert_points(actual: &[Point], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len());
        for (a, (x, y)) in actual.iter().zip(expected) {
            assert!((a.x - x).abs() < EPS && (a.y - y).abs() < EPS, "{a:?} != ({x}, {y})");
        }
    }

    #[test]
    fn test_rect_translate_is_baked() {
        let path = only_path(
            r#"<svg><rect x="0" y="0" width="10" height="10" transform="translate(5,5)"/></svg>"#,
        );
        let shape = Shape::Path(path);
        assert_points(&shape.vertices(), &[(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)]);
    }

    #[test]
    fn test_nested_group_transforms_compose() {
        let path = only_path(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 50 50" width="500">
                <g transform="translate(10 0)">
                    <g transform="scale(2)">
                        <line x1="1" y1="1" x2="2" y2="3"/>
                    </g>
                </g>
            </svg>"#,
        );
        assert_points(&Shape::Path(path).vertices(), &[(12.0, 2.0), (14.0, 6.0)]);
    }

    #[test]
    fn test_rotate_about_point() {
        let path = only_path(
            r#"<svg><line x1="10" y1="0" x2="20" y2="0" transform="rotate(90 10 0)"/></svg>"#,
        );
        assert_points(&Shape::Path(path).vertices(), &[(10.0, 0.0), (10.0, 10.0)]);
    }

    #[test]
    fn test_transform_list_and_skew() {
        let m = parse_transform("translate(10) scale(2, 3)");
        let p = m * Point::new(1.0, 1.0);
        assert!((p.x - 12.0).abs() < EPS && (p.y - 3.0).abs() < EPS);

        let skew = parse_transform("skewX(45)") * Point::new(0.0, 10.0);
        assert!((skew.x - 10.0).abs() < 1e-9 && (skew.y - 10.0).abs() < EPS);

        let matrix = parse_transform("matrix(1 0 0 1 7 -3)") * Point::new(0.0, 0.0);
        assert_eq!(matrix, Point::new(7.0, -3.0));
    }

    #[test]
    fn test_circle_becomes_cubics() {
        let path = only_path(r#"<svg><circle cx="10" cy="10" r="5"/></svg>"#);
        assert_eq!(path.segments.len(), 6);
        assert_eq!(path.segments[0].points, vec![Point::new(15.0, 10.0)]);
        assert!(path.segments[1..5].iter().all(|s| s.command == PathCommand::CubicBezier));
        let bounds = Shape::Path(path).bounds();
        assert!((bounds.min_x - 5.0).abs() < EPS && (bounds.max_x - 15.0).abs() < EPS);
        assert!((bounds.min_y - 5.0).abs() < EPS && (bounds.max_y - 15.0).abs() < EPS);
    }

    #[test]
    fn test_rounded_rect_and_ellipse() {
        let rect = only_path(r#"<svg><rect width="40" height="20" rx="50"/></svg>"#);
        // rx clamps to half the width, ry follows rx then clamps to half the height.
        assert_eq!(rect.segments[0].points, vec![Point::new(20.0, 0.0)]);
        assert_eq!(rect.segments.len(), 10);

        let ellipse = only_path(r#"<svg><ellipse cx="0" cy="0" rx="4" ry="2" transform="scale(2)"/></svg>"#);
        assert_eq!(ellipse.segments[0].points, vec![Point::new(8.0, 0.0)]);
        assert_eq!(ellipse.segments[2].end_point(), Some(Point::new(-8.0, 0.0)));
    }

    #[test]
    fn test_polygon_and_polyline() {
        let shapes = import(
            r#"<svg><polygon points="0,0 10,0 5,10"/><polyline points="0 0, 1 1, 2 0"/></svg>"#,
        );
        let Shape::Path(polygon) = &shapes[0] else { panic!("Expected Path shape") };
        let Shape::Path(polyline) = &shapes[1] else { panic!("Expected Path shape") };
        assert_eq!(polygon.to_path_data(), "M0 0 L10 0 L5 10 Z");
        assert_eq!(polyline.to_path_data(), "M0 0 L1 1 L2 0");
    }

    #[test]
    fn test_path_arcs_are_not_transformed() {
        let path = only_path(
            r#"<svg><path d="M0 0 A5 5 0 0 1 10 0 L20 0" transform="translate(3 4)"/></svg>"#,
        );
        assert_eq!(path.segments[0].points, vec![Point::new(3.0, 4.0)]);
        assert_eq!(path.segments[1].points, vec![Point::new(10.0, 0.0)]);
        assert_eq!(path.segments[2].points, vec![Point::new(23.0, 4.0)]);
    }

    #[test]
    fn test_hidden_elements_are_skipped() {
        let shapes = import(
            r#"<svg>
                <rect width="1" height="1" display="none"/>
                <rect width="1" height="1" style="visibility: hidden"/>
                <rect width="1" height="1" opacity="0"/>
                <g style="display:none"><rect width="1" height="1"/></g>
                <defs><rect id="r" width="1" height="1"/></defs>
                <g visibility="hidden"><rect width="1" height="1" visibility="visible"/></g>
                <rect width="2" height="2"/>
            </svg>"#,
        );
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn test_styles_and_inheritance() {
        let shapes = import(
            r##"<svg>
                <g fill="#00ff00" stroke-width="4">
                    <path d="M0 0 L1 1" fill="#ff0000" stroke="none" fill-rule="evenodd" style="fill: blue"/>
                    <path d="M0 0 L1 1" fill-opacity="0.5"/>
                </g>
                <path d="M0 0 L1 1"/>
            </svg>"##,
        );
        let Shape::Path(first) = &shapes[0] else { panic!("Expected Path shape") };
        assert_eq!(first.style.fill, SerializableColor::new(0, 0, 255, 255));
        assert!(first.style.stroke.is_transparent());
        assert_eq!(first.style.stroke_width, 4.0);
        assert_eq!(first.fill_rule, Some(FillRule::EvenOdd));

        let Shape::Path(second) = &shapes[1] else { panic!("Expected Path shape") };
        assert_eq!(second.style.fill, SerializableColor::new(0, 255, 0, 128));
        assert_eq!(second.fill_rule, None);

        assert_eq!(shapes[2].style(), &ShapeStyle::default());
    }

    #[test]
    fn test_root_paint_is_inherited() {
        let path = only_path(
            r#"<svg fill="none" stroke="red" style="stroke-width: 3"><rect width="10" height="10"/></svg>"#,
        );
        assert!(path.style.fill.is_transparent());
        assert_eq!(path.style.stroke, SerializableColor::new(255, 0, 0, 255));
        assert_eq!(path.style.stroke_width, 3.0);
    }

    #[test]
    fn test_css_color_forms() {
        let shapes = import(
            r#"<svg>
                <path d="M0 0 L1 1" fill="darkblue"/>
                <path d="M0 0 L1 1" fill="hsl(120, 100%, 50%)"/>
                <path d="M0 0 L1 1" style="fill: rgb(10 20 30 / 0.6); stroke: transparent"/>
            </svg>"#,
        );
        assert_eq!(shapes[0].style().fill, SerializableColor::new(0, 0, 0x8b, 255));
        assert_eq!(shapes[1].style().fill, SerializableColor::new(0, 255, 0, 255));
        assert_eq!(shapes[2].style().fill, SerializableColor::new(10, 20, 30, 153));
        assert!(shapes[2].style().stroke.is_transparent());
    }

    #[test]
    fn test_invalid_paint_keeps_inherited_value() {
        let path = only_path(r##"<svg fill="#00ff00"><rect width="10" height="10" fill="#é12"/></svg>"##);
        assert_eq!(path.style.fill, SerializableColor::new(0, 255, 0, 255));
    }

    #[test]
    fn test_malformed_markup() {
        assert!(matches!(
            import_svg("<svg><rect></svg>", &ImportOptions::default()),
            Err(ImportError::MalformedSvg(_))
        ));
        assert!(matches!(
            import_svg("<html><body/></html>", &ImportOptions::default()),
            Err(ImportError::MalformedSvg(_))
        ));
    }

    #[test]
    fn test_empty_import() {
        let options = ImportOptions::default();
        assert_eq!(import_svg("<svg/>", &options), Err(ImportError::EmptyImport));
        assert_eq!(
            import_svg(r#"<svg><rect width="0" height="10"/><text>hi</text></svg>"#, &options),
            Err(ImportError::EmptyImport)
        );
    }

    #[test]
    fn test_import_into_is_all_or_nothing() {
        let mut drawing = Drawing::new();
        let layer = drawing.add_layer("Imported");
        let options = ImportOptions::default();

        let before = drawing.clone();
        assert_eq!(
            import_into(&mut drawing, "missing", "<svg><rect width='1' height='1'/></svg>", &options),
            Err(ImportError::UnknownLayer("missing".to_string()))
        );
        assert!(import_into(&mut drawing, &layer, "<svg><rect", &options).is_err());
        assert_eq!(import_into(&mut drawing, &layer, "<svg/>", &options), Err(ImportError::EmptyImport));
        assert_eq!(drawing, before);

        let ids = import_into(
            &mut drawing,
            &layer,
            "<svg><rect width='1' height='1'/><circle r='2'/></svg>",
            &options,
        )
        .unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.iter().all(|id| drawing.layer(&layer).unwrap().contains(*id)));
    }

    #[test]
    fn test_default_style_option() {
        let options = ImportOptions {
            default_style: ShapeStyle::new(SerializableColor::white(), SerializableColor::black(), 1.0),
        };
        let shapes = import_svg("<svg><line x2='5' y2='5'/></svg>", &options).unwrap();
        assert_eq!(shapes[0].style(), &options.default_style);
    }
}

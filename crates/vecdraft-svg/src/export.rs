//! Drawing to SVG markup.

use crate::ExportOptions;
use kurbo::{Point, Rect};
use std::fmt::{self, Write};
use vecdraft_core::{Aabb, Drawing, SerializableColor, Shape, ShapeStyle};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serialize the visible layers of `drawing` as a standalone SVG document.
///
/// Layers are written bottom first so later groups paint on top.
pub fn export_svg(drawing: &Drawing, options: &ExportOptions) -> String {
    let mut out = String::new();
    write_svg(&mut out, drawing, options)
        .map(|()| out)
        .unwrap_or_default()
}

/// Stream the document produced by [`export_svg`] into any writer.
pub fn write_svg<W: Write>(out: &mut W, drawing: &Drawing, options: &ExportOptions) -> fmt::Result {
    let view_box = export_view_box(drawing, options);
    write!(out, "<svg xmlns=\"{SVG_NAMESPACE}\"")?;
    if let Some(artboard) = &drawing.artboard {
        write!(out, " width=\"{}\" height=\"{}\"", artboard.width, artboard.height)?;
    }
    writeln!(
        out,
        " viewBox=\"{} {} {} {}\">",
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height()
    )?;

    if let Some(title) = &options.title {
        writeln!(out, "  <title>{}</title>", escape_xml(title))?;
    }

    for layer in drawing.visible_layers_bottom_to_top() {
        writeln!(out, "  <g id=\"{}\">", escape_xml(&layer_element_id(&layer.name)))?;
        for shape in &layer.shapes {
            write_shape(out, shape)?;
        }
        writeln!(out, "  </g>")?;
    }

    writeln!(out, "</svg>")
}

/// The region an export frames: the artboard if set, otherwise the padded
/// union of every visible shape, otherwise the fallback viewport.
pub fn export_view_box(drawing: &Drawing, options: &ExportOptions) -> Rect {
    if let Some(artboard) = &drawing.artboard {
        return Rect::new(0.0, 0.0, artboard.width, artboard.height);
    }

    let bounds = drawing
        .visible_layers_bottom_to_top()
        .flat_map(|layer| layer.shapes.iter())
        .fold(Aabb::EMPTY, |acc, shape| acc.union(shape.bounds()));

    match bounds.to_rect() {
        Some(rect) => rect.inflate(options.padding, options.padding),
        None => Rect::new(
            0.0,
            0.0,
            options.fallback_viewport.width,
            options.fallback_viewport.height,
        ),
    }
}

/// One indented element line. Polygons without points are skipped.
fn write_shape<W: Write>(out: &mut W, shape: &Shape) -> fmt::Result {
    match shape {
        Shape::Rectangle(rect) => {
            write!(
                out,
                "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                rect.position.x, rect.position.y, rect.width, rect.height
            )?;
            let radius = rect.effective_corner_radius();
            if radius > 0.0 {
                write!(out, " rx=\"{radius}\" ry=\"{radius}\"")?;
            }
            write_style(out, &rect.style)?;
            write_rotation(out, rect.rotation, rect.center())?;
        }
        Shape::Ellipse(ellipse) => {
            write!(
                out,
                "    <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"",
                ellipse.center.x, ellipse.center.y, ellipse.radius_x, ellipse.radius_y
            )?;
            write_style(out, &ellipse.style)?;
            write_rotation(out, ellipse.rotation, ellipse.center)?;
        }
        Shape::Polygon(polygon) => {
            if polygon.is_empty() {
                return Ok(());
            }
            if polygon.corner_radius > 0.0 {
                write!(out, "    <path d=\"{}\"", polygon.to_path_data())?;
            } else {
                write!(out, "    <polygon points=\"")?;
                for (i, p) in polygon.points.iter().enumerate() {
                    if i > 0 {
                        write!(out, " ")?;
                    }
                    write!(out, "{},{}", p.x, p.y)?;
                }
                write!(out, "\"")?;
            }
            write_style(out, &polygon.style)?;
        }
        Shape::Path(path) => {
            write!(out, "    <path d=\"{}\"", path.to_path_data())?;
            if let Some(rule) = path.fill_rule {
                write!(out, " fill-rule=\"{}\"", rule.as_svg())?;
            }
            write_style(out, &path.style)?;
        }
    }
    writeln!(out, "/>")
}

fn write_style<W: Write>(out: &mut W, style: &ShapeStyle) -> fmt::Result {
    write_paint(out, "fill", style.fill)?;
    write_paint(out, "stroke", style.stroke)?;
    write!(out, " stroke-width=\"{}\"", style.stroke_width)
}

fn write_paint<W: Write>(out: &mut W, property: &str, color: SerializableColor) -> fmt::Result {
    if color.is_transparent() {
        return write!(out, " {property}=\"none\"");
    }
    write!(out, " {property}=\"{}\"", color.to_hex())?;
    if color.a < 255 {
        let opacity = (color.opacity() * 1000.0).round() / 1000.0;
        write!(out, " {property}-opacity=\"{opacity}\"")?;
    }
    Ok(())
}

fn write_rotation<W: Write>(out: &mut W, rotation: f64, center: Point) -> fmt::Result {
    if rotation == 0.0 {
        return Ok(());
    }
    write!(out, " transform=\"rotate({} {} {})\"", rotation, center.x, center.y)
}

/// Layer name with each whitespace run collapsed to `_`.
fn layer_element_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('_');
            }
            in_space = true;
        } else {
            id.push(c);
            in_space = false;
        }
    }
    id
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(c),
        }
    }
    s
}

//! SVG path data codec.
//!
//! Converts between the `d` attribute syntax and a list of [`PathSegment`]s
//! with absolute coordinates. Relative commands, `H`/`V` and the `S`/`T`
//! smooth shorthands are normalized away while decoding, so encoding only
//! ever emits `M`, `L`, `C`, `Q`, `A` and `Z`.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of an elliptical arc segment, kept verbatim from the source data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcParams {
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse x-axis in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Drawing command of a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    CubicBezier,
    QuadraticBezier,
    /// Elliptical arc. Its single point is the end point; the arc is opaque
    /// to transforms.
    Arc(ArcParams),
    ClosePath,
}

impl PathCommand {
    /// The absolute SVG command letter.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo => 'M',
            PathCommand::LineTo => 'L',
            PathCommand::CubicBezier => 'C',
            PathCommand::QuadraticBezier => 'Q',
            PathCommand::Arc(_) => 'A',
            PathCommand::ClosePath => 'Z',
        }
    }

    /// Number of points a well-formed segment with this command carries.
    pub fn arity(&self) -> usize {
        match self {
            PathCommand::ClosePath => 0,
            PathCommand::MoveTo | PathCommand::LineTo | PathCommand::Arc(_) => 1,
            PathCommand::QuadraticBezier => 2,
            PathCommand::CubicBezier => 3,
        }
    }
}

/// One drawing command plus its control and end points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub command: PathCommand,
    pub points: Vec<Point>,
}

impl PathSegment {
    pub fn move_to(p: Point) -> Self {
        Self { command: PathCommand::MoveTo, points: vec![p] }
    }

    pub fn line_to(p: Point) -> Self {
        Self { command: PathCommand::LineTo, points: vec![p] }
    }

    pub fn cubic_to(c1: Point, c2: Point, p: Point) -> Self {
        Self { command: PathCommand::CubicBezier, points: vec![c1, c2, p] }
    }

    pub fn quad_to(c: Point, p: Point) -> Self {
        Self { command: PathCommand::QuadraticBezier, points: vec![c, p] }
    }

    pub fn arc_to(params: ArcParams, p: Point) -> Self {
        Self { command: PathCommand::Arc(params), points: vec![p] }
    }

    pub fn close() -> Self {
        Self { command: PathCommand::ClosePath, points: Vec::new() }
    }

    /// The on-curve point this segment ends at (None for `ClosePath`).
    pub fn end_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn is_arc(&self) -> bool {
        matches!(self.command, PathCommand::Arc(_))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command.letter())?;
        if let PathCommand::Arc(arc) = self.command {
            write!(
                f,
                "{} {} {} {} {}",
                arc.rx,
                arc.ry,
                arc.x_axis_rotation,
                arc.large_arc as u8,
                arc.sweep as u8
            )?;
            for p in &self.points {
                write!(f, " {} {}", p.x, p.y)?;
            }
            return Ok(());
        }
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{} {}", p.x, p.y)?;
        }
        Ok(())
    }
}

/// Encode segments as SVG path data.
///
/// Each segment is its command letter followed by space separated coordinate
/// pairs; segments are joined by a single space.
pub fn encode(segments: &[PathSegment]) -> String {
    segments
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode SVG path data into absolute segments.
///
/// Never fails: malformed trailing arguments are dropped and unknown command
/// letters have their arguments skipped.
pub fn decode(path_data: &str) -> Vec<PathSegment> {
    let mut scanner = Scanner::new(path_data);
    let mut segments = Vec::new();
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    // Second control point of the previous cubic, control of the previous quad.
    let mut prev_cubic_ctrl: Option<Point> = None;
    let mut prev_quad_ctrl: Option<Point> = None;

    while let Some(letter) = scanner.next_command() {
        let relative = letter.is_ascii_lowercase();
        let resolve = |base: Point, x: f64, y: f64| {
            if relative { Point::new(base.x + x, base.y + y) } else { Point::new(x, y) }
        };

        match letter.to_ascii_uppercase() {
            'Z' => {
                segments.push(PathSegment::close());
                current = subpath_start;
                prev_cubic_ctrl = None;
                prev_quad_ctrl = None;
            }
            'M' => {
                let mut first = true;
                while let Some((x, y)) = scanner.pair() {
                    current = resolve(current, x, y);
                    if first {
                        // Only the first pair starts a subpath; the rest are implicit lines.
                        segments.push(PathSegment::move_to(current));
                        subpath_start = current;
                        first = false;
                    } else {
                        segments.push(PathSegment::line_to(current));
                    }
                }
                prev_cubic_ctrl = None;
                prev_quad_ctrl = None;
            }
            'L' => {
                while let Some((x, y)) = scanner.pair() {
                    current = resolve(current, x, y);
                    segments.push(PathSegment::line_to(current));
                }
                prev_cubic_ctrl = None;
                prev_quad_ctrl = None;
            }
            'H' => {
                while let Some(x) = scanner.number() {
                    let x = if relative { current.x + x } else { x };
                    current = Point::new(x, current.y);
                    segments.push(PathSegment::line_to(current));
                }
                prev_cubic_ctrl = None;
                prev_quad_ctrl = None;
            }
            'V' => {
                while let Some(y) = scanner.number() {
                    let y = if relative { current.y + y } else { y };
                    current = Point::new(current.x, y);
                    segments.push(PathSegment::line_to(current));
                }
                prev_cubic_ctrl = None;
                prev_quad_ctrl = None;
            }
            'C' => {
                while let Some([x1, y1, x2, y2, x, y]) = scanner.numbers::<6>() {
                    let c1 = resolve(current, x1, y1);
                    let c2 = resolve(current, x2, y2);
                    let end = resolve(current, x, y);
                    segments.push(PathSegment::cubic_to(c1, c2, end));
                    prev_cubic_ctrl = Some(c2);
                    prev_quad_ctrl = None;
                    current = end;
                }
            }
            'S' => {
                while let Some([x2, y2, x, y]) = scanner.numbers::<4>() {
                    let c1 = reflect(prev_cubic_ctrl, current);
                    let c2 = resolve(current, x2, y2);
                    let end = resolve(current, x, y);
                    segments.push(PathSegment::cubic_to(c1, c2, end));
                    prev_cubic_ctrl = Some(c2);
                    prev_quad_ctrl = None;
                    current = end;
                }
            }
            'Q' => {
                while let Some([x1, y1, x, y]) = scanner.numbers::<4>() {
                    let c = resolve(current, x1, y1);
                    let end = resolve(current, x, y);
                    segments.push(PathSegment::quad_to(c, end));
                    prev_quad_ctrl = Some(c);
                    prev_cubic_ctrl = None;
                    current = end;
                }
            }
            'T' => {
                while let Some((x, y)) = scanner.pair() {
                    let c = reflect(prev_quad_ctrl, current);
                    let end = resolve(current, x, y);
                    segments.push(PathSegment::quad_to(c, end));
                    prev_quad_ctrl = Some(c);
                    prev_cubic_ctrl = None;
                    current = end;
                }
            }
            'A' => {
                while let Some(arc) = scanner.arc() {
                    let (params, x, y) = arc;
                    let end = resolve(current, x, y);
                    segments.push(PathSegment::arc_to(params, end));
                    current = end;
                }
                prev_cubic_ctrl = None;
                prev_quad_ctrl = None;
            }
            _ => {
                log::trace!("skipping unknown path command '{}'", letter);
                while scanner.number().is_some() {}
            }
        }
    }

    segments
}

/// Reflect the previous control point about `current`, or `current` itself
/// when the previous segment was not of the same curve family.
fn reflect(prev: Option<Point>, current: Point) -> Point {
    match prev {
        Some(c) => Point::new(2.0 * current.x - c.x, 2.0 * current.y - c.y),
        None => current,
    }
}

/// Byte scanner over path data.
struct Scanner<'a> {
    bytes: &'a [u8],
    i: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { bytes: input.as_bytes(), i: 0 }
    }

    fn skip_separators(&mut self) {
        while self.i < self.bytes.len() {
            match self.bytes[self.i] {
                b' ' | b'\n' | b'\r' | b'\t' | b',' => self.i += 1,
                _ => break,
            }
        }
    }

    /// Advance to the next command letter, discarding stray arguments.
    fn next_command(&mut self) -> Option<char> {
        loop {
            self.skip_separators();
            let b = *self.bytes.get(self.i)?;
            if b.is_ascii_alphabetic() {
                self.i += 1;
                return Some(b as char);
            }
            if self.number().is_none() {
                self.i += 1;
            }
        }
    }

    fn number(&mut self) -> Option<f64> {
        self.skip_separators();
        let start = self.i;
        let len = self.bytes.len();
        let mut digits = false;

        if self.i < len && matches!(self.bytes[self.i], b'+' | b'-') {
            self.i += 1;
        }
        while self.i < len && self.bytes[self.i].is_ascii_digit() {
            self.i += 1;
            digits = true;
        }
        if self.i < len && self.bytes[self.i] == b'.' {
            self.i += 1;
            while self.i < len && self.bytes[self.i].is_ascii_digit() {
                self.i += 1;
                digits = true;
            }
        }
        if !digits {
            self.i = start;
            return None;
        }
        // Exponent only when digits follow, so `2e` leaves the `e` as a command.
        if self.i < len && matches!(self.bytes[self.i], b'e' | b'E') {
            let mut j = self.i + 1;
            if j < len && matches!(self.bytes[j], b'+' | b'-') {
                j += 1;
            }
            if j < len && self.bytes[j].is_ascii_digit() {
                while j < len && self.bytes[j].is_ascii_digit() {
                    j += 1;
                }
                self.i = j;
            }
        }

        let text = std::str::from_utf8(&self.bytes[start..self.i]).ok()?;
        match text.parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                self.i = start;
                None
            }
        }
    }

    fn pair(&mut self) -> Option<(f64, f64)> {
        let [x, y] = self.numbers::<2>()?;
        Some((x, y))
    }

    fn numbers<const N: usize>(&mut self) -> Option<[f64; N]> {
        let mut out = [0.0; N];
        for slot in out.iter_mut() {
            *slot = self.number()?;
        }
        Some(out)
    }

    /// Arc flags may be written without separators (`a1 1 0 01 5 5`).
    fn flag(&mut self) -> Option<bool> {
        self.skip_separators();
        match self.bytes.get(self.i) {
            Some(b'0') => {
                self.i += 1;
                Some(false)
            }
            Some(b'1') => {
                self.i += 1;
                Some(true)
            }
            _ => None,
        }
    }

    fn arc(&mut self) -> Option<(ArcParams, f64, f64)> {
        let [rx, ry, x_axis_rotation] = self.numbers::<3>()?;
        let large_arc = self.flag()?;
        let sweep = self.flag()?;
        let (x, y) = self.pair()?;
        Some((ArcParams { rx, ry, x_axis_rotation, large_arc, sweep }, x, y))
    }
}

//! Footprint primitive types for KiCad module files.
//!
//! These types represent the elements that make up a footprint:
//! text, lines, outlines, pads and 3D model references.

use std::fmt;

/// Default silkscreen line width in mm.
pub const DEFAULT_LINE_WIDTH: f64 = 0.15;

/// Default text height and width in mm.
pub const DEFAULT_TEXT_SIZE: f64 = 1.0;

/// Default text stroke thickness in mm.
pub const DEFAULT_TEXT_THICKNESS: f64 = 0.15;

/// A 2D point in mm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflects the point across the vertical line `x = axis`.
    #[must_use]
    pub fn mirror_x(self, axis: f64) -> Self {
        Self {
            x: 2.0f64.mul_add(axis, -self.x),
            y: self.y,
        }
    }
}

/// KiCad board layers used by footprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layer {
    /// Front copper.
    FrontCopper,
    /// Front silkscreen.
    #[default]
    FrontSilkscreen,
    /// Front fabrication drawing.
    FrontFab,
    /// Front courtyard.
    FrontCourtyard,
    /// All copper layers (through-hole pads).
    AllCopper,
    /// All solder mask layers.
    AllMask,
}

impl Layer {
    /// Returns the KiCad layer name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrontCopper => "F.Cu",
            Self::FrontSilkscreen => "F.SilkS",
            Self::FrontFab => "F.Fab",
            Self::FrontCourtyard => "F.CrtYd",
            Self::AllCopper => "*.Cu",
            Self::AllMask => "*.Mask",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of footprint text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Reference designator placeholder (`REF**`).
    Reference,
    /// Component value.
    Value,
    /// Free user text.
    User,
}

impl TextKind {
    /// Returns the KiCad keyword for this text kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Value => "value",
            Self::User => "user",
        }
    }
}

/// A text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Text kind.
    pub kind: TextKind,
    /// Text content.
    pub text: String,
    /// Anchor position.
    pub at: Point,
    /// Layer the text is on.
    pub layer: Layer,
    /// Font height and width in mm.
    pub size: f64,
    /// Stroke thickness in mm.
    pub thickness: f64,
}

impl Text {
    /// Creates a new text label with the default font.
    #[must_use]
    pub fn new(kind: TextKind, text: impl Into<String>, at: Point, layer: Layer) -> Self {
        Self {
            kind,
            text: text.into(),
            at,
            layer,
            size: DEFAULT_TEXT_SIZE,
            thickness: DEFAULT_TEXT_THICKNESS,
        }
    }

    /// Creates a reference designator label.
    #[must_use]
    pub fn reference(text: impl Into<String>, at: Point, layer: Layer) -> Self {
        Self::new(TextKind::Reference, text, at, layer)
    }

    /// Creates a value label.
    #[must_use]
    pub fn value(text: impl Into<String>, at: Point, layer: Layer) -> Self {
        Self::new(TextKind::Value, text, at, layer)
    }
}

/// A single line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Layer the line is on.
    pub layer: Layer,
    /// Line width in mm.
    pub width: f64,
}

impl Line {
    /// Creates a new line.
    #[must_use]
    pub const fn new(start: Point, end: Point, layer: Layer, width: f64) -> Self {
        Self {
            start,
            end,
            layer,
            width,
        }
    }
}

/// A rectangular outline drawn as four lines.
///
/// `offset` grows the rectangle outwards on every side, so the drawn corners
/// are `min - offset` and `max + offset` regardless of the order in which
/// `start` and `end` were given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectLine {
    /// First corner.
    pub start: Point,
    /// Opposite corner.
    pub end: Point,
    /// Layer the outline is on.
    pub layer: Layer,
    /// Line width in mm.
    pub width: f64,
    /// Outward offset in mm.
    pub offset: f64,
}

impl RectLine {
    /// Creates a silkscreen rectangle with default width and no offset.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            layer: Layer::FrontSilkscreen,
            width: DEFAULT_LINE_WIDTH,
            offset: 0.0,
        }
    }

    /// Sets the layer.
    #[must_use]
    pub const fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    /// Sets the line width.
    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the outward offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the drawn corners `(min, max)` after applying the offset.
    #[must_use]
    pub fn corners(&self) -> (Point, Point) {
        let min = Point::new(
            self.start.x.min(self.end.x) - self.offset,
            self.start.y.min(self.end.y) - self.offset,
        );
        let max = Point::new(
            self.start.x.max(self.end.x) + self.offset,
            self.start.y.max(self.end.y) + self.offset,
        );
        (min, max)
    }

    /// Expands the rectangle into its four sides.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        let (min, max) = self.corners();
        let corners = [
            min,
            Point::new(min.x, max.y),
            max,
            Point::new(max.x, min.y),
            min,
        ];
        corners
            .windows(2)
            .map(|w| Line::new(w[0], w[1], self.layer, self.width))
            .collect()
    }
}

/// An open polyline.
///
/// When `x_mirror` is set, the polyline is drawn reflected across the
/// vertical line at that x coordinate instead of at its own position.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonLine {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Layer the polyline is on.
    pub layer: Layer,
    /// Line width in mm.
    pub width: f64,
    /// Mirror axis.
    pub x_mirror: Option<f64>,
}

impl PolygonLine {
    /// Creates a silkscreen polyline with default width.
    #[must_use]
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
            layer: Layer::FrontSilkscreen,
            width: DEFAULT_LINE_WIDTH,
            x_mirror: None,
        }
    }

    /// Returns a copy of this polyline mirrored across `x = axis`.
    #[must_use]
    pub fn mirrored(&self, axis: f64) -> Self {
        Self {
            x_mirror: Some(axis),
            ..self.clone()
        }
    }

    /// Returns the vertices as they will be drawn.
    #[must_use]
    pub fn drawn_points(&self) -> Vec<Point> {
        match self.x_mirror {
            Some(axis) => self.points.iter().map(|p| p.mirror_x(axis)).collect(),
            None => self.points.clone(),
        }
    }

    /// Expands the polyline into its segments.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        self.drawn_points()
            .windows(2)
            .map(|w| Line::new(w[0], w[1], self.layer, self.width))
            .collect()
    }
}

/// Pad mounting type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadKind {
    /// Plated through-hole pad.
    #[default]
    ThroughHole,
    /// Surface mount pad.
    Smd,
}

impl PadKind {
    /// Returns the KiCad keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThroughHole => "thru_hole",
            Self::Smd => "smd",
        }
    }
}

/// Pad copper shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadShape {
    /// Circular pad.
    #[default]
    Circle,
    /// Rectangular pad.
    Rect,
    /// Oval pad.
    Oval,
}

impl PadShape {
    /// Returns the KiCad keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Oval => "oval",
        }
    }
}

/// A single pad.
#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    /// Pad number (e.g. "1").
    pub number: String,
    /// Mounting type.
    pub kind: PadKind,
    /// Copper shape.
    pub shape: PadShape,
    /// Pad centre.
    pub at: Point,
    /// Pad width in mm.
    pub width: f64,
    /// Pad height in mm.
    pub height: f64,
    /// Drill diameter in mm. None for SMD pads.
    pub drill: Option<f64>,
    /// Layers the pad is on.
    pub layers: Vec<Layer>,
}

impl Pad {
    /// Creates a round through-hole pad on all copper and mask layers.
    #[must_use]
    pub fn through_hole(number: impl Into<String>, at: Point, diameter: f64, drill: f64) -> Self {
        Self {
            number: number.into(),
            kind: PadKind::ThroughHole,
            shape: PadShape::Circle,
            at,
            width: diameter,
            height: diameter,
            drill: Some(drill),
            layers: vec![Layer::AllCopper, Layer::AllMask],
        }
    }
}

/// A 3D model reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Model3D {
    /// Model file path, relative to the KiCad 3D model search path.
    pub path: String,
    /// Offset (x, y, z).
    pub at: [f64; 3],
    /// Scale (x, y, z).
    pub scale: [f64; 3],
    /// Rotation in degrees (x, y, z).
    pub rotate: [f64; 3],
}

impl Model3D {
    /// Creates a model reference with identity placement.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            at: [0.0; 3],
            scale: [1.0; 3],
            rotate: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mirror_point() {
        let p = Point::new(-1.05, 0.5).mirror_x(0.75);
        assert!(approx_eq(p.x, 2.55));
        assert!(approx_eq(p.y, 0.5));
    }

    #[test]
    fn rect_line_offset_grows_outwards() {
        let rect = RectLine::new(Point::new(3.0, 2.2), Point::new(-1.5, -1.3)).with_offset(0.5);
        let (min, max) = rect.corners();
        assert!(approx_eq(min.x, -2.0));
        assert!(approx_eq(min.y, -1.8));
        assert!(approx_eq(max.x, 3.5));
        assert!(approx_eq(max.y, 2.7));
    }

    #[test]
    fn rect_line_is_closed() {
        let lines = RectLine::new(Point::new(0.0, 0.0), Point::new(1.0, 2.0)).lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].start, lines[3].end);
        for pair in lines.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn polygon_line_segments() {
        let poly = PolygonLine::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        assert_eq!(poly.lines().len(), 2);
    }

    #[test]
    fn mirrored_polygon_line_reflects_points() {
        let poly = PolygonLine::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let mirrored = poly.mirrored(2.0);
        let points = mirrored.drawn_points();
        assert!(approx_eq(points[0].x, 4.0));
        assert!(approx_eq(points[1].x, 3.0));
        assert!(approx_eq(points[1].y, 1.0));
        // Source points are kept as given
        assert_eq!(mirrored.points, poly.points);
    }

    #[test]
    fn through_hole_pad_defaults() {
        let pad = Pad::through_hole("1", Point::default(), 1.1, 0.7);
        assert_eq!(pad.kind, PadKind::ThroughHole);
        assert_eq!(pad.shape, PadShape::Circle);
        assert_eq!(pad.drill, Some(0.7));
        assert_eq!(pad.layers, vec![Layer::AllCopper, Layer::AllMask]);
    }

    #[test]
    fn layer_names() {
        assert_eq!(Layer::FrontCourtyard.to_string(), "F.CrtYd");
        assert_eq!(Layer::AllMask.as_str(), "*.Mask");
        assert_eq!(Layer::FrontCopper.as_str(), "F.Cu");
    }

    #[test]
    fn pad_keywords() {
        assert_eq!(PadKind::ThroughHole.as_str(), "thru_hole");
        assert_eq!(PadKind::Smd.as_str(), "smd");
        assert_eq!(PadShape::Circle.as_str(), "circle");
        assert_eq!(PadShape::Rect.as_str(), "rect");
        assert_eq!(PadShape::Oval.as_str(), "oval");
    }
}

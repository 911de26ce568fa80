//! Body geometry of the ZH top entry housing.
//!
//! All coordinates are in mm with pin 1 at the origin, X increasing towards
//! the last pin and Y increasing towards the latch side (KiCad convention).
//!
//! ```text
//!  (xo1,yo1) +--------------------------------+ (xo2,yo1)
//!            |   +-----------+-----------+    |  <- yo1 + wall
//!            |   |         x_mid         |    |
//!            +---+                       +----+  <- yo2 - wall - 2.15
//!                  o    o    o    o    o
//!            +---+                       +----+  <- yo2 - wall - 1
//!            |   +-----------+-----------+    |  <- yo2 - wall
//!  (xo1,yo2) +--------------------------------+ (xo2,yo2)
//! ```

use crate::kicad::{Layer, Point, PolygonLine, RectLine};

/// Body extends this far beyond the outer pins, in total (mm).
pub const BODY_MARGIN: f64 = 3.0;

/// Body thickness in Y (mm).
pub const BODY_THICKNESS: f64 = 3.5;

/// Left body edge relative to pin 1 (mm).
pub const BODY_LEFT: f64 = -1.5;

/// Top body edge relative to pin 1 (mm).
pub const BODY_TOP: f64 = -1.3;

/// Courtyard clearance around the body (mm).
pub const COURTYARD_OFFSET: f64 = 0.5;

/// Courtyard line width (mm).
pub const COURTYARD_LINE_WIDTH: f64 = 0.05;

/// Silkscreen clearance around the body (mm).
pub const OUTLINE_OFFSET: f64 = 0.15;

/// Wall thickness drawn inside the silkscreen outline (mm).
pub const WALL: f64 = 0.6;

/// Depth of the upper side notch below the inner bottom wall (mm).
pub const UPPER_NOTCH_DEPTH: f64 = 2.15;

/// Depth of the lower side notch below the inner bottom wall (mm).
pub const LOWER_NOTCH_DEPTH: f64 = 1.0;

/// Reference designator Y position (mm).
pub const REFERENCE_Y: f64 = -2.7;

/// Value label Y position (mm).
pub const VALUE_Y: f64 = 3.7;

/// Geometry derived from a pin count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZhDimensions {
    /// Number of pins.
    pub pins: u32,
    /// Distance between the first and last pin (`A`).
    pub pin_span: f64,
    /// Overall body width (`B`).
    pub width: f64,
    /// Body thickness (`T`).
    pub thickness: f64,
    /// Left body edge.
    pub x1: f64,
    /// Top body edge.
    pub y1: f64,
    /// Right body edge.
    pub x2: f64,
    /// Bottom body edge.
    pub y2: f64,
    /// Horizontal centre of the body.
    pub x_mid: f64,
}

impl ZhDimensions {
    /// Computes the body geometry for `pins` pins at `pitch` spacing.
    #[must_use]
    pub fn new(pins: u32, pitch: f64) -> Self {
        let pin_span = f64::from(pins.saturating_sub(1)) * pitch;
        let width = pin_span + BODY_MARGIN;

        let x1 = BODY_LEFT;
        let x2 = x1 + width;
        let y1 = BODY_TOP;
        let y2 = y1 + BODY_THICKNESS;

        Self {
            pins,
            pin_span,
            width,
            thickness: BODY_THICKNESS,
            x1,
            y1,
            x2,
            y2,
            x_mid: (x1 + x2) / 2.0,
        }
    }

    /// Body corner closest to the origin quadrant.
    #[must_use]
    pub const fn body_min(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Opposite body corner.
    #[must_use]
    pub const fn body_max(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Silkscreen outline corners `(xo1, yo1)` and `(xo2, yo2)`.
    #[must_use]
    pub fn outline_corners(&self) -> (Point, Point) {
        (
            Point::new(self.x1 - OUTLINE_OFFSET, self.y1 - OUTLINE_OFFSET),
            Point::new(self.x2 + OUTLINE_OFFSET, self.y2 + OUTLINE_OFFSET),
        )
    }

    /// Courtyard rectangle.
    #[must_use]
    pub const fn courtyard(&self) -> RectLine {
        RectLine::new(self.body_min(), self.body_max())
            .with_layer(Layer::FrontCourtyard)
            .with_width(COURTYARD_LINE_WIDTH)
            .with_offset(COURTYARD_OFFSET)
    }

    /// Silkscreen outline rectangle.
    #[must_use]
    pub fn outline(&self) -> RectLine {
        let (min, max) = self.outline_corners();
        RectLine::new(min, max)
    }

    /// Left half of the upper wall, from the side notch to the centre line.
    #[must_use]
    pub fn upper_wall(&self) -> PolygonLine {
        let (min, max) = self.outline_corners();
        let notch_y = max.y - WALL - UPPER_NOTCH_DEPTH;
        PolygonLine::new(vec![
            Point::new(min.x, notch_y),
            Point::new(min.x + WALL, notch_y),
            Point::new(min.x + WALL, min.y + WALL),
            Point::new(self.x_mid, min.y + WALL),
        ])
    }

    /// Left half of the lower wall, from the side notch to the centre line.
    #[must_use]
    pub fn lower_wall(&self) -> PolygonLine {
        let (min, max) = self.outline_corners();
        let notch_y = max.y - WALL - LOWER_NOTCH_DEPTH;
        PolygonLine::new(vec![
            Point::new(min.x, notch_y),
            Point::new(min.x + WALL, notch_y),
            Point::new(min.x + WALL, max.y - WALL),
            Point::new(self.x_mid, max.y - WALL),
        ])
    }

    /// Reference designator position.
    #[must_use]
    pub const fn reference_position(&self) -> Point {
        Point::new(self.x_mid, REFERENCE_Y)
    }

    /// Value label position.
    #[must_use]
    pub const fn value_position(&self) -> Point {
        Point::new(self.x_mid, VALUE_Y)
    }
}

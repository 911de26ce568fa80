//! Linear pad arrays.
//!
//! A [`PadArray`] places `pincount` copies of a template pad along a line,
//! numbering them sequentially.

use super::error::{KicadError, KicadResult};
use super::primitives::{Pad, Point};

/// A row of equally spaced, sequentially numbered pads.
#[derive(Debug, Clone, PartialEq)]
pub struct PadArray {
    /// Number of pads.
    pub pincount: u32,
    /// Spacing between pad centres along X (mm).
    pub x_spacing: f64,
    /// Spacing between pad centres along Y (mm).
    pub y_spacing: f64,
    /// Centre of the first pad.
    pub start: Point,
    /// Number given to the first pad.
    pub initial: u32,
    /// Pad shape, size, drill and layers shared by every pad.
    pub template: Pad,
}

impl PadArray {
    /// Creates a horizontal array starting at the origin, numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns an error if `pincount` is zero.
    pub fn new(pincount: u32, x_spacing: f64, template: Pad) -> KicadResult<Self> {
        if pincount == 0 {
            return Err(KicadError::invalid_parameter(
                "pincount",
                "a pad array needs at least one pad",
            ));
        }
        Ok(Self {
            pincount,
            x_spacing,
            y_spacing: 0.0,
            start: Point::default(),
            initial: 1,
            template,
        })
    }

    /// Sets the position of the first pad.
    #[must_use]
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    /// Sets the number of the first pad.
    ///
    /// # Errors
    ///
    /// Returns an error if the last pad number would not fit in a `u32`.
    pub fn with_initial(mut self, initial: u32) -> KicadResult<Self> {
        if initial.checked_add(self.pincount.saturating_sub(1)).is_none() {
            return Err(KicadError::invalid_parameter(
                "initial",
                format!(
                    "numbering {} pads from {initial} overflows the pad number range",
                    self.pincount
                ),
            ));
        }
        self.initial = initial;
        Ok(self)
    }

    /// Sets the spacing along Y.
    #[must_use]
    pub fn with_y_spacing(mut self, y_spacing: f64) -> Self {
        self.y_spacing = y_spacing;
        self
    }

    /// Generates the individual pads.
    #[must_use]
    pub fn pads(&self) -> Vec<Pad> {
        (0..self.pincount)
            .map(|i| {
                let step = f64::from(i);
                let mut pad = self.template.clone();
                pad.number = self.initial.saturating_add(i).to_string();
                pad.at = Point::new(
                    self.x_spacing.mul_add(step, self.start.x),
                    self.y_spacing.mul_add(step, self.start.y),
                );
                pad
            })
            .collect()
    }
}

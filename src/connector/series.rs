//! Connector series definitions.
//!
//! A series fixes the pitch, the supported pin counts and the naming
//! templates. Everything else is derived from the pin count.

use std::ops::Range;

/// Constants describing one connector series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesConfig {
    /// Centre-to-centre pin spacing (mm).
    pub pitch: f64,

    /// Generated pin counts (end exclusive).
    pub pin_counts: Range<u32>,

    /// Manufacturer part number template, e.g. `B{n:02}B-ZR`.
    pub part: &'static str,

    /// Footprint name prefix.
    pub prefix: &'static str,

    /// Footprint name suffix template, e.g. `_{n:02}x{p:.2f}mm_Straight`.
    pub suffix: &'static str,

    /// Description template. `{part}` expands to the part number.
    pub description: &'static str,

    /// Search tags.
    pub tags: &'static str,

    /// Copper pad diameter (mm).
    pub pad_size: f64,

    /// Drill diameter (mm).
    pub drill: f64,

    /// Default 3D model directory.
    pub model_dir: &'static str,
}

impl SeriesConfig {
    /// Smallest generated pin count.
    #[must_use]
    pub const fn min_pins(&self) -> u32 {
        self.pin_counts.start
    }

    /// Largest generated pin count.
    #[must_use]
    pub const fn max_pins(&self) -> u32 {
        self.pin_counts.end - 1
    }

    /// Returns `true` if `pins` is a generated pin count.
    #[must_use]
    pub fn supports(&self, pins: u32) -> bool {
        self.pin_counts.contains(&pins)
    }
}

/// JST ZH series, top entry, through hole.
///
/// Datasheet: <http://www.jst-mfg.com/product/pdf/eng/eZH.pdf>
pub const JST_ZH: SeriesConfig = SeriesConfig {
    pitch: 1.50,
    pin_counts: 2..14,
    part: "B{n:02}B-ZR",
    prefix: "JST_ZH_",
    suffix: "_{n:02}x{p:.2f}mm_Straight",
    description: "JST ZH series connector, {part}, top entry type, through hole",
    tags: "connector jst zh tht top vertical 1.50mm",
    pad_size: 1.1,
    drill: 0.7,
    model_dir: "Connectors_JST.3dshapes",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zh_pin_range() {
        assert_eq!(JST_ZH.min_pins(), 2);
        assert_eq!(JST_ZH.max_pins(), 13);
        assert!(JST_ZH.supports(2));
        assert!(JST_ZH.supports(13));
        assert!(!JST_ZH.supports(1));
        assert!(!JST_ZH.supports(14));
    }

    #[test]
    fn zh_pad_fits_inside_pitch() {
        assert!(JST_ZH.pad_size < JST_ZH.pitch);
        assert!(JST_ZH.drill < JST_ZH.pad_size);
    }
}

//! Footprint construction for top entry through-hole connectors.

use crate::connector::dimensions::ZhDimensions;
use crate::connector::naming;
use crate::connector::series::SeriesConfig;
use crate::error::{GeneratorError, GeneratorResult};
use crate::kicad::{Footprint, Layer, Model3D, Pad, PadArray, Point, Text};

/// Builds complete footprints for one series.
#[derive(Debug, Clone)]
pub struct TopEntryCalculator<'a> {
    series: &'a SeriesConfig,
    model_dir: String,
}

impl<'a> TopEntryCalculator<'a> {
    /// Creates a calculator using the series' default 3D model directory.
    #[must_use]
    pub fn new(series: &'a SeriesConfig) -> Self {
        Self {
            series,
            model_dir: series.model_dir.to_string(),
        }
    }

    /// Overrides the 3D model directory.
    #[must_use]
    pub fn with_model_dir(mut self, model_dir: impl Into<String>) -> Self {
        self.model_dir = model_dir.into();
        self
    }

    /// Returns the series this calculator builds.
    #[must_use]
    pub const fn series(&self) -> &SeriesConfig {
        self.series
    }

    /// Computes the body geometry for `pins`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::PinCountOutOfRange`] if the series does not
    /// cover `pins`.
    pub fn dimensions(&self, pins: u32) -> GeneratorResult<ZhDimensions> {
        if !self.series.supports(pins) {
            return Err(GeneratorError::PinCountOutOfRange {
                pins,
                min: self.series.min_pins(),
                max: self.series.max_pins(),
            });
        }
        Ok(ZhDimensions::new(pins, self.series.pitch))
    }

    /// Builds the footprint for `pins`.
    ///
    /// # Errors
    ///
    /// Returns an error if `pins` is out of range or a naming template is
    /// malformed.
    pub fn calculate(&self, pins: u32) -> GeneratorResult<Footprint> {
        let dims = self.dimensions(pins)?;
        let name = naming::footprint_name(self.series, pins)?;

        let mut footprint = Footprint::new(name.as_str());
        footprint.set_description(naming::description(self.series, pins)?);
        footprint.set_tags(self.series.tags);

        footprint.append(Text::reference(
            "REF**",
            dims.reference_position(),
            Layer::FrontSilkscreen,
        ));
        footprint.append(Text::value(
            name.as_str(),
            dims.value_position(),
            Layer::FrontFab,
        ));

        let template = Pad::through_hole(
            "",
            Point::default(),
            self.series.pad_size,
            self.series.drill,
        );
        footprint.append(PadArray::new(pins, self.series.pitch, template)?);

        footprint.append(dims.courtyard());
        footprint.append(dims.outline());

        for wall in [dims.upper_wall(), dims.lower_wall()] {
            let mirrored = wall.mirrored(dims.x_mid);
            footprint.append(wall);
            footprint.append(mirrored);
        }

        footprint.append(Model3D::new(format!("{}/{name}.wrl", self.model_dir)));

        tracing::debug!(
            footprint = %footprint.name,
            pins,
            width = dims.width,
            "Calculated footprint"
        );

        Ok(footprint)
    }
}

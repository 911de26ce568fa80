//! KiCad footprint model and `.kicad_mod` file output.
//!
//! A [`Footprint`] is an ordered list of items (text, outlines, pads, 3D
//! models). The [`writer`] module serializes it to KiCad's S-expression
//! module format:
//!
//! ```text
//! (module NAME (layer F.Cu) (tedit 0)
//!   (descr "...")
//!   (tags "...")
//!   (fp_text reference REF** (at X Y) (layer F.SilkS) ...)
//!   (fp_line (start X Y) (end X Y) (layer F.SilkS) (width 0.15))
//!   (pad 1 thru_hole circle (at X Y) (size D D) (drill D) (layers *.Cu *.Mask))
//!   (model PATH ...)
//! )
//! ```

pub mod error;
pub mod pad_array;
pub mod primitives;
pub mod writer;

pub use error::{KicadError, KicadResult};
pub use pad_array::PadArray;
pub use primitives::{
    Layer, Line, Model3D, Pad, PadKind, PadShape, Point, PolygonLine, RectLine, Text, TextKind,
};
pub use writer::{FootprintWriter, KicadFileHandler};

/// An element that can be appended to a footprint.
#[derive(Debug, Clone, PartialEq)]
pub enum FootprintItem {
    /// Text label.
    Text(Text),
    /// Single line.
    Line(Line),
    /// Rectangular outline.
    RectLine(RectLine),
    /// Open polyline.
    PolygonLine(PolygonLine),
    /// Single pad.
    Pad(Pad),
    /// Row of pads.
    PadArray(PadArray),
    /// 3D model reference.
    Model(Model3D),
}

macro_rules! impl_from_item {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for FootprintItem {
                fn from(item: $ty) -> Self {
                    Self::$variant(item)
                }
            }
        )*
    };
}

impl_from_item! {
    Text => Text,
    Line => Line,
    RectLine => RectLine,
    PolygonLine => PolygonLine,
    Pad => Pad,
    PadArray => PadArray,
    Model3D => Model,
}

/// A complete footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    /// Footprint name (e.g., "JST_ZH_B02B-ZR_02x1.50mm_Straight").
    pub name: String,

    /// Description of the footprint.
    pub description: String,

    /// Space separated search tags.
    pub tags: String,

    /// Items in insertion order.
    pub items: Vec<FootprintItem>,
}

impl Footprint {
    /// Creates a new empty footprint with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tags: String::new(),
            items: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets the tags.
    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
    }

    /// Appends an item.
    pub fn append(&mut self, item: impl Into<FootprintItem>) {
        self.items.push(item.into());
    }

    /// Returns the text labels in insertion order.
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.items.iter().filter_map(|item| match item {
            FootprintItem::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Returns every drawn line segment, with outlines and polylines expanded.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        let mut lines = Vec::new();
        for item in &self.items {
            match item {
                FootprintItem::Line(line) => lines.push(*line),
                FootprintItem::RectLine(rect) => lines.extend(rect.lines()),
                FootprintItem::PolygonLine(poly) => lines.extend(poly.lines()),
                _ => {}
            }
        }
        lines
    }

    /// Returns every pad, with pad arrays expanded.
    #[must_use]
    pub fn pads(&self) -> Vec<Pad> {
        let mut pads = Vec::new();
        for item in &self.items {
            match item {
                FootprintItem::Pad(pad) => pads.push(pad.clone()),
                FootprintItem::PadArray(array) => pads.extend(array.pads()),
                _ => {}
            }
        }
        pads
    }

    /// Returns the 3D model references.
    pub fn models(&self) -> impl Iterator<Item = &Model3D> {
        self.items.iter().filter_map(|item| match item {
            FootprintItem::Model(model) => Some(model),
            _ => None,
        })
    }
}

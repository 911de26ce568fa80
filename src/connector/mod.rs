//! Connector footprint calculations.
//!
//! Turns a pin count into a complete [`Footprint`](crate::kicad::Footprint):
//!
//! - [`series`] - series constants (pitch, pin range, naming templates)
//! - [`dimensions`] - body, courtyard and silkscreen geometry
//! - [`naming`] - footprint name, description and file name
//! - [`top_entry`] - assembles the footprint
//!
//! # Example
//!
//! ```
//! use jst_zh_footprints::connector::{series::JST_ZH, TopEntryCalculator};
//!
//! let calc = TopEntryCalculator::new(&JST_ZH);
//! let footprint = calc.calculate(2).unwrap();
//!
//! assert_eq!(footprint.name, "JST_ZH_B02B-ZR_02x1.50mm_Straight");
//! assert_eq!(footprint.pads().len(), 2);
//! ```

pub mod dimensions;
pub mod naming;
pub mod series;
pub mod top_entry;

pub use dimensions::ZhDimensions;
pub use series::{SeriesConfig, JST_ZH};
pub use top_entry::TopEntryCalculator;

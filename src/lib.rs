//! jst-zh-footprints: KiCad footprint generator for JST ZH connectors
//!
//! Generates one `.kicad_mod` footprint per pin count for the JST ZH series
//! (1.50mm pitch, top entry, through hole), from 2 to 13 pins.
//!
//! # Architecture
//!
//! - **Calculation**: body, courtyard and silkscreen geometry derived from the
//!   pin count alone
//! - **Footprint model**: text, outlines, pad arrays and 3D model references
//! - **Output**: KiCad S-expression module files, byte-identical across runs
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`connector`] — Connector series and footprint calculation
//! - [`error`] — Error types
//! - [`generator`] — Batch generation over the pin range
//! - [`kicad`] — Footprint model and `.kicad_mod` writer

pub mod config;
pub mod connector;
pub mod error;
pub mod generator;
pub mod kicad;

//! Footprint naming templates.
//!
//! Templates are plain text with `{...}` placeholders:
//!
//! - `{n}` / `{n:02}` - pin count, optionally zero padded to a width
//! - `{p}` / `{p:.2f}` - pitch in mm, optionally with fixed decimals
//! - `{part}` - the expanded part number (description templates only)
//!
//! # Examples
//!
//! ```
//! use jst_zh_footprints::connector::{naming, series::JST_ZH};
//!
//! let name = naming::footprint_name(&JST_ZH, 2).unwrap();
//! assert_eq!(name, "JST_ZH_B02B-ZR_02x1.50mm_Straight");
//! ```

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::connector::series::SeriesConfig;
use crate::error::{GeneratorError, GeneratorResult};

/// File extension for KiCad footprint files.
pub const FOOTPRINT_EXTENSION: &str = "kicad_mod";

/// Values available to a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    /// Pin count.
    pub pins: u32,
    /// Pitch in mm.
    pub pitch: f64,
    /// Expanded part number, if already known.
    pub part: Option<&'a str>,
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([a-z]+)(?::([^}]*))?\}").expect("placeholder regex is valid"))
}

/// Expands all placeholders in `template`.
///
/// # Errors
///
/// Returns [`GeneratorError::Template`] for unknown placeholders or
/// unsupported format specifiers.
pub fn expand(template: &str, vars: &TemplateVars<'_>) -> GeneratorResult<String> {
    let mut failure = None;

    let expanded = placeholder_regex().replace_all(template, |caps: &Captures<'_>| {
        let key = &caps[1];
        let format_spec = caps.get(2).map_or("", |m| m.as_str());
        match expand_one(key, format_spec, vars) {
            Ok(value) => value,
            Err(message) => {
                if failure.is_none() {
                    failure = Some(message);
                }
                String::new()
            }
        }
    });

    match failure {
        Some(message) => Err(GeneratorError::Template {
            template: template.to_string(),
            message,
        }),
        None => Ok(expanded.into_owned()),
    }
}

fn expand_one(key: &str, format_spec: &str, vars: &TemplateVars<'_>) -> Result<String, String> {
    match key {
        "n" => {
            if format_spec.is_empty() {
                return Ok(vars.pins.to_string());
            }
            let width: usize = format_spec
                .strip_prefix('0')
                .unwrap_or(format_spec)
                .parse()
                .map_err(|_| format!("unsupported format '{format_spec}' for {{n}}"))?;
            if format_spec.starts_with('0') {
                Ok(format!("{:0width$}", vars.pins))
            } else {
                Ok(format!("{:width$}", vars.pins))
            }
        }
        "p" => {
            if format_spec.is_empty() {
                return Ok(vars.pitch.to_string());
            }
            let decimals: usize = format_spec
                .strip_prefix('.')
                .and_then(|s| s.strip_suffix('f'))
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| format!("unsupported format '{format_spec}' for {{p}}"))?;
            Ok(format!("{:.decimals$}", vars.pitch))
        }
        "part" => vars
            .part
            .map(str::to_string)
            .ok_or_else(|| "{part} is not available in this template".to_string()),
        other => Err(format!("unknown placeholder '{{{other}}}'")),
    }
}

/// Returns the manufacturer part number, e.g. `B02B-ZR`.
///
/// # Errors
///
/// Returns an error if the part template is malformed.
pub fn part_number(series: &SeriesConfig, pins: u32) -> GeneratorResult<String> {
    expand(
        series.part,
        &TemplateVars {
            pins,
            pitch: series.pitch,
            part: None,
        },
    )
}

/// Returns the footprint name, e.g. `JST_ZH_B02B-ZR_02x1.50mm_Straight`.
///
/// # Errors
///
/// Returns an error if a template is malformed.
pub fn footprint_name(series: &SeriesConfig, pins: u32) -> GeneratorResult<String> {
    let part = part_number(series, pins)?;
    let suffix = expand(
        series.suffix,
        &TemplateVars {
            pins,
            pitch: series.pitch,
            part: Some(&part),
        },
    )?;
    Ok(format!("{}{part}{suffix}", series.prefix))
}

/// Returns the human readable description.
///
/// # Errors
///
/// Returns an error if a template is malformed.
pub fn description(series: &SeriesConfig, pins: u32) -> GeneratorResult<String> {
    let part = part_number(series, pins)?;
    expand(
        series.description,
        &TemplateVars {
            pins,
            pitch: series.pitch,
            part: Some(&part),
        },
    )
}

/// Returns the output file name for a footprint name.
#[must_use]
pub fn file_name(footprint_name: &str) -> String {
    format!("{footprint_name}.{FOOTPRINT_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::series::JST_ZH;

    fn vars(pins: u32) -> TemplateVars<'static> {
        TemplateVars {
            pins,
            pitch: 1.5,
            part: None,
        }
    }

    #[test]
    fn expand_zero_padded_pins() {
        assert_eq!(expand("B{n:02}B-ZR", &vars(2)).unwrap(), "B02B-ZR");
        assert_eq!(expand("B{n:02}B-ZR", &vars(13)).unwrap(), "B13B-ZR");
        assert_eq!(expand("{n}", &vars(7)).unwrap(), "7");
    }

    #[test]
    fn expand_pitch_decimals() {
        assert_eq!(expand("{p:.2f}mm", &vars(2)).unwrap(), "1.50mm");
        assert_eq!(expand("{p}", &vars(2)).unwrap(), "1.5");
    }

    #[test]
    fn reject_unknown_placeholder() {
        let err = expand("{q}", &vars(2)).unwrap_err();
        assert!(err.to_string().contains("unknown placeholder"));
    }

    #[test]
    fn reject_bad_spec() {
        assert!(expand("{p:x}", &vars(2)).is_err());
        assert!(expand("{n:.2f}", &vars(2)).is_err());
    }

    #[test]
    fn reject_part_without_value() {
        assert!(expand("{part}", &vars(2)).is_err());
    }

    #[test]
    fn zh_names() {
        assert_eq!(part_number(&JST_ZH, 2).unwrap(), "B02B-ZR");
        assert_eq!(
            footprint_name(&JST_ZH, 2).unwrap(),
            "JST_ZH_B02B-ZR_02x1.50mm_Straight"
        );
        assert_eq!(
            footprint_name(&JST_ZH, 13).unwrap(),
            "JST_ZH_B13B-ZR_13x1.50mm_Straight"
        );
    }

    #[test]
    fn zh_description() {
        assert_eq!(
            description(&JST_ZH, 5).unwrap(),
            "JST ZH series connector, B05B-ZR, top entry type, through hole"
        );
    }

    #[test]
    fn zh_file_name() {
        let name = footprint_name(&JST_ZH, 2).unwrap();
        assert_eq!(
            file_name(&name),
            "JST_ZH_B02B-ZR_02x1.50mm_Straight.kicad_mod"
        );
    }
}

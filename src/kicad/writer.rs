//! S-expression writer for `.kicad_mod` files.
//!
//! Items are emitted grouped by kind: texts, then graphic lines, then pads,
//! then 3D models. Within a group, insertion order is preserved. The edit
//! timestamp is fixed at zero so identical footprints always serialize to
//! identical bytes.

use std::fmt::Write;
use std::path::Path;

use super::error::{KicadError, KicadResult};
use super::primitives::{Layer, Line, Model3D, Pad, Point, Text};
use super::Footprint;

/// Destination for generated footprints.
pub trait FootprintWriter {
    /// Writes `footprint` to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the footprint cannot be stored.
    fn write(&mut self, footprint: &Footprint, path: &Path) -> KicadResult<()>;
}

/// Writes footprints to disk in KiCad module format.
#[derive(Debug, Default, Clone, Copy)]
pub struct KicadFileHandler;

impl KicadFileHandler {
    /// Creates a new file handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Serializes a footprint to a `.kicad_mod` string.
    #[must_use]
    pub fn serialize(footprint: &Footprint) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "(module {} (layer {}) (tedit 0)",
            quote(&footprint.name),
            Layer::FrontCopper
        );
        if !footprint.description.is_empty() {
            let _ = writeln!(out, "  (descr {})", quote_always(&footprint.description));
        }
        if !footprint.tags.is_empty() {
            let _ = writeln!(out, "  (tags {})", quote_always(&footprint.tags));
        }

        for text in footprint.texts() {
            write_text(&mut out, text);
        }
        for line in footprint.lines() {
            write_line(&mut out, &line);
        }
        for pad in footprint.pads() {
            write_pad(&mut out, &pad);
        }
        for model in footprint.models() {
            write_model(&mut out, model);
        }

        out.push_str(")\n");
        out
    }
}

impl FootprintWriter for KicadFileHandler {
    fn write(&mut self, footprint: &Footprint, path: &Path) -> KicadResult<()> {
        let contents = Self::serialize(footprint);
        std::fs::write(path, contents).map_err(|e| KicadError::file_write(path, e))?;

        tracing::debug!(
            footprint = %footprint.name,
            path = %path.display(),
            "Wrote kicad_mod file"
        );
        Ok(())
    }
}

fn write_text(out: &mut String, text: &Text) {
    let _ = writeln!(
        out,
        "  (fp_text {} {} (at {}) (layer {})",
        text.kind.as_str(),
        quote(&text.text),
        format_point(text.at),
        text.layer
    );
    let _ = writeln!(
        out,
        "    (effects (font (size {size} {size}) (thickness {})))",
        format_number(text.thickness),
        size = format_number(text.size)
    );
    out.push_str("  )\n");
}

fn write_line(out: &mut String, line: &Line) {
    let _ = writeln!(
        out,
        "  (fp_line (start {}) (end {}) (layer {}) (width {}))",
        format_point(line.start),
        format_point(line.end),
        line.layer,
        format_number(line.width)
    );
}

fn write_pad(out: &mut String, pad: &Pad) {
    let _ = write!(
        out,
        "  (pad {} {} {} (at {}) (size {} {})",
        quote(&pad.number),
        pad.kind.as_str(),
        pad.shape.as_str(),
        format_point(pad.at),
        format_number(pad.width),
        format_number(pad.height)
    );
    if let Some(drill) = pad.drill {
        let _ = write!(out, " (drill {})", format_number(drill));
    }
    let layers: Vec<&str> = pad.layers.iter().map(|l| l.as_str()).collect();
    let _ = writeln!(out, " (layers {}))", layers.join(" "));
}

fn write_model(out: &mut String, model: &Model3D) {
    let _ = writeln!(out, "  (model {}", quote(&model.path));
    let _ = writeln!(out, "    (at (xyz {}))", format_xyz(model.at));
    let _ = writeln!(out, "    (scale (xyz {}))", format_xyz(model.scale));
    let _ = writeln!(out, "    (rotate (xyz {}))", format_xyz(model.rotate));
    out.push_str("  )\n");
}

fn format_point(p: Point) -> String {
    format!("{} {}", format_number(p.x), format_number(p.y))
}

fn format_xyz(v: [f64; 3]) -> String {
    format!(
        "{} {} {}",
        format_number(v[0]),
        format_number(v[1]),
        format_number(v[2])
    )
}

/// Formats a coordinate with at most six decimals and no trailing zeros.
///
/// Accumulated floating point error (e.g. `-1.4500000000000002`) is rounded
/// away, and negative zero is printed as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let mut s = format!("{value:.6}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Quotes an atom only when KiCad requires it.
fn quote(atom: &str) -> String {
    let needs_quotes = atom.is_empty()
        || atom
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '"' | '\\'));
    if needs_quotes {
        quote_always(atom)
    } else {
        atom.to_string()
    }
}

fn quote_always(atom: &str) -> String {
    let escaped = atom.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kicad::{PadArray, PadKind, PadShape, PolygonLine, RectLine};

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(0.75), "0.75");
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-1.3 - 0.15), "-1.45");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.000_000_1), "0");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(1.5 * 12.0), "18");
    }

    #[test]
    fn quoting() {
        assert_eq!(quote("REF**"), "REF**");
        assert_eq!(quote("F.SilkS"), "F.SilkS");
        assert_eq!(quote("two words"), "\"two words\"");
        assert_eq!(quote(""), "\"\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("a(b"), "\"a(b\"");
        assert_eq!(quote("a)b"), "\"a)b\"");
        assert_eq!(quote("(x)"), "\"(x)\"");
    }

    #[test]
    fn serialize_minimal_footprint() {
        let fp = Footprint::new("EMPTY");
        assert_eq!(
            KicadFileHandler::serialize(&fp),
            "(module EMPTY (layer F.Cu) (tedit 0)\n)\n"
        );
    }

    #[test]
    fn serialize_groups_items_by_kind() {
        let mut fp = Footprint::new("TEST");
        fp.set_description("Test footprint");
        fp.set_tags("test");
        fp.append(Model3D::new("models/TEST.wrl"));
        fp.append(PadArray::new(2, 1.5, Pad::through_hole("", Point::default(), 1.1, 0.7)).unwrap());
        fp.append(RectLine::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
        fp.append(Text::reference("REF**", Point::new(0.75, -2.7), Layer::FrontSilkscreen));

        let out = KicadFileHandler::serialize(&fp);
        let text_pos = out.find("(fp_text reference REF** (at 0.75 -2.7)").unwrap();
        let line_pos = out.find("(fp_line").unwrap();
        let pad_pos = out.find("(pad 1 thru_hole circle (at 0 0) (size 1.1 1.1) (drill 0.7) (layers *.Cu *.Mask))").unwrap();
        let model_pos = out.find("(model models/TEST.wrl").unwrap();

        assert!(text_pos < line_pos);
        assert!(line_pos < pad_pos);
        assert!(pad_pos < model_pos);
        assert!(out.contains("(descr \"Test footprint\")"));
        assert!(out.contains("(tags \"test\")"));
        assert!(out.contains("(pad 2 thru_hole circle (at 1.5 0)"));
        assert!(out.contains("(scale (xyz 1 1 1))"));
        assert!(out.ends_with(")\n"));
    }

    #[test]
    fn serialize_smd_and_oval_pads() {
        let mut fp = Footprint::new("TEST");
        fp.append(Pad {
            number: "MP".to_string(),
            kind: PadKind::Smd,
            shape: PadShape::Rect,
            at: Point::new(-2.5, 1.25),
            width: 1.2,
            height: 0.8,
            drill: None,
            layers: vec![Layer::FrontCopper],
        });
        fp.append(Pad {
            shape: PadShape::Oval,
            height: 1.6,
            ..Pad::through_hole("1", Point::default(), 1.1, 0.7)
        });

        let out = KicadFileHandler::serialize(&fp);
        assert!(out.contains("  (pad MP smd rect (at -2.5 1.25) (size 1.2 0.8) (layers F.Cu))\n"));
        assert!(out.contains(
            "  (pad 1 thru_hole oval (at 0 0) (size 1.1 1.6) (drill 0.7) (layers *.Cu *.Mask))\n"
        ));
    }

    #[test]
    fn serialize_mirrored_polyline() {
        let mut fp = Footprint::new("TEST");
        let poly = PolygonLine::new(vec![Point::new(0.0, 0.0), Point::new(0.5, 0.0)]);
        fp.append(poly.mirrored(1.0));

        let out = KicadFileHandler::serialize(&fp);
        assert!(out.contains("(fp_line (start 2 0) (end 1.5 0) (layer F.SilkS) (width 0.15))"));
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let fp = Footprint::new("TEST");
        let result = KicadFileHandler::new().write(
            &fp,
            Path::new("/nonexistent-dir-for-test/TEST.kicad_mod"),
        );
        assert!(matches!(result, Err(KicadError::FileWrite { .. })));
    }
}

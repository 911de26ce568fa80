//! Batch generation of footprint files.
//!
//! Runs the calculator over every pin count of a series and hands each
//! footprint to a [`FootprintWriter`].

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::connector::naming;
use crate::connector::{SeriesConfig, TopEntryCalculator};
use crate::error::GeneratorResult;
use crate::kicad::FootprintWriter;

/// Picks the requested output directory: the command line argument if
/// given, otherwise the configured `output_dir`.
#[must_use]
pub fn requested_output_dir(cli: Option<PathBuf>, config: Option<PathBuf>) -> Option<PathBuf> {
    cli.or(config)
}

/// Resolves the output directory from an optional CLI argument.
///
/// - No argument: `cwd`
/// - Absolute path to an existing directory: used as is
/// - Otherwise `cwd/arg`, if that is an existing directory
/// - Anything else falls back to `cwd`
#[must_use]
pub fn resolve_output_dir(arg: Option<&Path>, cwd: &Path) -> PathBuf {
    let Some(arg) = arg else {
        return cwd.to_path_buf();
    };

    if arg.is_absolute() && arg.is_dir() {
        return arg.to_path_buf();
    }

    let joined = cwd.join(arg);
    if joined.is_dir() {
        return joined;
    }

    warn!(
        requested = %arg.display(),
        fallback = %cwd.display(),
        "Output directory does not exist, using current directory"
    );
    cwd.to_path_buf()
}

/// Files written by one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Written paths, in pin count order.
    pub written: Vec<PathBuf>,
}

impl GenerationReport {
    /// Number of footprints written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.written.len()
    }

    /// Returns `true` if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

/// Generates one footprint file per pin count.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    calculator: TopEntryCalculator<'a>,
}

impl<'a> Generator<'a> {
    /// Creates a generator for `series`.
    #[must_use]
    pub fn new(series: &'a SeriesConfig) -> Self {
        Self {
            calculator: TopEntryCalculator::new(series),
        }
    }

    /// Overrides the 3D model directory.
    #[must_use]
    pub fn with_model_dir(mut self, model_dir: impl Into<String>) -> Self {
        self.calculator = self.calculator.with_model_dir(model_dir);
        self
    }

    /// Builds every footprint of the series and writes it to `output_dir`.
    ///
    /// Pin counts are processed in ascending order. The first failure stops
    /// the run.
    ///
    /// # Errors
    ///
    /// Returns an error if a footprint cannot be built or written.
    pub fn run<W: FootprintWriter>(
        &self,
        writer: &mut W,
        output_dir: &Path,
    ) -> GeneratorResult<GenerationReport> {
        let series = self.calculator.series();
        let mut report = GenerationReport::default();

        for pins in series.pin_counts.clone() {
            let footprint = self.calculator.calculate(pins)?;
            let path = output_dir.join(naming::file_name(&footprint.name));

            writer.write(&footprint, &path)?;
            info!(pins, path = %path.display(), "Wrote footprint");

            report.written.push(path);
        }

        info!(
            count = report.len(),
            output_dir = %output_dir.display(),
            "Generation complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::JST_ZH;
    use crate::kicad::{Footprint, KicadError, KicadResult};

    #[derive(Default)]
    struct RecordingWriter {
        written: Vec<(String, PathBuf)>,
    }

    impl FootprintWriter for RecordingWriter {
        fn write(&mut self, footprint: &Footprint, path: &Path) -> KicadResult<()> {
            self.written
                .push((footprint.name.clone(), path.to_path_buf()));
            Ok(())
        }
    }

    struct FailingWriter {
        fail_at: usize,
        calls: usize,
    }

    impl FootprintWriter for FailingWriter {
        fn write(&mut self, _footprint: &Footprint, path: &Path) -> KicadResult<()> {
            self.calls += 1;
            if self.calls == self.fail_at {
                return Err(KicadError::file_write(
                    path,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                ));
            }
            Ok(())
        }
    }

    #[test]
    fn run_writes_every_pin_count() {
        let mut writer = RecordingWriter::default();
        let report = Generator::new(&JST_ZH)
            .run(&mut writer, Path::new("/out"))
            .unwrap();

        assert_eq!(report.len(), 12);
        assert_eq!(writer.written.len(), 12);
        assert_eq!(writer.written[0].0, "JST_ZH_B02B-ZR_02x1.50mm_Straight");
        assert_eq!(
            writer.written[11].1,
            PathBuf::from("/out/JST_ZH_B13B-ZR_13x1.50mm_Straight.kicad_mod")
        );
        assert_eq!(report.written[0], writer.written[0].1);
    }

    #[test]
    fn run_stops_at_first_failure() {
        let mut writer = FailingWriter {
            fail_at: 3,
            calls: 0,
        };
        let result = Generator::new(&JST_ZH).run(&mut writer, Path::new("/out"));
        assert!(result.is_err());
        assert_eq!(writer.calls, 3);
    }

    #[test]
    fn cli_output_dir_overrides_config() {
        let cli = Some(PathBuf::from("from-cli"));
        let config = Some(PathBuf::from("from-config"));
        assert_eq!(requested_output_dir(cli, config), Some(PathBuf::from("from-cli")));
    }

    #[test]
    fn config_output_dir_used_without_cli() {
        let config = Some(PathBuf::from("from-config"));
        assert_eq!(requested_output_dir(None, config), Some(PathBuf::from("from-config")));
        assert_eq!(
            requested_output_dir(Some(PathBuf::from("from-cli")), None),
            Some(PathBuf::from("from-cli"))
        );
        assert_eq!(requested_output_dir(None, None), None);
    }

    #[test]
    fn resolve_without_argument() {
        let cwd = Path::new("/some/cwd");
        assert_eq!(resolve_output_dir(None, cwd), PathBuf::from("/some/cwd"));
    }

    #[test]
    fn resolve_absolute_directory() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_output_dir(Some(dir.path()), Path::new("/some/cwd"));
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn resolve_relative_directory() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::create_dir(cwd.path().join("out")).unwrap();
        let resolved = resolve_output_dir(Some(Path::new("out")), cwd.path());
        assert_eq!(resolved, cwd.path().join("out"));
    }

    #[test]
    fn resolve_missing_directory_falls_back() {
        let cwd = tempfile::tempdir().unwrap();
        let resolved = resolve_output_dir(Some(Path::new("does-not-exist")), cwd.path());
        assert_eq!(resolved, cwd.path());

        let resolved = resolve_output_dir(Some(Path::new("/does/not/exist")), cwd.path());
        assert_eq!(resolved, cwd.path());
    }
}

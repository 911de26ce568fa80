//! jst-zh-footprints: KiCad footprint generator for JST ZH connectors
//!
//! Writes one `.kicad_mod` file per supported pin count into the output
//! directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use jst_zh_footprints::config;
use jst_zh_footprints::connector::JST_ZH;
use jst_zh_footprints::generator::{requested_output_dir, resolve_output_dir, Generator};
use jst_zh_footprints::kicad::KicadFileHandler;

/// KiCad footprint generator for JST ZH series connectors.
///
/// Generates top entry through-hole footprints for every supported pin count.
#[derive(Parser, Debug)]
#[command(name = "jst-zh-footprints")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory (absolute, or relative to the current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(get_log_level(args.verbose, args.quiet, &cfg.logging.level));

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            error!(error = %e, "Cannot determine current directory");
            return ExitCode::FAILURE;
        }
    };

    let requested = requested_output_dir(args.output_dir, cfg.output_dir);
    let output_dir = resolve_output_dir(requested.as_deref(), &cwd);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        output_dir = %output_dir.display(),
        "Generating JST ZH footprints"
    );

    let generator = Generator::new(&JST_ZH).with_model_dir(cfg.model_dir);
    let mut writer = KicadFileHandler::new();

    match generator.run(&mut writer, &output_dir) {
        Ok(report) => {
            info!(count = report.len(), "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Footprint generation failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

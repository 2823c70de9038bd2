//! CLI logic for the doxyplant converter.
//!
//! This module contains the core CLI logic for the doxyplant
//! converter.

pub mod error_adapter;

mod args;

pub use args::Args;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use doxyplant::config::ExportOptions;
use doxyplant::{DiagramExporter, DoxyplantError, MODEL_SUBDIR};

/// Run the doxyplant CLI application
///
/// This function loads the Doxygen XML model from the resolved input
/// location, exports it as a PlantUML document and writes the result
/// to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DoxyplantError` for:
/// - A missing model input directory or unreadable manifest
/// - Writer sequencing violations
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), DoxyplantError> {
    let base_dir = resolve_base_dir(args.input.as_deref());
    let xml_dir = base_dir.join(MODEL_SUBDIR);

    info!(
        xml_dir:? = xml_dir,
        output_path = args.output;
        "Processing documentation model"
    );

    let options = ExportOptions::new().with_inheritance_edges(args.inheritance);
    let exporter = DiagramExporter::new(options);

    let model = exporter.load(&xml_dir)?;
    let diagram = exporter.export(&model)?;

    fs::write(&args.output, diagram)?;

    info!(output_file = args.output; "Diagram exported successfully");

    Ok(())
}

/// Resolves the base directory holding the model input.
///
/// An explicit argument wins; otherwise the running executable's own
/// directory is used, falling back to the current directory when the
/// executable path cannot be resolved.
fn resolve_base_dir(input: Option<&str>) -> PathBuf {
    match input {
        Some(path) => PathBuf::from(path),
        None => env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

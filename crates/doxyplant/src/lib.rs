//! doxyplant - Convert Doxygen XML documentation into PlantUML class
//! diagrams.
//!
//! A one-shot batch converter: load a fully-built documentation model,
//! walk it once, emit the textual diagram description. The interesting
//! part is the traversal-and-deduplication engine: namespaces nest in
//! namespaces, classes float at top level and reappear as namespace
//! members, and every class drags along its own snapshot of the
//! relation graphs - so the walk is driven by append-only registries
//! that keep each compound block and each relationship edge from being
//! emitted twice.

pub mod config;
pub mod normalize;
pub mod registry;
pub mod relations;
pub mod walk;
pub mod writer;

mod error;

pub use doxyplant_model as model;
pub use doxyplant_xml::{LoadError, MANIFEST_FILE, MODEL_SUBDIR};

pub use error::DoxyplantError;

use std::path::Path;

use log::{debug, info, trace};

use doxyplant_model::{Model, SourceLanguage};

use config::ExportOptions;
use normalize::{Normalizer, SOURCE_SEPARATOR};
use walk::ModelWalker;
use writer::PlantUmlWriter;

/// Facade for loading a documentation model and exporting it as a
/// PlantUML diagram.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use doxyplant::DiagramExporter;
/// use doxyplant::config::ExportOptions;
///
/// let exporter = DiagramExporter::new(ExportOptions::default());
///
/// let model = exporter.load(Path::new("docs/xml"))
///     .expect("Failed to load model");
/// let diagram = exporter.export(&model)
///     .expect("Failed to export");
///
/// assert!(diagram.starts_with("@startuml"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramExporter {
    options: ExportOptions,
}

impl DiagramExporter {
    /// Creates an exporter with the given options.
    pub fn new(options: ExportOptions) -> Self {
        DiagramExporter { options }
    }

    /// Loads the documentation model from a Doxygen XML directory.
    ///
    /// # Errors
    ///
    /// Returns `DoxyplantError::Load` when the directory is missing or
    /// its manifest cannot be read; see [`doxyplant_xml::load_dir`].
    pub fn load(&self, xml_dir: &Path) -> Result<Model, DoxyplantError> {
        info!(xml_dir:? = xml_dir; "Loading documentation model");

        let model = doxyplant_xml::load_dir(xml_dir)?;

        debug!(
            compounds = model.len(),
            language = model.language().name();
            "Model loaded"
        );
        Ok(model)
    }

    /// Exports a model as a PlantUML document.
    ///
    /// The document is bounded by the start and end markers and
    /// contains, in traversal order, the namespace blocks, class blocks
    /// and relationship lines. Under the C++ language hint the document
    /// is switched to scope-separator display mode and qualified names
    /// keep their `::` separators; otherwise they are normalized to the
    /// default `.` convention.
    ///
    /// # Errors
    ///
    /// Returns `DoxyplantError::Write` on writer sequencing violations
    /// or sink I/O failures.
    pub fn export(&self, model: &Model) -> Result<String, DoxyplantError> {
        info!(compounds = model.len(); "Exporting diagram");

        let mut writer = PlantUmlWriter::new(Vec::new());
        writer.start()?;

        let normalizer = match model.language() {
            SourceLanguage::Cpp => {
                writer.write_namespace_separator(SOURCE_SEPARATOR)?;
                Normalizer::identity()
            }
            SourceLanguage::Unknown => Normalizer::default(),
        };

        ModelWalker::new(model, &mut writer, &self.options, normalizer).run()?;
        writer.end()?;

        let text = String::from_utf8(writer.into_inner())
            .expect("PlantUML output written from strings is valid UTF-8");
        trace!(bytes = text.len(); "Diagram exported");
        Ok(text)
    }
}

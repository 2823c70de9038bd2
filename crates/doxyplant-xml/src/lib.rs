//! Doxygen XML loader for doxyplant.
//!
//! Reads a Doxygen XML output directory (an `index.xml` manifest plus
//! one XML file per compound) and builds the read-only
//! [`doxyplant_model::Model`] that the conversion engine traverses.
//!
//! Loading is deliberately permissive: only a missing input directory or
//! an unreadable manifest is fatal. Compound files that are absent or
//! malformed, unmodeled compound kinds, dangling graph references, and
//! unrecognized relation keywords are all dropped with a debug log.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let model = doxyplant_xml::load_dir(Path::new("docs/xml"))
//!     .expect("Failed to load model");
//! println!("{} compounds", model.len());
//! ```

mod convert;
mod error;
mod raw;

pub use error::LoadError;

use std::fs;
use std::path::Path;

use log::debug;

use doxyplant_model::{Compound, Model, SourceLanguage};

/// Fixed name of the model input subdirectory under the base directory.
pub const MODEL_SUBDIR: &str = "xml";

/// Fixed name of the top-level manifest inside the model directory.
pub const MANIFEST_FILE: &str = "index.xml";

/// File-extension substring that classifies the source as C++.
const CPP_EXTENSION: &str = ".cpp";

/// Loads the model from a Doxygen XML directory.
///
/// `xml_dir` is the directory holding `index.xml` and the per-compound
/// files (conventionally `<base>/xml`, see [`MODEL_SUBDIR`]).
///
/// # Errors
///
/// Returns [`LoadError::MissingModelDir`] if `xml_dir` does not exist,
/// and [`LoadError::Io`]/[`LoadError::Manifest`] if the manifest cannot
/// be read or deserialized. Problems below the manifest level are not
/// errors; the affected item is skipped.
pub fn load_dir(xml_dir: &Path) -> Result<Model, LoadError> {
    if !xml_dir.is_dir() {
        return Err(LoadError::MissingModelDir {
            path: xml_dir.to_path_buf(),
        });
    }

    let manifest_path = xml_dir.join(MANIFEST_FILE);
    let manifest_text = fs::read_to_string(&manifest_path)?;
    let index: raw::DoxygenIndex =
        quick_xml::de::from_str(&manifest_text).map_err(|source| LoadError::Manifest {
            path: manifest_path,
            source,
        })?;

    let language = detect_language(&index);
    debug!(
        entries = index.compounds.len(),
        language = language.name();
        "Manifest read"
    );

    let mut model = Model::new(language);
    for entry in &index.compounds {
        if !matches!(entry.kind.as_str(), "namespace" | "class" | "struct") {
            continue;
        }
        if let Some(compound) = load_compound(xml_dir, &entry.refid) {
            model.insert(compound);
        }
    }

    debug!(compounds = model.len(); "Model loaded");
    Ok(model)
}

/// Classifies the source language from the manifest's file entries.
///
/// The heuristic looks for the `.cpp` extension substring among file
/// compound names; any match classifies the whole model as C++.
fn detect_language(index: &raw::DoxygenIndex) -> SourceLanguage {
    let is_cpp = index
        .compounds
        .iter()
        .any(|entry| entry.kind == "file" && entry.name.contains(CPP_EXTENSION));
    if is_cpp {
        SourceLanguage::Cpp
    } else {
        SourceLanguage::Unknown
    }
}

/// Loads and converts a single compound file, `<refid>.xml`.
fn load_compound(xml_dir: &Path, refid: &str) -> Option<Compound> {
    let path = xml_dir.join(format!("{refid}.xml"));

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            debug!(refid, err:?; "Skipping unreadable compound file");
            return None;
        }
    };

    let file: raw::DoxygenFile = match quick_xml::de::from_str(&text) {
        Ok(file) => file,
        Err(err) => {
            debug!(refid, err:?; "Skipping malformed compound file");
            return None;
        }
    };

    let def = file.compounds.into_iter().find(|def| def.id == refid);
    match def {
        Some(def) => convert::compound_from_def(def),
        None => {
            debug!(refid; "Compound file holds no matching compounddef");
            None
        }
    }
}

//! Error types for model loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the Doxygen XML model input.
///
/// Only manifest-level problems are fatal; a single compound file that
/// is missing or malformed is dropped with a debug log instead, since
/// validating the upstream model is out of scope.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The fixed-named model input directory does not exist.
    #[error("model input directory not found: {}", path.display())]
    MissingModelDir { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The top-level manifest could not be deserialized.
    #[error("malformed manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },
}

//! Error types for doxyplant operations.
//!
//! This module provides the main error type [`DoxyplantError`] which
//! wraps the error conditions that can occur while loading the model
//! and emitting the diagram.

use std::io;

use thiserror::Error;

use doxyplant_xml::LoadError;

use crate::writer::WriteError;

/// The main error type for doxyplant operations.
#[derive(Debug, Error)]
pub enum DoxyplantError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

//! Error adapter for converting DoxyplantError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard
//! error types and miette's rich diagnostic formatting used in the
//! CLI. The converter's errors carry no source spans, so the adapter
//! contributes an error code and help text per variant.

use std::error::Error;
use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use doxyplant::{DoxyplantError, LoadError};

/// Adapter for a [`DoxyplantError`].
pub struct ErrorAdapter<'a>(pub &'a DoxyplantError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DoxyplantError::Io(_) => "doxyplant::io",
            DoxyplantError::Load(_) => "doxyplant::load",
            DoxyplantError::Write(_) => "doxyplant::write",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            DoxyplantError::Load(LoadError::MissingModelDir { .. }) => {
                "pass the base directory that contains the xml/ model input, \
                 or run doxygen with GENERATE_XML = YES first"
            }
            DoxyplantError::Load(LoadError::Manifest { .. }) => {
                "the index.xml manifest could not be deserialized; \
                 regenerate the XML output"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`DoxyplantError`] into a list of reportable errors.
///
/// The converter's errors are not aggregated, so the list always holds
/// exactly one adapter; the shape matches how the CLI renders each
/// diagnostic independently.
pub fn to_reportables(err: &DoxyplantError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_missing_dir_has_help() {
        let err = DoxyplantError::Load(LoadError::MissingModelDir {
            path: PathBuf::from("/nowhere/xml"),
        });

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let adapter = &reportables[0];
        assert_eq!(adapter.code().expect("code").to_string(), "doxyplant::load");
        assert!(adapter.help().expect("help").to_string().contains("xml/"));
        assert!(adapter.to_string().contains("/nowhere/xml"));
    }

    #[test]
    fn test_io_error_has_code_but_no_help() {
        let err = DoxyplantError::Io(std::io::Error::other("disk gone"));

        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().expect("code").to_string(), "doxyplant::io");
        assert!(adapter.help().is_none());
    }
}

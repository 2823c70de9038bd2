//! PlantUML text emission.
//!
//! [`PlantUmlWriter`] wraps an output sink and renders the individual
//! diagram constructs: the document markers, namespace and class
//! blocks, member lines with visibility glyphs, and relationship
//! arrows. It also enforces the two-state writing protocol: a document
//! must be started exactly once before any emission and ended exactly
//! once afterwards.

use std::io::{self, Write};

use thiserror::Error;

use doxyplant_model::{Relation, Visibility};

/// Start marker of a PlantUML document.
pub const START_MARKER: &str = "@startuml";

/// End marker of a PlantUML document.
pub const END_MARKER: &str = "@enduml";

/// Errors raised by the writer.
///
/// The sequencing variants signal an out-of-order `start`/`end` call.
/// They are programming errors under the driver's fixed call sequence
/// and abort the run; there is nothing to recover.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("document already started")]
    AlreadyStarted,

    #[error("document not started")]
    NotStarted,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Writing protocol state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Started,
}

/// Renders PlantUML constructs into an output sink.
///
/// Every emission operation other than [`start`](Self::start) and
/// [`end`](Self::end) requires the started state. That precondition is
/// asserted in debug builds rather than checked per call; the driver's
/// fixed call sequence upholds it.
#[derive(Debug)]
pub struct PlantUmlWriter<W: Write> {
    sink: W,
    state: State,
}

impl<W: Write> PlantUmlWriter<W> {
    /// Creates an idle writer over the given sink.
    pub fn new(sink: W) -> Self {
        PlantUmlWriter {
            sink,
            state: State::Idle,
        }
    }

    /// Begins the document and emits the start marker.
    ///
    /// # Errors
    ///
    /// [`WriteError::AlreadyStarted`] if the document is already open.
    pub fn start(&mut self) -> Result<(), WriteError> {
        if self.state == State::Started {
            return Err(WriteError::AlreadyStarted);
        }
        self.state = State::Started;
        writeln!(self.sink, "{START_MARKER}")?;
        Ok(())
    }

    /// Ends the document and emits the end marker.
    ///
    /// # Errors
    ///
    /// [`WriteError::NotStarted`] if the document was never started.
    pub fn end(&mut self) -> Result<(), WriteError> {
        if self.state != State::Started {
            return Err(WriteError::NotStarted);
        }
        self.state = State::Idle;
        writeln!(self.sink, "{END_MARKER}")?;
        Ok(())
    }

    /// Emits the qualifier that switches the document to an explicit
    /// namespace-separator display mode.
    pub fn write_namespace_separator(&mut self, separator: &str) -> Result<(), WriteError> {
        debug_assert_eq!(self.state, State::Started);
        writeln!(self.sink, "set namespaceSeparator {separator}")?;
        Ok(())
    }

    /// Opens a namespace block.
    pub fn start_namespace(&mut self, name: &str) -> Result<(), WriteError> {
        debug_assert_eq!(self.state, State::Started);
        writeln!(self.sink, "namespace {name} {{")?;
        Ok(())
    }

    /// Closes the innermost open namespace block.
    pub fn end_namespace(&mut self) -> Result<(), WriteError> {
        debug_assert_eq!(self.state, State::Started);
        writeln!(self.sink, "}}")?;
        Ok(())
    }

    /// Opens a class block.
    pub fn start_class(&mut self, name: &str) -> Result<(), WriteError> {
        debug_assert_eq!(self.state, State::Started);
        writeln!(self.sink, "class {name} {{")?;
        Ok(())
    }

    /// Closes the open class block.
    pub fn end_class(&mut self) -> Result<(), WriteError> {
        debug_assert_eq!(self.state, State::Started);
        writeln!(self.sink, "}}")?;
        Ok(())
    }

    /// Emits one field line, `name : type`, prefixed with the
    /// visibility glyph.
    pub fn write_field(
        &mut self,
        type_name: &str,
        field_name: &str,
        visibility: Visibility,
    ) -> Result<(), WriteError> {
        debug_assert_eq!(self.state, State::Started);
        let glyph = visibility_glyph(visibility);
        writeln!(self.sink, "\t{glyph}{field_name} : {type_name}")?;
        Ok(())
    }

    /// Emits one method line, `name()`, prefixed with the visibility
    /// glyph. Signatures are not represented in the target notation.
    pub fn write_method(
        &mut self,
        method_name: &str,
        visibility: Visibility,
    ) -> Result<(), WriteError> {
        debug_assert_eq!(self.state, State::Started);
        let glyph = visibility_glyph(visibility);
        writeln!(self.sink, "\t{glyph}{method_name}()")?;
        Ok(())
    }

    /// Emits one relationship line between two class labels.
    ///
    /// All three inheritance variants render as a generalization arrow;
    /// the source visibility of the inheritance is not distinguished.
    /// Template instantiations emit nothing.
    pub fn write_relationship(
        &mut self,
        source: &str,
        target: &str,
        relation: Relation,
    ) -> Result<(), WriteError> {
        debug_assert_eq!(self.state, State::Started);
        match relation {
            Relation::PublicInheritance
            | Relation::ProtectedInheritance
            | Relation::PrivateInheritance => {
                writeln!(self.sink, "{source} --|> {target}")?;
            }
            Relation::Usage => {
                writeln!(self.sink, "{source} --> {target}")?;
            }
            Relation::TemplateInstance => {}
        }
        Ok(())
    }

    /// Consumes the writer and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Selects the member-line prefix for a visibility.
///
/// Unrecognized visibility carries no glyph; the line is still emitted.
fn visibility_glyph(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "+",
        Visibility::Private => "-",
        Visibility::Protected => "#",
        Visibility::Unspecified => "",
    }
}

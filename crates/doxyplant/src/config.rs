//! Export options.
//!
//! Deliberately small: the converter carries no configuration system
//! beyond the language hint detected at load time and the single
//! inheritance-edge toggle below.

/// Options controlling one export run.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    inheritance_edges: bool,
}

impl ExportOptions {
    /// Creates the default options: collaboration edges on,
    /// inheritance edges off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables inheritance-graph edge emission.
    ///
    /// Off by default: collaboration graphs already carry the
    /// inheritance edges Doxygen knows about, so the dedicated
    /// inheritance pass mostly restates them.
    pub fn with_inheritance_edges(mut self, enabled: bool) -> Self {
        self.inheritance_edges = enabled;
        self
    }

    /// Whether the inheritance-graph pass runs.
    pub fn inheritance_edges(&self) -> bool {
        self.inheritance_edges
    }
}

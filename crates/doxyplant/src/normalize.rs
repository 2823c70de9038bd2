//! Qualified-name normalization.
//!
//! The upstream model writes qualified names with its own scope
//! separator (`::` for Doxygen); the diagram format expects its
//! configured namespace separator. The [`Normalizer`] maps between the
//! two by plain substring replacement.

/// Scope separator used by the upstream model's qualified names.
pub const SOURCE_SEPARATOR: &str = "::";

/// Default namespace separator of the diagram format.
pub const TARGET_SEPARATOR: &str = ".";

/// Maps qualified names from the source separator convention to the
/// target one.
///
/// Normalization is pure and total: any string is valid input, and a
/// name containing no occurrence of the source separator passes through
/// unchanged. It is idempotent as long as the target separator does not
/// itself contain the source separator, which holds for every mapping
/// this crate configures.
#[derive(Debug, Clone)]
pub struct Normalizer {
    from: String,
    to: String,
}

impl Normalizer {
    /// Creates a normalizer with an explicit separator mapping.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Normalizer {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Creates the identity normalizer.
    ///
    /// Used when the emitted diagram is switched to scope-separator
    /// display mode and names keep their source separators.
    pub fn identity() -> Self {
        Self::new(SOURCE_SEPARATOR, SOURCE_SEPARATOR)
    }

    /// Normalizes a qualified name.
    pub fn normalize(&self, name: &str) -> String {
        name.replace(&self.from, &self.to)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(SOURCE_SEPARATOR, TARGET_SEPARATOR)
    }
}

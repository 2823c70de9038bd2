//! The model root: an id-indexed compound arena plus the detected
//! source-language hint.

use indexmap::IndexMap;

use crate::compound::{Compound, CompoundId, CompoundKind};

/// Heuristic classification of the documented source language.
///
/// Detected from the manifest's file entries; the only classification
/// that changes the output is C++, which switches the emitted diagram
/// to scope-separator display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceLanguage {
    Cpp,
    #[default]
    Unknown,
}

impl SourceLanguage {
    /// Returns a human-readable name for this classification.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cpp => "c++",
            Self::Unknown => "unknown",
        }
    }
}

/// The fully-built documentation model.
///
/// Compounds are stored in manifest order, indexed by identifier.
/// Nested-compound references ([`Namespace::nested`]) resolve against
/// this arena through [`Model::get`]; a compound that is reachable both
/// from the top level and as a namespace member is still stored exactly
/// once.
///
/// [`Namespace::nested`]: crate::Namespace::nested
#[derive(Debug, Clone, Default)]
pub struct Model {
    language: SourceLanguage,
    compounds: IndexMap<CompoundId, Compound>,
}

impl Model {
    /// Creates an empty model with the given language hint.
    pub fn new(language: SourceLanguage) -> Self {
        Model {
            language,
            compounds: IndexMap::new(),
        }
    }

    /// Inserts a compound, keyed by its own identifier.
    ///
    /// A later insert with the same identifier replaces the earlier
    /// compound but keeps its position.
    pub fn insert(&mut self, compound: Compound) {
        self.compounds.insert(compound.id().clone(), compound);
    }

    pub fn language(&self) -> SourceLanguage {
        self.language
    }

    /// Top-level compound list in manifest order.
    pub fn compounds(&self) -> impl Iterator<Item = &Compound> {
        self.compounds.values()
    }

    /// Compounds of one kind, in manifest order.
    pub fn compounds_of_kind(&self, kind: CompoundKind) -> impl Iterator<Item = &Compound> {
        self.compounds().filter(move |c| c.kind() == kind)
    }

    /// Resolves a compound reference.
    pub fn get(&self, id: &CompoundId) -> Option<&Compound> {
        self.compounds.get(id)
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound::{Class, Namespace};

    #[test]
    fn test_manifest_order_is_preserved() {
        let mut model = Model::new(SourceLanguage::Unknown);
        model.insert(Class::new("c2", "Second").into());
        model.insert(Namespace::new("n1", "First").into());
        model.insert(Class::new("c3", "Third").into());

        let names: Vec<&str> = model.compounds().map(Compound::name).collect();
        assert_eq!(names, ["Second", "First", "Third"]);
    }

    #[test]
    fn test_get_resolves_by_id() {
        let mut model = Model::new(SourceLanguage::Cpp);
        model.insert(Class::new("class_a", "A").into());

        assert_eq!(model.language(), SourceLanguage::Cpp);
        let compound = model.get(&CompoundId::new("class_a")).expect("inserted");
        assert_eq!(compound.name(), "A");
        assert!(model.get(&CompoundId::new("class_b")).is_none());
    }

    #[test]
    fn test_compounds_of_kind_filters() {
        let mut model = Model::new(SourceLanguage::Unknown);
        model.insert(Namespace::new("n1", "N").into());
        model.insert(Class::new("c1", "C").into());
        model.insert(Namespace::new("n2", "M").into());

        let namespaces: Vec<&str> = model
            .compounds_of_kind(CompoundKind::Namespace)
            .map(Compound::name)
            .collect();
        assert_eq!(namespaces, ["N", "M"]);

        let classes: Vec<&str> = model
            .compounds_of_kind(CompoundKind::Class)
            .map(Compound::name)
            .collect();
        assert_eq!(classes, ["C"]);
    }
}

//! Model traversal: the namespace/class walkers and the two-pass
//! driver.
//!
//! The walker descends the compound hierarchy depth-first; traversal
//! order is emission order. Two passes over the top-level compound list
//! are required, namespaces first: classes carry no parent-namespace
//! attribute, so their nesting is discovered only by descending through
//! namespace children. The class pass afterwards picks up whatever
//! floats outside every namespace, and the compound registry turns it
//! into a no-op for anything the namespace pass already emitted.

use std::io::Write;

use log::{debug, trace};

use doxyplant_model::{Class, Compound, CompoundKind, Member, MemberKind, Model, Namespace, Section};

use crate::config::ExportOptions;
use crate::normalize::{Normalizer, SOURCE_SEPARATOR};
use crate::registry::{CompoundRegistry, NamespaceRegistry};
use crate::relations::{LabelMode, RelationWalker};
use crate::writer::{PlantUmlWriter, WriteError};

/// One conversion run's traversal state.
///
/// Owns the registries and the per-relation walkers; constructed per
/// run and discarded with it, so no state leaks across conversions.
#[derive(Debug)]
pub struct ModelWalker<'a, W: Write> {
    model: &'a Model,
    writer: &'a mut PlantUmlWriter<W>,
    options: &'a ExportOptions,
    normalizer: Normalizer,
    compounds: CompoundRegistry,
    namespaces: NamespaceRegistry,
    inheritance: RelationWalker,
    collaboration: RelationWalker,
}

impl<'a, W: Write> ModelWalker<'a, W> {
    /// Creates a walker over a started writer.
    pub fn new(
        model: &'a Model,
        writer: &'a mut PlantUmlWriter<W>,
        options: &'a ExportOptions,
        normalizer: Normalizer,
    ) -> Self {
        ModelWalker {
            model,
            writer,
            options,
            normalizer,
            compounds: CompoundRegistry::new(),
            namespaces: NamespaceRegistry::new(),
            inheritance: RelationWalker::new(LabelMode::Normalized),
            collaboration: RelationWalker::new(LabelMode::Raw),
        }
    }

    /// Runs both passes over the top-level compound list.
    pub fn run(mut self) -> Result<(), WriteError> {
        debug!("Namespace pass");
        for compound in self.model.compounds_of_kind(CompoundKind::Namespace) {
            if let Compound::Namespace(namespace) = compound {
                self.walk_namespace(namespace, "")?;
            }
        }

        debug!("Class pass");
        for compound in self.model.compounds_of_kind(CompoundKind::Class) {
            if let Compound::Class(class) = compound {
                self.walk_class(class)?;
            }
        }

        debug!(
            classes = self.compounds.len(),
            namespaces = self.namespaces.len(),
            collaboration_edges = self.collaboration.edge_count(),
            inheritance_edges = self.inheritance.edge_count();
            "Traversal complete"
        );
        Ok(())
    }

    /// Emits a namespace block and recurses into its children.
    ///
    /// Deduplication keys on the fully qualified path, not the bare
    /// name, so unrelated namespaces that happen to share a simple name
    /// at different nesting depths keep their own blocks.
    fn walk_namespace(&mut self, namespace: &Namespace, enclosing: &str) -> Result<(), WriteError> {
        let path = qualified_path(enclosing, namespace.name());
        if self.namespaces.already_registered(&path) {
            trace!(path; "Namespace already opened");
            return Ok(());
        }
        self.namespaces.add(path.clone());

        trace!(path; "Opening namespace");
        self.writer
            .start_namespace(&self.normalizer.normalize(namespace.name()))?;

        for id in namespace.nested() {
            match self.model.get(id) {
                Some(Compound::Namespace(nested)) => self.walk_namespace(nested, &path)?,
                Some(Compound::Class(class)) => self.walk_class(class)?,
                None => debug!(id = id.as_str(); "Skipping dangling nested compound reference"),
            }
        }

        self.writer.end_namespace()
    }

    /// Emits a class block and the class's relation graphs.
    ///
    /// The skip check is solely by identifier: a class reachable both
    /// nested in a namespace and at top level renders exactly once, at
    /// its first visitation.
    fn walk_class(&mut self, class: &Class) -> Result<(), WriteError> {
        if self.compounds.already_registered(class.id()) {
            trace!(id = class.id().as_str(); "Class already emitted");
            return Ok(());
        }
        self.compounds.add(class.id().clone());

        trace!(id = class.id().as_str(), name = class.name(); "Emitting class");
        self.writer
            .start_class(&self.normalizer.normalize(class.name()))?;
        for section in class.sections() {
            self.walk_section(section)?;
        }
        self.writer.end_class()?;

        if let Some(graph) = class.collaboration_graph() {
            self.collaboration
                .walk(graph, &self.normalizer, self.writer)?;
        }
        if self.options.inheritance_edges() {
            if let Some(graph) = class.inheritance_graph() {
                self.inheritance.walk(graph, &self.normalizer, self.writer)?;
            }
        }
        Ok(())
    }

    /// Dispatches a section's members to the member emitter by kind.
    fn walk_section(&mut self, section: &Section) -> Result<(), WriteError> {
        for member in section.members() {
            self.walk_member(member)?;
        }
        Ok(())
    }

    fn walk_member(&mut self, member: &Member) -> Result<(), WriteError> {
        match member.kind() {
            MemberKind::Function => self.writer.write_method(member.name(), member.visibility()),
            MemberKind::Variable => self.writer.write_field(
                member.type_name().unwrap_or(""),
                member.name(),
                member.visibility(),
            ),
            // unknown member kinds never abort the run
            MemberKind::Other => Ok(()),
        }
    }
}

/// Extends an enclosing namespace path with a namespace's own name.
///
/// Upstream names are usually already fully qualified, in which case
/// the name subsumes the enclosing chain and is used as-is; only simple
/// names are chained. Either way a namespace reached both nested and
/// from the top-level list resolves to the same key.
fn qualified_path(enclosing: &str, name: &str) -> String {
    if enclosing.is_empty() {
        return name.to_owned();
    }
    let prefix = format!("{enclosing}{SOURCE_SEPARATOR}");
    if name.starts_with(&prefix) {
        name.to_owned()
    } else {
        format!("{prefix}{name}")
    }
}

#[cfg(test)]
mod tests {
    use doxyplant_model::{
        Edge, Graph, Member, Namespace, Node, Relation, SourceLanguage, Visibility,
    };

    use super::*;

    fn class_with_member(id: &str, name: &str) -> Class {
        let mut class = Class::new(id, name);
        class.push_section([Member::function("run", Visibility::Public)].into_iter().collect());
        class
    }

    fn export(model: &Model, options: &ExportOptions) -> String {
        let mut writer = PlantUmlWriter::new(Vec::new());
        writer.start().expect("start");
        ModelWalker::new(model, &mut writer, options, Normalizer::default())
            .run()
            .expect("walk");
        writer.end().expect("end");
        String::from_utf8(writer.into_inner()).expect("UTF-8")
    }

    #[test]
    fn test_qualified_path_chains_simple_names() {
        assert_eq!(qualified_path("", "N"), "N");
        assert_eq!(qualified_path("N", "M"), "N::M");
        assert_eq!(qualified_path("N::M", "K"), "N::M::K");
    }

    #[test]
    fn test_qualified_path_keeps_prequalified_names() {
        assert_eq!(qualified_path("N", "N::M"), "N::M");
        assert_eq!(qualified_path("N::M", "N::M::K"), "N::M::K");
    }

    #[test]
    fn test_two_pass_ordering_nests_class_in_namespace() {
        let mut model = Model::new(SourceLanguage::Unknown);
        let mut namespace = Namespace::new("namespace_n", "N");
        namespace.push_nested("class_n_1_1_c".into());
        model.insert(namespace.into());
        model.insert(class_with_member("class_n_1_1_c", "N::C").into());

        let text = export(&model, &ExportOptions::default());

        let expected = "@startuml\n\
                        namespace N {\n\
                        class N.C {\n\
                        \t+run()\n\
                        }\n\
                        }\n\
                        @enduml\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_class_emitted_at_most_once() {
        // the same class id is reachable via two namespaces and at top level
        let mut model = Model::new(SourceLanguage::Unknown);
        let mut first = Namespace::new("namespace_a", "A");
        first.push_nested("class_c".into());
        let mut second = Namespace::new("namespace_b", "B");
        second.push_nested("class_c".into());
        model.insert(first.into());
        model.insert(second.into());
        model.insert(class_with_member("class_c", "C").into());

        let text = export(&model, &ExportOptions::default());

        assert_eq!(text.matches("class C {").count(), 1);
        // rendered at first visitation, inside namespace A
        let a_block = text.find("namespace A {").expect("A opened");
        let b_block = text.find("namespace B {").expect("B opened");
        let c_block = text.find("class C {").expect("C emitted");
        assert!(a_block < c_block && c_block < b_block);
    }

    #[test]
    fn test_namespace_opened_at_most_once_per_path() {
        // N is listed twice at top level under the same id-distinct compounds
        // but shares one qualified path
        let mut model = Model::new(SourceLanguage::Unknown);
        model.insert(Namespace::new("namespace_n_a", "N").into());
        model.insert(Namespace::new("namespace_n_b", "N").into());

        let text = export(&model, &ExportOptions::default());

        assert_eq!(text.matches("namespace N {").count(), 1);
    }

    #[test]
    fn test_same_simple_name_in_different_parents_keeps_all_blocks() {
        // A::Util, B::Util and a top-level Util are three unrelated
        // namespaces sharing one simple name
        let mut model = Model::new(SourceLanguage::Unknown);
        let mut first = Namespace::new("namespace_a", "A");
        first.push_nested("namespace_a_1_1_util".into());
        let mut second = Namespace::new("namespace_b", "B");
        second.push_nested("namespace_b_1_1_util".into());
        model.insert(first.into());
        model.insert(second.into());
        model.insert(Namespace::new("namespace_a_1_1_util", "A::Util").into());
        model.insert(Namespace::new("namespace_b_1_1_util", "B::Util").into());
        model.insert(Namespace::new("namespace_util", "Util").into());

        let text = export(&model, &ExportOptions::default());

        assert_eq!(text.matches("namespace A.Util {").count(), 1);
        assert_eq!(text.matches("namespace B.Util {").count(), 1);
        assert_eq!(text.matches("namespace Util {").count(), 1);
    }

    #[test]
    fn test_nested_namespace_not_reopened_from_top_level() {
        // doxygen lists nested namespaces at top level too, with their
        // qualified name
        let mut model = Model::new(SourceLanguage::Unknown);
        let mut outer = Namespace::new("namespace_n", "N");
        outer.push_nested("namespace_n_1_1_m".into());
        model.insert(outer.into());
        model.insert(Namespace::new("namespace_n_1_1_m", "N::M").into());

        let text = export(&model, &ExportOptions::default());

        assert_eq!(text.matches("namespace N.M {").count(), 1);
        assert_eq!(text.matches("namespace N {").count(), 1);
    }

    #[test]
    fn test_inheritance_pass_is_off_by_default() {
        let mut model = Model::new(SourceLanguage::Unknown);
        let mut class = Class::new("class_d", "D");
        let mut node = Node::new("D");
        node.push_edge(Edge::new("B", Relation::PublicInheritance));
        class.set_inheritance_graph([node].into_iter().collect::<Graph>());
        model.insert(class.into());

        let silent = export(&model, &ExportOptions::default());
        assert!(!silent.contains("--|>"));

        let options = ExportOptions::default().with_inheritance_edges(true);
        let text = export(&model, &options);
        assert!(text.contains("D --|> B\n"));
    }

    #[test]
    fn test_collaboration_graphs_deduplicate_across_classes() {
        let mut model = Model::new(SourceLanguage::Unknown);

        let mut shared = Node::new("X");
        shared.push_edge(Edge::new("Y", Relation::Usage));

        let mut first = Class::new("class_x", "X");
        first.set_collaboration_graph([shared.clone()].into_iter().collect::<Graph>());
        let mut second = Class::new("class_z", "Z");
        second.set_collaboration_graph([shared].into_iter().collect::<Graph>());

        model.insert(first.into());
        model.insert(second.into());

        let text = export(&model, &ExportOptions::default());

        assert_eq!(text.matches("X --> Y\n").count(), 1);
    }

    #[test]
    fn test_dangling_nested_reference_is_skipped() {
        let mut model = Model::new(SourceLanguage::Unknown);
        let mut namespace = Namespace::new("namespace_n", "N");
        namespace.push_nested("class_gone".into());
        model.insert(namespace.into());

        let text = export(&model, &ExportOptions::default());

        assert!(text.contains("namespace N {\n"));
        assert!(!text.contains("class"));
    }
}

//! Conversion from raw deserialization shapes into the object model.

use std::collections::HashMap;

use log::debug;

use doxyplant_model::{
    Class, Compound, CompoundId, Edge, Graph, Member, MemberKind, Namespace, Node, Relation,
    Section, Visibility,
};

use crate::raw;

/// Converts one `<compounddef>` into a model compound.
///
/// Returns `None` for compound kinds the converter does not model;
/// `struct` folds into [`Class`].
pub(crate) fn compound_from_def(def: raw::CompoundDef) -> Option<Compound> {
    match def.kind.as_str() {
        "namespace" => Some(namespace_from_def(def).into()),
        "class" | "struct" => Some(class_from_def(def).into()),
        kind => {
            debug!(id = def.id, kind; "Skipping unmodeled compound kind");
            None
        }
    }
}

fn namespace_from_def(def: raw::CompoundDef) -> Namespace {
    let mut namespace = Namespace::new(def.id.as_str(), def.compoundname);
    for inner in def.inner_classes.iter().chain(&def.inner_namespaces) {
        namespace.push_nested(CompoundId::new(&inner.refid));
    }
    namespace
}

fn class_from_def(def: raw::CompoundDef) -> Class {
    let mut class = Class::new(def.id.as_str(), def.compoundname);
    for section in def.sections {
        class.push_section(section.members.iter().map(member_from_def).collect());
    }
    if let Some(graph) = def.inheritance_graph {
        class.set_inheritance_graph(graph_from_raw(graph));
    }
    if let Some(graph) = def.collaboration_graph {
        class.set_collaboration_graph(graph_from_raw(graph));
    }
    class
}

fn member_from_def(def: &raw::MemberDef) -> Member {
    let visibility = def
        .prot
        .as_deref()
        .map_or(Visibility::Unspecified, Visibility::from_keyword);
    Member::new(
        MemberKind::from_keyword(&def.kind),
        def.name.as_str(),
        visibility,
        def.type_text.as_ref().map(raw::LinkedText::flatten),
    )
}

/// Converts a raw graph, resolving `<childnode>` refids to node labels.
///
/// Edges whose refid does not resolve within the graph, or whose
/// relation keyword is unrecognized, are dropped with a debug log.
fn graph_from_raw(raw: raw::RawGraph) -> Graph {
    let labels: HashMap<&str, &str> = raw
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node.label.as_str()))
        .collect();

    let mut graph = Graph::new();
    for raw_node in &raw.nodes {
        let mut node = Node::new(raw_node.label.as_str());
        for child in &raw_node.children {
            let Some(target) = labels.get(child.refid.as_str()) else {
                debug!(node = raw_node.label, refid = child.refid; "Dropping dangling graph edge");
                continue;
            };
            let Some(relation) = Relation::from_keyword(&child.relation) else {
                debug!(node = raw_node.label, relation = child.relation; "Dropping edge with unrecognized relation");
                continue;
            };
            node.push_edge(Edge::new(*target, relation));
        }
        graph.push_node(node);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_def(xml: &str) -> raw::CompoundDef {
        let file: raw::DoxygenFile = quick_xml::de::from_str(xml).expect("test XML deserializes");
        file.compounds.into_iter().next().expect("one compounddef")
    }

    #[test]
    fn test_class_with_members() {
        let def = class_def(
            r#"
            <doxygen>
              <compounddef id="class_c" kind="class">
                <compoundname>C</compoundname>
                <sectiondef kind="public-func">
                  <memberdef kind="function" prot="public"><type>void</type><name>run</name></memberdef>
                  <memberdef kind="typedef" prot="public"><type>int</type><name>Alias</name></memberdef>
                </sectiondef>
              </compounddef>
            </doxygen>
            "#,
        );

        let Some(Compound::Class(class)) = compound_from_def(def) else {
            panic!("expected a class");
        };
        assert_eq!(class.name(), "C");
        assert_eq!(class.sections().len(), 1);

        let members = class.sections()[0].members();
        assert_eq!(members[0].kind(), MemberKind::Function);
        assert_eq!(members[0].visibility(), Visibility::Public);
        // typedefs survive loading as Other and are skipped at emission
        assert_eq!(members[1].kind(), MemberKind::Other);
    }

    #[test]
    fn test_namespace_nesting_refs() {
        let def = class_def(
            r#"
            <doxygen>
              <compounddef id="namespace_n" kind="namespace">
                <compoundname>N</compoundname>
                <innerclass refid="class_n_1_1_c" prot="public">N::C</innerclass>
                <innernamespace refid="namespace_n_1_1_m">N::M</innernamespace>
              </compounddef>
            </doxygen>
            "#,
        );

        let Some(Compound::Namespace(namespace)) = compound_from_def(def) else {
            panic!("expected a namespace");
        };
        let nested: Vec<&str> = namespace.nested().iter().map(CompoundId::as_str).collect();
        assert_eq!(nested, ["class_n_1_1_c", "namespace_n_1_1_m"]);
    }

    #[test]
    fn test_struct_folds_into_class() {
        let def = class_def(
            r#"
            <doxygen>
              <compounddef id="struct_s" kind="struct">
                <compoundname>S</compoundname>
              </compounddef>
            </doxygen>
            "#,
        );

        assert!(matches!(compound_from_def(def), Some(Compound::Class(_))));
    }

    #[test]
    fn test_unmodeled_kind_is_dropped() {
        let def = class_def(
            r#"
            <doxygen>
              <compounddef id="main_8cpp" kind="file">
                <compoundname>main.cpp</compoundname>
              </compounddef>
            </doxygen>
            "#,
        );

        assert!(compound_from_def(def).is_none());
    }

    #[test]
    fn test_graph_edges_resolve_refids() {
        let def = class_def(
            r#"
            <doxygen>
              <compounddef id="class_d" kind="class">
                <compoundname>D</compoundname>
                <collaborationgraph>
                  <node id="1">
                    <label>D</label>
                    <childnode refid="2" relation="usage"/>
                    <childnode refid="99" relation="usage"/>
                    <childnode refid="2" relation="friendship"/>
                  </node>
                  <node id="2"><label>B</label></node>
                </collaborationgraph>
              </compounddef>
            </doxygen>
            "#,
        );

        let Some(Compound::Class(class)) = compound_from_def(def) else {
            panic!("expected a class");
        };
        let graph = class.collaboration_graph().expect("graph present");
        assert_eq!(graph.nodes().len(), 2);

        // dangling refid and unknown relation are both dropped
        let edges = graph.nodes()[0].edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target(), "B");
        assert_eq!(edges[0].relation(), Relation::Usage);
    }
}

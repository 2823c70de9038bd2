//! Raw deserialization shapes for the Doxygen XML files.
//!
//! These structs mirror the on-disk XML closely enough for
//! [`quick_xml::de`] to deserialize them; [`crate::convert`] turns them
//! into the `doxyplant-model` types. Elements and attributes the
//! converter never looks at are simply not declared and are skipped by
//! the deserializer.

use serde::Deserialize;

/// `index.xml`: the `<doxygenindex>` manifest.
#[derive(Debug, Deserialize)]
pub(crate) struct DoxygenIndex {
    #[serde(rename = "compound", default)]
    pub compounds: Vec<IndexCompound>,
}

/// One `<compound>` manifest entry.
#[derive(Debug, Deserialize)]
pub(crate) struct IndexCompound {
    #[serde(rename = "@refid")]
    pub refid: String,
    #[serde(rename = "@kind")]
    pub kind: String,
    pub name: String,
}

/// A per-compound file: the `<doxygen>` root.
#[derive(Debug, Deserialize)]
pub(crate) struct DoxygenFile {
    #[serde(rename = "compounddef", default)]
    pub compounds: Vec<CompoundDef>,
}

/// One `<compounddef>` block.
#[derive(Debug, Deserialize)]
pub(crate) struct CompoundDef {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@kind")]
    pub kind: String,
    pub compoundname: String,
    #[serde(rename = "innerclass", default)]
    pub inner_classes: Vec<InnerRef>,
    #[serde(rename = "innernamespace", default)]
    pub inner_namespaces: Vec<InnerRef>,
    #[serde(rename = "sectiondef", default)]
    pub sections: Vec<SectionDef>,
    #[serde(rename = "inheritancegraph")]
    pub inheritance_graph: Option<RawGraph>,
    #[serde(rename = "collaborationgraph")]
    pub collaboration_graph: Option<RawGraph>,
}

/// An `<innerclass>`/`<innernamespace>` nesting reference.
#[derive(Debug, Deserialize)]
pub(crate) struct InnerRef {
    #[serde(rename = "@refid")]
    pub refid: String,
}

/// One `<sectiondef>` member group.
#[derive(Debug, Deserialize)]
pub(crate) struct SectionDef {
    #[serde(rename = "memberdef", default)]
    pub members: Vec<MemberDef>,
}

/// One `<memberdef>` block.
#[derive(Debug, Deserialize)]
pub(crate) struct MemberDef {
    #[serde(rename = "@kind")]
    pub kind: String,
    #[serde(rename = "@prot", default)]
    pub prot: Option<String>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_text: Option<LinkedText>,
}

/// Text that may be interleaved with `<ref>` cross-reference elements,
/// as in `std::vector&lt; <ref refid="...">Item</ref> &gt;`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LinkedText {
    #[serde(rename = "$value", default)]
    pub parts: Vec<LinkedTextPart>,
}

impl LinkedText {
    /// Flattens the interleaved text and reference parts back into the
    /// declared text.
    pub fn flatten(&self) -> String {
        let mut text = String::new();
        for part in &self.parts {
            match part {
                LinkedTextPart::Text(t) => text.push_str(t),
                LinkedTextPart::Ref(r) => text.push_str(&r.text),
            }
        }
        text
    }
}

#[derive(Debug, Deserialize)]
pub(crate) enum LinkedTextPart {
    #[serde(rename = "$text")]
    Text(String),
    #[serde(rename = "ref")]
    Ref(RefText),
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefText {
    #[serde(rename = "$text", default)]
    pub text: String,
}

/// An `<inheritancegraph>`/`<collaborationgraph>` block.
#[derive(Debug, Deserialize)]
pub(crate) struct RawGraph {
    #[serde(rename = "node", default)]
    pub nodes: Vec<RawNode>,
}

/// One graph `<node>`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawNode {
    #[serde(rename = "@id")]
    pub id: String,
    pub label: String,
    #[serde(rename = "childnode", default)]
    pub children: Vec<RawChildNode>,
}

/// One `<childnode>` edge, pointing at another node of the same graph.
#[derive(Debug, Deserialize)]
pub(crate) struct RawChildNode {
    #[serde(rename = "@refid")]
    pub refid: String,
    #[serde(rename = "@relation")]
    pub relation: String,
}

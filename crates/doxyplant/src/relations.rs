//! Relationship-graph traversal and edge deduplication.
//!
//! A class's relation graph is a self-contained snapshot: the same edge
//! reappears in the graphs of every class that can see it, and the
//! driver walks one graph per class. Deduplication therefore lives
//! here, in a walker instance that spans the whole run, not in any
//! single graph.

use std::io::Write;

use log::trace;

use doxyplant_model::Graph;

use crate::normalize::Normalizer;
use crate::registry::EdgeRegistry;
use crate::writer::{PlantUmlWriter, WriteError};

/// How a walker instance derives its dedup keys and emitted labels
/// from the graph's node labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Pass labels through the name normalizer first (inheritance).
    Normalized,
    /// Use the labels exactly as the graph exposes them (collaboration).
    Raw,
}

/// Walks relation graphs, emitting each distinct directed edge once.
///
/// One instance per relation kind per run; the embedded
/// [`EdgeRegistry`] accumulates every `(source, target)` label pair the
/// instance has emitted, so an edge revisited through another class's
/// graph snapshot is skipped.
#[derive(Debug)]
pub struct RelationWalker {
    registry: EdgeRegistry,
    label_mode: LabelMode,
}

impl RelationWalker {
    /// Creates a walker with an empty edge registry.
    pub fn new(label_mode: LabelMode) -> Self {
        RelationWalker {
            registry: EdgeRegistry::new(),
            label_mode,
        }
    }

    /// Walks one graph snapshot.
    ///
    /// Nodes are visited in the order the graph exposes them, edges in
    /// declaration order. For each edge the `(source, target)` pair is
    /// registered before the line is written, so at-most-once is
    /// enforced on intent even if emission fails mid-run.
    pub fn walk<W: Write>(
        &mut self,
        graph: &Graph,
        normalizer: &Normalizer,
        writer: &mut PlantUmlWriter<W>,
    ) -> Result<(), WriteError> {
        for node in graph.nodes() {
            for edge in node.edges() {
                let key = match self.label_mode {
                    LabelMode::Normalized => (
                        normalizer.normalize(node.label()),
                        normalizer.normalize(edge.target()),
                    ),
                    LabelMode::Raw => (node.label().to_owned(), edge.target().to_owned()),
                };

                if self.registry.already_registered(&key) {
                    trace!(source = key.0, target = key.1; "Edge already emitted");
                    continue;
                }
                self.registry.add(key.clone());
                writer.write_relationship(&key.0, &key.1, edge.relation())?;
            }
        }
        Ok(())
    }

    /// Number of distinct edges registered so far.
    pub fn edge_count(&self) -> usize {
        self.registry.len()
    }
}

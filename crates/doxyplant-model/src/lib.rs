//! Documentation object model for doxyplant.
//!
//! This crate provides the read-only object model that the conversion
//! engine traverses. It includes:
//!
//! - **Compounds**: Namespaces and classes with stable identifiers
//!   ([`compound`] module)
//! - **Members**: Fields and methods grouped into sections
//!   ([`member`] module)
//! - **Graphs**: Inheritance and collaboration relation graphs
//!   ([`graph`] module)
//! - **Model root**: The id-indexed compound arena and source-language
//!   hint ([`model`] module)
//!
//! The model is built once by a loader (see `doxyplant-xml`) and never
//! mutated afterwards; nesting between compounds is expressed through
//! [`CompoundId`] references resolved against the [`Model`], so every
//! compound is owned exactly once regardless of how many parents refer
//! to it.

pub mod compound;
pub mod graph;
pub mod member;
pub mod model;

pub use compound::{Class, Compound, CompoundId, CompoundKind, Namespace};
pub use graph::{Edge, Graph, Node, Relation};
pub use member::{Member, MemberKind, Section, Visibility};
pub use model::{Model, SourceLanguage};

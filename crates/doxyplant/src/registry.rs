//! Append-only "seen" sets enforcing at-most-once emission.
//!
//! One conversion run owns four independent registries: emitted class
//! compounds (by identifier), opened namespaces (by qualified path),
//! and one edge registry per relation graph kind (by ordered label
//! pair). Registries never shrink; they live exactly as long as the
//! run that created them.

use std::collections::HashSet;
use std::hash::Hash;

use doxyplant_model::CompoundId;

/// Class compounds already emitted, keyed by identifier.
pub type CompoundRegistry = Registry<CompoundId>;

/// Namespaces already opened, keyed by fully qualified path.
pub type NamespaceRegistry = Registry<String>;

/// Relationship edges already emitted, keyed by the ordered
/// `(source label, target label)` pair. `(a, b)` and `(b, a)` are
/// distinct keys; both relations this engine renders are directional.
pub type EdgeRegistry = Registry<(String, String)>;

/// An idempotent membership set.
#[derive(Debug, Default)]
pub struct Registry<K> {
    seen: HashSet<K>,
}

impl<K: Eq + Hash> Registry<K> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Registry {
            seen: HashSet::new(),
        }
    }

    /// Records a key. Succeeds unconditionally; recording a key that is
    /// already present is a no-op.
    pub fn add(&mut self, key: K) {
        self.seen.insert(key);
    }

    /// Reports whether a key has been recorded.
    pub fn already_registered(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

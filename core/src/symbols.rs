//! Symbol table mapping canonical identifiers to occurrence counts.
//!
//! One table per generation run, mutated exactly once per node in traversal
//! order and discarded afterwards. Collisions here are between non-sibling
//! nodes anywhere in the tree; they are resolved by numeric suffixing and
//! reported, never fatal (sibling collisions, which do abort, are caught
//! upstream before any node reaches this table).

use std::collections::HashMap;

use crate::diagnostics::Diagnostic;

struct Entry {
    /// Number of collisions seen so far; the suffix of the next duplicate.
    count: u32,
    /// Hierarchy path of the node that first claimed the identifier.
    first_seen_path: String,
}

pub struct SymbolTable {
    seen: HashMap<String, Entry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }

    /// Register `identifier` for the node at `path`, returning the finalized
    /// identifier all emitted code must use for that node.
    ///
    /// Unseen identifiers are returned unchanged. A duplicate gets the
    /// incremented occurrence count appended (`Score`, `Score1`, `Score2`,
    /// ...) and pushes a warning naming both hierarchy paths onto
    /// `warnings`. Order-dependent and deterministic by construction.
    pub fn register(
        &mut self,
        identifier: &str,
        path: &str,
        warnings: &mut Vec<Diagnostic>,
    ) -> String {
        match self.seen.get_mut(identifier) {
            Some(entry) => {
                entry.count += 1;
                warnings.push(Diagnostic::global_collision(
                    identifier,
                    path,
                    &entry.first_seen_path,
                ));
                format!("{}{}", identifier, entry.count)
            }
            None => {
                self.seen.insert(
                    identifier.to_string(),
                    Entry {
                        count: 0,
                        first_seen_path: path.to_string(),
                    },
                );
                identifier.to_string()
            }
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

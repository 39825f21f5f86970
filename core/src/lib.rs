//! Core generation pipeline for GUI accessor units.
//!
//! The generator walks a read-only tree of named control nodes and emits one
//! C# source unit per selected root, giving typed, name-based access to every
//! control in that root's hierarchy. The pipeline per node, in provider
//! traversal order: sibling-uniqueness validation, canonical identifier
//! synthesis, symbol-table registration, path-expression construction,
//! emission.
//!
//! The rendering/layout engine that owns the controls is external; it is
//! consumed only through [`tree::TreeProvider`].

pub mod diagnostics;
pub mod emitter;
pub mod errors;
pub mod generator;
pub mod ident;
pub mod pathexpr;
pub mod symbols;
pub mod tree;

pub use diagnostics::{Diagnostic, RelatedInfo, Severity};
pub use emitter::EmitterOptions;
pub use errors::GenerateError;
pub use generator::{Generated, GeneratorOptions, generate_all, generate_root};
pub use tree::{ControlNode, SceneTree, TreeProvider};

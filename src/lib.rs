//! guiaccess - typed accessor generation for GUI control hierarchies
//!
//! # Overview
//!
//! An offline generator that walks a tree of named GUI controls and emits a
//! C# source unit exposing one typed, name-based property per control. The
//! generated class resolves every control once (at construction or on
//! `Refresh()`), so application code never repeats string lookups per frame.
//!
//! # Quick Start
//!
//! ```
//! use bumpalo::Bump;
//! use guiaccess::{GeneratorOptions, SceneTree, generate_root};
//!
//! let arena = Bump::new();
//! let mut tree = SceneTree::new(&arena);
//! let root = tree.add_root("Hud", "Panel", true);
//! let panel = tree.add_child(root, "Status", "Panel", true);
//! tree.add_child(panel, "Fire", "Button", false);
//!
//! let generated = generate_root(&tree, root, &GeneratorOptions::default()).unwrap();
//! assert_eq!(generated.class_name, "HudGuiAccessor");
//! assert!(generated.text.contains("public Button Fire"));
//! ```
//!
//! Fatal conditions (duplicate names among direct siblings) abort with
//! [`GenerateError`] before any output exists; recoverable findings (global
//! identifier collisions, resolved by numeric suffixing) come back as
//! [`Diagnostic`] warnings on the success value.

// Re-export the public API from guiaccess-core
pub use guiaccess_core::{
    ControlNode, Diagnostic, EmitterOptions, GenerateError, Generated, GeneratorOptions,
    RelatedInfo, SceneTree, Severity, TreeProvider, generate_all, generate_root,
};
pub use guiaccess_core::{diagnostics, emitter, errors, generator, ident, pathexpr, symbols, tree};

/// Render a fatal generation error to stderr with miette's report formatting.
pub fn render_error(error: &GenerateError) {
    eprintln!("{:?}", miette::Report::msg(error.to_string()));
}

/// Render non-fatal diagnostics to stderr, one block per finding.
pub fn render_warnings(warnings: &[Diagnostic]) {
    for warning in warnings {
        eprintln!("{warning}");
    }
}

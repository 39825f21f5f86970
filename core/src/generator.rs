//! Run orchestration: drives one ordered traversal per selected root.
//!
//! Each node flows through the same pipeline, in provider order: sibling
//! validation, identifier synthesis, symbol-table registration, path
//! building, emission. All run-scoped state (symbol table, rewrite cache,
//! section buffers) lives in a [`Run`] and is discarded when the run ends.

use crate::diagnostics::Diagnostic;
use crate::emitter::{EmitterOptions, GeneratedUnit};
use crate::errors::GenerateError;
use crate::ident;
use crate::pathexpr::PathBuilder;
use crate::symbols::SymbolTable;
use crate::tree::{ControlNode, TreeProvider};

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    pub emitter: EmitterOptions,
}

/// A successfully generated accessor unit.
#[derive(Debug)]
pub struct Generated {
    /// The full source text, ready to be written to disk in one shot.
    pub text: String,
    /// `<RootIdent>GuiAccessor`.
    pub class_name: String,
    /// Suggested destination file name (`<class_name>.cs`).
    pub file_name: String,
    /// Non-fatal findings, in discovery order (global identifier collisions).
    pub warnings: Vec<Diagnostic>,
}

/// Generate one accessor unit per selected root, in selection order.
///
/// Fails on the first fatal condition with nothing generated; callers must
/// not write partial output.
pub fn generate_all<'a, P: TreeProvider<'a>>(
    provider: &P,
    options: &GeneratorOptions,
) -> Result<Vec<Generated>, GenerateError> {
    provider
        .roots()
        .iter()
        .map(|root| generate_root(provider, root, options))
        .collect()
}

/// Generate the accessor unit for the hierarchy under `root`.
pub fn generate_root<'a, P: TreeProvider<'a>>(
    provider: &P,
    root: &'a ControlNode<'a>,
    options: &GeneratorOptions,
) -> Result<Generated, GenerateError> {
    let nodes = provider.descendants(root);
    match nodes.split_first() {
        Some((first, rest)) if core::ptr::eq(*first, root) => {
            let mut run = Run {
                root,
                symbols: SymbolTable::new(),
                paths: PathBuilder::new(),
                warnings: Vec::new(),
                options,
            };
            run.drive(rest)
        }
        _ => Err(GenerateError::ProviderContract {
            root: root.name().to_string(),
        }),
    }
}

struct Run<'a, 'o> {
    root: &'a ControlNode<'a>,
    symbols: SymbolTable,
    paths: PathBuilder,
    warnings: Vec<Diagnostic>,
    options: &'o GeneratorOptions,
}

impl<'a, 'o> Run<'a, 'o> {
    fn drive(&mut self, rest: &[&'a ControlNode<'a>]) -> Result<Generated, GenerateError> {
        self.validate_siblings(self.root)?;

        let root_ident = ident::canonical(self.root.name());
        // The root claims its identifier like everyone else so later
        // duplicates get suffixed, but the class name itself never does.
        self.symbols
            .register(&root_ident, &self.root.hierarchy_path(), &mut self.warnings);
        let mut unit =
            GeneratedUnit::open(&root_ident, self.root.type_name(), &self.options.emitter);

        for node in rest {
            self.validate_siblings(node)?;

            let canonical = ident::canonical(node.name());
            let final_ident =
                self.symbols
                    .register(&canonical, &node.hierarchy_path(), &mut self.warnings);

            let expr = self.paths.build(node, self.root);
            let field = format!("{final_ident}Value");
            tracing::debug!(expression = %expr, %field, "materialized path expression");
            self.paths.remember(expr.clone(), field);

            unit.push_control(&final_ident, node.type_name(), &expr, node.name());
        }

        let class_name = unit.class_name().to_string();
        Ok(Generated {
            text: unit.finish(),
            file_name: format!("{class_name}.cs"),
            class_name,
            warnings: core::mem::take(&mut self.warnings),
        })
    }

    /// Direct children of a container must have pairwise distinct display
    /// names; name-based lookup cannot tell duplicates apart. Raw names,
    /// direct siblings only, checked before anything under the container is
    /// emitted.
    fn validate_siblings(&self, node: &'a ControlNode<'a>) -> Result<(), GenerateError> {
        if !node.is_container() {
            return Ok(());
        }
        let children = node.children();
        let mut used: Vec<&str> = Vec::with_capacity(children.len());
        for child in children.iter() {
            if used.contains(&child.name()) {
                return Err(GenerateError::SiblingNameCollision {
                    path: format!("{}->{}", node.hierarchy_path(), child.name()),
                    duplicate: child.name().to_string(),
                });
            }
            used.push(child.name());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SceneTree;
    use bumpalo::Bump;
    use pretty_assertions::assert_eq;

    fn options() -> GeneratorOptions {
        GeneratorOptions::default()
    }

    #[test]
    fn emits_one_property_per_node_plus_root() {
        let arena = Bump::new();
        let mut tree = SceneTree::new(&arena);
        let root = tree.add_root("Hud", "Panel", true);
        let panel = tree.add_child(root, "Status", "Panel", true);
        tree.add_child(panel, "Health", "Label", false);
        tree.add_child(panel, "Mana", "Label", false);

        let generated = generate_root(&tree, root, &options()).unwrap();
        assert!(generated.warnings.is_empty());
        assert_eq!(generated.class_name, "HudGuiAccessor");
        assert_eq!(generated.file_name, "HudGuiAccessor.cs");

        // one getter per discovered node plus the root itself
        assert!(generated.text.contains("public Panel Hud"));
        assert!(generated.text.contains("public Panel Status"));
        assert!(generated.text.contains("public Label Health"));
        assert!(generated.text.contains("public Label Mana"));
    }

    #[test]
    fn nested_lookup_collapses_to_cached_field() {
        let arena = Bump::new();
        let mut tree = SceneTree::new(&arena);
        let root = tree.add_root("Root", "Panel", true);
        let panel = tree.add_child(root, "Panel", "Panel", true);
        tree.add_child(panel, "Fire", "Button", false);

        let generated = generate_root(&tree, root, &options()).unwrap();
        assert!(
            generated
                .text
                .contains("PanelValue = root.FindControl<Panel>(\"Panel\");")
        );
        assert!(
            generated
                .text
                .contains("FireValue = PanelValue.FindControl<Button>(\"Fire\");")
        );
    }

    #[test]
    fn sibling_collision_aborts_with_path() {
        let arena = Bump::new();
        let mut tree = SceneTree::new(&arena);
        let root = tree.add_root("Root", "Panel", true);
        tree.add_child(root, "Item", "Button", false);
        tree.add_child(root, "Item", "Button", false);

        let err = generate_root(&tree, root, &options()).unwrap_err();
        match err {
            GenerateError::SiblingNameCollision { path, duplicate } => {
                assert_eq!(path, "Root->Item");
                assert_eq!(duplicate, "Item");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sibling_collision_checked_per_container_only() {
        // same name under different containers is a global collision
        // (warning), not a sibling collision (fatal)
        let arena = Bump::new();
        let mut tree = SceneTree::new(&arena);
        let root = tree.add_root("Root", "Panel", true);
        let left = tree.add_child(root, "Left", "Panel", true);
        let right = tree.add_child(root, "Right", "Panel", true);
        tree.add_child(left, "Score", "Label", false);
        tree.add_child(right, "Score", "Label", false);

        let generated = generate_root(&tree, root, &options()).unwrap();
        assert_eq!(generated.warnings.len(), 1);
        assert!(generated.text.contains("public Label Score\n"));
        assert!(generated.text.contains("public Label Score1\n"));
    }

    #[test]
    fn global_collision_is_order_dependent_and_deterministic() {
        let arena = Bump::new();
        let mut tree = SceneTree::new(&arena);
        let root = tree.add_root("Root", "Panel", true);
        let hud = tree.add_child(root, "Hud", "Panel", true);
        tree.add_child(hud, "Score", "Label", false);
        tree.add_child(root, "score", "Label", false);

        let generated = generate_root(&tree, root, &options()).unwrap();
        // traversal order: Hud subtree first, so Root->Hud->Score wins the
        // bare identifier and Root->score gets the suffix
        assert!(
            generated
                .text
                .contains("ScoreValue = HudValue.FindControl<Label>(\"Score\");")
        );
        assert!(
            generated
                .text
                .contains("Score1Value = root.FindControl<Label>(\"score\");")
        );

        let warning = &generated.warnings[0];
        assert_eq!(warning.path, "Root->score");
        assert_eq!(warning.related[0].path, "Root->Hud->Score");
    }

    #[test]
    fn rerun_is_byte_identical() {
        let arena = Bump::new();
        let mut tree = SceneTree::new(&arena);
        let root = tree.add_root("Root", "Panel", true);
        let panel = tree.add_child(root, "Panel", "Panel", true);
        tree.add_child(panel, "Fire", "Button", false);
        tree.add_child(panel, "Reload", "Button", false);

        let first = generate_root(&tree, root, &options()).unwrap();
        let second = generate_root(&tree, root, &options()).unwrap();
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn generate_all_follows_selection_order() {
        let arena = Bump::new();
        let mut tree = SceneTree::new(&arena);
        let menu = tree.add_root("Menu", "Panel", true);
        tree.add_child(menu, "Play", "Button", false);
        let hud = tree.add_root("Hud", "Panel", true);
        tree.add_child(hud, "Score", "Label", false);

        let generated = generate_all(&tree, &options()).unwrap();
        assert_eq!(generated.len(), 2);
        assert_eq!(generated[0].class_name, "MenuGuiAccessor");
        assert_eq!(generated[1].class_name, "HudGuiAccessor");
    }

    #[test]
    fn deep_duplicate_container_aborts_with_full_path() {
        let arena = Bump::new();
        let mut tree = SceneTree::new(&arena);
        let root = tree.add_root("Root", "Panel", true);
        let inner = tree.add_child(root, "Inner", "Panel", true);
        tree.add_child(inner, "Slot", "Button", false);
        tree.add_child(inner, "Slot", "Button", false);

        let err = generate_root(&tree, root, &options()).unwrap_err();
        assert!(err.to_string().contains("Root->Inner->Slot"));
    }
}

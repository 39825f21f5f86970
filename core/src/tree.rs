//! Arena-backed control tree and the provider contract.
//!
//! Control nodes are allocated in a [`bumpalo::Bump`] owned by the caller and
//! linked by `&'a` references, so parent chains and child lists never need
//! reference counting. Links are interior-mutable because a node's parent is
//! only known once it is attached to the tree.

use core::cell::{Cell, Ref, RefCell};

use bumpalo::Bump;

/// One addressable element of the GUI hierarchy (a panel, a button, ...).
///
/// Read-only to the generator. `children` is populated and inspected only for
/// container nodes; every parent chain terminates at exactly one root within
/// a generation run.
pub struct ControlNode<'a> {
    name: &'a str,
    type_name: &'a str,
    container: bool,
    parent: Cell<Option<&'a ControlNode<'a>>>,
    children: RefCell<Vec<&'a ControlNode<'a>>>,
}

impl<'a> ControlNode<'a> {
    /// Display name as authored in the scene.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Concrete control type tag (e.g. `Button`), used verbatim in emitted
    /// lookup expressions and property types.
    pub fn type_name(&self) -> &'a str {
        self.type_name
    }

    /// Whether this node may hold children. Sibling-uniqueness validation
    /// runs only on containers.
    pub fn is_container(&self) -> bool {
        self.container
    }

    pub fn parent(&self) -> Option<&'a ControlNode<'a>> {
        self.parent.get()
    }

    /// Direct children in attachment order.
    pub fn children(&self) -> Ref<'_, Vec<&'a ControlNode<'a>>> {
        self.children.borrow()
    }

    /// Full hierarchy path from the tree root down to this node, segments
    /// joined with `->`. Used as the "source location" of every diagnostic.
    pub fn hierarchy_path(&self) -> String {
        let mut segments = vec![self.name];
        let mut current = self.parent.get();
        while let Some(node) = current {
            segments.push(node.name);
            current = node.parent.get();
        }
        segments.reverse();
        segments.join("->")
    }
}

/// Source of control trees for one generation run.
///
/// Traversal order is part of this contract, not an incidental property: the
/// path-expression rewrite cache is keyed by insertion order, so
/// [`TreeProvider::descendants`] must yield a stable order with the root
/// first, each subtree before its following siblings. Reordering changes the
/// emitted text.
pub trait TreeProvider<'a> {
    /// Selected roots, in selection order.
    fn roots(&self) -> &[&'a ControlNode<'a>];

    /// All control descendants of `root` including `root` itself, root
    /// first, depth-first in child attachment order.
    fn descendants(&self, root: &'a ControlNode<'a>) -> Vec<&'a ControlNode<'a>>;
}

/// Concrete in-memory tree, built by the invoking environment (the CLI's
/// scene loader, or tests) and handed to the generator.
pub struct SceneTree<'a> {
    arena: &'a Bump,
    roots: Vec<&'a ControlNode<'a>>,
}

impl<'a> SceneTree<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self {
            arena,
            roots: Vec::new(),
        }
    }

    fn alloc(&self, name: &str, type_name: &str, container: bool) -> &'a ControlNode<'a> {
        self.arena.alloc(ControlNode {
            name: self.arena.alloc_str(name),
            type_name: self.arena.alloc_str(type_name),
            container,
            parent: Cell::new(None),
            children: RefCell::new(Vec::new()),
        })
    }

    /// Add a new root control to the selection.
    pub fn add_root(&mut self, name: &str, type_name: &str, container: bool) -> &'a ControlNode<'a> {
        let node = self.alloc(name, type_name, container);
        self.roots.push(node);
        node
    }

    /// Attach a new child under `parent`, in order.
    pub fn add_child(
        &mut self,
        parent: &'a ControlNode<'a>,
        name: &str,
        type_name: &str,
        container: bool,
    ) -> &'a ControlNode<'a> {
        let node = self.alloc(name, type_name, container);
        node.parent.set(Some(parent));
        parent.children.borrow_mut().push(node);
        node
    }
}

impl<'a> TreeProvider<'a> for SceneTree<'a> {
    fn roots(&self) -> &[&'a ControlNode<'a>] {
        &self.roots
    }

    fn descendants(&self, root: &'a ControlNode<'a>) -> Vec<&'a ControlNode<'a>> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            out.push(node);
            // push in reverse so children are visited in attachment order
            for child in node.children.borrow().iter().rev() {
                stack.push(child);
            }
        }
        out
    }
}

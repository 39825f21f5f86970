//! Chained lookup expressions and the rewrite cache.
//!
//! The raw expression for a node is its parent's expression plus one
//! `.FindControl<Type>("Name")` step, rooted at the literal `root`. Once a
//! node's value has been materialized into a field, later expressions that
//! contain its full expression as a substring are rewritten to reference the
//! field instead, collapsing nested lookups.

use crate::tree::ControlNode;

/// Per-run expression builder. The cache is insertion-ordered because
/// rewriting scans it front to back; reordering would change the emitted
/// text, so a plain `Vec` carries the determinism contract.
pub struct PathBuilder {
    cache: Vec<(String, String)>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { cache: Vec::new() }
    }

    /// Build the finalized lookup expression for `node`, rewriting against
    /// everything cached so far. Idempotent for a fixed cache state.
    pub fn build<'a>(&self, node: &ControlNode<'a>, root: &ControlNode<'a>) -> String {
        let mut expr = raw_expression(node, root);
        // keep replacing until no cached expression appears as a substring;
        // replacements insert field names, which never contain lookup steps,
        // so this terminates
        let mut replaced = true;
        while replaced {
            replaced = false;
            for (prefix, field) in &self.cache {
                if expr.contains(prefix.as_str()) {
                    expr = expr.replace(prefix.as_str(), field);
                    replaced = true;
                }
            }
        }
        expr
    }

    /// Record that `expression` is now held by `field`, for rewriting in
    /// later nodes.
    pub fn remember(&mut self, expression: String, field: String) {
        self.cache.push((expression, field));
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn raw_expression<'a>(node: &ControlNode<'a>, root: &ControlNode<'a>) -> String {
    if core::ptr::eq(node, root) {
        return String::from("root");
    }
    let parent_expr = match node.parent() {
        Some(parent) => raw_expression(parent, root),
        None => String::from("root"),
    };
    format!(
        "{}.FindControl<{}>(\"{}\")",
        parent_expr,
        node.type_name(),
        node.name()
    )
}

//! C# emission for one accessor unit.
//!
//! The unit is accumulated into append-only section buffers as the traversal
//! proceeds (header/constructor, refresh assignments, fields and getters,
//! disposal statements) and concatenated exactly once in
//! [`GeneratedUnit::finish`]. The emitter performs no validation; by the time
//! a node reaches it, sibling uniqueness and identifier uniqueness are
//! settled.

use std::fmt::Write as _;

/// Knobs for the emitted unit.
#[derive(Debug, Clone)]
pub struct EmitterOptions {
    /// Namespaces emitted as `using` lines. The GUI framework namespace of
    /// the consuming project goes here.
    pub imports: Vec<String>,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            imports: vec![String::from("System")],
        }
    }
}

/// One accessor unit under construction. Exclusively owned by a single
/// generation run.
pub struct GeneratedUnit {
    class_name: String,
    root_ident: String,
    root_type: String,
    header: String,
    init: String,
    body: String,
    cleanup: String,
}

// Writing to a String is infallible, so the write! results are discarded.
impl GeneratedUnit {
    /// Start a unit for the root control. `root_ident` is the root's
    /// canonical identifier; it names the class (`<ident>GuiAccessor`), the
    /// root property, and the suggested file name.
    pub fn open(root_ident: &str, root_type: &str, options: &EmitterOptions) -> Self {
        let class_name = format!("{root_ident}GuiAccessor");
        let mut header = String::new();
        let h = &mut header;
        let _ = writeln!(h, "// This file is auto-generated. Do not edit.");
        let _ = writeln!(
            h,
            "// Resolve controls during initialization only; per-frame lookups are wasted work."
        );
        for import in &options.imports {
            let _ = writeln!(h, "using {import};");
        }
        let _ = writeln!(h);
        let _ = writeln!(h, "public class {class_name}");
        let _ = writeln!(h, "{{");
        let _ = writeln!(h, "    private {root_type} root;");
        let _ = writeln!(h);
        let _ = writeln!(h, "    public {class_name}({root_type} root)");
        let _ = writeln!(h, "    {{");
        let _ = writeln!(h, "        if (root == null)");
        let _ = writeln!(
            h,
            "            throw new Exception(\"Root cannot be null: {class_name}\");"
        );
        let _ = writeln!(h, "        this.root = root;");
        let _ = writeln!(h, "        Refresh();");
        let _ = writeln!(h, "    }}");
        let _ = writeln!(h);
        let _ = writeln!(h, "    public void Refresh()");
        let _ = writeln!(h, "    {{");
        Self {
            class_name,
            root_ident: root_ident.to_string(),
            root_type: root_type.to_string(),
            header,
            init: String::new(),
            body: String::new(),
            cleanup: String::new(),
        }
    }

    /// Append one non-root control: a refresh assignment with its not-found
    /// check, a private field, a typed getter, and a disposal statement.
    pub fn push_control(
        &mut self,
        final_ident: &str,
        type_name: &str,
        path_expr: &str,
        display_name: &str,
    ) {
        let _ = writeln!(self.init, "        {final_ident}Value = {path_expr};");
        let _ = writeln!(self.init, "        if ({final_ident}Value == null)");
        let _ = writeln!(
            self.init,
            "            throw new Exception(\"Could not find control named '{display_name}'; \
             the hierarchy has changed, regenerate this accessor.\");"
        );

        let _ = writeln!(self.body, "    private {type_name} {final_ident}Value;");
        let _ = writeln!(self.body);
        let _ = writeln!(self.body, "    public {type_name} {final_ident}");
        let _ = writeln!(self.body, "    {{");
        let _ = writeln!(self.body, "        get {{ return {final_ident}Value; }}");
        let _ = writeln!(self.body, "    }}");
        let _ = writeln!(self.body);

        let _ = writeln!(self.cleanup, "        {final_ident}Value = null;");
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Concatenate all sections into the final source text.
    pub fn finish(self) -> String {
        let mut out = self.header;
        out.push_str(&self.init);
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out);
        let _ = writeln!(out, "    public {} {}", self.root_type, self.root_ident);
        let _ = writeln!(out, "    {{");
        let _ = writeln!(out, "        get {{ return root; }}");
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out);
        out.push_str(&self.body);
        let _ = writeln!(out, "    public bool IsLoaded");
        let _ = writeln!(out, "    {{");
        let _ = writeln!(out, "        get {{ return root != null; }}");
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out);
        let _ = writeln!(out, "    public void Dispose()");
        let _ = writeln!(out, "    {{");
        out.push_str(&self.cleanup);
        let _ = writeln!(out, "        root = null;");
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out, "}}");
        out
    }
}

//! Non-fatal diagnostics surfaced alongside a successful generation run.
//!
//! Fatal conditions are [`crate::errors::GenerateError`]; everything
//! recoverable travels as a `Diagnostic` in the success value. Hierarchy
//! paths play the role source spans play in a compiler: they are the only
//! locations this tool has.

use core::fmt;

/// A diagnostic message with the hierarchy path it applies to.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Hierarchy path of the node the diagnostic is about.
    pub path: String,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional code (e.g. "W001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Related information for a diagnostic (e.g. "first registered here").
#[derive(Debug, Clone)]
pub struct RelatedInfo {
    /// Hierarchy path of the related node.
    pub path: String,

    /// Message explaining the relevance.
    pub message: String,
}

impl Diagnostic {
    /// Warning for two non-sibling nodes resolving to the same canonical
    /// identifier. Names both hierarchy paths; the collision is resolved by
    /// numeric suffixing and never aborts the run.
    pub fn global_collision(identifier: &str, path: &str, first_seen_path: &str) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: format!(
                "two or more controls share the canonical identifier '{}'",
                identifier
            ),
            path: path.to_string(),
            related: vec![RelatedInfo {
                path: first_seen_path.to_string(),
                message: format!("'{}' first registered here", identifier),
            }],
            help: Some(String::from(
                "rename one of the controls; the later one was suffixed with its occurrence count",
            )),
            code: Some(String::from("W001")),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (at {})", self.severity, self.message, self.path)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        for related in &self.related {
            write!(f, "\n  {} (at {})", related.message, related.path)?;
        }
        if let Some(ref help) = self.help {
            write!(f, "\nhelp: {}", help)?;
        }
        Ok(())
    }
}

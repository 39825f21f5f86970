//! Fatal generation errors.
//!
//! Every variant halts the run with no output written; recoverable findings
//! are [`crate::diagnostics::Diagnostic`] values instead. The generated C#
//! has its own runtime failures (null root at construction, control not found
//! at refresh) which exist only inside the emitted unit, not here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Two direct children of one container share a display name. Checked on
    /// raw display names before any synthesis, per container only.
    #[error(
        "two controls share the name '{duplicate}' in the same container: {path} \
         (rename one of them; name-based lookup cannot tell them apart)"
    )]
    SiblingNameCollision {
        /// Hierarchy path of the conflict: container path plus the duplicated
        /// name as the final segment (e.g. `Root->Item`).
        path: String,
        duplicate: String,
    },

    /// The provider broke its traversal contract (empty sequence, or a first
    /// node that is not the requested root).
    #[error("tree provider returned an invalid traversal for root '{root}'")]
    ProviderContract { root: String },
}

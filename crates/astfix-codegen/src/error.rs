//! Reconstruction errors.

/// Errors that abort a render.
///
/// Each variant is a gap between the generic tree and the concrete grammar
/// the reconstructor covers. No partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A type annotation other than the supported keyword types.
    #[error("Unsupported type: {kind}")]
    UnsupportedType {
        /// Kind of the offending type node.
        kind: String,
    },

    /// An initializer that is not a supported literal.
    #[error("Unsupported literal: {kind}")]
    UnsupportedLiteral {
        /// Kind of the offending literal node.
        kind: String,
    },

    /// A required positional child is absent or builds to nothing.
    #[error("{parent} is missing its {role}")]
    MissingChild {
        /// Kind of the node with the missing child.
        parent: String,
        /// Which child was expected (e.g. "left operand").
        role: &'static str,
    },

    /// A child built to the wrong kind of construct.
    #[error("{parent} expected {expected} but found {found}")]
    UnexpectedNode {
        /// Kind of the parent node.
        parent: String,
        /// What the parent needs in that position.
        expected: &'static str,
        /// Kind of the child actually present.
        found: String,
    },
}

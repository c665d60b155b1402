use crate::ast::{BinaryOperator, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a tree.
pub enum RuntimeError {
    /// Arithmetic operation overflowed.
    Overflow {
        /// The operator being applied.
        op:    BinaryOperator,
        /// Left operand.
        left:  i64,
        /// Right operand.
        right: i64,
    },
    /// A dispatch table had no handler registered for a node kind.
    MissingHandler {
        /// The kind that could not be dispatched.
        kind: NodeKind,
    },
    /// A handler was given a node of a kind it does not render.
    HandlerMismatch {
        /// The kind the handler is written for.
        expected: NodeKind,
        /// The kind it received.
        found:    NodeKind,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { op, left, right } => write!(f,
                                                         "Error: Integer overflow while computing {left} {op} {right}."),
            Self::MissingHandler { kind } => {
                write!(f, "Error: No handler registered for {kind:?} nodes.")
            },
            Self::HandlerMismatch { expected, found } => write!(f,
                                                                "Error: Handler for {expected:?} nodes was given a {found:?} node."),
        }
    }
}

impl std::error::Error for RuntimeError {}

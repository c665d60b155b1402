use crate::interpreter::parser::MAX_NESTING;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
///
/// Positions are byte offsets into the source expression.
pub enum ParseError {
    /// The input, or a parenthesized group, contained no operand at all.
    EmptyExpression {
        /// Offset at which the empty group starts.
        position: usize,
    },
    /// A parenthesis has no partner.
    UnbalancedParentheses {
        /// Offset of the unmatched parenthesis.
        position: usize,
    },
    /// An operator was found without an operand on one of its sides.
    MissingOperand {
        /// The operator symbol.
        operator: String,
        /// Offset of the operator.
        position: usize,
    },
    /// Two operands were found with no operator between them.
    MissingOperator {
        /// Offset of the second operand.
        position: usize,
    },
    /// A third operand appeared at a level that already holds two.
    UnexpectedOperand {
        /// Text of the extra operand.
        token:    String,
        /// Offset of the extra operand.
        position: usize,
    },
    /// Parenthesized groups nest deeper than the parser accepts.
    NestingTooDeep {
        /// Offset of the first parenthesis past the limit.
        position: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The literal's digits.
        literal:  String,
        /// Offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Gets the source offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EmptyExpression { position }
            | Self::UnbalancedParentheses { position }
            | Self::MissingOperand { position, .. }
            | Self::MissingOperator { position }
            | Self::UnexpectedOperand { position, .. }
            | Self::NestingTooDeep { position }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression { position } => {
                write!(f, "Error at offset {position}: Expression is empty.")
            },

            Self::UnbalancedParentheses { position } => write!(f,
                                                                "Error at offset {position}: Parenthesis has no matching partner."),

            Self::MissingOperand { operator, position } => write!(f,
                                                                   "Error at offset {position}: Operator '{operator}' is missing an operand."),

            Self::MissingOperator { position } => write!(f,
                                                          "Error at offset {position}: Expected an operator between two operands."),

            Self::UnexpectedOperand { token, position } => write!(f,
                                                                   "Error at offset {position}: Unexpected operand {token}. Only one operator is allowed per parenthesized group."),

            Self::NestingTooDeep { position } => write!(f,
                                                         "Error at offset {position}: Parentheses are nested more than {MAX_NESTING} levels deep."),

            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at offset {position}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

use std::ops::Range;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::group::pair_parentheses,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesized nesting the parser accepts.
///
/// Bounds the recursion of the parser and of every traversal over a parsed
/// tree.
pub const MAX_NESTING: usize = 256;

/// How the parser pairs an opening parenthesis with a closing one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ParenMatching {
    /// Depth-aware: the partner is where the nesting depth returns to zero.
    #[default]
    Balanced,
    /// The first `)` after the opening one, regardless of nesting. Stray
    /// closing parentheses are ignored in this mode.
    FirstClosing,
}

/// Recursive-descent parser producing an [`Expr`] tree.
///
/// Each parenthesized group is parsed by a recursive call over the token
/// sub-range strictly between its parentheses. One call accumulates exactly
/// one binary operation; chains like `1+2+3` need explicit grouping.
#[derive(Debug, Copy, Clone, Default)]
pub struct Parser {
    /// Parenthesis matching mode.
    pub matching: ParenMatching,
}

/// The binary node of one group while its tokens are still being read.
///
/// Each slot keeps the source offset of what filled it for error reporting.
#[derive(Default)]
struct PendingBinary {
    op:    Option<(BinaryOperator, usize)>,
    left:  Option<Expr>,
    right: Option<(Expr, usize)>,
}

impl PendingBinary {
    /// Places an operand in the first empty slot.
    fn push_operand(&mut self, operand: Expr, token: &Token) -> ParseResult<()> {
        if self.left.is_none() {
            self.left = Some(operand);
        } else if self.right.is_none() {
            self.right = Some((operand, token.position()));
        } else {
            return Err(ParseError::UnexpectedOperand { token:    token.text.clone(),
                                                       position: token.position(), });
        }
        Ok(())
    }

    /// The last operator seen wins.
    fn set_operator(&mut self, op: BinaryOperator, token: &Token) {
        self.op = Some((op, token.position()));
    }

    /// Turns the accumulated slots into a complete expression.
    ///
    /// A lone operand without an operator is returned unchanged, so `(5)`
    /// parses as `5`.
    fn finish(self, start: usize) -> ParseResult<Expr> {
        match (self.op, self.left, self.right) {
            (None, None, None) => Err(ParseError::EmptyExpression { position: start }),
            (None, Some(operand), None) => Ok(operand),
            (None, _, Some((_, position))) => Err(ParseError::MissingOperator { position }),
            (Some((op, _)), Some(left), Some((right, _))) => Ok(Expr::binary(op, left, right)),
            (Some((op, position)), ..) => Err(ParseError::MissingOperand { operator: op.to_string(),
                                                                           position }),
        }
    }
}

impl Parser {
    /// Creates a parser with the given parenthesis matching mode.
    #[must_use]
    pub const fn new(matching: ParenMatching) -> Self {
        Self { matching }
    }

    /// Tokenizes and parses an expression string.
    ///
    /// # Parameters
    /// - `source`: The expression text.
    ///
    /// # Returns
    /// The complete expression tree.
    ///
    /// # Errors
    /// See [`Parser::parse_tokens`].
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::parser::{ParenMatching, Parser};
    ///
    /// let parser = Parser::new(ParenMatching::Balanced);
    /// let expr = parser.parse("(10+2)-(22-99)").unwrap();
    ///
    /// assert_eq!(expr.value().unwrap(), 89);
    /// ```
    pub fn parse(&self, source: &str) -> ParseResult<Expr> {
        self.parse_tokens(&tokenize(source))
    }

    /// Parses a token sequence into an expression tree.
    ///
    /// Tokens are read left to right into one pending binary node. Integers
    /// fill the left slot, then the right one. `+` and `-` set the operator.
    /// An opening parenthesis is matched with its closing partner and the
    /// tokens between them are parsed recursively into one operand.
    ///
    /// # Parameters
    /// - `tokens`: Tokens produced by [`tokenize`].
    ///
    /// # Returns
    /// The complete expression tree.
    ///
    /// # Errors
    /// - `EmptyExpression` if the input or a group holds no operand.
    /// - `UnbalancedParentheses` if a parenthesis has no partner.
    /// - `MissingOperand` if an operator lacks one of its operands.
    /// - `MissingOperator` if two operands have no operator between them.
    /// - `UnexpectedOperand` if a group holds more than two operands.
    /// - `LiteralTooLarge` if an integer does not fit in `i64`.
    /// - `NestingTooDeep` if groups nest more than [`MAX_NESTING`] levels.
    pub fn parse_tokens(&self, tokens: &[Token]) -> ParseResult<Expr> {
        let partners = pair_parentheses(tokens, self.matching);
        self.parse_group(tokens, &partners, 0..tokens.len(), 0, 0)
    }

    /// Parses the tokens in `range` as one group.
    ///
    /// `start` is the source offset where the group's contents begin and
    /// `depth` the number of enclosing groups.
    fn parse_group(&self,
                   tokens: &[Token],
                   partners: &[Option<usize>],
                   range: Range<usize>,
                   start: usize,
                   depth: usize)
                   -> ParseResult<Expr> {
        let mut pending = PendingBinary::default();
        let end = range.end;
        let mut index = range.start;

        while index < end {
            let token = &tokens[index];
            match token.kind {
                TokenKind::Integer => pending.push_operand(parse_literal(token)?, token)?,
                TokenKind::Plus => pending.set_operator(BinaryOperator::Add, token),
                TokenKind::Minus => pending.set_operator(BinaryOperator::Sub, token),
                TokenKind::LParen => {
                    if depth >= MAX_NESTING {
                        return Err(ParseError::NestingTooDeep { position: token.position() });
                    }
                    // A partner past the end of this group belongs to an outer one.
                    let close = partners[index].filter(|&close| close < end)
                                               .ok_or(ParseError::UnbalancedParentheses {
                                                   position: token.position(),
                                               })?;
                    let inner = self.parse_group(tokens,
                                                 partners,
                                                 index + 1..close,
                                                 token.span.end,
                                                 depth + 1)?;
                    pending.push_operand(inner, token)?;
                    index = close;
                },
                TokenKind::RParen => {
                    if self.matching == ParenMatching::Balanced {
                        return Err(ParseError::UnbalancedParentheses { position: token.position() });
                    }
                },
            }
            index += 1;
        }

        pending.finish(start)
    }
}

/// Converts an `Integer` token into a literal node.
fn parse_literal(token: &Token) -> ParseResult<Expr> {
    token.text
         .parse()
         .map(Expr::literal)
         .map_err(|_| ParseError::LiteralTooLarge { literal:  token.text.clone(),
                                                    position: token.position(), })
}

/// Parses an expression string with the default, depth-aware parser.
///
/// # Errors
/// See [`Parser::parse_tokens`].
///
/// # Example
/// ```
/// use exprtree::interpreter::parser::parse;
///
/// assert_eq!(parse("100-100").unwrap().value().unwrap(), 0);
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    Parser::default().parse(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator::{Add, Sub};

    fn lit(value: i64) -> Expr {
        Expr::literal(value)
    }

    #[test]
    fn seed_tree_shape() {
        let expected = Expr::binary(Sub,
                                    Expr::binary(Add, lit(10), lit(2)),
                                    Expr::binary(Sub, lit(22), lit(99)));
        assert_eq!(parse("(10+2)-(22-99)").unwrap(), expected);
    }

    #[test]
    fn single_level_operations() {
        assert_eq!(parse("0+0").unwrap(), Expr::binary(Add, lit(0), lit(0)));
        assert_eq!(parse("100-100").unwrap(), Expr::binary(Sub, lit(100), lit(100)));
    }

    #[test]
    fn lone_operand_collapses() {
        assert_eq!(parse("5").unwrap(), lit(5));
        assert_eq!(parse("((5))").unwrap(), lit(5));
    }

    #[test]
    fn nested_groups_with_balanced_matching() {
        let expected = Expr::binary(Add,
                                    Expr::binary(Sub, lit(1), Expr::binary(Add, lit(2), lit(3))),
                                    lit(4));
        assert_eq!(parse("(1-(2+3))+4").unwrap(), expected);
    }

    #[test]
    fn nested_groups_with_first_closing_matching() {
        let parser = Parser::new(ParenMatching::FirstClosing);
        assert_eq!(parser.parse("((1+2)-3)"),
                   Err(ParseError::UnbalancedParentheses { position: 1 }));
        assert_eq!(parser.parse("(10+2)-(22-99)").unwrap().value().unwrap(), 89);
    }

    #[test]
    fn first_closing_ignores_stray_closing_parens() {
        let parser = Parser::new(ParenMatching::FirstClosing);
        assert_eq!(parser.parse("1+2)").unwrap(), Expr::binary(Add, lit(1), lit(2)));
    }

    #[test]
    fn last_operator_wins() {
        assert_eq!(parse("1+-2").unwrap(), Expr::binary(Sub, lit(1), lit(2)));
    }

    #[test]
    fn unknown_characters_are_ignored() {
        assert_eq!(parse(" 7 x+ y3 ").unwrap(), Expr::binary(Add, lit(7), lit(3)));
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(parse(""), Err(ParseError::EmptyExpression { position: 0 }));
        assert_eq!(parse("abc"), Err(ParseError::EmptyExpression { position: 0 }));
        assert_eq!(parse("1+()"), Err(ParseError::EmptyExpression { position: 3 }));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(parse("(1+2"), Err(ParseError::UnbalancedParentheses { position: 0 }));
        assert_eq!(parse("1+2)"), Err(ParseError::UnbalancedParentheses { position: 3 }));
        assert_eq!(parse("(1+(2-3)"), Err(ParseError::UnbalancedParentheses { position: 0 }));
    }

    #[test]
    fn missing_operator_between_operands() {
        assert_eq!(parse("1 2"), Err(ParseError::MissingOperator { position: 2 }));
    }

    #[test]
    fn missing_operand() {
        assert_eq!(parse("1+"),
                   Err(ParseError::MissingOperand { operator: "+".to_string(),
                                                    position: 1, }));
        assert_eq!(parse("-4"),
                   Err(ParseError::MissingOperand { operator: "-".to_string(),
                                                    position: 0, }));
    }

    #[test]
    fn chained_operations_need_grouping() {
        assert_eq!(parse("1+2+3"),
                   Err(ParseError::UnexpectedOperand { token:    "3".to_string(),
                                                       position: 4, }));
        assert_eq!(parse("(1+2)+3").unwrap().value().unwrap(), 6);
    }

    #[test]
    fn nesting_limit_is_accepted() {
        let source = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(parse(&source).unwrap(), lit(1));
    }

    #[test]
    fn deep_nesting_is_an_error() {
        let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(parse(&source),
                   Err(ParseError::NestingTooDeep { position: MAX_NESTING }));
    }

    #[test]
    fn deep_chain_is_an_error() {
        let source = format!("{}1{}", "(".repeat(30_000), "+1)".repeat(30_000));
        assert_eq!(parse(&source),
                   Err(ParseError::NestingTooDeep { position: MAX_NESTING }));
        // Every inner group shares the first `)`, so the second group is unclosed.
        assert_eq!(Parser::new(ParenMatching::FirstClosing).parse(&source),
                   Err(ParseError::UnbalancedParentheses { position: 1 }));
    }

    #[test]
    fn literal_too_large() {
        let err = parse("99999999999999999999+1").unwrap_err();
        assert!(matches!(err, ParseError::LiteralTooLarge { position: 0, .. }));
    }
}

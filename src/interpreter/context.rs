use crate::{
    ast::Expr,
    interpreter::{
        evaluator::EvalResult,
        parser::{ParenMatching, ParseResult, Parser},
        visitor::{Strategy, classic, generic, lookup::DispatchTable, switch},
    },
};

/// Stores the state shared by every request.
///
/// ## Usage
///
/// `Context` is created once and reused for parsing, rendering and
/// evaluating any number of expressions. It is only read after creation.
pub struct Context {
    /// The parser configuration.
    pub parser: Parser,
    /// The table used by [`Strategy::Lookup`].
    pub table:  DispatchTable,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context with depth-aware parenthesis matching.
    #[must_use]
    pub fn new() -> Self {
        Self::with_matching(ParenMatching::default())
    }

    /// Creates a context with the given parenthesis matching mode.
    #[must_use]
    pub fn with_matching(matching: ParenMatching) -> Self {
        Self { parser: Parser::new(matching),
               table:  DispatchTable::new(), }
    }

    /// Parses an expression string.
    ///
    /// # Errors
    /// Returns a `ParseError` for malformed input.
    pub fn parse(&self, source: &str) -> ParseResult<Expr> {
        self.parser.parse(source)
    }

    /// Renders `expr` with the chosen strategy.
    ///
    /// # Errors
    /// Only [`Strategy::Lookup`] can fail, if its table lacks a handler.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::{context::Context, visitor::Strategy};
    ///
    /// let context = Context::new();
    /// let expr = context.parse("(1+2)").unwrap();
    ///
    /// for strategy in Strategy::ALL {
    ///     assert_eq!(context.render(&expr, strategy).unwrap(), "(1 + 2)");
    ///     assert_eq!(context.evaluate(&expr, strategy).unwrap(), 3);
    /// }
    /// ```
    pub fn render(&self, expr: &Expr, strategy: Strategy) -> EvalResult<String> {
        match strategy {
            Strategy::Classic => Ok(classic::render(expr)),
            Strategy::Lookup => self.table.render(expr),
            Strategy::Switch => Ok(switch::render(expr)),
            Strategy::Generic => Ok(generic::render(expr)),
        }
    }

    /// Evaluates `expr` with the chosen strategy.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if the computation overflowed.
    pub fn evaluate(&self, expr: &Expr, strategy: Strategy) -> EvalResult<i64> {
        match strategy {
            Strategy::Classic => classic::evaluate(expr),
            Strategy::Lookup => self.table.evaluate(expr),
            Strategy::Switch => switch::evaluate(expr),
            Strategy::Generic => generic::evaluate(expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCES: &[&str] = &["(1+2)", "(10+2)-(22-99)", "0+0", "100-100", "7", "(3-(4-(5+6)))"];

    #[test]
    fn strategies_agree() {
        let context = Context::new();
        for source in SOURCES {
            let expr = context.parse(source).unwrap();
            let expected_text = switch::render(&expr);
            let expected_value = expr.value().unwrap();
            for strategy in Strategy::ALL {
                assert_eq!(context.render(&expr, strategy).unwrap(), expected_text, "{strategy}");
                assert_eq!(context.evaluate(&expr, strategy).unwrap(),
                           expected_value,
                           "{strategy}");
            }
        }
    }

    #[test]
    fn matching_mode_is_used() {
        let context = Context::with_matching(ParenMatching::FirstClosing);
        assert!(context.parse("((1+2)-3)").is_err());
        assert!(Context::new().parse("((1+2)-3)").is_ok());
    }

    #[test]
    fn context_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Context>();
        assert_sync::<Expr>();
    }
}

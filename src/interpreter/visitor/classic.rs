use crate::{
    ast::{Binary, Expr, Literal},
    interpreter::evaluator::EvalResult,
};

/// A visitor with one method per node kind.
///
/// Nodes pick the method through [`Expr::accept`], so adding a node kind
/// means adding a method here and to every implementor.
pub trait ExpressionVisitor {
    /// Called for a literal node.
    fn visit_literal(&mut self, literal: &Literal);
    /// Called for a binary node. Implementations recurse into the children
    /// through their `accept` methods.
    fn visit_binary(&mut self, binary: &Binary);
}

impl Literal {
    /// Dispatches to [`ExpressionVisitor::visit_literal`].
    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_literal(self);
    }
}

impl Binary {
    /// Dispatches to [`ExpressionVisitor::visit_binary`].
    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_binary(self);
    }
}

impl Expr {
    /// Forwards the visitor to the node held by this variant.
    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::Literal(literal) => literal.accept(visitor),
            Self::Binary(binary) => binary.accept(visitor),
        }
    }
}

/// Renders a tree as a fully parenthesized string.
#[derive(Debug, Default)]
pub struct ExpressionPrinter {
    out: String,
}

impl ExpressionPrinter {
    /// Creates a printer with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards everything printed so far.
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Returns the printed text.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

impl ExpressionVisitor for ExpressionPrinter {
    fn visit_literal(&mut self, literal: &Literal) {
        self.out.push_str(&literal.value.to_string());
    }

    fn visit_binary(&mut self, binary: &Binary) {
        self.out.push('(');
        binary.left.accept(self);
        self.out.push_str(&format!(" {} ", binary.op));
        binary.right.accept(self);
        self.out.push(')');
    }
}

/// Computes the value of a tree.
///
/// The result of the last visited node is kept in `result`; a binary node
/// reads it back after each child.
#[derive(Debug)]
pub struct ExpressionCalculator {
    result: EvalResult<i64>,
}

impl Default for ExpressionCalculator {
    fn default() -> Self {
        Self { result: Ok(0) }
    }
}

impl ExpressionCalculator {
    /// Creates a calculator whose result starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of the last visited tree.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if the computation overflowed.
    pub fn finish(self) -> EvalResult<i64> {
        self.result
    }
}

impl ExpressionVisitor for ExpressionCalculator {
    fn visit_literal(&mut self, literal: &Literal) {
        self.result = Ok(literal.value);
    }

    fn visit_binary(&mut self, binary: &Binary) {
        binary.left.accept(self);
        let Ok(left) = self.result else { return };
        binary.right.accept(self);
        let Ok(right) = self.result else { return };
        self.result = binary.op.apply(left, right);
    }
}

/// Renders `expr` with an [`ExpressionPrinter`].
///
/// # Example
/// ```
/// use exprtree::interpreter::{parser::parse, visitor::classic};
///
/// let expr = parse("(1+2)").unwrap();
///
/// assert_eq!(classic::render(&expr), "(1 + 2)");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    let mut printer = ExpressionPrinter::new();
    expr.accept(&mut printer);
    printer.finish()
}

/// Evaluates `expr` with an [`ExpressionCalculator`].
///
/// # Errors
/// Returns `RuntimeError::Overflow` if the computation overflowed.
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    let mut calculator = ExpressionCalculator::new();
    expr.accept(&mut calculator);
    calculator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RuntimeError, interpreter::parser::parse};

    /// Records the order in which nodes are visited.
    struct Trace(Vec<String>);

    impl ExpressionVisitor for Trace {
        fn visit_literal(&mut self, literal: &Literal) {
            self.0.push(literal.value.to_string());
        }

        fn visit_binary(&mut self, binary: &Binary) {
            self.0.push(binary.op.to_string());
            binary.left.accept(self);
            binary.right.accept(self);
        }
    }

    #[test]
    fn accept_reaches_kind_specific_methods() {
        let mut trace = Trace(Vec::new());
        parse("(10+2)-(22-99)").unwrap().accept(&mut trace);
        assert_eq!(trace.0, ["-", "+", "10", "2", "-", "22", "99"]);
    }

    #[test]
    fn works_through_trait_objects() {
        let expr = parse("(4-1)").unwrap();
        let mut printer = ExpressionPrinter::new();
        let visitor: &mut dyn ExpressionVisitor = &mut printer;
        expr.accept(visitor);
        assert_eq!(printer.finish(), "(4 - 1)");
    }

    #[test]
    fn printer_clear_restarts_output() {
        let expr = parse("7").unwrap();
        let mut printer = ExpressionPrinter::new();
        expr.accept(&mut printer);
        printer.clear();
        expr.accept(&mut printer);
        assert_eq!(printer.finish(), "7");
    }

    #[test]
    fn calculator_matches_value() {
        let expr = parse("(10+2)-(22-99)").unwrap();
        assert_eq!(evaluate(&expr), Ok(89));
    }

    #[test]
    fn calculator_stops_at_overflow() {
        let expr = parse("(9223372036854775807+1)-5").unwrap();
        assert!(matches!(evaluate(&expr), Err(RuntimeError::Overflow { right: 1, .. })));
    }
}

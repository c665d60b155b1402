use crate::{
    ast::{Binary, Expr, Literal},
    interpreter::evaluator::EvalResult,
};

/// Visits one concrete node type.
///
/// A complete visitor implements this trait once for [`Literal`] and once
/// for [`Binary`]; [`Expr::accept_generic`] requires both, so a visitor that
/// forgets a node type is rejected at compile time.
pub trait Visit<N> {
    /// Handles `node`.
    fn visit(&mut self, node: &N);
}

impl Expr {
    /// Forwards to the `Visit` implementation for this variant's node type.
    pub fn accept_generic<V>(&self, visitor: &mut V)
        where V: Visit<Literal> + Visit<Binary>
    {
        match self {
            Self::Literal(literal) => <V as Visit<Literal>>::visit(visitor, literal),
            Self::Binary(binary) => <V as Visit<Binary>>::visit(visitor, binary),
        }
    }
}

/// Renders a tree as a fully parenthesized string.
#[derive(Debug, Default)]
pub struct GenericPrinter {
    out: String,
}

impl GenericPrinter {
    /// Returns the printed text.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

impl Visit<Literal> for GenericPrinter {
    fn visit(&mut self, node: &Literal) {
        self.out.push_str(&node.value.to_string());
    }
}

impl Visit<Binary> for GenericPrinter {
    fn visit(&mut self, node: &Binary) {
        self.out.push('(');
        node.left.accept_generic(self);
        self.out.push_str(&format!(" {} ", node.op));
        node.right.accept_generic(self);
        self.out.push(')');
    }
}

/// Computes the value of a tree.
#[derive(Debug)]
pub struct GenericCalculator {
    result: EvalResult<i64>,
}

impl Default for GenericCalculator {
    fn default() -> Self {
        Self { result: Ok(0) }
    }
}

impl GenericCalculator {
    /// Returns the value of the last visited tree.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if the computation overflowed.
    pub fn finish(self) -> EvalResult<i64> {
        self.result
    }
}

impl Visit<Literal> for GenericCalculator {
    fn visit(&mut self, node: &Literal) {
        self.result = Ok(node.value);
    }
}

impl Visit<Binary> for GenericCalculator {
    fn visit(&mut self, node: &Binary) {
        node.left.accept_generic(self);
        let Ok(left) = self.result else { return };
        node.right.accept_generic(self);
        let Ok(right) = self.result else { return };
        self.result = node.op.apply(left, right);
    }
}

/// Renders `expr` with a [`GenericPrinter`].
///
/// # Example
/// ```
/// use exprtree::interpreter::{parser::parse, visitor::generic};
///
/// let expr = parse("(1+2)").unwrap();
///
/// assert_eq!(generic::render(&expr), "(1 + 2)");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    let mut printer = GenericPrinter::default();
    expr.accept_generic(&mut printer);
    printer.finish()
}

/// Evaluates `expr` with a [`GenericCalculator`].
///
/// # Errors
/// Returns `RuntimeError::Overflow` if the computation overflowed.
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    let mut calculator = GenericCalculator::default();
    expr.accept_generic(&mut calculator);
    calculator.finish()
}

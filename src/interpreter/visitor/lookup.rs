use std::collections::HashMap;

use crate::{
    ast::{Binary, Expr, Literal, NodeKind},
    error::RuntimeError,
    interpreter::evaluator::EvalResult,
};

/// Renders one node into `out`, recursing through the table for children.
pub type RenderFn = fn(&Expr, &DispatchTable, &mut String) -> EvalResult<()>;
/// Evaluates one node, recursing through the table for children.
pub type EvaluateFn = fn(&Expr, &DispatchTable) -> EvalResult<i64>;

/// The functions registered for one node kind.
#[derive(Clone, Copy)]
pub struct Handlers {
    /// Renders a node of this kind.
    pub render:   RenderFn,
    /// Evaluates a node of this kind.
    pub evaluate: EvaluateFn,
}

/// Maps each [`NodeKind`] to the functions that handle it.
///
/// The table is built once, typically when the program starts, and then
/// passed by reference to every traversal. It is never mutated during a
/// walk, so one table can serve concurrent traversals.
pub struct DispatchTable {
    handlers: HashMap<NodeKind, Handlers>,
}

#[allow(clippy::new_without_default)]
impl DispatchTable {
    /// Creates a table with handlers for every node kind.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self::empty();
        table.register(NodeKind::Literal,
                       Handlers { render:   render_literal,
                                  evaluate: evaluate_literal, });
        table.register(NodeKind::Binary,
                       Handlers { render:   render_binary,
                                  evaluate: evaluate_binary, });
        table
    }

    /// Creates a table with no handlers.
    #[must_use]
    pub fn empty() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Registers the handlers for `kind`, replacing any previous entry.
    pub fn register(&mut self, kind: NodeKind, handlers: Handlers) {
        self.handlers.insert(kind, handlers);
    }

    /// Looks up the handlers for the kind of `expr`.
    fn handlers_for(&self, expr: &Expr) -> EvalResult<Handlers> {
        let kind = expr.kind();
        self.handlers
            .get(&kind)
            .copied()
            .ok_or(RuntimeError::MissingHandler { kind })
    }

    /// Renders `expr` by looking up a handler at every node.
    ///
    /// # Errors
    /// Returns `RuntimeError::MissingHandler` if a node kind has no entry,
    /// or `RuntimeError::HandlerMismatch` if an entry was registered under
    /// the wrong kind.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::{parser::parse, visitor::lookup::DispatchTable};
    ///
    /// let table = DispatchTable::new();
    /// let expr = parse("(10+2)-(22-99)").unwrap();
    ///
    /// assert_eq!(table.render(&expr).unwrap(), "((10 + 2) - (22 - 99))");
    /// ```
    pub fn render(&self, expr: &Expr) -> EvalResult<String> {
        let mut out = String::new();
        self.render_into(expr, &mut out)?;
        Ok(out)
    }

    /// Evaluates `expr` by looking up a handler at every node.
    ///
    /// # Errors
    /// As [`DispatchTable::render`], plus `RuntimeError::Overflow`.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<i64> {
        (self.handlers_for(expr)?.evaluate)(expr, self)
    }

    fn render_into(&self, expr: &Expr, out: &mut String) -> EvalResult<()> {
        (self.handlers_for(expr)?.render)(expr, self, out)
    }
}

fn as_literal(expr: &Expr) -> EvalResult<&Literal> {
    match expr {
        Expr::Literal(literal) => Ok(literal),
        Expr::Binary(_) => Err(RuntimeError::HandlerMismatch { expected: NodeKind::Literal,
                                                               found:    NodeKind::Binary, }),
    }
}

fn as_binary(expr: &Expr) -> EvalResult<&Binary> {
    match expr {
        Expr::Binary(binary) => Ok(binary),
        Expr::Literal(_) => Err(RuntimeError::HandlerMismatch { expected: NodeKind::Binary,
                                                                found:    NodeKind::Literal, }),
    }
}

fn render_literal(expr: &Expr, _: &DispatchTable, out: &mut String) -> EvalResult<()> {
    out.push_str(&as_literal(expr)?.value.to_string());
    Ok(())
}

fn render_binary(expr: &Expr, table: &DispatchTable, out: &mut String) -> EvalResult<()> {
    let binary = as_binary(expr)?;
    out.push('(');
    table.render_into(&binary.left, out)?;
    out.push_str(&format!(" {} ", binary.op));
    table.render_into(&binary.right, out)?;
    out.push(')');
    Ok(())
}

fn evaluate_literal(expr: &Expr, _: &DispatchTable) -> EvalResult<i64> {
    Ok(as_literal(expr)?.value)
}

fn evaluate_binary(expr: &Expr, table: &DispatchTable) -> EvalResult<i64> {
    let binary = as_binary(expr)?;
    binary.op
          .apply(table.evaluate(&binary.left)?, table.evaluate(&binary.right)?)
}

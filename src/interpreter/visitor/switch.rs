use crate::{
    ast::{Binary, Expr, Literal},
    interpreter::evaluator::EvalResult,
};

/// Renders `expr` by matching on its variant at every node.
///
/// # Example
/// ```
/// use exprtree::interpreter::{parser::parse, visitor::switch};
///
/// let expr = parse("(1+2)").unwrap();
///
/// assert_eq!(switch::render(&expr), "(1 + 2)");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    render_into(expr, &mut out);
    out
}

fn render_into(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Literal(Literal { value }) => out.push_str(&value.to_string()),
        Expr::Binary(Binary { op, left, right }) => {
            out.push('(');
            render_into(left, out);
            out.push_str(&format!(" {op} "));
            render_into(right, out);
            out.push(')');
        },
    }
}

/// Evaluates `expr` by matching on its variant at every node.
///
/// # Errors
/// Returns `RuntimeError::Overflow` if the computation overflowed.
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Literal(Literal { value }) => Ok(*value),
        Expr::Binary(Binary { op, left, right }) => op.apply(evaluate(left)?, evaluate(right)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::parse;

    #[test]
    fn leaf_has_no_parentheses() {
        assert_eq!(render(&parse("(((12)))").unwrap()), "12");
    }

    #[test]
    fn subtraction_uses_its_own_symbol() {
        let expr = parse("(10+2)-(22-99)").unwrap();
        assert_eq!(render(&expr), "((10 + 2) - (22 - 99))");
        assert_eq!(evaluate(&expr), Ok(89));
    }
}

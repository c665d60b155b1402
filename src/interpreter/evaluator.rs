use crate::{
    ast::{Binary, BinaryOperator, Expr, Literal},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl BinaryOperator {
    /// Applies the operator to two evaluated operands.
    ///
    /// Arithmetic is checked; a result outside the `i64` range is reported
    /// instead of wrapping.
    ///
    /// # Example
    /// ```
    /// use exprtree::{ast::BinaryOperator, error::RuntimeError};
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(22, 99).unwrap(), -77);
    /// assert!(matches!(BinaryOperator::Add.apply(i64::MAX, 1),
    ///                  Err(RuntimeError::Overflow { .. })));
    /// ```
    pub fn apply(self, left: i64, right: i64) -> EvalResult<i64> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
        };
        result.ok_or(RuntimeError::Overflow { op: self,
                                              left,
                                              right })
    }
}

impl Expr {
    /// Computes the value of the tree.
    ///
    /// Literals yield their value. Binary nodes evaluate both children
    /// bottom-up and apply their operator. Nothing is cached; a tree is
    /// cheap to re-walk.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if an intermediate result does not
    /// fit in `i64`.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::parser::parse;
    ///
    /// let expr = parse("(10+2)-(22-99)").unwrap();
    ///
    /// assert_eq!(expr.value().unwrap(), 89);
    /// ```
    pub fn value(&self) -> EvalResult<i64> {
        match self {
            Self::Literal(Literal { value }) => Ok(*value),
            Self::Binary(Binary { op, left, right }) => op.apply(left.value()?, right.value()?),
        }
    }
}

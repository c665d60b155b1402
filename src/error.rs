/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression: unbalanced parentheses, missing operands or operators, and
/// literals that do not fit the integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a strategy walks an
/// expression tree, such as arithmetic overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Ties the parser and the traversal strategies together.
///
/// The context owns the parser configuration and the dispatch table, which
/// is built once and reused by every request.
pub mod context;
/// The evaluator module computes the value of a tree.
///
/// Provides [`crate::ast::Expr::value`], the direct recursive evaluation,
/// and the checked operator arithmetic shared by every strategy.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// Produces `Integer`, `+`, `-`, `(` and `)` tokens with their source text
/// and position, dropping every other character.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// Parses one binary operation per parenthesized group, recursing into
/// groups over token sub-ranges.
pub mod parser;
/// Interchangeable traversals that print or evaluate a tree.
///
/// Four strategies reach the per-kind code in different ways: a classic
/// visitor, a kind-keyed table, a `match`, and a generic visitor.
pub mod visitor;

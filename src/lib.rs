//! # exprtree
//!
//! exprtree is a small interpreter for parenthesized addition and
//! subtraction expressions written in Rust.
//! It tokenizes and parses an expression into a binary tree, then prints or
//! evaluates that tree with one of several interchangeable traversals.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{context::Context, parser::ParenMatching, visitor::Strategy};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and its node types. The tree is built
/// by the parser and only read afterwards, by the evaluator and by every
/// traversal strategy.
///
/// # Responsibilities
/// - Defines literal and binary nodes and the operator set.
/// - Provides the kind tag used by table-driven dispatch.
/// - Offers an in-order iterator over the nodes of a tree.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating an expression, with the source offset where parsing failed.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches source positions and operands for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates tokenizing, parsing, and traversal.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// traversal strategies, and exposes the context that owns their shared
/// configuration.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for parsing, rendering and evaluating.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Returns the value of an expression.
///
/// The source is tokenized, parsed with the given parenthesis matching mode
/// and evaluated with the classic visitor.
///
/// # Errors
/// Returns an error if parsing fails or the computation overflows.
///
/// # Examples
/// ```
/// use exprtree::{get_result, interpreter::parser::ParenMatching};
///
/// let value = get_result("(10+2)-(22-99)", ParenMatching::Balanced).unwrap();
/// assert_eq!(value, 89);
///
/// // Unbalanced parentheses are rejected.
/// assert!(get_result("(1+2", ParenMatching::Balanced).is_err());
/// ```
pub fn get_result(source: &str, matching: ParenMatching) -> Result<i64, Box<dyn std::error::Error>> {
    let context = Context::with_matching(matching);
    let expr = context.parse(source)?;
    Ok(context.evaluate(&expr, Strategy::default())?)
}

/// Core parsing logic.
///
/// Contains the [`Parser`] entry points, the parenthesis matching mode, and
/// the pending-node accumulation that builds one tree level per token
/// sub-range.
pub mod core;

/// Parenthesis matching.
///
/// Locates the closing partner of an opening parenthesis within a token
/// slice, either depth-aware or by taking the first closing token.
pub mod group;

pub use self::core::{MAX_NESTING, ParenMatching, ParseResult, Parser, parse};

use crate::interpreter::{
    lexer::{Token, TokenKind},
    parser::core::ParenMatching,
};

/// Pairs every opening parenthesis with its closing partner in one pass.
///
/// With [`ParenMatching::Balanced`] a stack of open groups is kept, so each
/// `(` is paired with the `)` that returns the depth to its level. With
/// [`ParenMatching::FirstClosing`] each `(` is paired with the first `)` that
/// follows it, whatever the nesting.
///
/// # Parameters
/// - `tokens`: The whole token sequence of one parse.
/// - `matching`: The pairing mode.
///
/// # Returns
/// One entry per token. The entry of an opening parenthesis holds the index
/// of its partner, or `None` if it is never closed; every other entry is
/// `None`.
///
/// # Example
/// ```
/// use exprtree::interpreter::{
///     lexer::tokenize,
///     parser::{ParenMatching, group::pair_parentheses},
/// };
///
/// let tokens = tokenize("((1+2)-3)");
///
/// assert_eq!(pair_parentheses(&tokens, ParenMatching::Balanced)[0], Some(8));
/// assert_eq!(pair_parentheses(&tokens, ParenMatching::FirstClosing)[0], Some(5));
/// ```
#[must_use]
pub fn pair_parentheses(tokens: &[Token], matching: ParenMatching) -> Vec<Option<usize>> {
    let mut partners = vec![None; tokens.len()];

    match matching {
        ParenMatching::Balanced => {
            let mut open = Vec::new();
            for (index, token) in tokens.iter().enumerate() {
                match token.kind {
                    TokenKind::LParen => open.push(index),
                    // A `)` with nothing open is left for the parser to report.
                    TokenKind::RParen => {
                        if let Some(start) = open.pop() {
                            partners[start] = Some(index);
                        }
                    },
                    _ => {},
                }
            }
        },
        ParenMatching::FirstClosing => {
            let mut next_close = None;
            for (index, token) in tokens.iter().enumerate().rev() {
                match token.kind {
                    TokenKind::RParen => next_close = Some(index),
                    TokenKind::LParen => partners[index] = next_close,
                    _ => {},
                }
            }
        },
    }

    partners
}

use std::ops::Range;

use logos::Logos;

/// Classifies a lexical token of an expression.
///
/// Only digits, the two additive operators and round parentheses carry
/// meaning. Every other character matches no variant; [`tokenize`] drops it
/// without producing a token.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of decimal digits, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// A classified fragment of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the fragment is.
    pub kind: TokenKind,
    /// The exact text consumed.
    pub text: String,
    /// Byte range of `text` within the source.
    pub span: Range<usize>,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: &str, span: Range<usize>) -> Self {
        Self { kind,
               text: text.to_string(),
               span }
    }

    /// Offset of the first byte of the token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Integer => write!(f, "Integer\"{}\"", self.text),
            kind => write!(f, "{kind:?}"),
        }
    }
}

/// Converts an expression string into its full token sequence.
///
/// The scan runs left to right once. A maximal run of digits becomes a
/// single `Integer` token, each of `+ - ( )` becomes its own token, and all
/// other characters are dropped. The result is materialized completely
/// before it is returned.
///
/// # Parameters
/// - `source`: The raw expression text.
///
/// # Returns
/// The tokens in source order. An input without any recognized character
/// yields an empty vector.
///
/// # Example
/// ```
/// use exprtree::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("12 + x345").into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds, [TokenKind::Integer, TokenKind::Plus, TokenKind::Integer]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        // Characters no variant matches come back as errors and are dropped.
        if let Ok(kind) = kind {
            tokens.push(Token::new(kind, lexer.slice(), lexer.span()));
        }
    }

    tokens
}

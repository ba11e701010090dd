//! Lexer for shade source text, built on logos.
//!
//! The parser pulls one raw token at a time through [`next_raw_token`], so
//! the lexer keeps no state of its own: a position into the text is the
//! whole cursor. Whitespace and comments come back as trivia tokens.

mod convert;
mod raw_token;

use logos::Logos;
use shade_ir::{Span, Token, TokenKind};

use crate::convert::convert;
use crate::raw_token::RawToken;

/// Classify the token starting at byte `position` of `text`.
///
/// Returns the token kind and its length in bytes. At or past the end of the
/// text the result is `(TokenKind::Eof, 0)`. Unrecognized characters produce
/// `TokenKind::Invalid` with a non-zero length so callers always advance.
pub fn next_raw_token(text: &str, position: u32) -> (TokenKind, u32) {
    let start = position as usize;
    if start >= text.len() {
        return (TokenKind::Eof, 0);
    }
    let Some(rest) = text.get(start..) else {
        // Not on a character boundary: skip to the next one.
        let mut end = start + 1;
        while !text.is_char_boundary(end) {
            end += 1;
        }
        return (TokenKind::Invalid, len_u32(end - start));
    };

    let mut logos = RawToken::lexer(rest);
    match logos.next() {
        Some(Ok(raw)) => (convert(raw), len_u32(logos.span().len())),
        Some(Err(())) => {
            let mut end = logos.span().end.max(1);
            while !rest.is_char_boundary(end) {
                end += 1;
            }
            (TokenKind::Invalid, len_u32(end))
        }
        None => (TokenKind::Eof, 0),
    }
}

/// Lex all of `source` into tokens, trivia included, ending with `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut position = 0;
    loop {
        let (kind, length) = next_raw_token(source, position);
        tokens.push(Token::new(kind, Span::at(position, length)));
        if kind == TokenKind::Eof {
            return tokens;
        }
        position += length;
    }
}

#[inline]
fn len_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;

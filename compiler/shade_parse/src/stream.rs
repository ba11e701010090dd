//! Token stream cursor over the raw lexer.
//!
//! Pulls tokens lazily through [`shade_lexer::next_raw_token`] and offers
//! one token of pushback. `peek`/`next` skip whitespace and comments;
//! `peek_raw` does not, which lets the parser see whether two tokens touch.

use shade_ir::{Span, Token};

/// Position of a [`TokenStream`], captured for checkpoints.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct StreamState {
    offset: u32,
    pushback: Option<Token>,
}

/// Lazily lexed token cursor with a single pushback slot.
pub struct TokenStream<'src> {
    source: &'src str,
    offset: u32,
    pushback: Option<Token>,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str) -> Self {
        TokenStream {
            source,
            offset: 0,
            pushback: None,
        }
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Consume the next token, trivia included.
    pub fn next_raw(&mut self) -> Token {
        if let Some(token) = self.pushback.take() {
            return token;
        }
        let (kind, length) = shade_lexer::next_raw_token(self.source, self.offset);
        let token = Token::new(kind, Span::at(self.offset, length));
        self.offset += length;
        tracing::trace!(?kind, offset = token.offset(), "token");
        token
    }

    /// Consume the next non-trivia token.
    pub fn next(&mut self) -> Token {
        loop {
            let token = self.next_raw();
            if !token.kind.is_trivia() {
                return token;
            }
        }
    }

    /// Look at the next non-trivia token without consuming it.
    pub fn peek(&mut self) -> Token {
        let token = self.next();
        self.pushback(token);
        token
    }

    /// Look at the next token without skipping trivia.
    pub fn peek_raw(&mut self) -> Token {
        let token = self.next_raw();
        self.pushback(token);
        token
    }

    /// Return `token` to the stream. Only one token may be pending.
    ///
    /// # Panics
    ///
    /// Panics if a token is already pushed back; the parser never needs more
    /// than one token of lookahead.
    pub fn pushback(&mut self, token: Token) {
        assert!(
            self.pushback.is_none(),
            "token stream pushback slot is already occupied"
        );
        self.pushback = Some(token);
    }

    pub fn state(&self) -> StreamState {
        StreamState {
            offset: self.offset,
            pushback: self.pushback,
        }
    }

    pub fn restore(&mut self, state: StreamState) {
        self.offset = state.offset;
        self.pushback = state.pushback;
    }
}

//! Recursive descent parser for shade.
//!
//! Produces a flat AST in an [`AstArena`]. Expressions use precedence
//! climbing, one function per level. Errors go to an [`ErrorReporter`];
//! a structural failure returns `None` up to the nearest construct that can
//! resume, and fatal errors stop the top-level declaration loop.

mod grammar;
mod layout;
pub mod literal;
mod snapshot;
pub mod stream;

use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use shade_diagnostic::{ErrorCode, ErrorReporter};
use shade_ir::ast::{AstArena, Module};
use shade_ir::{Span, Token, TokenKind};
use shade_types::TypePool;

pub use stream::TokenStream;

/// Nesting limit for expressions and statements.
pub const MAX_PARSE_DEPTH: u32 = 50;

/// Names of the builtin types, used to tell declarations from expressions.
static BUILTIN_TYPE_NAMES: LazyLock<FxHashSet<String>> = LazyLock::new(|| {
    TypePool::new()
        .builtins()
        .iter()
        .map(|(name, _)| name.clone())
        .collect()
});

/// Whether `name` spells a builtin type.
pub fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPE_NAMES.contains(name)
}

/// Output of [`parse`]. Always present; check the reporter for errors.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub module: Module,
    pub arena: AstArena,
}

/// Parse `source` into a module, reporting problems to `reporter`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str, reporter: &mut ErrorReporter) -> ParseOutput {
    let mut parser = Parser::new(source, reporter);
    let module = parser.parse_module();
    ParseOutput {
        module,
        arena: parser.arena,
    }
}

/// Parser state.
pub struct Parser<'src, 'r> {
    stream: TokenStream<'src>,
    arena: AstArena,
    reporter: &'r mut ErrorReporter,
    /// Struct names declared so far in this unit.
    struct_names: FxHashSet<String>,
    /// Span of the most recently consumed token.
    previous: Span,
    depth: u32,
}

impl<'src, 'r> Parser<'src, 'r> {
    pub fn new(source: &'src str, reporter: &'r mut ErrorReporter) -> Self {
        Parser {
            stream: TokenStream::new(source),
            arena: AstArena::new(),
            reporter,
            struct_names: FxHashSet::default(),
            previous: Span::DUMMY,
            depth: 0,
        }
    }

    #[inline]
    fn peek(&mut self) -> Token {
        self.stream.peek()
    }

    #[inline]
    fn peek_kind(&mut self) -> TokenKind {
        self.stream.peek().kind
    }

    #[inline]
    fn check(&mut self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Consume the next non-trivia token.
    fn advance(&mut self) -> Token {
        let token = self.stream.next();
        self.previous = token.span;
        token
    }

    /// Consume the next token if it is `kind`.
    fn check_next(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of `kind`, or report "expected X, but found 'y'".
    ///
    /// A mismatch is fatal and leaves the offending token in the stream.
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Option<Token> {
        let token = self.peek();
        if token.kind == kind {
            return Some(self.advance());
        }
        let found = self.text(token);
        self.fatal(
            token.span,
            ErrorCode::E1001,
            format!("expected {expected}, but found '{found}'"),
        );
        None
    }

    /// Consume an identifier that does not name a builtin type.
    fn expect_identifier(&mut self) -> Option<Token> {
        let token = self.expect(TokenKind::Identifier, "an identifier")?;
        let text = self.text(token);
        if is_builtin_type(text) {
            self.fatal(
                token.span,
                ErrorCode::E1004,
                format!("expected an identifier, but found type '{text}'"),
            );
            return None;
        }
        Some(token)
    }

    #[inline]
    fn text(&self, token: Token) -> &'src str {
        token.text(self.stream.source())
    }

    fn is_type(&self, name: &str) -> bool {
        is_builtin_type(name) || self.struct_names.contains(name)
    }

    /// Whether the next token is an identifier naming a type.
    fn at_type_name(&mut self) -> bool {
        let token = self.peek();
        token.kind == TokenKind::Identifier && self.is_type(self.text(token))
    }

    fn error(&mut self, span: Span, code: ErrorCode, message: impl Into<String>) {
        self.reporter.error(span, code, message);
    }

    fn fatal(&mut self, span: Span, code: ErrorCode, message: impl Into<String>) {
        self.reporter.fatal(span, code, message);
    }

    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous)
    }

    /// Bump the nesting depth, reporting a fatal error past the limit.
    ///
    /// Callers wrap the work in [`Parser::depth_scope`] so the depth is
    /// restored however they exit.
    fn increase_depth(&mut self) -> bool {
        self.depth += 1;
        if self.depth > MAX_PARSE_DEPTH {
            let span = self.peek().span;
            self.fatal(span, ErrorCode::E1010, "exceeded max parse depth");
            return false;
        }
        true
    }

    /// Run `f` and restore the depth counter afterwards.
    fn depth_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let saved = self.depth;
        let result = f(self);
        self.depth = saved;
        result
    }
}

#[cfg(test)]
mod tests;

//! Statements.

use shade_diagnostic::ErrorCode;
use shade_ir::ast::{Stmt, StmtId, StmtKind, SwitchCase};
use shade_ir::{Modifiers, Span, TokenKind};

use crate::Parser;

impl Parser<'_, '_> {
    fn alloc_stmt(&mut self, kind: StmtKind, start: Span) -> StmtId {
        let span = self.span_from(start);
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }

    pub(crate) fn statement(&mut self) -> Option<StmtId> {
        self.depth_scope(|p| {
            if !p.increase_depth() {
                return None;
            }
            let start = p.peek();
            match start.kind {
                TokenKind::LBrace => p.block(),
                TokenKind::Semicolon => {
                    p.advance();
                    Some(p.alloc_stmt(
                        StmtKind::Block {
                            stmts: Vec::new(),
                            is_scope: false,
                        },
                        start.span,
                    ))
                }
                TokenKind::If => p.if_statement(),
                TokenKind::For => p.for_statement(),
                TokenKind::While => p.while_statement(),
                TokenKind::Do => p.do_statement(),
                TokenKind::Switch => p.switch_statement(),
                TokenKind::Return => p.return_statement(),
                TokenKind::Break => p.keyword_statement(StmtKind::Break),
                TokenKind::Continue => p.keyword_statement(StmtKind::Continue),
                TokenKind::Discard => p.keyword_statement(StmtKind::Discard),
                _ if p.at_modifier() => {
                    let vars = p.var_declarations()?;
                    Some(p.alloc_stmt(StmtKind::VarDecls(vars), start.span))
                }
                TokenKind::Identifier => p.var_declarations_or_expression_statement(),
                _ => p.expression_statement(),
            }
        })
    }

    /// `{ statements }`, which opens a scope.
    pub(crate) fn block(&mut self) -> Option<StmtId> {
        let start = self.expect(TokenKind::LBrace, "'{'")?;
        self.depth_scope(|p| {
            if !p.increase_depth() {
                return None;
            }
            let mut stmts = Vec::new();
            loop {
                let token = p.peek();
                match token.kind {
                    TokenKind::RBrace => {
                        p.advance();
                        break;
                    }
                    TokenKind::Eof => {
                        p.fatal(
                            token.span,
                            ErrorCode::E1003,
                            "expected '}', but found end of file",
                        );
                        return None;
                    }
                    _ => stmts.push(p.statement()?),
                }
            }
            Some(p.alloc_stmt(
                StmtKind::Block {
                    stmts,
                    is_scope: true,
                },
                start.span,
            ))
        })
    }

    fn keyword_statement(&mut self, kind: StmtKind) -> Option<StmtId> {
        let start = self.advance();
        self.expect(TokenKind::Semicolon, "';'")?;
        Some(self.alloc_stmt(kind, start.span))
    }

    fn if_statement(&mut self) -> Option<StmtId> {
        let start = self.advance();
        self.expect(TokenKind::LParen, "'('")?;
        let test = self.expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        let if_true = self.statement()?;
        let if_false = if self.check_next(TokenKind::Else).is_some() {
            Some(self.statement()?)
        } else {
            None
        };
        Some(self.alloc_stmt(
            StmtKind::If {
                test,
                if_true,
                if_false,
            },
            start.span,
        ))
    }

    fn for_statement(&mut self) -> Option<StmtId> {
        let start = self.advance();
        self.expect(TokenKind::LParen, "'('")?;
        let init = if self.check_next(TokenKind::Semicolon).is_some() {
            None
        } else if self.at_modifier() {
            let init_start = self.peek().span;
            let vars = self.var_declarations()?;
            Some(self.alloc_stmt(StmtKind::VarDecls(vars), init_start))
        } else {
            Some(self.var_declarations_or_expression_statement()?)
        };
        let test = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::Semicolon, "';'")?;
        let next = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::RParen, "')'")?;
        let body = self.statement()?;
        Some(self.alloc_stmt(
            StmtKind::For {
                init,
                test,
                next,
                body,
            },
            start.span,
        ))
    }

    fn while_statement(&mut self) -> Option<StmtId> {
        let start = self.advance();
        self.expect(TokenKind::LParen, "'('")?;
        let test = self.expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        let body = self.statement()?;
        Some(self.alloc_stmt(StmtKind::While { test, body }, start.span))
    }

    fn do_statement(&mut self) -> Option<StmtId> {
        let start = self.advance();
        let body = self.statement()?;
        self.expect(TokenKind::While, "'while'")?;
        self.expect(TokenKind::LParen, "'('")?;
        let test = self.expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Some(self.alloc_stmt(StmtKind::Do { body, test }, start.span))
    }

    /// `switch (value) { case ...: ... default: ... }`
    ///
    /// `default` must come last: once it is seen, only statements and the
    /// closing brace are accepted.
    fn switch_statement(&mut self) -> Option<StmtId> {
        let start = self.advance();
        self.expect(TokenKind::LParen, "'('")?;
        let value = self.expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut cases = Vec::new();
        while self.check(TokenKind::Case) {
            cases.push(self.switch_case()?);
        }
        if let Some(default) = self.check_next(TokenKind::Default) {
            self.expect(TokenKind::Colon, "':'")?;
            let stmts = self.case_body()?;
            cases.push(SwitchCase {
                value: None,
                stmts,
                span: self.span_from(default.span),
            });
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Some(self.alloc_stmt(StmtKind::Switch { value, cases }, start.span))
    }

    fn switch_case(&mut self) -> Option<SwitchCase> {
        let start = self.advance();
        let value = self.expression()?;
        self.expect(TokenKind::Colon, "':'")?;
        let stmts = self.case_body()?;
        Some(SwitchCase {
            value: Some(value),
            stmts,
            span: self.span_from(start.span),
        })
    }

    fn case_body(&mut self) -> Option<Vec<StmtId>> {
        let mut stmts = Vec::new();
        while !matches!(
            self.peek_kind(),
            TokenKind::Case | TokenKind::Default | TokenKind::RBrace | TokenKind::Eof
        ) {
            stmts.push(self.statement()?);
        }
        Some(stmts)
    }

    fn return_statement(&mut self) -> Option<StmtId> {
        let start = self.advance();
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::Semicolon, "';'")?;
        Some(self.alloc_stmt(StmtKind::Return(value), start.span))
    }

    /// A statement starting with an identifier.
    ///
    /// When the identifier names a type, `Type name` is tried as a
    /// declaration prefix; anything else (`Type(...)`, `x = ...`) is parsed
    /// as an expression statement from the same starting point.
    fn var_declarations_or_expression_statement(&mut self) -> Option<StmtId> {
        if self.at_type_name() {
            let start = self.peek().span;
            let prefix = self.try_parse(|p| {
                let ty = p.type_ref()?;
                let name = p.expect_identifier()?;
                Some((ty, name))
            });
            if let Some((ty, name)) = prefix {
                let vars = self.var_declaration_end(Modifiers::default(), ty, name, start)?;
                return Some(self.alloc_stmt(StmtKind::VarDecls(vars), start));
            }
        }
        self.expression_statement()
    }

    fn expression_statement(&mut self) -> Option<StmtId> {
        let start = self.peek().span;
        let expr = self.expression()?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Some(self.alloc_stmt(StmtKind::Expr(expr), start))
    }
}

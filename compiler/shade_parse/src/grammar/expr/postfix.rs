//! Postfix suffixes and terms.

use shade_diagnostic::ErrorCode;
use shade_ir::ast::{ExprId, ExprKind};
use shade_ir::TokenKind;

use crate::literal::{is_unsigned, parse_float, LiteralError};
use crate::Parser;

impl Parser<'_, '_> {
    /// A term followed by any number of suffixes.
    pub(crate) fn postfix_expression(&mut self) -> Option<ExprId> {
        self.depth_scope(|p| {
            let mut result = p.term()?;
            loop {
                let token = p.peek();
                let is_suffix = match token.kind {
                    TokenKind::LBracket
                    | TokenKind::Dot
                    | TokenKind::LParen
                    | TokenKind::PlusPlus
                    | TokenKind::MinusMinus => true,
                    // `v.000r` lexes as `v`, `.000`, `r`.
                    TokenKind::FloatLiteral => p.text(token).starts_with('.'),
                    _ => false,
                };
                if !is_suffix {
                    return Some(result);
                }
                if !p.increase_depth() {
                    return None;
                }
                result = p.suffix(result)?;
            }
        })
    }

    fn suffix(&mut self, base: ExprId) -> Option<ExprId> {
        let start = self.arena.expr(base).span;
        if let Some(op) = self.match_postfix_op() {
            self.advance();
            let span = self.span_from(start);
            return Some(self.alloc_expr(ExprKind::Postfix { operand: base, op }, span));
        }
        let token = self.advance();
        let kind = match token.kind {
            TokenKind::LBracket => {
                if let Some(close) = self.check_next(TokenKind::RBracket) {
                    self.error(
                        token.span.merge(close.span),
                        ErrorCode::E1014,
                        "missing index in '[]'",
                    );
                    return None;
                }
                let index = self.expression()?;
                self.expect(TokenKind::RBracket, "']'")?;
                ExprKind::Index { base, index }
            }
            TokenKind::Dot => {
                let field = self.expect(TokenKind::Identifier, "a field name")?;
                ExprKind::Field {
                    base,
                    name: self.text(field).to_string(),
                }
            }
            TokenKind::FloatLiteral => {
                let text = self.text(token);
                let mut name = text.strip_prefix('.').unwrap_or(text).to_string();
                // Only an identifier touching the literal belongs to the mask.
                if self.stream.peek_raw().kind == TokenKind::Identifier {
                    let rest = self.advance();
                    name.push_str(self.text(rest));
                }
                ExprKind::Field { base, name }
            }
            TokenKind::LParen => {
                let args = self.call_arguments()?;
                ExprKind::Call { callee: base, args }
            }
            _ => {
                let text = self.text(token);
                self.fatal(
                    token.span,
                    ErrorCode::E1001,
                    format!("expected expression suffix, but found '{text}'"),
                );
                return None;
            }
        };
        let span = self.span_from(start);
        Some(self.alloc_expr(kind, span))
    }

    /// Arguments after `(`, through the closing `)`.
    fn call_arguments(&mut self) -> Option<Vec<ExprId>> {
        let mut args = Vec::new();
        if self.check_next(TokenKind::RParen).is_some() {
            return Some(args);
        }
        loop {
            args.push(self.assignment_expression()?);
            if self.check_next(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        Some(args)
    }

    fn term(&mut self) -> Option<ExprId> {
        let token = self.peek();
        let kind = match token.kind {
            TokenKind::Identifier => {
                self.advance();
                ExprKind::Ident(self.text(token).to_string())
            }
            TokenKind::IntLiteral => {
                self.advance();
                // Out-of-range literals are reported and parsed as zero.
                let value = self.int_value(token).unwrap_or(0);
                if is_unsigned(self.text(token)) {
                    ExprKind::UInt(value)
                } else {
                    ExprKind::Int(value)
                }
            }
            TokenKind::FloatLiteral => {
                self.advance();
                ExprKind::Float(self.float_value(token))
            }
            TokenKind::True => {
                self.advance();
                ExprKind::Bool(true)
            }
            TokenKind::False => {
                self.advance();
                ExprKind::Bool(false)
            }
            TokenKind::LParen => {
                self.advance();
                return self.depth_scope(|p| {
                    if !p.increase_depth() {
                        return None;
                    }
                    let inner = p.expression()?;
                    p.expect(TokenKind::RParen, "')'")?;
                    Some(inner)
                });
            }
            _ => {
                let text = self.text(token);
                self.fatal(
                    token.span,
                    ErrorCode::E1002,
                    format!("expected expression, but found '{text}'"),
                );
                return None;
            }
        };
        Some(self.alloc_expr(kind, token.span))
    }

    fn float_value(&mut self, token: shade_ir::Token) -> f64 {
        let text = self.text(token);
        match parse_float(text) {
            Ok(value) => value,
            Err(LiteralError::TooLarge) => {
                self.error(
                    token.span,
                    ErrorCode::E0003,
                    format!("floating-point value is too large: {text}"),
                );
                0.0
            }
            Err(LiteralError::Malformed) => {
                self.error(
                    token.span,
                    ErrorCode::E0001,
                    format!("invalid floating-point literal '{text}'"),
                );
                0.0
            }
        }
    }
}

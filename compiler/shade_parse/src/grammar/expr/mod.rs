//! Expression parsing.
//!
//! Precedence climbing from the loosest level down:
//!
//! ```text
//! comma → assignment (right-assoc) → ternary → || → ^^ → && → | → ^ → &
//!       → == != → < > <= >= → << >> → + - → * / % → prefix → postfix → term
//! ```
//!
//! Every level that loops or recurses bumps the depth counter once per
//! operator, so deeply nested input fails with "exceeded max parse depth"
//! instead of overflowing the stack.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry points and the binary precedence chain
//! - `operators.rs`: operator matching helpers
//! - `postfix.rs`: suffixes (call, index, field, swizzle, `++`/`--`) and terms

mod operators;
mod postfix;

use shade_ir::ast::{Expr, ExprId, ExprKind};
use shade_ir::{BinaryOp, Span, TokenKind};

use crate::Parser;

type Operand<'src, 'r> = fn(&mut Parser<'src, 'r>) -> Option<ExprId>;
type OpMatcher<'src, 'r> = fn(&mut Parser<'src, 'r>) -> Option<BinaryOp>;

impl<'src, 'r> Parser<'src, 'r> {
    pub(crate) fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    fn alloc_binary(&mut self, left: ExprId, op: BinaryOp, right: ExprId) -> ExprId {
        let span = self
            .arena
            .expr(left)
            .span
            .merge(self.arena.expr(right).span);
        self.alloc_expr(ExprKind::Binary { left, op, right }, span)
    }

    /// Parse a full expression, comma sequences included.
    #[tracing::instrument(level = "trace", skip_all)]
    pub(crate) fn expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::assignment_expression, Self::match_comma_op)
    }

    /// Parse an expression without a top-level comma, as used for call
    /// arguments and initializers.
    pub(crate) fn assignment_expression(&mut self) -> Option<ExprId> {
        self.depth_scope(|p| {
            let target = p.ternary_expression()?;
            let Some(op) = p.match_assignment_op() else {
                return Some(target);
            };
            p.advance();
            if !p.increase_depth() {
                return None;
            }
            let value = p.assignment_expression()?;
            Some(p.alloc_binary(target, op, value))
        })
    }

    fn ternary_expression(&mut self) -> Option<ExprId> {
        self.depth_scope(|p| {
            let test = p.logical_or_expression()?;
            if p.check_next(TokenKind::Question).is_none() {
                return Some(test);
            }
            if !p.increase_depth() {
                return None;
            }
            let if_true = p.expression()?;
            p.expect(TokenKind::Colon, "':'")?;
            let if_false = p.assignment_expression()?;
            let span = p.arena.expr(test).span.merge(p.arena.expr(if_false).span);
            Some(p.alloc_expr(
                ExprKind::Ternary {
                    test,
                    if_true,
                    if_false,
                },
                span,
            ))
        })
    }

    /// One left-associative precedence level.
    fn binary_level(
        &mut self,
        operand: Operand<'src, 'r>,
        matcher: OpMatcher<'src, 'r>,
    ) -> Option<ExprId> {
        self.depth_scope(|p| {
            let mut result = operand(p)?;
            while let Some(op) = matcher(p) {
                p.advance();
                if !p.increase_depth() {
                    return None;
                }
                let right = operand(p)?;
                result = p.alloc_binary(result, op, right);
            }
            Some(result)
        })
    }

    fn logical_or_expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::logical_xor_expression, Self::match_logical_or_op)
    }

    fn logical_xor_expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::logical_and_expression, Self::match_logical_xor_op)
    }

    fn logical_and_expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::bitwise_or_expression, Self::match_logical_and_op)
    }

    fn bitwise_or_expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::bitwise_xor_expression, Self::match_bitwise_or_op)
    }

    fn bitwise_xor_expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::bitwise_and_expression, Self::match_bitwise_xor_op)
    }

    fn bitwise_and_expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::equality_expression, Self::match_bitwise_and_op)
    }

    fn equality_expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::relational_expression, Self::match_equality_op)
    }

    fn relational_expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::shift_expression, Self::match_relational_op)
    }

    fn shift_expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::additive_expression, Self::match_shift_op)
    }

    fn additive_expression(&mut self) -> Option<ExprId> {
        self.binary_level(
            Self::multiplicative_expression,
            Self::match_additive_op,
        )
    }

    fn multiplicative_expression(&mut self) -> Option<ExprId> {
        self.binary_level(Self::unary_expression, Self::match_multiplicative_op)
    }

    /// Prefix operators: `+ - ! ~ ++ --`.
    fn unary_expression(&mut self) -> Option<ExprId> {
        self.depth_scope(|p| {
            let Some(op) = p.match_prefix_op() else {
                return p.postfix_expression();
            };
            let start = p.advance();
            if !p.increase_depth() {
                return None;
            }
            let operand = p.unary_expression()?;
            let span = start.span.merge(p.arena.expr(operand).span);
            Some(p.alloc_expr(ExprKind::Prefix { op, operand }, span))
        })
    }
}

//! Implicit conversions.

use shade_diagnostic::ErrorCode;
use shade_types::{Idx, ScalarKind};

use super::{fold, IrGenerator};
use crate::ir::{Expression, ExpressionKind};

impl IrGenerator<'_, '_> {
    /// Convert `expr` to `ty`, reporting "expected 'T', but found 'U'" when
    /// no implicit conversion exists.
    ///
    /// An expression that already has type `ty` comes back unchanged.
    /// Integer literals are retyped in place; anything else is wrapped in a
    /// single-argument constructor of `ty`.
    pub(super) fn coerce(&mut self, expr: Expression, ty: Idx) -> Option<Expression> {
        if expr.ty == ty {
            return Some(expr);
        }
        let expr = self.check_valid(expr)?;
        let Some(cost) = self.program.types.coercion_cost(expr.ty, ty) else {
            let message = format!(
                "expected '{}', but found '{}'",
                self.format_type(ty),
                self.format_type(expr.ty)
            );
            self.error(expr.span, ErrorCode::E2001, message);
            return None;
        };
        tracing::trace!(from = ?expr.ty, to = ?ty, cost, "implicit conversion");

        let span = expr.span;
        if let ExpressionKind::IntLiteral(value) = expr.kind {
            match self.program.types.scalar_kind(ty) {
                Some(ScalarKind::Float | ScalarKind::Double) => {
                    return Some(Expression::float_literal(fold::int_to_float(value), ty, span));
                }
                Some(ScalarKind::UInt) => {
                    if let Some(value) = fold::retype_int(value, ty) {
                        return Some(Expression::int_literal(value, ty, span));
                    }
                }
                _ => {}
            }
        }
        Some(Expression::new(
            ExpressionKind::Constructor(vec![expr]),
            ty,
            span,
        ))
    }
}

//! Constant folding of literal operands.
//!
//! Only literal-on-literal operations fold. Integer literals hold 32-bit
//! values (`i32` for `int`, `u32` for `uint`); anything that would overflow
//! that range, divide by zero or shift out of range is left for the caller
//! to build as a runtime expression.

use std::cmp::Ordering;

use shade_ir::{BinaryOp, PrefixOp, Span};
use shade_types::Idx;

use crate::ir::{Expression, ExpressionKind};

#[expect(
    clippy::cast_precision_loss,
    reason = "shader literals are far below 2^53"
)]
pub(super) fn int_to_float(value: i64) -> f64 {
    value as f64
}

/// Reinterpret an integer literal's 32-bit pattern as `ty` (`int` or
/// `uint`), so `uint(-1)` is `4294967295`.
pub(super) fn retype_int(value: i64, ty: Idx) -> Option<i64> {
    if ty == Idx::UINT {
        u32::try_from(value)
            .or_else(|_| i32::try_from(value).map(|value| u32::from_ne_bytes(value.to_ne_bytes())))
            .ok()
            .map(i64::from)
    } else {
        i32::try_from(value)
            .or_else(|_| u32::try_from(value).map(|value| i32::from_ne_bytes(value.to_ne_bytes())))
            .ok()
            .map(i64::from)
    }
}

/// Fold `left op right` into a literal of type `ty`.
pub(super) fn fold_binary(
    left: &Expression,
    op: BinaryOp,
    right: &Expression,
    ty: Idx,
    span: Span,
) -> Option<Expression> {
    let kind = match (&left.kind, &right.kind) {
        (ExpressionKind::IntLiteral(a), ExpressionKind::IntLiteral(b)) if left.ty == Idx::UINT => {
            fold_uint(*a, op, *b)?
        }
        (ExpressionKind::IntLiteral(a), ExpressionKind::IntLiteral(b)) => fold_int(*a, op, *b)?,
        (ExpressionKind::FloatLiteral(a), ExpressionKind::FloatLiteral(b)) => {
            fold_float(*a, op, *b)?
        }
        (ExpressionKind::BoolLiteral(a), ExpressionKind::BoolLiteral(b)) => {
            fold_bool(*a, op, *b)?
        }
        _ => return None,
    };
    tracing::trace!(%op, ?kind, "folded");
    Some(Expression::new(kind, ty, span))
}

/// Defines a folder for two integer literals using checked arithmetic in
/// the given 32-bit type.
macro_rules! integer_folder {
    ($name:ident, $int:ty) => {
        fn $name(a: i64, op: BinaryOp, b: i64) -> Option<ExpressionKind> {
            let amount = u32::try_from(b).ok();
            let a = <$int>::try_from(a).ok()?;
            let b = <$int>::try_from(b).ok()?;
            let value = match op {
                BinaryOp::Add => a.checked_add(b)?,
                BinaryOp::Sub => a.checked_sub(b)?,
                BinaryOp::Mul => a.checked_mul(b)?,
                BinaryOp::Div => a.checked_div(b)?,
                BinaryOp::Mod => a.checked_rem(b)?,
                BinaryOp::Shl => a.checked_shl(amount?)?,
                BinaryOp::Shr => a.checked_shr(amount?)?,
                BinaryOp::BitAnd => a & b,
                BinaryOp::BitOr => a | b,
                BinaryOp::BitXor => a ^ b,
                BinaryOp::Lt => return Some(ExpressionKind::BoolLiteral(a < b)),
                BinaryOp::Gt => return Some(ExpressionKind::BoolLiteral(a > b)),
                BinaryOp::LtEq => return Some(ExpressionKind::BoolLiteral(a <= b)),
                BinaryOp::GtEq => return Some(ExpressionKind::BoolLiteral(a >= b)),
                BinaryOp::Eq => return Some(ExpressionKind::BoolLiteral(a == b)),
                BinaryOp::NotEq => return Some(ExpressionKind::BoolLiteral(a != b)),
                _ => return None,
            };
            Some(ExpressionKind::IntLiteral(i64::from(value)))
        }
    };
}

integer_folder!(fold_int, i32);
integer_folder!(fold_uint, u32);

fn fold_float(a: f64, op: BinaryOp, b: f64) -> Option<ExpressionKind> {
    let value = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div if b != 0.0 => a / b,
        _ => {
            let ordering = a.partial_cmp(&b)?;
            let result = match op {
                BinaryOp::Lt => ordering == Ordering::Less,
                BinaryOp::Gt => ordering == Ordering::Greater,
                BinaryOp::LtEq => ordering != Ordering::Greater,
                BinaryOp::GtEq => ordering != Ordering::Less,
                BinaryOp::Eq => ordering == Ordering::Equal,
                BinaryOp::NotEq => ordering != Ordering::Equal,
                _ => return None,
            };
            return Some(ExpressionKind::BoolLiteral(result));
        }
    };
    Some(ExpressionKind::FloatLiteral(value))
}

fn fold_bool(a: bool, op: BinaryOp, b: bool) -> Option<ExpressionKind> {
    let value = match op {
        BinaryOp::LogicalAnd => a && b,
        BinaryOp::LogicalOr => a || b,
        BinaryOp::LogicalXor | BinaryOp::NotEq => a != b,
        BinaryOp::Eq => a == b,
        _ => return None,
    };
    Some(ExpressionKind::BoolLiteral(value))
}

/// Fold `-literal` always, and `!literal` and `~literal` when optimizing.
pub(super) fn fold_prefix(
    op: PrefixOp,
    operand: &Expression,
    optimize: bool,
    span: Span,
) -> Option<Expression> {
    let ty = operand.ty;
    match (op, &operand.kind) {
        (PrefixOp::Neg, ExpressionKind::IntLiteral(value)) if ty != Idx::UINT => {
            let value = i32::try_from(*value).ok()?.checked_neg()?;
            Some(Expression::int_literal(i64::from(value), ty, span))
        }
        (PrefixOp::Neg, ExpressionKind::FloatLiteral(value)) => {
            Some(Expression::float_literal(-value, ty, span))
        }
        (PrefixOp::Not, ExpressionKind::BoolLiteral(value)) if optimize => {
            Some(Expression::bool_literal(!value, span))
        }
        (PrefixOp::BitNot, ExpressionKind::IntLiteral(value)) if optimize => {
            let value = if ty == Idx::UINT {
                i64::from(!u32::try_from(*value).ok()?)
            } else {
                i64::from(!i32::try_from(*value).ok()?)
            };
            Some(Expression::int_literal(value, ty, span))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests;

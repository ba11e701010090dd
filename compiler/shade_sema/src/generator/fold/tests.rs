use pretty_assertions::assert_eq;
use shade_ir::{BinaryOp, PrefixOp, Span};
use shade_types::Idx;

use super::{fold_binary, fold_prefix, retype_int};
use crate::ir::{Expression, ExpressionKind};

fn int(value: i64) -> Expression {
    Expression::int_literal(value, Idx::INT, Span::DUMMY)
}

fn uint(value: i64) -> Expression {
    Expression::int_literal(value, Idx::UINT, Span::DUMMY)
}

fn float(value: f64) -> Expression {
    Expression::float_literal(value, Idx::FLOAT, Span::DUMMY)
}

fn boolean(value: bool) -> Expression {
    Expression::bool_literal(value, Span::DUMMY)
}

fn fold(left: &Expression, op: BinaryOp, right: &Expression, ty: Idx) -> Option<ExpressionKind> {
    fold_binary(left, op, right, ty, Span::DUMMY).map(|folded| folded.kind)
}

#[test]
fn test_integer_arithmetic() {
    assert_eq!(
        fold(&int(6), BinaryOp::Add, &int(7), Idx::INT),
        Some(ExpressionKind::IntLiteral(13))
    );
    assert_eq!(
        fold(&int(6), BinaryOp::Mul, &int(7), Idx::INT),
        Some(ExpressionKind::IntLiteral(42))
    );
    assert_eq!(
        fold(&int(7), BinaryOp::Div, &int(2), Idx::INT),
        Some(ExpressionKind::IntLiteral(3))
    );
    assert_eq!(
        fold(&int(7), BinaryOp::Mod, &int(4), Idx::INT),
        Some(ExpressionKind::IntLiteral(3))
    );
    assert_eq!(
        fold(&int(1), BinaryOp::Shl, &int(4), Idx::INT),
        Some(ExpressionKind::IntLiteral(16))
    );
    assert_eq!(
        fold(&int(0b1100), BinaryOp::BitXor, &int(0b1010), Idx::INT),
        Some(ExpressionKind::IntLiteral(0b0110))
    );
}

#[test]
fn test_integer_comparisons_produce_bools() {
    assert_eq!(
        fold(&int(2), BinaryOp::Lt, &int(3), Idx::BOOL),
        Some(ExpressionKind::BoolLiteral(true))
    );
    assert_eq!(
        fold(&int(2), BinaryOp::GtEq, &int(3), Idx::BOOL),
        Some(ExpressionKind::BoolLiteral(false))
    );
    assert_eq!(
        fold(&int(3), BinaryOp::NotEq, &int(3), Idx::BOOL),
        Some(ExpressionKind::BoolLiteral(false))
    );
}

#[test]
fn test_unfoldable_integer_operations() {
    assert_eq!(fold(&int(1), BinaryOp::Div, &int(0), Idx::INT), None);
    assert_eq!(
        fold(&int(i64::from(i32::MAX)), BinaryOp::Add, &int(1), Idx::INT),
        None
    );
    assert_eq!(fold(&int(1), BinaryOp::Shl, &int(-1), Idx::INT), None);
    assert_eq!(fold(&int(1), BinaryOp::Shl, &int(64), Idx::INT), None);
    assert_eq!(fold(&int(1), BinaryOp::LogicalAnd, &int(1), Idx::INT), None);
}

#[test]
fn test_integer_folding_stays_within_32_bits() {
    assert_eq!(
        fold(&int(i64::from(i32::MAX)), BinaryOp::Sub, &int(1), Idx::INT),
        Some(ExpressionKind::IntLiteral(2_147_483_646))
    );
    assert_eq!(
        fold(&int(65_536), BinaryOp::Mul, &int(65_536), Idx::INT),
        None
    );
    assert_eq!(fold(&int(1), BinaryOp::Shl, &int(40), Idx::INT), None);
    assert_eq!(fold(&int(1), BinaryOp::Shl, &int(32), Idx::INT), None);
    assert_eq!(
        fold(&int(1), BinaryOp::Shl, &int(31), Idx::INT),
        Some(ExpressionKind::IntLiteral(i64::from(i32::MIN)))
    );
    assert_eq!(
        fold(&int(i64::from(i32::MIN)), BinaryOp::Div, &int(-1), Idx::INT),
        None
    );
}

#[test]
fn test_unsigned_folding() {
    assert_eq!(
        fold(&uint(4_000_000_000), BinaryOp::Add, &uint(1), Idx::UINT),
        Some(ExpressionKind::IntLiteral(4_000_000_001))
    );
    assert_eq!(
        fold(&uint(i64::from(u32::MAX)), BinaryOp::Add, &uint(1), Idx::UINT),
        None
    );
    assert_eq!(fold(&uint(1), BinaryOp::Sub, &uint(2), Idx::UINT), None);
    assert_eq!(
        fold(&uint(3_000_000_000), BinaryOp::Gt, &uint(1), Idx::BOOL),
        Some(ExpressionKind::BoolLiteral(true))
    );
}

#[test]
fn test_retype_int_wraps_32_bit_pattern() {
    assert_eq!(retype_int(-1, Idx::UINT), Some(i64::from(u32::MAX)));
    assert_eq!(retype_int(7, Idx::UINT), Some(7));
    assert_eq!(retype_int(i64::from(u32::MAX), Idx::INT), Some(-1));
    assert_eq!(retype_int(1 << 40, Idx::INT), None);
}

#[test]
fn test_float_arithmetic() {
    assert_eq!(
        fold(&float(1.5), BinaryOp::Mul, &float(2.0), Idx::FLOAT),
        Some(ExpressionKind::FloatLiteral(3.0))
    );
    assert_eq!(
        fold(&float(1.0), BinaryOp::Sub, &float(0.25), Idx::FLOAT),
        Some(ExpressionKind::FloatLiteral(0.75))
    );
    assert_eq!(
        fold(&float(1.0), BinaryOp::Div, &float(4.0), Idx::FLOAT),
        Some(ExpressionKind::FloatLiteral(0.25))
    );
    assert_eq!(
        fold(&float(1.0), BinaryOp::LtEq, &float(1.0), Idx::BOOL),
        Some(ExpressionKind::BoolLiteral(true))
    );
}

#[test]
fn test_float_division_by_zero_is_left_alone() {
    assert_eq!(fold(&float(1.0), BinaryOp::Div, &float(0.0), Idx::FLOAT), None);
}

#[test]
fn test_nan_comparisons_are_left_alone() {
    assert_eq!(
        fold(&float(f64::NAN), BinaryOp::Eq, &float(1.0), Idx::BOOL),
        None
    );
}

#[test]
fn test_bool_logic() {
    assert_eq!(
        fold(&boolean(true), BinaryOp::LogicalAnd, &boolean(false), Idx::BOOL),
        Some(ExpressionKind::BoolLiteral(false))
    );
    assert_eq!(
        fold(&boolean(true), BinaryOp::LogicalXor, &boolean(false), Idx::BOOL),
        Some(ExpressionKind::BoolLiteral(true))
    );
    assert_eq!(
        fold(&boolean(false), BinaryOp::LogicalOr, &boolean(false), Idx::BOOL),
        Some(ExpressionKind::BoolLiteral(false))
    );
}

#[test]
fn test_mixed_operands_do_not_fold() {
    assert_eq!(fold(&int(1), BinaryOp::Add, &float(1.0), Idx::FLOAT), None);
}

#[test]
fn test_negation_always_folds() {
    let folded = fold_prefix(PrefixOp::Neg, &int(5), false, Span::DUMMY);
    assert_eq!(folded.map(|e| e.kind), Some(ExpressionKind::IntLiteral(-5)));

    let folded = fold_prefix(PrefixOp::Neg, &float(0.5), false, Span::DUMMY);
    assert_eq!(folded.map(|e| e.kind), Some(ExpressionKind::FloatLiteral(-0.5)));
}

#[test]
fn test_logical_and_bitwise_not_fold_only_when_optimizing() {
    assert_eq!(fold_prefix(PrefixOp::Not, &boolean(true), false, Span::DUMMY), None);
    let folded = fold_prefix(PrefixOp::Not, &boolean(true), true, Span::DUMMY);
    assert_eq!(folded.map(|e| e.kind), Some(ExpressionKind::BoolLiteral(false)));

    let folded = fold_prefix(PrefixOp::BitNot, &int(0), true, Span::DUMMY);
    assert_eq!(folded.map(|e| e.kind), Some(ExpressionKind::IntLiteral(-1)));

    let folded = fold_prefix(PrefixOp::BitNot, &uint(0), true, Span::DUMMY);
    assert_eq!(
        folded.map(|e| e.kind),
        Some(ExpressionKind::IntLiteral(i64::from(u32::MAX)))
    );
}

#[test]
fn test_unsigned_negation_is_not_folded() {
    assert_eq!(fold_prefix(PrefixOp::Neg, &uint(1), true, Span::DUMMY), None);
}

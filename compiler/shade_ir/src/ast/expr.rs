use crate::{BinaryOp, PostfixOp, PrefixOp, Span};

use super::ExprId;

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Variable, function or type name.
    Ident(String),
    Int(i64),
    /// `u`-suffixed integer literal.
    UInt(i64),
    Float(f64),
    Bool(bool),

    Binary {
        left: ExprId,
        op: BinaryOp,
        right: ExprId,
    },

    /// `test ? if_true : if_false`
    Ternary {
        test: ExprId,
        if_true: ExprId,
        if_false: ExprId,
    },

    Prefix {
        op: PrefixOp,
        operand: ExprId,
    },

    Postfix {
        operand: ExprId,
        op: PostfixOp,
    },

    /// `callee(args)`; a type-named callee is a constructor.
    Call {
        callee: ExprId,
        args: Vec<ExprId>,
    },

    Index {
        base: ExprId,
        index: ExprId,
    },

    /// `base.name`: a swizzle on vectors and scalars, a field on structs.
    Field {
        base: ExprId,
        name: String,
    },
}

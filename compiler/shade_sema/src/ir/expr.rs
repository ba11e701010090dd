use shade_ir::{BinaryOp, PostfixOp, PrefixOp, Span};
use shade_types::Idx;

use super::{FunctionId, VariableId};

/// How a variable reference uses its variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RefKind {
    Read,
    /// Target of plain `=` or an `out` argument.
    Write,
    /// Target of a compound assignment, `++`/`--` or an `inout` argument.
    ReadWrite,
}

/// One position of a swizzle mask.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SwizzleComponent {
    /// Component `0..=3` of the base vector.
    Index(u8),
    /// Constant `0` written as `0` in the mask.
    Zero,
    /// Constant `1` written as `1` in the mask.
    One,
}

/// Typed expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expression {
    pub kind: ExpressionKind,
    /// Concrete type; [`Idx::INVALID`] only on transient references.
    pub ty: Idx,
    pub span: Span,
}

/// Expression variants.
#[derive(Clone, PartialEq, Debug)]
pub enum ExpressionKind {
    VariableReference {
        variable: VariableId,
        ref_kind: RefKind,
    },
    /// Name of an overload set awaiting a call. Never survives conversion.
    FunctionReference(Vec<FunctionId>),
    /// Type name awaiting a constructor call. Never survives conversion.
    TypeReference(Idx),
    BoolLiteral(bool),
    IntLiteral(i64),
    FloatLiteral(f64),
    Binary {
        left: Box<Expression>,
        op: BinaryOp,
        right: Box<Expression>,
    },
    Prefix {
        op: PrefixOp,
        operand: Box<Expression>,
    },
    Postfix {
        operand: Box<Expression>,
        op: PostfixOp,
    },
    Ternary {
        test: Box<Expression>,
        if_true: Box<Expression>,
        if_false: Box<Expression>,
    },
    FunctionCall {
        function: FunctionId,
        arguments: Vec<Expression>,
    },
    /// Construction of the node's own type from `arguments`.
    Constructor(Vec<Expression>),
    /// Member `field_index` of a struct or interface block value.
    FieldAccess {
        base: Box<Expression>,
        field_index: u32,
    },
    Index {
        base: Box<Expression>,
        index: Box<Expression>,
    },
    Swizzle {
        base: Box<Expression>,
        components: Vec<SwizzleComponent>,
    },
}

impl Expression {
    pub fn new(kind: ExpressionKind, ty: Idx, span: Span) -> Self {
        Expression { kind, ty, span }
    }

    pub fn bool_literal(value: bool, span: Span) -> Self {
        Expression::new(ExpressionKind::BoolLiteral(value), Idx::BOOL, span)
    }

    /// Integer literal of type `ty` (`int` or `uint`).
    pub fn int_literal(value: i64, ty: Idx, span: Span) -> Self {
        Expression::new(ExpressionKind::IntLiteral(value), ty, span)
    }

    /// Floating-point literal of type `ty` (`float` or `double`).
    pub fn float_literal(value: f64, ty: Idx, span: Span) -> Self {
        Expression::new(ExpressionKind::FloatLiteral(value), ty, span)
    }

    /// Function and type references, which need a call to become values.
    pub fn is_transient(&self) -> bool {
        matches!(
            self.kind,
            ExpressionKind::FunctionReference(_) | ExpressionKind::TypeReference(_)
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self.kind,
            ExpressionKind::BoolLiteral(_)
                | ExpressionKind::IntLiteral(_)
                | ExpressionKind::FloatLiteral(_)
        )
    }

    pub fn as_int_literal(&self) -> Option<i64> {
        match self.kind {
            ExpressionKind::IntLiteral(value) => Some(value),
            _ => None,
        }
    }
}

use shade_ir::Span;
use shade_types::Idx;

use super::{Expression, VariableId};

/// One declared variable with its optional initial value.
#[derive(Clone, PartialEq, Debug)]
pub struct VarDeclaration {
    pub var: VariableId,
    pub value: Option<Expression>,
    pub span: Span,
}

/// A declaration list sharing one base type: `float a, b[2] = ...;`
#[derive(Clone, PartialEq, Debug)]
pub struct VarDeclarations {
    pub base_type: Idx,
    pub vars: Vec<VarDeclaration>,
    pub span: Span,
}

/// `case value:` or `default:` (when `value` is `None`).
#[derive(Clone, PartialEq, Debug)]
pub struct SwitchCase {
    pub value: Option<i64>,
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: Span,
}

impl Statement {
    pub fn new(kind: StatementKind, span: Span) -> Self {
        Statement { kind, span }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum StatementKind {
    /// `is_scope` is false for the unscoped group of an empty statement.
    Block {
        statements: Vec<Statement>,
        is_scope: bool,
    },
    VarDeclarations(VarDeclarations),
    Expression(Expression),
    If {
        test: Expression,
        if_true: Box<Statement>,
        if_false: Option<Box<Statement>>,
    },
    For {
        initializer: Option<Box<Statement>>,
        test: Option<Expression>,
        next: Option<Expression>,
        body: Box<Statement>,
    },
    While {
        test: Expression,
        body: Box<Statement>,
    },
    Do {
        body: Box<Statement>,
        test: Expression,
    },
    Switch {
        value: Expression,
        cases: Vec<SwitchCase>,
    },
    Return(Option<Expression>),
    Break,
    Continue,
    Discard,
}

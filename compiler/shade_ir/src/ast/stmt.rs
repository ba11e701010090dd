use crate::{Modifiers, Span};

use super::{ExprId, StmtId};

/// A type as written: a name plus optional `[N]` dimensions.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeRef {
    pub name: String,
    pub array_sizes: Vec<u32>,
    pub span: Span,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        TypeRef {
            name: name.into(),
            array_sizes: Vec::new(),
            span,
        }
    }
}

/// One declarator in a declaration list: `name[3] = init`.
#[derive(Clone, PartialEq, Debug)]
pub struct VarDecl {
    pub name: String,
    pub array_sizes: Vec<u32>,
    /// `None` when absent or when the initializer failed to parse.
    pub init: Option<ExprId>,
    pub span: Span,
}

/// `modifiers type a, b[2] = ..., c;`
#[derive(Clone, PartialEq, Debug)]
pub struct VarDeclarations {
    pub modifiers: Modifiers,
    pub base_type: TypeRef,
    pub vars: Vec<VarDecl>,
    pub span: Span,
}

/// One `case value:` or `default:` clause. `value` is `None` for `default`.
#[derive(Clone, PartialEq, Debug)]
pub struct SwitchCase {
    pub value: Option<ExprId>,
    pub stmts: Vec<StmtId>,
    pub span: Span,
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement variants.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// `{ ... }` when `is_scope`, otherwise an unscoped group (the empty
    /// statement `;` is an empty unscoped group).
    Block {
        stmts: Vec<StmtId>,
        is_scope: bool,
    },
    VarDecls(VarDeclarations),
    Expr(ExprId),
    If {
        test: ExprId,
        if_true: StmtId,
        if_false: Option<StmtId>,
    },
    For {
        init: Option<StmtId>,
        test: Option<ExprId>,
        next: Option<ExprId>,
        body: StmtId,
    },
    While {
        test: ExprId,
        body: StmtId,
    },
    Do {
        body: StmtId,
        test: ExprId,
    },
    Switch {
        value: ExprId,
        cases: Vec<SwitchCase>,
    },
    Return(Option<ExprId>),
    Break,
    Continue,
    Discard,
}

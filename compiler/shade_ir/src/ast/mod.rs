//! Flat syntax tree produced by the parser.
//!
//! Expressions and statements are stored in an [`AstArena`] and linked by
//! [`ExprId`]/[`StmtId`]. Top-level declarations own their pieces directly
//! and are collected in a [`Module`].
//!
//! The tree is purely syntactic: identifiers are unresolved, `a.xy` is a
//! field access until the IR generator sees the base type, and `float(3)`
//! is a call whose callee happens to name a type.

mod arena;
mod decl;
mod expr;
mod stmt;

pub use arena::{ArenaMark, AstArena, ExprId, StmtId};
pub use decl::{
    Decl, ExtensionDecl, FieldDecl, FunctionDecl, InterfaceBlockDecl, Module, ParamDecl,
    StructDecl,
};
pub use expr::{Expr, ExprKind};
pub use stmt::{Stmt, StmtKind, SwitchCase, TypeRef, VarDecl, VarDeclarations};

#[cfg(test)]
mod tests;

use crate::{Modifiers, Span};

use super::{StmtId, TypeRef, VarDeclarations};

/// `#extension name : behavior`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ExtensionDecl {
    pub name: String,
    pub behavior: String,
    pub span: Span,
}

/// A struct member. Struct members never carry initializers.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FieldDecl {
    pub modifiers: Modifiers,
    pub ty: TypeRef,
    pub name: String,
    pub array_sizes: Vec<u32>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<FieldDecl>,
    pub span: Span,
}

/// `uniform Block { ... } instance[2];`
#[derive(Clone, PartialEq, Debug)]
pub struct InterfaceBlockDecl {
    pub modifiers: Modifiers,
    pub type_name: String,
    pub fields: Vec<VarDeclarations>,
    pub instance_name: Option<String>,
    pub instance_sizes: Vec<u32>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParamDecl {
    pub modifiers: Modifiers,
    pub ty: TypeRef,
    pub name: String,
    pub array_sizes: Vec<u32>,
    pub span: Span,
}

/// Function prototype (`body == None`) or definition.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionDecl {
    pub modifiers: Modifiers,
    pub return_type: TypeRef,
    pub name: String,
    pub params: Vec<ParamDecl>,
    pub body: Option<StmtId>,
    pub span: Span,
}

/// Top-level declaration.
#[derive(Clone, PartialEq, Debug)]
pub enum Decl {
    Extension(ExtensionDecl),
    /// Bare qualifier declaration such as `layout(origin_upper_left) in;`.
    Modifiers(Modifiers, Span),
    Struct(StructDecl),
    Var(VarDeclarations),
    InterfaceBlock(InterfaceBlockDecl),
    Function(FunctionDecl),
}

/// Top-level declarations of one unit, in source order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Module {
    pub decls: Vec<Decl>,
}

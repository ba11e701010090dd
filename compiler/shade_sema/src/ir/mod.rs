//! Typed intermediate representation.
//!
//! Unlike the syntax tree, IR expressions own their children: coercion wraps
//! nodes in constructors and folding replaces whole subtrees, so a node is
//! built once its operands are final. Variables and function declarations
//! live in per-program arenas and are referred to by [`VariableId`] and
//! [`FunctionId`], which keeps read/write bookkeeping in one place.

mod describe;
mod expr;
mod stmt;

use std::fmt;

use shade_ir::{LayoutFlags, Modifiers, Span};
use shade_types::{Idx, TypePool};

use crate::{ProgramKind, ProgramSettings};

pub use expr::{Expression, ExpressionKind, RefKind, SwizzleComponent};
pub use stmt::{Statement, StatementKind, SwitchCase, VarDeclaration, VarDeclarations};

/// Index into [`Program::variables`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VariableId(u32);

impl VariableId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        VariableId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariableId({})", self.0)
    }
}

/// Index into [`Program::functions`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct FunctionId(u32);

impl FunctionId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        FunctionId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionId({})", self.0)
    }
}

/// Where a variable lives.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Storage {
    Global,
    Local,
    Parameter,
}

/// A declared variable, parameter or interface block instance.
#[derive(Clone, PartialEq, Debug)]
pub struct Variable {
    pub name: String,
    pub ty: Idx,
    pub storage: Storage,
    pub modifiers: Modifiers,
    /// References that read the value; plain assignment targets do not count.
    pub read_count: u32,
    pub is_written_to: bool,
    pub span: Span,
}

impl Variable {
    pub fn new(
        name: impl Into<String>,
        ty: Idx,
        storage: Storage,
        modifiers: Modifiers,
        span: Span,
    ) -> Self {
        Variable {
            name: name.into(),
            ty,
            storage,
            modifiers,
            read_count: 0,
            is_written_to: false,
            span,
        }
    }

    pub fn is_read_from(&self) -> bool {
        self.read_count > 0
    }
}

/// A function signature, shared by its prototype and its definition.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<VariableId>,
    pub return_type: Idx,
    pub modifiers: Modifiers,
    pub is_defined: bool,
    /// Declared by the intrinsic prelude rather than the program.
    pub is_builtin: bool,
    pub span: Span,
}

/// A function with a body.
#[derive(Clone, PartialEq, Debug)]
pub struct Function {
    pub declaration: FunctionId,
    pub body: Statement,
    pub span: Span,
}

/// `uniform Block { ... } instance;`
#[derive(Clone, PartialEq, Debug)]
pub struct InterfaceBlock {
    /// The instance, or the hidden owner of the members of an anonymous block.
    pub variable: VariableId,
    pub type_name: String,
    pub instance_name: Option<String>,
    pub span: Span,
}

/// `#extension name : behavior`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Extension {
    pub name: String,
    pub behavior: String,
    pub span: Span,
}

/// Top-level element of a program, in source order.
#[derive(Clone, PartialEq, Debug)]
pub enum ProgramElement {
    Extension(Extension),
    InterfaceBlock(InterfaceBlock),
    Function(Function),
    GlobalVars(VarDeclarations),
    /// Bare qualifier declaration such as `layout(origin_upper_left) in;`.
    Modifiers(Modifiers, Span),
}

/// A fully resolved compilation unit.
///
/// Every expression and variable in it carries a concrete type from
/// `types`; generic types only appear in the signatures of the intrinsic
/// prelude's unexpanded templates, never in `elements`.
#[derive(Clone, Debug)]
pub struct Program {
    pub kind: ProgramKind,
    pub settings: ProgramSettings,
    pub elements: Vec<ProgramElement>,
    pub variables: Vec<Variable>,
    pub functions: Vec<FunctionDeclaration>,
    pub types: TypePool,
    /// Layout flags applied by top-level qualifier declarations when
    /// `replace_settings` is on.
    pub layout_flags: LayoutFlags,
}

impl Program {
    pub fn new(kind: ProgramKind, settings: ProgramSettings) -> Self {
        Program {
            kind,
            settings,
            elements: Vec::new(),
            variables: Vec::new(),
            functions: Vec::new(),
            types: TypePool::new(),
            layout_flags: LayoutFlags::empty(),
        }
    }

    /// # Panics
    /// Panics if `id` was not allocated by this program.
    #[inline]
    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.index()]
    }

    #[inline]
    pub fn variable_mut(&mut self, id: VariableId) -> &mut Variable {
        &mut self.variables[id.index()]
    }

    /// # Panics
    /// Panics if `id` was not allocated by this program.
    #[inline]
    pub fn function(&self, id: FunctionId) -> &FunctionDeclaration {
        &self.functions[id.index()]
    }

    #[inline]
    pub fn function_mut(&mut self, id: FunctionId) -> &mut FunctionDeclaration {
        &mut self.functions[id.index()]
    }

    pub fn add_variable(&mut self, variable: Variable) -> VariableId {
        let id = VariableId::new(u32::try_from(self.variables.len()).unwrap_or(u32::MAX));
        self.variables.push(variable);
        id
    }

    pub fn add_function(&mut self, function: FunctionDeclaration) -> FunctionId {
        let id = FunctionId::new(u32::try_from(self.functions.len()).unwrap_or(u32::MAX));
        self.functions.push(function);
        id
    }

    /// Function definitions in source order.
    pub fn function_definitions(&self) -> impl Iterator<Item = &Function> {
        self.elements.iter().filter_map(|element| match element {
            ProgramElement::Function(function) => Some(function),
            _ => None,
        })
    }

    /// The definition whose declaration is named `name`. With overloads,
    /// the first in source order.
    pub fn find_function(&self, name: &str) -> Option<&Function> {
        self.function_definitions()
            .find(|function| self.function(function.declaration).name == name)
    }

    /// Global variables declared at top level (not interface blocks).
    pub fn global_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.elements
            .iter()
            .filter_map(|element| match element {
                ProgramElement::GlobalVars(decls) => Some(decls.vars.iter().map(|decl| decl.var)),
                _ => None,
            })
            .flatten()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &Extension> {
        self.elements.iter().filter_map(|element| match element {
            ProgramElement::Extension(extension) => Some(extension),
            _ => None,
        })
    }
}

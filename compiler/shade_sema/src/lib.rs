//! Semantic analysis for the shade front end.
//!
//! Turns the syntax tree from `shade_parse` into a typed [`Program`]:
//! names are resolved through a scoped [`SymbolTable`], overloads and
//! constructors are chosen, implicit conversions are made explicit, and
//! constant subexpressions are folded when the settings ask for it.
//!
//! # Module Structure
//!
//! - `settings`: [`ProgramKind`] and [`ProgramSettings`]
//! - `ir`: the typed program representation
//! - `symbols`: scoped name resolution
//! - `intrinsics`: the builtin function prelude
//! - `generator`: syntax tree to IR conversion

mod generator;
mod intrinsics;
pub mod ir;
mod settings;
pub mod symbols;

pub use generator::generate;
pub use ir::{
    Expression, ExpressionKind, Function, FunctionDeclaration, FunctionId, Program,
    ProgramElement, RefKind, Statement, StatementKind, Storage, Variable, VariableId,
};
pub use settings::{ProgramKind, ProgramSettings};
pub use symbols::{Symbol, SymbolTable};

//! Grammar productions, split by construct.

mod decl;
mod expr;
mod stmt;
mod ty;

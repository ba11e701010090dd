//! Shade IR - syntax-level data structures
//!
//! This crate holds the types shared by every phase of the front end:
//! - Spans for source locations
//! - Token kinds produced by the lexer
//! - Operators, modifiers and layout qualifiers
//! - The flat syntax tree built by the parser
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: expressions and statements live in an arena and
//!   refer to each other through `ExprId`/`StmtId` indices.
//! - **Closed sums**: every node category is an enum matched exhaustively.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod modifiers;
mod operators;
mod span;
mod token;

pub use modifiers::{Layout, LayoutFlags, ModifierFlags, Modifiers};
pub use operators::{BinaryOp, PostfixOp, PrefixOp};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};

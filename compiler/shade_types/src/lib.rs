//! Type system for the shade front end.
//!
//! All types live in a [`TypePool`] and are referenced through 32-bit
//! [`Idx`] handles. Interning makes type equality structural while keeping
//! the comparison itself an integer compare: two requests for `vec3`, or two
//! struct declarations with identical names and fields, yield the same `Idx`.
//!
//! # Module Structure
//!
//! - `idx`: the handle and the fixed indices of the scalar types
//! - `data`: what a handle points at
//! - `pool`: interning, builtin registration, queries and formatting
//! - `coerce`: implicit conversion legality and cost
//! - `binary`: operand and result types of binary operators

mod binary;
mod coerce;
mod data;
mod idx;
mod pool;

pub use binary::BinaryTypes;
pub use data::{Field, ScalarKind, TypeData};
pub use idx::Idx;
pub use pool::TypePool;

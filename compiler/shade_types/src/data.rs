//! Type payloads stored in the pool.

use shade_ir::Modifiers;

use crate::Idx;

/// Scalar categories.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScalarKind {
    Bool,
    Int,
    UInt,
    Float,
    Double,
}

impl ScalarKind {
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::UInt => "uint",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
        }
    }

    pub fn is_number(self) -> bool {
        !matches!(self, ScalarKind::Bool)
    }

    pub fn is_integer(self) -> bool {
        matches!(self, ScalarKind::Int | ScalarKind::UInt)
    }

    pub fn is_floating(self) -> bool {
        matches!(self, ScalarKind::Float | ScalarKind::Double)
    }

    /// Scalars this one implicitly converts to, cheapest first. The cost of a
    /// conversion is its position in this list plus one.
    pub fn coercible_to(self) -> &'static [ScalarKind] {
        match self {
            ScalarKind::Int => &[ScalarKind::UInt, ScalarKind::Float, ScalarKind::Double],
            ScalarKind::UInt => &[ScalarKind::Float, ScalarKind::Double],
            ScalarKind::Float => &[ScalarKind::Double],
            ScalarKind::Double | ScalarKind::Bool => &[],
        }
    }

    /// Fixed type index of this scalar.
    pub fn idx(self) -> Idx {
        match self {
            ScalarKind::Bool => Idx::BOOL,
            ScalarKind::Int => Idx::INT,
            ScalarKind::UInt => Idx::UINT,
            ScalarKind::Float => Idx::FLOAT,
            ScalarKind::Double => Idx::DOUBLE,
        }
    }
}

/// Struct or interface-block member.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    pub modifiers: Modifiers,
    pub name: String,
    pub ty: Idx,
}

/// What an [`Idx`] refers to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    Void,
    /// Placeholder type of transient references.
    Invalid,
    Scalar(ScalarKind),
    Vector {
        component: Idx,
        columns: u8,
    },
    Matrix {
        component: Idx,
        columns: u8,
        rows: u8,
    },
    /// `size == None` is an unsized array.
    Array {
        element: Idx,
        size: Option<u32>,
    },
    /// Fields in declaration order.
    Struct {
        name: String,
        fields: Vec<Field>,
    },
    /// Stand-in for a family of concrete types, expanded at declaration.
    Generic {
        name: String,
        candidates: Vec<Idx>,
    },
    /// Samplers and other handles with no arithmetic.
    Opaque {
        name: String,
    },
}

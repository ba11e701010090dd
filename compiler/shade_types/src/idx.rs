//! Type index handle.
//!
//! Scalar types, `void` and the invalid placeholder have fixed indices, so
//! the hottest comparisons (`ty == Idx::BOOL`) need no pool access.

use std::fmt;

/// A 32-bit index into the [`TypePool`](crate::TypePool).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    pub const VOID: Self = Self(0);
    /// Type of expressions that only exist until a call consumes them
    /// (function and type references).
    pub const INVALID: Self = Self(1);
    pub const BOOL: Self = Self(2);
    pub const INT: Self = Self(3);
    pub const UINT: Self = Self(4);
    pub const FLOAT: Self = Self(5);
    pub const DOUBLE: Self = Self(6);

    /// Number of pre-interned fixed types.
    pub const PRIMITIVE_COUNT: u32 = 7;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }

    /// Name of a fixed type, `None` for pool-allocated types.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("void"),
            1 => Some("<INVALID>"),
            2 => Some("bool"),
            3 => Some("int"),
            4 => Some("uint"),
            5 => Some("float"),
            6 => Some("double"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Idx({name})"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

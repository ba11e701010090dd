//! Implicit conversion legality and cost.
//!
//! A conversion's cost ranks overload candidates: an exact match costs 0 and
//! each step along a scalar's coercion list costs one more. Vectors and
//! matrices convert component-wise when their shapes agree.

use crate::{Idx, TypeData, TypePool};

impl TypePool {
    /// Cost of implicitly converting `src` to `dst`, or `None` when no
    /// implicit conversion exists.
    pub fn coercion_cost(&self, src: Idx, dst: Idx) -> Option<u32> {
        if src == dst {
            return Some(0);
        }
        match (self.get(src), self.get(dst)) {
            (
                TypeData::Vector {
                    component: from,
                    columns: from_columns,
                },
                TypeData::Vector {
                    component: to,
                    columns: to_columns,
                },
            ) if from_columns == to_columns => self.coercion_cost(*from, *to),
            (
                TypeData::Matrix {
                    component: from,
                    columns: from_columns,
                    rows: from_rows,
                },
                TypeData::Matrix {
                    component: to,
                    columns: to_columns,
                    rows: to_rows,
                },
            ) if from_columns == to_columns && from_rows == to_rows => {
                self.coercion_cost(*from, *to)
            }
            (TypeData::Scalar(from), TypeData::Scalar(to)) => from
                .coercible_to()
                .iter()
                .position(|kind| kind == to)
                .and_then(|position| u32::try_from(position + 1).ok()),
            _ => None,
        }
    }

    #[inline]
    pub fn can_coerce(&self, src: Idx, dst: Idx) -> bool {
        self.coercion_cost(src, dst).is_some()
    }

    /// The vector or matrix with `scalar` components and the given shape.
    ///
    /// A 1x1 shape is the scalar itself. Returns `None` for shapes that do
    /// not exist, such as integer matrices.
    pub fn to_compound(&self, scalar: Idx, columns: u8, rows: u8) -> Option<Idx> {
        let data = match (columns, rows) {
            (1, 1) => return Some(scalar),
            (_, 1) => TypeData::Vector {
                component: scalar,
                columns,
            },
            _ => TypeData::Matrix {
                component: scalar,
                columns,
                rows,
            },
        };
        self.map_get(&data)
    }
}

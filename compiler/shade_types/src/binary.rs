//! Operand and result types of binary operators.
//!
//! The rules are tried in a fixed order: logical operators force `bool`,
//! assignments keep the left type, matrix/vector products follow their
//! dimensions, identical types pass through, the left side may be promoted
//! to the right, a compound operand may meet a scalar component-wise, and
//! finally the operands may be swapped once.

use shade_ir::BinaryOp;

use crate::{Idx, TypeData, TypePool};

/// Types both operands are converted to, and the type of the result.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BinaryTypes {
    pub left: Idx,
    pub right: Idx,
    pub result: Idx,
}

impl BinaryTypes {
    fn new(left: Idx, right: Idx, result: Idx) -> Self {
        BinaryTypes {
            left,
            right,
            result,
        }
    }

    fn flipped(self) -> Self {
        BinaryTypes::new(self.right, self.left, self.result)
    }
}

impl TypePool {
    /// Determine the operand and result types of `left op right`.
    ///
    /// Returns `None` when the operator does not apply to these types. With
    /// `try_flipped`, a failed attempt is retried once with the operands
    /// swapped (the nested attempt never swaps again).
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn determine_binary_type(
        &self,
        op: BinaryOp,
        left: Idx,
        right: Idx,
        try_flipped: bool,
    ) -> Option<BinaryTypes> {
        match op {
            BinaryOp::Comma => return Some(BinaryTypes::new(left, right, right)),
            BinaryOp::Assign => {
                return self
                    .can_coerce(right, left)
                    .then(|| BinaryTypes::new(left, left, left));
            }
            _ if op.is_assignment() => {
                // The target keeps its type: `i += 1.5` may not widen `i`.
                let base = self.determine_binary_type(
                    op.remove_assignment(),
                    left,
                    right,
                    try_flipped,
                )?;
                return (base.left == left && base.result == left).then_some(base);
            }
            _ if op.is_logical() => {
                let both_bool = self.can_coerce(left, Idx::BOOL) && self.can_coerce(right, Idx::BOOL);
                return both_bool.then(|| BinaryTypes::new(Idx::BOOL, Idx::BOOL, Idx::BOOL));
            }
            _ => {}
        }

        if op.is_relational() && !(self.is_scalar(left) && self.is_scalar(right)) {
            return None;
        }

        if op == BinaryOp::Mul {
            if let Some(product) = self.matrix_product(left, right) {
                return product;
            }
        }

        let is_comparison = op.is_comparison();
        let result_of = |operand: Idx| if is_comparison { Idx::BOOL } else { operand };

        if left == right {
            return self
                .operator_accepts(op, left)
                .then(|| BinaryTypes::new(left, left, result_of(left)));
        }

        if self.can_coerce(left, right) {
            return self
                .operator_accepts(op, right)
                .then(|| BinaryTypes::new(right, right, result_of(right)));
        }

        if !is_comparison {
            if self.is_compound(left) && self.is_scalar(right) {
                let (columns, rows) = (self.columns(left), self.rows(left));
                let component = self.component_type(left);
                if let Some(inner) = self.determine_binary_type(op, component, right, true) {
                    return Some(BinaryTypes::new(
                        self.to_compound(inner.left, columns, rows)?,
                        inner.right,
                        self.to_compound(inner.result, columns, rows)?,
                    ));
                }
                return None;
            }
            if self.is_scalar(left) && self.is_compound(right) {
                let (columns, rows) = (self.columns(right), self.rows(right));
                let component = self.component_type(right);
                if let Some(inner) = self.determine_binary_type(op, left, component, true) {
                    return Some(BinaryTypes::new(
                        inner.left,
                        self.to_compound(inner.right, columns, rows)?,
                        self.to_compound(inner.result, columns, rows)?,
                    ));
                }
                return None;
            }
        }

        if try_flipped {
            return self
                .determine_binary_type(op, right, left, false)
                .map(BinaryTypes::flipped);
        }
        None
    }

    /// Linear-algebra products. `Some(None)` is a matrix product whose
    /// dimensions disagree; `None` means the operands are not a product.
    ///
    /// A matrix has `columns` column vectors of `rows` components:
    /// - `matCxR * vecC -> vecR`
    /// - `vecR * matCxR -> vecC`
    /// - `matKxR * matCxK -> matCxR`
    #[expect(
        clippy::option_option,
        reason = "distinguishes 'not a product' from 'bad product'"
    )]
    fn matrix_product(&self, left: Idx, right: Idx) -> Option<Option<BinaryTypes>> {
        let (left_data, right_data) = (self.get(left), self.get(right));
        let product = match (left_data, right_data) {
            (
                TypeData::Matrix {
                    component,
                    columns,
                    rows,
                },
                TypeData::Vector {
                    component: vector_component,
                    columns: size,
                },
            ) => (component == vector_component && columns == size)
                .then(|| self.to_compound(*component, *rows, 1))
                .flatten(),
            (
                TypeData::Vector {
                    component: vector_component,
                    columns: size,
                },
                TypeData::Matrix {
                    component,
                    columns,
                    rows,
                },
            ) => (component == vector_component && rows == size)
                .then(|| self.to_compound(*component, *columns, 1))
                .flatten(),
            (
                TypeData::Matrix {
                    component: left_component,
                    columns: inner,
                    rows,
                },
                TypeData::Matrix {
                    component: right_component,
                    columns,
                    rows: right_rows,
                },
            ) if left != right => (left_component == right_component && inner == right_rows)
                .then(|| self.to_compound(*left_component, *columns, *rows))
                .flatten(),
            _ => return None,
        };
        Some(product.map(|result| BinaryTypes::new(left, right, result)))
    }

    /// Whether `op` is defined on operands that both have type `operand`.
    fn operator_accepts(&self, op: BinaryOp, operand: Idx) -> bool {
        let op = op.remove_assignment();
        let component = self.component_type(operand);
        match self.get(operand) {
            TypeData::Void
            | TypeData::Invalid
            | TypeData::Generic { .. }
            | TypeData::Opaque { .. } => false,
            TypeData::Array { .. } | TypeData::Struct { .. } => {
                matches!(op, BinaryOp::Eq | BinaryOp::NotEq)
            }
            TypeData::Scalar(_) | TypeData::Vector { .. } | TypeData::Matrix { .. } => {
                if op.is_integer_only() {
                    !self.is_matrix(operand) && self.is_integer(component)
                } else if op.is_arithmetic() || op.is_relational() {
                    self.is_number(component)
                } else {
                    true
                }
            }
        }
    }
}

//! Identifiers, operators, indexing, fields and swizzles.

use shade_diagnostic::ErrorCode;
use shade_ir::ast::{ExprId, ExprKind};
use shade_ir::{BinaryOp, PostfixOp, PrefixOp, Span};
use shade_types::Idx;

use super::{fold, IrGenerator};
use crate::ir::{Expression, ExpressionKind, RefKind, SwizzleComponent, VariableId};
use crate::symbols::Symbol;

/// Longest swizzle mask.
const MAX_SWIZZLE_COMPONENTS: usize = 4;

fn swizzle_component(c: char) -> Option<SwizzleComponent> {
    let component = match c {
        'x' | 'r' | 's' => SwizzleComponent::Index(0),
        'y' | 'g' | 't' => SwizzleComponent::Index(1),
        'z' | 'b' | 'p' => SwizzleComponent::Index(2),
        'w' | 'a' | 'q' => SwizzleComponent::Index(3),
        '0' => SwizzleComponent::Zero,
        '1' => SwizzleComponent::One,
        _ => return None,
    };
    Some(component)
}

impl IrGenerator<'_, '_> {
    pub(super) fn expression(&mut self, id: ExprId) -> Option<Expression> {
        let expr = self.ast_expr(id);
        let span = expr.span;
        match &expr.kind {
            ExprKind::Ident(name) => self.identifier(name, span),
            ExprKind::Int(value) => Some(Expression::int_literal(*value, Idx::INT, span)),
            ExprKind::UInt(value) => Some(Expression::int_literal(*value, Idx::UINT, span)),
            ExprKind::Float(value) => Some(Expression::float_literal(*value, Idx::FLOAT, span)),
            ExprKind::Bool(value) => Some(Expression::bool_literal(*value, span)),
            ExprKind::Binary { left, op, right } => self.binary(*left, *op, *right, span),
            ExprKind::Ternary {
                test,
                if_true,
                if_false,
            } => self.ternary(*test, *if_true, *if_false, span),
            ExprKind::Prefix { op, operand } => self.prefix(*op, *operand, span),
            ExprKind::Postfix { operand, op } => self.postfix(*operand, *op, span),
            ExprKind::Call { callee, args } => self.call(*callee, args, span),
            ExprKind::Index { base, index } => self.index(*base, *index, span),
            ExprKind::Field { base, name } => self.field(*base, name, span),
        }
    }

    /// Reject function and type names that were not followed by a call.
    pub(super) fn check_valid(&mut self, expr: Expression) -> Option<Expression> {
        let message = match &expr.kind {
            ExpressionKind::FunctionReference(_) => "expected '(' to begin function call",
            ExpressionKind::TypeReference(_) => "expected '(' to begin constructor invocation",
            _ => return Some(expr),
        };
        self.error(expr.span, ErrorCode::E2012, message);
        None
    }

    fn identifier(&mut self, name: &str, span: Span) -> Option<Expression> {
        let Some(symbol) = self.symbols.lookup(name).cloned() else {
            let suggestion = self.symbols.find_similar(name, |_| true);
            self.error_unknown(
                span,
                ErrorCode::E2002,
                format!("unknown identifier '{name}'"),
                suggestion,
            );
            return None;
        };
        let expr = match symbol {
            Symbol::Variable(id) => self.variable_reference(id, span),
            Symbol::Function(id) => {
                Expression::new(ExpressionKind::FunctionReference(vec![id]), Idx::INVALID, span)
            }
            Symbol::UnresolvedFunction(ids) => {
                Expression::new(ExpressionKind::FunctionReference(ids), Idx::INVALID, span)
            }
            Symbol::Type(ty) => Expression::new(ExpressionKind::TypeReference(ty), Idx::INVALID, span),
            Symbol::Field { owner, index } => {
                let base = self.variable_reference(owner, span);
                let ty = usize::try_from(index)
                    .ok()
                    .and_then(|index| self.program.types.fields(base.ty).get(index))
                    .map_or(Idx::INVALID, |field| field.ty);
                Expression::new(
                    ExpressionKind::FieldAccess {
                        base: Box::new(base),
                        field_index: index,
                    },
                    ty,
                    span,
                )
            }
        };
        Some(expr)
    }

    fn variable_reference(&mut self, id: VariableId, span: Span) -> Expression {
        let variable = self.program.variable_mut(id);
        variable.read_count = variable.read_count.saturating_add(1);
        Expression::new(
            ExpressionKind::VariableReference {
                variable: id,
                ref_kind: RefKind::Read,
            },
            variable.ty,
            span,
        )
    }

    fn binary(
        &mut self,
        left: ExprId,
        op: BinaryOp,
        right: ExprId,
        span: Span,
    ) -> Option<Expression> {
        let left = self.expression(left)?;
        let left = self.check_valid(left)?;
        let right = self.expression(right)?;
        let right = self.check_valid(right)?;

        if self.settings().strict_es2_mode {
            if !op.is_allowed_in_strict_es2() {
                self.error(
                    span,
                    ErrorCode::E3001,
                    format!("operator '{op}' is not allowed"),
                );
                return None;
            }
            let types = &self.program.types;
            if !op.is_valid_for_arrays_in_strict_es2()
                && (types.contains_array(left.ty) || types.contains_array(right.ty))
            {
                self.error(
                    span,
                    ErrorCode::E3002,
                    format!(
                        "operator '{op}' can not operate on arrays (or structs containing arrays)"
                    ),
                );
                return None;
            }
        }

        let types = &self.program.types;
        let binary_types = types
            .determine_binary_type(op, left.ty, right.ty, true)
            .filter(|_| !(op.is_assignment() && types.is_opaque(left.ty)));
        let Some(binary_types) = binary_types else {
            let message = format!(
                "type mismatch: '{op}' cannot operate on '{}', '{}'",
                self.format_type(left.ty),
                self.format_type(right.ty)
            );
            self.error(span, ErrorCode::E2001, message);
            return None;
        };

        let mut left = self.coerce(left, binary_types.left)?;
        let right = self.coerce(right, binary_types.right)?;
        if op.is_assignment() {
            let ref_kind = if op == BinaryOp::Assign {
                RefKind::Write
            } else {
                RefKind::ReadWrite
            };
            if !self.mark_written_to(&mut left, ref_kind) {
                return None;
            }
        }

        let divides = matches!(op.remove_assignment(), BinaryOp::Div | BinaryOp::Mod);
        let types = &self.program.types;
        if divides
            && types.is_integer(types.component_type(right.ty))
            && right.as_int_literal() == Some(0)
        {
            self.error(right.span, ErrorCode::E2013, "division by zero");
            return None;
        }

        if self.settings().optimize && !op.is_assignment() {
            if let Some(folded) = fold::fold_binary(&left, op, &right, binary_types.result, span) {
                return Some(folded);
            }
        }
        Some(Expression::new(
            ExpressionKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            binary_types.result,
            span,
        ))
    }

    fn ternary(
        &mut self,
        test: ExprId,
        if_true: ExprId,
        if_false: ExprId,
        span: Span,
    ) -> Option<Expression> {
        let test = self.expression(test)?;
        let test = self.coerce(test, Idx::BOOL)?;
        let if_true = self.expression(if_true)?;
        let if_true = self.check_valid(if_true)?;
        let if_false = self.expression(if_false)?;
        let if_false = self.check_valid(if_false)?;

        let Some(types) =
            self.program
                .types
                .determine_binary_type(BinaryOp::Eq, if_true.ty, if_false.ty, true)
        else {
            let message = format!(
                "ternary operator result mismatch: '{}', '{}'",
                self.format_type(if_true.ty),
                self.format_type(if_false.ty)
            );
            self.error(span, ErrorCode::E2001, message);
            return None;
        };
        let if_true = self.coerce(if_true, types.left)?;
        let if_false = self.coerce(if_false, types.right)?;

        if self.settings().optimize {
            if let ExpressionKind::BoolLiteral(value) = test.kind {
                return Some(if value { if_true } else { if_false });
            }
        }
        Some(Expression::new(
            ExpressionKind::Ternary {
                test: Box::new(test),
                if_true: Box::new(if_true),
                if_false: Box::new(if_false),
            },
            types.left,
            span,
        ))
    }

    /// Scalar, vector or matrix with numeric components.
    fn is_numeric(&self, ty: Idx) -> bool {
        let types = &self.program.types;
        (types.is_scalar(ty) || types.is_compound(ty)) && types.is_number(types.component_type(ty))
    }

    fn prefix(&mut self, op: PrefixOp, operand: ExprId, span: Span) -> Option<Expression> {
        let operand = self.expression(operand)?;
        let mut operand = self.check_valid(operand)?;
        let ty = operand.ty;

        if op == PrefixOp::BitNot && self.settings().strict_es2_mode {
            self.error(
                span,
                ErrorCode::E3001,
                format!("operator '{}' is not allowed", op.as_str()),
            );
            return None;
        }
        let types = &self.program.types;
        let valid = match op {
            PrefixOp::Plus | PrefixOp::Neg | PrefixOp::Inc | PrefixOp::Dec => self.is_numeric(ty),
            PrefixOp::Not => ty == Idx::BOOL,
            PrefixOp::BitNot => {
                !types.is_matrix(ty) && types.is_integer(types.component_type(ty))
            }
        };
        if !valid {
            let message = format!("'{}' cannot operate on '{}'", op.as_str(), self.format_type(ty));
            self.error(span, ErrorCode::E2018, message);
            return None;
        }

        match op {
            PrefixOp::Plus => return Some(operand),
            PrefixOp::Inc | PrefixOp::Dec => {
                if !self.mark_written_to(&mut operand, RefKind::ReadWrite) {
                    return None;
                }
            }
            PrefixOp::Neg | PrefixOp::Not | PrefixOp::BitNot => {
                let optimize = self.settings().optimize;
                if let Some(folded) = fold::fold_prefix(op, &operand, optimize, span) {
                    return Some(folded);
                }
            }
        }
        Some(Expression::new(
            ExpressionKind::Prefix {
                op,
                operand: Box::new(operand),
            },
            ty,
            span,
        ))
    }

    fn postfix(&mut self, operand: ExprId, op: PostfixOp, span: Span) -> Option<Expression> {
        let operand = self.expression(operand)?;
        let mut operand = self.check_valid(operand)?;
        let ty = operand.ty;
        if !self.is_numeric(ty) {
            let message = format!("'{}' cannot operate on '{}'", op.as_str(), self.format_type(ty));
            self.error(span, ErrorCode::E2018, message);
            return None;
        }
        if !self.mark_written_to(&mut operand, RefKind::ReadWrite) {
            return None;
        }
        Some(Expression::new(
            ExpressionKind::Postfix {
                operand: Box::new(operand),
                op,
            },
            ty,
            span,
        ))
    }

    /// `base[index]`. Constant indices are not range checked.
    ///
    /// Indexing a type name with a constant, as in `float[3]`, names the
    /// array type for a following constructor call.
    fn index(&mut self, base: ExprId, index: ExprId, span: Span) -> Option<Expression> {
        let base = self.expression(base)?;
        let index = self.expression(index)?;

        if let ExpressionKind::TypeReference(element) = base.kind {
            let size = index
                .as_int_literal()
                .and_then(|size| u32::try_from(size).ok())
                .filter(|&size| size > 0);
            let Some(size) = size else {
                self.error(
                    index.span,
                    ErrorCode::E2009,
                    "array size must be a positive integer constant",
                );
                return None;
            };
            let ty = self.program.types.array(element, Some(size));
            return Some(Expression::new(
                ExpressionKind::TypeReference(ty),
                Idx::INVALID,
                span,
            ));
        }

        let base = self.check_valid(base)?;
        let types = &self.program.types;
        let element = if let Some(element) = types.element_type(base.ty) {
            element
        } else if types.is_vector(base.ty) {
            types.component_type(base.ty)
        } else if types.is_matrix(base.ty) {
            let (component, rows) = (types.component_type(base.ty), types.rows(base.ty));
            self.program.types.vector(component, rows)
        } else {
            let message = format!("expected array, but found '{}'", self.format_type(base.ty));
            self.error(base.span, ErrorCode::E2009, message);
            return None;
        };

        let index = self.check_valid(index)?;
        let index = if self.program.types.is_integer(index.ty) {
            index
        } else {
            self.coerce(index, Idx::INT)?
        };
        Some(Expression::new(
            ExpressionKind::Index {
                base: Box::new(base),
                index: Box::new(index),
            },
            element,
            span,
        ))
    }

    /// `base.name`: a struct field, or a swizzle of a vector or scalar.
    fn field(&mut self, base: ExprId, name: &str, span: Span) -> Option<Expression> {
        let base = self.expression(base)?;
        let base = self.check_valid(base)?;
        let types = &self.program.types;

        if types.is_struct(base.ty) {
            let found = types
                .fields(base.ty)
                .iter()
                .enumerate()
                .find(|(_, field)| field.name == name)
                .map(|(index, field)| (index, field.ty));
            let Some((index, ty)) = found else {
                let message = format!(
                    "type '{}' does not have a field named '{name}'",
                    self.format_type(base.ty)
                );
                self.error(span, ErrorCode::E2008, message);
                return None;
            };
            return Some(Expression::new(
                ExpressionKind::FieldAccess {
                    base: Box::new(base),
                    field_index: u32::try_from(index).unwrap_or(u32::MAX),
                },
                ty,
                span,
            ));
        }
        if types.is_vector(base.ty) || types.is_scalar(base.ty) {
            return self.swizzle(base, name, span);
        }
        let message = format!("cannot swizzle type '{}'", self.format_type(base.ty));
        self.error(span, ErrorCode::E2008, message);
        None
    }

    fn swizzle(&mut self, base: Expression, mask: &str, span: Span) -> Option<Expression> {
        let columns = self.program.types.columns(base.ty);
        let mut components = Vec::with_capacity(mask.len());
        for c in mask.chars() {
            let component = swizzle_component(c)
                .filter(|component| !matches!(component, SwizzleComponent::Index(i) if *i >= columns));
            let Some(component) = component else {
                self.error(
                    span,
                    ErrorCode::E2008,
                    format!("invalid swizzle component '{c}'"),
                );
                return None;
            };
            components.push(component);
        }
        if components.len() > MAX_SWIZZLE_COMPONENTS {
            self.error(
                span,
                ErrorCode::E2008,
                format!("too many components in swizzle mask '{mask}'"),
            );
            return None;
        }
        if !components
            .iter()
            .any(|component| matches!(component, SwizzleComponent::Index(_)))
        {
            self.error(
                span,
                ErrorCode::E2008,
                "swizzle must refer to base expression",
            );
            return None;
        }

        let component = self.program.types.component_type(base.ty);
        let ty = match u8::try_from(components.len()) {
            Ok(1) => component,
            Ok(count) => self.program.types.vector(component, count),
            Err(_) => return None,
        };
        Some(Expression::new(
            ExpressionKind::Swizzle {
                base: Box::new(base),
                components,
            },
            ty,
            span,
        ))
    }
}

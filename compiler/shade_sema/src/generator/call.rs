//! Function calls, overload resolution and constructors.

use shade_diagnostic::{Diagnostic, ErrorCode};
use shade_ir::ast::ExprId;
use shade_ir::{ModifierFlags, Span};
use shade_types::{Idx, ScalarKind};

use super::{fold, IrGenerator};
use crate::ir::{Expression, ExpressionKind, FunctionId, RefKind};

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl IrGenerator<'_, '_> {
    pub(super) fn call(&mut self, callee: ExprId, args: &[ExprId], span: Span) -> Option<Expression> {
        let callee = self.expression(callee)?;
        let mut ok = true;
        let mut arguments = Vec::with_capacity(args.len());
        for &arg in args {
            match self.expression(arg).and_then(|arg| self.check_valid(arg)) {
                Some(argument) => arguments.push(argument),
                None => ok = false,
            }
        }
        if !ok {
            return None;
        }

        match callee.kind {
            ExpressionKind::TypeReference(ty) => self.construct(ty, arguments, span),
            ExpressionKind::FunctionReference(functions) => {
                self.resolve_call(&functions, arguments, span)
            }
            _ => {
                let message = format!("'{}' is not a function", self.program.describe(&callee));
                self.error(span, ErrorCode::E2005, message);
                None
            }
        }
    }

    /// Cost of calling `function` with `arguments`: the sum of the
    /// argument conversion costs, or `None` when it cannot be called.
    fn call_cost(&self, function: FunctionId, arguments: &[Expression]) -> Option<u32> {
        let declaration = self.program.function(function);
        if declaration.parameters.len() != arguments.len() {
            return None;
        }
        declaration
            .parameters
            .iter()
            .zip(arguments)
            .map(|(&param, argument)| {
                let param_type = self.program.variable(param).ty;
                self.program.types.coercion_cost(argument.ty, param_type)
            })
            .sum()
    }

    fn argument_types(&self, arguments: &[Expression]) -> String {
        arguments
            .iter()
            .map(|argument| self.format_type(argument.ty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Pick the cheapest overload. Ties are ambiguous.
    fn resolve_call(
        &mut self,
        functions: &[FunctionId],
        arguments: Vec<Expression>,
        span: Span,
    ) -> Option<Expression> {
        if let [function] = functions {
            return self.call_function(*function, arguments, span);
        }

        let mut best: Option<(u32, FunctionId)> = None;
        let mut ambiguous = false;
        for &function in functions {
            let Some(cost) = self.call_cost(function, &arguments) else {
                continue;
            };
            match best {
                Some((best_cost, _)) if cost > best_cost => {}
                Some((best_cost, _)) if cost == best_cost => ambiguous = true,
                _ => {
                    best = Some((cost, function));
                    ambiguous = false;
                }
            }
        }
        tracing::trace!(candidates = functions.len(), ?best, ambiguous, "resolved overload");

        let name = functions
            .first()
            .map(|&function| self.program.function(function).name.clone())
            .unwrap_or_default();
        let (message, candidates): (String, Vec<FunctionId>) = match best {
            Some((_, function)) if !ambiguous => {
                return self.call_function(function, arguments, span);
            }
            Some((best_cost, _)) => (
                format!(
                    "ambiguous call to '{name}({})'",
                    self.argument_types(&arguments)
                ),
                functions
                    .iter()
                    .copied()
                    .filter(|&function| self.call_cost(function, &arguments) == Some(best_cost))
                    .collect(),
            ),
            None => (
                format!("no match for {name}({})", self.argument_types(&arguments)),
                functions.to_vec(),
            ),
        };
        let diagnostic = candidates.into_iter().fold(
            Diagnostic::error(ErrorCode::E2005)
                .with_message(message)
                .with_label(span, ""),
            |diagnostic, function| {
                diagnostic.with_note(format!(
                    "candidate: {}",
                    self.program.describe_function(function)
                ))
            },
        );
        self.reporter.report(diagnostic);
        None
    }

    fn call_function(
        &mut self,
        function: FunctionId,
        arguments: Vec<Expression>,
        span: Span,
    ) -> Option<Expression> {
        let declaration = self.program.function(function);
        let expected = declaration.parameters.len();
        if expected != arguments.len() {
            let message = format!(
                "call to '{}' expected {expected} argument{}, but found {}",
                declaration.name,
                plural(expected),
                arguments.len()
            );
            self.error(span, ErrorCode::E2005, message);
            return None;
        }
        let parameters = declaration.parameters.clone();
        let return_type = declaration.return_type;

        let mut ok = true;
        let mut converted = Vec::with_capacity(arguments.len());
        for (argument, param) in arguments.into_iter().zip(parameters) {
            let param = self.program.variable(param);
            let (param_type, modifiers) = (param.ty, param.modifiers);
            let Some(mut argument) = self.coerce(argument, param_type) else {
                ok = false;
                continue;
            };
            if modifiers.has(ModifierFlags::OUT) {
                let ref_kind = if modifiers.has(ModifierFlags::IN) {
                    RefKind::ReadWrite
                } else {
                    RefKind::Write
                };
                if !self.mark_written_to(&mut argument, ref_kind) {
                    ok = false;
                    continue;
                }
            }
            converted.push(argument);
        }
        ok.then(|| {
            Expression::new(
                ExpressionKind::FunctionCall {
                    function,
                    arguments: converted,
                },
                return_type,
                span,
            )
        })
    }

    /// `T(args)` where `T` names a type.
    pub(super) fn construct(
        &mut self,
        ty: Idx,
        arguments: Vec<Expression>,
        span: Span,
    ) -> Option<Expression> {
        let types = &self.program.types;
        if types.is_scalar(ty) {
            return self.construct_scalar(ty, arguments, span);
        }
        if types.is_compound(ty) {
            return self.construct_compound(ty, arguments, span);
        }
        if types.is_struct(ty) {
            let fields = types.fields(ty).iter().map(|field| field.ty).collect();
            return self.construct_elements(ty, fields, arguments, span);
        }
        if let Some(element) = types.element_type(ty) {
            let size = types
                .array_size(ty)
                .and_then(|size| usize::try_from(size).ok())
                .unwrap_or(arguments.len());
            return self.construct_elements(ty, vec![element; size], arguments, span);
        }
        let message = format!("cannot construct '{}'", self.format_type(ty));
        self.error(span, ErrorCode::E2006, message);
        None
    }

    /// Struct and array constructors: one argument per element.
    fn construct_elements(
        &mut self,
        ty: Idx,
        element_types: Vec<Idx>,
        arguments: Vec<Expression>,
        span: Span,
    ) -> Option<Expression> {
        if element_types.len() != arguments.len() {
            let message = format!(
                "invalid arguments to '{}' constructor (expected {} elements, but found {})",
                self.format_type(ty),
                element_types.len(),
                arguments.len()
            );
            self.error(span, ErrorCode::E2006, message);
            return None;
        }
        let arguments = arguments
            .into_iter()
            .zip(element_types)
            .map(|(argument, element)| self.coerce(argument, element))
            .collect::<Option<Vec<_>>>()?;
        Some(Expression::new(
            ExpressionKind::Constructor(arguments),
            ty,
            span,
        ))
    }

    fn construct_scalar(
        &mut self,
        ty: Idx,
        mut arguments: Vec<Expression>,
        span: Span,
    ) -> Option<Expression> {
        if arguments.len() != 1 {
            let message = format!(
                "invalid arguments to '{}' constructor (expected exactly 1 argument, but found {})",
                self.format_type(ty),
                arguments.len()
            );
            self.error(span, ErrorCode::E2006, message);
            return None;
        }
        let argument = arguments.pop()?;
        if argument.ty == ty {
            return Some(argument);
        }

        let types = &self.program.types;
        let from = types.scalar_kind(argument.ty);
        if !from.is_some_and(|kind| kind.is_number() || kind == ScalarKind::Bool) {
            let message = format!(
                "invalid argument to '{}' constructor (expected a number or bool, but found '{}')",
                self.format_type(ty),
                self.format_type(argument.ty)
            );
            self.error(span, ErrorCode::E2006, message);
            return None;
        }

        let to = types.scalar_kind(ty);
        let is_floating = to.is_some_and(ScalarKind::is_floating);
        let is_number = to.is_some_and(ScalarKind::is_number);
        if is_number {
            if let Some(value) = argument.as_int_literal() {
                if is_floating {
                    return Some(Expression::float_literal(fold::int_to_float(value), ty, span));
                }
                if let Some(value) = fold::retype_int(value, ty) {
                    return Some(Expression::int_literal(value, ty, span));
                }
            }
            if argument.ty == Idx::BOOL {
                // `float(b)` is `b ? 1.0 : 0.0`.
                let (one, zero) = if is_floating {
                    (
                        Expression::float_literal(1.0, ty, span),
                        Expression::float_literal(0.0, ty, span),
                    )
                } else {
                    (
                        Expression::int_literal(1, ty, span),
                        Expression::int_literal(0, ty, span),
                    )
                };
                return Some(Expression::new(
                    ExpressionKind::Ternary {
                        test: Box::new(argument),
                        if_true: Box::new(one),
                        if_false: Box::new(zero),
                    },
                    ty,
                    span,
                ));
            }
        }
        Some(Expression::new(
            ExpressionKind::Constructor(vec![argument]),
            ty,
            span,
        ))
    }

    /// Vector and matrix constructors.
    ///
    /// Arguments contribute their scalars in order. A vector needs exactly
    /// its size, a matrix at least its size; a single scalar fills every
    /// component.
    fn construct_compound(
        &mut self,
        ty: Idx,
        arguments: Vec<Expression>,
        span: Span,
    ) -> Option<Expression> {
        if let [argument] = arguments.as_slice() {
            if argument.ty == ty {
                return arguments.into_iter().next();
            }
        }

        let types = &self.program.types;
        let component = types.component_type(ty);
        let expected = usize::from(types.columns(ty)) * usize::from(types.rows(ty));
        let is_matrix = types.is_matrix(ty);

        let mut scalars = 0_usize;
        let mut converted = Vec::with_capacity(arguments.len());
        for argument in arguments {
            let types = &self.program.types;
            let (columns, rows) = (types.columns(argument.ty), types.rows(argument.ty));
            let target = if types.is_scalar(argument.ty) || types.is_compound(argument.ty) {
                types.to_compound(component, columns, rows)
            } else {
                None
            };
            let Some(target) = target else {
                let message = format!(
                    "'{}' is not a valid parameter to '{}' constructor",
                    self.format_type(argument.ty),
                    self.format_type(ty)
                );
                self.error(argument.span, ErrorCode::E2006, message);
                return None;
            };
            scalars += usize::from(columns) * usize::from(rows);
            converted.push(self.coerce(argument, target)?);
        }

        let splat = scalars == 1 && converted.len() == 1;
        let enough = if is_matrix {
            scalars >= expected
        } else {
            scalars == expected
        };
        if !splat && !enough {
            let message = format!(
                "invalid arguments to '{}' constructor (expected {expected} scalar{}, but found {scalars})",
                self.format_type(ty),
                plural(expected)
            );
            self.error(span, ErrorCode::E2006, message);
            return None;
        }
        Some(Expression::new(
            ExpressionKind::Constructor(converted),
            ty,
            span,
        ))
    }
}

//! Source-like rendering of IR for diagnostics.

use std::fmt::Write as _;

use shade_types::Idx;

use super::{Expression, ExpressionKind, FunctionId, Program, SwizzleComponent, Variable};

const SWIZZLE_NAMES: [char; 4] = ['x', 'y', 'z', 'w'];

impl Program {
    /// Render `expr` roughly as it would be written in source.
    pub fn describe(&self, expr: &Expression) -> String {
        let mut buf = String::new();
        self.describe_into(expr, &mut buf);
        buf
    }

    fn describe_into(&self, expr: &Expression, buf: &mut String) {
        match &expr.kind {
            ExpressionKind::VariableReference { variable, .. } => {
                buf.push_str(&self.variable(*variable).name);
            }
            ExpressionKind::FunctionReference(functions) => {
                if let Some(&first) = functions.first() {
                    buf.push_str(&self.function(first).name);
                }
            }
            ExpressionKind::TypeReference(ty) => self.types.format_type_into(*ty, buf),
            ExpressionKind::BoolLiteral(value) => {
                let _ = write!(buf, "{value}");
            }
            ExpressionKind::IntLiteral(value) => {
                let _ = write!(buf, "{value}");
            }
            ExpressionKind::FloatLiteral(value) => {
                let _ = write!(buf, "{value:?}");
            }
            ExpressionKind::Binary { left, op, right } => {
                buf.push('(');
                self.describe_into(left, buf);
                let _ = write!(buf, " {op} ");
                self.describe_into(right, buf);
                buf.push(')');
            }
            ExpressionKind::Prefix { op, operand } => {
                buf.push_str(op.as_str());
                self.describe_into(operand, buf);
            }
            ExpressionKind::Postfix { operand, op } => {
                self.describe_into(operand, buf);
                buf.push_str(op.as_str());
            }
            ExpressionKind::Ternary {
                test,
                if_true,
                if_false,
            } => {
                buf.push('(');
                self.describe_into(test, buf);
                buf.push_str(" ? ");
                self.describe_into(if_true, buf);
                buf.push_str(" : ");
                self.describe_into(if_false, buf);
                buf.push(')');
            }
            ExpressionKind::FunctionCall {
                function,
                arguments,
            } => {
                buf.push_str(&self.function(*function).name);
                self.describe_arguments(arguments, buf);
            }
            ExpressionKind::Constructor(arguments) => {
                self.types.format_type_into(expr.ty, buf);
                self.describe_arguments(arguments, buf);
            }
            ExpressionKind::FieldAccess { base, field_index } => {
                self.describe_into(base, buf);
                let field = usize::try_from(*field_index)
                    .ok()
                    .and_then(|index| self.types.fields(base.ty).get(index));
                if let Some(field) = field {
                    buf.push('.');
                    buf.push_str(&field.name);
                }
            }
            ExpressionKind::Index { base, index } => {
                self.describe_into(base, buf);
                buf.push('[');
                self.describe_into(index, buf);
                buf.push(']');
            }
            ExpressionKind::Swizzle { base, components } => {
                self.describe_into(base, buf);
                buf.push('.');
                for component in components {
                    buf.push(match component {
                        SwizzleComponent::Index(index) => {
                            SWIZZLE_NAMES.get(usize::from(*index)).copied().unwrap_or('?')
                        }
                        SwizzleComponent::Zero => '0',
                        SwizzleComponent::One => '1',
                    });
                }
            }
        }
    }

    fn describe_arguments(&self, arguments: &[Expression], buf: &mut String) {
        buf.push('(');
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.describe_into(argument, buf);
        }
        buf.push(')');
    }

    /// Signature such as `float mix(float x, float y, float a)`.
    pub fn describe_function(&self, id: FunctionId) -> String {
        let function = self.function(id);
        let parameters = function.parameters.iter().map(|&param| self.variable(param));
        self.format_signature(&function.name, function.return_type, parameters)
    }

    /// Signature of a declaration that may not be in the program yet.
    pub(crate) fn format_signature<'v>(
        &self,
        name: &str,
        return_type: Idx,
        parameters: impl IntoIterator<Item = &'v Variable>,
    ) -> String {
        let mut buf = self.types.format_type(return_type);
        buf.push(' ');
        buf.push_str(name);
        buf.push('(');
        for (i, param) in parameters.into_iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.types.format_type_into(param.ty, &mut buf);
            buf.push(' ');
            buf.push_str(&param.name);
        }
        buf.push(')');
        buf
    }
}

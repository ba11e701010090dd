//! Assignment target validation.

use shade_diagnostic::ErrorCode;
use shade_ir::ModifierFlags;

use super::IrGenerator;
use crate::ir::{Expression, ExpressionKind, RefKind, SwizzleComponent};

impl IrGenerator<'_, '_> {
    /// Check that `expr` can be written and record the write on the
    /// variable underneath it.
    ///
    /// A plain write (`RefKind::Write`) takes back the read counted when the
    /// reference was built. Returns `false` after reporting an error.
    pub(super) fn mark_written_to(&mut self, expr: &mut Expression, ref_kind: RefKind) -> bool {
        match &mut expr.kind {
            ExpressionKind::VariableReference {
                variable,
                ref_kind: kind,
            } => {
                let target = self.program.variable_mut(*variable);
                if target.modifiers.has(ModifierFlags::IMMUTABLE) {
                    let message = format!("cannot modify immutable variable '{}'", target.name);
                    self.error(expr.span, ErrorCode::E2007, message);
                    return false;
                }
                target.is_written_to = true;
                if ref_kind == RefKind::Write {
                    target.read_count = target.read_count.saturating_sub(1);
                }
                *kind = ref_kind;
                true
            }
            ExpressionKind::FieldAccess { base, .. } | ExpressionKind::Index { base, .. } => {
                self.mark_written_to(base, ref_kind)
            }
            ExpressionKind::Swizzle { base, components } => {
                let mut seen = 0_u8;
                for component in components.iter() {
                    let SwizzleComponent::Index(index) = *component else {
                        self.error(
                            expr.span,
                            ErrorCode::E2007,
                            "cannot write to a swizzle mask containing a constant",
                        );
                        return false;
                    };
                    let bit = 1_u8 << index;
                    if seen & bit != 0 {
                        self.error(
                            expr.span,
                            ErrorCode::E2007,
                            "cannot write to the same swizzle field more than once",
                        );
                        return false;
                    }
                    seen |= bit;
                }
                self.mark_written_to(base, ref_kind)
            }
            _ => {
                let message = format!("cannot assign to '{}'", self.program.describe(expr));
                self.error(expr.span, ErrorCode::E2007, message);
                false
            }
        }
    }
}

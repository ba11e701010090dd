//! Statements and control-flow context.

use rustc_hash::FxHashSet;
use shade_diagnostic::ErrorCode;
use shade_ir::ast::{ExprId, StmtId, StmtKind, SwitchCase as AstSwitchCase};
use shade_ir::Span;
use shade_types::Idx;

use super::IrGenerator;
use crate::ir::{Expression, ExpressionKind, Statement, StatementKind, Storage, SwitchCase};

/// Settle an optional part of a statement: absent parts are fine, present
/// parts must have converted.
fn optional<T>(part: Option<Option<T>>) -> Option<Option<T>> {
    part.map_or(Some(None), |converted| converted.map(Some))
}

fn empty_block(span: Span) -> Statement {
    Statement::new(
        StatementKind::Block {
            statements: Vec::new(),
            is_scope: false,
        },
        span,
    )
}

impl IrGenerator<'_, '_> {
    pub(super) fn statement(&mut self, id: StmtId) -> Option<Statement> {
        let stmt = self.ast_stmt(id);
        let span = stmt.span;
        let kind = match &stmt.kind {
            StmtKind::Block { stmts, is_scope } => return self.block(stmts, *is_scope, span),
            StmtKind::VarDecls(decls) => {
                StatementKind::VarDeclarations(self.var_declarations(decls, Storage::Local)?)
            }
            StmtKind::Expr(expr) => {
                let expr = self.expression(*expr)?;
                StatementKind::Expression(self.check_valid(expr)?)
            }
            StmtKind::If {
                test,
                if_true,
                if_false,
            } => return self.if_statement(*test, *if_true, *if_false, span),
            StmtKind::For {
                init,
                test,
                next,
                body,
            } => {
                return self.scoped(|this| this.for_statement(*init, *test, *next, *body, span));
            }
            StmtKind::While { test, body } => {
                let test = self.bool_condition(*test);
                let body = self.loop_body(*body);
                StatementKind::While {
                    test: test?,
                    body: Box::new(body?),
                }
            }
            StmtKind::Do { body, test } => {
                let body = self.loop_body(*body);
                let test = self.bool_condition(*test);
                StatementKind::Do {
                    body: Box::new(body?),
                    test: test?,
                }
            }
            StmtKind::Switch { value, cases } => return self.switch_statement(*value, cases, span),
            StmtKind::Return(value) => StatementKind::Return(self.return_value(*value, span)?),
            StmtKind::Break => {
                if self.loop_depth == 0 && self.switch_depth == 0 {
                    self.error(
                        span,
                        ErrorCode::E2011,
                        "break statement must be inside a loop or switch",
                    );
                    return None;
                }
                StatementKind::Break
            }
            StmtKind::Continue => {
                if self.loop_depth == 0 {
                    self.error(
                        span,
                        ErrorCode::E2011,
                        "continue statement must be inside a loop",
                    );
                    return None;
                }
                StatementKind::Continue
            }
            StmtKind::Discard => {
                if !self.program.kind.allows_discard() {
                    self.error(
                        span,
                        ErrorCode::E2011,
                        "discard statement is only permitted in fragment shaders",
                    );
                    return None;
                }
                StatementKind::Discard
            }
        };
        Some(Statement::new(kind, span))
    }

    /// Every statement of the block is converted even after a failure.
    fn block(&mut self, stmts: &[StmtId], is_scope: bool, span: Span) -> Option<Statement> {
        let convert = |this: &mut Self| {
            let mut ok = true;
            let mut statements = Vec::with_capacity(stmts.len());
            for &stmt in stmts {
                match this.statement(stmt) {
                    Some(statement) => statements.push(statement),
                    None => ok = false,
                }
            }
            ok.then_some(statements)
        };
        let statements = if is_scope {
            self.scoped(convert)
        } else {
            convert(self)
        };
        Some(Statement::new(
            StatementKind::Block {
                statements: statements?,
                is_scope,
            },
            span,
        ))
    }

    fn bool_condition(&mut self, id: ExprId) -> Option<Expression> {
        let test = self.expression(id)?;
        self.coerce(test, Idx::BOOL)
    }

    fn loop_body(&mut self, id: StmtId) -> Option<Statement> {
        self.loop_depth += 1;
        let body = self.statement(id);
        self.loop_depth -= 1;
        body
    }

    fn if_statement(
        &mut self,
        test: ExprId,
        if_true: StmtId,
        if_false: Option<StmtId>,
        span: Span,
    ) -> Option<Statement> {
        let test = self.bool_condition(test);
        let if_true = self.statement(if_true);
        let if_false = optional(if_false.map(|stmt| self.statement(stmt)));
        let (test, if_true, if_false) = (test?, if_true?, if_false?);

        if self.settings().optimize {
            if let ExpressionKind::BoolLiteral(value) = test.kind {
                return Some(match (value, if_false) {
                    (true, _) => if_true,
                    (false, Some(if_false)) => if_false,
                    (false, None) => empty_block(span),
                });
            }
        }
        Some(Statement::new(
            StatementKind::If {
                test,
                if_true: Box::new(if_true),
                if_false: if_false.map(Box::new),
            },
            span,
        ))
    }

    /// Runs inside the scope of the loop's initializer.
    fn for_statement(
        &mut self,
        init: Option<StmtId>,
        test: Option<ExprId>,
        next: Option<ExprId>,
        body: StmtId,
        span: Span,
    ) -> Option<Statement> {
        let initializer = optional(init.map(|stmt| self.statement(stmt)));
        let test = optional(test.map(|expr| self.bool_condition(expr)));
        let next = optional(next.map(|expr| {
            self.expression(expr)
                .and_then(|expr| self.check_valid(expr))
        }));
        let body = self.loop_body(body);
        Some(Statement::new(
            StatementKind::For {
                initializer: initializer?.map(Box::new),
                test: test?,
                next: next?,
                body: Box::new(body?),
            },
            span,
        ))
    }

    fn switch_statement(
        &mut self,
        value: ExprId,
        cases: &[AstSwitchCase],
        span: Span,
    ) -> Option<Statement> {
        let value = self.expression(value)?;
        let value = if self.program.types.is_integer(value.ty) {
            value
        } else {
            self.coerce(value, Idx::INT)?
        };

        self.switch_depth += 1;
        let cases = self.scoped(|this| this.switch_cases(cases));
        self.switch_depth -= 1;

        Some(Statement::new(
            StatementKind::Switch {
                value,
                cases: cases?,
            },
            span,
        ))
    }

    fn switch_cases(&mut self, cases: &[AstSwitchCase]) -> Option<Vec<SwitchCase>> {
        let mut ok = true;
        let mut seen = FxHashSet::default();
        let mut converted = Vec::with_capacity(cases.len());
        for case in cases {
            let value = match case.value {
                Some(id) => {
                    let value = self.case_value(id);
                    match value {
                        Some(value) if !seen.insert(value) => {
                            self.error(case.span, ErrorCode::E2014, "duplicate case value");
                            ok = false;
                        }
                        Some(_) => {}
                        None => ok = false,
                    }
                    value
                }
                None => None,
            };
            let mut statements = Vec::with_capacity(case.stmts.len());
            for &stmt in &case.stmts {
                match self.statement(stmt) {
                    Some(statement) => statements.push(statement),
                    None => ok = false,
                }
            }
            converted.push(SwitchCase {
                value,
                statements,
                span: case.span,
            });
        }
        ok.then_some(converted)
    }

    fn case_value(&mut self, id: ExprId) -> Option<i64> {
        let expr = self.expression(id)?;
        let expr = self.coerce(expr, Idx::INT)?;
        let value = expr.as_int_literal();
        if value.is_none() {
            self.error(
                expr.span,
                ErrorCode::E2014,
                "case value must be a constant integer",
            );
        }
        value
    }

    /// The checked value of a `return`; `Some(None)` for a bare `return;`.
    fn return_value(&mut self, value: Option<ExprId>, span: Span) -> Option<Option<Expression>> {
        let return_type = self
            .current_function
            .map_or(Idx::VOID, |function| self.program.function(function).return_type);
        let Some(value) = value else {
            if return_type != Idx::VOID {
                let message = format!(
                    "expected function to return '{}'",
                    self.format_type(return_type)
                );
                self.error(span, ErrorCode::E2010, message);
                return None;
            }
            return Some(None);
        };
        let value = self.expression(value)?;
        if return_type == Idx::VOID {
            self.error(
                value.span,
                ErrorCode::E2010,
                "may not return a value from a void function",
            );
            return None;
        }
        self.coerce(value, return_type).map(Some)
    }
}

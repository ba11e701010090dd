//! Parser tests, grouped by construct.

mod declarations;

use shade_diagnostic::ErrorReporter;
use shade_ir::ast::{AstArena, Decl, ExprId, FunctionDecl, StmtId, StmtKind};

use crate::{parse, ParseOutput, Parser};

fn parse_source(source: &str) -> (ParseOutput, ErrorReporter) {
    let mut reporter = ErrorReporter::new();
    let output = parse(source, &mut reporter);
    (output, reporter)
}

/// Parse a single expression, returning the arena it was built in.
fn parse_expr(source: &str) -> (AstArena, Option<ExprId>, ErrorReporter) {
    let mut reporter = ErrorReporter::new();
    let mut parser = Parser::new(source, &mut reporter);
    let expr = parser.expression();
    let arena = parser.arena;
    (arena, expr, reporter)
}

fn messages(reporter: &ErrorReporter) -> Vec<&str> {
    reporter
        .diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.message.as_str())
        .collect()
}

fn function<'a>(output: &'a ParseOutput, name: &str) -> &'a FunctionDecl {
    output
        .module
        .decls
        .iter()
        .find_map(|decl| match decl {
            Decl::Function(function) if function.name == name => Some(function),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no function named {name}"))
}

/// Statements of `name`'s body block.
fn body(output: &ParseOutput, name: &str) -> Vec<StmtId> {
    let body = function(output, name).body.expect("function has a body");
    match &output.arena.stmt(body).kind {
        StmtKind::Block { stmts, .. } => stmts.clone(),
        other => panic!("expected block, got {other:?}"),
    }
}

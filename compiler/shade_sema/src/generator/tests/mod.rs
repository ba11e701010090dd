//! IR generator tests, grouped by construct.

mod declarations;
mod expressions;

use shade_diagnostic::ErrorReporter;

use crate::ir::{Expression, Program, ProgramElement, Statement, StatementKind, Variable};
use crate::{generate, ProgramKind, ProgramSettings};

fn generate_with(
    source: &str,
    kind: ProgramKind,
    settings: ProgramSettings,
) -> (Option<Program>, ErrorReporter) {
    let mut reporter = ErrorReporter::new();
    let parsed = shade_parse::parse(source, &mut reporter);
    assert!(
        !reporter.has_errors(),
        "parse errors: {:?}",
        messages(&reporter)
    );
    let program = generate(&parsed, kind, settings, &mut reporter);
    (program, reporter)
}

fn generate_source(source: &str) -> (Option<Program>, ErrorReporter) {
    generate_with(source, ProgramKind::Generic, ProgramSettings::default())
}

fn messages(reporter: &ErrorReporter) -> Vec<&str> {
    reporter
        .diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.message.as_str())
        .collect()
}

/// Generate `source` as a generic program, failing on any error.
fn program(source: &str) -> Program {
    let (program, reporter) = generate_source(source);
    assert!(
        !reporter.has_errors(),
        "unexpected errors: {:?}",
        messages(&reporter)
    );
    program.expect("no errors were reported")
}

/// Generate `source`, which must fail, and return its error messages.
fn errors(source: &str) -> Vec<String> {
    let (program, reporter) = generate_source(source);
    assert!(program.is_none(), "expected {source:?} to fail");
    messages(&reporter).into_iter().map(str::to_string).collect()
}

/// Initializer of the global variable `name`.
fn global_value<'p>(program: &'p Program, name: &str) -> &'p Expression {
    program
        .elements
        .iter()
        .find_map(|element| match element {
            ProgramElement::GlobalVars(decls) => decls
                .vars
                .iter()
                .find(|decl| program.variable(decl.var).name == name),
            _ => None,
        })
        .and_then(|decl| decl.value.as_ref())
        .unwrap_or_else(|| panic!("no initialized global named {name}"))
}

/// The most recently declared variable called `name`.
fn variable<'p>(program: &'p Program, name: &str) -> &'p Variable {
    program
        .variables
        .iter()
        .rev()
        .find(|variable| variable.name == name)
        .unwrap_or_else(|| panic!("no variable named {name}"))
}

/// Statements of the body of the function `name`.
fn body<'p>(program: &'p Program, name: &str) -> &'p [Statement] {
    let function = program
        .find_function(name)
        .unwrap_or_else(|| panic!("no function named {name}"));
    match &function.body.kind {
        StatementKind::Block { statements, .. } => statements,
        other => panic!("expected block, got {other:?}"),
    }
}

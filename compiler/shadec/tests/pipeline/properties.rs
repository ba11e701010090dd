use pretty_assertions::assert_eq;
use shade_ir::BinaryOp;
use shade_sema::{Expression, ExpressionKind, Program, ProgramElement, Statement, StatementKind};
use shade_types::Idx;
use shadec::ProgramSettings;

use crate::common::{compile_errors, compile_fragment, compile_generic};

fn main_body(program: &Program) -> &[Statement] {
    let main = program.find_function("main").expect("main is defined");
    match &main.body.kind {
        StatementKind::Block { statements, .. } => statements,
        other => panic!("expected block, got {other:?}"),
    }
}

fn initializer(statement: &Statement) -> &Expression {
    let StatementKind::VarDeclarations(decls) = &statement.kind else {
        panic!("expected declaration, got {:?}", statement.kind);
    };
    decls.vars[0].value.as_ref().expect("initializer")
}

fn global(program: &Program, name: &str) -> Expression {
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
        .and_then(|decl| decl.value.clone())
        .unwrap_or_else(|| panic!("no initialized global named {name}"))
}

fn binary_parts(expr: &Expression) -> (&Expression, BinaryOp, &Expression) {
    match &expr.kind {
        ExpressionKind::Binary { left, op, right } => (left, *op, right),
        other => panic!("expected binary, got {other:?}"),
    }
}

fn variable_name<'p>(program: &'p Program, expr: &Expression) -> &'p str {
    match &expr.kind {
        ExpressionKind::VariableReference { variable, .. } => &program.variable(*variable).name,
        other => panic!("expected variable reference, got {other:?}"),
    }
}

#[test]
fn test_multiplication_binds_tighter_and_assignment_is_right_associative() {
    let program = compile_fragment(
        "void main() { float a; float b; float c = 1.0; a = b = c; float d = a + b * c; }",
        ProgramSettings::default().with_optimize(false),
    );
    let body = main_body(&program);

    let StatementKind::Expression(assign) = &body[3].kind else {
        panic!("expected expression statement");
    };
    let (target, op, value) = binary_parts(assign);
    assert_eq!(variable_name(&program, target), "a");
    assert_eq!(op, BinaryOp::Assign);
    let (inner_target, inner_op, inner_value) = binary_parts(value);
    assert_eq!(variable_name(&program, inner_target), "b");
    assert_eq!(inner_op, BinaryOp::Assign);
    assert_eq!(variable_name(&program, inner_value), "c");

    let (left, op, right) = binary_parts(initializer(&body[4]));
    assert_eq!(variable_name(&program, left), "a");
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(binary_parts(right).1, BinaryOp::Mul);
}

#[test]
fn test_block_variables_are_not_visible_after_the_block() {
    assert_eq!(
        compile_errors("void f() { { float inner = 1.0; } float x = inner; }"),
        vec!["unknown identifier 'inner'"]
    );
    let result = compile_generic("float f() { float x = 1.0; { float x = 2.0; } return x; }");
    assert!(!result.has_errors());
}

#[test]
fn test_coercing_to_the_same_type_is_a_no_op() {
    let program = compile_generic("float g = 1.0; float h = g;")
        .program
        .expect("program");
    assert!(matches!(
        global(&program, "h").kind,
        ExpressionKind::VariableReference { .. }
    ));
}

#[test]
fn test_scalar_constructor_of_int_literal_folds_to_float_literal() {
    let program = compile_generic("float f = float(3);")
        .program
        .expect("program");
    let value = global(&program, "f");
    assert_eq!(value.kind, ExpressionKind::FloatLiteral(3.0));
    assert_eq!(value.ty, Idx::FLOAT);
}

#[test]
fn test_exact_overload_beats_coercion() {
    let program = compile_generic(
        "float f(float x) { return x; } int f(int x) { return x; } int y = f(3);",
    )
    .program
    .expect("program");
    let ExpressionKind::FunctionCall { function, .. } = global(&program, "y").kind else {
        panic!("expected call");
    };
    assert_eq!(program.function(function).return_type, Idx::INT);
}

#[test]
fn test_const_and_uniform_variables_are_write_protected() {
    assert_eq!(
        compile_errors("const int k = 1; void f() { k = 2; }"),
        vec!["cannot modify immutable variable 'k'"]
    );
    assert_eq!(
        compile_errors("uniform vec4 color; void f() { color.x = 1.0; }"),
        vec!["cannot modify immutable variable 'color'"]
    );
}

#[test]
fn test_swizzle_assignment_may_not_repeat_a_field() {
    assert_eq!(
        compile_errors("void f() { vec2 v = vec2(0.0); v.xx = vec2(1.0); }"),
        vec!["cannot write to the same swizzle field more than once"]
    );
    let result = compile_generic("void f() { vec2 v = vec2(0.0); v.xy = vec2(1.0); }");
    assert!(!result.has_errors());
}

#[test]
fn test_array_sizes_must_be_positive() {
    for source in ["int a[0];", "int a[-1];"] {
        let result = compile_generic(source);
        assert_eq!(result.messages(), vec!["array size must be positive"]);
        assert!(result.program.is_none());
    }

    let program = compile_generic("int a[3];").program.expect("program");
    let a = program
        .global_variables()
        .find(|&id| program.variable(id).name == "a")
        .expect("a is declared");
    assert_eq!(program.types.array_size(program.variable(a).ty), Some(3));
}

#[test]
fn test_case_after_default_is_rejected() {
    let result = compile_generic(
        "void f(int x) { switch (x) { default: break; case 1: break; } }",
    );
    assert!(result.program.is_none());
    assert_eq!(result.messages(), vec!["expected '}', but found 'case'"]);
}

#[test]
fn test_struct_field_indices_follow_declaration_order() {
    let program = compile_generic("struct S { float a; int b; }; S s; float x = s.a; int y = s.b;")
        .program
        .expect("program");
    for (name, expected) in [("x", 0), ("y", 1)] {
        let ExpressionKind::FieldAccess { field_index, .. } = global(&program, name).kind else {
            panic!("expected field access");
        };
        assert_eq!(field_index, expected);
    }
}

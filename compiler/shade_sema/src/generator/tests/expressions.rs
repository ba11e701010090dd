use pretty_assertions::assert_eq;
use shade_ir::BinaryOp;
use shade_types::Idx;

use super::{errors, generate_source, generate_with, global_value, program};
use crate::ir::{ExpressionKind, SwizzleComponent};
use crate::{ProgramKind, ProgramSettings};

#[test]
fn test_unoptimized_arithmetic_keeps_its_shape() {
    let settings = ProgramSettings::default().with_optimize(false);
    let (program, reporter) = generate_with("int x = 1 + 2 * 3;", ProgramKind::Generic, settings);
    assert!(!reporter.has_errors());
    let program = program.expect("program");
    let value = global_value(&program, "x");
    assert_eq!(value.ty, Idx::INT);
    let ExpressionKind::Binary { left, op, right } = &value.kind else {
        panic!("expected binary, got {:?}", value.kind);
    };
    assert_eq!(left.kind, ExpressionKind::IntLiteral(1));
    assert_eq!(*op, BinaryOp::Add);
    let ExpressionKind::Binary { left, op, right } = &right.kind else {
        panic!("expected binary, got {:?}", right.kind);
    };
    assert_eq!(left.kind, ExpressionKind::IntLiteral(2));
    assert_eq!(*op, BinaryOp::Mul);
    assert_eq!(right.kind, ExpressionKind::IntLiteral(3));
}

#[test]
fn test_constant_arithmetic_folds() {
    let program = program("int x = 1 + 2 * 3; float f = 1.5 * 2.0; bool b = 2 < 3;");
    assert_eq!(global_value(&program, "x").kind, ExpressionKind::IntLiteral(7));
    assert_eq!(global_value(&program, "f").kind, ExpressionKind::FloatLiteral(3.0));
    assert_eq!(global_value(&program, "b").kind, ExpressionKind::BoolLiteral(true));
    assert_eq!(global_value(&program, "b").ty, Idx::BOOL);
}

#[test]
fn test_integer_folding_respects_32_bit_range() {
    let program = program("int x = 2147483647 + 1; int y = 1 << 40; int z = 2147483646 + 1;");
    for name in ["x", "y"] {
        assert!(matches!(
            global_value(&program, name).kind,
            ExpressionKind::Binary { .. }
        ));
    }
    assert_eq!(
        global_value(&program, "z").kind,
        ExpressionKind::IntLiteral(2_147_483_647)
    );
}

#[test]
fn test_unsigned_literals() {
    let program = program("uint a = 4000000000u; uint b = -1; uint c = uint(-2); uint d = 7;");
    let a = global_value(&program, "a");
    assert_eq!(a.kind, ExpressionKind::IntLiteral(4_000_000_000));
    assert_eq!(a.ty, Idx::UINT);
    assert_eq!(
        global_value(&program, "b").kind,
        ExpressionKind::IntLiteral(4_294_967_295)
    );
    assert_eq!(
        global_value(&program, "c").kind,
        ExpressionKind::IntLiteral(4_294_967_294)
    );
    assert_eq!(global_value(&program, "d").ty, Idx::UINT);
    assert_eq!(
        errors("int i = 1u;"),
        vec!["expected 'int', but found 'uint'"]
    );
}

#[test]
fn test_integer_literal_becomes_float_literal() {
    let program = program("float f = 1;");
    let value = global_value(&program, "f");
    assert_eq!(value.kind, ExpressionKind::FloatLiteral(1.0));
    assert_eq!(value.ty, Idx::FLOAT);
}

#[test]
fn test_coercion_only_wraps_when_types_differ() {
    let program = program("int i = 2; float f = i; float g = 1.0; float h = g;");

    let converted = global_value(&program, "f");
    assert_eq!(converted.ty, Idx::FLOAT);
    let ExpressionKind::Constructor(arguments) = &converted.kind else {
        panic!("expected constructor, got {:?}", converted.kind);
    };
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].ty, Idx::INT);

    let unchanged = global_value(&program, "h");
    assert!(matches!(
        unchanged.kind,
        ExpressionKind::VariableReference { .. }
    ));
    assert_eq!(unchanged.ty, Idx::FLOAT);
}

#[test]
fn test_scalar_constructor_of_literal_folds() {
    let program = program("float f = float(3); int i = int(7);");
    assert_eq!(global_value(&program, "f").kind, ExpressionKind::FloatLiteral(3.0));
    assert_eq!(global_value(&program, "i").kind, ExpressionKind::IntLiteral(7));
}

#[test]
fn test_bool_to_float_constructor_is_a_ternary() {
    let program = program("bool b = true; float f = float(b);");
    let value = global_value(&program, "f");
    let ExpressionKind::Ternary {
        if_true, if_false, ..
    } = &value.kind
    else {
        panic!("expected ternary, got {:?}", value.kind);
    };
    assert_eq!(if_true.kind, ExpressionKind::FloatLiteral(1.0));
    assert_eq!(if_false.kind, ExpressionKind::FloatLiteral(0.0));
}

#[test]
fn test_vector_constructor_scalar_counts() {
    let program = program("vec4 v = vec4(vec2(1.0), 0.0, 1.0); vec3 s = vec3(1.0);");
    let ExpressionKind::Constructor(arguments) = &global_value(&program, "v").kind else {
        panic!("expected constructor");
    };
    assert_eq!(arguments.len(), 3);

    assert_eq!(
        errors("vec3 v = vec3(1.0, 2.0);"),
        vec!["invalid arguments to 'vec3' constructor (expected 3 scalars, but found 2)"]
    );
}

#[test]
fn test_unknown_identifier_suggests_closest_name() {
    let (program, reporter) = generate_source("float color = 1.0; float x = colr;");
    assert!(program.is_none());
    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "unknown identifier 'colr'");
    assert_eq!(diagnostics[0].suggestions, vec!["did you mean 'color'?"]);
}

#[test]
fn test_binary_type_mismatch() {
    assert_eq!(
        errors("float x = 1.0 + true;"),
        vec!["type mismatch: '+' cannot operate on 'float', 'bool'"]
    );
}

#[test]
fn test_scalar_vector_arithmetic_widens() {
    let settings = ProgramSettings::default().with_optimize(false);
    let (program, _) = generate_with(
        "vec2 v = vec2(1.0); vec2 w = v * 2.0;",
        ProgramKind::Generic,
        settings,
    );
    let program = program.expect("program");
    let value = global_value(&program, "w");
    assert_eq!(program.types.format_type(value.ty), "vec2");
}

#[test]
fn test_ternary_coerces_branches() {
    let program = program("bool b = true; float x = b ? 1 : 2.0;");
    let value = global_value(&program, "x");
    let ExpressionKind::Ternary { if_true, .. } = &value.kind else {
        panic!("expected ternary, got {:?}", value.kind);
    };
    assert_eq!(value.ty, Idx::FLOAT);
    assert_eq!(if_true.kind, ExpressionKind::FloatLiteral(1.0));
}

#[test]
fn test_ternary_with_literal_test_folds() {
    let program = program("float x = false ? 1.0 : 2.0;");
    assert_eq!(global_value(&program, "x").kind, ExpressionKind::FloatLiteral(2.0));
}

#[test]
fn test_ternary_mismatch() {
    assert_eq!(
        errors("float y = true ? 1.0 : vec2(1.0);"),
        vec!["ternary operator result mismatch: 'float', 'vec2'"]
    );
}

#[test]
fn test_swizzles() {
    let program = program("vec4 v = vec4(1.0); vec2 a = v.xy; float b = v.w; vec3 c = v.rgb;");
    let value = global_value(&program, "a");
    let ExpressionKind::Swizzle { components, .. } = &value.kind else {
        panic!("expected swizzle, got {:?}", value.kind);
    };
    assert_eq!(
        components,
        &vec![SwizzleComponent::Index(0), SwizzleComponent::Index(1)]
    );
    assert_eq!(global_value(&program, "b").ty, Idx::FLOAT);
    assert_eq!(program.types.format_type(global_value(&program, "c").ty), "vec3");
}

#[test]
fn test_invalid_swizzles() {
    assert_eq!(
        errors("vec2 v = vec2(1.0); float z = v.z;"),
        vec!["invalid swizzle component 'z'"]
    );
    assert_eq!(
        errors("vec4 w = vec4(1.0); vec4 t = w.xyzwx;"),
        vec!["too many components in swizzle mask 'xyzwx'"]
    );
}

#[test]
fn test_struct_field_access_uses_declaration_index() {
    let program = program("struct S { float a; int b; }; S s; float x = s.a; int y = s.b;");
    let index_of = |name| match &global_value(&program, name).kind {
        ExpressionKind::FieldAccess { field_index, .. } => *field_index,
        other => panic!("expected field access, got {other:?}"),
    };
    assert_eq!(index_of("x"), 0);
    assert_eq!(index_of("y"), 1);
    assert_eq!(global_value(&program, "y").ty, Idx::INT);
}

#[test]
fn test_missing_struct_field() {
    assert_eq!(
        errors("struct S { float a; }; S s; float f = s.b;"),
        vec!["type 'S' does not have a field named 'b'"]
    );
}

#[test]
fn test_indexing() {
    let program = program("float arr[3]; float x = arr[1]; mat3 m = mat3(1.0); vec3 c = m[0];");
    let value = global_value(&program, "x");
    assert!(matches!(value.kind, ExpressionKind::Index { .. }));
    assert_eq!(value.ty, Idx::FLOAT);
    assert_eq!(program.types.format_type(global_value(&program, "c").ty), "vec3");

    assert_eq!(
        errors("float f = 1.0; float g = f[0];"),
        vec!["expected array, but found 'float'"]
    );
}

#[test]
fn test_array_type_constructor() {
    let program = program("float arr[2] = float[2](1, 2.0);");
    let value = global_value(&program, "arr");
    assert_eq!(program.types.array_size(value.ty), Some(2));
    let ExpressionKind::Constructor(arguments) = &value.kind else {
        panic!("expected constructor, got {:?}", value.kind);
    };
    assert_eq!(arguments[0].kind, ExpressionKind::FloatLiteral(1.0));
}

#[test]
fn test_prefix_operators() {
    let program = program("int x = -5; bool b = !true;");
    assert_eq!(global_value(&program, "x").kind, ExpressionKind::IntLiteral(-5));
    assert_eq!(global_value(&program, "b").kind, ExpressionKind::BoolLiteral(false));

    assert_eq!(errors("bool b = -true;"), vec!["'-' cannot operate on 'bool'"]);
}

#[test]
fn test_integer_division_by_literal_zero() {
    assert_eq!(errors("int x = 1 / 0;"), vec!["division by zero"]);

    let program = program("float f = 1.0 / 0.0;");
    assert!(matches!(
        global_value(&program, "f").kind,
        ExpressionKind::Binary { .. }
    ));
}

#[test]
fn test_names_without_call() {
    assert_eq!(
        errors("float f = sin;"),
        vec!["expected '(' to begin function call"]
    );
    assert_eq!(
        errors("float g = float;"),
        vec!["expected '(' to begin constructor invocation"]
    );
}

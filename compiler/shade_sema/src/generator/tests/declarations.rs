use pretty_assertions::assert_eq;
use shade_ir::LayoutFlags;
use shade_types::Idx;

use super::{body, errors, generate_source, generate_with, program, variable};
use crate::ir::{ExpressionKind, ProgramElement, StatementKind, Storage};
use crate::{ProgramKind, ProgramSettings};

#[test]
fn test_global_variables() {
    let program = program("float x; int arr[3], y = 2;");
    let globals: Vec<_> = program
        .global_variables()
        .map(|id| program.variable(id).name.as_str())
        .collect();
    assert_eq!(globals, vec!["x", "arr", "y"]);

    let arr = variable(&program, "arr");
    assert_eq!(arr.storage, Storage::Global);
    assert_eq!(program.types.element_type(arr.ty), Some(Idx::INT));
    assert_eq!(program.types.array_size(arr.ty), Some(3));
}

#[test]
fn test_multidimensional_array_outermost_first() {
    let program = program("float grid[2][3];");
    let grid = variable(&program, "grid");
    assert_eq!(program.types.array_size(grid.ty), Some(2));
    let inner = program.types.element_type(grid.ty).expect("array of arrays");
    assert_eq!(program.types.array_size(inner), Some(3));
}

#[test]
fn test_duplicate_symbols() {
    assert_eq!(
        errors("float x; float x;"),
        vec!["symbol 'x' was already defined"]
    );
    assert_eq!(
        errors("float x; void x() {}"),
        vec!["symbol 'x' was already defined"]
    );
    assert_eq!(
        errors("struct S { float x; }; struct S { int y; };"),
        vec!["symbol 'S' was already defined"]
    );
}

#[test]
fn test_redefinition_points_at_earlier_declaration() {
    let source = "float x;\nint x;";
    let (_, reporter) = generate_source(source);
    let labels = &reporter.diagnostics()[0].labels;
    assert_eq!(labels.len(), 2);
    assert!(!labels[1].is_primary);
    assert_eq!(labels[1].message, "previously defined here");
    let rendered = reporter.diagnostics()[0].render(source);
    assert!(rendered.contains("::: 1:"), "{rendered}");

    let (_, reporter) = generate_source("struct S { float x; }; struct S { int y; };");
    assert_eq!(reporter.diagnostics()[0].labels.len(), 1);
}

#[test]
fn test_local_may_shadow_global() {
    let program = program("float x = 1.0; float f() { int x = 2; return 1.0; }");
    let StatementKind::VarDeclarations(decls) = &body(&program, "f")[0].kind else {
        panic!("expected declaration");
    };
    assert_eq!(program.variable(decls.vars[0].var).storage, Storage::Local);
}

#[test]
fn test_unusable_variable_types() {
    assert_eq!(
        errors("void v;"),
        vec!["variables of type 'void' are not allowed"]
    );
    assert_eq!(
        errors("$genType g;"),
        vec!["type '$genType' may only be used in function declarations"]
    );
}

#[test]
fn test_struct_with_duplicate_field_is_not_declared() {
    assert_eq!(
        errors("struct S { float x; float x; }; S s;"),
        vec![
            "field 'x' was already defined in the same struct",
            "unknown type 'S'",
        ]
    );
}

#[test]
fn test_anonymous_interface_block_members_are_bare_names() {
    let program = program("uniform Globals { float scale; vec2 offset; }; vec2 f() { return offset * scale; }");
    assert!(program
        .elements
        .iter()
        .any(|element| matches!(element, ProgramElement::InterfaceBlock(block) if block.instance_name.is_none())));

    let StatementKind::Return(Some(value)) = &body(&program, "f")[0].kind else {
        panic!("expected return");
    };
    let ExpressionKind::Binary { left, .. } = &value.kind else {
        panic!("expected binary, got {:?}", value.kind);
    };
    let ExpressionKind::FieldAccess { field_index, .. } = &left.kind else {
        panic!("expected field access, got {:?}", left.kind);
    };
    assert_eq!(*field_index, 1);
}

#[test]
fn test_named_interface_block() {
    let program = program("uniform Globals { float scale; } globals; float f() { return globals.scale; }");
    let block = variable(&program, "globals");
    assert!(program.types.is_struct(block.ty));
    assert_eq!(program.types.fields(block.ty)[0].name, "scale");
}

#[test]
fn test_interface_block_members_are_read_only() {
    assert_eq!(
        errors("uniform Block { float x; }; void f() { x = 1.0; }"),
        vec!["cannot modify immutable variable 'Block'"]
    );
}

#[test]
fn test_interface_block_field_errors() {
    assert_eq!(
        errors("uniform Block { float x = 1.0; };"),
        vec!["initializers are not permitted on interface block fields"]
    );
    assert_eq!(
        errors("uniform Block { float x; int x; };"),
        vec!["field 'x' was already defined in the same block"]
    );
}

#[test]
fn test_extensions_are_kept() {
    let program = program("#extension GL_EXT_foo : enable\nfloat x;");
    let extensions: Vec<_> = program
        .extensions()
        .map(|extension| (extension.name.as_str(), extension.behavior.as_str()))
        .collect();
    assert_eq!(extensions, vec![("GL_EXT_foo", "enable")]);
}

#[test]
fn test_layout_settings_replaced_only_when_enabled() {
    let source = "layout(origin_upper_left) in;";
    let (program, _) = generate_with(source, ProgramKind::Generic, ProgramSettings::default());
    let program = program.expect("program");
    assert_eq!(program.layout_flags, LayoutFlags::empty());
    assert!(matches!(
        program.elements[0],
        ProgramElement::Modifiers(..)
    ));

    let settings = ProgramSettings::default().with_replace_settings(true);
    let (program, _) = generate_with(source, ProgramKind::Generic, settings);
    let program = program.expect("program");
    assert!(program.layout_flags.contains(LayoutFlags::ORIGIN_UPPER_LEFT));
}

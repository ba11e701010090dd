use pretty_assertions::assert_eq;
use shade_ir::ast::Decl;
use shade_ir::{LayoutFlags, ModifierFlags};

use super::{function, messages, parse_source};

#[test]
fn test_global_variables_with_arrays() {
    let (output, reporter) = parse_source("int a[3], b[2][4] = c, d;");
    assert!(!reporter.has_errors());
    let [Decl::Var(vars)] = output.module.decls.as_slice() else {
        panic!("expected one declaration");
    };
    assert_eq!(vars.base_type.name, "int");
    let sizes: Vec<_> = vars.vars.iter().map(|v| v.array_sizes.clone()).collect();
    assert_eq!(sizes, vec![vec![3], vec![2, 4], vec![]]);
    assert!(vars.vars[1].init.is_some());
}

#[test]
fn test_array_size_must_be_positive() {
    for source in ["int a[0];", "int a[-1];"] {
        let (output, reporter) = parse_source(source);
        assert_eq!(messages(&reporter), vec!["array size must be positive"]);
        assert!(output.module.decls.is_empty());
    }
}

#[test]
fn test_array_size_errors() {
    let (_, reporter) = parse_source("int a[];");
    assert_eq!(messages(&reporter), vec!["expected array dimension"]);
    let (_, reporter) = parse_source("int a[3000000000u];");
    assert_eq!(messages(&reporter), vec!["array size out of bounds"]);
    let (_, reporter) = parse_source("int a[x];");
    assert_eq!(messages(&reporter), vec!["expected int literal, but found 'x'"]);
}

#[test]
fn test_struct_declaration_and_use() {
    let (output, reporter) = parse_source("struct S { float a; int b, c[2]; } s; S t;");
    assert!(!reporter.has_errors(), "{:?}", messages(&reporter));
    let Decl::Struct(decl) = &output.module.decls[0] else {
        panic!("expected struct");
    };
    let names: Vec<_> = decl.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(decl.fields[2].array_sizes, vec![2]);
    assert!(matches!(&output.module.decls[1], Decl::Var(v) if v.base_type.name == "S"));
    assert!(matches!(&output.module.decls[2], Decl::Var(v) if v.vars[0].name == "t"));
}

#[test]
fn test_empty_struct() {
    let (_, reporter) = parse_source("struct S { };");
    assert_eq!(
        messages(&reporter),
        vec!["struct 'S' must contain at least one field"]
    );
}

#[test]
fn test_interface_block() {
    let (output, reporter) = parse_source("uniform Globals { float scale; int count; } globals[2];");
    assert!(!reporter.has_errors(), "{:?}", messages(&reporter));
    let [Decl::InterfaceBlock(block)] = output.module.decls.as_slice() else {
        panic!("expected interface block");
    };
    assert_eq!(block.type_name, "Globals");
    assert!(block.modifiers.has(ModifierFlags::UNIFORM));
    assert_eq!(block.fields.len(), 2);
    assert_eq!(block.instance_name.as_deref(), Some("globals"));
    assert_eq!(block.instance_sizes, vec![2]);
}

#[test]
fn test_interface_block_errors() {
    let (_, reporter) = parse_source("uniform Empty { };");
    assert_eq!(
        messages(&reporter),
        vec!["interface block 'Empty' must contain at least one member"]
    );
    let (_, reporter) = parse_source("uniform B { float x; } b[];");
    assert_eq!(messages(&reporter), vec!["unsized arrays are not permitted"]);
}

#[test]
fn test_unknown_type_name() {
    let (_, reporter) = parse_source("floot x;");
    assert_eq!(messages(&reporter)[0], "no type named 'floot'");
}

#[test]
fn test_function_prototype_and_definition() {
    let (output, reporter) = parse_source(
        "float f(in float x, out int y[2]); void main(void) { } void g() { }",
    );
    assert!(!reporter.has_errors(), "{:?}", messages(&reporter));
    let f = function(&output, "f");
    assert!(f.body.is_none());
    assert_eq!(f.params.len(), 2);
    assert!(f.params[0].modifiers.has(ModifierFlags::IN));
    assert_eq!(f.params[1].array_sizes, vec![2]);
    assert!(function(&output, "main").params.is_empty());
    assert!(function(&output, "main").body.is_some());
    assert!(function(&output, "g").params.is_empty());
}

#[test]
fn test_modifiers_and_layout() {
    let (output, reporter) = parse_source(
        "layout(location = 1, binding=2, origin_upper_left) flat in vec4 color;",
    );
    assert!(!reporter.has_errors(), "{:?}", messages(&reporter));
    let [Decl::Var(vars)] = output.module.decls.as_slice() else {
        panic!("expected declaration");
    };
    let modifiers = vars.modifiers;
    assert_eq!(modifiers.flags, ModifierFlags::FLAT | ModifierFlags::IN);
    assert_eq!(modifiers.layout.location, 1);
    assert_eq!(modifiers.layout.binding, 2);
    assert!(modifiers.layout.flags.contains(LayoutFlags::ORIGIN_UPPER_LEFT));
    assert_eq!(modifiers.layout.set, -1);
}

#[test]
fn test_inout_modifier_sets_both() {
    let (output, _) = parse_source("void f(inout float x);");
    let f = function(&output, "f");
    assert_eq!(
        f.params[0].modifiers.flags,
        ModifierFlags::IN | ModifierFlags::OUT
    );
}

#[test]
fn test_duplicate_modifier() {
    let (output, reporter) = parse_source("const const int x = 1;");
    assert_eq!(messages(&reporter), vec!["'const' appears more than once"]);
    assert_eq!(output.module.decls.len(), 1);
}

#[test]
fn test_invalid_layout_qualifier() {
    let (_, reporter) = parse_source("layout(bogus) uniform float x;");
    assert_eq!(
        messages(&reporter),
        vec!["'bogus' is not a valid layout qualifier"]
    );
}

#[test]
fn test_modifiers_only_declaration() {
    let (output, reporter) = parse_source("layout(origin_upper_left) in;");
    assert!(!reporter.has_errors());
    assert!(matches!(output.module.decls[0], Decl::Modifiers(..)));
}

#[test]
fn test_extension_directive() {
    let (output, reporter) = parse_source("#extension GL_EXT_foo : enable\nint x;");
    assert!(!reporter.has_errors());
    let Decl::Extension(extension) = &output.module.decls[0] else {
        panic!("expected extension");
    };
    assert_eq!(extension.name, "GL_EXT_foo");
    assert_eq!(extension.behavior, "enable");
    assert_eq!(output.module.decls.len(), 2);
}

#[test]
fn test_directive_errors() {
    let (_, reporter) = parse_source("#extension GL_EXT_foo : maybe");
    assert_eq!(
        messages(&reporter),
        vec!["expected 'require', 'enable', 'warn', or 'disable'"]
    );
    let (_, reporter) = parse_source("#pragma");
    assert_eq!(messages(&reporter), vec!["unsupported directive '#pragma'"]);
}

#[test]
fn test_stray_semicolon() {
    let (output, reporter) = parse_source("; int x;");
    assert_eq!(
        messages(&reporter),
        vec!["expected a declaration, but found ';'"]
    );
    assert_eq!(output.module.decls.len(), 1);
}

#[test]
fn test_precision_statement_is_ignored() {
    let (output, reporter) = parse_source("precision mediump float; int x;");
    assert!(!reporter.has_errors());
    assert_eq!(output.module.decls.len(), 1);
}

#[test]
fn test_invalid_token_stops_parse() {
    let (output, reporter) = parse_source("int x; @ int y;");
    assert!(reporter.is_fatal());
    assert_eq!(messages(&reporter), vec!["invalid token"]);
    assert_eq!(output.module.decls.len(), 1);
}

#[test]
fn test_identifier_cannot_be_builtin_type() {
    let (_, reporter) = parse_source("float int;");
    assert_eq!(
        messages(&reporter),
        vec!["expected an identifier, but found type 'int'"]
    );
}

#[test]
fn test_unclosed_initializer_keeps_variable() {
    let (output, reporter) = parse_source("float x = (1 + 2;");
    assert_eq!(messages(&reporter), vec!["expected ')', but found ';'"]);
    let [Decl::Var(vars)] = output.module.decls.as_slice() else {
        panic!("expected declaration");
    };
    assert_eq!(vars.vars[0].name, "x");
    assert!(vars.vars[0].init.is_none());
}

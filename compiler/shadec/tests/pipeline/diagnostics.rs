use pretty_assertions::assert_eq;
use shadec::{compile, CompileError, ErrorCode, ProgramKind, ProgramSettings};

use crate::common::{compile_errors, compile_generic};

#[test]
fn test_syntax_errors_skip_semantic_analysis() {
    let result = compile_generic("float x = (1 + 2; float y = missing;");
    assert_eq!(result.messages(), vec!["expected ')', but found ';'"]);
}

#[test]
fn test_semantic_errors_in_separate_declarations_are_all_reported() {
    assert_eq!(
        compile_errors("float x = a; float y = true + 1.0; void f() { return 1; }"),
        vec![
            "unknown identifier 'a'",
            "type mismatch: '+' cannot operate on 'bool', 'float'",
            "may not return a value from a void function",
        ]
    );
}

#[test]
fn test_diagnostics_carry_codes_and_suggestions() {
    let result = compile_generic("float radius = 1.0; float area = radus * radus;");
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.code, ErrorCode::E2002);
    assert_eq!(diagnostic.suggestions, vec!["did you mean 'radius'?"]);
}

#[test]
fn test_rendered_diagnostics_name_the_location() {
    let source = "float x = 1.0;\nfloat y = z;";
    let rendered = compile_generic(source).render(source);
    assert!(rendered.contains("unknown identifier 'z'"), "{rendered}");
    assert!(rendered.contains("2:11"), "{rendered}");
}

#[test]
fn test_missing_main_fails_fragment_programs_only() {
    let source = "float helper() { return 1.0; }";
    let fragment = compile(source, ProgramKind::Fragment, ProgramSettings::default());
    let error = fragment.into_result().unwrap_err();
    assert_eq!(error.to_string(), "compilation failed with 1 error");
    let CompileError::Failed { diagnostics, .. } = error;
    assert_eq!(
        diagnostics[0].message,
        "program does not contain a 'main' function"
    );

    let generic = compile(source, ProgramKind::Generic, ProgramSettings::default());
    assert!(generic.into_result().is_ok());
}

#[test]
fn test_strict_mode_through_the_driver() {
    let settings = ProgramSettings::default().with_strict_es2_mode(true);
    let result = compile("int x = 7 % 2;", ProgramKind::Generic, settings);
    assert_eq!(result.messages(), vec!["operator '%' is not allowed"]);
    assert_eq!(result.diagnostics[0].code, ErrorCode::E3001);
}

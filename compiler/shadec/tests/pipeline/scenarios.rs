use pretty_assertions::assert_eq;
use shade_ir::BinaryOp;
use shade_sema::{ExpressionKind, ProgramElement, StatementKind};
use shade_types::Idx;
use shadec::{compile, ProgramKind, ProgramSettings};

use crate::common::compile_fragment;

#[test]
fn test_arithmetic_initializer_with_and_without_folding() {
    let source = "int x = 1 + 2 * 3;";
    for optimize in [false, true] {
        let settings = ProgramSettings::default().with_optimize(optimize);
        let program = compile(source, ProgramKind::Generic, settings)
            .into_result()
            .unwrap();
        let Some(ProgramElement::GlobalVars(decls)) = program.elements.first() else {
            panic!("expected global declaration");
        };
        let x = program.variable(decls.vars[0].var);
        assert_eq!(x.name, "x");
        assert_eq!(x.ty, Idx::INT);

        let value = decls.vars[0].value.as_ref().unwrap();
        if optimize {
            assert_eq!(value.kind, ExpressionKind::IntLiteral(7));
            continue;
        }
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
}

#[test]
fn test_call_argument_coerced_to_parameter_type() {
    let program = compile_fragment(
        "float f(float x) { return x; } void main() { float y = f(2); }",
        ProgramSettings::default(),
    );
    let main = program.find_function("main").unwrap();
    let StatementKind::Block { statements, .. } = &main.body.kind else {
        panic!("expected block");
    };
    let StatementKind::VarDeclarations(decls) = &statements[0].kind else {
        panic!("expected declaration");
    };
    let ExpressionKind::FunctionCall { arguments, .. } = &decls.vars[0].value.as_ref().unwrap().kind
    else {
        panic!("expected call");
    };
    assert_eq!(arguments[0].kind, ExpressionKind::FloatLiteral(2.0));
}

#[test]
fn test_constant_index_out_of_bounds_is_not_checked() {
    compile_fragment(
        "void main() { int a[3]; a[3] = 1; }",
        ProgramSettings::default(),
    );
}

#[test]
fn test_unmatched_parenthesis_reports_once() {
    let result = compile(
        "float x = (1 + 2;",
        ProgramKind::Generic,
        ProgramSettings::default(),
    );
    assert_eq!(result.messages(), vec!["expected ')', but found ';'"]);
    assert!(result.program.is_none());
}

#[test]
fn test_complete_fragment_program() {
    let source = "
        #extension GL_EXT_shader_framebuffer_fetch : enable
        layout(origin_upper_left) in;

        struct Light { vec3 direction; float intensity; };
        uniform Globals { Light light; vec4 tint; };
        uniform sampler2D image;
        in vec2 uv;
        out vec4 fragColor;

        float shade(vec3 normal) {
            float lambert = max(dot(normal, -light.direction), 0.0);
            return lambert * light.intensity;
        }

        void main() {
            vec4 base = texture(image, uv) * tint;
            if (base.a < 0.01) {
                discard;
            }
            float total = 0.0;
            for (int i = 0; i < 4; i++) {
                total += shade(normalize(vec3(uv, float(i))));
            }
            fragColor = vec4(base.rgb * clamp(total, 0.0, 1.0), base.a);
        }
    ";
    let settings = ProgramSettings::default().with_replace_settings(true);
    let program = compile_fragment(source, settings);
    assert_eq!(program.extensions().count(), 1);
    assert_eq!(program.function_definitions().count(), 2);
    assert!(program
        .elements
        .iter()
        .any(|element| matches!(element, ProgramElement::InterfaceBlock(_))));
}

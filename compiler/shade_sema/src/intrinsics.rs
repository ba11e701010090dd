//! Builtin function prelude.
//!
//! The intrinsics are declared in shade source and parsed once per process.
//! Generic signatures (`$genType` and friends) are expanded into concrete
//! overloads when the generator declares them in the root scope.

use std::sync::LazyLock;

use shade_diagnostic::ErrorReporter;
use shade_ir::ast::{Decl, FunctionDecl};
use shade_parse::ParseOutput;

const PRELUDE: &str = "
$genType radians($genType degrees);
$genType sin($genType angle);
$genType cos($genType angle);
$genType pow($genType x, $genType y);
$genType sqrt($genType x);
$genType abs($genType x);
$genIType abs($genIType x);
$genType floor($genType x);
$genType fract($genType x);
$genType min($genType x, $genType y);
$genType min($genType x, float y);
$genType max($genType x, $genType y);
$genType max($genType x, float y);
$genType clamp($genType x, $genType minVal, $genType maxVal);
$genType clamp($genType x, float minVal, float maxVal);
$genType mix($genType x, $genType y, $genType a);
$genType mix($genType x, $genType y, float a);
$genType step($genType edge, $genType x);
$genType smoothstep($genType edge0, $genType edge1, $genType x);
float length($genType x);
float distance($genType p0, $genType p1);
float dot($genType x, $genType y);
vec3 cross(vec3 x, vec3 y);
$genType normalize($genType x);
vec4 texture(sampler2D s, vec2 coord);
";

static INTRINSICS: LazyLock<ParseOutput> = LazyLock::new(|| {
    let mut reporter = ErrorReporter::new();
    let parsed = shade_parse::parse(PRELUDE, &mut reporter);
    debug_assert!(!reporter.has_errors(), "intrinsic prelude failed to parse");
    parsed
});

/// Function prototypes of the prelude, in declaration order.
///
/// Prototypes have no body, so nothing refers into the prelude's arena.
pub(crate) fn declarations() -> impl Iterator<Item = &'static FunctionDecl> {
    INTRINSICS.module.decls.iter().filter_map(|decl| match decl {
        Decl::Function(function) => Some(function),
        _ => None,
    })
}

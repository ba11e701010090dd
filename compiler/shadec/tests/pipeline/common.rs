//! Compile helpers shared by the pipeline tests.

use shadec::{compile, CompileResult, Program, ProgramKind, ProgramSettings};

/// Compile `source` as library code with default settings.
pub fn compile_generic(source: &str) -> CompileResult {
    compile(source, ProgramKind::Generic, ProgramSettings::default())
}

/// Compile `source` as a fragment program, failing on any diagnostic.
pub fn compile_fragment(source: &str, settings: ProgramSettings) -> Program {
    let result = compile(source, ProgramKind::Fragment, settings);
    assert!(
        result.diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        result.render(source)
    );
    result.program.expect("program without diagnostics")
}

/// Compile `source` as library code, which must fail, and return the messages.
pub fn compile_errors(source: &str) -> Vec<String> {
    let result = compile_generic(source);
    assert!(result.program.is_none(), "expected {source:?} to fail");
    result.messages().into_iter().map(str::to_string).collect()
}

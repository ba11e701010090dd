//! Compilation settings supplied by the embedding application.

use std::fmt;

/// Pipeline stage a program is compiled for.
///
/// Fragment and vertex programs must define `main`; `discard` is only
/// accepted in fragment and generic programs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ProgramKind {
    #[default]
    Fragment,
    Vertex,
    Geometry,
    /// Library code with no entry point.
    Generic,
}

impl ProgramKind {
    pub fn requires_main(self) -> bool {
        matches!(self, ProgramKind::Fragment | ProgramKind::Vertex)
    }

    pub fn allows_discard(self) -> bool {
        matches!(self, ProgramKind::Fragment | ProgramKind::Generic)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProgramKind::Fragment => "fragment",
            ProgramKind::Vertex => "vertex",
            ProgramKind::Geometry => "geometry",
            ProgramKind::Generic => "generic",
        }
    }
}

impl fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options that change what the IR generator accepts or produces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProgramSettings {
    /// Reject operators and types unavailable in ES2-class targets.
    pub strict_es2_mode: bool,
    /// Fold constant expressions while building the IR.
    pub optimize: bool,
    /// Let top-level `layout(...)` qualifier declarations override
    /// `origin_upper_left` and friends for the whole program.
    pub replace_settings: bool,
}

impl Default for ProgramSettings {
    fn default() -> Self {
        ProgramSettings {
            strict_es2_mode: false,
            optimize: true,
            replace_settings: false,
        }
    }
}

impl ProgramSettings {
    #[must_use]
    pub fn with_strict_es2_mode(mut self, strict: bool) -> Self {
        self.strict_es2_mode = strict;
        self
    }

    #[must_use]
    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    #[must_use]
    pub fn with_replace_settings(mut self, replace: bool) -> Self {
        self.replace_settings = replace;
        self
    }
}

//! Checkpoints for speculative parsing.
//!
//! Statements that start with a type name are ambiguous between a variable
//! declaration (`vec3 v = ...;`) and an expression (`vec3(1)...;`). The
//! parser tries the declaration prefix first and rewinds to a checkpoint if
//! it does not match.
//!
//! A checkpoint captures everything a failed attempt can touch:
//! - Token stream position and pushback slot
//! - Arena lengths, so speculative nodes are dropped
//! - Reporter length and fatal flag, so speculative errors vanish
//! - The span of the last consumed token

use shade_diagnostic::ReporterMark;
use shade_ir::ast::ArenaMark;
use shade_ir::Span;

use crate::stream::StreamState;
use crate::Parser;

#[derive(Copy, Clone, Debug)]
pub(crate) struct Checkpoint {
    stream: StreamState,
    arena: ArenaMark,
    reporter: ReporterMark,
    previous: Span,
    depth: u32,
}

impl Parser<'_, '_> {
    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            stream: self.stream.state(),
            arena: self.arena.mark(),
            reporter: self.reporter.mark(),
            previous: self.previous,
            depth: self.depth,
        }
    }

    pub(crate) fn rewind(&mut self, checkpoint: Checkpoint) {
        tracing::trace!("rewind");
        self.stream.restore(checkpoint.stream);
        self.arena.rewind(checkpoint.arena);
        self.reporter.rewind(checkpoint.reporter);
        self.previous = checkpoint.previous;
        self.depth = checkpoint.depth;
    }

    /// Run `f`, rewinding to the starting state if it returns `None`.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.checkpoint();
        let result = f(self);
        if result.is_none() {
            self.rewind(checkpoint);
        }
        result
    }
}

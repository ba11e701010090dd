//! Arena storage for expressions and statements.

use std::fmt;

use super::{Expr, Stmt};

/// Index into the expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index into the statement arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

/// Contiguous storage for every expression and statement of one unit.
///
/// Speculative parsing records [`AstArena::mark`] before trying a production
/// and calls [`AstArena::rewind`] on failure, dropping the nodes that were
/// allocated in between. Nothing outside the arena refers to them yet.
#[derive(Clone, Debug, Default)]
pub struct AstArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
}

/// Arena lengths captured by [`AstArena::mark`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ArenaMark {
    exprs: usize,
    stmts: usize,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len()).unwrap_or(u32::MAX);
        self.exprs.push(expr);
        ExprId::new(index)
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let index = u32::try_from(self.stmts.len()).unwrap_or(u32::MAX);
        self.stmts.push(stmt);
        StmtId::new(index)
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn mark(&self) -> ArenaMark {
        ArenaMark {
            exprs: self.exprs.len(),
            stmts: self.stmts.len(),
        }
    }

    pub fn rewind(&mut self, mark: ArenaMark) {
        self.exprs.truncate(mark.exprs);
        self.stmts.truncate(mark.stmts);
    }
}

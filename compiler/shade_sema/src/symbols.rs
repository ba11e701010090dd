//! Scoped symbol table.
//!
//! Uses a scope stack: the bottom scope holds builtin types and intrinsic
//! functions, the next one program globals, and each block, function body
//! or loop pushes another. Popping a scope drops every symbol declared
//! directly in it; the variables and functions themselves live on in the
//! program's arenas, so IR built while the scope was open stays valid.

use rustc_hash::{FxHashMap, FxHashSet};
use shade_types::Idx;

use crate::ir::{FunctionId, VariableId};

/// What a name resolves to.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Symbol {
    Variable(VariableId),
    Function(FunctionId),
    /// Overload set with more than one member, in declaration order.
    UnresolvedFunction(Vec<FunctionId>),
    Type(Idx),
    /// Member of an anonymous interface block, reached through its owner.
    Field { owner: VariableId, index: u32 },
}

impl Symbol {
    /// Overloads named by a function symbol; empty for everything else.
    pub fn overloads(&self) -> &[FunctionId] {
        match self {
            Symbol::Function(function) => std::slice::from_ref(function),
            Symbol::UnresolvedFunction(functions) => functions,
            _ => &[],
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Symbol::Function(_) | Symbol::UnresolvedFunction(_))
    }
}

/// Stack of name-to-symbol scopes. The innermost scope wins on lookup.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    scopes: Vec<FxHashMap<String, Symbol>>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// A table with a single (root) scope.
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![FxHashMap::default()],
        }
    }

    /// Number of open scopes, root included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// Drop the innermost scope. The root scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    fn current_mut(&mut self) -> &mut FxHashMap<String, Symbol> {
        if self.scopes.is_empty() {
            self.scopes.push(FxHashMap::default());
        }
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Declare `name` in the innermost scope.
    ///
    /// Returns `false`, leaving the table unchanged, when the innermost scope
    /// already declares `name`. Names in outer scopes may be shadowed.
    pub fn declare(&mut self, name: &str, symbol: Symbol) -> bool {
        let scope = self.current_mut();
        if scope.contains_key(name) {
            return false;
        }
        scope.insert(name.to_string(), symbol);
        true
    }

    /// Add `function` to the overload set visible under `name`.
    ///
    /// The merged set is stored in the innermost scope, so overloads declared
    /// here extend (rather than hide) overloads from outer scopes. Returns
    /// `false` when the innermost scope binds `name` to something other than
    /// a function.
    pub fn declare_function(&mut self, name: &str, function: FunctionId) -> bool {
        if self
            .lookup_local(name)
            .is_some_and(|symbol| !symbol.is_function())
        {
            return false;
        }
        let mut overloads = self
            .lookup(name)
            .map(|symbol| symbol.overloads().to_vec())
            .unwrap_or_default();
        if !overloads.contains(&function) {
            overloads.push(function);
        }
        let symbol = match overloads.as_slice() {
            [single] => Symbol::Function(*single),
            _ => Symbol::UnresolvedFunction(overloads),
        };
        tracing::trace!(name, ?symbol, "declare function");
        self.current_mut().insert(name.to_string(), symbol);
        true
    }

    /// Nearest declaration of `name`, searching outward.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Declaration of `name` in the innermost scope only.
    pub fn lookup_local(&self, name: &str) -> Option<&Symbol> {
        self.scopes.last().and_then(|scope| scope.get(name))
    }

    /// Every visible name, innermost scopes first, without duplicates.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let mut seen = FxHashSet::default();
        self.scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.keys())
            .map(String::as_str)
            .filter(move |name| seen.insert(*name))
    }

    /// Closest visible name to a misspelled `target`, for "did you mean"
    /// suggestions. `accept` filters candidates by symbol kind.
    pub fn find_similar(&self, target: &str, accept: impl Fn(&Symbol) -> bool) -> Option<String> {
        if target.is_empty() {
            return None;
        }
        let threshold = default_threshold(target.chars().count());
        let mut best: Option<(usize, &str)> = None;
        for name in self.names() {
            if name == target || name.starts_with('$') {
                continue;
            }
            if !self.lookup(name).is_some_and(&accept) {
                continue;
            }
            if target.len().abs_diff(name.len()) > threshold {
                continue;
            }
            let distance = edit_distance(target, name);
            if distance > threshold {
                continue;
            }
            // Closest first, then alphabetical for determinism.
            let better = match best {
                None => true,
                Some((best_distance, best_name)) => {
                    distance < best_distance || (distance == best_distance && name < best_name)
                }
            };
            if better {
                best = Some((distance, name));
            }
        }
        best.map(|(_, name)| name.to_string())
    }
}

/// Maximum edit distance for a suggestion. Never more than two edits.
fn default_threshold(name_len: usize) -> usize {
    match name_len {
        0 => 0,
        1..=2 => 1,
        _ => 2,
    }
}

/// Levenshtein distance between two strings.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, &b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[b_chars.len()]
}

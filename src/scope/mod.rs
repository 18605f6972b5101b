pub mod scanner;

use std::ops::Range;

pub use scanner::scan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeKind {
    Root,
    /// An `{{#each path}}` block; `path` is empty for a bare `{{#each}}`.
    Each { path: Vec<String> },
}

/// A node of the scope tree produced by [`scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub kind: ScopeKind,
    /// Text owned by this scope, with every nested each block cut out.
    pub body: String,
    pub children: Vec<Scope>,
    /// Byte range of the scope in the scanned text, markers included.
    pub span: Range<usize>,
}

impl Scope {
    pub fn is_root(&self) -> bool {
        matches!(self.kind, ScopeKind::Root)
    }

    /// Segments of the iterated array; empty for the root.
    pub fn iteration_path(&self) -> &[String] {
        match &self.kind {
            ScopeKind::Root => &[],
            ScopeKind::Each { path } => path,
        }
    }
}

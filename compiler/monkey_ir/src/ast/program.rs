//! Parsed program root.

use super::StmtRange;
use super::display::ProgramDisplay;
use crate::{SharedArena, StringInterner};

/// A parsed program: its top-level statements and the arena that owns them.
#[derive(Clone, Debug)]
pub struct Program {
    pub stmts: StmtRange,
    pub arena: SharedArena,
}

impl Program {
    pub fn new(stmts: StmtRange, arena: SharedArena) -> Self {
        Program { stmts, arena }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    /// Canonical source rendering.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ProgramDisplay<'a> {
        ProgramDisplay::new(&self.arena, self.stmts, interner)
    }
}

//! Arena indices and list ranges.

use crate::Name;
use std::fmt;
use std::marker::PhantomData;

/// Index of an expression in the arena.
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

/// Index of a statement in the arena.
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

/// Contiguous run of `T` in one of the arena's list stores.
///
/// The marker only ties a range to the store it indexes, so an
/// [`ExprRange`] can never be resolved against the statement list.
pub struct ListRange<T> {
    start: u32,
    len: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ListRange<T> {
    pub const EMPTY: Self = ListRange::new(0, 0);

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        ListRange {
            start,
            len,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn to_range(self) -> std::ops::Range<usize> {
        let start = self.start as usize;
        start..start + self.len as usize
    }
}

impl<T> Clone for ListRange<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListRange<T> {}

impl<T> PartialEq for ListRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.len == other.len
    }
}

impl<T> Eq for ListRange<T> {}

impl<T> fmt::Debug for ListRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.start + self.len)
    }
}

pub type ExprRange = ListRange<ExprId>;
pub type StmtRange = ListRange<StmtId>;
pub type ParamRange = ListRange<Name>;
pub type HashEntryRange = ListRange<super::HashEntry>;

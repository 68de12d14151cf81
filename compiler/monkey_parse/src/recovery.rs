//! Error recovery for the parser.
//!
//! After a statement fails the parser skips ahead to a statement boundary and
//! carries on, so one typo yields one error instead of aborting the parse.

use super::cursor::Cursor;
use monkey_ir::TokenKind;
use tracing::debug;

const _: () = assert!(
    TokenKind::COUNT <= 64,
    "TokenSet uses a u64 bitset; every TokenKind index must be < 64"
);

/// A set of token kinds as a bitset; one bit per `TokenKind` index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.index()))
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.index())) != 0
    }
}

/// Tokens that begin a statement the parser can restart on.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Let)
    .with(TokenKind::Return)
    .with(TokenKind::Eof);

/// Skip to the next statement boundary.
///
/// Stops in front of any token in `recovery`, or just past a `;`. Returns
/// `true` if a boundary was found before EOF.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    let start = cursor.position();
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            break;
        }
        if cursor.eat(TokenKind::Semicolon) {
            break;
        }
        cursor.advance();
    }
    debug!(
        skipped = cursor.position() - start,
        at = %cursor.current_kind(),
        "synchronized after parse error"
    );
    !cursor.is_at_end()
}

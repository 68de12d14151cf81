use super::*;

/// Owns the token list and interner so `Cursor` can borrow them.
struct TestCtx {
    tokens: TokenList,
    interner: StringInterner,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = monkey_lexer::tokenize(source, &interner);
        Self { tokens, interner }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens, &self.interner)
    }
}

#[test]
fn test_cursor_navigation() {
    let ctx = TestCtx::new("let x = 42");
    let mut cursor = ctx.cursor();

    assert!(cursor.check(TokenKind::Let));
    assert_eq!(cursor.peek_kind(), TokenKind::Ident);

    cursor.advance();
    assert!(cursor.check(TokenKind::Ident));
    cursor.advance();
    assert!(cursor.check(TokenKind::Assign));
    cursor.advance();
    assert!(cursor.check(TokenKind::Int));
    assert_eq!(cursor.peek_kind(), TokenKind::Eof);
    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn test_advance_stops_at_eof() {
    let ctx = TestCtx::new("x");
    let mut cursor = ctx.cursor();
    cursor.advance();
    let pos = cursor.position();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.position(), pos);
    assert!(cursor.is_at_end());
}

#[test]
fn test_expect_success() {
    let ctx = TestCtx::new("let x");
    let mut cursor = ctx.cursor();

    assert!(cursor.expect(TokenKind::Let).is_ok());
    let name = cursor.expect_ident();
    assert_eq!(name.map(|n| ctx.interner.lookup(n)), Ok("x"));
}

#[test]
fn test_expect_failure_reports_found_kind() {
    let ctx = TestCtx::new("let 5");
    let mut cursor = ctx.cursor();
    cursor.advance();

    let err = cursor.expect_ident();
    assert_eq!(
        err.map_err(|e| e.to_string()),
        Err("expected next token to be IDENT, got INT instead".to_string())
    );
    // Nothing consumed on failure.
    assert!(cursor.check(TokenKind::Int));
}

#[test]
fn test_eat() {
    let ctx = TestCtx::new("; x");
    let mut cursor = ctx.cursor();
    assert!(cursor.eat(TokenKind::Semicolon));
    assert!(!cursor.eat(TokenKind::Semicolon));
    assert!(cursor.check(TokenKind::Ident));
}

#[test]
fn test_spans() {
    let ctx = TestCtx::new("ab cd");
    let mut cursor = ctx.cursor();
    assert_eq!(cursor.previous_span(), Span::DUMMY);
    cursor.advance();
    assert_eq!(cursor.previous_span(), Span::new(0, 2));
    assert_eq!(cursor.current_span(), Span::new(3, 5));
}

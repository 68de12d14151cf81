//! Parser tests.
//!
//! - `parser`: statements, literals, and error reporting
//! - `precedence`: operator grouping checked through canonical rendering
//! - `roundtrip`: rendering is a fixed point under reparsing

mod roundtrip;

use crate::{parse, ParseOutput};
use monkey_ir::StringInterner;

/// Parse `source` with a fresh interner, returning both.
pub(crate) fn parse_source(source: &str) -> (ParseOutput, StringInterner) {
    let interner = StringInterner::new();
    let tokens = monkey_lexer::tokenize(source, &interner);
    let output = parse(&tokens, &interner);
    (output, interner)
}

/// Canonical rendering of `source`, asserting it parsed cleanly.
pub(crate) fn render(source: &str) -> String {
    let (output, interner) = parse_source(source);
    assert!(
        !output.has_errors(),
        "unexpected parse errors for {source:?}: {:?}",
        output.error_messages()
    );
    output.program.display(&interner).to_string()
}

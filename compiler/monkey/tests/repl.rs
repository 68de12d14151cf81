//! REPL transcripts driven through in-memory buffers.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use monkey::repl::{self, PROMPT};
use monkey::Session;
use pretty_assertions::assert_eq;

fn transcript(input: &str) -> String {
    let session = Session::new();
    let mut output = Vec::new();
    repl::start(input.as_bytes(), &mut output, &session).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn prompts_until_eof() {
    assert_eq!(transcript(""), PROMPT);
    assert_eq!(transcript("1\n"), ">> 1\n>> ");
}

#[test]
fn session_keeps_bindings() {
    let input = "let x = 5;\nlet double = fn(n) { n * 2 };\ndouble(x)\n";
    assert_eq!(transcript(input), ">> >> >> 10\n>> ");
}

#[test]
fn syntax_errors_are_tab_indented() {
    let input = "let x 5;\n";
    assert_eq!(
        transcript(input),
        ">> \texpected next token to be =, got INT instead\n>> "
    );
}

#[test]
fn multiple_syntax_errors() {
    let input = "let = 1; let 2;\n";
    assert_eq!(
        transcript(input),
        ">> \texpected next token to be IDENT, got = instead\n\
         \texpected next token to be IDENT, got INT instead\n>> "
    );
}

#[test]
fn runtime_errors_are_printed_and_session_continues() {
    let input = "5 + true\nlet y = 2;\ny\n";
    assert_eq!(
        transcript(input),
        ">> ERROR: type mismatch: INTEGER + BOOLEAN\n>> >> 2\n>> "
    );
}

#[test]
fn puts_output_precedes_result() {
    let input = "puts(\"hi\", 2)\n";
    assert_eq!(transcript(input), ">> hi\n2\nnull\n>> ");
}

#[test]
fn closures_across_lines() {
    let input = "\
let newAdder = fn(x) { fn(y) { x + y } };
let addTwo = newAdder(2);
addTwo(3)
addTwo
";
    assert_eq!(
        transcript(input),
        ">> >> >> 5\n>> fn(y) { (x + y) }\n>> "
    );
}

#[test]
fn collections_render() {
    let input = "[1, \"a\", {\"k\": true}]\n";
    assert_eq!(transcript(input), ">> [1, a, {k: true}]\n>> ");
}

#[test]
fn greeting_names_the_user() {
    assert_eq!(
        repl::greeting("ada"),
        "Hello ada! This is the Monkey programming language!\nFeel free to type in commands\n"
    );
}

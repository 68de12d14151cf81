use super::{error_message, inspect, parse_program, run_captured};
use crate::eval;
use crate::new_environment;
use monkey_ir::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn error_messages() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
        ("1 / 0", "division by zero"),
        ("1 == true", "type mismatch: INTEGER == BOOLEAN"),
        ("1[0]", "index operator not supported: INTEGER"),
        (r#"[1]["0"]"#, "index operator not supported: ARRAY[STRING]"),
    ];
    for (source, expected) in cases {
        assert_eq!(error_message(source), expected, "{source}");
    }
}

#[test]
fn arity_mismatch() {
    assert_eq!(
        error_message("let add = fn(a, b) { a + b }; add(1);"),
        "wrong number of arguments: want=2, got=1"
    );
    assert_eq!(
        error_message("fn() { 1 }(1, 2)"),
        "wrong number of arguments: want=0, got=2"
    );
}

#[test]
fn errors_inspect_with_prefix() {
    assert_eq!(inspect("foobar"), "ERROR: identifier not found: foobar");
}

#[test]
fn errors_pass_through_function_boundaries() {
    let source = "let f = fn() { missing }; let g = fn() { f(); 1 }; g()";
    assert_eq!(error_message(source), "identifier not found: missing");
}

#[test]
fn errors_stop_argument_evaluation() {
    let (result, output) = run_captured("puts(1, nope, puts(2))");
    assert_eq!(result.unwrap_err().to_string(), "identifier not found: nope");
    assert_eq!(output, "");
}

#[test]
fn errors_stop_array_and_hash_evaluation() {
    let (result, output) = run_captured("[puts(1), 1 + true, puts(2)]");
    assert_eq!(result.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
    assert_eq!(output, "1\n");
    let (result, output) = run_captured(r#"{"a": x, "b": puts(1)}"#);
    assert_eq!(result.unwrap_err().to_string(), "identifier not found: x");
    assert_eq!(output, "");
}

#[test]
fn error_in_condition_skips_branches() {
    let (result, output) = run_captured("if (1 + true) { puts(1) } else { puts(2) }");
    assert!(result.is_err());
    assert_eq!(output, "");
}

#[test]
fn error_carries_innermost_span() {
    let interner = StringInterner::new();
    let source = "let x = 1; x + (2 * foo)";
    let program = parse_program(source, &interner);
    let error = eval(&program, &new_environment(), &interner).unwrap_err();
    let span = error.span.unwrap();
    assert_eq!(&source[span.to_range()], "foo");
}

#[test]
fn overflow_is_reported() {
    assert_eq!(
        error_message("9223372036854775807 + 1"),
        "integer overflow: 9223372036854775807 + 1"
    );
}

#[test]
fn bindings_before_an_error_survive() {
    let interner = StringInterner::new();
    let env = new_environment();
    let program = parse_program("let a = 1; a + true; let b = 2;", &interner);
    assert!(eval(&program, &env, &interner).is_err());
    let check = parse_program("a", &interner);
    assert_eq!(eval(&check, &env, &interner).unwrap().inspect(&interner), "1");
    let missing = parse_program("b", &interner);
    assert!(eval(&missing, &env, &interner).is_err());
}

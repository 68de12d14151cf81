use super::{inspect, run};
use crate::Value;
use pretty_assertions::assert_eq;

#[test]
fn integer_expressions() {
    let cases = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source).unwrap(), Value::int(expected), "{source}");
    }
}

#[test]
fn boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 > 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("false != true", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == true", false),
        ("(1 > 2) == false", true),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source).unwrap(), Value::Bool(expected), "{source}");
    }
}

#[test]
fn bang_operator() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source).unwrap(), Value::Bool(expected), "{source}");
    }
}

#[test]
fn if_else_expressions() {
    let cases = [
        ("if (true) { 10 }", "10"),
        ("if (false) { 10 }", "null"),
        ("if (1) { 10 }", "10"),
        ("if (1 < 2) { 10 }", "10"),
        ("if (1 > 2) { 10 }", "null"),
        ("if (1 > 2) { 10 } else { 20 }", "20"),
        ("if (1 < 2) { 10 } else { 20 }", "10"),
        ("if (0) { 1 } else { 2 }", "1"),
        ("if (true) { }", "null"),
    ];
    for (source, expected) in cases {
        assert_eq!(inspect(source), expected, "{source}");
    }
}

#[test]
fn string_literals_and_concatenation() {
    assert_eq!(inspect(r#""Hello World!""#), "Hello World!");
    assert_eq!(inspect(r#""Hello" + " " + "World!""#), "Hello World!");
    assert_eq!(inspect(r#""a" == "a""#), "true");
    assert_eq!(inspect(r#""a" != "b""#), "true");
}

#[test]
fn empty_program_is_null() {
    assert_eq!(run("").unwrap(), Value::Null);
}

#[test]
fn function_values_inspect_as_source() {
    assert_eq!(inspect("fn(x) { x + 2; };"), "fn(x) { (x + 2) }");
    assert_eq!(inspect("fn() { }"), "fn() { }");
    assert_eq!(
        inspect("fn(a, b) { let c = a; return c * b; }"),
        "fn(a, b) { let c = a; return (c * b); }"
    );
    assert_eq!(inspect("len"), "builtin function");
}
